#[cfg(test)]
mod tests {
    use kettle::{
        film::{film_tiles, Film, FilmSettings, FilmTile},
        math::{Bounds2, Point2, Spectrum, Vec2},
    };

    #[test]
    fn tiles_cover_film_exactly_once() {
        let settings = FilmSettings {
            res: Vec2::new(100, 60),
            tile_dim: 16,
        };
        let mut covered = vec![0u32; 100 * 60];
        for tile in film_tiles(&settings) {
            assert!(tile.bb.p_max.x <= 100);
            assert!(tile.bb.p_max.y <= 60);
            assert!(tile.bb.p_min.x < tile.bb.p_max.x);
            assert!(tile.bb.p_min.y < tile.bb.p_max.y);
            for y in tile.bb.p_min.y..tile.bb.p_max.y {
                for x in tile.bb.p_min.x..tile.bb.p_max.x {
                    covered[(y as usize) * 100 + (x as usize)] += 1;
                }
            }
        }
        assert!(covered.iter().all(|&c| c == 1));
    }

    #[test]
    fn tiles_are_row_major() {
        let settings = FilmSettings {
            res: Vec2::new(32, 32),
            tile_dim: 16,
        };
        let tiles = film_tiles(&settings);
        assert_eq!(tiles.len(), 4);
        let mins: Vec<Point2<u16>> = tiles.iter().map(|t| t.bb.p_min).collect();
        assert_eq!(
            mins,
            vec![
                Point2::new(0, 0),
                Point2::new(16, 0),
                Point2::new(0, 16),
                Point2::new(16, 16),
            ]
        );
    }

    #[test]
    fn edge_tiles_are_clipped() {
        let settings = FilmSettings {
            res: Vec2::new(33, 17),
            tile_dim: 16,
        };
        let tiles = film_tiles(&settings);
        assert_eq!(tiles.len(), 6);
        let last = tiles.back().unwrap();
        assert_eq!(last.bb.p_min, Point2::new(32, 16));
        assert_eq!(last.bb.p_max, Point2::new(33, 17));
        assert_eq!(last.pixels.len(), 1);
    }

    #[test]
    fn tiles_start_zeroed() {
        let settings = FilmSettings::default();
        let tiles = film_tiles(&settings);
        assert!(tiles
            .iter()
            .all(|t| t.pixels.iter().all(|p| p.is_black())));
    }

    #[test]
    fn update_tile_writes_back() {
        let mut film = Film::new(Vec2::new(8, 8));

        let bb = Bounds2::new(Point2::new(2, 4), Point2::new(6, 8));
        let mut tile = FilmTile::new(bb);
        let value = Spectrum::new(1.0, 2.0, 3.0);
        for pixel in &mut tile.pixels {
            *pixel = value;
        }
        film.update_tile(&tile);

        for y in 0..8u16 {
            for x in 0..8u16 {
                let pixel = film.pixels()[(y as usize) * 8 + (x as usize)];
                let inside = (2..6).contains(&x) && (4..8).contains(&y);
                if inside {
                    assert_eq!(pixel, value);
                } else {
                    assert!(pixel.is_black());
                }
            }
        }
    }
}
