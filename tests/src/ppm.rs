#[cfg(test)]
mod tests {
    use kettle::{
        film::{Film, FilmTile},
        math::{Bounds2, Point2, Spectrum, Vec2},
        ppm::{write_ppm, PpmFormat},
    };

    fn film_with_sums(res: Vec2<u16>, sums: &[Spectrum]) -> Film {
        let mut film = Film::new(res);
        let mut tile = FilmTile::new(Bounds2::new(
            Point2::new(0, 0),
            Point2::new(res.x, res.y),
        ));
        tile.pixels.copy_from_slice(sums);
        film.update_tile(&tile);
        film
    }

    #[test]
    fn ascii_output_is_exact() {
        // With 4 samples, a sum of 1.0 averages to 0.25 and gamma maps it to
        // 0.5, quantizing to 128
        let film = film_with_sums(
            Vec2::new(2, 1),
            &[
                Spectrum::new(1.0, 4.0, 0.0),
                Spectrum::new(0.0, 1.0, 4.0),
            ],
        );

        let mut out = Vec::new();
        write_ppm(&mut out, &film, 4, PpmFormat::Ascii).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "P3\n2 1\n255\n128 255 0\n0 128 255\n"
        );
    }

    #[test]
    fn binary_output_is_exact() {
        let film = film_with_sums(
            Vec2::new(2, 1),
            &[
                Spectrum::new(1.0, 4.0, 0.0),
                Spectrum::new(0.0, 1.0, 4.0),
            ],
        );

        let mut out = Vec::new();
        write_ppm(&mut out, &film, 4, PpmFormat::Binary).unwrap();
        assert_eq!(out, b"P6\n2 1\n255\n\x80\xff\x00\x00\x80\xff");
    }

    #[test]
    fn values_above_one_clamp_to_white() {
        let film = film_with_sums(Vec2::new(1, 1), &[Spectrum::new(100.0, 100.0, 100.0)]);
        let mut out = Vec::new();
        write_ppm(&mut out, &film, 1, PpmFormat::Ascii).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "P3\n1 1\n255\n255 255 255\n");
    }

    #[test]
    fn rows_are_written_top_to_bottom() {
        // Row 0 holds white, row 1 black
        let film = film_with_sums(
            Vec2::new(1, 2),
            &[Spectrum::ones(), Spectrum::zeros()],
        );
        let mut out = Vec::new();
        write_ppm(&mut out, &film, 1, PpmFormat::Ascii).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "P3\n1 2\n255\n255 255 255\n0 0 0\n"
        );
    }
}
