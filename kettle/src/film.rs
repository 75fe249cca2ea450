use std::collections::VecDeque;

use crate::math::{Bounds2, Point2, Spectrum, Vec2};

/// The settings for a `Film`.
#[derive(Debug, Copy, Clone)]
pub struct FilmSettings {
    /// The total film resolution.
    pub res: Vec2<u16>,
    /// The tile size to be used.
    pub tile_dim: u16,
}

impl Default for FilmSettings {
    fn default() -> Self {
        Self {
            res: Vec2::new(640, 480),
            tile_dim: 16,
        }
    }
}

/// A film tile used for rendering.
///
/// Pixels hold raw radiance sums; dividing by the sample count happens at
/// image write. A tile is owned exclusively by the worker rendering it.
#[derive(Debug, Clone)]
pub struct FilmTile {
    /// The [Film] pixel bounds for this tile.
    pub bb: Bounds2<u16>,
    /// Pixel sums in this tile stored in row-major RGB order.
    pub pixels: Vec<Spectrum>,
}

impl FilmTile {
    /// Creates a new zeroed `FilmTile` with the given [Bounds2].
    pub fn new(bb: Bounds2<u16>) -> Self {
        let d = bb.diagonal();
        FilmTile {
            bb,
            pixels: vec![Spectrum::zeros(); (d.x as usize) * (d.y as usize)],
        }
    }
}

/// Pixel sum buffer for a full render, assembled from [FilmTile]s.
pub struct Film {
    res: Vec2<u16>,
    pixels: Vec<Spectrum>,
}

impl Film {
    /// Creates a zeroed `Film` of resolution `res`.
    pub fn new(res: Vec2<u16>) -> Self {
        Self {
            res,
            pixels: vec![Spectrum::zeros(); (res.x as usize) * (res.y as usize)],
        }
    }

    /// Returns the resolution of this `Film`.
    pub fn res(&self) -> Vec2<u16> {
        self.res
    }

    /// Returns a reference to the pixels of this `Film`, row-major with row 0
    /// at the top.
    pub fn pixels(&self) -> &[Spectrum] {
        &self.pixels
    }

    /// Copies a finished [FilmTile]'s rows into this `Film`.
    pub fn update_tile(&mut self, tile: &FilmTile) {
        let tile_min = tile.bb.p_min;
        let tile_max = tile.bb.p_max;
        assert!(
            tile_max.x <= self.res.x && tile_max.y <= self.res.y,
            "Tile doesn't fit film ({:?} {:?})",
            self.res,
            tile.bb
        );

        let tile_width = (tile_max.x - tile_min.x) as usize;
        for (tile_row, film_row) in ((tile_min.y as usize)..(tile_max.y as usize)).enumerate() {
            let film_row_offset = film_row * (self.res.x as usize);
            let film_slice_start = film_row_offset + (tile_min.x as usize);
            let film_slice_end = film_row_offset + (tile_max.x as usize);

            let tile_slice_start = tile_row * tile_width;
            let tile_slice_end = (tile_row + 1) * tile_width;

            self.pixels[film_slice_start..film_slice_end]
                .copy_from_slice(&tile.pixels[tile_slice_start..tile_slice_end]);
        }
    }
}

/// Splits a film of `settings.res` into zeroed tiles of at most
/// `settings.tile_dim` per side, in row-major order.
pub fn film_tiles(settings: &FilmSettings) -> VecDeque<FilmTile> {
    assert!(settings.tile_dim > 0, "Zero tile dimension");

    let dim = settings.tile_dim;
    let mut tiles = VecDeque::new();
    for j in (0..settings.res.y).step_by(dim as usize) {
        for i in (0..settings.res.x).step_by(dim as usize) {
            // Limit tiles to film dimensions
            let max_x = (i + dim).min(settings.res.x);
            let max_y = (j + dim).min(settings.res.y);

            tiles.push_back(FilmTile::new(Bounds2::new(
                Point2::new(i, j),
                Point2::new(max_x, max_y),
            )));
        }
    }
    tiles
}
