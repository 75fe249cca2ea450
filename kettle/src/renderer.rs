use std::{
    collections::VecDeque,
    sync::Mutex,
    time::Instant,
};

use crate::{
    camera::{Camera, CameraSample},
    film::{film_tiles, Film, FilmSettings, FilmTile},
    integrator::PathIntegrator,
    math::Point2,
    sampling::Sampler,
    scene::Scene,
};

#[derive(Copy, Clone, Debug)]
pub struct RenderOptions {
    pub samples_per_pixel: u32,
    pub max_depth: u32,
    pub seed: u64,
    /// Worker count, defaulting to the machine's logical cores.
    pub threads: Option<usize>,
}

#[derive(Copy, Clone, Debug)]
pub struct RenderStats {
    pub rays: usize,
    pub secs: f32,
}

/// Renders `scene` through `camera` into a new [Film].
///
/// Tiles are pulled from a shared queue by worker threads. Each tile gets its
/// own sample stream keyed on the tile's queue index, so output is identical
/// for any thread count.
pub fn render(
    scene: &Scene,
    camera: &Camera,
    film_settings: FilmSettings,
    options: RenderOptions,
) -> (Film, RenderStats) {
    assert!(options.samples_per_pixel > 0, "Zero samples per pixel");

    let start = Instant::now();

    let tiles: Mutex<VecDeque<(usize, FilmTile)>> =
        Mutex::new(film_tiles(&film_settings).into_iter().enumerate().collect());
    let film = Mutex::new(Film::new(film_settings.res));

    let thread_count = options.threads.unwrap_or_else(num_cpus::get).max(1);
    let integrator = PathIntegrator {
        max_depth: options.max_depth,
    };

    let total_rays: usize = std::thread::scope(|scope| {
        let workers: Vec<_> = (0..thread_count)
            .map(|_| {
                scope.spawn(|| {
                    let mut rays = 0;
                    loop {
                        let (tile_index, mut tile) = {
                            let mut queue = tiles.lock().unwrap();
                            match queue.pop_front() {
                                Some(work) => work,
                                None => break,
                            }
                        };

                        rays += render_tile(
                            scene,
                            camera,
                            &integrator,
                            options.samples_per_pixel,
                            options.seed,
                            tile_index,
                            &mut tile,
                        );

                        film.lock().unwrap().update_tile(&tile);
                    }
                    rays
                })
            })
            .collect();

        workers.into_iter().map(|w| w.join().unwrap()).sum()
    });

    let stats = RenderStats {
        rays: total_rays,
        secs: start.elapsed().as_secs_f32(),
    };
    log::info!(
        "Traced {} rays in {:.2}s ({:.2} Mrays/s)",
        stats.rays,
        stats.secs,
        (stats.rays as f32) / stats.secs * 1e-6
    );

    (film.into_inner().unwrap(), stats)
}

/// Accumulates `samples_per_pixel` radiance samples into every pixel of
/// `tile`, returning the number of rays traced.
fn render_tile(
    scene: &Scene,
    camera: &Camera,
    integrator: &PathIntegrator,
    samples_per_pixel: u32,
    seed: u64,
    tile_index: usize,
    tile: &mut FilmTile,
) -> usize {
    let mut sampler = Sampler::new(seed, tile_index as u64);
    let tile_width = (tile.bb.p_max.x - tile.bb.p_min.x) as usize;

    let mut rays = 0;
    for y in tile.bb.p_min.y..tile.bb.p_max.y {
        for x in tile.bb.p_min.x..tile.bb.p_max.x {
            let pixel_index = ((y - tile.bb.p_min.y) as usize) * tile_width
                + ((x - tile.bb.p_min.x) as usize);

            for _ in 0..samples_per_pixel {
                let jitter = sampler.get_2d();
                let p_film = Point2::new(f32::from(x) + jitter.x, f32::from(y) + jitter.y);
                let ray = camera.ray(&CameraSample { p_film });

                let result = integrator.li(ray, scene, &mut sampler);
                tile.pixels[pixel_index] += result.li;
                rays += result.rays;
            }
        }
    }
    rays
}
