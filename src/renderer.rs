use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use log::info;
use pbr::ProgressBar;
use rayon::prelude::*;

use crate::camera::Camera;
use crate::error::RenderError;
use crate::film::Film;
use crate::math::Color;
use crate::scene::Scene;
use crate::shading::Shading;

/// Knobs that do not change the rendered image.
#[derive(Copy, Clone, Debug, Default)]
pub struct RenderOptions {
    pub show_progress: bool,
}

/// Render one frame. Pure in its inputs: identical scene, camera, policy and
/// resolution always produce the identical film.
///
/// Each pixel reads only the immutable scene and writes only its own cell,
/// so the pixel loop runs on the rayon pool with no locking.
pub fn render_film(
    scene: &Scene,
    camera: &Camera,
    shading: Shading,
    width: usize,
    height: usize,
    options: RenderOptions,
) -> Result<Film<Color>, RenderError> {
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidResolution { width, height });
    }

    info!(
        "rendering {}x{} on {} threads",
        width,
        height,
        rayon::current_num_threads()
    );
    let now = Instant::now();

    let mut film = Film::new(width, height, scene.background);

    let pixel_count = Arc::new(AtomicUsize::new(0));
    let watcher = if options.show_progress {
        let total = width * height;
        let counter = Arc::clone(&pixel_count);
        Some(thread::spawn(move || {
            let mut pb = ProgressBar::new(total as u64);
            let mut seen = 0;
            while seen < total {
                let done = counter.load(Ordering::Relaxed);
                pb.add((done - seen) as u64);
                seen = done;
                thread::sleep(Duration::from_millis(250));
            }
            pb.finish();
        }))
    } else {
        None
    };

    film.buffer.par_iter_mut().enumerate().for_each(|(i, pixel)| {
        let x = i % width;
        let y = i / width;

        let ray = camera.get_ray(x, y, width, height);
        *pixel = match scene.trace(ray) {
            Some(hit) => shading.shade(&hit, ray, &scene.lights),
            None => scene.background,
        };

        if options.show_progress {
            pixel_count.fetch_add(1, Ordering::Relaxed);
        }
    });

    if let Some(watcher) = watcher {
        // exits once every pixel is accounted for
        let _ = watcher.join();
    }

    info!("rendered in {:.2?}", now.elapsed());
    Ok(film)
}

/// Render straight to the RGBA byte buffer handed to display sinks. The
/// caller owns the buffer; the kernel never reads it back.
pub fn render(
    scene: &Scene,
    camera: &Camera,
    shading: Shading,
    width: usize,
    height: usize,
    options: RenderOptions,
) -> Result<Vec<u8>, RenderError> {
    render_film(scene, camera, shading, width, height, options).map(|film| film.to_rgba_bytes())
}
