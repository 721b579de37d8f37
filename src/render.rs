use std::time::Instant;

use rayon::prelude::*;

use crate::camera::Camera;
use crate::image_buffer::{ImageBuffer, BLACK, CHANNELS, WHITE};
use crate::scene::Scene;

#[inline]
fn shade(camera: &Camera, scene: &Scene, i: usize, j: usize, nx: usize, ny: usize) -> [f32; 3] {
    let ray = camera.generate_ray(i as i32, j as i32, nx, ny);
    match scene.find_nearest(ray) {
        Some(_) => WHITE,
        None => BLACK,
    }
}

pub fn render(camera: &Camera, scene: &Scene, width: usize, height: usize) -> ImageBuffer {
    let mut image = ImageBuffer::new(width, height);
    render_into(&mut image, camera, scene, width, height);
    image
}

/// Rebuilds `image` from scratch at `width` x `height`.
///
/// Rows are filled in parallel; each row slice belongs to exactly one worker and the call
/// only returns once every row is written.
pub fn render_into(
    image: &mut ImageBuffer,
    camera: &Camera,
    scene: &Scene,
    width: usize,
    height: usize,
) {
    let now = Instant::now();
    image.reset(width, height);
    if width == 0 || height == 0 {
        warn!("skipping render of empty {}x{} image", width, height);
        return;
    }
    let row_len = image.row_len();
    image
        .buffer
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(j, row)| {
            for (i, pixel) in row.chunks_exact_mut(CHANNELS).enumerate() {
                pixel.copy_from_slice(&shade(camera, scene, i, j, width, height));
            }
        });
    debug!(
        "rendered {}x{} against {} surfaces in {:?}",
        width,
        height,
        scene.len(),
        now.elapsed()
    );
}

#[cfg(test)]
pub(crate) fn render_serial(
    camera: &Camera,
    scene: &Scene,
    width: usize,
    height: usize,
) -> ImageBuffer {
    let mut image = ImageBuffer::new(width, height);
    for j in 0..height {
        for i in 0..width {
            image.set_pixel(i, j, shade(camera, scene, i, j, width, height));
        }
    }
    image
}
