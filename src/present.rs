use std::time::Duration;

use minifb::{Key, ScaleMode, Window, WindowOptions};

use crate::app::AppContext;
use crate::error::Result;
use crate::image_buffer::ImageBuffer;

pub const WINDOW_TITLE: &str = "Simple Ray Tracer";

fn to_channel(v: f32) -> u32 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u32
}

pub fn pack_rgb(rgb: [f32; 3]) -> u32 {
    to_channel(rgb[0]) << 16 | to_channel(rgb[1]) << 8 | to_channel(rgb[2])
}

/// Converts to minifb's 0RGB layout. minifb draws row 0 at the top, so rows are flipped.
pub fn to_window_pixels(image: &ImageBuffer, pixels: &mut Vec<u32>) {
    pixels.clear();
    pixels.reserve(image.width * image.height);
    for y in 0..image.height {
        for x in 0..image.width {
            pixels.push(pack_rgb(image.pixel_top_down(x, y)));
        }
    }
}

/// Shows the rendered image until the window is closed or Escape is pressed,
/// re-rendering whenever the framebuffer changes size.
pub fn run(ctx: &mut AppContext) -> Result<()> {
    let (width, height) = ctx.render_size;
    let mut window = Window::new(
        WINDOW_TITLE,
        width,
        height,
        WindowOptions {
            resize: true,
            scale_mode: ScaleMode::Stretch,
            ..WindowOptions::default()
        },
    )?;
    window.limit_update_rate(Some(Duration::from_micros(16600))); // 60fps max

    ctx.render();
    let mut pixels = Vec::new();
    to_window_pixels(&ctx.image, &mut pixels);

    let mut window_size = window.get_size();
    while window.is_open() && !window.is_key_down(Key::Escape) {
        let size = window.get_size();
        if size != window_size {
            window_size = size;
            if ctx.on_resize(size.0, size.1) {
                to_window_pixels(&ctx.image, &mut pixels);
            }
        }
        window.update_with_buffer(&pixels, ctx.image.width, ctx.image.height)?;
    }
    info!("window closed");
    Ok(())
}
