use std::fs;
use std::path::Path;

use image::{Rgb, RgbImage};

use crate::error::Result;
use crate::image_buffer::ImageBuffer;

fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

pub fn write_png(path: impl AsRef<Path>, image: &ImageBuffer) -> Result<()> {
    let png = RgbImage::from_fn(image.width as u32, image.height as u32, |x, y| {
        let [r, g, b] = image.pixel_top_down(x as usize, y as usize);
        Rgb([to_u8(r), to_u8(g), to_u8(b)])
    });
    png.save(path)?;
    Ok(())
}

pub fn write_exr(path: impl AsRef<Path>, image: &ImageBuffer) -> Result<()> {
    exr::prelude::write_rgb_file(path, image.width, image.height, |x, y| {
        let [r, g, b] = image.pixel_top_down(x, y);
        (r, g, b)
    })?;
    Ok(())
}

/// Writes `output/<name>.png` and `output/<name>.exr`.
pub fn output_image(filename: Option<&String>, image: &ImageBuffer) -> Result<()> {
    let filename_str = filename.cloned().unwrap_or(String::from("output"));
    fs::create_dir_all("output")?;
    let exr_filename = format!("output/{}.exr", filename_str);
    let png_filename = format!("output/{}.png", filename_str);

    write_png(&png_filename, image)?;
    write_exr(&exr_filename, image)?;
    info!("wrote {} and {}", png_filename, exr_filename);
    Ok(())
}
