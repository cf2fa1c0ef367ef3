//! Renders the whole tape to a PNG file.

use std::path::Path;

use anyhow::{Context, Result};
use image::{ImageFormat, RgbImage};
use punchtape_core::{Config, Drawable, PixelCanvas, Rgb, TapeModel, TapeView};

/// Refuse exports that would need more than this many pixels in memory.
const MAX_EXPORT_PIXELS: u64 = 256 * 1024 * 1024;

pub fn run(model: TapeModel, config: &Config, path: &Path) -> Result<()> {
    let width = u32::try_from(model.tape_width()).context("tape too wide to export")?;
    let height = u32::try_from(model.tape_height()).context("tape too tall to export")?;
    let pixels = u64::from(width) * u64::from(height);
    if pixels > MAX_EXPORT_PIXELS {
        anyhow::bail!(
            "tape image would be {width}x{height} pixels, over the export limit of {MAX_EXPORT_PIXELS}"
        );
    }

    let mut view = TapeView::new(model, config.palette, config.viewer.thumb_fraction);
    view.on_resize(i64::from(width), i64::from(height));

    let mut canvas = PixelCanvas::new(width as usize, height as usize);
    view.render(&mut canvas);

    let image = to_image(&canvas);
    image
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("write {}", path.display()))?;

    tracing::info!(path = %path.display(), width, height, "tape exported");
    Ok(())
}

fn to_image(canvas: &PixelCanvas) -> RgbImage {
    RgbImage::from_fn(canvas.width() as u32, canvas.height() as u32, |x, y| {
        let rgb = canvas
            .get(x as usize, y as usize)
            .unwrap_or(Rgb::BLACK);
        image::Rgb([rgb.0, rgb.1, rgb.2])
    })
}
