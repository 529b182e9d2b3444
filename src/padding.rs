use image::{DynamicImage, RgbaImage};

/// Add exactly 1 to each odd dimension; even dimensions pass through.
pub fn even_dimensions(width: u32, height: u32) -> (u32, u32) {
    (width + width % 2, height + height % 2)
}

/// Pad an image to even dimensions on a fully transparent RGBA canvas.
///
/// Returns `None` when both dimensions are already even. The source is
/// composited at (0,0), so the added row/column always lands on the bottom
/// and/or right edge.
pub fn pad_to_even(img: &DynamicImage) -> Option<RgbaImage> {
    let (width, height) = (img.width(), img.height());
    let (new_width, new_height) = even_dimensions(width, height);

    if new_width == width && new_height == height {
        return None;
    }

    // RgbaImage::new zero-fills, so every pixel starts as (0,0,0,0)
    let mut canvas = RgbaImage::new(new_width, new_height);
    image::imageops::overlay(&mut canvas, img, 0, 0);
    Some(canvas)
}
