//! Pixel extraction for a mapped crop region.
//!
//! Copies the crop window out of the source buffer at 1:1 source
//! resolution. The preview canvas does any display scaling afterwards with
//! the browser's high-quality resampling; this copy never resamples.

use crate::mapping::CropRegion;
use crate::source::SourceImage;

/// Extract a crop region from a source image.
///
/// The region arrives in continuous source-pixel coordinates from the
/// coordinate mapper. The window is floored to whole pixels and bounded to
/// the actual buffer: the mapper only clamps the low side, so a selection
/// reaching past the drawn image can describe a window extending beyond the
/// natural size, and the copy must not read outside the allocation.
///
/// The output is never smaller than 1x1.
pub fn extract_region(image: &SourceImage, region: &CropRegion) -> SourceImage {
    let px_left = (region.x.max(0.0) as u32).min(image.width.saturating_sub(1));
    let px_top = (region.y.max(0.0) as u32).min(image.height.saturating_sub(1));
    let px_right = px_left
        .saturating_add(region.width.max(0.0) as u32)
        .min(image.width);
    let px_bottom = px_top
        .saturating_add(region.height.max(0.0) as u32)
        .min(image.height);

    let out_width = px_right.saturating_sub(px_left).max(1);
    let out_height = px_bottom.saturating_sub(px_top).max(1);

    let mut output = vec![0u8; (out_width * out_height * 3) as usize];

    // Copy row by row
    for y in 0..out_height {
        let src_y = px_top + y;
        let src_row_start = ((src_y * image.width + px_left) * 3) as usize;
        let dst_row_start = (y * out_width * 3) as usize;
        let row_len = (out_width * 3) as usize;

        output[dst_row_start..dst_row_start + row_len]
            .copy_from_slice(&image.pixels[src_row_start..src_row_start + row_len]);
    }

    SourceImage {
        width: out_width,
        height: out_height,
        pixels: output,
    }
}
