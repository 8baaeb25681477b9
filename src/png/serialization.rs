use crate::colors::Rgba;

use super::consts::{BYTES_PER_PIXEL, FILTER_TYPE_NONE};

/// Number of raw scanline bytes for an image: one filter byte per row plus the pixels.
pub fn raw_size(width: u32, height: u32) -> Option<usize> {
    let scanline = (width as usize)
        .checked_mul(BYTES_PER_PIXEL)?
        .checked_add(1)?;

    scanline.checked_mul(height as usize)
}

/// Unfiltered scanlines of a single-color image, ready for compression.
pub fn solid_scanlines(width: u32, height: u32, color: &Rgba, size: usize) -> Vec<u8> {
    let pixel = color.to_bytes();
    let mut scanlines: Vec<u8> = Vec::with_capacity(size);

    for _row in 0..height {
        scanlines.push(FILTER_TYPE_NONE);

        for _col in 0..width {
            scanlines.extend_from_slice(&pixel);
        }
    }

    debug_assert_eq!(scanlines.len(), size);
    scanlines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_row_starts_with_a_none_filter() {
        let color = Rgba::new(1, 2, 3, 4);
        let size = raw_size(3, 2).unwrap();
        let scanlines = solid_scanlines(3, 2, &color, size);

        assert_eq!(size, 26);
        assert_eq!(
            scanlines,
            [
                0, 1, 2, 3, 4, 1, 2, 3, 4, 1, 2, 3, 4, //
                0, 1, 2, 3, 4, 1, 2, 3, 4, 1, 2, 3, 4,
            ]
        );
    }

    #[test]
    fn raw_size_follows_row_layout() {
        assert_eq!(raw_size(22, 22), Some(22 * (1 + 4 * 22)));
        assert_eq!(raw_size(256, 256), Some(256 * 1025));
        assert_eq!(raw_size(0, 5), Some(5));
    }
}
