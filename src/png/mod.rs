//! Minimal png encoder for single-color 8-bit RGBA images.
//!
//! The output is always the signature followed by exactly one IHDR, one IDAT
//! and one IEND chunk. Scanlines are unfiltered and compressed with zlib.

use std::io;

use chunks::{idat::Idat, iend::Iend, ihdr::Ihdr};
use consts::{CHUNK_METADATA_LENGTH, PNG_SIGNATURE};
use crc::CrcCalculator;
use deflate::compress_scanlines;
use log::debug;
use serialization::{raw_size, solid_scanlines};
use thiserror::Error;

pub use config::{CompressionLevel, PngConfig};

use crate::colors::Rgba;

#[cfg(test)]
mod binary_utils;
mod chunks;
mod config;
pub mod consts;
mod crc;
mod deflate;
mod serialization;

#[derive(Debug, Error)]
pub enum PngEncodeError {
    #[error("invalid image dimensions {width}x{height}, both must be positive")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("raw image data for {width}x{height} does not fit in memory")]
    RasterTooLarge { width: u32, height: u32 },
    #[error("{chunk_type} chunk of {length} bytes exceeds the png chunk size limit")]
    ChunkTooLarge { chunk_type: String, length: usize },
    #[error("zlib compression failed")]
    Compression(#[from] io::Error),
}

pub fn encode_solid_png(width: u32, height: u32, color: Rgba) -> Result<Vec<u8>, PngEncodeError> {
    encode_solid_png_with_config(width, height, color, &PngConfig::default())
}

pub fn encode_solid_png_with_config(
    width: u32,
    height: u32,
    color: Rgba,
    config: &PngConfig,
) -> Result<Vec<u8>, PngEncodeError> {
    if width == 0 || height == 0 {
        return Err(PngEncodeError::InvalidDimensions { width, height });
    }

    let size =
        raw_size(width, height).ok_or(PngEncodeError::RasterTooLarge { width, height })?;
    let scanlines = solid_scanlines(width, height, &color, size);
    let compressed_data = compress_scanlines(&scanlines, config.compression_level)?;
    debug!(
        "encoded {width}x{height} {color:?}: {} raw bytes, {} compressed",
        scanlines.len(),
        compressed_data.len()
    );

    let mut crc = CrcCalculator::new();
    let mut encoded_png: Vec<u8> =
        Vec::with_capacity(compressed_data.len() + PNG_SIGNATURE.len() + 64);
    encoded_png.extend_from_slice(PNG_SIGNATURE);
    encoded_png.extend_from_slice(&Ihdr::new(width, height).to_bytes(&mut crc)?);
    encoded_png.extend_from_slice(&Idat::encode_bytes(&compressed_data, &mut crc)?);
    encoded_png.extend_from_slice(&Iend::to_bytes(&mut crc)?);
    debug_assert!(encoded_png.len() >= PNG_SIGNATURE.len() + 3 * CHUNK_METADATA_LENGTH);

    Ok(encoded_png)
}
