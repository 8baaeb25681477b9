use crate::png::{
    consts::{
        BIT_DEPTH, CHUNK_METADATA_LENGTH, COLOR_TYPE_TRUECOLOR_ALPHA, COMPRESSION_METHOD_DEFLATE,
        FILTER_METHOD_ADAPTIVE, IHDR_CHUNK_TYPE, IHDR_DATA_LENGTH, INTERLACE_METHOD_NONE,
    },
    crc::CrcCalculator,
    PngEncodeError,
};

use super::Chunk;

/// Image header for an 8-bit truecolor-with-alpha, non-interlaced image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ihdr {
    pub width: u32,
    pub height: u32,
}

impl Ihdr {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn data(&self) -> [u8; IHDR_DATA_LENGTH] {
        let mut data = [0; IHDR_DATA_LENGTH];
        data[0..4].copy_from_slice(&self.width.to_be_bytes());
        data[4..8].copy_from_slice(&self.height.to_be_bytes());
        data[8] = BIT_DEPTH;
        data[9] = COLOR_TYPE_TRUECOLOR_ALPHA;
        data[10] = COMPRESSION_METHOD_DEFLATE;
        data[11] = FILTER_METHOD_ADAPTIVE;
        data[12] = INTERLACE_METHOD_NONE;

        data
    }

    pub fn to_bytes(&self, crc_calculator: &mut CrcCalculator) -> Result<Vec<u8>, PngEncodeError> {
        let data = self.data();
        let chunk = Chunk::new(IHDR_CHUNK_TYPE, &data, crc_calculator)?;
        let bytes = chunk.to_bytes();
        debug_assert_eq!(bytes.len(), CHUNK_METADATA_LENGTH + IHDR_DATA_LENGTH);

        Ok(bytes)
    }
}
