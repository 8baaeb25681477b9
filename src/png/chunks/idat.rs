use crate::png::{consts::IDAT_CHUNK_TYPE, crc::CrcCalculator, PngEncodeError};

use super::Chunk;

pub struct Idat;

impl Idat {
    /// The whole zlib stream goes into a single IDAT chunk.
    pub fn encode_bytes(
        bytes: &[u8],
        crc_calculator: &mut CrcCalculator,
    ) -> Result<Vec<u8>, PngEncodeError> {
        let chunk = Chunk::new(IDAT_CHUNK_TYPE, bytes, crc_calculator)?;

        Ok(chunk.to_bytes())
    }
}
