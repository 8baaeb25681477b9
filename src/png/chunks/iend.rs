use crate::png::{consts::IEND_CHUNK_TYPE, crc::CrcCalculator, PngEncodeError};

use super::Chunk;

pub struct Iend;

impl Iend {
    pub fn to_bytes(crc_calculator: &mut CrcCalculator) -> Result<Vec<u8>, PngEncodeError> {
        let chunk = Chunk::new(IEND_CHUNK_TYPE, &[], crc_calculator)?;

        Ok(chunk.to_bytes())
    }
}
