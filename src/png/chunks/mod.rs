use super::{
    consts::{CHUNK_MAX_DATA_LENGTH, CHUNK_METADATA_LENGTH},
    crc::CrcCalculator,
    PngEncodeError,
};

pub mod idat;
pub mod iend;
pub mod ihdr;

#[derive(Debug)]
pub struct Chunk<'a> {
    pub chunk_type: &'a [u8],
    pub chunk_data: &'a [u8],
    pub crc: u32,
}

impl<'a> Chunk<'a> {
    pub fn new(
        chunk_type: &'a [u8],
        chunk_data: &'a [u8],
        crc_calculator: &mut CrcCalculator,
    ) -> Result<Chunk<'a>, PngEncodeError> {
        if chunk_data.len() > CHUNK_MAX_DATA_LENGTH {
            return Err(PngEncodeError::ChunkTooLarge {
                chunk_type: String::from_utf8_lossy(chunk_type).into_owned(),
                length: chunk_data.len(),
            });
        }

        let crc = crc_calculator.checksum(&[chunk_type, chunk_data]);

        Ok(Self {
            chunk_type,
            chunk_data,
            crc,
        })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let length = self.chunk_data.len();
        let mut result = Vec::with_capacity(CHUNK_METADATA_LENGTH + length);

        // length is bounded by CHUNK_MAX_DATA_LENGTH in Chunk::new
        result.extend_from_slice(&(length as u32).to_be_bytes());
        result.extend_from_slice(self.chunk_type);
        result.extend_from_slice(self.chunk_data);
        result.extend_from_slice(&self.crc.to_be_bytes());

        result
    }

    /// Reads one serialized chunk starting at `offset`, advancing it past the crc.
    #[cfg(test)]
    pub fn from_bytes(bytes: &'a [u8], offset: &mut usize) -> Option<Chunk<'a>> {
        use super::binary_utils::{read_bytes, read_u32};

        let length = read_u32(offset, bytes)?;
        let chunk_type = read_bytes(offset, bytes, 4)?;
        let chunk_data = read_bytes(offset, bytes, length as usize)?;
        let crc = read_u32(offset, bytes)?;

        Some(Chunk {
            chunk_type,
            chunk_data,
            crc,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_length_type_data_and_crc() {
        let mut crc = CrcCalculator::new();
        let chunk = Chunk::new(b"tEXt", b"abc", &mut crc).unwrap();
        let bytes = chunk.to_bytes();

        assert_eq!(bytes.len(), CHUNK_METADATA_LENGTH + 3);
        assert_eq!(&bytes[0..4], &3u32.to_be_bytes());
        assert_eq!(&bytes[4..8], b"tEXt");
        assert_eq!(&bytes[8..11], b"abc");
        assert_eq!(
            &bytes[11..15],
            &crc.checksum(&[&b"tEXt"[..], &b"abc"[..]]).to_be_bytes()
        );
    }

    #[test]
    fn parses_back_what_it_writes() {
        let mut crc = CrcCalculator::new();
        let bytes = Chunk::new(b"IDAT", &[1, 2, 3, 4, 5], &mut crc)
            .unwrap()
            .to_bytes();
        let mut offset = 0;
        let parsed = Chunk::from_bytes(&bytes, &mut offset).unwrap();

        assert_eq!(offset, bytes.len());
        assert_eq!(parsed.chunk_type, b"IDAT");
        assert_eq!(parsed.chunk_data, &[1, 2, 3, 4, 5]);
        assert_eq!(parsed.crc, crc.checksum(&[&b"IDAT"[..], &[1, 2, 3, 4, 5][..]]));
    }

    #[test]
    fn truncated_chunk_is_not_parsed() {
        let mut crc = CrcCalculator::new();
        let bytes = Chunk::new(b"IDAT", &[9; 8], &mut crc).unwrap().to_bytes();
        let mut offset = 0;

        assert!(Chunk::from_bytes(&bytes[..bytes.len() - 1], &mut offset).is_none());
    }
}
