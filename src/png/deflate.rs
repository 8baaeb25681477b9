use std::io::{self, Write};

use flate2::{write::ZlibEncoder, Compression};

use super::config::CompressionLevel;

pub fn compress_scanlines(scanlines: &[u8], level: CompressionLevel) -> io::Result<Vec<u8>> {
    let mut e = ZlibEncoder::new(
        Vec::with_capacity(scanlines.len() / 2),
        Compression::new(level.to_zlib_u8() as u32),
    );
    e.write_all(scanlines)?;

    e.finish()
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use flate2::read::ZlibDecoder;

    use super::*;

    fn inflate(bytes: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        ZlibDecoder::new(bytes).read_to_end(&mut out).unwrap();

        out
    }

    #[test]
    fn inflates_back_to_the_raw_scanlines() {
        let raw: Vec<u8> = (0..4096u32).map(|i| (i % 7) as u8).collect();

        for level in [
            CompressionLevel::None,
            CompressionLevel::Fast,
            CompressionLevel::Best,
        ] {
            assert_eq!(inflate(&compress_scanlines(&raw, level).unwrap()), raw);
        }
    }

    #[test]
    fn stream_has_a_zlib_header() {
        let compressed = compress_scanlines(&[0; 64], CompressionLevel::Best).unwrap();

        // CM = 8 (deflate), and CMF/FLG form a multiple of 31
        assert_eq!(compressed[0] & 0x0f, 8);
        assert_eq!(u16::from_be_bytes([compressed[0], compressed[1]]) % 31, 0);
    }

    #[test]
    fn best_is_no_larger_than_none() {
        let raw = vec![42; 10_000];
        let best = compress_scanlines(&raw, CompressionLevel::Best).unwrap();
        let stored = compress_scanlines(&raw, CompressionLevel::None).unwrap();

        assert!(best.len() < stored.len());
    }
}
