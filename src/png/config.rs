#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CompressionLevel {
    None,
    Fast,
    #[default]
    Best,
}

impl CompressionLevel {
    pub fn to_zlib_u8(&self) -> u8 {
        match self {
            CompressionLevel::None => 0,
            CompressionLevel::Fast => 1,
            CompressionLevel::Best => 9,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PngConfig {
    pub compression_level: CompressionLevel,
}

impl PngConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compression_level(mut self, compression_level: CompressionLevel) -> Self {
        self.compression_level = compression_level;
        self
    }
}
