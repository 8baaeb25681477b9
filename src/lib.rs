pub mod colors;
pub mod icons;
pub mod png;
