use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::info;

use crate::{colors::Rgba, png::encode_solid_png};

/// Where the tauri bundle looks for icons, relative to the project root.
pub const ICONS_DIR: &str = "src-tauri/icons";

/// Template tray icons are black; the alpha keeps them readable on light menu bars.
pub const TRAY_COLOR: Rgba = Rgba::new(0, 0, 0, 200);
pub const APP_COLOR: Rgba = Rgba::new(212, 165, 116, 255);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub file_name: &'static str,
    pub width: u32,
    pub height: u32,
    pub color: Rgba,
}

impl IconSpec {
    const fn square(file_name: &'static str, size: u32, color: Rgba) -> Self {
        Self {
            file_name,
            width: size,
            height: size,
            color,
        }
    }
}

pub const ICONS: [IconSpec; 4] = [
    IconSpec::square("tray.png", 22, TRAY_COLOR),
    IconSpec::square("32x32.png", 32, APP_COLOR),
    IconSpec::square("128x128.png", 128, APP_COLOR),
    IconSpec::square("128x128@2x.png", 256, APP_COLOR),
];

/// Encodes every icon in [`ICONS`] and writes it under `root/ICONS_DIR`,
/// replacing existing files. The icons directory must already exist.
pub fn write_icons(root: &Path) -> Result<Vec<PathBuf>> {
    let icons_dir = root.join(ICONS_DIR);
    let mut written = Vec::with_capacity(ICONS.len());

    for icon in &ICONS {
        let path = icons_dir.join(icon.file_name);
        let bytes = encode_solid_png(icon.width, icon.height, icon.color)
            .with_context(|| format!("failed to encode {}", icon.file_name))?;

        fs::write(&path, &bytes)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(
            "wrote {} ({}x{}, {} bytes)",
            path.display(),
            icon.width,
            icon.height,
            bytes.len()
        );

        written.push(path);
    }

    Ok(written)
}
