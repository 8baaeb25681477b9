use std::path::Path;

use anyhow::Result;
use icongen::icons::write_icons;

fn main() -> Result<()> {
    env_logger::init();

    write_icons(Path::new("."))?;
    println!("Icons created successfully");

    Ok(())
}
