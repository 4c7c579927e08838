use crate::conf::CONFIG_FILE;
use anyhow::{Result, bail};
use std::fs;
use std::path::PathBuf;

const CONFIG_TEMPLATE: &str = include_str!("../../../config-templates/quill.hcl");

pub fn init(path: PathBuf) -> Result<()> {
    // Refuse to overwrite an existing non-empty directory
    if path.exists() {
        if path.is_file() {
            bail!("{} exists and is not a directory", path.display());
        }

        let is_empty = fs::read_dir(&path)?.next().is_none();
        if !is_empty {
            bail!(
                "config directory '{}' already exists and is not empty",
                path.display()
            );
        }
    }

    fs::create_dir_all(&path)?;
    fs::write(path.join(CONFIG_FILE), CONFIG_TEMPLATE)?;

    // User feedback
    println!("✔ Initialized quill config in {}", path.display());
    println!("✔ Created:");
    println!("  - {}", CONFIG_FILE);
    println!();
    println!("Next steps:");
    println!("  quill config check {}", path.display());
    println!("  quill match --config {}", path.display());

    Ok(())
}
