use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use image::{imageops::FilterType, RgbaImage};

pub const IMAGE_ASSET: &str = "assets/image.png";
pub const IMAGE_SIDE: u32 = 100;

/// Resolves a bundled resource: the packaged resource root first, then the
/// executable's directory, then the working directory.
pub fn resource_path(relative: &str, resource_dir: Option<&Path>) -> PathBuf {
    let exe_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    let roots = resource_dir.map(Path::to_path_buf).into_iter().chain(exe_dir);
    first_existing(relative, roots).unwrap_or_else(|| {
        env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(relative)
    })
}

fn first_existing(relative: &str, roots: impl Iterator<Item = PathBuf>) -> Option<PathBuf> {
    roots.map(|root| root.join(relative)).find(|p| p.is_file())
}

pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let image = image::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    Ok(image
        .resize_exact(IMAGE_SIDE, IMAGE_SIDE, FilterType::Lanczos3)
        .to_rgba8())
}
