use crate::tiles::Tile;
use anyhow::Context;
use image::RgbaImage;
use image::imageops::FilterType;
use std::path::PathBuf;

/// Resolves tile identities to loadable images under a base directory.
/// Loads happen per request; one image per call, resized to the slot it
/// will occupy on the canvas.
#[derive(Debug, Clone)]
pub struct Assets {
    dir: PathBuf,
}

impl From<PathBuf> for Assets {
    fn from(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl Assets {
    pub fn path(&self, tile: Tile) -> PathBuf {
        self.dir.join(tile.asset())
    }

    pub fn load(&self, tile: Tile, w: u32, h: u32) -> anyhow::Result<RgbaImage> {
        let path = self.path(tile);
        let img = image::open(&path).with_context(|| format!("load {}", path.display()))?;
        Ok(image::imageops::resize(&img.to_rgba8(), w, h, FilterType::Triangle))
    }
}
