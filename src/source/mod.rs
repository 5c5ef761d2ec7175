//! Source textures the atlas is assembled from.

pub mod loader;

use image::RgbaImage;
use serde::{Deserialize, Serialize};

/// One of the six source images painted into the atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceTexture {
    LogSide,
    LogTop,
    HeadFace,
    HeadSide,
    HeadTop,
    Leaves,
}

impl SourceTexture {
    /// All sources in load order.
    pub const ALL: [SourceTexture; 6] = [
        SourceTexture::LogSide,
        SourceTexture::LogTop,
        SourceTexture::HeadFace,
        SourceTexture::HeadSide,
        SourceTexture::HeadTop,
        SourceTexture::Leaves,
    ];

    /// File name of this source inside the input directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            SourceTexture::LogSide => "tatari_tree_log.png",
            SourceTexture::LogTop => "tatari_tree_log_top.png",
            SourceTexture::HeadFace => "tatari_tree_head_face.png",
            // Capital I: the asset ships under this name.
            SourceTexture::HeadSide => "tatarI_tree_head_side.png",
            SourceTexture::HeadTop => "tatari_tree_head_top.png",
            SourceTexture::Leaves => "tatari_tree_leaves.png",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for SourceTexture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_name())
    }
}

/// The full set of decoded source images, all RGBA8.
#[derive(Debug, Clone)]
pub struct SourceSet {
    images: [RgbaImage; 6],
}

impl SourceSet {
    /// Load all six sources from a directory.
    pub fn load<P: AsRef<std::path::Path>>(dir: P) -> crate::Result<Self> {
        loader::load_from_directory(dir.as_ref())
    }

    /// Build a set from in-memory images, given in `SourceTexture::ALL` order.
    pub fn from_images(images: [RgbaImage; 6]) -> Self {
        Self { images }
    }

    /// Build a set by calling `f` for each source.
    pub fn from_fn(f: impl FnMut(SourceTexture) -> RgbaImage) -> Self {
        Self {
            images: SourceTexture::ALL.map(f),
        }
    }

    /// Borrow the image for one source.
    pub fn get(&self, source: SourceTexture) -> &RgbaImage {
        &self.images[source.index()]
    }
}
