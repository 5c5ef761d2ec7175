//! # Tatari Atlas
//!
//! Assembles the 256x256 texture atlas for the Tatari Tree entity.
//!
//! ## Overview
//!
//! Six source images (log side and top, head face, side and top, leaves)
//! are resized with nearest-neighbor sampling and pasted at fixed offsets
//! into a transparent canvas. The offsets follow the box layout of the
//! Tatari Tree model: trunk at (0, 0), head at (0, 112), branches at
//! (64, 0) and leaves at (64, 16).
//!
//! ## Quick Start
//!
//! ```ignore
//! use tatari_atlas::{generate_atlas, OUTPUT_FILE_NAME};
//!
//! let atlas = generate_atlas(".", OUTPUT_FILE_NAME)?;
//! println!("{}x{}", atlas.width(), atlas.height());
//! ```

pub mod atlas;
pub mod error;
pub mod layout;
pub mod model;
pub mod source;
pub mod types;

// Re-export main types for convenience
pub use atlas::{build_tatari_tree_atlas, AtlasBuilder, AtlasRegion, TextureAtlas};
pub use error::{AtlasError, Result};
pub use layout::{Placement, TATARI_TREE_LAYOUT};
pub use model::{tatari_tree_model, EntityModelDef};
pub use source::{SourceSet, SourceTexture};
pub use types::{Direction, Face, ModelPart};

use std::path::Path;

/// Default output file name, written next to the sources.
pub const OUTPUT_FILE_NAME: &str = "tatari_tree.png";

/// Where the generated atlas belongs in the mod's resources.
pub const RESOURCE_DESTINATION: &str =
    "src/main/resources/assets/kamigami/textures/entity/tatari_tree/";

/// Load the sources from `input_dir`, build the atlas and save it to `output`.
///
/// Nothing is written when a source is missing.
pub fn generate_atlas<I: AsRef<Path>, O: AsRef<Path>>(
    input_dir: I,
    output: O,
) -> Result<TextureAtlas> {
    let sources = SourceSet::load(input_dir)?;
    let atlas = build_tatari_tree_atlas(&sources)?;
    atlas.save(output)?;
    Ok(atlas)
}
