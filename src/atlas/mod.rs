//! Texture atlas building.
//!
//! This module resizes source tiles and pastes them into a transparent
//! canvas following the fixed layout.

mod builder;
pub mod resample;

pub use builder::{
    build_tatari_tree_atlas, build_tatari_tree_atlas_with_progress, AtlasBuilder, AtlasRegion,
    TextureAtlas, TRANSPARENT,
};
pub use resample::resize_nearest;
