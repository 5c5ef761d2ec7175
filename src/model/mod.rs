//! Entity model definitions.
//!
//! The atlas is painted for a box-UV entity model. Each cube takes its
//! texture from a rectangle anchored at the cube's texture offset, so the
//! model fixes both the sheet size and where each part's block begins.

mod tatari_tree;

pub use tatari_tree::tatari_tree_model;

use crate::types::Direction;

// ── Data Structures ─────────────────────────────────────────────────────────

/// A cube within an entity model part.
#[derive(Debug, Clone)]
pub struct EntityCube {
    /// Origin in 1/16th block units.
    pub origin: [f32; 3],
    /// Dimensions (W, H, D) in 1/16th block units.
    pub dimensions: [f32; 3],
    /// UV offset (u0, v0) in pixels on the texture sheet.
    pub tex_offset: [u32; 2],
}

/// Pose/transform for an entity model part.
#[derive(Debug, Clone, Default)]
pub struct EntityPartPose {
    /// Translation in 1/16th block units.
    pub position: [f32; 3],
}

/// A named part in the entity model hierarchy.
#[derive(Debug, Clone)]
pub struct EntityPart {
    pub name: String,
    pub cubes: Vec<EntityCube>,
    pub pose: EntityPartPose,
    pub children: Vec<EntityPart>,
}

impl EntityPart {
    /// This part followed by all of its descendants, depth first.
    pub fn descendants(&self) -> Vec<&EntityPart> {
        let mut parts = vec![self];
        for child in &self.children {
            parts.extend(child.descendants());
        }
        parts
    }
}

/// Complete entity model definition.
#[derive(Debug, Clone)]
pub struct EntityModelDef {
    /// Texture path (e.g., "entity/tatari_tree").
    pub texture_path: String,
    /// Texture sheet dimensions in pixels.
    pub texture_size: [u32; 2],
    /// Top-level parts.
    pub parts: Vec<EntityPart>,
}

impl EntityModelDef {
    /// Every part in the hierarchy, depth first.
    pub fn all_parts(&self) -> impl Iterator<Item = &EntityPart> {
        self.parts.iter().flat_map(|part| part.descendants())
    }

    /// Find a part anywhere in the hierarchy by name.
    pub fn find_part(&self, name: &str) -> Option<&EntityPart> {
        self.all_parts().find(|part| part.name == name)
    }

    /// Total number of cubes in the model.
    pub fn cube_count(&self) -> usize {
        self.all_parts().map(|part| part.cubes.len()).sum()
    }

    /// Distinct texture offsets used by the model, in first-seen order.
    pub fn tex_offsets(&self) -> Vec<[u32; 2]> {
        let mut offsets = Vec::new();
        for cube in self.all_parts().flat_map(|part| &part.cubes) {
            if !offsets.contains(&cube.tex_offset) {
                offsets.push(cube.tex_offset);
            }
        }
        offsets
    }
}

/// Pixel rectangle `(left, top, right, bottom)` one cube face samples under
/// box UV mapping.
///
/// For a cube of size (W, H, D) at UV origin (u0, v0):
/// ```text
///                u0     u0+D   u0+D+W  u0+2D+W  u0+2D+2W
/// v0             | DOWN  |  UP   |       |        |
/// v0+D           |       |       |       |        |
/// v0+D    WEST   | NORTH | EAST  | SOUTH |
/// v0+D+H         |       |       |       |
/// ```
pub fn box_uv_rect(tex_offset: [u32; 2], dimensions: [f32; 3], face: Direction) -> [f32; 4] {
    let u0 = tex_offset[0] as f32;
    let v0 = tex_offset[1] as f32;
    let w = dimensions[0];
    let h = dimensions[1];
    let d = dimensions[2];

    let (left, top, right, bottom) = match face {
        Direction::Down => (u0 + d, v0, u0 + d + w, v0 + d),
        Direction::Up => (u0 + d + w, v0, u0 + d + w + w, v0 + d),
        Direction::North => (u0 + d, v0 + d, u0 + d + w, v0 + d + h),
        Direction::South => (u0 + d + w + d, v0 + d, u0 + d + w + d + w, v0 + d + h),
        Direction::West => (u0, v0 + d, u0 + d, v0 + d + h),
        Direction::East => (u0 + d + w, v0 + d, u0 + d + w + d, v0 + d + h),
    };

    [left, top, right, bottom]
}
