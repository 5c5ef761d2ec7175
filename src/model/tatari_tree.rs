use super::{EntityCube, EntityModelDef, EntityPart, EntityPartPose};

/// Tatari Tree model, texture `entity/tatari_tree` at 256x256.
///
/// A 6-block trunk with a jack-o'-lantern head set forward at 4 blocks up,
/// two 2-block branches at the same height, and a five-cube leaf cluster on
/// each branch tip.
pub fn tatari_tree_model() -> EntityModelDef {
    let trunk = EntityPart {
        name: "trunk".to_string(),
        cubes: vec![EntityCube {
            origin: [-8.0, -96.0, -8.0],
            dimensions: [16.0, 96.0, 16.0],
            tex_offset: [0, 0],
        }],
        pose: EntityPartPose {
            position: [0.0, 24.0, 0.0],
        },
        children: vec![],
    };

    let head = EntityPart {
        name: "head".to_string(),
        cubes: vec![EntityCube {
            origin: [-8.0, -8.0, -8.0],
            dimensions: [16.0, 16.0, 16.0],
            tex_offset: [0, 112],
        }],
        pose: EntityPartPose {
            position: [0.0, -40.0, -16.0],
        },
        children: vec![],
    };

    let left_branch = branch("left", -1.0);
    let right_branch = branch("right", 1.0);

    EntityModelDef {
        texture_path: "entity/tatari_tree".to_string(),
        texture_size: [256, 256],
        parts: vec![trunk, head, left_branch, right_branch],
    }
}

/// A branch growing sideways from the trunk; `side` is -1 for left, 1 for right.
fn branch(name: &str, side: f32) -> EntityPart {
    let origin_x = if side < 0.0 { -32.0 } else { 0.0 };

    EntityPart {
        name: format!("{}_branch", name),
        cubes: vec![EntityCube {
            origin: [origin_x, -4.0, -4.0],
            dimensions: [32.0, 8.0, 8.0],
            tex_offset: [64, 0],
        }],
        pose: EntityPartPose {
            position: [8.0 * side, -40.0, 0.0],
        },
        children: vec![leaves(name, side)],
    }
}

/// Leaf cluster at a branch tip: center plus top, bottom, front and back.
fn leaves(name: &str, side: f32) -> EntityPart {
    let offsets = [
        ("center", [0.0, 0.0, 0.0]),
        ("top", [0.0, -16.0, 0.0]),
        ("bottom", [0.0, 16.0, 0.0]),
        ("front", [0.0, 0.0, -16.0]),
        ("back", [0.0, 0.0, 16.0]),
    ];

    let children = offsets
        .iter()
        .map(|(leaf, position)| EntityPart {
            name: leaf.to_string(),
            cubes: vec![EntityCube {
                origin: [-8.0, -8.0, -8.0],
                dimensions: [16.0, 16.0, 16.0],
                tex_offset: [64, 16],
            }],
            pose: EntityPartPose {
                position: *position,
            },
            children: vec![],
        })
        .collect();

    EntityPart {
        name: format!("{}_leaves", name),
        cubes: vec![],
        pose: EntityPartPose {
            position: [32.0 * side, 0.0, 0.0],
        },
        children,
    }
}
