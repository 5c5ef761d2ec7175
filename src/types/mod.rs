//! Shared types used throughout the library.

mod direction;

pub use direction::Direction;

use serde::{Deserialize, Serialize};

/// A logical part of the Tatari Tree model, each owning one block of the atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelPart {
    Trunk,
    Head,
    Branches,
    Leaves,
}

impl ModelPart {
    /// All parts in the order they are painted.
    pub const ALL: [ModelPart; 4] = [
        ModelPart::Trunk,
        ModelPart::Head,
        ModelPart::Branches,
        ModelPart::Leaves,
    ];

    /// Human-readable name used in progress output.
    pub fn label(&self) -> &'static str {
        match self {
            ModelPart::Trunk => "trunk",
            ModelPart::Head => "head",
            ModelPart::Branches => "branches",
            ModelPart::Leaves => "leaves",
        }
    }
}

impl std::fmt::Display for ModelPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A face of a part as seen on the atlas sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Face {
    Front,
    Right,
    Back,
    Left,
    Top,
    Bottom,
}

impl Face {
    /// The cube direction this face is drawn on. The front faces north.
    pub fn direction(&self) -> Direction {
        match self {
            Face::Front => Direction::North,
            Face::Right => Direction::East,
            Face::Back => Direction::South,
            Face::Left => Direction::West,
            Face::Top => Direction::Up,
            Face::Bottom => Direction::Down,
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Face::Front => write!(f, "front"),
            Face::Right => write!(f, "right"),
            Face::Back => write!(f, "back"),
            Face::Left => write!(f, "left"),
            Face::Top => write!(f, "top"),
            Face::Bottom => write!(f, "bottom"),
        }
    }
}
