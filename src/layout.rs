//! The fixed Tatari Tree atlas layout.
//!
//! Every paste the atlas receives is listed here as a [`Placement`]. The
//! table is applied in order; no two tiles overlap, so order only matters
//! for readability of the progress output.

use crate::error::{AtlasError, Result};
use crate::source::SourceTexture;
use crate::types::{Face, ModelPart};
use serde::Serialize;

use Face::*;
use ModelPart as P;
use SourceTexture as S;

/// One source tile resized and pasted into the atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub part: ModelPart,
    pub face: Face,
    pub source: SourceTexture,
    /// Tile size (width, height) after resizing.
    pub size: [u32; 2],
    /// Top-left corner of the first tile.
    pub origin: [u32; 2],
    /// Number of tiles stacked downwards from `origin`.
    pub repeat: u32,
}

/// A destination rectangle in atlas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tile {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Tile {
    /// One past the right edge.
    pub fn right(&self) -> u64 {
        self.x as u64 + self.width as u64
    }

    /// One past the bottom edge.
    pub fn bottom(&self) -> u64 {
        self.y as u64 + self.height as u64
    }

    /// Whether the pixel lies inside this tile.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && (x as u64) < self.right() && y >= self.y && (y as u64) < self.bottom()
    }

    /// Whether two tiles share any pixel.
    pub fn intersects(&self, other: &Tile) -> bool {
        (self.x as u64) < other.right()
            && (other.x as u64) < self.right()
            && (self.y as u64) < other.bottom()
            && (other.y as u64) < self.bottom()
    }

    /// Whether the whole tile lies inside a `width`x`height` canvas.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.right() <= width as u64 && self.bottom() <= height as u64
    }
}

impl Placement {
    const fn new(
        part: ModelPart,
        face: Face,
        source: SourceTexture,
        size: [u32; 2],
        origin: [u32; 2],
    ) -> Self {
        Self {
            part,
            face,
            source,
            size,
            origin,
            repeat: 1,
        }
    }

    const fn repeated(self, repeat: u32) -> Self {
        Self { repeat, ..self }
    }

    /// Destination rectangles of every tile this placement writes.
    ///
    /// A tile whose top edge would pass `u32::MAX` is pinned there, so it
    /// never fits any canvas.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        (0..self.repeat).map(move |i| Tile {
            x: self.origin[0],
            y: self.origin[1].saturating_add(i.saturating_mul(self.size[1])),
            width: self.size[0],
            height: self.size[1],
        })
    }

    /// Whether this placement writes the given pixel.
    pub fn covers(&self, x: u32, y: u32) -> bool {
        self.tiles().any(|tile| tile.contains(x, y))
    }
}

/// The Tatari Tree atlas, in paste order.
pub const TATARI_TREE_LAYOUT: [Placement; 24] = [
    // Trunk: 16x96x16 box, sides tiled six high
    Placement::new(P::Trunk, Front, S::LogSide, [16, 16], [0, 0]).repeated(6),
    Placement::new(P::Trunk, Right, S::LogSide, [16, 16], [16, 0]).repeated(6),
    Placement::new(P::Trunk, Back, S::LogSide, [16, 16], [32, 0]).repeated(6),
    Placement::new(P::Trunk, Left, S::LogSide, [16, 16], [48, 0]).repeated(6),
    Placement::new(P::Trunk, Top, S::LogTop, [16, 16], [0, 96]),
    Placement::new(P::Trunk, Bottom, S::LogTop, [16, 16], [16, 96]),
    // Head: 16x16x16 jack-o'-lantern
    Placement::new(P::Head, Front, S::HeadFace, [16, 16], [0, 112]),
    Placement::new(P::Head, Right, S::HeadSide, [16, 16], [16, 112]),
    Placement::new(P::Head, Back, S::HeadSide, [16, 16], [32, 112]),
    Placement::new(P::Head, Left, S::HeadSide, [16, 16], [48, 112]),
    Placement::new(P::Head, Top, S::HeadTop, [16, 16], [0, 128]),
    Placement::new(P::Head, Bottom, S::HeadTop, [16, 16], [16, 128]),
    // Branches: 32x8x8 box
    Placement::new(P::Branches, Front, S::LogSide, [32, 8], [64, 0]),
    Placement::new(P::Branches, Right, S::LogSide, [8, 8], [96, 0]),
    Placement::new(P::Branches, Back, S::LogSide, [32, 8], [128, 0]),
    Placement::new(P::Branches, Left, S::LogSide, [8, 8], [160, 0]),
    Placement::new(P::Branches, Top, S::LogTop, [32, 8], [64, 8]),
    Placement::new(P::Branches, Bottom, S::LogTop, [32, 8], [96, 8]),
    // Leaves: 16x16x16 box
    Placement::new(P::Leaves, Front, S::Leaves, [16, 16], [64, 16]),
    Placement::new(P::Leaves, Right, S::Leaves, [16, 16], [80, 16]),
    Placement::new(P::Leaves, Back, S::Leaves, [16, 16], [96, 16]),
    Placement::new(P::Leaves, Left, S::Leaves, [16, 16], [112, 16]),
    Placement::new(P::Leaves, Top, S::Leaves, [16, 16], [64, 32]),
    Placement::new(P::Leaves, Bottom, S::Leaves, [16, 16], [80, 32]),
];

/// Check that every tile fits in a `width`x`height` canvas and that no two
/// tiles overlap.
pub fn validate_layout(layout: &[Placement], width: u32, height: u32) -> Result<()> {
    let mut seen: Vec<(&Placement, Tile)> = Vec::new();

    for placement in layout {
        if placement.size[0] == 0 || placement.size[1] == 0 || placement.repeat == 0 {
            return Err(AtlasError::InvalidTile(format!(
                "{} {} has an empty tile",
                placement.part, placement.face
            )));
        }

        for tile in placement.tiles() {
            if !tile.fits_within(width, height) {
                return Err(AtlasError::TileOutOfBounds(format!(
                    "{} {} tile at ({}, {}) size {}x{} exceeds {}x{} canvas",
                    placement.part,
                    placement.face,
                    tile.x,
                    tile.y,
                    tile.width,
                    tile.height,
                    width,
                    height
                )));
            }

            if let Some((other, _)) = seen.iter().find(|(_, t)| t.intersects(&tile)) {
                return Err(AtlasError::LayoutOverlap(format!(
                    "{} {} at ({}, {}) overlaps {} {}",
                    placement.part, placement.face, tile.x, tile.y, other.part, other.face
                )));
            }
            seen.push((placement, tile));
        }
    }

    Ok(())
}

/// Top-left corner of the block a part occupies in the layout.
pub fn part_origin(layout: &[Placement], part: ModelPart) -> Option<[u32; 2]> {
    layout
        .iter()
        .filter(|p| p.part == part)
        .map(|p| p.origin)
        .min_by_key(|[x, y]| (*y, *x))
}

/// Render a layout as pretty-printed JSON.
pub fn layout_json(layout: &[Placement]) -> Result<String> {
    Ok(serde_json::to_string_pretty(layout)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tatari_tree_model;

    #[test]
    fn test_fixed_layout_is_valid() {
        validate_layout(&TATARI_TREE_LAYOUT, 256, 256).unwrap();
    }

    #[test]
    fn test_tile_count() {
        let tiles: usize = TATARI_TREE_LAYOUT.iter().map(|p| p.tiles().count()).sum();
        // 24 trunk side tiles + 2 caps + 6 head + 6 branch + 6 leaf
        assert_eq!(tiles, 44);
    }

    #[test]
    fn test_trunk_tiles_stack_downwards() {
        let front = &TATARI_TREE_LAYOUT[0];
        let ys: Vec<u32> = front.tiles().map(|t| t.y).collect();
        assert_eq!(ys, vec![0, 16, 32, 48, 64, 80]);
        assert!(front.covers(15, 95));
        assert!(!front.covers(16, 0));
        assert!(!front.covers(0, 96));
    }

    #[test]
    fn test_part_origins_match_model_tex_offsets() {
        let model = tatari_tree_model();
        let origins: Vec<[u32; 2]> = ModelPart::ALL
            .iter()
            .map(|part| part_origin(&TATARI_TREE_LAYOUT, *part).unwrap())
            .collect();
        assert_eq!(origins, model.tex_offsets());
    }

    #[test]
    fn test_every_source_is_used() {
        for source in SourceTexture::ALL {
            assert!(TATARI_TREE_LAYOUT.iter().any(|p| p.source == source));
        }
    }

    #[test]
    fn test_overlap_detected() {
        let layout = [
            Placement::new(P::Trunk, Front, S::LogSide, [16, 16], [0, 0]),
            Placement::new(P::Head, Front, S::HeadFace, [16, 16], [8, 8]),
        ];
        assert!(matches!(
            validate_layout(&layout, 256, 256),
            Err(AtlasError::LayoutOverlap(_))
        ));
    }

    #[test]
    fn test_out_of_bounds_detected() {
        let layout = [Placement::new(P::Trunk, Front, S::LogSide, [16, 16], [0, 0]).repeated(6)];
        assert!(matches!(
            validate_layout(&layout, 64, 64),
            Err(AtlasError::TileOutOfBounds(_))
        ));
    }

    #[test]
    fn test_far_origin_is_out_of_bounds() {
        let far_x = [Placement::new(P::Trunk, Front, S::LogSide, [16, 16], [u32::MAX - 4, 0])];
        assert!(matches!(
            validate_layout(&far_x, 256, 256),
            Err(AtlasError::TileOutOfBounds(_))
        ));

        let far_y = [
            Placement::new(P::Trunk, Front, S::LogSide, [16, 16], [0, u32::MAX - 20]).repeated(6),
        ];
        assert!(matches!(
            validate_layout(&far_y, 256, 256),
            Err(AtlasError::TileOutOfBounds(_))
        ));
        let last = far_y[0].tiles().last().unwrap();
        assert_eq!(last.y, u32::MAX);
        assert!(far_x[0].covers(u32::MAX, 15));
        assert!(!far_x[0].covers(u32::MAX - 5, 0));
    }

    #[test]
    fn test_layout_json_fields() {
        let json = layout_json(&TATARI_TREE_LAYOUT[..1]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["part"], "trunk");
        assert_eq!(value[0]["face"], "front");
        assert_eq!(value[0]["source"], "log_side");
        assert_eq!(value[0]["repeat"], 6);
        assert_eq!(value[0]["origin"][1], 0);
    }

    #[test]
    fn test_adjacent_tiles_do_not_intersect() {
        let a = Tile {
            x: 0,
            y: 0,
            width: 16,
            height: 16,
        };
        let b = Tile {
            x: 16,
            y: 0,
            width: 16,
            height: 16,
        };
        let corner = Tile {
            x: 15,
            y: 15,
            width: 2,
            height: 2,
        };
        assert!(!a.intersects(&b));
        assert!(a.intersects(&corner));
    }
}
