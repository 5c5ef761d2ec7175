//! Texture atlas builder using the fixed placement table.

use super::resample::resize_nearest;
use crate::error::{AtlasError, Result};
use crate::layout::{validate_layout, Placement, TATARI_TREE_LAYOUT};
use crate::model::tatari_tree_model;
use crate::source::{SourceSet, SourceTexture};
use crate::types::{Face, ModelPart};
use image::{ImageEncoder, Rgba, RgbaImage};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Fully transparent pixel the canvas starts as.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// A tile pasted into the atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AtlasRegion {
    pub part: ModelPart,
    pub face: Face,
    pub source: SourceTexture,
    /// Left edge in pixels.
    pub x: u32,
    /// Top edge in pixels.
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl AtlasRegion {
    /// Whether the pixel lies inside this region.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x
            && (x as u64) < self.x as u64 + self.width as u64
            && y >= self.y
            && (y as u64) < self.y as u64 + self.height as u64
    }
}

/// A built texture atlas.
#[derive(Debug, Clone)]
pub struct TextureAtlas {
    /// RGBA canvas.
    pub image: RgbaImage,
    /// Every tile pasted, in paste order.
    pub regions: Vec<AtlasRegion>,
}

impl TextureAtlas {
    /// Width of the atlas in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height of the atlas in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The last region written at a pixel, if any.
    pub fn region_at(&self, x: u32, y: u32) -> Option<&AtlasRegion> {
        self.regions.iter().rev().find(|r| r.contains(x, y))
    }

    /// Whether the pixel is still the untouched transparent background.
    ///
    /// Pixels outside the canvas are not part of the atlas and report `false`.
    pub fn is_transparent(&self, x: u32, y: u32) -> bool {
        self.image
            .get_pixel_checked(x, y)
            .is_some_and(|pixel| *pixel == TRANSPARENT)
    }

    /// Number of regions containing at least one non-transparent pixel.
    pub fn opaque_region_count(&self) -> usize {
        self.regions
            .iter()
            .filter(|r| {
                (r.y..r.y + r.height)
                    .any(|y| (r.x..r.x + r.width).any(|x| self.image.get_pixel(x, y)[3] > 0))
            })
            .count()
    }

    /// Export the atlas as PNG bytes.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        let cursor = std::io::Cursor::new(&mut bytes);
        let encoder = image::codecs::png::PngEncoder::new(cursor);

        encoder
            .write_image(
                self.image.as_raw(),
                self.width(),
                self.height(),
                image::ExtendedColorType::Rgba8,
            )
            .map_err(|e| AtlasError::Encode(format!("Failed to encode PNG: {}", e)))?;

        Ok(bytes)
    }

    /// Encode and write the atlas as a PNG file.
    ///
    /// The PNG is written to a temporary file next to `path` and renamed into
    /// place, so a failed write never leaves a truncated atlas behind.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_png()?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = tempfile::NamedTempFile::new_in(dir)?;
        file.write_all(&bytes)?;
        file.as_file().sync_all()?;
        file.persist(path).map_err(|e| AtlasError::Io(e.error))?;

        tracing::info!("wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }
}

/// Builder that pastes resized tiles into a transparent canvas.
pub struct AtlasBuilder {
    canvas: RgbaImage,
    regions: Vec<AtlasRegion>,
}

impl AtlasBuilder {
    /// Create a builder with a fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            canvas: RgbaImage::from_pixel(width, height, TRANSPARENT),
            regions: Vec::new(),
        }
    }

    /// Create a builder sized to the Tatari Tree model's texture sheet.
    pub fn tatari_tree() -> Self {
        let [width, height] = tatari_tree_model().texture_size;
        Self::new(width, height)
    }

    /// Resize the placement's source once and paste it at every tile.
    ///
    /// Pasting overwrites destination pixels, alpha included.
    pub fn place(&mut self, placement: &Placement, sources: &SourceSet) -> Result<()> {
        let [tile_w, tile_h] = placement.size;
        let tile = resize_nearest(sources.get(placement.source), tile_w, tile_h)?;

        for dest in placement.tiles() {
            self.paste(&tile, dest.x, dest.y).map_err(|e| match e {
                AtlasError::TileOutOfBounds(msg) => AtlasError::TileOutOfBounds(format!(
                    "{} {}: {}",
                    placement.part, placement.face, msg
                )),
                other => other,
            })?;

            self.regions.push(AtlasRegion {
                part: placement.part,
                face: placement.face,
                source: placement.source,
                x: dest.x,
                y: dest.y,
                width: dest.width,
                height: dest.height,
            });
        }

        Ok(())
    }

    /// Copy `tile` into the canvas with its top-left corner at (x, y).
    fn paste(&mut self, tile: &RgbaImage, x: u32, y: u32) -> Result<()> {
        let (canvas_w, canvas_h) = self.canvas.dimensions();
        let fits_x = x.checked_add(tile.width()).is_some_and(|right| right <= canvas_w);
        let fits_y = y.checked_add(tile.height()).is_some_and(|bottom| bottom <= canvas_h);
        if !fits_x || !fits_y {
            return Err(AtlasError::TileOutOfBounds(format!(
                "{}x{} tile at ({}, {}) exceeds {}x{} canvas",
                tile.width(),
                tile.height(),
                x,
                y,
                canvas_w,
                canvas_h
            )));
        }

        image::imageops::replace(&mut self.canvas, tile, x as i64, y as i64);
        Ok(())
    }

    /// Finish building.
    pub fn build(self) -> TextureAtlas {
        TextureAtlas {
            image: self.canvas,
            regions: self.regions,
        }
    }
}

/// Build the Tatari Tree atlas from a full source set.
pub fn build_tatari_tree_atlas(sources: &SourceSet) -> Result<TextureAtlas> {
    build_tatari_tree_atlas_with_progress(sources, |_| {})
}

/// Build the Tatari Tree atlas, calling `on_part` as each part starts.
pub fn build_tatari_tree_atlas_with_progress(
    sources: &SourceSet,
    mut on_part: impl FnMut(ModelPart),
) -> Result<TextureAtlas> {
    let mut builder = AtlasBuilder::tatari_tree();
    let (width, height) = builder.canvas.dimensions();
    validate_layout(&TATARI_TREE_LAYOUT, width, height)?;

    let mut current_part = None;
    for placement in &TATARI_TREE_LAYOUT {
        if current_part != Some(placement.part) {
            tracing::debug!("placing {} textures", placement.part);
            on_part(placement.part);
            current_part = Some(placement.part);
        }
        builder.place(placement, sources)?;
    }

    Ok(builder.build())
}
