//! Source texture loading from a directory.

use super::{SourceSet, SourceTexture};
use crate::error::{AtlasError, Result};
use image::RgbaImage;
use std::io::ErrorKind;
use std::path::Path;

/// Load all six sources from `dir`.
///
/// Sources are read in `SourceTexture::ALL` order and the first one that is
/// missing aborts the load.
pub fn load_from_directory(dir: &Path) -> Result<SourceSet> {
    let [log_side, log_top, head_face, head_side, head_top, leaves] = SourceTexture::ALL;

    Ok(SourceSet::from_images([
        load_source(dir, log_side)?,
        load_source(dir, log_top)?,
        load_source(dir, head_face)?,
        load_source(dir, head_side)?,
        load_source(dir, head_top)?,
        load_source(dir, leaves)?,
    ]))
}

/// Read and decode one source file.
fn load_source(dir: &Path, source: SourceTexture) -> Result<RgbaImage> {
    let path = dir.join(source.file_name());
    let data = match std::fs::read(&path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(AtlasError::MissingSource(path));
        }
        Err(e) => return Err(e.into()),
    };

    let image = load_texture_from_bytes(&data)?;
    tracing::debug!(
        "loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Decode image bytes into RGBA8, whatever the stored color type.
pub fn load_texture_from_bytes(data: &[u8]) -> Result<RgbaImage> {
    let img = image::load_from_memory(data)?;
    Ok(img.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgba};

    fn write_all_sources(dir: &Path) {
        for (i, source) in SourceTexture::ALL.iter().enumerate() {
            let img = RgbaImage::from_pixel(4, 4, Rgba([i as u8 * 10, 0, 0, 255]));
            img.save(dir.join(source.file_name())).unwrap();
        }
    }

    #[test]
    fn test_load_all_sources() {
        let dir = tempfile::tempdir().unwrap();
        write_all_sources(dir.path());

        let set = load_from_directory(dir.path()).unwrap();
        assert_eq!(set.get(SourceTexture::Leaves).get_pixel(0, 0)[0], 50);
        assert_eq!(set.get(SourceTexture::LogSide).dimensions(), (4, 4));
    }

    #[test]
    fn test_missing_source_names_first_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        write_all_sources(dir.path());
        std::fs::remove_file(dir.path().join("tatari_tree_head_face.png")).unwrap();
        std::fs::remove_file(dir.path().join("tatari_tree_leaves.png")).unwrap();

        match load_from_directory(dir.path()) {
            Err(AtlasError::MissingSource(path)) => {
                assert!(path.ends_with("tatari_tree_head_face.png"));
            }
            other => panic!("expected MissingSource, got {:?}", other),
        }
    }

    #[test]
    fn test_lowercase_head_side_is_not_accepted() {
        let dir = tempfile::tempdir().unwrap();
        write_all_sources(dir.path());
        std::fs::rename(
            dir.path().join("tatarI_tree_head_side.png"),
            dir.path().join("tatari_tree_head_side.png"),
        )
        .unwrap();

        // Case-insensitive filesystems would still find the file.
        if dir.path().join("tatarI_tree_head_side.png").exists() {
            return;
        }
        assert!(matches!(
            load_from_directory(dir.path()),
            Err(AtlasError::MissingSource(_))
        ));
    }

    #[test]
    fn test_corrupt_source_is_image_error() {
        let dir = tempfile::tempdir().unwrap();
        write_all_sources(dir.path());
        std::fs::write(dir.path().join("tatari_tree_log.png"), b"not a png").unwrap();

        assert!(matches!(
            load_from_directory(dir.path()),
            Err(AtlasError::Image(_))
        ));
    }

    #[test]
    fn test_grayscale_converted_to_rgba() {
        let gray = GrayImage::from_pixel(2, 2, Luma([77]));
        let mut bytes = Vec::new();
        gray.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();

        let rgba = load_texture_from_bytes(&bytes).unwrap();
        assert_eq!(*rgba.get_pixel(1, 1), Rgba([77, 77, 77, 255]));
    }
}
