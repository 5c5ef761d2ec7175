//! End-to-end atlas generation from fixture PNGs on disk.

use image::{Rgba, RgbaImage};
use std::path::Path;
use tatari_atlas::atlas::resize_nearest;
use tatari_atlas::{
    generate_atlas, AtlasError, SourceTexture, OUTPUT_FILE_NAME, TATARI_TREE_LAYOUT,
};

/// A patterned fixture so resizing and placement mistakes show up as pixel
/// mismatches. Sizes differ per source to exercise up- and downscaling.
fn fixture(source: SourceTexture) -> RgbaImage {
    let (w, h) = match source {
        SourceTexture::LogSide => (16, 16),
        SourceTexture::LogTop => (32, 32),
        SourceTexture::HeadFace => (16, 16),
        SourceTexture::HeadSide => (8, 8),
        SourceTexture::HeadTop => (20, 12),
        SourceTexture::Leaves => (16, 16),
    };
    let tag = source as u8;
    RgbaImage::from_fn(w, h, |x, y| {
        Rgba([tag * 40 + 5, (x * 7) as u8, (y * 11) as u8, 200 + (x + y) as u8 % 50])
    })
}

fn write_fixtures(dir: &Path) {
    for source in SourceTexture::ALL {
        fixture(source).save(dir.join(source.file_name())).unwrap();
    }
}

#[test]
fn test_generated_atlas_matches_layout() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());
    let output = dir.path().join(OUTPUT_FILE_NAME);

    generate_atlas(dir.path(), &output).unwrap();

    let atlas = image::open(&output).unwrap().to_rgba8();
    assert_eq!(atlas.dimensions(), (256, 256));

    for placement in &TATARI_TREE_LAYOUT {
        let expected = resize_nearest(
            &fixture(placement.source),
            placement.size[0],
            placement.size[1],
        )
        .unwrap();
        for tile in placement.tiles() {
            for y in 0..tile.height {
                for x in 0..tile.width {
                    assert_eq!(
                        atlas.get_pixel(tile.x + x, tile.y + y),
                        expected.get_pixel(x, y),
                        "{} {} pixel ({}, {})",
                        placement.part,
                        placement.face,
                        tile.x + x,
                        tile.y + y
                    );
                }
            }
        }
    }

    for (x, y, pixel) in atlas.enumerate_pixels() {
        if !TATARI_TREE_LAYOUT.iter().any(|p| p.covers(x, y)) {
            assert_eq!(
                *pixel,
                Rgba([0, 0, 0, 0]),
                "pixel ({}, {}) should be transparent",
                x,
                y
            );
        }
    }
}

#[test]
fn test_documented_offsets() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());
    let output = dir.path().join("atlas.png");

    let atlas = generate_atlas(dir.path(), &output).unwrap();

    let log_side = resize_nearest(&fixture(SourceTexture::LogSide), 16, 16).unwrap();
    let head_face = resize_nearest(&fixture(SourceTexture::HeadFace), 16, 16).unwrap();
    let head_side = resize_nearest(&fixture(SourceTexture::HeadSide), 16, 16).unwrap();
    let log_top_strip = resize_nearest(&fixture(SourceTexture::LogTop), 32, 8).unwrap();
    let log_side_small = resize_nearest(&fixture(SourceTexture::LogSide), 8, 8).unwrap();

    // Trunk sides repeat down to y = 80.
    assert_eq!(atlas.image.get_pixel(48, 80), log_side.get_pixel(0, 0));
    assert_eq!(atlas.image.get_pixel(63, 95), log_side.get_pixel(15, 15));
    assert_eq!(atlas.image.get_pixel(0, 112), head_face.get_pixel(0, 0));
    assert_eq!(atlas.image.get_pixel(40, 120), head_side.get_pixel(8, 8));
    assert_eq!(atlas.image.get_pixel(127, 15), log_top_strip.get_pixel(31, 7));
    assert_eq!(atlas.image.get_pixel(167, 7), log_side_small.get_pixel(7, 7));
    assert_eq!(*atlas.image.get_pixel(168, 0), Rgba([0, 0, 0, 0]));
    assert_eq!(*atlas.image.get_pixel(96, 32), Rgba([0, 0, 0, 0]));
}

#[test]
fn test_missing_source_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());
    std::fs::remove_file(dir.path().join(SourceTexture::Leaves.file_name())).unwrap();
    let output = dir.path().join(OUTPUT_FILE_NAME);

    let err = generate_atlas(dir.path(), &output).unwrap_err();
    match err {
        AtlasError::MissingSource(path) => assert!(path.ends_with("tatari_tree_leaves.png")),
        other => panic!("expected MissingSource, got {:?}", other),
    }
    assert!(!output.exists());
}
