//! Tests for tile sequencing, image stacking and PNG export

use image::{Rgba, RgbaImage};
use std::path::Path;

pub const TILE_WIDTH: u32 = 4;
pub const TILE_HEIGHT: u32 = 3;

/// Colour written into each test tile, distinct per tile
pub fn tile_colour(tile: &str) -> Rgba<u8> {
    let shade = match tile {
        "a" => 10,
        "m" => 20,
        "o" => 30,
        "g" => 40,
        "u" => 50,
        "s" => 60,
        "bone_up" => 70,
        _ => 80,
    };
    Rgba([shade, 255 - shade, 0, 255])
}

/// Write solid tiles for every letter and both bones into `dir`
pub fn write_tiles(dir: &Path) {
    for tile in ["a", "m", "o", "g", "u", "s", "bone_up", "bone_down"] {
        RgbaImage::from_pixel(TILE_WIDTH, TILE_HEIGHT, tile_colour(tile))
            .save(dir.join(format!("{tile}.png")))
            .unwrap();
    }
}

#[cfg(test)]
mod tests {
    use super::{TILE_HEIGHT, TILE_WIDTH, tile_colour, write_tiles};
    use amogen::AmogusError;
    use amogen::io::image::{ImageAssembler, TilePart, export_image, tile_sequence};
    use image::{Rgba, RgbaImage};

    // Tests full names need no connector tiles
    // Verified by always prepending the upper bone
    #[test]
    fn test_tile_sequence_full_name() {
        let letters: Vec<TilePart> = "amogus".chars().map(TilePart::Letter).collect();
        assert_eq!(tile_sequence("amogus"), letters);
    }

    // Tests names missing both anchors get both bones
    // Verified by checking only the first letter
    #[test]
    fn test_tile_sequence_bones() {
        let identifiers: Vec<String> = tile_sequence("mogu")
            .into_iter()
            .map(TilePart::identifier)
            .collect();
        assert_eq!(
            identifiers,
            ["bone_up", "m", "o", "g", "u", "bone_down"]
        );

        assert_eq!(tile_sequence("amo").last(), Some(&TilePart::BoneDown));
        assert_eq!(tile_sequence("gus").first(), Some(&TilePart::BoneUp));
    }

    // Tests tile paths follow the identifier naming convention
    // Verified by dropping the file extension
    #[test]
    fn test_tile_path() {
        let assembler = ImageAssembler::new("tiles");
        assert_eq!(
            assembler.tile_path(TilePart::BoneUp),
            std::path::Path::new("tiles/bone_up.png")
        );
        assert_eq!(
            assembler.tile_path(TilePart::Letter('g')),
            std::path::Path::new("tiles/g.png")
        );
    }

    // Tests tiles are stacked top to bottom at tile height offsets
    // Verified by pasting every tile at offset zero
    #[test]
    fn test_build_image_stacks_tiles() {
        let dir = tempfile::tempdir().unwrap();
        write_tiles(dir.path());
        let assembler = ImageAssembler::new(dir.path());

        let image = assembler.build_image("mogu").unwrap();
        assert_eq!(image.dimensions(), (TILE_WIDTH, TILE_HEIGHT * 6));

        let expected = ["bone_up", "m", "o", "g", "u", "bone_down"];
        for (index, tile) in expected.iter().enumerate() {
            let top = index as u32 * TILE_HEIGHT;
            assert_eq!(*image.get_pixel(0, top), tile_colour(tile), "{tile} top");
            assert_eq!(
                *image.get_pixel(TILE_WIDTH - 1, top + TILE_HEIGHT - 1),
                tile_colour(tile),
                "{tile} bottom"
            );
        }
    }

    // Tests composite size matches the tile sequence for many names
    // Verified by sizing the canvas from the name length only
    #[test]
    fn test_build_image_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        write_tiles(dir.path());
        let assembler = ImageAssembler::new(dir.path());

        for name in ["amogus", "a", "s", "amoma", "sugus", "gugus", "amogugus"] {
            let image = assembler.build_image(name).unwrap();
            let parts = tile_sequence(name).len() as u32;
            assert_eq!(image.width(), TILE_WIDTH);
            assert_eq!(image.height(), TILE_HEIGHT * parts, "{name}");
        }
    }

    // Tests a missing tile is reported with its identifier
    // Verified by skipping unreadable tiles
    #[test]
    fn test_missing_tile() {
        let dir = tempfile::tempdir().unwrap();
        write_tiles(dir.path());
        std::fs::remove_file(dir.path().join("g.png")).unwrap();
        let assembler = ImageAssembler::new(dir.path());

        match assembler.build_image("amogus") {
            Err(AmogusError::MissingTile { tile, path }) => {
                assert_eq!(tile, "g");
                assert!(path.ends_with("g.png"));
            }
            other => unreachable!("Expected MissingTile, got {other:?}"),
        }

        assert!(matches!(
            assembler.build_image("amxgus"),
            Err(AmogusError::MissingTile { tile, .. }) if tile == "x"
        ));
    }

    // Tests undecodable tiles fail with the tile path
    // Verified by mapping decode failures to MissingTile
    #[test]
    fn test_corrupt_tile() {
        let dir = tempfile::tempdir().unwrap();
        write_tiles(dir.path());
        std::fs::write(dir.path().join("o.png"), b"not a png").unwrap();
        let assembler = ImageAssembler::new(dir.path());

        assert!(matches!(
            assembler.build_image("amogus"),
            Err(AmogusError::ImageLoad { .. })
        ));
    }

    // Tests differently sized tiles are rejected
    // Verified by removing the dimension check
    #[test]
    fn test_mismatched_tile_size() {
        let dir = tempfile::tempdir().unwrap();
        write_tiles(dir.path());
        RgbaImage::from_pixel(TILE_WIDTH + 1, TILE_HEIGHT, Rgba([0, 0, 0, 255]))
            .save(dir.path().join("u.png"))
            .unwrap();
        let assembler = ImageAssembler::new(dir.path());

        match assembler.build_image("amogus") {
            Err(AmogusError::TileDimensions {
                tile,
                expected,
                found,
            }) => {
                assert_eq!(tile, "u");
                assert_eq!(expected, (TILE_WIDTH, TILE_HEIGHT));
                assert_eq!(found, (TILE_WIDTH + 1, TILE_HEIGHT));
            }
            other => unreachable!("Expected TileDimensions, got {other:?}"),
        }
    }

    // Tests empty names are rejected
    // Verified by building a bones-only image
    #[test]
    fn test_empty_name() {
        let assembler = ImageAssembler::new("images");
        assert!(matches!(
            assembler.build_image(""),
            Err(AmogusError::InvalidParameter { .. })
        ));
    }

    // Tests the shipped tiles assemble into a full character
    // Verified by deleting a shipped tile
    #[test]
    fn test_shipped_tiles() {
        let assembler = ImageAssembler::new("images");
        let image = assembler.build_image("amogus").unwrap();
        let bones = assembler.build_image("mogu").unwrap();
        assert_eq!(image.dimensions(), (32, 48));
        assert_eq!(bones.dimensions(), image.dimensions());
    }

    // Tests export creates parent directories and a readable PNG
    // Verified by disabling directory creation
    #[test]
    fn test_export_image_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        write_tiles(dir.path());
        let image = ImageAssembler::new(dir.path()).build_image("sus").unwrap();

        let output = dir.path().join("out").join("nested").join("image.png");
        export_image(&image, &output).unwrap();

        let reloaded = image::open(&output).unwrap().to_rgba8();
        assert_eq!(reloaded.dimensions(), image.dimensions());
        assert_eq!(reloaded, image);
    }

    // Tests export failures surface as ImageExport errors
    // Verified by ignoring save errors
    #[test]
    fn test_export_image_unsupported_format() {
        let dir = tempfile::tempdir().unwrap();
        let image = RgbaImage::new(2, 2);
        let result = export_image(&image, &dir.path().join("image.unknownformat"));
        assert!(matches!(result, Err(AmogusError::ImageExport { .. })));
    }
}
