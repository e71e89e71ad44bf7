//! Tile lookup, vertical sprite stacking and PNG export

use crate::io::configuration::{BONE_DOWN_TILE, BONE_UP_TILE, TILE_EXTENSION};
use crate::io::error::{AmogusError, Result, invalid_parameter};
use image::{RgbaImage, imageops};
use std::fmt;
use std::path::{Path, PathBuf};

/// One segment of a stacked character image
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TilePart {
    /// Tile drawn for a single letter of the name
    Letter(char),
    /// Connector above names that do not start with 'a'
    BoneUp,
    /// Connector below names that do not end with 's'
    BoneDown,
}

impl TilePart {
    /// File stem of the tile image
    pub fn identifier(self) -> String {
        match self {
            Self::Letter(letter) => letter.to_string(),
            Self::BoneUp => BONE_UP_TILE.to_string(),
            Self::BoneDown => BONE_DOWN_TILE.to_string(),
        }
    }
}

impl fmt::Display for TilePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifier())
    }
}

/// Determine which tiles make up the image of `name`, top to bottom
///
/// Names not starting with 'a' get a bone on top, names not ending with 's'
/// get one below.
pub fn tile_sequence(name: &str) -> Vec<TilePart> {
    let mut parts = Vec::with_capacity(name.len() + 2);
    if !name.starts_with('a') {
        parts.push(TilePart::BoneUp);
    }
    parts.extend(name.chars().map(TilePart::Letter));
    if !name.ends_with('s') {
        parts.push(TilePart::BoneDown);
    }
    parts
}

/// Builds character images from a directory of tile PNGs
#[derive(Clone, Debug)]
pub struct ImageAssembler {
    tile_dir: PathBuf,
}

impl ImageAssembler {
    /// Use the tiles stored in `tile_dir`
    pub fn new(tile_dir: impl Into<PathBuf>) -> Self {
        Self {
            tile_dir: tile_dir.into(),
        }
    }

    /// Directory the tiles are read from
    pub fn tile_dir(&self) -> &Path {
        &self.tile_dir
    }

    /// Path of the image for `part`
    pub fn tile_path(&self, part: TilePart) -> PathBuf {
        self.tile_dir
            .join(format!("{}.{TILE_EXTENSION}", part.identifier()))
    }

    /// Load a single tile from disk
    ///
    /// # Errors
    ///
    /// Returns an error if the tile file is missing or cannot be decoded.
    pub fn load_tile(&self, part: TilePart) -> Result<RgbaImage> {
        let path = self.tile_path(part);
        if !path.is_file() {
            return Err(AmogusError::MissingTile {
                tile: part.identifier(),
                path,
            });
        }

        let tile = image::open(&path).map_err(|e| AmogusError::ImageLoad { path, source: e })?;
        Ok(tile.to_rgba8())
    }

    /// Stack the tiles for `name` into one image
    ///
    /// The canvas is one tile wide and one tile high per part; part `i` is
    /// pasted at vertical offset `i * tile_height`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name is empty
    /// - A tile is missing or cannot be decoded
    /// - A tile's size differs from the first tile's
    pub fn build_image(&self, name: &str) -> Result<RgbaImage> {
        if name.is_empty() {
            return Err(invalid_parameter("name", &name, &"name must not be empty"));
        }

        let parts = tile_sequence(name);
        let tiles = parts
            .iter()
            .map(|&part| self.load_tile(part).map(|tile| (part, tile)))
            .collect::<Result<Vec<_>>>()?;

        let (block_width, block_height) = tiles
            .first()
            .map_or((0, 0), |(_, tile)| tile.dimensions());

        let mut image = RgbaImage::new(block_width, block_height * tiles.len() as u32);

        for (number, (part, tile)) in tiles.iter().enumerate() {
            if tile.dimensions() != (block_width, block_height) {
                return Err(AmogusError::TileDimensions {
                    tile: part.identifier(),
                    expected: (block_width, block_height),
                    found: tile.dimensions(),
                });
            }
            imageops::replace(&mut image, tile, 0, i64::from(block_height) * number as i64);
        }

        log::debug!(
            "Assembled '{name}' from {} tiles into {}x{}",
            tiles.len(),
            image.width(),
            image.height()
        );

        Ok(image)
    }
}

/// Save an assembled image as PNG, creating the parent directory if needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_image(image: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| AmogusError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save(output_path)
        .map_err(|e| AmogusError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    log::info!("Saved image to '{}'", output_path.display());
    Ok(())
}
