//! Generator constants and runtime configuration defaults

/// Anchor word every generated name derives from
pub const BASE_WORD: &str = "amogus";

// Recent-result history sizes, one per strategy
/// History size for the extend strategy
pub const EXTEND_CACHE_SIZE: usize = 100;
/// History size for the cut strategy
pub const CUT_CACHE_SIZE: usize = 10;
/// History size for the mirror strategy
pub const MIRROR_CACHE_SIZE: usize = 10;

// Retry caps for the uniqueness and base-word rejection loops
/// Maximum strategy invocations per cached call
pub const MAX_UNIQUE_ATTEMPTS: usize = 10_000;
/// Maximum strategy calls before a name other than the base word is found
pub const MAX_NAME_ATTEMPTS: usize = 1_000;

// Relative weights for (extend, cut, mirror) when no action is given
/// Weights used by the command-line program
pub const DEFAULT_ACTION_WEIGHTS: [u32; 3] = [10, 1, 1];
/// Flatter weighting that favours cut and mirror more often
pub const BALANCED_ACTION_WEIGHTS: [u32; 3] = [9, 9, 5];

// Tile lookup
/// Connector tile placed above names that do not start with 'a'
pub const BONE_UP_TILE: &str = "bone_up";
/// Connector tile placed below names that do not end with 's'
pub const BONE_DOWN_TILE: &str = "bone_down";
/// File extension of tile images
pub const TILE_EXTENSION: &str = "png";
/// Directory holding the tile images
pub const DEFAULT_TILE_DIR: &str = "images";

// Output settings
/// Path of the generated image
pub const DEFAULT_OUTPUT_PATH: &str = "image.png";
/// Number of characters generated per run
pub const DEFAULT_COUNT: usize = 1;
/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
