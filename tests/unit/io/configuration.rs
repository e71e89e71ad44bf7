//! Tests for generator constants and defaults

#[cfg(test)]
mod tests {
    use amogen::io::configuration::{
        BALANCED_ACTION_WEIGHTS, BASE_WORD, BONE_DOWN_TILE, BONE_UP_TILE, CUT_CACHE_SIZE,
        DEFAULT_ACTION_WEIGHTS, DEFAULT_COUNT, DEFAULT_OUTPUT_PATH, DEFAULT_TILE_DIR,
        EXTEND_CACHE_SIZE, MAX_NAME_ATTEMPTS, MAX_UNIQUE_ATTEMPTS, MIRROR_CACHE_SIZE,
    };

    // Tests the base word is the six letter anchor
    // Verified by changing the base word
    #[test]
    fn test_base_word() {
        assert_eq!(BASE_WORD, "amogus");
        assert_eq!(BASE_WORD.chars().count(), 6);
    }

    // Tests per-strategy history sizes
    // Verified by changing cache sizes
    #[test]
    fn test_cache_sizes() {
        assert_eq!(EXTEND_CACHE_SIZE, 100);
        assert_eq!(CUT_CACHE_SIZE, 10);
        assert_eq!(MIRROR_CACHE_SIZE, 10);
    }

    // Tests histories stay below the strategy output spaces
    // Verified by raising the cut history to the number of cut results
    #[test]
    fn test_cache_sizes_below_output_space() {
        // Cut draws one of the 15 substrings that drop the final letter
        let substrings: usize = (1..BASE_WORD.len()).sum();
        assert_eq!(substrings, 15);
        assert!(CUT_CACHE_SIZE < substrings);
        assert!(MIRROR_CACHE_SIZE < substrings);
    }

    // Tests retry caps are positive
    // Verified by setting a cap to zero
    #[test]
    fn test_attempt_limits() {
        assert!(MAX_UNIQUE_ATTEMPTS > 0);
        assert!(MAX_NAME_ATTEMPTS > 0);
    }

    // Tests both action weightings
    // Verified by swapping the weight sets
    #[test]
    fn test_action_weights() {
        assert_eq!(DEFAULT_ACTION_WEIGHTS, [10, 1, 1]);
        assert_eq!(BALANCED_ACTION_WEIGHTS, [9, 9, 5]);
    }

    // Tests tile names and output defaults
    // Verified by renaming the connector tiles
    #[test]
    fn test_paths_and_tiles() {
        assert_eq!(BONE_UP_TILE, "bone_up");
        assert_eq!(BONE_DOWN_TILE, "bone_down");
        assert_eq!(DEFAULT_OUTPUT_PATH, "image.png");
        assert_eq!(DEFAULT_TILE_DIR, "images");
        assert_eq!(DEFAULT_COUNT, 1);
    }
}
