use crate::{
    algorithm::random::RandomSource,
    io::configuration::BASE_WORD,
    io::error::{Result, invalid_parameter},
    math::weights::pseudonormal_weights,
};

/// Pick a random contiguous substring of `name`
///
/// When `cut_from_begin` is set the begin offset is drawn from `[0, len - 2]`,
/// weighted towards the middle; otherwise the substring starts at offset 0.
/// When `cut_from_end` is set the exclusive end offset is drawn from
/// `[begin + 1, len - 1]`, so the last character is always dropped;
/// otherwise the substring runs to the end of `name`.
///
/// Offsets count characters, not bytes.
///
/// # Errors
///
/// Returns an error if cutting is requested on a name shorter than two
/// characters, since no cut point would leave a non-empty substring.
pub fn sample_substring(
    rng: &mut impl RandomSource,
    name: &str,
    cut_from_begin: bool,
    cut_from_end: bool,
) -> Result<String> {
    let chars: Vec<char> = name.chars().collect();
    let len = chars.len();

    if (cut_from_begin || cut_from_end) && len < 2 {
        return Err(invalid_parameter(
            "name",
            &name,
            &"at least two characters are needed to cut a substring",
        ));
    }
    if len == 0 {
        return Err(invalid_parameter("name", &name, &"name must not be empty"));
    }

    let begin = if cut_from_begin {
        let head: String = chars.iter().take(len - 1).collect();
        rng.weighted_choice(&pseudonormal_weights(&head))
    } else {
        0
    };

    let end = if cut_from_end {
        let tail: String = chars.iter().skip(begin + 1).collect();
        begin + 1 + rng.weighted_choice(&pseudonormal_weights(&tail))
    } else {
        len
    };

    Ok(chars.iter().take(end).skip(begin).collect())
}

/// Pick a random contiguous substring of the base word
///
/// # Errors
///
/// Never fails for the built-in base word; the `Result` mirrors
/// [`sample_substring`].
pub fn sample_base_substring(
    rng: &mut impl RandomSource,
    cut_from_begin: bool,
    cut_from_end: bool,
) -> Result<String> {
    sample_substring(rng, BASE_WORD, cut_from_begin, cut_from_end)
}
