use crate::{
    algorithm::random::RandomSource,
    algorithm::substring::sample_base_substring,
    io::error::{AmogusError, Result},
};
use std::fmt;
use std::str::FromStr;

/// Strategy used to derive a name from the base word
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Combine a prefix, a middle cut and a postfix of the base word
    Extend,
    /// Keep one substring of the base word
    Cut,
    /// Reflect one substring of the base word into a palindrome
    Mirror,
}

impl Action {
    /// All actions, in the order their selection weights are given
    pub const ALL: [Self; 3] = [Self::Extend, Self::Cut, Self::Mirror];

    /// Tag used on the command line
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Extend => "extend",
            Self::Cut => "cut",
            Self::Mirror => "mirror",
        }
    }

    /// Run this strategy once, without any uniqueness filtering
    ///
    /// # Errors
    ///
    /// Propagates sampler errors.
    pub fn apply(self, rng: &mut impl RandomSource) -> Result<String> {
        match self {
            Self::Extend => extend_name(rng),
            Self::Cut => cut_name(rng),
            Self::Mirror => mirror_name(rng),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = AmogusError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "extend" => Ok(Self::Extend),
            "cut" => Ok(Self::Cut),
            "mirror" => Ok(Self::Mirror),
            _ => Err(AmogusError::InvalidAction {
                value: s.to_string(),
            }),
        }
    }
}

/// Which parts an extended name is made of
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransformationParameters {
    /// Prepend a prefix that starts at the first letter of the base word
    pub add_prefix: bool,
    /// Append a postfix that ends at the last letter of the base word
    pub add_postfix: bool,
    /// Insert a substring cut from both ends
    pub cut_middle: bool,
}

impl TransformationParameters {
    /// Decode the parameters from the low three bits of `seed`
    ///
    /// Bit 0 selects the prefix, bit 1 the postfix and bit 2 the middle.
    pub const fn from_bits(seed: u8) -> Self {
        Self {
            add_prefix: seed & 0b001 != 0,
            add_postfix: (seed >> 1) & 0b001 != 0,
            cut_middle: (seed >> 2) & 0b001 != 0,
        }
    }

    /// Draw a uniform non-zero 3-bit value so at least one part is selected
    pub fn random(rng: &mut impl RandomSource) -> Self {
        let seed = rng.weighted_choice(&[1; 7]) as u8 + 1;
        Self::from_bits(seed)
    }
}

/// Build a name from an anchored prefix, a free middle and an anchored postfix
///
/// Parts are concatenated in prefix, middle, postfix order.
///
/// # Errors
///
/// Propagates sampler errors.
pub fn extend_name(rng: &mut impl RandomSource) -> Result<String> {
    let params = TransformationParameters::random(rng);

    let mut result = String::new();
    if params.add_prefix {
        result.push_str(&sample_base_substring(rng, false, true)?);
    }
    if params.cut_middle {
        result.push_str(&sample_base_substring(rng, true, true)?);
    }
    if params.add_postfix {
        result.push_str(&sample_base_substring(rng, true, false)?);
    }
    Ok(result)
}

/// Cut the base word from the beginning and/or the end
///
/// # Errors
///
/// Propagates sampler errors.
pub fn cut_name(rng: &mut impl RandomSource) -> Result<String> {
    sample_base_substring(rng, true, true)
}

/// Cut the base word and mirror the piece into a palindrome
///
/// Pieces starting with 'a' are mirrored forwards, pieces ending with 's'
/// backwards, and pieces doing both are simply reversed. Any other piece is
/// mirrored in a direction chosen by a coin flip.
///
/// # Errors
///
/// Propagates sampler errors.
pub fn mirror_name(rng: &mut impl RandomSource) -> Result<String> {
    let part = sample_base_substring(rng, true, true)?;
    let starts_with_a = part.starts_with('a');
    let ends_with_s = part.ends_with('s');

    let mirrored = match (starts_with_a, ends_with_s) {
        (true, true) => part.chars().rev().collect(),
        (true, false) => mirror_forwards(&part),
        (false, true) => mirror_backwards(&part),
        (false, false) => {
            if rng.random_bit() {
                mirror_forwards(&part)
            } else {
                mirror_backwards(&part)
            }
        }
    };
    Ok(mirrored)
}

// "amo" -> "amoma"
fn mirror_forwards(part: &str) -> String {
    let reflected: String = part.chars().rev().skip(1).collect();
    format!("{part}{reflected}")
}

// "gus" -> "sugus"
fn mirror_backwards(part: &str) -> String {
    let count = part.chars().count();
    let reflected: String = part.chars().rev().take(count.saturating_sub(1)).collect();
    format!("{reflected}{part}")
}
