use crate::{
    algorithm::cache::RecentResults,
    algorithm::random::RandomSource,
    algorithm::transform::Action,
    io::configuration::{
        BASE_WORD, CUT_CACHE_SIZE, DEFAULT_ACTION_WEIGHTS, EXTEND_CACHE_SIZE, MAX_NAME_ATTEMPTS,
        MAX_UNIQUE_ATTEMPTS, MIRROR_CACHE_SIZE,
    },
    io::error::{Result, invalid_parameter, retries_exhausted},
    io::image::ImageAssembler,
};
use image::RgbaImage;
use std::str::FromStr;

/// Relative weights for choosing an action when none is requested
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionWeights {
    /// Weight of [`Action::Extend`]
    pub extend: u32,
    /// Weight of [`Action::Cut`]
    pub cut: u32,
    /// Weight of [`Action::Mirror`]
    pub mirror: u32,
}

impl ActionWeights {
    /// Build weights from an `[extend, cut, mirror]` triple
    pub const fn from_array(weights: [u32; 3]) -> Self {
        let [extend, cut, mirror] = weights;
        Self {
            extend,
            cut,
            mirror,
        }
    }

    /// Weights in [`Action::ALL`] order
    pub const fn as_array(self) -> [u32; 3] {
        [self.extend, self.cut, self.mirror]
    }
}

impl Default for ActionWeights {
    fn default() -> Self {
        Self::from_array(DEFAULT_ACTION_WEIGHTS)
    }
}

impl FromStr for ActionWeights {
    type Err = crate::io::error::AmogusError;

    /// Parse `extend:cut:mirror`, for example `9:9:5`
    fn from_str(s: &str) -> Result<Self> {
        let parts = s
            .split(':')
            .map(|part| part.trim().parse::<u32>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| invalid_parameter("weights", &s, &e))?;

        let weights: [u32; 3] = parts
            .try_into()
            .map_err(|_wrong_len| invalid_parameter("weights", &s, &"expected extend:cut:mirror"))?;

        if weights.iter().all(|&w| w == 0) {
            return Err(invalid_parameter(
                "weights",
                &s,
                &"at least one weight must be positive",
            ));
        }

        Ok(Self::from_array(weights))
    }
}

/// A generated character with its name and lazily rendered image
#[derive(Clone, Debug)]
pub struct Amogus {
    name: String,
    image: Option<RgbaImage>,
}

impl Amogus {
    /// Wrap a name without rendering anything yet
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: None,
        }
    }

    /// The character's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The character's image, built on first access
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be assembled from the tiles.
    pub fn image(&mut self, assembler: &ImageAssembler) -> Result<&RgbaImage> {
        let image: &RgbaImage = match &mut self.image {
            Some(image) => image,
            slot @ None => slot.insert(assembler.build_image(&self.name)?),
        };
        Ok(image)
    }

    /// Consume the character, returning its name
    pub fn into_name(self) -> String {
        self.name
    }
}

impl Default for Amogus {
    fn default() -> Self {
        Self::new(BASE_WORD)
    }
}

/// Generates character names from the base word
///
/// Owns the random source and one recent-result history per strategy, so
/// consecutive names from the same action do not repeat within the window.
pub struct AmogusFactory<R: RandomSource> {
    rng: R,
    weights: ActionWeights,
    extend_cache: RecentResults,
    cut_cache: RecentResults,
    mirror_cache: RecentResults,
    max_unique_attempts: usize,
    max_name_attempts: usize,
}

impl<R: RandomSource> AmogusFactory<R> {
    /// Create a factory with default weights and history sizes
    pub fn new(rng: R) -> Self {
        Self::with_weights(rng, ActionWeights::default())
    }

    /// Create a factory choosing random actions with the given weights
    pub fn with_weights(rng: R, weights: ActionWeights) -> Self {
        Self {
            rng,
            weights,
            extend_cache: RecentResults::new(EXTEND_CACHE_SIZE),
            cut_cache: RecentResults::new(CUT_CACHE_SIZE),
            mirror_cache: RecentResults::new(MIRROR_CACHE_SIZE),
            max_unique_attempts: MAX_UNIQUE_ATTEMPTS,
            max_name_attempts: MAX_NAME_ATTEMPTS,
        }
    }

    /// Override the retry caps of the uniqueness and base-word loops
    #[must_use]
    pub const fn with_attempt_limits(mut self, unique: usize, name: usize) -> Self {
        self.max_unique_attempts = unique;
        self.max_name_attempts = name;
        self
    }

    /// Weights used for random action selection
    pub const fn weights(&self) -> ActionWeights {
        self.weights
    }

    /// Recent-result history of the given action
    pub const fn cache(&self, action: Action) -> &RecentResults {
        match action {
            Action::Extend => &self.extend_cache,
            Action::Cut => &self.cut_cache,
            Action::Mirror => &self.mirror_cache,
        }
    }

    /// Pick an action according to the configured weights
    pub fn choose_action(&mut self) -> Action {
        let index = self.rng.weighted_choice(&self.weights.as_array());
        Action::ALL.get(index).copied().unwrap_or(Action::Extend)
    }

    /// Generate a character whose name differs from the base word
    ///
    /// When `action` is `None` one is chosen at random with the factory's
    /// weights; the same action is kept for every retry.
    ///
    /// # Errors
    ///
    /// Returns an error if no name other than the base word is produced
    /// within the attempt limit, or if a strategy's history cannot be
    /// satisfied.
    pub fn generate_amogus(&mut self, action: Option<Action>) -> Result<Amogus> {
        let action = action.unwrap_or_else(|| self.choose_action());

        for attempt in 1..=self.max_name_attempts {
            let name = self.generate_amogus_name(action)?;
            if name != BASE_WORD {
                return Ok(Amogus::new(name));
            }
            log::debug!("Attempt {attempt} of {action} produced the base word, retrying");
        }

        Err(retries_exhausted("name generation", self.max_name_attempts))
    }

    /// Run one action through its recent-result history
    ///
    /// # Errors
    ///
    /// Returns an error if the history rejects every candidate within the
    /// attempt limit.
    pub fn generate_amogus_name(&mut self, action: Action) -> Result<String> {
        let Self {
            rng,
            extend_cache,
            cut_cache,
            mirror_cache,
            max_unique_attempts,
            ..
        } = self;

        let cache = match action {
            Action::Extend => extend_cache,
            Action::Cut => cut_cache,
            Action::Mirror => mirror_cache,
        };
        cache.produce(*max_unique_attempts, || action.apply(&mut *rng))
    }

    /// Extend the base word with a prefix, middle and/or postfix
    ///
    /// # Errors
    ///
    /// See [`Self::generate_amogus_name`].
    pub fn extend_amogus_name(&mut self) -> Result<String> {
        self.generate_amogus_name(Action::Extend)
    }

    /// Cut the base word from the beginning and/or end
    ///
    /// # Errors
    ///
    /// See [`Self::generate_amogus_name`].
    pub fn cut_amogus_name(&mut self) -> Result<String> {
        self.generate_amogus_name(Action::Cut)
    }

    /// Cut and mirror the base word
    ///
    /// # Errors
    ///
    /// See [`Self::generate_amogus_name`].
    pub fn mirror_amogus_name(&mut self) -> Result<String> {
        self.generate_amogus_name(Action::Mirror)
    }
}
