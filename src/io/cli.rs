//! Command-line interface for generating characters and their images

use crate::algorithm::factory::{ActionWeights, AmogusFactory};
use crate::algorithm::random::RandomSelector;
use crate::algorithm::transform::Action;
use crate::io::configuration::{DEFAULT_COUNT, DEFAULT_OUTPUT_PATH, DEFAULT_TILE_DIR};
use crate::io::error::{AmogusError, Result, invalid_parameter};
use crate::io::image::{ImageAssembler, export_image};
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "amogen")]
#[command(
    author,
    version,
    about = "Generate amogus name variants and their stacked sprite images"
)]
/// Command-line arguments for the generator
pub struct Cli {
    /// Strategy to use: extend, cut or mirror (random when omitted)
    #[arg(short, long, value_parser = parse_action)]
    pub action: Option<Action>,

    /// Random seed for reproducible generation
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of characters to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Output image path (numbered when generating several characters)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Directory holding the tile images
    #[arg(short, long, default_value = DEFAULT_TILE_DIR)]
    pub tiles: PathBuf,

    /// Relative weights for random actions as extend:cut:mirror
    #[arg(short, long, value_parser = parse_weights)]
    pub weights: Option<ActionWeights>,

    /// Print names without building images
    #[arg(long)]
    pub names_only: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

fn parse_action(value: &str) -> std::result::Result<Action, String> {
    value.parse().map_err(|e: AmogusError| e.to_string())
}

fn parse_weights(value: &str) -> std::result::Result<ActionWeights, String> {
    value.parse().map_err(|e: AmogusError| e.to_string())
}

impl Cli {
    /// Check if a progress bar should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && self.count > 1
    }
}

/// Runs the generation pipeline described by the CLI arguments
pub struct Generator {
    cli: Cli,
    factory: AmogusFactory<RandomSelector>,
    assembler: ImageAssembler,
}

impl Generator {
    /// Create a generator for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let rng = cli
            .seed
            .map_or_else(RandomSelector::from_entropy, RandomSelector::new);
        let weights = cli.weights.unwrap_or_default();
        let factory = AmogusFactory::with_weights(rng, weights);
        let assembler = ImageAssembler::new(&cli.tiles);

        Self {
            cli,
            factory,
            assembler,
        }
    }

    /// Generate every requested character, writing names to `out`
    ///
    /// Returns the generated names in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the count is zero, if generation fails, if a tile
    /// cannot be loaded, or if an image or name cannot be written.
    pub fn process(&mut self, out: &mut impl Write) -> Result<Vec<String>> {
        if self.cli.count == 0 {
            return Err(invalid_parameter(
                "count",
                &self.cli.count,
                &"at least one character must be generated",
            ));
        }

        let progress = if self.cli.should_show_progress() {
            ProgressManager::new(self.cli.count)
        } else {
            ProgressManager::hidden(self.cli.count)
        };

        let mut names = Vec::with_capacity(self.cli.count);
        for index in 1..=self.cli.count {
            let name = self.process_one(index, out)?;
            progress.advance(&name);
            names.push(name);
        }

        progress.finish();
        Ok(names)
    }

    fn process_one(&mut self, index: usize, out: &mut impl Write) -> Result<String> {
        let mut amogus = self.factory.generate_amogus(self.cli.action)?;

        if !self.cli.names_only {
            let output_path = self.output_path(index);
            let image = amogus.image(&self.assembler)?;
            export_image(image, &output_path)?;
        }

        writeln!(out, "{}", amogus.name()).map_err(|e| AmogusError::FileSystem {
            path: PathBuf::from("<stdout>"),
            operation: "write name",
            source: e,
        })?;

        Ok(amogus.into_name())
    }

    /// Image path for the `index`-th character (1-based)
    pub fn output_path(&self, index: usize) -> PathBuf {
        if self.cli.count == 1 {
            self.cli.output.clone()
        } else {
            numbered_path(&self.cli.output, index)
        }
    }
}

fn numbered_path(path: &Path, index: usize) -> PathBuf {
    let stem = path.file_stem().unwrap_or_default();
    let numbered = path.extension().map_or_else(
        || format!("{}_{index}", stem.to_string_lossy()),
        |extension| {
            format!(
                "{}_{index}.{}",
                stem.to_string_lossy(),
                extension.to_string_lossy()
            )
        },
    );

    if let Some(parent) = path.parent() {
        parent.join(numbered)
    } else {
        PathBuf::from(numbered)
    }
}
