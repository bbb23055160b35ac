//! Viewer configuration: command line flags, environment and defaults.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use ringca_core::{generation_count, Radius, Result, RuleTable};

/// Radius-3 rule the viewer starts with when none is given.
pub const DEFAULT_RULE: &str = "00000000001111111111000000000011111111110000000000111111111100000000001111111111000000000011111111110000000000111111111111111111";

/// Default neighborhood radius.
pub const DEFAULT_RADIUS: u32 = 3;

/// Default number of generations per run.
pub const DEFAULT_GENERATIONS: i64 = 100;

/// How a finished grid is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Block characters, one line per generation
    #[default]
    Text,
    /// Plain PBM (P1) bitmap
    Pbm,
    /// JSON document with the generation rows
    Json,
}

/// Command line interface for `ca-viewer`.
#[derive(Debug, Parser)]
#[command(name = "ca-viewer")]
#[command(version, about = "Run one-dimensional cellular automata on a ring and draw every generation")]
#[command(long_about = "Takes a rule bit-string (8, 32 or 128 bits for radius 1, 2 or 3) and runs it \
on initial bit-strings entered at the prompt. At the prompt, <enter> or Q quits and I enters a new rule. \
Pass --initial to run once without prompting.")]
pub struct Cli {
    /// Rule bit-string; defaults to a built-in rule for the chosen radius
    #[arg(short = 'i', long = "rule", env = "RINGCA_RULE")]
    pub rule: Option<String>,

    /// Neighborhood radius (1, 2 or 3)
    #[arg(short, long, env = "RINGCA_RADIUS", default_value_t = DEFAULT_RADIUS)]
    pub radius: u32,

    /// Generations per run, counting the initial configuration
    #[arg(
        short = 'n',
        long,
        env = "RINGCA_GENERATIONS",
        default_value_t = DEFAULT_GENERATIONS,
        allow_negative_numbers = true
    )]
    pub generations: i64,

    /// Run once on this initial bit-string instead of prompting
    #[arg(short = 's', long)]
    pub initial: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the rendered grid to a file instead of stdout (single runs only)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Resolved viewer settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    /// Rule bit-string; `None` selects [`default_rule`] for the radius.
    pub rule: Option<String>,
    /// Raw radius, validated by [`ViewerConfig::rule_table`].
    pub radius: u32,
    /// Raw generation count, validated by [`ViewerConfig::generation_count`].
    pub generations: i64,
    /// Initial configuration for a single non-interactive run.
    pub initial: Option<String>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            rule: None,
            radius: DEFAULT_RADIUS,
            generations: DEFAULT_GENERATIONS,
            initial: None,
            format: OutputFormat::default(),
            output: None,
        }
    }
}

impl From<Cli> for ViewerConfig {
    fn from(cli: Cli) -> Self {
        Self {
            rule: cli.rule,
            radius: cli.radius,
            generations: cli.generations,
            initial: cli.initial,
            format: cli.format,
            output: cli.output,
        }
    }
}

impl ViewerConfig {
    /// Build the rule table, checking radius, length and alphabet.
    pub fn rule_table(&self) -> Result<RuleTable> {
        let radius = Radius::try_from(self.radius)?;
        match &self.rule {
            Some(bits) => RuleTable::with_radius(bits, radius),
            None => Ok(default_rule(radius)),
        }
    }

    /// Validated generation count.
    pub fn generation_count(&self) -> Result<usize> {
        generation_count(self.generations)
    }
}

/// Built-in rule for each radius.
///
/// - radius 1: Wolfram rule 30
/// - radius 2: majority vote over five cells
/// - radius 3: [`DEFAULT_RULE`]
pub fn default_rule(radius: Radius) -> RuleTable {
    match radius {
        Radius::One => RuleTable::from_wolfram_code(30),
        Radius::Two => RuleTable::from_fn(radius, |idx| idx.count_ones() >= 3),
        Radius::Three => {
            RuleTable::with_radius(DEFAULT_RULE, radius).expect("built-in rule is 128 bits")
        }
    }
}
