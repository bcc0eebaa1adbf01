use std::path::PathBuf;

use clap::Parser;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Randomize the question and answer-option order of a quiz document.",
	long_about = "qshuf takes a plain-text quiz document — question blocks starting with `Q1` or \
	              `1.`, enumerated answer options with the correct one marked `✅`, and optional \
	              explanation lines — and rewrites it with the question order and the per-question \
	              option order randomized.\n\nThe correct option is kept away from the positions it \
	              occupied in the previous three questions, so the shuffled answer key never forms \
	              an obvious run.\n\nQuick start:\n  qshuf quiz.txt -o shuffled.txt   Shuffle a \
	              file\n  qshuf --seed 42 < quiz.txt       Reproducible shuffle from stdin"
)]
pub struct QshufCli {
	/// Input document. Reads from stdin when omitted.
	pub input: Option<PathBuf>,

	/// Write the shuffled document to this file instead of stdout.
	#[arg(long, short)]
	pub output: Option<PathBuf>,

	/// Seed for the random source. Two runs with the same seed and input
	/// produce identical output; without it the seed comes from entropy.
	#[arg(long)]
	pub seed: Option<u64>,

	/// How diagnostics about degenerate blocks are rendered on stderr.
	#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
	pub format: OutputFormat,

	/// Enable verbose output.
	#[arg(long, short, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable warnings.
	Text,
	/// A single JSON object with the block count and all diagnostics.
	Json,
	/// GitHub Actions annotations (`::warning`) for CI pipelines.
	Github,
}
