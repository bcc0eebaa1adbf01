use std::collections::VecDeque;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::Deserialize;
use serde::Serialize;
use tracing::warn;

use crate::classifier::CORRECT_MARKER;
use crate::classifier::ClassifiedBlock;
use crate::classifier::classify;
use crate::segmenter::segment;

/// How many recent correct-option positions are blocked for the next block.
const HISTORY_WINDOW: usize = 3;

/// How many permutations are tried per block before giving up on the
/// position constraint.
const MAX_SHUFFLE_ATTEMPTS: usize = 10;

/// A degenerate block that was handled leniently instead of failing the
/// whole call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ShuffleDiagnostic {
	/// A block with two or more options has no line carrying the correct
	/// marker. Its options were shuffled without the position constraint and
	/// it contributed nothing to the position history.
	MissingCorrectMarker {
		/// 1-indexed position of the block in the output document.
		block: usize,
		/// Number of option lines in the block.
		options: usize,
	},
}

impl ShuffleDiagnostic {
	pub fn message(&self) -> String {
		match self {
			Self::MissingCorrectMarker { block, options } => {
				format!(
					"block {block} has {options} option(s) but none carries the `✅` marker; \
					 shuffled without the position constraint"
				)
			}
		}
	}
}

/// Result of processing one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShuffleOutcome {
	/// The reassembled document. Starts with two line breaks and separates
	/// blocks with blank lines; empty when the input was blank.
	pub content: String,
	/// Number of question blocks found in the input.
	pub blocks: usize,
	/// Degenerate blocks encountered along the way. These never fail the
	/// call; the collaborator decides whether to surface them.
	pub diagnostics: Vec<ShuffleDiagnostic>,
}

/// Rolling window of the positions where the correct option landed in the
/// most recently shuffled blocks. Bounded to [`HISTORY_WINDOW`] entries so a
/// long document never grows it.
#[derive(Debug, Default)]
struct PositionHistory {
	recent: VecDeque<usize>,
}

impl PositionHistory {
	fn contains(&self, index: usize) -> bool {
		self.recent.contains(&index)
	}

	fn push(&mut self, index: usize) {
		if self.recent.len() == HISTORY_WINDOW {
			self.recent.pop_front();
		}
		self.recent.push_back(index);
	}
}

/// Outcome of shuffling a single block's options.
enum OptionShuffle {
	/// Fewer than two options; the block was left untouched and contributes
	/// no history entry.
	Skipped,
	/// A permutation was accepted with the correct option at this index.
	Placed(usize),
	/// No option carries the correct marker; the block was shuffled once,
	/// unconstrained.
	MissingMarker,
}

/// Shuffle one block's options in place, retrying until the correct option
/// lands outside the recent-position window. The constraint is best-effort:
/// after [`MAX_SHUFFLE_ATTEMPTS`] rejected permutations the last one stands.
fn shuffle_options(
	options: &mut [&str],
	history: &PositionHistory,
	rng: &mut impl Rng,
) -> OptionShuffle {
	if options.len() < 2 {
		return OptionShuffle::Skipped;
	}

	let mut index = 0;
	for _ in 0..MAX_SHUFFLE_ATTEMPTS {
		options.shuffle(rng);
		match options.iter().position(|line| line.contains(CORRECT_MARKER)) {
			Some(found) => index = found,
			None => return OptionShuffle::MissingMarker,
		}
		if !history.contains(index) {
			break;
		}
	}

	OptionShuffle::Placed(index)
}

/// Randomize a quiz document: the block order is shuffled uniformly, then
/// each block's options are shuffled under the recent-position constraint,
/// and the document is reassembled.
///
/// The whole operation is a pure function of the input text and the random
/// source. Position history lives only for the duration of one call, so
/// repeated or concurrent invocations never influence each other.
///
/// A blank or whitespace-only document produces an empty [`ShuffleOutcome`]
/// rather than an error.
pub fn shuffle_document(content: impl AsRef<str>, rng: &mut impl Rng) -> ShuffleOutcome {
	let content = content.as_ref();
	let mut blocks: Vec<ClassifiedBlock<'_>> =
		segment(content).into_iter().map(classify).collect();

	if blocks.is_empty() {
		return ShuffleOutcome {
			content: String::new(),
			blocks: 0,
			diagnostics: Vec::new(),
		};
	}

	// Block order first; this shuffle is unconstrained.
	blocks.shuffle(rng);

	let mut history = PositionHistory::default();
	let mut diagnostics = Vec::new();
	let mut rendered = Vec::with_capacity(blocks.len());

	for (position, block) in blocks.iter_mut().enumerate() {
		match shuffle_options(&mut block.options, &history, rng) {
			OptionShuffle::Placed(index) => history.push(index),
			OptionShuffle::MissingMarker => {
				warn!(
					block = position + 1,
					options = block.options.len(),
					"block has options but no correct marker; shuffled unconstrained"
				);
				diagnostics.push(ShuffleDiagnostic::MissingCorrectMarker {
					block: position + 1,
					options: block.options.len(),
				});
			}
			OptionShuffle::Skipped => {}
		}
		rendered.push(block.reassemble());
	}

	ShuffleOutcome {
		content: format!("\n\n{}", rendered.join("\n\n")),
		blocks: rendered.len(),
		diagnostics,
	}
}

/// Convenience wrapper over [`shuffle_document`] with a seeded [`StdRng`].
/// Two calls with the same seed and input produce identical output.
pub fn shuffle_document_seeded(content: impl AsRef<str>, seed: u64) -> ShuffleOutcome {
	let mut rng = StdRng::seed_from_u64(seed);
	shuffle_document(content, &mut rng)
}
