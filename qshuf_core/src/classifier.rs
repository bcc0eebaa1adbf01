use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde::Serialize;

/// The substring that marks the correct answer option.
pub const CORRECT_MARKER: &str = "✅";

/// Substrings that mark an explanation line, in any supported language.
const EXPLANATION_MARKERS: [&str; 3] = ["Ex:", "Explanation:", "व्याख्या"];

/// An enumerated answer option: an optional opening bracket or parenthesis,
/// a single letter `a`–`e` (either case), one of `.` `)` `-`, then a space.
/// Matched against the trimmed line, e.g. `a) 3` or `[B. text`.
static OPTION_LINE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[\(\[ ]?[A-Ea-e][.)\-] ").expect("option pattern compiles"));

/// How a single line of a block is classified. The rules form a
/// first-match-wins chain: [`LineKind::Option`] is checked first, then
/// [`LineKind::Explanation`], and everything else falls through to
/// [`LineKind::Question`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
	/// An answer option — matches the enumerated pattern or carries the
	/// correct marker.
	Option,
	/// An explanation line — contains one of the explanation markers.
	Explanation,
	/// Question text, including the stem, blank lines, and anything not
	/// otherwise classified.
	Question,
}

/// Classify one line. Lines are never rejected; the question group is the
/// default bucket.
pub fn classify_line(line: &str) -> LineKind {
	if OPTION_LINE.is_match(line.trim()) || line.contains(CORRECT_MARKER) {
		LineKind::Option
	} else if EXPLANATION_MARKERS.iter().any(|marker| line.contains(marker)) {
		LineKind::Explanation
	} else {
		LineKind::Question
	}
}

/// One question block partitioned into its three line groups. Every line of
/// the source block lands in exactly one group, and each group preserves the
/// original relative line order. Lines are kept raw — classification looks at
/// trimmed text, but reassembly reproduces the original spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedBlock<'a> {
	/// Question stem and any unclassified lines.
	pub question: Vec<&'a str>,
	/// Answer option lines, shuffled later by the engine.
	pub options: Vec<&'a str>,
	/// Explanation lines.
	pub explanation: Vec<&'a str>,
}

/// Split a raw block into question, option, and explanation line groups.
pub fn classify(block: &str) -> ClassifiedBlock<'_> {
	let mut question = Vec::new();
	let mut options = Vec::new();
	let mut explanation = Vec::new();

	for line in block.split('\n') {
		match classify_line(line) {
			LineKind::Option => options.push(line),
			LineKind::Explanation => explanation.push(line),
			LineKind::Question => question.push(line),
		}
	}

	ClassifiedBlock {
		question,
		options,
		explanation,
	}
}

impl ClassifiedBlock<'_> {
	/// Index of the option carrying the correct marker, if any. When several
	/// options carry the marker (degenerate input) the first one wins.
	pub fn correct_index(&self) -> Option<usize> {
		self.options
			.iter()
			.position(|line| line.contains(CORRECT_MARKER))
	}

	/// Rebuild the block text: question lines, option lines, and explanation
	/// lines each joined with single line breaks, with one line break between
	/// the groups. Empty groups still contribute their separator, producing
	/// adjacent line breaks.
	pub fn reassemble(&self) -> String {
		format!(
			"{}\n{}\n{}",
			self.question.join("\n"),
			self.options.join("\n"),
			self.explanation.join("\n")
		)
	}
}
