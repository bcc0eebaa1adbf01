use std::sync::LazyLock;

use regex::Regex;

/// A line that opens a new question block: `Q` followed by digits, or digits
/// followed by a period (`Q12`, `7.`). Anchored to the start of a line.
static BLOCK_START: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^(?:Q[0-9]+|[0-9]+\.)").expect("block-start pattern compiles"));

/// Split a raw document into question blocks.
///
/// The document is trimmed, then cut at every line break whose following line
/// matches `BLOCK_START`. The cut only ever happens at the start of
/// a line, never mid-line, and the line break between two blocks is consumed.
/// Any text before the first marker (or the whole document when no marker
/// exists) is kept as block zero.
///
/// A blank or whitespace-only document yields no blocks.
pub fn segment(text: &str) -> Vec<&str> {
	let text = text.trim();
	if text.is_empty() {
		return Vec::new();
	}

	let mut blocks = Vec::new();
	let mut start = 0;

	for (newline, _) in text.match_indices('\n') {
		let line_start = newline + 1;
		if BLOCK_START.is_match(&text[line_start..]) {
			blocks.push(&text[start..newline]);
			start = line_start;
		}
	}

	blocks.push(&text[start..]);
	blocks
}
