//! Shared quiz documents for the test suite.

/// A single well-formed block: stem, three options with the marker on `b`,
/// and an explanation.
pub fn arithmetic_block() -> &'static str {
	"Q1. What is 2+2?\na) 3\nb) 4 ✅\nc) 5\nEx: basic arithmetic"
}

/// Three blocks in `Q<n>` style with markers at different positions.
pub fn three_block_document() -> &'static str {
	"Q1. Capital of France?\na) Paris ✅\nb) Lyon\nc) Nice\nEx: geography\n\
	 Q2. Largest planet?\na) Mars\nb) Jupiter ✅\nc) Venus\n\
	 Q3. Boiling point of water?\na) 90C\nb) 80C\nc) 100C ✅\nExplanation: at sea level"
}

/// A block whose single option can never be shuffled.
pub fn single_option_document() -> &'static str {
	"Q1. Pick the only one\na) the only option ✅"
}

/// A block with several options but no correct marker anywhere.
pub fn unmarked_document() -> &'static str {
	"Q1. Which line is right?\na) first\nb) second\nc) third"
}

/// Build `blocks` numbered blocks, each with `options` options and the
/// correct marker always on the first option.
pub fn marker_first_document(blocks: usize, options: usize) -> String {
	let mut rendered = Vec::with_capacity(blocks);
	for block in 1..=blocks {
		let mut lines = vec![format!("Q{block}. question {block}")];
		for option in 0..options {
			let letter = char::from(b'a' + option as u8);
			if option == 0 {
				lines.push(format!("{letter}) right answer {block} ✅"));
			} else {
				lines.push(format!("{letter}) wrong answer {block}.{option}"));
			}
		}
		rendered.push(lines.join("\n"));
	}
	rendered.join("\n")
}
