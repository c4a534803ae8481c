//! Ranked fuzzy scoring of a query against a single text field.
//!
//! A contiguous, case-insensitive occurrence of the query always outranks a
//! scattered one: substring hits score at least [`SUBSTRING_SCORE`], while a
//! subsequence match accumulates per-character bonuses that stay far below
//! it for any realistic query length.
//!
//! Positions are char offsets into the original target text. Case folding is
//! done one char at a time and only when a char lowercases to exactly one
//! char, so every folded offset is also a valid offset into the original.

/// Base score for a contiguous case-insensitive occurrence.
pub const SUBSTRING_SCORE: u32 = 1000;
/// Extra points for a substring hit at offset 0, minus one per offset.
pub const SUBSTRING_POSITION_BONUS: u32 = 100;

const MATCH_SCORE: u32 = 10;
const CONSECUTIVE_BONUS: u32 = 15;
const WORD_BOUNDARY_BONUS: u32 = 20;
const CAMEL_BOUNDARY_BONUS: u32 = 15;
const DENSITY_WEIGHT: usize = 50;

/// Score and matched char offsets for one query/target pair.
///
/// A zero score means no match, and then `positions` is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
	pub score: u32,
	pub positions: Vec<usize>,
}

impl MatchResult {
	#[must_use]
	pub fn is_match(&self) -> bool {
		self.score > 0
	}
}

/// Score `query` against `target`.
///
/// Pure and total: any pair of strings yields a result, and an empty query or
/// target never matches.
#[must_use]
pub fn score(query: &str, target: &str) -> MatchResult {
	if query.is_empty() || target.is_empty() {
		return MatchResult::default();
	}

	let original: Vec<char> = target.chars().collect();
	let folded: Vec<char> = original.iter().copied().map(fold).collect();
	let needle: Vec<char> = query.chars().map(fold).collect();

	if let Some(start) = find_run(&folded, &needle) {
		return substring_match(start, needle.len());
	}

	subsequence_match(&needle, &original, &folded).unwrap_or_default()
}

fn fold(ch: char) -> char {
	let mut lower = ch.to_lowercase();
	match (lower.next(), lower.next()) {
		(Some(single), None) => single,
		_ => ch,
	}
}

fn find_run(haystack: &[char], needle: &[char]) -> Option<usize> {
	if needle.len() > haystack.len() {
		return None;
	}
	haystack
		.windows(needle.len())
		.position(|window| window == needle)
}

fn substring_match(start: usize, len: usize) -> MatchResult {
	let offset = u32::try_from(start).unwrap_or(u32::MAX);
	let bonus = SUBSTRING_POSITION_BONUS.saturating_sub(offset);
	MatchResult {
		score: SUBSTRING_SCORE + bonus,
		positions: (start..start + len).collect(),
	}
}

fn subsequence_match(needle: &[char], original: &[char], folded: &[char]) -> Option<MatchResult> {
	let mut positions = Vec::with_capacity(needle.len());
	let mut score: u32 = 0;
	let mut scan = 0;
	let mut previous: Option<usize> = None;

	for &wanted in needle {
		let index = scan + folded.get(scan..)?.iter().position(|&ch| ch == wanted)?;

		let mut gained = MATCH_SCORE;
		if previous.is_some_and(|prev| index == prev + 1) {
			gained += CONSECUTIVE_BONUS;
		}
		if index == 0 || !original[index - 1].is_alphanumeric() {
			gained += WORD_BOUNDARY_BONUS;
		}
		if index > 0 && original[index].is_uppercase() && original[index - 1].is_lowercase() {
			gained += CAMEL_BOUNDARY_BONUS;
		}
		score = score.saturating_add(gained);

		positions.push(index);
		previous = Some(index);
		scan = index + 1;
	}

	let first = *positions.first()?;
	let last = *positions.last()?;
	let span = last - first + 1;
	let density = DENSITY_WEIGHT * needle.len() / span;
	score = score.saturating_add(u32::try_from(density).unwrap_or(u32::MAX));

	Some(MatchResult { score, positions })
}
