use std::mem;

use ratatui::style::Style;
use ratatui::text::Span;
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

const ELLIPSIS: &str = "…";

/// Split `text` into spans, styling the characters at `positions` with
/// `highlight` and the rest with `base`.
///
/// Positions are character offsets. With `max_width` the text is cut on the
/// right and positions past the cut are dropped.
pub(crate) fn highlight_spans(
	text: &str,
	positions: Option<&[usize]>,
	max_width: Option<usize>,
	base: Style,
	highlight: Style,
) -> Vec<Span<'static>> {
	let (display, positions) = match max_width {
		Some(width) => truncate_with_highlight(text, positions, width),
		None => (text.to_owned(), positions.map(<[usize]>::to_vec)),
	};

	let Some(mut positions) = positions.filter(|positions| !positions.is_empty()) else {
		return vec![Span::styled(display, base)];
	};
	positions.sort_unstable();
	let mut next = positions.into_iter().peekable();
	let mut buffer = String::new();
	let mut highlighted = false;
	let mut spans = Vec::new();

	for (index, ch) in display.chars().enumerate() {
		while next.next_if(|&position| position < index).is_some() {}
		let hit = next.next_if_eq(&index).is_some();
		if hit != highlighted {
			if !buffer.is_empty() {
				let style = if highlighted { highlight } else { base };
				spans.push(Span::styled(mem::take(&mut buffer), style));
			}
			highlighted = hit;
		}
		buffer.push(ch);
	}

	if !buffer.is_empty() {
		let style = if highlighted { highlight } else { base };
		spans.push(Span::styled(buffer, style));
	}
	spans
}

fn truncate_with_highlight(
	text: &str,
	positions: Option<&[usize]>,
	max_width: usize,
) -> (String, Option<Vec<usize>>) {
	if max_width == 0 {
		return (String::new(), None);
	}
	if text.width() <= max_width {
		return (text.to_owned(), positions.map(<[usize]>::to_vec));
	}

	let ellipsis_width = ELLIPSIS.width();
	if max_width <= ellipsis_width {
		return (ELLIPSIS.to_owned(), None);
	}

	let (slice, _) = text.unicode_truncate(max_width - ellipsis_width);
	let limit = slice.chars().count();
	let positions = positions.and_then(|positions| {
		let kept: Vec<usize> = positions.iter().copied().filter(|&index| index < limit).collect();
		(!kept.is_empty()).then_some(kept)
	});
	(format!("{slice}{ELLIPSIS}"), positions)
}
