use ratatui::style::{Color, Modifier, Style};

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "spring";

/// Styles used by the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub header: Style,
	pub recent_header: Style,
	pub row_highlight: Style,
	pub prompt: Style,
	pub empty: Style,
	pub highlight: Style,
	pub selected: Style,
	pub muted: Style,
	pub border: Style,
	pub focused_border: Style,
}

pub const SPRING: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(109, 179, 63))
		.add_modifier(Modifier::BOLD),
	recent_header: Style::new()
		.fg(Color::Rgb(241, 196, 15))
		.add_modifier(Modifier::BOLD),
	row_highlight: Style::new()
		.bg(Color::Rgb(35, 60, 30))
		.fg(Color::Rgb(236, 240, 241)),
	prompt: Style::new().fg(Color::Rgb(109, 179, 63)),
	empty: Style::new().fg(Color::DarkGray),
	highlight: Style::new()
		.fg(Color::Rgb(241, 196, 15))
		.add_modifier(Modifier::BOLD),
	selected: Style::new().fg(Color::Rgb(109, 179, 63)),
	muted: Style::new().fg(Color::Gray),
	border: Style::new().fg(Color::DarkGray),
	focused_border: Style::new().fg(Color::Rgb(109, 179, 63)),
};

pub const SLATE: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(15, 23, 42)),
	recent_header: Style::new()
		.fg(Color::Rgb(250, 204, 21))
		.bg(Color::Rgb(15, 23, 42)),
	row_highlight: Style::new()
		.bg(Color::Rgb(30, 41, 59))
		.fg(Color::Rgb(250, 204, 21)),
	prompt: Style::new().fg(Color::LightCyan),
	empty: Style::new().fg(Color::DarkGray),
	highlight: Style::new()
		.fg(Color::Yellow)
		.add_modifier(Modifier::BOLD),
	selected: Style::new().fg(Color::LightCyan),
	muted: Style::new().fg(Color::Rgb(148, 163, 184)),
	border: Style::new().fg(Color::Rgb(71, 85, 105)),
	focused_border: Style::new().fg(Color::LightCyan),
};

const BUILT_IN: [(&str, Theme); 2] = [(DEFAULT_THEME, SPRING), ("slate", SLATE)];

/// Names of the bundled themes.
#[must_use]
pub fn names() -> Vec<&'static str> {
	BUILT_IN.iter().map(|(name, _)| *name).collect()
}

/// Look up a bundled theme, ignoring case and surrounding whitespace.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let wanted = name.trim();
	BUILT_IN
		.iter()
		.find(|(candidate, _)| candidate.eq_ignore_ascii_case(wanted))
		.map(|(_, theme)| *theme)
}

impl Default for Theme {
	fn default() -> Self {
		SPRING
	}
}
