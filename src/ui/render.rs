use ratatui::{
	Frame,
	layout::{Alignment, Constraint, Direction, Layout, Rect},
	style::Style,
	text::{Line, Span},
	widgets::{Block, Borders, Paragraph},
};
use initz_core::{FlatItem, RECENT_HEADER};
use unicode_width::UnicodeWidthStr;

use super::highlight::highlight_spans;
use super::state::{App, Focus, InputMode};
use crate::project::ProjectField;

const EMPTY_MESSAGE: &str = "No dependencies match your search";
const RECENT_MARKER: &str = "★ ";
const FIELD_LABEL_WIDTH: usize = 12;
const CHECKBOX_WIDTH: usize = 4;

impl<'a> App<'a> {
	pub(crate) fn draw(&self, frame: &mut Frame) {
		let project_height = u16::try_from(ProjectField::ALL.len() + 3).unwrap_or(u16::MAX);
		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(project_height),
				Constraint::Min(3),
				Constraint::Length(1),
				Constraint::Length(1),
			])
			.split(frame.area());

		self.render_project(frame, layout[0]);
		self.render_dependencies(frame, layout[1]);
		frame.render_widget(Paragraph::new(self.summary_line()), layout[2]);
		frame.render_widget(
			Paragraph::new(self.key_hints()).style(self.theme.muted),
			layout[3],
		);
	}

	fn panel(&self, title: String, focus: Focus) -> Block<'static> {
		let border = if self.focus == focus {
			self.theme.focused_border
		} else {
			self.theme.border
		};
		Block::default()
			.borders(Borders::ALL)
			.border_style(border)
			.title(title)
	}

	fn render_project(&self, frame: &mut Frame, area: Rect) {
		let focused = self.focus == Focus::Project;
		let mut lines: Vec<Line> = ProjectField::ALL
			.iter()
			.map(|&field| {
				let active = focused && field == self.project_field;
				let marker = if active { "▶ " } else { "  " };
				let value = self.option_label(field);
				let line = Line::from(vec![
					Span::raw(marker),
					Span::styled(
						format!("{:<FIELD_LABEL_WIDTH$}", field.label()),
						self.theme.muted,
					),
					Span::raw(value),
				]);
				if active {
					line.style(self.theme.row_highlight)
				} else {
					line
				}
			})
			.collect();
		lines.push(Line::styled(
			format!(
				"  {}:{}  package {}",
				self.project.group_id(),
				self.project.artifact_id(),
				self.project.package_name
			),
			self.theme.muted,
		));

		let block = self.panel(" Project ".to_owned(), Focus::Project);
		frame.render_widget(Paragraph::new(lines).block(block), area);
	}

	fn option_label(&self, field: ProjectField) -> String {
		let value = self.project.value(field);
		field
			.options(self.metadata)
			.iter()
			.find(|option| option.id == value)
			.map_or_else(|| value.to_owned(), |option| option.label().to_owned())
	}

	fn render_dependencies(&self, frame: &mut Frame, area: Rect) {
		let title = format!(" Dependencies · {} ", self.picker.active_category_name());
		let block = self.panel(title, Focus::Dependencies);
		let inner = block.inner(area);
		frame.render_widget(block, area);

		let sections = Layout::default()
			.direction(Direction::Vertical)
			.constraints([Constraint::Length(1), Constraint::Min(0)])
			.split(inner);
		frame.render_widget(Paragraph::new(self.search_line()), sections[0]);

		let list_area = sections[1];
		let items = self.picker.items();
		if items.is_empty() {
			let empty = Paragraph::new(EMPTY_MESSAGE)
				.alignment(Alignment::Center)
				.style(self.theme.empty);
			frame.render_widget(empty, list_area);
			return;
		}

		let height = usize::from(list_area.height.min(self.visible_rows));
		let start = window_start(self.picker.cursor(), items.len(), height);
		let width = usize::from(list_area.width);
		let lines: Vec<Line> = items
			.iter()
			.enumerate()
			.skip(start)
			.take(height)
			.map(|(index, item)| self.item_line(item, index, width))
			.collect();
		frame.render_widget(Paragraph::new(lines), list_area);
	}

	fn search_line(&self) -> Line<'static> {
		match self.input_mode {
			InputMode::Search => Line::from(vec![
				Span::styled("/ ", self.theme.prompt),
				Span::raw(self.search_input.clone()),
				Span::styled("▏", self.theme.prompt),
			]),
			InputMode::Browse if !self.search_input.is_empty() => Line::from(vec![
				Span::styled("/ ", self.theme.muted),
				Span::raw(self.search_input.clone()),
			]),
			InputMode::Browse => Line::styled("Press / to search", self.theme.muted),
		}
	}

	fn item_line(&self, item: &FlatItem, index: usize, width: usize) -> Line<'static> {
		match item {
			FlatItem::Header { label } if label == RECENT_HEADER => {
				Line::styled(format!("{RECENT_MARKER}{label}"), self.theme.recent_header)
			}
			FlatItem::Header { label } => Line::styled(label.clone(), self.theme.header),
			FlatItem::Row { dependency, .. } => {
				let selected = self.is_selected(&dependency.id);
				let checkbox = if selected { "[x] " } else { "[ ] " };
				let checkbox_style = if selected {
					self.theme.selected
				} else {
					Style::default()
				};
				let name_width = width.saturating_sub(CHECKBOX_WIDTH + dependency.id.width() + 1);

				let mut spans = vec![Span::styled(checkbox, checkbox_style)];
				spans.extend(highlight_spans(
					&dependency.name,
					item.positions(),
					Some(name_width),
					Style::default(),
					self.theme.highlight,
				));
				spans.push(Span::raw(" "));
				spans.push(Span::styled(dependency.id.clone(), self.theme.muted));

				let line = Line::from(spans);
				if index == self.picker.cursor() && self.focus == Focus::Dependencies {
					line.style(self.theme.row_highlight)
				} else {
					line
				}
			}
		}
	}

	fn summary_line(&self) -> Line<'static> {
		let selection = &self.project.dependencies;
		if selection.is_empty() {
			return Line::styled("Selected: none", self.theme.muted);
		}
		let ids: Vec<&str> = selection.iter().collect();
		Line::from(vec![
			Span::styled(format!("Selected ({}): ", selection.len()), self.theme.muted),
			Span::styled(ids.join(", "), self.theme.selected),
		])
	}

	fn key_hints(&self) -> &'static str {
		match (self.input_mode, self.focus) {
			(InputMode::Search, _) => "type to filter · ↑↓ move · enter toggle · esc clear · tab browse",
			(InputMode::Browse, Focus::Project) => "↑↓ field · ←→ change · tab dependencies · g generate · q quit",
			(InputMode::Browse, Focus::Dependencies) => {
				"↑↓ move · space toggle · / search · c category · x clear · g generate · q quit"
			}
		}
	}
}

/// First visible index so the cursor sits mid-window, clamped to the list.
fn window_start(cursor: usize, len: usize, height: usize) -> usize {
	cursor
		.saturating_sub(height / 2)
		.min(len.saturating_sub(height))
}
