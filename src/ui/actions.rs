use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{App, Exit, Focus, InputMode};

impl<'a> App<'a> {
	/// Apply a key press, returning how the session ends if it does.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<Exit> {
		if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
			return Some(Exit::Cancelled);
		}
		match self.input_mode {
			InputMode::Search => {
				self.handle_search_key(key);
				None
			}
			InputMode::Browse => match self.focus {
				Focus::Dependencies => self.handle_dependency_key(key),
				Focus::Project => self.handle_project_key(key),
			},
		}
	}

	fn handle_search_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Esc => {
				self.search_input.clear();
				self.picker.set_query("");
				self.input_mode = InputMode::Browse;
			}
			KeyCode::Tab => self.input_mode = InputMode::Browse,
			KeyCode::Enter => self.toggle_current(),
			KeyCode::Up => self.picker.move_up(),
			KeyCode::Down => self.picker.move_down(),
			KeyCode::Backspace => {
				if self.search_input.pop().is_some() {
					self.picker.set_query(&self.search_input);
				}
			}
			KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.search_input.push(ch);
				self.picker.set_query(&self.search_input);
			}
			_ => {}
		}
	}

	fn handle_dependency_key(&mut self, key: KeyEvent) -> Option<Exit> {
		match key.code {
			KeyCode::Esc | KeyCode::Char('q') => return Some(Exit::Cancelled),
			KeyCode::Char('g') => return Some(Exit::Accepted),
			KeyCode::Up => self.move_up_or_leave(),
			KeyCode::Down => self.picker.move_down(),
			KeyCode::Enter | KeyCode::Char(' ') => self.toggle_current(),
			KeyCode::Char('/') => self.input_mode = InputMode::Search,
			KeyCode::Char('c') if !self.picker.is_searching() => self.picker.cycle_category(),
			KeyCode::Char('x') => self.project.dependencies.clear(),
			KeyCode::Tab => self.focus = Focus::Project,
			_ => {}
		}
		None
	}

	fn handle_project_key(&mut self, key: KeyEvent) -> Option<Exit> {
		match key.code {
			KeyCode::Esc | KeyCode::Char('q') => return Some(Exit::Cancelled),
			KeyCode::Char('g') => return Some(Exit::Accepted),
			KeyCode::Up => {
				if let Some(previous) = self.project_field.previous() {
					self.project_field = previous;
				}
			}
			KeyCode::Down => match self.project_field.next() {
				Some(next) => self.project_field = next,
				None => self.focus = Focus::Dependencies,
			},
			KeyCode::Left => self.cycle_project_field(-1),
			KeyCode::Right | KeyCode::Enter | KeyCode::Char(' ') => self.cycle_project_field(1),
			KeyCode::Char('/') => {
				self.focus = Focus::Dependencies;
				self.input_mode = InputMode::Search;
			}
			KeyCode::Tab => self.focus = Focus::Dependencies,
			_ => {}
		}
		None
	}

	/// Hand focus to the project panel once the picker cannot move further up.
	fn move_up_or_leave(&mut self) {
		if !self.picker.is_at_top() {
			let before = self.picker.cursor();
			self.picker.move_up();
			if self.picker.cursor() != before {
				return;
			}
		}
		self.focus = Focus::Project;
	}

	fn toggle_current(&mut self) {
		self.picker.toggle_selected(&mut self.project.dependencies);
	}

	fn cycle_project_field(&mut self, step: isize) {
		let field = self.project_field;
		let options = field.options(self.metadata);
		if let Some(value) = self.project.cycle(field, &options, step) {
			log::debug!("{} set to {value}", field.label());
		}
	}
}
