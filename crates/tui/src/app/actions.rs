use std::time::Instant;

use clientes_autocomplete::{Key, LookupDispatch};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::App;
use crate::components::point_in_rect;
use crate::outcome::SessionOutcome;

fn list_key(code: KeyCode) -> Key {
	match code {
		KeyCode::Down => Key::ArrowDown,
		KeyCode::Up => Key::ArrowUp,
		KeyCode::Enter => Key::Enter,
		KeyCode::Esc => Key::Escape,
		_ => Key::Other,
	}
}

impl<D: LookupDispatch> App<'_, D> {
	/// Process a keyboard event and return an outcome if the session ends.
	pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Option<SessionOutcome> {
		let list_key = list_key(key.code);
		if list_key != Key::Other && self.controller.handle_key(list_key).is_handled() {
			self.sync();
			return None;
		}

		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Enter => return Some(self.finish(true)),
			KeyCode::Esc => return Some(self.finish(false)),
			KeyCode::Char('c') if ctrl => return Some(self.finish(false)),
			KeyCode::Char('u') if ctrl => {
				self.controller.clear_selection();
				self.order.clear();
				self.sync();
			}
			KeyCode::Tab => {
				if self.controller.session().is_focused() {
					self.controller.blur(now);
				} else {
					self.controller.focus();
				}
			}
			_ => {
				if self.input.input(key) {
					if !self.controller.session().is_focused() {
						self.controller.focus();
					}
					self.controller.handle_input(self.input.text(), now);
				}
			}
		}
		None
	}

	/// Clicking a row activates it.
	pub fn handle_mouse(&mut self, mouse: MouseEvent) {
		if mouse.kind != MouseEventKind::Down(MouseButton::Left) || !self.controller.is_visible() {
			return;
		}
		let action = self
			.hitboxes
			.iter()
			.find(|hitbox| point_in_rect(mouse.column, mouse.row, hitbox.area))
			.map(|hitbox| hitbox.action.clone());
		if let Some(action) = action {
			self.controller.perform(action);
			self.sync();
		}
	}
}
