//! Widgets drawn by the host: the prompt row, the result dropdown and the
//! order panel.

pub mod dropdown;
pub mod order;
pub mod prompt;

use ratatui::layout::Rect;

pub use dropdown::{RowHitbox, dropdown_height, render_dropdown};
pub use order::render_order;
pub use prompt::{InputContext, ProgressState, render_input};

/// Whether the cell at `column`/`row` lies inside `area`.
#[must_use]
pub fn point_in_rect(column: u16, row: u16, area: Rect) -> bool {
	if area.width == 0 || area.height == 0 {
		return false;
	}
	let inside_x = column >= area.x && column < area.x.saturating_add(area.width);
	let inside_y = row >= area.y && row < area.y.saturating_add(area.height);
	inside_x && inside_y
}
