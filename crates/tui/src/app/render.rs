use clientes_autocomplete::{LookupDispatch, Status, presentation};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin};
use ratatui::text::Line;

use super::App;
use crate::components::{
	InputContext, ProgressState, dropdown_height, render_dropdown, render_input, render_order,
};

impl<D: LookupDispatch> App<'_, D> {
	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let presentation = presentation::current();
		let view = self.controller.view();
		let list_height = if view.visible { dropdown_height(&view) } else { 0 };

		let [prompt_area, list_area, order_area, hint_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(list_height),
			Constraint::Min(3),
			Constraint::Length(1),
		])
		.areas(area);

		let prompt = self.labels.prompt();
		let busy = self.controller.session().status() == Status::Loading;
		let progress_label = if busy { presentation.loading.as_str() } else { "" };
		render_input(
			frame,
			InputContext {
				prompt: &prompt,
				input: &self.input,
				placeholder: Some(self.controller.options().placeholder.as_str()),
				area: prompt_area,
				theme: &self.theme,
			},
			ProgressState {
				label: progress_label,
				busy,
				throbber_state: &self.throbber_state,
			},
		);

		self.hitboxes = if view.visible {
			render_dropdown(frame, list_area, &view, &self.labels.results_title, &self.theme)
		} else {
			Vec::new()
		};

		render_order(frame, order_area, &self.order, &self.labels, presentation, &self.theme);
		frame.render_widget(
			Line::styled(self.labels.hint.as_str(), self.theme.empty_style()),
			hint_area,
		);
	}
}
