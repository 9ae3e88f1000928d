use clientes_autocomplete::Presentation;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::config::UiLabels;
use crate::outcome::OrderCustomer;
use crate::style::Theme;

/// Render the customer attached to the current order.
pub fn render_order(
	frame: &mut Frame,
	area: Rect,
	order: &OrderCustomer,
	labels: &UiLabels,
	presentation: &Presentation,
	theme: &Theme,
) {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style())
		.title(Span::styled(format!(" {} ", labels.order_title), theme.border_style()));

	let lines = order_lines(order, labels, presentation, theme);
	frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }).block(block), area);
}

fn order_lines<'a>(
	order: &'a OrderCustomer,
	labels: &UiLabels,
	presentation: &Presentation,
	theme: &Theme,
) -> Vec<Line<'a>> {
	if let Some(customer) = &order.customer {
		let mut heading = vec![Span::styled(customer.name.as_str(), theme.highlight)];
		if customer.is_vip {
			heading.push(Span::raw(" "));
			heading.push(Span::styled(format!("[{}]", presentation.vip_badge), theme.highlight));
		}
		let mut lines = vec![Line::from(heading)];
		lines.extend(
			[customer.phone.as_deref(), customer.email.as_deref()]
				.into_iter()
				.flatten()
				.map(|detail| Line::styled(detail, theme.empty_style())),
		);
		lines.push(Line::raw(format!(
			"{} · {}",
			presentation.visits_label(customer.total_visits),
			presentation.currency(customer.total_spent)
		)));
		return lines;
	}

	if let Some(name) = &order.new_customer {
		return vec![Line::from(vec![
			Span::styled(format!("{}: ", labels.new_customer), theme.prompt),
			Span::styled(name.as_str(), theme.highlight),
		])];
	}

	vec![Line::styled(labels.no_customer.clone(), theme.empty_style())]
}
