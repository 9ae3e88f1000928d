use clientes_autocomplete::{RenderRow, RenderView, RowAction, RowKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, HighlightSpacing, Row, Table, TableState};
use unicode_width::UnicodeWidthStr;

use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
const STATS_SEPARATOR: &str = "  ";
const DETAILS_SEPARATOR: &str = " · ";

/// Screen area of a rendered row that can be clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowHitbox {
	pub area: Rect,
	pub action: RowAction,
}

/// Height needed to show every row of `view` inside the border.
#[must_use]
pub fn dropdown_height(view: &RenderView) -> u16 {
	u16::try_from(view.rows.len())
		.unwrap_or(u16::MAX)
		.saturating_add(2)
}

/// Render the result list and return the clickable rows.
pub fn render_dropdown(
	frame: &mut Frame,
	area: Rect,
	view: &RenderView,
	title: &str,
	theme: &Theme,
) -> Vec<RowHitbox> {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style())
		.title(Span::styled(format!(" {title} "), theme.border_style()));
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let stats_width = view
		.rows
		.iter()
		.map(|row| stats_text(row).width())
		.max()
		.unwrap_or(0);
	let stats_width = u16::try_from(stats_width).unwrap_or(u16::MAX);

	let rows: Vec<Row<'_>> = view.rows.iter().map(|row| table_row(row, theme)).collect();
	let table = Table::new(rows, [Constraint::Fill(1), Constraint::Length(stats_width)])
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::Always)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);

	let mut state = TableState::default().with_selected(view.active_row());
	frame.render_stateful_widget(table, inner, &mut state);

	let offset = state.offset();
	view.rows
		.iter()
		.enumerate()
		.skip(offset)
		.take(inner.height as usize)
		.filter_map(|(index, row)| {
			let action = row.action.clone()?;
			let y = inner.y + u16::try_from(index - offset).ok()?;
			Some(RowHitbox {
				area: Rect::new(inner.x, y, inner.width, 1),
				action,
			})
		})
		.collect()
}

fn table_row<'a>(row: &'a RenderRow, theme: &Theme) -> Row<'a> {
	let label = match row.kind {
		RowKind::Customer => customer_line(row, theme),
		RowKind::Loading | RowKind::Empty => Line::styled(row.label.as_str(), theme.empty_style()),
		RowKind::Error => Line::styled(row.label.as_str(), theme.error),
		RowKind::Create => Line::styled(format!("+ {}", row.label), theme.prompt),
	};
	let stats = Line::styled(stats_text(row), theme.empty_style()).right_aligned();
	Row::new([Cell::from(label), Cell::from(stats)])
}

fn customer_line<'a>(row: &'a RenderRow, theme: &Theme) -> Line<'a> {
	let mut spans = vec![Span::raw(row.label.as_str())];
	if let Some(badge) = &row.badge {
		spans.push(Span::raw(" "));
		spans.push(Span::styled(format!("[{badge}]"), theme.highlight));
	}
	if !row.details.is_empty() {
		spans.push(Span::styled(
			format!("  {}", row.details.join(DETAILS_SEPARATOR)),
			theme.empty_style(),
		));
	}
	Line::from(spans)
}

fn stats_text(row: &RenderRow) -> String {
	row.stats.join(STATS_SEPARATOR)
}

#[cfg(test)]
mod tests {
	use clientes_autocomplete::{AutocompleteOptions, Presentation, SearchSession, render};
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;
	use crate::style::theme::SLATE;
	use crate::test_support::buffer_to_string;

	fn create_view() -> RenderView {
		RenderView {
			visible: true,
			rows: vec![
				RenderRow {
					kind: RowKind::Customer,
					label: "Ana Gómez".into(),
					details: vec!["555-0101".into()],
					badge: Some("VIP".into()),
					stats: vec!["5 visitas".into(), "$120.50".into()],
					active: true,
					action: Some(RowAction::Select(0)),
				},
				RenderRow {
					kind: RowKind::Create,
					label: "Crear nuevo cliente: \"ana\"".into(),
					details: Vec::new(),
					badge: None,
					stats: Vec::new(),
					active: false,
					action: Some(RowAction::Create("ana".into())),
				},
			],
		}
	}

	#[test]
	fn rows_render_with_badge_stats_and_highlight() {
		let view = create_view();
		let mut terminal = Terminal::new(TestBackend::new(60, 4)).expect("terminal");
		let mut hitboxes = Vec::new();
		terminal
			.draw(|frame| {
				let area = frame.area();
				hitboxes = render_dropdown(frame, area, &view, "Clientes", &SLATE);
			})
			.expect("draw");

		let screen = buffer_to_string(terminal.backend().buffer());
		let lines: Vec<&str> = screen.lines().collect();
		assert!(lines[0].contains("Clientes"));
		assert!(lines[1].contains("▶ Ana Gómez [VIP]  555-0101"));
		assert!(lines[1].trim_end().ends_with("5 visitas  $120.50│"));
		assert!(lines[2].contains("+ Crear nuevo cliente: \"ana\""));

		assert_eq!(hitboxes.len(), 2);
		assert_eq!(hitboxes[0].area.y, 1);
		assert_eq!(hitboxes[1].action, RowAction::Create("ana".into()));
	}

	#[test]
	fn height_covers_rows_and_border() {
		let idle = render(
			&SearchSession::default(),
			&AutocompleteOptions::default(),
			false,
			&Presentation::default(),
		);
		assert_eq!(dropdown_height(&idle), 2);
		assert_eq!(dropdown_height(&create_view()), 4);
	}
}
