use std::collections::VecDeque;
use std::time::{Duration, Instant};

use clientes_autocomplete::{
	Autocomplete, AutocompleteOptions, LookupDispatch, LookupRequest, LookupResponse,
};
use clientes_lookup_api::{Customer, CustomerProvider};
use clientes_provider_fixture::FixtureProvider;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::App;
use crate::test_support::buffer_to_string;

/// Answers every lookup synchronously from a fixture.
struct ImmediateLookups {
	provider: FixtureProvider,
	ready: VecDeque<LookupResponse>,
}

impl LookupDispatch for ImmediateLookups {
	fn dispatch(&mut self, request: LookupRequest) {
		let result = self.provider.lookup(&request.query);
		self.ready.push_back(LookupResponse {
			token: request.token,
			query: request.query,
			result,
		});
	}

	fn try_recv(&mut self) -> Option<LookupResponse> {
		self.ready.pop_front()
	}
}

const DEBOUNCE: Duration = Duration::from_millis(300);

fn app() -> App<'static, ImmediateLookups> {
	let lookups = ImmediateLookups {
		provider: FixtureProvider::new(vec![
			Customer::new("c-1", "Ana Gómez")
				.with_phone("555-0101")
				.vip(true)
				.with_history(5, 120.5),
			Customer::new("c-2", "Juan Pérez").with_history(2, 18.0),
			Customer::new("c-3", "Mariana Ruiz").with_history(12, 1234.5),
		]),
		ready: VecDeque::new(),
	};
	let controller = Autocomplete::new(AutocompleteOptions::default(), lookups).on_create(|_| {});
	App::new(controller)
}

fn press(app: &mut App<'static, ImmediateLookups>, code: KeyCode, now: Instant) -> Option<crate::SessionOutcome> {
	app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), now)
}

/// Type `text`, then let the debounce elapse and the lookup land.
fn search(app: &mut App<'static, ImmediateLookups>, text: &str, now: Instant) {
	for ch in text.chars() {
		press(app, KeyCode::Char(ch), now);
	}
	app.tick(now + DEBOUNCE);
	app.tick(now + DEBOUNCE);
}

fn screen(app: &mut App<'static, ImmediateLookups>) -> String {
	let mut terminal = Terminal::new(TestBackend::new(72, 14)).expect("terminal");
	terminal.draw(|frame| app.draw(frame)).expect("draw");
	buffer_to_string(terminal.backend().buffer())
}

#[test]
fn typing_renders_matching_customers() {
	let mut app = app();
	search(&mut app, "ana", Instant::now());

	let screen = screen(&mut app);
	assert!(screen.contains("Cliente: ana"));
	assert!(screen.contains("Ana Gómez [VIP]  555-0101"));
	assert!(screen.contains("5 visitas  $120.50"));
	assert!(screen.contains("12 visitas  $1,234.50"));
	assert!(screen.contains("+ Crear nuevo cliente: \"ana\""));
	assert!(screen.contains("Sin cliente asignado"));
}

#[test]
fn loading_shows_the_spinner_label() {
	let mut app = app();
	let start = Instant::now();
	for ch in "ana".chars() {
		press(&mut app, KeyCode::Char(ch), start);
	}
	app.tick(start + DEBOUNCE);

	let screen = screen(&mut app);
	assert!(screen.contains("Buscando clientes..."));
}

#[test]
fn enter_on_a_row_attaches_the_customer_then_confirms() {
	let mut app = app();
	let start = Instant::now();
	search(&mut app, "ana", start);

	assert!(press(&mut app, KeyCode::Down, start).is_none());
	assert!(press(&mut app, KeyCode::Enter, start).is_none());
	assert_eq!(app.input.text(), "Ana Gómez");
	assert!(!app.controller().is_visible());
	assert_eq!(app.order().customer.as_ref().map(|c| c.id.as_str()), Some("c-1"));

	let screen = screen(&mut app);
	assert!(screen.contains("5 visitas · $120.50"));

	let outcome = press(&mut app, KeyCode::Enter, start).expect("second enter confirms");
	assert!(outcome.accepted);
	assert_eq!(outcome.query, "Ana Gómez");
	assert_eq!(outcome.customer.map(|c| c.name), Some("Ana Gómez".to_string()));
	assert_eq!(outcome.new_customer, None);
}

#[test]
fn enter_while_loading_keeps_the_session_open() {
	let mut app = app();
	let start = Instant::now();
	press(&mut app, KeyCode::Char('a'), start);
	app.tick(start + DEBOUNCE);
	assert!(app.controller().is_visible());

	assert!(press(&mut app, KeyCode::Enter, start + DEBOUNCE).is_none());
	assert!(app.controller().is_visible());
	assert_eq!(app.order().customer, None);
	assert_eq!(app.order().new_customer, None);

	app.tick(start + DEBOUNCE);
	assert!(press(&mut app, KeyCode::Enter, start + DEBOUNCE).is_none());
	assert!(app.controller().is_visible());
	assert_eq!(app.order().customer, None);
}

#[test]
fn escape_closes_the_list_before_cancelling() {
	let mut app = app();
	let start = Instant::now();
	search(&mut app, "ana", start);

	assert!(press(&mut app, KeyCode::Esc, start).is_none());
	assert!(!app.controller().is_visible());

	let outcome = press(&mut app, KeyCode::Esc, start).expect("second escape exits");
	assert!(!outcome.accepted);
	assert_eq!(outcome.query, "ana");
}

#[test]
fn clicking_the_create_row_requests_a_new_customer() {
	let mut app = app();
	let start = Instant::now();
	search(&mut app, "zzz", start);

	let screen = screen(&mut app);
	assert!(screen.contains("No se encontraron clientes para \"zzz\""));

	let hitbox = app.hitboxes.last().cloned().expect("create row is clickable");
	app.handle_mouse(MouseEvent {
		kind: MouseEventKind::Down(MouseButton::Left),
		column: hitbox.area.x + 2,
		row: hitbox.area.y,
		modifiers: KeyModifiers::NONE,
	});
	assert_eq!(app.order().new_customer.as_deref(), Some("zzz"));
	assert!(!app.controller().is_visible());

	let outcome = press(&mut app, KeyCode::Enter, start).expect("enter confirms");
	assert!(outcome.accepted);
	assert_eq!(outcome.new_customer.as_deref(), Some("zzz"));
	assert_eq!(outcome.customer, None);
}

#[test]
fn ctrl_u_clears_the_order() {
	let mut app = app();
	let start = Instant::now();
	search(&mut app, "juan", start);
	press(&mut app, KeyCode::Down, start);
	press(&mut app, KeyCode::Enter, start);
	assert!(!app.order().is_empty());

	app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL), start);
	assert!(app.order().is_empty());
	assert_eq!(app.input.text(), "");
	assert_eq!(app.controller().selected_customer(), None);
}

#[test]
fn tab_blurs_with_grace_and_refocuses() {
	let mut app = app();
	let start = Instant::now();
	search(&mut app, "ana", start);

	let blurred = start + Duration::from_secs(1);
	press(&mut app, KeyCode::Tab, blurred);
	app.tick(blurred + Duration::from_millis(100));
	assert!(app.controller().is_visible());
	app.tick(blurred + Duration::from_millis(200));
	assert!(!app.controller().is_visible());

	press(&mut app, KeyCode::Tab, blurred + Duration::from_millis(300));
	assert!(app.controller().is_visible());
}

#[test]
fn typing_while_unfocused_refocuses() {
	let mut app = app();
	let start = Instant::now();
	press(&mut app, KeyCode::Tab, start);
	assert!(!app.controller().session().is_focused());

	press(&mut app, KeyCode::Char('a'), start);
	assert!(app.controller().session().is_focused());
}

#[test]
fn initial_query_searches_immediately() {
	let mut app = app().with_initial_query("mari");
	app.tick(Instant::now());

	assert_eq!(app.input.text(), "mari");
	let names: Vec<_> = app
		.controller()
		.session()
		.results()
		.iter()
		.map(|customer| customer.name.as_str())
		.collect();
	assert_eq!(names, vec!["Mariana Ruiz"]);
}
