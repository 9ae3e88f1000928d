//! Lookup lifecycle: request tokens, the dispatch seam and the worker thread.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use clientes_lookup_api::{Customer, CustomerProvider, LookupError};

/// A lookup issued by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
	pub token: u64,
	pub query: String,
}

/// The provider's answer to a [`LookupRequest`].
#[derive(Debug, Clone)]
pub struct LookupResponse {
	pub token: u64,
	pub query: String,
	pub result: Result<Vec<Customer>, LookupError>,
}

/// Transport between the controller and whatever runs the lookups.
///
/// `dispatch` must not block; responses are collected later through
/// `try_recv`, in any order.
pub trait LookupDispatch {
	fn dispatch(&mut self, request: LookupRequest);

	fn try_recv(&mut self) -> Option<LookupResponse>;
}

/// Monotonic request tokens. Only the latest issued token is accepted.
#[derive(Debug, Default)]
pub(crate) struct RequestTokens {
	next: u64,
	current: Option<u64>,
}

impl RequestTokens {
	pub(crate) fn issue(&mut self) -> u64 {
		self.next = self.next.saturating_add(1);
		self.current = Some(self.next);
		self.next
	}

	/// Accept `token` if it is the one being awaited.
	pub(crate) fn settle(&mut self, token: u64) -> bool {
		if self.current == Some(token) {
			self.current = None;
			true
		} else {
			false
		}
	}

	/// Stop waiting for whatever is in flight.
	pub(crate) fn invalidate(&mut self) {
		self.current = None;
	}

	pub(crate) fn is_in_flight(&self) -> bool {
		self.current.is_some()
	}
}

enum LookupCommand {
	Query(LookupRequest),
	Shutdown,
}

/// Runs a [`CustomerProvider`] on a background thread.
///
/// Requests that were superseded before the worker picked them up are
/// skipped without calling the provider.
pub struct LookupRuntime {
	tx: Sender<LookupCommand>,
	rx: Receiver<LookupResponse>,
	latest_token: Arc<AtomicU64>,
}

impl LookupRuntime {
	/// Launch the worker thread for `provider`.
	pub fn spawn(provider: Arc<dyn CustomerProvider>) -> Self {
		let (command_tx, command_rx) = mpsc::channel();
		let (response_tx, response_rx) = mpsc::channel();
		let latest_token = Arc::new(AtomicU64::new(0));
		let worker_latest = Arc::clone(&latest_token);

		tracing::debug!(provider = %provider.describe(), "starting lookup worker");
		thread::spawn(move || worker_loop(provider.as_ref(), command_rx, response_tx, worker_latest));

		Self {
			tx: command_tx,
			rx: response_rx,
			latest_token,
		}
	}
}

impl LookupDispatch for LookupRuntime {
	fn dispatch(&mut self, request: LookupRequest) {
		self.latest_token.store(request.token, Ordering::Release);
		if self.tx.send(LookupCommand::Query(request)).is_err() {
			tracing::warn!("lookup worker has stopped; request dropped");
		}
	}

	fn try_recv(&mut self) -> Option<LookupResponse> {
		match self.rx.try_recv() {
			Ok(response) => Some(response),
			Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
		}
	}
}

impl Drop for LookupRuntime {
	fn drop(&mut self) {
		let _ = self.tx.send(LookupCommand::Shutdown);
	}
}

fn worker_loop(
	provider: &dyn CustomerProvider,
	command_rx: Receiver<LookupCommand>,
	response_tx: Sender<LookupResponse>,
	latest_token: Arc<AtomicU64>,
) {
	while let Ok(command) = command_rx.recv() {
		let request = match command {
			LookupCommand::Query(request) => request,
			LookupCommand::Shutdown => break,
		};
		if request.token < latest_token.load(Ordering::Acquire) {
			tracing::debug!(token = request.token, "skipping superseded lookup");
			continue;
		}
		let result = provider.lookup(&request.query);
		let response = LookupResponse {
			token: request.token,
			query: request.query,
			result,
		};
		if response_tx.send(response).is_err() {
			break;
		}
	}
	tracing::debug!("lookup worker stopped");
}

#[cfg(test)]
mod tests {
	use std::time::{Duration, Instant};

	use clientes_provider_fixture::FixtureProvider;

	use super::*;

	fn wait_for_response(runtime: &mut LookupRuntime) -> Option<LookupResponse> {
		let deadline = Instant::now() + Duration::from_secs(2);
		while Instant::now() < deadline {
			if let Some(response) = runtime.try_recv() {
				return Some(response);
			}
			thread::sleep(Duration::from_millis(5));
		}
		None
	}

	#[test]
	fn tokens_accept_only_the_latest_request() {
		let mut tokens = RequestTokens::default();
		let first = tokens.issue();
		let second = tokens.issue();
		assert!(second > first);
		assert!(!tokens.settle(first));
		assert!(tokens.is_in_flight());
		assert!(tokens.settle(second));
		assert!(!tokens.is_in_flight());
		assert!(!tokens.settle(second), "a token settles only once");
	}

	#[test]
	fn invalidated_tokens_reject_everything() {
		let mut tokens = RequestTokens::default();
		let token = tokens.issue();
		tokens.invalidate();
		assert!(!tokens.settle(token));
	}

	#[test]
	fn worker_answers_with_the_request_token() {
		let provider = FixtureProvider::new(vec![
			Customer::new("1", "Ana Gómez"),
			Customer::new("2", "Bruno Díaz"),
		]);
		let mut runtime = LookupRuntime::spawn(Arc::new(provider));
		runtime.dispatch(LookupRequest {
			token: 7,
			query: "ana".into(),
		});

		let response = wait_for_response(&mut runtime).expect("worker response");
		assert_eq!(response.token, 7);
		assert_eq!(response.query, "ana");
		let names: Vec<_> = response
			.result
			.expect("lookup succeeds")
			.into_iter()
			.map(|customer| customer.name)
			.collect();
		assert_eq!(names, vec!["Ana Gómez"]);
	}
}
