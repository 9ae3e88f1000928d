//! Customer lookups against the POS server.
//!
//! Each lookup is a single `GET` of the endpoint template resolved against
//! the base URL; the body must be a JSON array of customers.

use std::time::Duration;

use clientes_lookup_api::{Customer, CustomerProvider, EndpointTemplate, LookupError};
use url::Url;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

pub struct HttpProvider {
	agent: ureq::Agent,
	base: Url,
	template: EndpointTemplate,
}

impl HttpProvider {
	#[must_use]
	pub fn new(base: Url, template: EndpointTemplate, timeout: Duration) -> Self {
		let agent = ureq::AgentBuilder::new().timeout(timeout).build();
		Self {
			agent,
			base,
			template,
		}
	}

	/// URL requested for `query`.
	pub fn url_for(&self, query: &str) -> Result<Url, LookupError> {
		let path = self.template.expand(query);
		self.base.join(&path).map_err(|err| LookupError::Network {
			endpoint: path,
			message: err.to_string(),
		})
	}
}

impl CustomerProvider for HttpProvider {
	fn lookup(&self, query: &str) -> Result<Vec<Customer>, LookupError> {
		let url = self.url_for(query)?;
		let endpoint = url.to_string();
		tracing::debug!(%endpoint, "requesting customers");

		let response = match self.agent.get(url.as_str()).call() {
			Ok(response) => response,
			Err(ureq::Error::Status(status, _)) => {
				return Err(LookupError::Status { endpoint, status });
			}
			Err(ureq::Error::Transport(transport)) => {
				return Err(LookupError::Network {
					endpoint,
					message: transport.to_string(),
				});
			}
		};

		response
			.into_json::<Vec<Customer>>()
			.map_err(|err| LookupError::Decode {
				endpoint,
				message: err.to_string(),
			})
	}

	fn describe(&self) -> String {
		format!("http {} {}", self.base, self.template)
	}
}

#[cfg(test)]
mod tests {
	use std::io::{BufRead, BufReader, Write};
	use std::net::TcpListener;
	use std::sync::mpsc;
	use std::thread;

	use clientes_lookup_api::FailureKind;

	use super::*;

	/// Serve one canned response and report the request line.
	fn one_shot(status: &str, body: &'static str) -> (Url, mpsc::Receiver<String>) {
		let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub");
		let address = listener.local_addr().expect("stub address");
		let status = status.to_string();
		let (tx, rx) = mpsc::channel();

		thread::spawn(move || {
			let Ok((mut stream, _)) = listener.accept() else {
				return;
			};
			let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
			let mut request_line = String::new();
			reader.read_line(&mut request_line).expect("read request");
			let mut header = String::new();
			while reader.read_line(&mut header).is_ok_and(|read| read > 2) {
				header.clear();
			}
			let _ = tx.send(request_line.trim_end().to_string());
			let response = format!(
				"HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
				body.len()
			);
			let _ = stream.write_all(response.as_bytes());
		});

		let base = Url::parse(&format!("http://{address}")).expect("stub url");
		(base, rx)
	}

	fn provider(base: Url) -> HttpProvider {
		HttpProvider::new(base, EndpointTemplate::default(), Duration::from_secs(2))
	}

	#[test]
	fn decodes_customers_from_a_success_response() {
		let (base, requests) = one_shot(
			"200 OK",
			r#"[{"_id":"c-1","name":"Ana Gómez","phone":"555-0101","isVIP":true,"totalVisits":5,"totalSpent":120.5}]"#,
		);
		let customers = provider(base).lookup("ana").expect("lookup succeeds");

		assert_eq!(customers.len(), 1);
		assert_eq!(customers[0].name, "Ana Gómez");
		assert!(customers[0].is_vip);
		assert_eq!(
			requests.recv().expect("request line"),
			"GET /api/customers/search/ana HTTP/1.1"
		);
	}

	#[test]
	fn escapes_the_query_into_the_path() {
		let (base, requests) = one_shot("200 OK", "[]");
		let customers = provider(base).lookup("ana gómez/1").expect("lookup succeeds");

		assert!(customers.is_empty());
		assert_eq!(
			requests.recv().expect("request line"),
			"GET /api/customers/search/ana%20g%C3%B3mez%2F1 HTTP/1.1"
		);
	}

	#[test]
	fn server_errors_map_to_status() {
		let (base, _requests) = one_shot("500 Internal Server Error", r#"{"error":"boom"}"#);
		let error = provider(base).lookup("ana").expect_err("500 fails");

		assert!(matches!(error, LookupError::Status { status: 500, .. }));
		assert_eq!(error.kind(), FailureKind::Server);
	}

	#[test]
	fn non_list_bodies_fail_to_decode() {
		let (base, _requests) = one_shot("200 OK", r#"{"customers":[]}"#);
		let error = provider(base).lookup("ana").expect_err("object body fails");
		assert!(matches!(error, LookupError::Decode { .. }));
	}

	#[test]
	fn refused_connections_are_network_failures() {
		let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
		let address = listener.local_addr().expect("address");
		drop(listener);

		let base = Url::parse(&format!("http://{address}")).expect("url");
		let error = provider(base).lookup("ana").expect_err("nothing listening");
		assert!(matches!(error, LookupError::Network { .. }));
		assert_eq!(error.kind(), FailureKind::Network);
	}

	#[test]
	fn templates_without_placeholder_append_the_query() {
		let base = Url::parse("http://pos.local").expect("url");
		let template = EndpointTemplate::parse("/api/customers?q=").expect("template");
		let provider = HttpProvider::new(base, template, DEFAULT_TIMEOUT);
		assert_eq!(
			provider.url_for("ana").expect("url").as_str(),
			"http://pos.local/api/customers?q=ana"
		);
	}
}
