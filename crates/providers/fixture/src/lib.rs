//! Offline customer search over a fixed list.
//!
//! Matches are ranked the way the POS server orders its search results:
//! name prefix, then word prefix, then substring matches on the name, phone
//! and email. Ties prefer VIP customers, then regulars, then the name.

use std::cmp::Reverse;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use clientes_lookup_api::{Customer, CustomerProvider, LookupError};

/// How a customer matched a query; lower ranks sort first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchRank {
	NamePrefix,
	WordPrefix,
	NameContains,
	Phone,
	Email,
}

impl MatchRank {
	/// Rank `customer` against an already lowercased, trimmed `needle`.
	#[must_use]
	pub fn of(customer: &Customer, needle: &str) -> Option<Self> {
		let name = customer.name.to_lowercase();
		if name.starts_with(needle) {
			return Some(Self::NamePrefix);
		}
		if name.split_whitespace().any(|word| word.starts_with(needle)) {
			return Some(Self::WordPrefix);
		}
		if name.contains(needle) {
			return Some(Self::NameContains);
		}

		let digits = digits_of(needle);
		if !digits.is_empty()
			&& let Some(phone) = customer.phone.as_deref()
			&& digits_of(phone).contains(&digits)
		{
			return Some(Self::Phone);
		}

		customer
			.email
			.as_deref()
			.filter(|email| email.to_lowercase().contains(needle))
			.map(|_| Self::Email)
	}
}

fn digits_of(text: &str) -> String {
	text.chars().filter(char::is_ascii_digit).collect()
}

/// A [`CustomerProvider`] backed by an in-memory customer list.
#[derive(Debug, Clone)]
pub struct FixtureProvider {
	customers: Vec<Customer>,
	latency: Duration,
	source: Option<PathBuf>,
}

impl FixtureProvider {
	#[must_use]
	pub fn new(customers: Vec<Customer>) -> Self {
		Self {
			customers,
			latency: Duration::ZERO,
			source: None,
		}
	}

	/// Load a JSON array of customers from `path`.
	pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LookupError> {
		let path = path.as_ref();
		let raw = fs::read_to_string(path)
			.map_err(|err| LookupError::Unavailable(format!("cannot read {}: {err}", path.display())))?;
		let customers: Vec<Customer> = serde_json::from_str(&raw).map_err(|err| {
			LookupError::Unavailable(format!("cannot parse {}: {err}", path.display()))
		})?;
		tracing::debug!(path = %path.display(), count = customers.len(), "loaded customer fixture");
		Ok(Self {
			source: Some(path.to_path_buf()),
			..Self::new(customers)
		})
	}

	/// Sleep for `latency` before answering each lookup.
	#[must_use]
	pub fn with_latency(mut self, latency: Duration) -> Self {
		self.latency = latency;
		self
	}

	#[must_use]
	pub fn customers(&self) -> &[Customer] {
		&self.customers
	}

	/// Rank the fixture against `query` without simulated latency.
	#[must_use]
	pub fn search(&self, query: &str) -> Vec<Customer> {
		let needle = query.trim().to_lowercase();
		if needle.is_empty() {
			return Vec::new();
		}

		let mut ranked: Vec<(MatchRank, &Customer)> = self
			.customers
			.iter()
			.filter_map(|customer| MatchRank::of(customer, &needle).map(|rank| (rank, customer)))
			.collect();
		ranked.sort_by(|(left_rank, left), (right_rank, right)| {
			(left_rank, !left.is_vip, Reverse(left.total_visits), &left.name).cmp(&(
				right_rank,
				!right.is_vip,
				Reverse(right.total_visits),
				&right.name,
			))
		});
		ranked.into_iter().map(|(_, customer)| customer.clone()).collect()
	}
}

impl CustomerProvider for FixtureProvider {
	fn lookup(&self, query: &str) -> Result<Vec<Customer>, LookupError> {
		if !self.latency.is_zero() {
			thread::sleep(self.latency);
		}
		Ok(self.search(query))
	}

	fn describe(&self) -> String {
		match &self.source {
			Some(path) => format!("fixture {} ({} customers)", path.display(), self.customers.len()),
			None => format!("fixture ({} customers)", self.customers.len()),
		}
	}
}
