use clientes_lookup_api::Customer;
use serde::Serialize;

/// Customer attached to the order being rung up.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrderCustomer {
	/// An existing customer picked from the list.
	pub customer: Option<Customer>,
	/// Name of a customer the cashier asked to create.
	pub new_customer: Option<String>,
}

impl OrderCustomer {
	pub(crate) fn attach(&mut self, customer: Customer) {
		self.customer = Some(customer);
		self.new_customer = None;
	}

	pub(crate) fn attach_new(&mut self, name: String) {
		self.customer = None;
		self.new_customer = Some(name);
	}

	pub(crate) fn clear(&mut self) {
		self.customer = None;
		self.new_customer = None;
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.customer.is_none() && self.new_customer.is_none()
	}
}

/// How a host session ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionOutcome {
	/// The cashier confirmed the order rather than cancelling.
	pub accepted: bool,
	/// Input text when the session ended.
	pub query: String,
	pub customer: Option<Customer>,
	pub new_customer: Option<String>,
}

impl SessionOutcome {
	pub(crate) fn new(accepted: bool, query: String, order: OrderCustomer) -> Self {
		Self {
			accepted,
			query,
			customer: order.customer,
			new_customer: order.new_customer,
		}
	}
}
