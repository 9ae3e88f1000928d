use clientes_lookup_api::Customer;
use serde::Serialize;

/// Intent surfaced to the host, in the order it happened.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", content = "detail", rename_all = "camelCase")]
pub enum ControllerEvent {
	/// An existing customer was chosen.
	CustomerSelected(Customer),
	/// The user asked to create a customer from unmatched query text.
	CreateCustomer { name: String },
}
