use serde::{Deserialize, Deserializer, Serialize};

/// A customer record as returned by the lookup endpoint.
///
/// The record is owned by the data provider; consumers only ever hold a
/// request-scoped copy. Field names follow the JSON wire format exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
	#[serde(alias = "_id", deserialize_with = "id_from_text_or_number")]
	pub id: String,
	pub name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub phone: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub email: Option<String>,
	#[serde(rename = "isVIP", default)]
	pub is_vip: bool,
	#[serde(rename = "totalVisits", default)]
	pub total_visits: u32,
	#[serde(rename = "totalSpent", default)]
	pub total_spent: f64,
}

impl Customer {
	/// Create a customer with no contact details and no history.
	#[must_use]
	pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			phone: None,
			email: None,
			is_vip: false,
			total_visits: 0,
			total_spent: 0.0,
		}
	}

	#[must_use]
	pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
		self.phone = Some(phone.into());
		self
	}

	#[must_use]
	pub fn with_email(mut self, email: impl Into<String>) -> Self {
		self.email = Some(email.into());
		self
	}

	#[must_use]
	pub fn vip(mut self, is_vip: bool) -> Self {
		self.is_vip = is_vip;
		self
	}

	#[must_use]
	pub fn with_history(mut self, total_visits: u32, total_spent: f64) -> Self {
		self.total_visits = total_visits;
		self.total_spent = total_spent;
		self
	}

	/// Text written into the bound input when this customer is selected.
	#[must_use]
	pub fn display_name(&self) -> &str {
		&self.name
	}
}

/// Accept identifiers sent either as strings or as JSON numbers; numbers are
/// kept as their decimal text.
fn id_from_text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum WireId {
		Text(String),
		Unsigned(u64),
		Signed(i64),
	}

	Ok(match WireId::deserialize(deserializer)? {
		WireId::Text(text) => text,
		WireId::Unsigned(number) => number.to_string(),
		WireId::Signed(number) => number.to_string(),
	})
}
