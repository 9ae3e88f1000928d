use anyhow::Result;
use clientes_tui::SessionOutcome;
use serde_json::json;

/// Print a plain-text representation of the session outcome.
pub(crate) fn print_plain(outcome: &SessionOutcome) {
	if !outcome.accepted {
		println!("Cancelled (query: '{}')", outcome.query);
		return;
	}

	match (&outcome.customer, &outcome.new_customer) {
		(Some(customer), _) => println!("{}\t{}", customer.id, customer.name),
		(None, Some(name)) => println!("new\t{name}"),
		(None, None) => println!("No customer"),
	}
}

/// Format the session outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SessionOutcome) -> Result<String> {
	let customer = match (&outcome.customer, &outcome.new_customer) {
		(Some(customer), _) => json!({
			"type": "existing",
			"customer": customer,
		}),
		(None, Some(name)) => json!({
			"type": "new",
			"name": name,
		}),
		(None, None) => serde_json::Value::Null,
	};

	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"customer": customer,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

pub(crate) fn print_json(outcome: &SessionOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use clientes_lookup_api::Customer;
	use serde_json::Value;

	use super::*;

	#[test]
	fn json_format_includes_existing_customer() {
		let outcome = SessionOutcome {
			accepted: true,
			query: "Ana Gómez".into(),
			customer: Some(Customer::new("c-1", "Ana Gómez").vip(true).with_history(5, 120.5)),
			new_customer: None,
		};

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["customer"]["type"], "existing");
		assert_eq!(value["customer"]["customer"]["id"], "c-1");
		assert_eq!(value["customer"]["customer"]["isVIP"], true);
		assert_eq!(value["customer"]["customer"]["totalVisits"], 5);
	}

	#[test]
	fn json_format_for_a_new_customer() {
		let outcome = SessionOutcome {
			accepted: true,
			query: "zzz".into(),
			customer: None,
			new_customer: Some("zzz".into()),
		};

		let json = format_outcome_json(&outcome).expect("json");
		insta::assert_snapshot!(json, @r#"
		{
		  "accepted": true,
		  "customer": {
		    "name": "zzz",
		    "type": "new"
		  },
		  "query": "zzz"
		}
		"#);
	}

	#[test]
	fn cancelled_session_has_no_customer() {
		let outcome = SessionOutcome {
			accepted: false,
			query: "an".into(),
			customer: None,
			new_customer: None,
		};

		let value: Value =
			serde_json::from_str(&format_outcome_json(&outcome).expect("json")).expect("parse");
		assert_eq!(value["accepted"], false);
		assert!(value["customer"].is_null());
	}
}
