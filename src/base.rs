use crate::{getter, vocab::CoreType, Field, FieldErr, Node, Record};

/// Property lookup by wire name, what typed getters are built upon.
pub trait Lookup {
	/// plain json value of property, if present
	fn lookup(&self, wire: &str) -> Option<&serde_json::Value>;
	/// property as node, if present (nested records included)
	fn lookup_node(&self, wire: &str) -> Option<Node>;
}

impl Lookup for Record {
	fn lookup(&self, wire: &str) -> Option<&serde_json::Value> {
		self.get_wire(wire)?.as_json()
	}

	fn lookup_node(&self, wire: &str) -> Option<Node> {
		self.get_wire(wire)?.node().cloned()
	}
}

impl Lookup for serde_json::Value {
	fn lookup(&self, wire: &str) -> Option<&serde_json::Value> {
		self.get(wire).filter(|x| !x.is_null())
	}

	fn lookup_node(&self, wire: &str) -> Option<Node> {
		self.lookup(wire).cloned().map(Node::from)
	}
}

pub trait Base : Lookup {
	getter! { id -> &str }
	getter! { base_type -> type CoreType }
}

impl Base for Record {}

impl Base for serde_json::Value {
	// a bare string stands for the object it links to
	fn id(&self) -> Field<&str> {
		match self {
			serde_json::Value::String(x) => Ok(x.as_str()),
			x => x.lookup("id").and_then(|x| x.as_str()).ok_or(FieldErr("id")),
		}
	}
}

#[cfg(test)]
mod test {
	use super::Base;

	#[test]
	fn strings_are_their_own_id() {
		assert_eq!(serde_json::json!("https://example.com/1").id(), Ok("https://example.com/1"));
		assert_eq!(serde_json::json!({ "id": "https://example.com/2" }).id(), Ok("https://example.com/2"));
		assert!(serde_json::json!({ "id": null }).id().is_err());
	}

	#[test]
	fn base_type_uses_first_of_many() {
		let obj = serde_json::json!({ "type": ["Collection", "as:Thing"] });
		assert_eq!(obj.base_type(), Ok(crate::vocab::CoreType::Collection));
		assert!(serde_json::json!({ "type": "Note" }).base_type().is_err());
	}

	#[test]
	fn records_resolve_wire_names() {
		let obj = crate::Record::new(&crate::vocab::OBJECT)
			.with("id", "https://example.com/3").expect("id is a field");
		assert_eq!(obj.id(), Ok("https://example.com/3"));
		assert_eq!(obj.base_type(), Ok(crate::vocab::CoreType::Object));
	}
}
