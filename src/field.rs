use crate::Node;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing field '{0}'")]
pub struct FieldErr(pub &'static str);

pub type Field<T> = Result<T, FieldErr>;

/// Value held by one record field.
///
/// `Absent` means the property was never provided and is never emitted, while
/// `Null` is an explicit null: both are left out of `asdict`, but only `Absent`
/// is the field default.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Property {
	#[default]
	Absent,
	Null,
	Present(Node),
}

impl Property {
	pub fn is_absent(&self) -> bool {
		matches!(self, Property::Absent)
	}

	pub fn is_null(&self) -> bool {
		matches!(self, Property::Null)
	}

	/// true if this property would appear on the wire
	pub fn is_present(&self) -> bool {
		matches!(self, Property::Present(_))
	}

	pub fn node(&self) -> Option<&Node> {
		match self {
			Property::Present(x) => Some(x),
			Property::Absent | Property::Null => None,
		}
	}

	pub fn into_node(self) -> Option<Node> {
		match self {
			Property::Present(x) => Some(x),
			Property::Absent | Property::Null => None,
		}
	}

	/// the plain json value, if this property holds one and not a nested record
	pub fn as_json(&self) -> Option<&serde_json::Value> {
		match self {
			Property::Present(Node::Value(x)) => Some(x),
			_ => None,
		}
	}
}

impl From<serde_json::Value> for Property {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Property::Null,
			x => Property::Present(Node::Value(x)),
		}
	}
}

impl From<Node> for Property {
	fn from(value: Node) -> Self {
		match value {
			Node::Value(serde_json::Value::Null) => Property::Null,
			x => Property::Present(x),
		}
	}
}

impl<T: Into<Property>> From<Option<T>> for Property {
	fn from(value: Option<T>) -> Self {
		match value {
			Some(x) => x.into(),
			None => Property::Null,
		}
	}
}

impl From<crate::Record> for Property {
	fn from(value: crate::Record) -> Self {
		Property::Present(Node::from(value))
	}
}

impl From<Vec<crate::Record>> for Property {
	fn from(value: Vec<crate::Record>) -> Self {
		Property::Present(Node::from(value))
	}
}

impl From<&str> for Property {
	fn from(value: &str) -> Self {
		Property::Present(Node::Value(serde_json::Value::String(value.to_string())))
	}
}

impl From<String> for Property {
	fn from(value: String) -> Self {
		Property::Present(Node::Value(serde_json::Value::String(value)))
	}
}

impl From<u64> for Property {
	fn from(value: u64) -> Self {
		Property::Present(Node::Value(serde_json::Value::from(value)))
	}
}

#[cfg(test)]
mod test {
	use super::Property;

	#[test]
	fn json_null_is_explicit_null_not_absent() {
		let p = Property::from(serde_json::Value::Null);
		assert!(p.is_null());
		assert!(!p.is_absent());
		assert!(!p.is_present());
	}

	#[test]
	fn none_becomes_null() {
		let p : Property = Option::<&str>::None.into();
		assert_eq!(p, Property::Null);
		let p : Property = Some("hello").into();
		assert_eq!(p.as_json(), Some(&serde_json::json!("hello")));
	}

	#[test]
	fn default_is_absent() {
		assert!(Property::default().is_absent());
	}
}
