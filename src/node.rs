use crate::{Base, Record};

/// ActivityStreams property value: a plain json value (scalar, link string or
/// opaque embedded object), a nested record, or many of those
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
	Value(serde_json::Value),
	Record(Box<Record>),
	Array(Vec<Node>),
}

impl Node {
	/// return reference to embedded record (or first if many are present)
	pub fn get(&self) -> Option<&Record> {
		match self {
			Node::Value(_) => None,
			Node::Record(x) => Some(x),
			Node::Array(v) => v.iter().find_map(|x| x.get()),
		}
	}

	/// true only if Node holds one nested record
	pub fn is_record(&self) -> bool {
		matches!(self, Node::Record(_))
	}

	/// true only if Node holds many nodes
	pub fn is_array(&self) -> bool {
		matches!(self, Node::Array(_))
	}

	/// true only if Node holds nothing (empty array)
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// returns number of contained items, json arrays included
	pub fn len(&self) -> usize {
		match self {
			Node::Value(serde_json::Value::Array(v)) => v.len(),
			Node::Value(_) | Node::Record(_) => 1,
			Node::Array(v) => v.len(),
		}
	}

	/// returns id of node: the string itself for links, id for objects, first id for arrays
	pub fn id(&self) -> crate::Field<&str> {
		match self {
			Node::Value(serde_json::Value::Array(arr)) => arr.first().ok_or(crate::FieldErr("id"))?.id(),
			Node::Value(x) => x.id(),
			Node::Record(x) => x.id(),
			Node::Array(arr) => arr.first().ok_or(crate::FieldErr("id"))?.id(),
		}
	}

	pub fn all_ids(&self) -> Vec<String> {
		match self {
			Node::Value(serde_json::Value::Array(arr)) =>
				arr.iter().filter_map(|x| Some(x.id().ok()?.to_string())).collect(),
			Node::Value(x) => x.id().map_or(vec![], |x| vec![x.to_string()]),
			Node::Record(x) => x.id().map_or(vec![], |x| vec![x.to_string()]),
			Node::Array(arr) => arr.iter().flat_map(|x| x.all_ids()).collect(),
		}
	}

	/// render this node as wire json, turning nested records into their `asdict` form
	pub fn to_value(&self) -> serde_json::Value {
		match self {
			Node::Value(x) => x.clone(),
			Node::Record(x) => serde_json::Value::Object(x.asdict()),
			Node::Array(arr) => serde_json::Value::Array(arr.iter().map(Node::to_value).collect()),
		}
	}
}

impl From<serde_json::Value> for Node {
	fn from(value: serde_json::Value) -> Self {
		Node::Value(value)
	}
}

impl From<&str> for Node {
	fn from(value: &str) -> Self {
		Node::Value(serde_json::Value::String(value.to_string()))
	}
}

impl From<Record> for Node {
	fn from(value: Record) -> Self {
		Node::Record(Box::new(value))
	}
}

impl From<Vec<Record>> for Node {
	fn from(value: Vec<Record>) -> Self {
		Node::Array(value.into_iter().map(Node::from).collect())
	}
}

impl From<Node> for serde_json::Value {
	fn from(value: Node) -> Self {
		match value {
			Node::Value(x) => x,
			Node::Record(x) => (*x).into(),
			Node::Array(arr) => serde_json::Value::Array(arr.into_iter().map(|x| x.into()).collect()),
		}
	}
}
