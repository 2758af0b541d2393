use std::sync::Arc;

use crate::{
	errors::UnknownFieldError,
	jsonld::{CONTEXT, MISSING_TYPE, TYPE},
	Property, Schema,
};

/// Capabilities shared by records and the empty placeholder.
pub trait ActivityStreams {
	/// wire json map of all present fields, keyed by wire name
	fn asdict(&self) -> serde_json::Map<String, serde_json::Value>;

	/// assign many fields at once, keys are field names (already mangled)
	fn update<K, V>(&mut self, data: impl IntoIterator<Item = (K, V)>) -> Result<(), UnknownFieldError>
	where
		K: AsRef<str>,
		V: Into<Property>;

	/// remove `@context`, as wanted for objects embedded in other objects
	fn dismiss_context(&mut self);
}

/// One populated instance of a [`Schema`].
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
	schema: Arc<Schema>,
	pub(crate) values: Vec<Property>,
}

impl Record {
	/// new record with every field at its default
	pub fn new(schema: &Arc<Schema>) -> Self {
		Record {
			values: schema.fields().iter().map(|f| f.default.clone()).collect(),
			schema: schema.clone(),
		}
	}

	/// new record with given fields assigned, everything else at its default
	pub fn with_fields<K, V>(schema: &Arc<Schema>, data: impl IntoIterator<Item = (K, V)>) -> Result<Self, UnknownFieldError>
	where
		K: AsRef<str>,
		V: Into<Property>,
	{
		let mut record = Record::new(schema);
		record.update(data)?;
		Ok(record)
	}

	/// builder-style single field assignment
	pub fn with(mut self, field: &str, value: impl Into<Property>) -> Result<Self, UnknownFieldError> {
		self.set(field, value)?;
		Ok(self)
	}

	pub fn schema(&self) -> &Arc<Schema> {
		&self.schema
	}

	pub fn type_name(&self) -> &str {
		self.schema.type_name()
	}

	/// current value of field, None if the schema has no such field
	pub fn get(&self, field: &str) -> Option<&Property> {
		self.schema.position(field).map(|i| &self.values[i])
	}

	/// current value of field by wire name
	pub fn get_wire(&self, wire: &str) -> Option<&Property> {
		self.schema.position_wire(wire).map(|i| &self.values[i])
	}

	pub fn set(&mut self, field: &str, value: impl Into<Property>) -> Result<(), UnknownFieldError> {
		let idx = self.index(field)?;
		self.values[idx] = value.into();
		Ok(())
	}

	pub fn set_wire(&mut self, wire: &str, value: impl Into<Property>) -> Result<(), UnknownFieldError> {
		let idx = self.schema.position_wire(wire).ok_or_else(|| self.unknown(wire))?;
		self.values[idx] = value.into();
		Ok(())
	}

	/// (wire name, value) pairs in declaration order, absent fields included
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Property)> {
		self.schema.fields().iter()
			.map(|f| f.wire.as_str())
			.zip(self.values.iter())
	}

	pub fn asdict(&self) -> serde_json::Map<String, serde_json::Value> {
		let mut out = serde_json::Map::new();
		for (wire, value) in self.iter() {
			let Some(node) = value.node() else { continue };
			let value = node.to_value();
			if value.is_null() { continue }
			out.insert(wire.to_string(), value);
		}

		if out.get(TYPE).and_then(|x| x.as_str()) == Some(MISSING_TYPE) {
			out.shift_remove(TYPE);
		}

		out
	}

	pub fn update<K, V>(&mut self, data: impl IntoIterator<Item = (K, V)>) -> Result<(), UnknownFieldError>
	where
		K: AsRef<str>,
		V: Into<Property>,
	{
		// resolve every key before touching anything, so a failed update changes nothing
		let assignments = data
			.into_iter()
			.map(|(k, v)| Ok((self.index(k.as_ref())?, v.into())))
			.collect::<Result<Vec<(usize, Property)>, UnknownFieldError>>()?;

		for (idx, value) in assignments {
			self.values[idx] = value;
		}
		Ok(())
	}

	pub fn dismiss_context(&mut self) {
		if let Some(idx) = self.schema.position_wire(CONTEXT) {
			self.values[idx] = Property::Absent;
		}
	}

	fn index(&self, field: &str) -> Result<usize, UnknownFieldError> {
		self.schema.position(field).ok_or_else(|| self.unknown(field))
	}

	fn unknown(&self, field: &str) -> UnknownFieldError {
		UnknownFieldError {
			field: field.to_string(),
			type_name: self.type_name().to_string(),
		}
	}
}

impl ActivityStreams for Record {
	fn asdict(&self) -> serde_json::Map<String, serde_json::Value> {
		Record::asdict(self)
	}

	fn update<K, V>(&mut self, data: impl IntoIterator<Item = (K, V)>) -> Result<(), UnknownFieldError>
	where
		K: AsRef<str>,
		V: Into<Property>,
	{
		Record::update(self, data)
	}

	fn dismiss_context(&mut self) {
		Record::dismiss_context(self)
	}
}

impl serde::Serialize for Record {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serde::Serialize::serialize(&self.asdict(), serializer)
	}
}

impl From<Record> for serde_json::Value {
	fn from(value: Record) -> Self {
		serde_json::Value::Object(value.asdict())
	}
}
