use crate::{
	errors::{Error, MalformedInputError, UnknownFieldError},
	jsonld::{self, CONTEXT, MISSING_TYPE, TYPE},
	record::ActivityStreams,
	schema::make_type,
	Property, Record,
};

/// Stand-in for an empty json object: no fields, nothing to update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Empty;

impl ActivityStreams for Empty {
	fn asdict(&self) -> serde_json::Map<String, serde_json::Value> {
		serde_json::Map::new()
	}

	fn update<K, V>(&mut self, _data: impl IntoIterator<Item = (K, V)>) -> Result<(), UnknownFieldError>
	where
		K: AsRef<str>,
		V: Into<Property>,
	{
		Ok(())
	}

	fn dismiss_context(&mut self) {}
}

/// Outcome of parsing: a populated record, or [`Empty`] for `{}`.
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed {
	Empty(Empty),
	Record(Record),
}

impl Parsed {
	pub fn is_empty(&self) -> bool {
		matches!(self, Parsed::Empty(_))
	}

	pub fn record(&self) -> Option<&Record> {
		match self {
			Parsed::Record(x) => Some(x),
			Parsed::Empty(_) => None,
		}
	}

	pub fn into_record(self) -> Option<Record> {
		match self {
			Parsed::Record(x) => Some(x),
			Parsed::Empty(_) => None,
		}
	}
}

impl ActivityStreams for Parsed {
	fn asdict(&self) -> serde_json::Map<String, serde_json::Value> {
		match self {
			Parsed::Empty(x) => x.asdict(),
			Parsed::Record(x) => x.asdict(),
		}
	}

	fn update<K, V>(&mut self, data: impl IntoIterator<Item = (K, V)>) -> Result<(), UnknownFieldError>
	where
		K: AsRef<str>,
		V: Into<Property>,
	{
		match self {
			Parsed::Empty(x) => ActivityStreams::update(x, data),
			Parsed::Record(x) => x.update(data),
		}
	}

	fn dismiss_context(&mut self) {
		match self {
			Parsed::Empty(x) => ActivityStreams::dismiss_context(x),
			Parsed::Record(x) => x.dismiss_context(),
		}
	}
}

impl serde::Serialize for Parsed {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serde::Serialize::serialize(&self.asdict(), serializer)
	}
}

impl serde::Serialize for Empty {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serde::Serialize::serialize(&self.asdict(), serializer)
	}
}

/// name the record type after the object's `type`, first one if many are given
fn type_name(object: &serde_json::Map<String, serde_json::Value>) -> Result<&str, MalformedInputError> {
	match object.get(TYPE) {
		None => Ok(MISSING_TYPE),
		Some(serde_json::Value::String(x)) => Ok(x.as_str()),
		Some(serde_json::Value::Array(arr)) => match arr.first() {
			Some(serde_json::Value::String(x)) => Ok(x.as_str()),
			_ => Err(MalformedInputError::Type(serde_json::Value::Array(arr.clone()))),
		},
		Some(x) => Err(MalformedInputError::Type(x.clone())),
	}
}

/// Build a record out of a decoded ActivityStreams object.
///
/// The record type is synthesized from the object's own keys, so unknown or
/// extension properties survive the round trip. Nested objects are kept as plain
/// json, they are not parsed into records.
pub fn parse_object(object: serde_json::Map<String, serde_json::Value>) -> Result<Parsed, Error> {
	if object.is_empty() {
		return Ok(Parsed::Empty(Empty));
	}

	let activity_type = type_name(&object)?;
	let property_names : Vec<&str> = object
		.keys()
		.map(String::as_str)
		.filter(|k| !jsonld::is_reserved(k))
		.collect();
	let schema = make_type(activity_type, &property_names)?;
	tracing::debug!("parsing '{activity_type}' object with {} properties", property_names.len());

	let has_context = object.contains_key(CONTEXT);
	let mut record = Record::new(&schema);
	let mut data = Vec::with_capacity(object.len());
	for (wire, value) in object {
		// same as mangling, except where names collided and the schema disambiguated
		let field = schema.field_name(&wire)
			.map(str::to_string)
			.unwrap_or_else(|| crate::mangle::to_field_name(&wire));
		data.push((field, value));
	}
	record.update(data)?;

	if !has_context {
		record.dismiss_context();
	}

	Ok(Parsed::Record(record))
}

/// same as [`parse_object`], for any json value
pub fn parse_value(value: serde_json::Value) -> Result<Parsed, Error> {
	match value {
		serde_json::Value::Object(object) => parse_object(object),
		x => Err(MalformedInputError::NotAnObject(x).into()),
	}
}
