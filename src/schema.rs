use std::sync::Arc;

use crate::{
	errors::SchemaError,
	jsonld::{self, CONTEXT, DEFAULT_CONTEXT, TYPE},
	mangle::to_field_name,
	Property,
};

/// One record field: identifier-safe name, original wire name and default value.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
	pub name: String,
	pub wire: String,
	pub default: Property,
}

/// Ordered set of fields synthesized for one ActivityStreams type.
///
/// The first two fields are always `context` (`@context`) and `type`, followed by
/// one field per property in the order the properties were given.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
	type_name: String,
	fields: Vec<FieldDescriptor>,
}

impl Schema {
	pub fn new(type_name: &str, property_names: &[&str]) -> Result<Self, SchemaError> {
		if type_name.is_empty() {
			return Err(SchemaError);
		}
		Ok(Self::build(type_name, property_names.iter().copied()))
	}

	// type_name must be non-empty
	pub(crate) fn build<'a>(type_name: &str, property_names: impl IntoIterator<Item = &'a str>) -> Self {
		let mut fields = vec![
			FieldDescriptor {
				name: to_field_name(CONTEXT),
				wire: CONTEXT.to_string(),
				default: Property::from(DEFAULT_CONTEXT),
			},
			FieldDescriptor {
				name: TYPE.to_string(),
				wire: TYPE.to_string(),
				default: Property::from(type_name),
			},
		];

		for wire in property_names {
			if jsonld::is_reserved(wire) || fields.iter().any(|f| f.wire == wire) {
				continue;
			}
			let mut name = to_field_name(wire);
			while fields.iter().any(|f| f.name == name) {
				tracing::warn!("property '{wire}' of '{type_name}' collides with field '{name}' once mangled");
				name.push('_');
			}
			fields.push(FieldDescriptor {
				name,
				wire: wire.to_string(),
				default: Property::Absent,
			});
		}

		tracing::debug!("synthesized schema '{type_name}' with {} fields", fields.len());
		Schema { type_name: type_name.to_string(), fields }
	}

	/// name of this type, also the default value of its `type` field
	pub fn type_name(&self) -> &str {
		&self.type_name
	}

	pub fn fields(&self) -> &[FieldDescriptor] {
		&self.fields
	}

	/// index of field by (mangled) field name
	pub fn position(&self, name: &str) -> Option<usize> {
		self.fields.iter().position(|f| f.name == name)
	}

	/// index of field by original wire name
	pub fn position_wire(&self, wire: &str) -> Option<usize> {
		self.fields.iter().position(|f| f.wire == wire)
	}

	/// field name assigned to given wire name, if this schema has it
	pub fn field_name(&self, wire: &str) -> Option<&str> {
		self.position_wire(wire).map(|i| self.fields[i].name.as_str())
	}

	pub fn has_field(&self, name: &str) -> bool {
		self.position(name).is_some()
	}
}

/// Record factory: build a shareable schema for an ActivityStreams type.
///
/// `@context` and `type` in `property_names` are ignored, those fields always exist.
pub fn make_type(type_name: &str, property_names: &[&str]) -> Result<Arc<Schema>, SchemaError> {
	Schema::new(type_name, property_names).map(Arc::new)
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn reserved_fields_come_first_with_defaults() {
		let schema = make_type("Note", &["id", "content", "name"]).expect("valid type name");
		let names : Vec<&str> = schema.fields().iter().map(|f| f.name.as_str()).collect();
		assert_eq!(names, vec!["context", "type", "id", "content", "name"]);
		assert_eq!(schema.fields()[0].wire, "@context");
		assert_eq!(schema.fields()[0].default, Property::from(DEFAULT_CONTEXT));
		assert_eq!(schema.fields()[1].default, Property::from("Note"));
		assert!(schema.fields()[2..].iter().all(|f| f.default.is_absent()));
	}

	#[test]
	fn reserved_names_are_filtered_from_properties() {
		let schema = make_type("Note", &["@context", "type", "id", "type"]).expect("valid type name");
		assert_eq!(schema.fields().len(), 3);
		assert_eq!(schema.fields()[2].wire, "id");
	}

	#[test]
	fn empty_type_name_is_rejected() {
		assert!(make_type("", &["id"]).is_err());
	}

	#[test]
	fn colliding_names_get_distinct_fields() {
		let schema = make_type("Note", &["context", "as:sensitive", "id", "@id"]).expect("valid type name");
		assert_eq!(schema.field_name("@context"), Some("context"));
		assert_eq!(schema.field_name("context"), Some("context_"));
		assert_eq!(schema.field_name("as:sensitive"), Some("as__sensitive"));
		assert_eq!(schema.field_name("id"), Some("id"));
		assert_eq!(schema.field_name("@id"), Some("id_"));
	}

	#[test]
	fn repeated_properties_collapse() {
		let schema = make_type("Link", &["href", "name", "href"]).expect("valid type name");
		assert_eq!(schema.fields().len(), 4);
	}
}
