use crate::{Property, Record};

/// context used when none is given, <https://www.w3.org/TR/activitystreams-core/#jsonld>
pub const DEFAULT_CONTEXT : &str = "https://www.w3.org/ns/activitystreams";

pub const CONTEXT : &str = "@context";
pub const TYPE : &str = "type";

/// wire names every record carries on its own, never taken from property lists
pub const RESERVED_PROPERTIES : [&str; 2] = [CONTEXT, TYPE];

/// type name given to objects without a `type`, never emitted on the wire
pub const MISSING_TYPE : &str = "MissingType";

pub fn is_reserved(wire_name: &str) -> bool {
	RESERVED_PROPERTIES.contains(&wire_name)
}

pub trait LD {
	/// give this object the default `@context` if it has none
	fn ld_context(self) -> Self;
}

impl LD for serde_json::Value {
	fn ld_context(mut self) -> Self {
		if let Some(obj) = self.as_object_mut() {
			if !obj.contains_key(CONTEXT) {
				obj.insert(
					CONTEXT.to_string(),
					serde_json::Value::String(DEFAULT_CONTEXT.to_string()),
				);
			}
		} else {
			tracing::warn!("cannot add @context to json value different than object");
		}
		self
	}
}

impl LD for Record {
	fn ld_context(mut self) -> Self {
		if let Some(idx) = self.schema().position_wire(CONTEXT) {
			if !self.values[idx].is_present() {
				self.values[idx] = Property::from(DEFAULT_CONTEXT);
			}
		}
		self
	}
}

#[cfg(test)]
mod test {
	use super::LD;

	#[test]
	fn ld_context_only_fills_missing_context() {
		let custom = serde_json::json!({ "@context": ["https://www.w3.org/ns/activitystreams", "https://w3id.org/security/v1"] });
		assert_eq!(custom.clone().ld_context(), custom);

		let bare = serde_json::json!({ "type": "Note" });
		assert_eq!(
			bare.ld_context(),
			serde_json::json!({ "@context": super::DEFAULT_CONTEXT, "type": "Note" })
		);
	}

	#[test]
	fn ld_context_ignores_non_objects() {
		let s = serde_json::json!("https://example.com");
		assert_eq!(s.clone().ld_context(), s);
	}

	#[test]
	fn ld_context_undoes_dismiss_context() {
		let mut note = crate::Record::new(&crate::vocab::OBJECT);
		note.dismiss_context();
		assert!(!note.asdict().contains_key("@context"));
		let note = note.ld_context();
		assert_eq!(note.asdict()["@context"], super::DEFAULT_CONTEXT);
	}
}
