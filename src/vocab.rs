//! Standard ActivityStreams types and their pre-built schemas.

use std::sync::{Arc, LazyLock};

use crate::{catalog, strenum, Schema};

strenum! {
	pub enum CoreType {
		Object,
		Link,
		Activity,
		IntransitiveActivity,
		Collection,
		OrderedCollection,
		CollectionPage,
		OrderedCollectionPage;
	};
}

#[cfg(feature = "activitypub-actors")]
strenum! {
	pub enum ActorType {
		Application,
		Group,
		Organization,
		Person,
		Service;
	};
}

#[cfg(feature = "extended-types")]
strenum! {
	pub enum ExtendedType {
		Place;
	};
}

/// A named ActivityStreams type backed by a catalog entry.
pub trait Vocabulary: AsRef<str> {
	fn property_groups(&self) -> &'static [&'static [&'static str]];

	/// full property list, repeated names collapsed
	fn properties(&self) -> Vec<&'static str> {
		catalog::flatten(self.property_groups())
	}

	fn schema(&self) -> Arc<Schema> {
		Arc::new(Schema::build(self.as_ref(), self.properties()))
	}
}

fn standard(t: CoreType) -> Arc<Schema> {
	Arc::new(Schema::build(t.as_ref(), t.properties()))
}

pub static OBJECT : LazyLock<Arc<Schema>> = LazyLock::new(|| standard(CoreType::Object));
pub static LINK : LazyLock<Arc<Schema>> = LazyLock::new(|| standard(CoreType::Link));
pub static ACTIVITY : LazyLock<Arc<Schema>> = LazyLock::new(|| standard(CoreType::Activity));
pub static INTRANSITIVE_ACTIVITY : LazyLock<Arc<Schema>> = LazyLock::new(|| standard(CoreType::IntransitiveActivity));
pub static COLLECTION : LazyLock<Arc<Schema>> = LazyLock::new(|| standard(CoreType::Collection));
pub static ORDERED_COLLECTION : LazyLock<Arc<Schema>> = LazyLock::new(|| standard(CoreType::OrderedCollection));
pub static COLLECTION_PAGE : LazyLock<Arc<Schema>> = LazyLock::new(|| standard(CoreType::CollectionPage));
pub static ORDERED_COLLECTION_PAGE : LazyLock<Arc<Schema>> = LazyLock::new(|| standard(CoreType::OrderedCollectionPage));

impl CoreType {
	pub const ALL : [CoreType; 8] = [
		CoreType::Object,
		CoreType::Link,
		CoreType::Activity,
		CoreType::IntransitiveActivity,
		CoreType::Collection,
		CoreType::OrderedCollection,
		CoreType::CollectionPage,
		CoreType::OrderedCollectionPage,
	];
}

impl Vocabulary for CoreType {
	fn property_groups(&self) -> &'static [&'static [&'static str]] {
		match self {
			CoreType::Object => catalog::OBJECT,
			CoreType::Link => catalog::LINK,
			CoreType::Activity => catalog::ACTIVITY,
			CoreType::IntransitiveActivity => catalog::INTRANSITIVE_ACTIVITY,
			CoreType::Collection => catalog::COLLECTION,
			CoreType::OrderedCollection => catalog::ORDERED_COLLECTION,
			CoreType::CollectionPage => catalog::COLLECTION_PAGE,
			CoreType::OrderedCollectionPage => catalog::ORDERED_COLLECTION_PAGE,
		}
	}

	/// the shared pre-built schema, not a fresh one
	fn schema(&self) -> Arc<Schema> {
		let schema = match self {
			CoreType::Object => &OBJECT,
			CoreType::Link => &LINK,
			CoreType::Activity => &ACTIVITY,
			CoreType::IntransitiveActivity => &INTRANSITIVE_ACTIVITY,
			CoreType::Collection => &COLLECTION,
			CoreType::OrderedCollection => &ORDERED_COLLECTION,
			CoreType::CollectionPage => &COLLECTION_PAGE,
			CoreType::OrderedCollectionPage => &ORDERED_COLLECTION_PAGE,
		};
		Arc::clone(&**schema)
	}
}

#[cfg(feature = "activitypub-actors")]
impl Vocabulary for ActorType {
	fn property_groups(&self) -> &'static [&'static [&'static str]] {
		catalog::ACTOR
	}
}

#[cfg(feature = "extended-types")]
impl Vocabulary for ExtendedType {
	fn property_groups(&self) -> &'static [&'static [&'static str]] {
		match self {
			ExtendedType::Place => catalog::PLACE,
		}
	}
}

/// catalog schema for a known type name, if any
pub fn schema_for(type_name: &str) -> Option<Arc<Schema>> {
	let found = CoreType::try_from(type_name).ok().map(|t| t.schema());
	#[cfg(feature = "activitypub-actors")]
	let found = found.or_else(|| ActorType::try_from(type_name).ok().map(|t| t.schema()));
	#[cfg(feature = "extended-types")]
	let found = found.or_else(|| ExtendedType::try_from(type_name).ok().map(|t| t.schema()));
	found
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{Record, DEFAULT_CONTEXT};

	#[test]
	fn core_types_roundtrip_their_names() {
		for t in CoreType::ALL {
			assert_eq!(CoreType::try_from(t.as_ref()).expect("own name"), t);
			assert_eq!(t.schema().type_name(), t.as_ref());
		}
		assert!(CoreType::try_from("Note").is_err());
	}

	#[test]
	fn standard_schemas_are_shared() {
		assert!(Arc::ptr_eq(&CoreType::Link.schema(), &*LINK));
		assert!(Arc::ptr_eq(&schema_for("Collection").expect("core type"), &*COLLECTION));
	}

	#[test]
	fn standard_schema_defaults() {
		for t in CoreType::ALL {
			let rec = Record::new(&t.schema());
			assert_eq!(
				serde_json::Value::Object(rec.asdict()),
				serde_json::json!({ "@context": DEFAULT_CONTEXT, "type": t.as_ref() })
			);
		}
	}

	#[test]
	fn intransitive_activity_has_activity_properties() {
		assert_eq!(CoreType::IntransitiveActivity.properties(), CoreType::Activity.properties());
		assert!(INTRANSITIVE_ACTIVITY.has_field("actor"));
		assert!(!OBJECT.has_field("actor"));
	}

	#[test]
	fn object_context_property_is_kept_apart_from_at_context() {
		assert_eq!(OBJECT.field_name("context"), Some("context_"));
		assert_eq!(OBJECT.field_name("@context"), Some("context"));
	}

	#[test]
	#[cfg(feature = "activitypub-actors")]
	fn actor_types_carry_inbox_and_outbox() {
		let person = schema_for("Person").expect("actor type");
		assert_eq!(person.type_name(), "Person");
		assert!(person.has_field("inbox"));
		assert!(person.has_field("preferredUsername"));
	}

	#[test]
	#[cfg(feature = "extended-types")]
	fn place_carries_coordinates() {
		let place = ExtendedType::Place.schema();
		assert!(place.has_field("latitude"));
		assert!(place.has_field("units"));
		assert!(place.has_field("id"));
	}
}
