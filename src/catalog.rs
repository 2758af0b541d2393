//! ActivityStreams 2.0 property names, grouped by vocabulary type.
//!
//! Each type is described as a list of property groups: its full property set is
//! the union of those groups, in order. See
//! <https://www.w3.org/TR/activitystreams-vocabulary/#properties>

pub const OBJECT_PROPERTIES : &[&str] = &[
	"id",
	"attachment",
	"attributedTo",
	"audience",
	"content",
	"context",
	"name",
	"endTime",
	"generator",
	"icon",
	"image",
	"inReplyTo",
	"location",
	"preview",
	"published",
	"replies",
	"startTime",
	"summary",
	"tag",
	"updated",
	"url",
	"to",
	"bto",
	"cc",
	"bcc",
	"mediaType",
	"duration",
];

pub const LINK_PROPERTIES : &[&str] = &[
	"href",
	"rel",
	"mediaType",
	"name",
	"hreflang",
	"height",
	"width",
	"preview",
];

pub const ACTIVITY_PROPERTIES : &[&str] = &[
	"actor",
	"object",
	"target",
	"result",
	"origin",
	"instrument",
];

pub const COLLECTION_PROPERTIES : &[&str] = &[
	"totalItems",
	"current",
	"items",
	"first",
	"last",
];

pub const COLLECTION_PAGE_PROPERTIES : &[&str] = &[
	"partOf",
	"next",
	"prev",
];

pub const ORDERED_COLLECTION_PAGE_PROPERTIES : &[&str] = &[
	"startIndex",
];

pub const PLACE_PROPERTIES : &[&str] = &[
	"accuracy",
	"altitude",
	"latitude",
	"longitude",
	"radius",
	"units",
];

// https://docs.joinmastodon.org/spec/activitypub/
pub const ACTOR_PROPERTIES : &[&str] = &[
	"inbox",
	"outbox",
	"following",
	"followers",
	"preferredUsername",
	"publicKey",
];


pub const OBJECT : &[&[&str]] = &[OBJECT_PROPERTIES];
pub const LINK : &[&[&str]] = &[LINK_PROPERTIES];
pub const ACTIVITY : &[&[&str]] = &[OBJECT_PROPERTIES, ACTIVITY_PROPERTIES];
pub const INTRANSITIVE_ACTIVITY : &[&[&str]] = ACTIVITY;
pub const COLLECTION : &[&[&str]] = &[OBJECT_PROPERTIES, COLLECTION_PROPERTIES];
pub const ORDERED_COLLECTION : &[&[&str]] = COLLECTION;
pub const COLLECTION_PAGE : &[&[&str]] = &[OBJECT_PROPERTIES, COLLECTION_PROPERTIES, COLLECTION_PAGE_PROPERTIES];
pub const ORDERED_COLLECTION_PAGE : &[&[&str]] = &[
	OBJECT_PROPERTIES, COLLECTION_PROPERTIES, COLLECTION_PAGE_PROPERTIES, ORDERED_COLLECTION_PAGE_PROPERTIES,
];
pub const PLACE : &[&[&str]] = &[OBJECT_PROPERTIES, PLACE_PROPERTIES];
pub const ACTOR : &[&[&str]] = &[OBJECT_PROPERTIES, ACTOR_PROPERTIES];

/// flatten property groups into one list, keeping the first occurrence of each name
pub fn flatten(groups: &[&[&'static str]]) -> Vec<&'static str> {
	let mut out : Vec<&'static str> = Vec::new();
	for name in groups.iter().flat_map(|g| g.iter()) {
		if !out.contains(name) {
			out.push(name);
		}
	}
	out
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn activity_extends_object() {
		let props = flatten(ACTIVITY);
		assert_eq!(props.len(), OBJECT_PROPERTIES.len() + ACTIVITY_PROPERTIES.len());
		assert_eq!(&props[..OBJECT_PROPERTIES.len()], OBJECT_PROPERTIES);
		assert!(props.contains(&"actor"));
	}

	#[test]
	fn ordered_collection_page_has_start_index_and_page_props() {
		let props = flatten(ORDERED_COLLECTION_PAGE);
		assert_eq!(props.last(), Some(&"startIndex"));
		assert!(props.contains(&"partOf"));
		assert!(props.contains(&"totalItems"));
	}

	#[test]
	fn repeated_names_collapse() {
		let props = flatten(&[LINK_PROPERTIES, &["name", "href", "extra"]]);
		assert_eq!(props.len(), LINK_PROPERTIES.len() + 1);
		assert_eq!(props.last(), Some(&"extra"));
	}
}
