//! Typed [ActivityStreams 2.0](https://www.w3.org/TR/activitystreams-core/) records.
//!
//! A [`Schema`] is an ordered list of fields synthesized for one ActivityStreams type,
//! a [`Record`] is one instance of it. [`parse_object`] builds both out of any decoded
//! json object, [`Record::asdict`] turns a record back into wire json.

mod macros;
pub(crate) use macros::{strenum, getter};
pub use macros::TypeValueError;

pub mod errors;
pub use errors::{Error, MalformedInputError, SchemaError, UnknownFieldError};

mod field;
pub use field::{Field, FieldErr, Property};

mod node;
pub use node::Node;

pub mod mangle;
pub mod catalog;

pub mod jsonld;
pub use jsonld::{LD, DEFAULT_CONTEXT, MISSING_TYPE};

mod schema;
pub use schema::{make_type, FieldDescriptor, Schema};

mod record;
pub use record::{ActivityStreams, Record};

pub mod vocab;
pub use vocab::{CoreType, Vocabulary};

mod parser;
pub use parser::{parse_object, parse_value, Empty, Parsed};

mod base;
pub use base::{Base, Lookup};

mod link;
pub use link::Link;

mod object;
pub use object::{
	Object,
	activity::Activity,
	collection::Collection,
};
#[cfg(feature = "extended-types")]
pub use object::place::Place;
#[cfg(feature = "activitypub-actors")]
pub use object::actor::Actor;

pub mod target;
pub use target::Addressed;

/// alias of [`make_type`]
pub use schema::make_type as make_activitystreams_type;
/// alias of [`parse_object`]
pub use parser::parse_object as parse_activitystreams_object;
