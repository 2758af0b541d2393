//! Wire property names to record field names.
//!
//! JSON-LD allows [compact IRIs](https://www.w3.org/TR/json-ld/#dfn-compact-iri)
//! such as `as:sensitive` and keywords such as `@context`: neither is a valid
//! identifier, so `prefix:suffix` becomes `prefix__suffix` and every `@` is
//! dropped. Fields keep their wire name, so the way back never needs to undo this.

const PREFIX_SEPARATOR : &str = ":";
const FIELD_SEPARATOR : &str = "__";
const KEYWORD_MARKER : char = '@';

pub fn to_field_name(wire_name: &str) -> String {
	wire_name
		.replace(PREFIX_SEPARATOR, FIELD_SEPARATOR)
		.replace(KEYWORD_MARKER, "")
}
