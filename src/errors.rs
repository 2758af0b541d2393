#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("type name must not be empty")]
pub struct SchemaError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("type '{type_name}' has no field '{field}'")]
pub struct UnknownFieldError {
	pub field: String,
	pub type_name: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MalformedInputError {
	#[error("expected a json object, got: {0}")]
	NotAnObject(serde_json::Value),

	#[error("'type' must be a string or an array of strings, got: {0}")]
	Type(serde_json::Value),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
	#[error("invalid schema: {0}")]
	Schema(#[from] SchemaError),

	#[error("unknown field: {0}")]
	UnknownField(#[from] UnknownFieldError),

	#[error("malformed input: {0}")]
	MalformedInput(#[from] MalformedInputError),
}
