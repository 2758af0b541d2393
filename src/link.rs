use crate::{base::Lookup, getter, Base, Field, FieldErr, Record};

/// `name`, `mediaType` and `preview` are shared with objects, see [`crate::Object`]
pub trait Link : Base {
	getter! { href -> &str }
	getter! { rel -> &str }
	getter! { hreflang -> &str }
	getter! { height -> u64 }
	getter! { width -> u64 }
}

impl Link for Record {}

impl Link for serde_json::Value {
	fn href(&self) -> Field<&str> {
		match self {
			serde_json::Value::String(x) => Ok(x.as_str()),
			x => x.lookup("href").and_then(|x| x.as_str()).ok_or(FieldErr("href")),
		}
	}
}
