use crate::{base::Lookup, getter, Object, Record};

pub trait Activity : Object {
	getter! { actor -> node }
	getter! { object -> node }
	getter! { target -> node }
	getter! { result -> node }
	getter! { origin -> node }
	getter! { instrument -> node }
}

impl Activity for Record {}
impl Activity for serde_json::Value {}
