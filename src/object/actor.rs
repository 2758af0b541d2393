use crate::{base::Lookup, getter, Object, Record};

pub trait Actor : Object {
	getter! { preferred_username::preferredUsername -> &str }
	getter! { inbox -> node }
	getter! { outbox -> node }
	getter! { following -> node }
	getter! { followers -> node }
	getter! { public_key::publicKey -> node }
}

impl Actor for Record {}
impl Actor for serde_json::Value {}

#[cfg(test)]
mod test {
	use super::Actor;

	#[test]
	fn actor_getters() {
		let alice = serde_json::json!({
			"type": "Person",
			"id": "https://example.com/users/alice",
			"preferredUsername": "alice",
			"inbox": "https://example.com/users/alice/inbox",
			"publicKey": {
				"id": "https://example.com/users/alice#main-key",
				"owner": "https://example.com/users/alice",
			},
		});
		let record = crate::parse_value(alice.clone()).expect("valid actor").into_record().expect("not empty");
		assert_eq!(record.preferred_username(), Ok("alice"));
		assert_eq!(alice.inbox().expect("inbox is set").id(), Ok("https://example.com/users/alice/inbox"));
		assert_eq!(
			record.public_key().expect("key is set").id(),
			Ok("https://example.com/users/alice#main-key")
		);
		assert!(record.outbox().is_none());
	}
}
