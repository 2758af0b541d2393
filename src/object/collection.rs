use crate::{base::Lookup, getter, Object, Record};

pub trait Collection : Object {
	getter! { total_items::totalItems -> u64 }
	getter! { current -> node }
	getter! { first -> node }
	getter! { last -> node }
	getter! { items -> node }
	getter! { ordered_items::orderedItems -> node }
	getter! { part_of::partOf -> node }
	getter! { next -> node }
	getter! { prev -> node }
	getter! { start_index::startIndex -> u64 }
}

impl Collection for Record {}
impl Collection for serde_json::Value {}

#[cfg(test)]
mod test {
	use super::Collection;
	use crate::{vocab, Record};

	#[test]
	fn collection_page_getters() {
		let page = Record::with_fields(&vocab::ORDERED_COLLECTION_PAGE, [
			("totalItems", serde_json::json!(3)),
			("startIndex", serde_json::json!(1)),
			("partOf", serde_json::json!("https://example.com/outbox")),
			("items", serde_json::json!(["https://example.com/1", "https://example.com/2"])),
		]).expect("all fields exist");
		assert_eq!(page.total_items(), Ok(3));
		assert_eq!(page.start_index(), Ok(1));
		assert_eq!(page.items().map(|x| x.len()), Some(2));
		assert!(page.next().is_none());
		// not in the catalog, so never set on records
		assert!(page.ordered_items().is_none());
	}
}
