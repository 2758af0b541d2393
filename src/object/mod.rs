pub mod activity;
pub mod collection;
#[cfg(feature = "extended-types")]
pub mod place;
#[cfg(feature = "activitypub-actors")]
pub mod actor;

use crate::{base::Lookup, getter, Base, Record};

pub trait Object : Base {
	getter! { content -> &str } // TODO handle contentMap language maps
	getter! { name -> &str }
	getter! { summary -> &str }
	getter! { media_type::mediaType -> &str }
	getter! { duration -> &str }
	getter! { published -> chrono::DateTime<chrono::Utc> }
	getter! { updated -> chrono::DateTime<chrono::Utc> }
	getter! { start_time::startTime -> chrono::DateTime<chrono::Utc> }
	getter! { end_time::endTime -> chrono::DateTime<chrono::Utc> }
	getter! { attachment -> node }
	getter! { attributed_to::attributedTo -> node }
	getter! { audience -> node }
	getter! { context -> node }
	getter! { generator -> node }
	getter! { icon -> node }
	getter! { image -> node }
	getter! { in_reply_to::inReplyTo -> node }
	getter! { location -> node }
	getter! { preview -> node }
	getter! { replies -> node }
	getter! { tag -> node }
	getter! { url -> node }
	getter! { to -> node }
	getter! { bto -> node }
	getter! { cc -> node }
	getter! { bcc -> node }
}

impl Object for Record {}
impl Object for serde_json::Value {}
