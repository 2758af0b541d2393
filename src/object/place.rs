use crate::{base::Lookup, getter, Object, Record};

pub trait Place : Object {
	getter! { accuracy -> f64 }
	getter! { altitude -> f64 }
	getter! { latitude -> f64 }
	getter! { longitude -> f64 }
	getter! { radius -> f64 }
	getter! { units -> &str }
}

impl Place for Record {}
impl Place for serde_json::Value {}

#[cfg(test)]
mod test {
	use super::Place;
	use crate::vocab::{ExtendedType, Vocabulary};

	#[test]
	fn place_getters() {
		let place = crate::Record::with_fields(&ExtendedType::Place.schema(), [
			("latitude", serde_json::json!(36.75)),
			("longitude", serde_json::json!(119.7667)),
			("radius", serde_json::json!(15)),
			("units", serde_json::json!("miles")),
		]).expect("all fields exist");
		assert_eq!(place.latitude(), Ok(36.75));
		assert_eq!(place.radius(), Ok(15.0));
		assert_eq!(place.units(), Ok("miles"));
		assert!(place.altitude().is_err());
	}
}
