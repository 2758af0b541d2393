use crate::Object;

pub const PUBLIC : &str = "https://www.w3.org/ns/activitystreams#Public";

pub trait Addressed {
	/// ids of everyone in to, bto, cc and bcc
	fn addressed(&self) -> Vec<String>;
	/// ids of primary targets: to and bto
	fn mentioning(&self) -> Vec<String>;
	fn is_public(&self) -> bool {
		self.addressed().iter().any(|x| x == PUBLIC)
	}
}

impl<T: Object> Addressed for T {
	fn addressed(&self) -> Vec<String> {
		[self.to(), self.bto(), self.cc(), self.bcc()]
			.into_iter()
			.flatten()
			.flat_map(|x| x.all_ids())
			.collect()
	}

	fn mentioning(&self) -> Vec<String> {
		[self.to(), self.bto()]
			.into_iter()
			.flatten()
			.flat_map(|x| x.all_ids())
			.collect()
	}
}
