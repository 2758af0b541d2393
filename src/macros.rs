#[derive(Debug, thiserror::Error)]
#[error("invalid type value")]
pub struct TypeValueError;


macro_rules! strenum {
	( $(pub enum $enum_name:ident { $($flat:ident),* ; $($deep:ident($inner:ident)),* };)+ ) => {
		$(
			#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
			pub enum $enum_name {
				$($flat,)*
				$($deep($inner),)*
			}

			impl AsRef<str> for $enum_name {
				fn as_ref(&self) -> &str {
					match self {
						$(Self::$flat => stringify!($flat),)*
						$(Self::$deep(x) => x.as_ref(),)*
					}
				}
			}

			impl std::fmt::Display for $enum_name {
				fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
					f.write_str(self.as_ref())
				}
			}

			impl TryFrom<&str> for $enum_name {
				type Error = $crate::macros::TypeValueError;

				fn try_from(value:&str) -> Result<Self, Self::Error> {
					match value {
						$(stringify!($flat) => Ok(Self::$flat),)*
						_ => {
							$(
								if let Ok(x) = $inner::try_from(value) {
									return Ok(Self::$deep(x));
								}
							)*
							Err($crate::macros::TypeValueError)
						},
					}
				}
			}
		)*
	};
}

pub(crate) use strenum;

// getters resolve wire names through `Lookup`, so the same trait body serves
// records and raw json values
macro_rules! getter {
	($name:ident -> type $t:ty) => {
		fn $name(&self) -> $crate::Field<$t> {
			self.lookup("type")
				.and_then(|x| match x {
					serde_json::Value::Array(arr) => arr.first()?.as_str(),
					x => x.as_str(),
				})
				.and_then(|x| <$t>::try_from(x).ok())
				.ok_or($crate::FieldErr("type"))
		}
	};

	($name:ident -> &str) => {
		fn $name(&self) -> $crate::Field<&str> {
			self.lookup(stringify!($name))
				.and_then(|x| x.as_str())
				.ok_or($crate::FieldErr(stringify!($name)))
		}
	};

	($name:ident::$rename:ident -> &str) => {
		fn $name(&self) -> $crate::Field<&str> {
			self.lookup(stringify!($rename))
				.and_then(|x| x.as_str())
				.ok_or($crate::FieldErr(stringify!($rename)))
		}
	};

	($name:ident -> bool) => {
		fn $name(&self) -> $crate::Field<bool> {
			self.lookup(stringify!($name))
				.and_then(|x| x.as_bool())
				.ok_or($crate::FieldErr(stringify!($name)))
		}
	};

	($name:ident -> f64) => {
		fn $name(&self) -> $crate::Field<f64> {
			self.lookup(stringify!($name))
				.and_then(|x| x.as_f64())
				.ok_or($crate::FieldErr(stringify!($name)))
		}
	};

	($name:ident -> u64) => {
		fn $name(&self) -> $crate::Field<u64> {
			self.lookup(stringify!($name))
				.and_then(|x| x.as_u64())
				.ok_or($crate::FieldErr(stringify!($name)))
		}
	};

	($name:ident::$rename:ident -> u64) => {
		fn $name(&self) -> $crate::Field<u64> {
			self.lookup(stringify!($rename))
				.and_then(|x| x.as_u64())
				.ok_or($crate::FieldErr(stringify!($rename)))
		}
	};

	($name:ident -> chrono::DateTime<chrono::Utc>) => {
		fn $name(&self) -> $crate::Field<chrono::DateTime<chrono::Utc>> {
			self.lookup(stringify!($name))
				.and_then(|x| x.as_str())
				.and_then(|x| chrono::DateTime::parse_from_rfc3339(x).ok())
				.map(|x| x.with_timezone(&chrono::Utc))
				.ok_or($crate::FieldErr(stringify!($name)))
		}
	};

	($name:ident::$rename:ident -> chrono::DateTime<chrono::Utc>) => {
		fn $name(&self) -> $crate::Field<chrono::DateTime<chrono::Utc>> {
			self.lookup(stringify!($rename))
				.and_then(|x| x.as_str())
				.and_then(|x| chrono::DateTime::parse_from_rfc3339(x).ok())
				.map(|x| x.with_timezone(&chrono::Utc))
				.ok_or($crate::FieldErr(stringify!($rename)))
		}
	};

	($name:ident -> node) => {
		fn $name(&self) -> Option<$crate::Node> {
			self.lookup_node(stringify!($name))
		}
	};

	($name:ident::$rename:ident -> node) => {
		fn $name(&self) -> Option<$crate::Node> {
			self.lookup_node(stringify!($rename))
		}
	};
}

pub(crate) use getter;
