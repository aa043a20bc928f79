//! Lenient record decoding.
//!
//! A record is an object whose commonly read fields get typed slots. A typed
//! slot only claims a value that decodes to its type *and* encodes back to
//! the same JSON. Everything else stays in `extra`: unknown fields, explicit
//! `null`s, and values of an unexpected type (`"id": "3"`). Serializing a
//! record therefore reproduces the object it was decoded from.
//!
//! # Example
//!
//! ```ignore
//! record! {
//!     /// A fund donations are given to.
//!     pub struct Fund {
//!         pub id: i64,
//!         pub name: String,
//!     }
//! }
//! ```
//!
//! expands to a struct with `pub id: Option<i64>`, `pub name: Option<String>`
//! and `pub extra: Map<String, Value>`.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

/// Declares a lenient record: `Option` slots for each listed field plus a
/// flattened `extra` map, with a `Deserialize` that never rejects an object.
macro_rules! record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $(#[$field_meta:meta])* pub $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
            /// Fields without a typed slot, or whose value did not fit it.
            #[serde(flatten)]
            pub extra: ::serde_json::Map<String, ::serde_json::Value>,
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let mut extra = <::serde_json::Map<String, ::serde_json::Value> as ::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                Ok(Self {
                    $( $field: $crate::models::lenient::take(&mut extra, stringify!($field)), )*
                    extra,
                })
            }
        }
    };
}

pub(crate) use record;

/// Move `key` out of `fields` if its value round-trips through `T` unchanged.
pub(crate) fn take<T>(fields: &mut Map<String, Value>, key: &str) -> Option<T>
where
    T: DeserializeOwned + Serialize,
{
    let value = fields.get(key)?;
    if value.is_null() {
        return None;
    }
    let typed: T = serde_json::from_value(value.clone()).ok()?;
    if serde_json::to_value(&typed).ok()? != *value {
        return None;
    }
    fields.remove(key);
    Some(typed)
}
