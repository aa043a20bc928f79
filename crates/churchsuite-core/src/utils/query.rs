use serde::Serialize;

use crate::api::Result;

/// Translate an optional flag to the API's `0`/`1` convention.
///
/// `None` stays `None` so the field is omitted rather than sent as `0`.
pub fn maybe_bool_to_number(value: Option<bool>) -> Option<u8> {
    value.map(u8::from)
}

/// Encode a query record as `?key=value&...`, or an empty string when every
/// field is absent.
pub fn encode_query<Q: Serialize + ?Sized>(query: &Q) -> Result<String> {
    let encoded = serde_urlencoded::to_string(query)?;
    if encoded.is_empty() {
        Ok(String::new())
    } else {
        Ok(format!("?{}", encoded))
    }
}
