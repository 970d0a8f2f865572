//! Decoding of signup request bodies into a flat field map.
//!
//! Bodies arrive as JSON, url-encoded forms, multipart forms or bare query
//! strings. Anything that fails to decode becomes an empty map, which the
//! registrar then reports as an invalid email.

use serde_json::{Map, Value};

/// Field map extracted from a signup request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupFields(Map<String, Value>);

impl SignupFields {
    /// Decode `body` according to the declared `content_type`.
    ///
    /// Multipart bodies need streaming and are decoded by the HTTP layer,
    /// which hands the text parts to [`SignupFields::from_pairs`].
    pub fn from_body(content_type: Option<&str>, body: &[u8]) -> Self {
        let mime = content_type
            .and_then(|ct| ct.split(';').next())
            .map(|ct| ct.trim().to_ascii_lowercase())
            .unwrap_or_default();

        match mime.as_str() {
            "application/json" => Self::from_json(body),
            "application/x-www-form-urlencoded" => Self::from_query(body),
            _ => {
                let body = body.strip_prefix(b"?").unwrap_or(body);
                Self::from_query(body)
            }
        }
    }

    /// Build from already-decoded text fields. Later duplicates win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), Value::String(v.into())))
                .collect(),
        )
    }

    fn from_json(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(map)) => Self(map),
            Ok(_) => Self::default(),
            Err(e) => {
                tracing::debug!(error = %e, "Unparseable JSON signup body");
                Self::default()
            }
        }
    }

    fn from_query(body: &[u8]) -> Self {
        Self::from_pairs(url::form_urlencoded::parse(body).into_owned())
    }

    /// The field as a string. Non-string JSON values count as absent.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
