//! Fixture document loading.
//!
//! Fixture files are JSON documents of the shape
//! `{ [title]: { [case]: { request?, response?, responseCode? } } }`,
//! located under `resources/request/components/`. The strict `try_*`
//! accessors surface missing lookups as errors; the plain accessors keep
//! the lenient contract the tests rely on (default value on any failure)
//! but always log a warning so a missing fixture cannot pass silently.

use crate::core::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::warn;

/// A loaded fixture document with (title, case, section) accessors.
#[derive(Debug, Clone)]
pub struct Fixture {
    path: String,
    document: Value,
}

impl Fixture {
    /// Load and parse a fixture document. Unreadable or malformed files
    /// are errors here; use [`Fixture::load_or_empty`] for the lenient form.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let document: Value = serde_json::from_str(&raw)?;
        Ok(Self {
            path: path.display().to_string(),
            document,
        })
    }

    /// Load a fixture document, falling back to an empty one (every lookup
    /// yields its default) when the file is missing or malformed.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(fixture) => fixture,
            Err(error) => {
                warn!(path = %path.display(), %error, "fixture unavailable, using empty document");
                Self {
                    path: path.display().to_string(),
                    document: Value::Object(Map::new()),
                }
            }
        }
    }

    /// Path the document was loaded from.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The sub-tree at `document[title][case][section]`, or an error naming
    /// the failed lookup.
    pub fn try_section(&self, title: &str, case: &str, section: &str) -> Result<Value> {
        self.lookup(title, case, section).cloned().ok_or_else(|| {
            Error::fixture(format!(
                "{}: no '{section}' under '{title}' / '{case}'",
                self.path
            ))
        })
    }

    /// The `request` sub-tree for a case, or an empty object.
    pub fn request(&self, title: &str, case: &str) -> Value {
        self.section_or_default(title, case, "request")
    }

    /// The `response` sub-tree for a case, or an empty object.
    pub fn response(&self, title: &str, case: &str) -> Value {
        self.section_or_default(title, case, "response")
    }

    /// The `responseCode` for a case, or an empty string.
    pub fn response_code(&self, title: &str, case: &str) -> String {
        match self.lookup(title, case, "responseCode").and_then(Value::as_str) {
            Some(code) => code.to_string(),
            None => {
                warn!(
                    path = %self.path,
                    title,
                    case,
                    "responseCode missing from fixture, using empty string"
                );
                String::new()
            }
        }
    }

    /// Deserialize the `request` sub-tree into `T`, or an error when the
    /// lookup or deserialization fails.
    pub fn try_request_as<T: DeserializeOwned>(&self, title: &str, case: &str) -> Result<T> {
        let request = self.try_section(title, case, "request")?;
        Ok(serde_json::from_value(request)?)
    }

    /// Deserialize the `request` sub-tree into `T`, falling back to
    /// `T::default()` (with a warning) when the fixture cannot supply it.
    pub fn request_as<T: DeserializeOwned + Default>(&self, title: &str, case: &str) -> T {
        match self.try_request_as(title, case) {
            Ok(request) => request,
            Err(error) => {
                warn!(path = %self.path, title, case, %error, "typed request unavailable, using default");
                T::default()
            }
        }
    }

    fn section_or_default(&self, title: &str, case: &str, section: &str) -> Value {
        match self.lookup(title, case, section) {
            Some(value) => value.clone(),
            None => {
                warn!(
                    path = %self.path,
                    title,
                    case,
                    section,
                    "section missing from fixture, using empty object"
                );
                Value::Object(Map::new())
            }
        }
    }

    fn lookup(&self, title: &str, case: &str, section: &str) -> Option<&Value> {
        self.document.get(title)?.get(case)?.get(section)
    }
}

/// Overwrite the `merchantId` field of a request, if it has one, with the
/// merchant id from configuration. Requests without the field are untouched.
pub fn apply_merchant_id(request: &mut Value, merchant_id: &str) {
    if let Some(fields) = request.as_object_mut() {
        if fields.contains_key("merchantId") {
            fields.insert("merchantId".to_string(), Value::String(merchant_id.to_string()));
        }
    }
}
