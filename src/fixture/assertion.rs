//! Assertion façade: load expected tree → substitute variables → compare →
//! fail with a report listing every difference.

use crate::core::{Error, Result};
use crate::fixture::compare::compare;
use crate::fixture::loader::Fixture;
use crate::fixture::substitute::{substitute, VariableMap};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// An actual response body in any of the forms the SDK hands back:
/// a raw JSON string, an already-parsed tree, or a typed object.
#[derive(Debug, Clone)]
pub enum ResponseBody {
    Raw(String),
    Tree(Value),
}

impl ResponseBody {
    /// Re-encode a typed response object into the tree model.
    pub fn typed<T: Serialize>(value: &T) -> Result<Self> {
        Ok(ResponseBody::Tree(serde_json::to_value(value)?))
    }

    /// Normalize into a tree. A raw body that is not valid JSON is a hard
    /// error, not an assertion difference.
    fn into_tree(self) -> Result<Value> {
        match self {
            ResponseBody::Raw(raw) => Ok(serde_json::from_str(&raw)?),
            ResponseBody::Tree(tree) => Ok(tree),
        }
    }
}

impl From<&str> for ResponseBody {
    fn from(raw: &str) -> Self {
        ResponseBody::Raw(raw.to_string())
    }
}

impl From<String> for ResponseBody {
    fn from(raw: String) -> Self {
        ResponseBody::Raw(raw)
    }
}

impl From<Value> for ResponseBody {
    fn from(tree: Value) -> Self {
        ResponseBody::Tree(tree)
    }
}

impl From<&Value> for ResponseBody {
    fn from(tree: &Value) -> Self {
        ResponseBody::Tree(tree.clone())
    }
}

/// Assert that an API response matches the expected fixture response for
/// `(title, case)`, after substituting `variables` into the expected tree.
///
/// On mismatch returns [`Error::AssertionFailed`] carrying every difference
/// found, so one failing case reports all mismatches at once.
pub fn assert_response(
    fixture: &Fixture,
    title: &str,
    case: &str,
    body: impl Into<ResponseBody>,
    variables: &VariableMap,
) -> Result<()> {
    assert_against_fixture(fixture, title, case, body.into(), variables, "response")
}

/// Same pipeline as [`assert_response`], framed for error-response bodies
/// returned by negative test cases.
pub fn assert_fail_response(
    fixture: &Fixture,
    title: &str,
    case: &str,
    body: impl Into<ResponseBody>,
    variables: &VariableMap,
) -> Result<()> {
    assert_against_fixture(fixture, title, case, body.into(), variables, "error response")
}

fn assert_against_fixture(
    fixture: &Fixture,
    title: &str,
    case: &str,
    body: ResponseBody,
    variables: &VariableMap,
    kind: &str,
) -> Result<()> {
    let expected = fixture.response(title, case);
    let expected = substitute(&expected, variables);
    let actual = body.into_tree()?;

    let differences = compare(&expected, &actual);
    if differences.is_empty() {
        debug!(title, case, "assertion passed: {kind} matches expected fixture");
        Ok(())
    } else {
        Err(Error::AssertionFailed(differences))
    }
}
