//! Structural comparison of expected fixture trees against live responses.
//!
//! The comparison is asymmetric: the expected tree only needs to be
//! *contained* in the actual response. Fields the sandbox returns beyond
//! what the fixture enumerates are ignored. The `${valueFromServer}`
//! sentinel relaxes a single node further, requiring only that the server
//! sent something non-null there.

use serde_json::Value;
use std::fmt;

/// Sentinel marking a field whose value the sandbox generates. The
/// comparator only checks presence for such fields.
pub const VALUE_FROM_SERVER: &str = "${valueFromServer}";

/// One mismatch between an expected fixture tree and an actual response,
/// addressed by a dotted/bracketed path such as `a.b[2].c`.
///
/// `None` on either side means the value was absent at that path.
#[derive(Debug, Clone, PartialEq)]
pub struct Difference {
    pub path: String,
    pub expected: Option<Value>,
    pub actual: Option<Value>,
}

impl Difference {
    fn record(path: &str, expected: Option<&Value>, actual: Option<&Value>) -> Self {
        Self {
            path: path.to_string(),
            expected: expected.cloned(),
            actual: actual.cloned(),
        }
    }
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Path: {}", self.path)?;
        writeln!(f, "    Expected: {}", render(self.expected.as_ref()))?;
        write!(f, "    Actual: {}", render(self.actual.as_ref()))
    }
}

fn render(value: Option<&Value>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "(absent)".to_string(),
    }
}

/// Compare an expected tree against an actual one and return every
/// difference found, in depth-first pre-order. An empty result means the
/// actual response contains the expected tree.
pub fn compare(expected: &Value, actual: &Value) -> Vec<Difference> {
    let mut differences = Vec::new();
    compare_at(expected, Some(actual), "", &mut differences);
    differences
}

fn compare_at(
    expected: &Value,
    actual: Option<&Value>,
    path: &str,
    differences: &mut Vec<Difference>,
) {
    // Sentinel: presence-only check, leaf for comparison purposes.
    if expected.as_str() == Some(VALUE_FROM_SERVER) {
        match actual {
            Some(value) if !value.is_null() => {}
            _ => differences.push(Difference::record(path, Some(expected), actual)),
        }
        return;
    }

    let Some(actual) = actual else {
        differences.push(Difference::record(path, Some(expected), None));
        return;
    };

    // Null on either side: only a non-difference when both are null.
    if expected.is_null() || actual.is_null() {
        if expected != actual {
            differences.push(Difference::record(path, Some(expected), Some(actual)));
        }
        return;
    }

    match (expected, actual) {
        (Value::Array(expected_items), Value::Array(actual_items)) => {
            // Length mismatch is one difference for the whole array, with
            // no element-wise descent.
            if expected_items.len() != actual_items.len() {
                differences.push(Difference::record(path, Some(expected), Some(actual)));
                return;
            }
            for (index, (expected_item, actual_item)) in
                expected_items.iter().zip(actual_items).enumerate()
            {
                let child = format!("{path}[{index}]");
                compare_at(expected_item, Some(actual_item), &child, differences);
            }
        }
        (Value::Object(expected_fields), Value::Object(actual_fields)) => {
            // Subset semantics: only keys named by the fixture are checked,
            // in the fixture's field order.
            for (key, expected_value) in expected_fields {
                let child = join_path(path, key);
                compare_at(expected_value, actual_fields.get(key), &child, differences);
            }
        }
        _ => {
            // Covers both kind mismatches (array vs object, object vs
            // scalar) and unequal scalars: one record, no descent.
            if expected != actual {
                differences.push(Difference::record(path, Some(expected), Some(actual)));
            }
        }
    }
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}
