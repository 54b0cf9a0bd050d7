//! Placeholder substitution for expected fixture trees.
//!
//! Fixtures carry `${name}` tokens for values that only exist at run time,
//! such as a freshly minted partner reference number. Substitution replaces
//! a token with the mapped value only when the token is the *entire* string;
//! placeholders embedded in larger strings are left alone.

use crate::fixture::compare::VALUE_FROM_SERVER;
use serde_json::Value;
use std::collections::BTreeMap;

/// Runtime values keyed by placeholder name, built per test invocation.
pub type VariableMap = BTreeMap<String, Value>;

/// Replace whole-string `${name}` placeholders in `tree` with values from
/// `variables`. Unknown placeholders and the `${valueFromServer}` sentinel
/// stay as their literal text. Returns a new tree; the input is not mutated.
pub fn substitute(tree: &Value, variables: &VariableMap) -> Value {
    if variables.is_empty() {
        return tree.clone();
    }
    apply(tree, variables)
}

fn apply(value: &Value, variables: &VariableMap) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(|item| apply(item, variables)).collect()),
        Value::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(key, field)| (key.clone(), apply(field, variables)))
                .collect(),
        ),
        Value::String(text) => match placeholder_name(text) {
            Some(name) => variables.get(name).cloned().unwrap_or_else(|| value.clone()),
            None => value.clone(),
        },
        _ => value.clone(),
    }
}

/// The placeholder name when `text` is exactly `${name}`, excluding the
/// sentinel, which is never substituted.
fn placeholder_name(text: &str) -> Option<&str> {
    if text == VALUE_FROM_SERVER {
        return None;
    }
    text.strip_prefix("${")?.strip_suffix('}')
}
