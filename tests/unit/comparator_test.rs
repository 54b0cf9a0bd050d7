// Unit tests for the structural comparator.
//
// Covers the sentinel rule, subset semantics for objects, array length
// strictness, path formatting, and reflexivity over arbitrary trees.

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::arb_tree;
use payconform::{compare, Difference, VALUE_FROM_SERVER};
use proptest::prelude::*;
use serde_json::json;

#[test]
fn sentinel_satisfied_by_any_present_value() {
    let expected = json!({"x": VALUE_FROM_SERVER});
    assert!(compare(&expected, &json!({"x": 42})).is_empty());
    assert!(compare(&expected, &json!({"x": "2025-01-01"})).is_empty());
    assert!(compare(&expected, &json!({"x": [1, 2]})).is_empty());
    assert!(compare(&expected, &json!({"x": false})).is_empty());
}

#[test]
fn sentinel_unsatisfied_by_absence() {
    let expected = json!({"x": VALUE_FROM_SERVER});
    let differences = compare(&expected, &json!({}));
    assert_eq!(
        differences,
        [Difference {
            path: "x".to_string(),
            expected: Some(json!(VALUE_FROM_SERVER)),
            actual: None,
        }]
    );
}

#[test]
fn sentinel_unsatisfied_by_null() {
    let expected = json!({"x": VALUE_FROM_SERVER});
    let differences = compare(&expected, &json!({"x": null}));
    assert_eq!(differences.len(), 1);
    assert_eq!(differences[0].path, "x");
    assert_eq!(differences[0].actual, Some(json!(null)));
}

#[test]
fn sentinel_stops_descent_into_its_subtree() {
    // A sentinel standing in for a whole object accepts any shape beneath.
    let expected = json!({"accountInfos": VALUE_FROM_SERVER});
    let actual = json!({"accountInfos": [{"balanceType": "BALANCE", "amount": {"value": "1.00"}}]});
    assert!(compare(&expected, &actual).is_empty());
}

#[test]
fn subset_semantics_ignore_extra_actual_fields() {
    assert!(compare(&json!({"a": 1}), &json!({"a": 1, "b": 2})).is_empty());
}

#[test]
fn subset_semantics_flag_missing_expected_fields() {
    let differences = compare(&json!({"a": 1, "b": 2}), &json!({"a": 1}));
    assert_eq!(
        differences,
        [Difference {
            path: "b".to_string(),
            expected: Some(json!(2)),
            actual: None,
        }]
    );
}

#[test]
fn array_length_mismatch_yields_exactly_one_difference() {
    let differences = compare(&json!([1, 2]), &json!([1, 2, 3]));
    assert_eq!(differences.len(), 1);
    assert_eq!(differences[0].path, "");
    assert_eq!(differences[0].expected, Some(json!([1, 2])));
    assert_eq!(differences[0].actual, Some(json!([1, 2, 3])));
}

#[test]
fn matching_length_arrays_are_compared_element_wise() {
    let differences = compare(&json!([1, 2, 3]), &json!([1, 9, 3]));
    assert_eq!(differences.len(), 1);
    assert_eq!(differences[0].path, "[1]");
    assert_eq!(differences[0].expected, Some(json!(2)));
    assert_eq!(differences[0].actual, Some(json!(9)));
}

#[test]
fn nested_mismatch_path_is_fully_qualified() {
    let expected = json!({"a": {"b": [{"c": 1}]}});
    let actual = json!({"a": {"b": [{"c": 2}]}});
    let differences = compare(&expected, &actual);
    assert_eq!(
        differences,
        [Difference {
            path: "a.b[0].c".to_string(),
            expected: Some(json!(1)),
            actual: Some(json!(2)),
        }]
    );
}

#[test]
fn kind_mismatch_is_one_difference_without_descent() {
    let differences = compare(&json!({"a": {"k": 1}}), &json!({"a": [1]}));
    assert_eq!(differences.len(), 1);
    assert_eq!(differences[0].path, "a");
}

#[test]
fn all_differences_are_collected_not_just_the_first() {
    let expected = json!({"a": 1, "b": 2, "c": 3});
    let actual = json!({"a": 9, "c": 8});
    let differences = compare(&expected, &actual);
    let paths: Vec<&str> = differences.iter().map(|d| d.path.as_str()).collect();
    assert_eq!(paths, ["a", "b", "c"]);
}

#[test]
fn differences_follow_expected_field_order() {
    // preserve_order keeps fixture declaration order in reports.
    let expected = json!({"zeta": 1, "alpha": 2});
    let actual = json!({});
    let differences = compare(&expected, &actual);
    let paths: Vec<&str> = differences.iter().map(|d| d.path.as_str()).collect();
    assert_eq!(paths, ["zeta", "alpha"]);
}

#[test]
fn scalar_mismatch_at_root_uses_empty_path() {
    let differences = compare(&json!("ok"), &json!("fail"));
    assert_eq!(differences.len(), 1);
    assert_eq!(differences[0].path, "");
}

#[test]
fn difference_display_lists_path_expected_and_actual() {
    let difference = Difference {
        path: "msg".to_string(),
        expected: Some(json!("ok")),
        actual: None,
    };
    let rendered = difference.to_string();
    assert!(rendered.contains("Path: msg"));
    assert!(rendered.contains("Expected: \"ok\""));
    assert!(rendered.contains("Actual: (absent)"));
}

proptest! {
    #[test]
    fn comparison_is_reflexive(tree in arb_tree()) {
        prop_assert!(compare(&tree, &tree).is_empty());
    }

    #[test]
    fn subset_holds_after_adding_fields(tree in arb_tree(), extra in arb_tree()) {
        // Expected objects compare clean against a widened actual.
        if let Some(fields) = tree.as_object() {
            let mut widened = fields.clone();
            widened.insert("zzz_extra".to_string(), extra);
            prop_assert!(compare(&tree, &serde_json::Value::Object(widened)).is_empty());
        }
    }
}
