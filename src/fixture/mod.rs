//! Fixture-driven assertion engine.
//!
//! The pipeline per test case is: load the expected tree from a JSON
//! fixture, substitute runtime variables into it, compare it structurally
//! against the actual sandbox response, and fail with a path-qualified
//! report of every difference.

pub mod assertion;
pub mod compare;
pub mod loader;
pub mod substitute;

pub use assertion::{assert_fail_response, assert_response, ResponseBody};
pub use compare::{compare, Difference, VALUE_FROM_SERVER};
pub use loader::{apply_merchant_id, Fixture};
pub use substitute::{substitute, VariableMap};
