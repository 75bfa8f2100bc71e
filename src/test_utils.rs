//! Shared proptest strategies for unit tests.

use proptest::prelude::*;

/// Keys as they appear after the scheme: non-empty, no leading whitespace,
/// inner spaces allowed.
pub(crate) fn arb_api_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9._~+/=-][A-Za-z0-9._~+/= -]{0,40}")
        .expect("valid key regex")
}

/// Single-word scheme tokens that differ from `excluded`.
pub(crate) fn arb_scheme_other_than(excluded: &'static str) -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z]{1,12}")
        .expect("valid scheme regex")
        .prop_filter("scheme must differ", move |scheme| scheme != excluded)
}
