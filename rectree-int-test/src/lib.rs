//! Shared helpers for the rectree integration tests.

pub mod test_util;
