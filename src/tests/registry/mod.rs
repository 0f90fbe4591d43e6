//! Registry module tests.

mod resolve_tests;
