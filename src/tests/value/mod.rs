//! Value module tests.
