//! Renderer module tests.

mod dispatch_tests;
