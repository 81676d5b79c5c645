//! Tests for the token service and refresher

mod service_tests;
