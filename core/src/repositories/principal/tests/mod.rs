//! Tests for principal repository implementations

mod memory_tests;
