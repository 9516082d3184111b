//! Integration tests for extract-exercises.

mod helpers;
