//! Unit tests for text-to-task extraction.

mod model_tests;
