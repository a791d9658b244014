//! Integration test suite entry point.

mod notion_pipeline_tests;
mod pipeline_tests;
