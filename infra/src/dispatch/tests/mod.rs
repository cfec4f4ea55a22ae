//! Tests for the task queue and worker

mod worker_tests;
