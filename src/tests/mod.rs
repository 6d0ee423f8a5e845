//! Crate-level acceptance tests driving the full TUI through the test harness.
