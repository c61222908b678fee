//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test config file reading and its lenient degradation.
//! - Test merging `api_keys` and `settings` into an environment store.
//! - Test dotenv gating and error mapping.
//!
//! Invariants:
//! - Tests that touch the process environment or cwd are `#[serial]`.
//! - Merge semantics are tested against `MemoryEnv` to avoid cross-test pollution.
//! - Temporary files are cleaned up automatically via `tempfile`.
