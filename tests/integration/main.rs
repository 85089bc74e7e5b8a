//! DB-backed integration tests.
//!
//! These drive the full Axum router against a live PostgreSQL instance and
//! are `#[ignore]`d by default. Run them with:
//!
//! ```sh
//! DATABASE_URL=postgres://localhost/paperflow_test cargo test -- --ignored
//! ```

mod helpers;

mod auth_test;
mod collection_test;
mod paper_test;
