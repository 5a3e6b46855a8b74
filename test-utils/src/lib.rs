//! Pokeleague Test Utils
//!
//! Shared helpers for the integration and unit tests of the league backend. Tests describe
//! the tables they need through [`builder::TestBuilder`], receive a [`context::TestContext`]
//! holding an in-memory SQLite database (plus an optional session), and seed rows through the
//! [`factory`] builders.
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn creates_league() -> Result<(), TestError> {
//!     let mut test = TestBuilder::new().with_league_tables().build().await?;
//!     let db = test.database().await?;
//!
//!     let league = factory::league::create_league(db).await?;
//!     // ...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
