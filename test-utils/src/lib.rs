//! Brewery Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the brewery
//! service. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, entity fixtures, database factories and bearer token minting.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **fixture**: In-memory entity models with sensible defaults
//! - **factory**: Builders that insert entities into the database
//! - **token**: HS256 token minting for exercising the auth layer
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_beer_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_brewery_tables().build().await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
pub mod token;
