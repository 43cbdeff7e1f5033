//! Gatehouse Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the gatehouse
//! service. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas, plus factories for inserting rows.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn registers_vehicle() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_gate_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (owner, vehicle) = factory::helpers::create_vehicle_with_owner(db).await?;
//!     assert_eq!(vehicle.person_id, owner.id);
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
