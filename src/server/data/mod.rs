//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Every repository is generic over [`sea_orm::ConnectionTrait`] so that a service can run
//! it either against the pooled connection or inside a transaction it opened, which is how
//! a mutation and its audit row are committed together.

pub mod access;
pub mod alert;
pub mod audit;
pub mod control_point;
pub mod event;
pub mod person;
pub mod user;
pub mod vehicle;

#[cfg(test)]
mod test;
