//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.

pub mod access;
pub mod alert;
pub mod audit;
pub mod auth;
pub mod dashboard;
pub mod event;
pub mod person;
pub mod user;
pub mod vehicle;
