//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Registry validation, the gate decision table, login checks
//! - **Orchestration**: Coordinating repositories, the plate recognizer and the audit trail
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Each mutation and its audit row commit together

pub mod access;
pub mod alert;
pub mod audit;
pub mod auth;
pub mod dashboard;
pub mod event;
pub mod ocr;
pub mod person;
pub mod report;
pub mod user;
pub mod vehicle;

#[cfg(test)]
mod test;
