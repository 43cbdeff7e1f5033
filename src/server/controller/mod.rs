//! HTTP handlers.
//!
//! Each handler checks the caller with `AuthGuard`, converts the request DTO into
//! server parameters, calls a service and converts the domain result back into a DTO.

pub mod access;
pub mod alert;
pub mod audit;
pub mod auth;
pub mod dashboard;
pub mod event;
pub mod health;
pub mod person;
pub mod report;
pub mod user;
pub mod vehicle;

#[cfg(test)]
mod test;
