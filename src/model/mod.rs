//! Wire types shared by the HTTP API.
//!
//! DTOs serialized to and from JSON by the controllers, plus the small closed enums
//! (roles, directions, results, severities) that appear both on the wire and in the
//! database as lowercase strings.

pub mod access;
pub mod alert;
pub mod api;
pub mod audit;
pub mod auth;
pub mod dashboard;
pub mod event;
pub mod person;
pub mod user;
pub mod vehicle;
