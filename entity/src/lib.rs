//! SeaORM entity models for the gatehouse database.

pub mod prelude;

pub mod access;
pub mod alert;
pub mod audit_log;
pub mod control_point;
pub mod event;
pub mod person;
pub mod user;
pub mod vehicle;
