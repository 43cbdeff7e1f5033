//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation. Factories fill every
//! required column with unique, valid defaults.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let guard = factory::user::create_user(&db).await?;
//! let (owner, vehicle) = factory::helpers::create_vehicle_with_owner(&db).await?;
//! let (entry_gate, exit_gate) = factory::control_point::create_gates(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db)
//!     .username("root")
//!     .password("s3cret")
//!     .role("admin")
//!     .build()
//!     .await?;
//!
//! let visitor = factory::person::PersonFactory::new(&db)
//!     .kind("visitor")
//!     .active(false)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Staff accounts (guards and admins)
//! - `person` - Registry people
//! - `vehicle` - Registered vehicles
//! - `control_point` - Gate lanes
//! - `access` - Access log rows
//! - `alert` - Alerts and incident reports
//! - `event` - Calendar events
//! - `helpers` - Unique id generation and multi-entity helpers

pub mod access;
pub mod alert;
pub mod control_point;
pub mod event;
pub mod helpers;
pub mod person;
pub mod user;
pub mod vehicle;

pub use access::create_access;
pub use alert::create_alert;
pub use control_point::create_gates;
pub use event::create_event;
pub use person::create_person;
pub use user::{create_admin, create_user};
pub use vehicle::create_vehicle;
