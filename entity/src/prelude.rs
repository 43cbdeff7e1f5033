pub use super::access::Entity as Access;
pub use super::alert::Entity as Alert;
pub use super::audit_log::Entity as AuditLog;
pub use super::control_point::Entity as ControlPoint;
pub use super::event::Entity as Event;
pub use super::person::Entity as Person;
pub use super::user::Entity as User;
pub use super::vehicle::Entity as Vehicle;
