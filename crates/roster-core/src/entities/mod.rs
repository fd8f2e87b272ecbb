//! Entity structs for roster domain objects.
//!
//! Entities derive `Serialize`, `Deserialize`, and `JsonSchema` so they can be
//! emitted as JSON and validated against their generated schema.

mod employee;

pub use employee::Employee;
