//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod department;
pub mod employee;
pub mod supervisor;

pub use validation::ValidationError;
pub use department::DepartmentName;
pub use employee::{EmployeePatch, NewEmployee};
pub use supervisor::{NewSupervisor, SupervisorPatch};
