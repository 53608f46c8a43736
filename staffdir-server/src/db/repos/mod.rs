//! Repository implementations for database access
//!
//! Each repository borrows the pool and runs parameterized statements.
//! The existence-check-then-mutate pattern is collapsed into atomic
//! `UPDATE/DELETE .. RETURNING` statements: zero rows back means the id
//! was absent, with no window between check and mutation.

pub mod departments;
pub mod employees;
pub mod logins;
pub mod supervisors;

pub use departments::{Department, DepartmentRepo};
pub use employees::{Employee, EmployeeRepo};
pub use logins::{LoginRecord, LoginRepo};
pub use supervisors::{Supervisor, SupervisorRepo};

/// Database error type shared by all repositories
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} {id}")]
    NotFound { resource: &'static str, id: i32 },
}
