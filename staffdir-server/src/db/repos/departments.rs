//! Department repository

use sqlx::{FromRow, PgPool};

use crate::models::DepartmentName;
use super::DbError;

/// Department record from database
#[derive(Debug, Clone, FromRow)]
pub struct Department {
    #[sqlx(rename = "id_departamento")]
    pub id: i32,
    pub nombre: String,
}

/// Department repository
pub struct DepartmentRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> DepartmentRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all departments, oldest first.
    pub async fn list(&self) -> Result<Vec<Department>, DbError> {
        let rows: Vec<Department> = sqlx::query_as(
            "SELECT id_departamento, nombre FROM departamento ORDER BY id_departamento",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Get a single department by id.
    pub async fn get(&self, id: i32) -> Result<Department, DbError> {
        sqlx::query_as(
            "SELECT id_departamento, nombre FROM departamento WHERE id_departamento = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: "department",
            id,
        })
    }

    /// Insert a department, returning the created record.
    pub async fn create(&self, name: DepartmentName) -> Result<Department, DbError> {
        let dept: Department = sqlx::query_as(
            r#"
            INSERT INTO departamento (nombre)
            VALUES ($1)
            RETURNING id_departamento, nombre
            "#,
        )
        .bind(name.as_str())
        .fetch_one(self.pool)
        .await?;

        Ok(dept)
    }

    /// Rename a department. Zero rows back means the id was absent.
    pub async fn update(&self, id: i32, name: DepartmentName) -> Result<Department, DbError> {
        sqlx::query_as(
            r#"
            UPDATE departamento
            SET nombre = $1
            WHERE id_departamento = $2
            RETURNING id_departamento, nombre
            "#,
        )
        .bind(name.as_str())
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: "department",
            id,
        })
    }

    /// Delete a department by id.
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM departamento WHERE id_departamento = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "department",
                id,
            });
        }

        Ok(())
    }
}
