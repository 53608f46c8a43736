//! Supervisor repository

use sqlx::{FromRow, PgPool};

use crate::models::{NewSupervisor, SupervisorPatch};
use super::DbError;

/// Supervisor record from database
#[derive(Debug, Clone, FromRow)]
pub struct Supervisor {
    #[sqlx(rename = "id_supervisor")]
    pub id: i32,
    pub nombre: String,
    pub apellidos: String,
    pub estado: String,
    pub foto: String,
}

/// Supervisor repository
pub struct SupervisorRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> SupervisorRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all supervisors, oldest first.
    pub async fn list(&self) -> Result<Vec<Supervisor>, DbError> {
        let rows: Vec<Supervisor> = sqlx::query_as(
            r#"
            SELECT id_supervisor, nombre, apellidos, estado, foto
            FROM supervisor
            ORDER BY id_supervisor
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Get a single supervisor by id.
    pub async fn get(&self, id: i32) -> Result<Supervisor, DbError> {
        sqlx::query_as(
            r#"
            SELECT id_supervisor, nombre, apellidos, estado, foto
            FROM supervisor
            WHERE id_supervisor = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: "supervisor",
            id,
        })
    }

    /// Insert a supervisor, returning the created record.
    pub async fn create(&self, new: NewSupervisor) -> Result<Supervisor, DbError> {
        let sup: Supervisor = sqlx::query_as(
            r#"
            INSERT INTO supervisor (nombre, apellidos, estado, foto)
            VALUES ($1, $2, $3, $4)
            RETURNING id_supervisor, nombre, apellidos, estado, foto
            "#,
        )
        .bind(&new.nombre)
        .bind(&new.apellidos)
        .bind(&new.estado)
        .bind(&new.foto)
        .fetch_one(self.pool)
        .await?;

        Ok(sup)
    }

    /// Apply a partial update; fields left out of the patch keep their
    /// stored values, the photo included.
    pub async fn update(&self, id: i32, patch: SupervisorPatch) -> Result<Supervisor, DbError> {
        sqlx::query_as(
            r#"
            UPDATE supervisor
            SET nombre    = COALESCE($1, nombre),
                apellidos = COALESCE($2, apellidos),
                estado    = COALESCE($3, estado),
                foto      = COALESCE($4, foto)
            WHERE id_supervisor = $5
            RETURNING id_supervisor, nombre, apellidos, estado, foto
            "#,
        )
        .bind(patch.nombre.as_deref())
        .bind(patch.apellidos.as_deref())
        .bind(patch.estado.as_deref())
        .bind(patch.foto.as_deref())
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: "supervisor",
            id,
        })
    }

    /// Delete a supervisor by id.
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM supervisor WHERE id_supervisor = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "supervisor",
                id,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        pool
    }

    fn sample() -> NewSupervisor {
        NewSupervisor {
            nombre: "Luis".into(),
            apellidos: "Mora Paz".into(),
            estado: "activo".into(),
            foto: "uploads/luis.png".into(),
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn partial_update_preserves_photo() {
        let pool = test_pool().await;
        let repo = SupervisorRepo::new(&pool);

        let created = repo.create(sample()).await.expect("create failed");

        let patch = SupervisorPatch {
            estado: Some("inactivo".into()),
            ..Default::default()
        };
        let updated = repo.update(created.id, patch).await.expect("update failed");

        assert_eq!(updated.estado, "inactivo");
        assert_eq!(updated.foto, "uploads/luis.png");
        assert_eq!(updated.nombre, "Luis");

        repo.delete(created.id).await.expect("cleanup failed");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn get_absent_id_is_not_found() {
        let pool = test_pool().await;
        let repo = SupervisorRepo::new(&pool);

        let err = repo.get(-1).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
