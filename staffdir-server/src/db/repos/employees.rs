//! Employee repository
//!
//! List and get resolve the department and supervisor references to display
//! names with LEFT JOINs in the same statement, so absent references come
//! back as NULL rather than dropping the row.

use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};

use crate::models::{EmployeePatch, NewEmployee};
use super::DbError;

/// Employee record with resolved reference names
#[derive(Debug, Clone, FromRow)]
pub struct Employee {
    #[sqlx(rename = "id_empleado")]
    pub id: i32,
    pub nombre: String,
    pub apellido: String,
    pub fecha_nac: NaiveDate,
    pub ciudad: String,
    pub direccion: String,
    pub telefono: String,
    /// Department display name, NULL when unset or dangling
    pub departamento: Option<String>,
    /// Supervisor full name, NULL when unset or dangling
    pub supervisor: Option<String>,
    pub salario: f64,
    pub foto: Option<String>,
}

const SELECT_JOINED: &str = r#"
    SELECT
        e.id_empleado,
        e.nombre,
        e.apellido,
        e.fecha_nac,
        e.ciudad,
        e.direccion,
        e.telefono,
        d.nombre AS departamento,
        s.nombre || ' ' || s.apellidos AS supervisor,
        e.salario,
        e.foto
    FROM tb_empleados e
    LEFT JOIN departamento d ON e.id_departamento = d.id_departamento
    LEFT JOIN supervisor s ON e.id_supervisor = s.id_supervisor
"#;

/// Employee repository
pub struct EmployeeRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> EmployeeRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all employees with resolved reference names.
    pub async fn list(&self) -> Result<Vec<Employee>, DbError> {
        let sql = format!("{SELECT_JOINED} ORDER BY e.id_empleado");
        let rows: Vec<Employee> = sqlx::query_as(&sql).fetch_all(self.pool).await?;

        Ok(rows)
    }

    /// Get a single employee by id.
    pub async fn get(&self, id: i32) -> Result<Employee, DbError> {
        let sql = format!("{SELECT_JOINED} WHERE e.id_empleado = $1");
        sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(DbError::NotFound {
                resource: "employee",
                id,
            })
    }

    /// Insert an employee and return the created record, references resolved.
    pub async fn create(&self, new: NewEmployee) -> Result<Employee, DbError> {
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO tb_empleados
                (nombre, apellido, fecha_nac, ciudad, direccion, telefono,
                 id_departamento, id_supervisor, salario, foto)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id_empleado
            "#,
        )
        .bind(&new.nombre)
        .bind(&new.apellido)
        .bind(new.fecha_nac)
        .bind(&new.ciudad)
        .bind(&new.direccion)
        .bind(&new.telefono)
        .bind(new.id_departamento)
        .bind(new.id_supervisor)
        .bind(new.salario)
        .bind(new.foto.as_deref())
        .fetch_one(self.pool)
        .await?;

        self.get(id).await
    }

    /// Apply a partial update; fields left out of the patch keep their
    /// stored values, the photo included.
    pub async fn update(&self, id: i32, patch: EmployeePatch) -> Result<(), DbError> {
        let result = sqlx::query(
            r#"
            UPDATE tb_empleados
            SET nombre          = COALESCE($1, nombre),
                apellido        = COALESCE($2, apellido),
                fecha_nac       = COALESCE($3, fecha_nac),
                ciudad          = COALESCE($4, ciudad),
                direccion       = COALESCE($5, direccion),
                telefono        = COALESCE($6, telefono),
                id_departamento = COALESCE($7, id_departamento),
                id_supervisor   = COALESCE($8, id_supervisor),
                salario         = COALESCE($9, salario),
                foto            = COALESCE($10, foto)
            WHERE id_empleado = $11
            "#,
        )
        .bind(patch.nombre.as_deref())
        .bind(patch.apellido.as_deref())
        .bind(patch.fecha_nac)
        .bind(patch.ciudad.as_deref())
        .bind(patch.direccion.as_deref())
        .bind(patch.telefono.as_deref())
        .bind(patch.id_departamento)
        .bind(patch.id_supervisor)
        .bind(patch.salario)
        .bind(patch.foto.as_deref())
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "employee",
                id,
            });
        }

        Ok(())
    }

    /// Delete an employee by id.
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM tb_empleados WHERE id_empleado = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "employee",
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

    fn sample() -> NewEmployee {
        NewEmployee {
            nombre: "Ana".into(),
            apellido: "Lopez".into(),
            fecha_nac: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            ciudad: "Quito".into(),
            direccion: "Av. Siempre Viva 123".into(),
            telefono: "0991234567".into(),
            id_departamento: None,
            id_supervisor: None,
            salario: 1250.50,
            foto: None,
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_without_photo_stores_null() {
        let pool = test_pool().await;
        let repo = EmployeeRepo::new(&pool);

        let created = repo.create(sample()).await.expect("create failed");
        assert_eq!(created.foto, None);
        assert_eq!(created.departamento, None);
        assert_eq!(created.supervisor, None);

        repo.delete(created.id).await.expect("cleanup failed");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn dangling_reference_resolves_to_null() {
        let pool = test_pool().await;
        let repo = EmployeeRepo::new(&pool);

        // No referential check on write, so an id pointing nowhere is
        // accepted and resolves to NULL on read.
        let mut new = sample();
        new.id_departamento = Some(999_999);
        let created = repo.create(new).await.expect("create failed");
        assert_eq!(created.departamento, None);

        repo.delete(created.id).await.expect("cleanup failed");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn partial_update_preserves_unspecified_fields() {
        let pool = test_pool().await;
        let repo = EmployeeRepo::new(&pool);

        let mut new = sample();
        new.foto = Some("uploads/ana.png".into());
        let created = repo.create(new).await.expect("create failed");

        let patch = EmployeePatch {
            ciudad: Some("Cuenca".into()),
            ..Default::default()
        };
        repo.update(created.id, patch).await.expect("update failed");

        let fetched = repo.get(created.id).await.expect("get failed");
        assert_eq!(fetched.ciudad, "Cuenca");
        assert_eq!(fetched.foto.as_deref(), Some("uploads/ana.png"));
        assert_eq!(fetched.nombre, "Ana");

        repo.delete(created.id).await.expect("cleanup failed");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_absent_id_is_not_found() {
        let pool = test_pool().await;
        let repo = EmployeeRepo::new(&pool);

        let err = repo.update(-1, EmployeePatch::default()).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
