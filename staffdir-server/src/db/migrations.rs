//! Schema bootstrap for the personnel tables
//!
//! Idempotent CREATE TABLE IF NOT EXISTS statements, run once before the
//! server starts accepting requests. Department and supervisor references
//! on employees are logical only - no FK constraints are declared, and
//! nothing validates them on write.

use sqlx::PgPool;

/// Run all migrations.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running schema migrations...");

    // Login credentials. Password is stored as plaintext to preserve the
    // exact-match check this table has always backed.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS login (
            idlogin SERIAL PRIMARY KEY,
            username TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS departamento (
            id_departamento SERIAL PRIMARY KEY,
            nombre TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS supervisor (
            id_supervisor SERIAL PRIMARY KEY,
            nombre TEXT NOT NULL,
            apellidos TEXT NOT NULL,
            estado TEXT NOT NULL,
            foto TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tb_empleados (
            id_empleado SERIAL PRIMARY KEY,
            nombre TEXT NOT NULL,
            apellido TEXT NOT NULL,
            fecha_nac DATE NOT NULL,
            ciudad TEXT NOT NULL,
            direccion TEXT NOT NULL,
            telefono TEXT NOT NULL,
            id_departamento INTEGER,
            id_supervisor INTEGER,
            salario DOUBLE PRECISION NOT NULL,
            foto TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Migrations complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn migrations_are_idempotent() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");

        run(&pool).await.expect("first run failed");
        run(&pool).await.expect("second run failed");
    }
}
