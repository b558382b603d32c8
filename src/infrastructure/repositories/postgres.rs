use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use sqlx::{FromRow, Pool, Postgres, Row, postgres::PgPoolOptions};

use crate::domain::{
    models::{User, UserName},
    repositories::UserRepository,
};

pub type PgPool = Pool<Postgres>;

/// Opens the pool eagerly so an unreachable database fails startup.
pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .context("failed to connect to the database")
}

pub async fn migrate(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("failed to apply database migrations")
}

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Arc<Self> {
        Arc::new(Self { pool })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, user: &User) -> anyhow::Result<i64> {
        let row = sqlx::query(
            r#"INSERT INTO person (id, first_name, last_name) VALUES ($1, $2, $3) RETURNING id"#,
        )
        .bind(user.id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.try_get::<i64, _>("id")?)
    }

    async fn list(&self) -> anyhow::Result<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRecord>(
            r#"SELECT id, first_name, last_name FROM person"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn update(&self, id: i64, name: &UserName) -> anyhow::Result<u64> {
        let result = sqlx::query(
            r#"UPDATE person SET first_name = $1, last_name = $2 WHERE id = $3"#,
        )
        .bind(&name.first_name)
        .bind(&name.last_name)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> anyhow::Result<u64> {
        let result = sqlx::query(r#"DELETE FROM person WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[derive(FromRow)]
struct UserRecord {
    id: i64,
    first_name: String,
    last_name: String,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        User {
            id: record.id,
            first_name: record.first_name,
            last_name: record.last_name,
        }
    }
}
