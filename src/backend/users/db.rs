/**
 * User Store Queries
 *
 * All SQL touching the `users` table. Queries return the driver's own
 * result and error types; row-count interpretation belongs to the
 * `check` module and error classification to the responder, so nothing is
 * translated here.
 *
 * Mutations use `RETURNING id` so a zero-affected-rows outcome surfaces as
 * an empty result set and flows through the same single-row check as the
 * reads.
 */
use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// One row of the `users` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRow {
    pub id: i32,
    pub name: String,
    pub lastname: String,
    pub email: String,
    /// bcrypt hash, never serialized to the wire
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Projection used by the mutating queries.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct IdRow {
    pub id: i32,
}

/// All users, ordered by id.
pub async fn list_users(pool: &PgPool) -> Result<Vec<UserRow>, sqlx::Error> {
    sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, name, lastname, email, password, created_at, updated_at
        FROM users
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Users matching an id. At most one row by schema; the caller runs the
/// single-row check.
pub async fn find_user_by_id(pool: &PgPool, id: i32) -> Result<Vec<UserRow>, sqlx::Error> {
    sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, name, lastname, email, password, created_at, updated_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_all(pool)
    .await
}

/// Users matching an email.
pub async fn find_user_by_email(pool: &PgPool, email: &str) -> Result<Vec<UserRow>, sqlx::Error> {
    sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, name, lastname, email, password, created_at, updated_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_all(pool)
    .await
}

/// Users matching an id and an email, compared case-insensitively.
pub async fn find_user_by_id_and_email(
    pool: &PgPool,
    id: i32,
    email: &str,
) -> Result<Vec<UserRow>, sqlx::Error> {
    sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, name, lastname, email, password, created_at, updated_at
        FROM users
        WHERE id = $1 AND LOWER(email) = LOWER($2)
        "#,
    )
    .bind(id)
    .bind(email)
    .fetch_all(pool)
    .await
}

/// Insert a new user. A duplicate email raises the driver's unique
/// violation, which the responder answers as a conflict.
pub async fn insert_user(
    pool: &PgPool,
    name: &str,
    lastname: &str,
    email: &str,
    password_hash: &str,
) -> Result<Vec<IdRow>, sqlx::Error> {
    sqlx::query_as::<_, IdRow>(
        r#"
        INSERT INTO users (name, lastname, email, password)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(lastname)
    .bind(email)
    .bind(password_hash)
    .fetch_all(pool)
    .await
}

/// Replace a user's password hash.
pub async fn update_user_password(
    pool: &PgPool,
    id: i32,
    password_hash: &str,
) -> Result<Vec<IdRow>, sqlx::Error> {
    sqlx::query_as::<_, IdRow>(
        r#"
        UPDATE users
        SET password = $1, updated_at = now()
        WHERE id = $2
        RETURNING id
        "#,
    )
    .bind(password_hash)
    .bind(id)
    .fetch_all(pool)
    .await
}

/// Delete a user by id.
pub async fn delete_user(pool: &PgPool, id: i32) -> Result<Vec<IdRow>, sqlx::Error> {
    sqlx::query_as::<_, IdRow>(
        r#"
        DELETE FROM users
        WHERE id = $1
        RETURNING id
        "#,
    )
    .bind(id)
    .fetch_all(pool)
    .await
}
