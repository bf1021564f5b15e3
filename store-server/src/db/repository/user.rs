//! User account repository (signup / login / profile lookups).

use sqlx::SqlitePool;

use shared::models::{USER_TYPE_CUSTOMER, User};
use shared::util::{now_millis, snowflake_id};

use super::{RepoError, RepoResult};

const USER_SELECT: &str = "SELECT user_id, email, password_hash, user_type, store_id, \
     created_at, updated_at FROM users";

pub async fn find_by_id(pool: &SqlitePool, user_id: i64) -> RepoResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(&format!("{USER_SELECT} WHERE user_id = ?"))
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(&format!("{USER_SELECT} WHERE email = ?"))
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

/// Create a plain account. Store ownership is granted later, when the
/// account creates its store.
pub async fn create(pool: &SqlitePool, email: &str, password_hash: &str) -> RepoResult<User> {
    let user_id = snowflake_id();
    let now = now_millis();

    let result = sqlx::query(
        "INSERT INTO users (user_id, email, password_hash, user_type, store_id, created_at, updated_at) \
         VALUES (?, ?, ?, ?, NULL, ?, ?)",
    )
    .bind(user_id)
    .bind(email)
    .bind(password_hash)
    .bind(USER_TYPE_CUSTOMER)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await;

    match result {
        Ok(_) => {}
        Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
            return Err(RepoError::Duplicate(format!(
                "Email '{email}' is already registered"
            )));
        }
        Err(e) => return Err(e.into()),
    }

    find_by_id(pool, user_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create user".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        sqlx::query(
            "CREATE TABLE users (
                user_id INTEGER PRIMARY KEY,
                email TEXT NOT NULL UNIQUE,
                password_hash TEXT NOT NULL,
                user_type TEXT NOT NULL DEFAULT 'customer',
                store_id INTEGER,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            )",
        )
        .execute(&pool)
        .await
        .unwrap();

        pool
    }

    #[tokio::test]
    async fn test_create_and_find_by_email() {
        let pool = test_pool().await;

        let user = create(&pool, "owner@example.com", "hash").await.unwrap();
        assert_eq!(user.email, "owner@example.com");
        assert_eq!(user.user_type, USER_TYPE_CUSTOMER);
        assert_eq!(user.store_id, None);

        let found = find_by_email(&pool, "owner@example.com").await.unwrap();
        assert_eq!(found.unwrap().user_id, user.user_id);

        let missing = find_by_email(&pool, "nobody@example.com").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let pool = test_pool().await;

        create(&pool, "dup@example.com", "hash-a").await.unwrap();
        let err = create(&pool, "dup@example.com", "hash-b")
            .await
            .unwrap_err();

        assert!(matches!(err, RepoError::Duplicate(_)));
    }
}
