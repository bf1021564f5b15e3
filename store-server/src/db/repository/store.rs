//! Store repository. Creating a store also promotes the owning account
//! to shop_owner, atomically.

use sqlx::SqlitePool;

use shared::models::{Store, StoreCreate, USER_TYPE_SHOP_OWNER};
use shared::util::{now_millis, snowflake_id};

use super::{RepoError, RepoResult};

const STORE_SELECT: &str = "SELECT store_id, owner_user_id, store_name, store_email, \
     store_address, slug, description, facebook, instagram, theme, primary_color, \
     logo, banner_image, currency, timezone, business_type, created_at, updated_at \
     FROM stores";

pub async fn find_by_id(pool: &SqlitePool, store_id: i64) -> RepoResult<Option<Store>> {
    let store = sqlx::query_as::<_, Store>(&format!("{STORE_SELECT} WHERE store_id = ?"))
        .bind(store_id)
        .fetch_optional(pool)
        .await?;
    Ok(store)
}

pub async fn find_by_owner(pool: &SqlitePool, owner_user_id: i64) -> RepoResult<Option<Store>> {
    let store = sqlx::query_as::<_, Store>(&format!("{STORE_SELECT} WHERE owner_user_id = ?"))
        .bind(owner_user_id)
        .fetch_optional(pool)
        .await?;
    Ok(store)
}

/// Create a store for the user registered under `store_email` and promote
/// that account to shop_owner, in one transaction.
///
/// The conditional UPDATE on `users.store_id IS NULL` is the one-store
/// guard; a second attempt affects zero rows and the whole transaction
/// rolls back.
pub async fn create(pool: &SqlitePool, data: &StoreCreate) -> RepoResult<Store> {
    let store_id = snowflake_id();
    let now = now_millis();

    let mut tx = pool.begin().await?;

    let owner_user_id: Option<i64> =
        sqlx::query_scalar("SELECT user_id FROM users WHERE email = ?")
            .bind(&data.store_email)
            .fetch_optional(&mut *tx)
            .await?;

    let owner_user_id = owner_user_id.ok_or_else(|| {
        RepoError::NotFound(format!(
            "No user registered with email '{}'",
            data.store_email
        ))
    })?;

    let promoted = sqlx::query(
        "UPDATE users SET user_type = ?, store_id = ?, updated_at = ? \
         WHERE user_id = ? AND store_id IS NULL",
    )
    .bind(USER_TYPE_SHOP_OWNER)
    .bind(store_id)
    .bind(now)
    .bind(owner_user_id)
    .execute(&mut *tx)
    .await?;

    if promoted.rows_affected() == 0 {
        return Err(RepoError::Duplicate(
            "User already owns a store".to_string(),
        ));
    }

    sqlx::query(
        "INSERT INTO stores (store_id, owner_user_id, store_name, store_email, \
         store_address, slug, description, facebook, instagram, theme, primary_color, \
         logo, banner_image, currency, timezone, business_type, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(store_id)
    .bind(owner_user_id)
    .bind(&data.store_name)
    .bind(&data.store_email)
    .bind(&data.store_address)
    .bind(&data.slug)
    .bind(&data.description)
    .bind(&data.facebook)
    .bind(&data.instagram)
    .bind(&data.theme)
    .bind(&data.primary_color)
    .bind(&data.logo)
    .bind(&data.banner_image)
    .bind(&data.currency)
    .bind(&data.timezone)
    .bind(&data.business_type)
    .bind(now)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    find_by_id(pool, store_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create store".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        // one connection: every new in-memory connection is a separate database
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

        sqlx::query(
            "CREATE TABLE stores (
                store_id INTEGER PRIMARY KEY,
                owner_user_id INTEGER NOT NULL REFERENCES users(user_id),
                store_name TEXT NOT NULL,
                store_email TEXT NOT NULL,
                store_address TEXT,
                slug TEXT,
                description TEXT,
                facebook TEXT,
                instagram TEXT,
                theme TEXT,
                primary_color TEXT,
                logo TEXT,
                banner_image TEXT,
                currency TEXT,
                timezone TEXT,
                business_type TEXT,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            )",
        )
        .execute(&pool)
        .await
        .unwrap();

        sqlx::query(
            "INSERT INTO users (user_id, email, password_hash, user_type, store_id, created_at, updated_at) \
             VALUES (1, 'owner@example.com', 'hash', 'customer', NULL, 0, 0)",
        )
        .execute(&pool)
        .await
        .unwrap();

        pool
    }

    fn sample_store() -> StoreCreate {
        StoreCreate {
            store_name: "Corner Shop".to_string(),
            store_email: "owner@example.com".to_string(),
            store_address: Some("1 Main St".to_string()),
            slug: Some("corner-shop".to_string()),
            description: None,
            facebook: None,
            instagram: None,
            theme: None,
            primary_color: None,
            logo: None,
            banner_image: None,
            currency: Some("USD".to_string()),
            timezone: None,
            business_type: None,
        }
    }

    #[tokio::test]
    async fn test_create_promotes_owner() {
        let pool = test_pool().await;

        let store = create(&pool, &sample_store()).await.unwrap();
        assert_eq!(store.owner_user_id, 1);
        assert_eq!(store.store_name, "Corner Shop");

        let (user_type, store_id): (String, Option<i64>) =
            sqlx::query_as("SELECT user_type, store_id FROM users WHERE user_id = 1")
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(user_type, USER_TYPE_SHOP_OWNER);
        assert_eq!(store_id, Some(store.store_id));
    }

    #[tokio::test]
    async fn test_unknown_owner_email_rejected() {
        let pool = test_pool().await;

        let mut data = sample_store();
        data.store_email = "stranger@example.com".to_string();

        let err = create(&pool, &data).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_second_store_rejected_and_rolled_back() {
        let pool = test_pool().await;

        create(&pool, &sample_store()).await.unwrap();
        let err = create(&pool, &sample_store()).await.unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));

        // the rejected attempt must not leave a second store row behind
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM stores")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_find_by_owner() {
        let pool = test_pool().await;

        assert!(find_by_owner(&pool, 1).await.unwrap().is_none());

        let store = create(&pool, &sample_store()).await.unwrap();
        let found = find_by_owner(&pool, 1).await.unwrap().unwrap();
        assert_eq!(found.store_id, store.store_id);
    }
}
