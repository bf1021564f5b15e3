//! Product repository.

use sqlx::SqlitePool;

use shared::models::Product;

use super::RepoResult;

const PRODUCT_SELECT: &str = "SELECT product_id, store_id, product_name, price, \
     description, image_url, created_at, updated_at FROM products";

pub async fn find_by_store(pool: &SqlitePool, store_id: i64) -> RepoResult<Vec<Product>> {
    let products =
        sqlx::query_as::<_, Product>(&format!("{PRODUCT_SELECT} WHERE store_id = ? ORDER BY product_name"))
            .bind(store_id)
            .fetch_all(pool)
            .await?;
    Ok(products)
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
            "CREATE TABLE products (
                product_id INTEGER PRIMARY KEY,
                store_id INTEGER NOT NULL,
                product_name TEXT NOT NULL,
                price REAL NOT NULL,
                description TEXT,
                image_url TEXT,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            )",
        )
        .execute(&pool)
        .await
        .unwrap();

        sqlx::query(
            "INSERT INTO products (product_id, store_id, product_name, price, created_at, updated_at) VALUES \
             (1, 10, 'Mug', 5.0, 0, 0), \
             (2, 10, 'Shirt', 20.0, 0, 0), \
             (3, 20, 'Poster', 8.5, 0, 0)",
        )
        .execute(&pool)
        .await
        .unwrap();

        pool
    }

    #[tokio::test]
    async fn test_find_by_store_scopes_and_sorts() {
        let pool = test_pool().await;

        let products = find_by_store(&pool, 10).await.unwrap();
        let names: Vec<&str> = products.iter().map(|p| p.product_name.as_str()).collect();
        assert_eq!(names, vec!["Mug", "Shirt"]);

        let empty = find_by_store(&pool, 99).await.unwrap();
        assert!(empty.is_empty());
    }
}
