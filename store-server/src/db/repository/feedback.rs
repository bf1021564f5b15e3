//! Feedback repository.

use sqlx::SqlitePool;

use shared::models::FeedbackWithDetails;

use super::RepoResult;

/// A store's feedback joined with customer and product names, newest first.
pub async fn find_by_store(
    pool: &SqlitePool,
    store_id: i64,
) -> RepoResult<Vec<FeedbackWithDetails>> {
    let feedback = sqlx::query_as::<_, FeedbackWithDetails>(
        "SELECT f.feedback_id, f.review_date, f.rating, f.review_description, \
                c.customer_name, p.product_name \
         FROM feedback f \
         JOIN customers c ON f.customer_id = c.customer_id \
         JOIN products p ON f.product_id = p.product_id \
         WHERE f.store_id = ? \
         ORDER BY f.review_date DESC",
    )
    .bind(store_id)
    .fetch_all(pool)
    .await?;
    Ok(feedback)
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

        for ddl in [
            "CREATE TABLE customers (
                customer_id INTEGER PRIMARY KEY,
                store_id INTEGER NOT NULL,
                customer_name TEXT NOT NULL,
                email TEXT NOT NULL,
                phone_number TEXT,
                address TEXT,
                password_hash TEXT NOT NULL,
                date_joined INTEGER NOT NULL
            )",
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
            "CREATE TABLE feedback (
                feedback_id INTEGER PRIMARY KEY,
                store_id INTEGER NOT NULL,
                customer_id INTEGER NOT NULL,
                product_id INTEGER NOT NULL,
                rating INTEGER NOT NULL,
                review_description TEXT NOT NULL,
                review_date INTEGER NOT NULL
            )",
        ] {
            sqlx::query(ddl).execute(&pool).await.unwrap();
        }

        sqlx::query(
            "INSERT INTO customers (customer_id, store_id, customer_name, email, password_hash, date_joined) \
             VALUES (1, 10, 'Ana', 'ana@example.com', 'h', 0)",
        )
        .execute(&pool)
        .await
        .unwrap();

        sqlx::query(
            "INSERT INTO products (product_id, store_id, product_name, price, created_at, updated_at) \
             VALUES (100, 10, 'Mug', 5.0, 0, 0)",
        )
        .execute(&pool)
        .await
        .unwrap();

        sqlx::query(
            "INSERT INTO feedback (feedback_id, store_id, customer_id, product_id, rating, review_description, review_date) VALUES \
             (1, 10, 1, 100, 4, 'Good mug', 1000), \
             (2, 10, 1, 100, 5, 'Still a good mug', 2000), \
             (3, 99, 1, 100, 1, 'Wrong store', 3000)",
        )
        .execute(&pool)
        .await
        .unwrap();

        pool
    }

    #[tokio::test]
    async fn test_find_by_store_joins_names_newest_first() {
        let pool = test_pool().await;

        let feedback = find_by_store(&pool, 10).await.unwrap();
        assert_eq!(feedback.len(), 2);
        assert_eq!(feedback[0].feedback_id, 2);
        assert_eq!(feedback[0].customer_name, "Ana");
        assert_eq!(feedback[0].product_name, "Mug");
        assert_eq!(feedback[1].rating, 4);
    }
}
