//! Customer repository. Every query is store-scoped; a customer never
//! leaks across the tenant boundary.

use sqlx::SqlitePool;

use shared::models::{Customer, CustomerCreate, CustomerName, CustomerWithStats};
use shared::util::{now_millis, snowflake_id};

use super::{RepoError, RepoResult};

const CUSTOMER_SELECT: &str = "SELECT customer_id, store_id, customer_name, email, \
     phone_number, address, password_hash, date_joined FROM customers";

/// Owner list view: customers with their order count and lifetime spend.
/// Spend is item price times quantity at today's prices, so the DISTINCT
/// on orders matters once the item join multiplies rows.
pub async fn list_with_stats(
    pool: &SqlitePool,
    store_id: i64,
) -> RepoResult<Vec<CustomerWithStats>> {
    let customers = sqlx::query_as::<_, CustomerWithStats>(
        "SELECT c.customer_id, c.customer_name, c.email, c.phone_number, c.address, \
                c.date_joined, \
                COUNT(DISTINCT o.order_id) AS no_of_orders, \
                COALESCE(SUM(p.price * oi.quantity), 0.0) AS amount_spent \
         FROM customers c \
         LEFT JOIN orders o ON o.customer_id = c.customer_id \
         LEFT JOIN order_items oi ON oi.order_id = o.order_id \
         LEFT JOIN products p ON p.product_id = oi.product_id \
         WHERE c.store_id = ? \
         GROUP BY c.customer_id \
         ORDER BY c.date_joined DESC",
    )
    .bind(store_id)
    .fetch_all(pool)
    .await?;
    Ok(customers)
}

/// Minimal id/name pairs for the order form dropdown.
pub async fn list_names(pool: &SqlitePool, store_id: i64) -> RepoResult<Vec<CustomerName>> {
    let names = sqlx::query_as::<_, CustomerName>(
        "SELECT customer_id, customer_name FROM customers \
         WHERE store_id = ? ORDER BY customer_name",
    )
    .bind(store_id)
    .fetch_all(pool)
    .await?;
    Ok(names)
}

pub async fn find_by_id(
    pool: &SqlitePool,
    store_id: i64,
    customer_id: i64,
) -> RepoResult<Option<Customer>> {
    let customer = sqlx::query_as::<_, Customer>(&format!(
        "{CUSTOMER_SELECT} WHERE store_id = ? AND customer_id = ?"
    ))
    .bind(store_id)
    .bind(customer_id)
    .fetch_optional(pool)
    .await?;
    Ok(customer)
}

/// Login lookup. Email is only unique within a store, so the store is
/// part of the key.
pub async fn find_by_email(
    pool: &SqlitePool,
    store_id: i64,
    email: &str,
) -> RepoResult<Option<Customer>> {
    let customer = sqlx::query_as::<_, Customer>(&format!(
        "{CUSTOMER_SELECT} WHERE store_id = ? AND email = ?"
    ))
    .bind(store_id)
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(customer)
}

pub async fn create(
    pool: &SqlitePool,
    store_id: i64,
    data: &CustomerCreate,
    password_hash: &str,
) -> RepoResult<Customer> {
    let customer_id = snowflake_id();
    let now = now_millis();

    let result = sqlx::query(
        "INSERT INTO customers (customer_id, store_id, customer_name, email, \
         phone_number, address, password_hash, date_joined) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(customer_id)
    .bind(store_id)
    .bind(&data.customer_name)
    .bind(&data.email)
    .bind(&data.phone_number)
    .bind(&data.address)
    .bind(password_hash)
    .bind(now)
    .execute(pool)
    .await;

    match result {
        Ok(_) => {}
        Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
            return Err(RepoError::Duplicate(format!(
                "Customer email '{}' is already registered in this store",
                data.email
            )));
        }
        Err(e) => return Err(e.into()),
    }

    find_by_id(pool, store_id, customer_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create customer".to_string()))
}
