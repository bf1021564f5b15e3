//! Order repository: creation, listing, and the status transition that
//! drives the sales ledger.
//!
//! The transition runs as a single transaction whose first statement is a
//! conditional UPDATE. Ownership (through the customer relation) and
//! idempotence (`status <> target`) are folded into that one predicate, so
//! `rows_affected` is the only signal needed: of two racing calls, at most
//! one sees 1 and performs the ledger fan-out.

use sqlx::{QueryBuilder, SqlitePool};

use shared::models::{OrderCreate, OrderWithCustomer, SALE_TYPE_ONLINE, STATUS_DELIVERED};
use shared::util::{now_millis, snowflake_id};

use crate::utils::money;

use super::{RepoError, RepoResult};

/// Outcome of a status transition.
#[derive(Debug, PartialEq, Eq)]
pub enum StatusTransition {
    /// The guarded update fired. `sales_recorded` is zero unless this was
    /// the first arrival into "Delivered".
    Applied { sales_recorded: usize },
    /// The order already carried the target status; nothing was written.
    Unchanged,
}

/// Order line joined with its order and product for the ledger fan-out.
#[derive(sqlx::FromRow)]
struct FulfilledLine {
    product_id: i64,
    quantity: i64,
    price: f64,
    customer_id: i64,
    date_ordered: i64,
}

/// All orders of a store's customers, newest first.
pub async fn find_by_store(
    pool: &SqlitePool,
    store_id: i64,
) -> RepoResult<Vec<OrderWithCustomer>> {
    let orders = sqlx::query_as::<_, OrderWithCustomer>(
        "SELECT o.order_id, o.date_ordered, o.total_amount, o.status, c.customer_name \
         FROM orders o \
         JOIN customers c ON o.customer_id = c.customer_id \
         WHERE c.store_id = ? \
         ORDER BY o.date_ordered DESC",
    )
    .bind(store_id)
    .fetch_all(pool)
    .await?;
    Ok(orders)
}

/// Create an order and its lines atomically. Returns the new order id.
///
/// `total_amount` is stored as supplied; creation does not reprice the
/// cart. Field-level validation happens at the API layer.
pub async fn create(pool: &SqlitePool, data: &OrderCreate) -> RepoResult<i64> {
    if data.items.is_empty() {
        return Err(RepoError::Validation(
            "Order must contain at least one item".to_string(),
        ));
    }

    let order_id = snowflake_id();
    let now = now_millis();

    let mut tx = pool.begin().await?;

    sqlx::query(
        "INSERT INTO orders (order_id, customer_id, date_ordered, total_amount, status) \
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(order_id)
    .bind(data.customer_id)
    .bind(now)
    .bind(data.total_amount)
    .bind(&data.status)
    .execute(&mut *tx)
    .await?;

    let mut builder: QueryBuilder<sqlx::Sqlite> =
        QueryBuilder::new("INSERT INTO order_items (id, order_id, product_id, quantity, store_id) ");
    builder.push_values(&data.items, |mut b, item| {
        b.push_bind(snowflake_id())
            .push_bind(order_id)
            .push_bind(item.product_id)
            .push_bind(item.quantity)
            .push_bind(data.store_id);
    });
    builder.build().execute(&mut *tx).await?;

    tx.commit().await?;

    Ok(order_id)
}

/// Transition an order to `status` on behalf of `store_id`.
///
/// First arrival into "Delivered" also writes one sales row per order
/// line, in the same transaction. Re-applying the current status is a
/// no-op success; an order that is absent or belongs to another store is
/// `Forbidden`.
pub async fn set_status(
    pool: &SqlitePool,
    order_id: i64,
    store_id: i64,
    status: &str,
) -> RepoResult<StatusTransition> {
    let mut tx = pool.begin().await?;

    let updated = sqlx::query(
        "UPDATE orders SET status = ?1 \
         WHERE order_id = ?2 \
           AND status <> ?1 \
           AND customer_id IN (SELECT customer_id FROM customers WHERE store_id = ?3)",
    )
    .bind(status)
    .bind(order_id)
    .bind(store_id)
    .execute(&mut *tx)
    .await?;

    if updated.rows_affected() == 0 {
        // Nothing was written. Classify inside the same transaction, so
        // the answer reflects the state the UPDATE saw: idempotent
        // re-apply vs an order that is not this store's to touch.
        let already: Option<i64> = sqlx::query_scalar(
            "SELECT o.order_id FROM orders o \
             JOIN customers c ON o.customer_id = c.customer_id \
             WHERE o.order_id = ? AND c.store_id = ? AND o.status = ?",
        )
        .bind(order_id)
        .bind(store_id)
        .bind(status)
        .fetch_optional(&mut *tx)
        .await?;

        tx.rollback().await?;

        return match already {
            Some(_) => Ok(StatusTransition::Unchanged),
            None => Err(RepoError::Forbidden(
                "Order not found for this store or not allowed".to_string(),
            )),
        };
    }

    if status != STATUS_DELIVERED {
        tx.commit().await?;
        return Ok(StatusTransition::Applied { sales_recorded: 0 });
    }

    let lines = sqlx::query_as::<_, FulfilledLine>(
        "SELECT oi.product_id, oi.quantity, p.price, o.customer_id, o.date_ordered \
         FROM order_items oi \
         JOIN orders o ON oi.order_id = o.order_id \
         JOIN products p ON oi.product_id = p.product_id \
         WHERE oi.order_id = ? AND oi.store_id = ?",
    )
    .bind(order_id)
    .bind(store_id)
    .fetch_all(&mut *tx)
    .await?;

    if lines.is_empty() {
        // Dropping the transaction rolls the status write back with it.
        return Err(RepoError::NotFound(format!(
            "No order items found for order {order_id}"
        )));
    }

    let mut builder: QueryBuilder<sqlx::Sqlite> = QueryBuilder::new(
        "INSERT INTO sales (sale_id, sale_date, sale_type, product_id, quantity_sold, \
         unit_price_at_sale, total_sale_amount, store_id, customer_id) ",
    );
    builder.push_values(&lines, |mut b, line| {
        b.push_bind(snowflake_id())
            .push_bind(line.date_ordered)
            .push_bind(SALE_TYPE_ONLINE)
            .push_bind(line.product_id)
            .push_bind(line.quantity)
            .push_bind(line.price)
            .push_bind(money::line_total(line.price, line.quantity))
            .push_bind(store_id)
            .push_bind(line.customer_id);
    });
    builder.build().execute(&mut *tx).await?;

    tx.commit().await?;

    Ok(StatusTransition::Applied {
        sales_recorded: lines.len(),
    })
}
