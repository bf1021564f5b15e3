//! 配送竞争测试 - 并发状态转换下的台账扇出
//!
//! 多个并发 "Delivered" 转换争抢同一订单: 恰好一个触发台账写入,
//! 其余是幂等空操作或越权拒绝。
//! 使用 DbService::new 的真实 WAL 连接池 (多连接), 与生产路径一致。

use sqlx::SqlitePool;
use tokio::task::JoinSet;

use shared::models::{OrderCreate, OrderItemInput, STATUS_DELIVERED, STATUS_PROCESSING};
use shared::util::{now_millis, snowflake_id};
use store_server::db::DbService;
use store_server::db::repository::RepoError;
use store_server::db::repository::order::{self, StatusTransition};

const CONTENDERS: usize = 8;

/// 种子数据: 店铺 + 顾客 + 商品 + 一笔单行 Processing 订单
async fn seed_processing_order(pool: &SqlitePool) -> (i64, i64) {
    let user_id = snowflake_id();
    let store_id = snowflake_id();
    let customer_id = snowflake_id();
    let product_id = snowflake_id();
    let now = now_millis();

    sqlx::query(
        "INSERT INTO users (user_id, email, password_hash, user_type, store_id, created_at, updated_at) \
         VALUES (?, 'race@shop.test', 'seeded', 'shop_owner', ?, ?, ?)",
    )
    .bind(user_id)
    .bind(store_id)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .unwrap();

    sqlx::query(
        "INSERT INTO stores (store_id, owner_user_id, store_name, store_email, created_at, updated_at) \
         VALUES (?, ?, 'Race Store', 'race@shop.test', ?, ?)",
    )
    .bind(store_id)
    .bind(user_id)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .unwrap();

    sqlx::query(
        "INSERT INTO customers (customer_id, store_id, customer_name, email, phone_number, password_hash, date_joined) \
         VALUES (?, ?, 'Ana', 'ana@race.test', '555-0000', 'seeded', ?)",
    )
    .bind(customer_id)
    .bind(store_id)
    .bind(now)
    .execute(pool)
    .await
    .unwrap();

    sqlx::query(
        "INSERT INTO products (product_id, store_id, product_name, price, created_at, updated_at) \
         VALUES (?, ?, 'Field Notes', 19.99, ?, ?)",
    )
    .bind(product_id)
    .bind(store_id)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .unwrap();

    let order_id = order::create(
        pool,
        &OrderCreate {
            customer_id,
            total_amount: 39.98,
            status: STATUS_PROCESSING.to_string(),
            store_id,
            items: vec![OrderItemInput {
                product_id,
                quantity: 2,
            }],
        },
    )
    .await
    .unwrap();

    (order_id, store_id)
}

async fn ledger_rows(pool: &SqlitePool, store_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM sales WHERE store_id = ?")
        .bind(store_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_racing_deliveries_fan_out_once() {
    let dir = tempfile::tempdir().unwrap();
    let db = DbService::new(dir.path().join("race.db").to_str().unwrap())
        .await
        .unwrap();

    let (order_id, store_id) = seed_processing_order(&db.pool).await;

    let mut calls = JoinSet::new();
    for _ in 0..CONTENDERS {
        let pool = db.pool.clone();
        calls.spawn(async move {
            order::set_status(&pool, order_id, store_id, STATUS_DELIVERED).await
        });
    }

    let mut applied = 0;
    let mut unchanged = 0;
    while let Some(joined) = calls.join_next().await {
        match joined.expect("task panicked") {
            Ok(StatusTransition::Applied { sales_recorded }) => {
                assert_eq!(sales_recorded, 1, "single-line order fans out one row");
                applied += 1;
            }
            Ok(StatusTransition::Unchanged) => unchanged += 1,
            Err(e) => panic!("no call should error under contention: {e}"),
        }
    }

    println!("竞争结果: {applied} applied, {unchanged} unchanged");
    assert_eq!(applied, 1, "exactly one call performs the fan-out");
    assert_eq!(unchanged, CONTENDERS - 1);

    assert_eq!(ledger_rows(&db.pool, store_id).await, 1);
    let (quantity_sold, total): (i64, f64) = sqlx::query_as(
        "SELECT quantity_sold, total_sale_amount FROM sales WHERE store_id = ?",
    )
    .bind(store_id)
    .fetch_one(&db.pool)
    .await
    .unwrap();
    assert_eq!(quantity_sold, 2);
    assert!((total - 39.98).abs() < 1e-9);

    let status: String = sqlx::query_scalar("SELECT status FROM orders WHERE order_id = ?")
        .bind(order_id)
        .fetch_one(&db.pool)
        .await
        .unwrap();
    assert_eq!(status, STATUS_DELIVERED);

    // 竞争结束后再次投递仍是幂等空操作
    let again = order::set_status(&db.pool, order_id, store_id, STATUS_DELIVERED)
        .await
        .unwrap();
    assert_eq!(again, StatusTransition::Unchanged);
    assert_eq!(ledger_rows(&db.pool, store_id).await, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_foreign_store_calls_never_win_the_race() {
    let dir = tempfile::tempdir().unwrap();
    let db = DbService::new(dir.path().join("race.db").to_str().unwrap())
        .await
        .unwrap();

    let (order_id, store_id) = seed_processing_order(&db.pool).await;
    let foreign_store = snowflake_id();

    let mut calls = JoinSet::new();
    for i in 0..CONTENDERS {
        let pool = db.pool.clone();
        let caller_store = if i % 2 == 0 { store_id } else { foreign_store };
        calls.spawn(async move {
            let outcome = order::set_status(&pool, order_id, caller_store, STATUS_DELIVERED).await;
            (caller_store, outcome)
        });
    }

    let mut applied = 0;
    let mut unchanged = 0;
    let mut refused = 0;
    while let Some(joined) = calls.join_next().await {
        let (caller_store, outcome) = joined.expect("task panicked");
        match outcome {
            Ok(StatusTransition::Applied { .. }) => {
                assert_eq!(caller_store, store_id, "only the owning store may transition");
                applied += 1;
            }
            Ok(StatusTransition::Unchanged) => {
                assert_eq!(caller_store, store_id, "a foreign call must never look idempotent");
                unchanged += 1;
            }
            Err(RepoError::Forbidden(_)) => {
                assert_eq!(caller_store, foreign_store);
                refused += 1;
            }
            Err(e) => panic!("unexpected error under contention: {e}"),
        }
    }

    println!("竞争结果: {applied} applied, {unchanged} unchanged, {refused} refused");
    assert_eq!(applied, 1);
    assert_eq!(unchanged, CONTENDERS / 2 - 1);
    assert_eq!(refused, CONTENDERS / 2);

    // 台账只有权属店铺的一行, 外店无任何写入
    assert_eq!(ledger_rows(&db.pool, store_id).await, 1);
    assert_eq!(ledger_rows(&db.pool, foreign_store).await, 0);
}
