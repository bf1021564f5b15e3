//! Customer API Handlers
//!
//! 全部路由要求店主身份 ([`StoreOwner`]), 数据一律按店铺过滤。

use axum::{
    Json,
    extract::{Path, State},
};
use http::StatusCode;
use serde::Serialize;

use shared::models::{Customer, CustomerCreate, CustomerName, CustomerWithStats};

use crate::auth::{StoreOwner, hash_password};
use crate::core::ServerState;
use crate::db::repository::customer;
use crate::utils::validation::{
    self, MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_PASSWORD_LEN, MAX_SHORT_TEXT_LEN,
};
use crate::utils::{AppError, AppResult};

/// GET /api/customers - 当前店铺的顾客列表 (含订单数与消费额)
pub async fn list(
    State(state): State<ServerState>,
    owner: StoreOwner,
) -> AppResult<Json<Vec<CustomerWithStats>>> {
    let customers = customer::list_with_stats(&state.pool, owner.store_id).await?;
    Ok(Json(customers))
}

/// GET /api/customers/names - 顾客下拉选项 (id + 姓名)
pub async fn names(
    State(state): State<ServerState>,
    owner: StoreOwner,
) -> AppResult<Json<Vec<CustomerName>>> {
    let names = customer::list_names(&state.pool, owner.store_id).await?;
    Ok(Json(names))
}

/// GET /api/customers/{id} - 顾客详情
///
/// 非本店顾客与不存在的顾客同样返回 404, 不泄露存在性。
pub async fn get_by_id(
    State(state): State<ServerState>,
    owner: StoreOwner,
    Path(id): Path<i64>,
) -> AppResult<Json<Customer>> {
    let customer = customer::find_by_id(&state.pool, owner.store_id, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Customer {}", id)))?;

    Ok(Json(customer))
}

#[derive(Serialize)]
pub struct CustomerCreated {
    pub message: String,
    #[serde(flatten)]
    pub customer: Customer,
}

/// POST /api/customers - 创建顾客
pub async fn create(
    State(state): State<ServerState>,
    owner: StoreOwner,
    Json(payload): Json<CustomerCreate>,
) -> AppResult<(StatusCode, Json<CustomerCreated>)> {
    validation::validate_required_text(&payload.customer_name, "customer_name", MAX_NAME_LEN)?;
    validation::validate_email(&payload.email, "email")?;
    // 联系电话为必填 (Option 仅为与模型对齐)
    let phone = payload.phone_number.as_deref().unwrap_or("");
    validation::validate_required_text(phone, "phone_number", MAX_SHORT_TEXT_LEN)?;
    validation::validate_optional_text(&payload.address, "address", MAX_ADDRESS_LEN)?;
    validation::validate_required_text(&payload.password, "password", MAX_PASSWORD_LEN)?;

    let password_hash = hash_password(&payload.password)?;
    let customer =
        customer::create(&state.pool, owner.store_id, &payload, &password_hash).await?;

    tracing::info!(
        customer_id = customer.customer_id,
        store_id = owner.store_id,
        "Customer created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CustomerCreated {
            message: "Customer added successfully".to_string(),
            customer,
        }),
    ))
}
