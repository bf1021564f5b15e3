//! Store API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use http::StatusCode;
use serde::Serialize;

use shared::models::{Product, Store, StoreCreate};

use crate::auth::StoreOwner;
use crate::core::ServerState;
use crate::db::repository::{product, store};
use crate::utils::validation::{
    self, MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, MAX_URL_LEN,
};
use crate::utils::{AppError, AppResult};

#[derive(Serialize)]
pub struct StoreCreated {
    pub message: String,
    pub store_id: i64,
}

/// POST /api/stores - 创建店铺
///
/// 以 `store_email` 找到平台账号 (404), 同一事务内建店并将账号提升为
/// 店主; 该账号已有店铺时返回 409。
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<StoreCreate>,
) -> AppResult<(StatusCode, Json<StoreCreated>)> {
    validation::validate_required_text(&payload.store_name, "store_name", MAX_NAME_LEN)?;
    validation::validate_email(&payload.store_email, "store_email")?;
    validation::validate_optional_text(&payload.store_address, "store_address", MAX_ADDRESS_LEN)?;
    validation::validate_optional_text(&payload.slug, "slug", MAX_SHORT_TEXT_LEN)?;
    validation::validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    validation::validate_optional_text(&payload.facebook, "facebook", MAX_URL_LEN)?;
    validation::validate_optional_text(&payload.instagram, "instagram", MAX_URL_LEN)?;
    validation::validate_optional_text(&payload.theme, "theme", MAX_SHORT_TEXT_LEN)?;
    validation::validate_optional_text(&payload.primary_color, "primary_color", MAX_SHORT_TEXT_LEN)?;
    validation::validate_optional_text(&payload.logo, "logo", MAX_URL_LEN)?;
    validation::validate_optional_text(&payload.banner_image, "banner_image", MAX_URL_LEN)?;
    validation::validate_optional_text(&payload.currency, "currency", MAX_SHORT_TEXT_LEN)?;
    validation::validate_optional_text(&payload.timezone, "timezone", MAX_SHORT_TEXT_LEN)?;
    validation::validate_optional_text(&payload.business_type, "business_type", MAX_SHORT_TEXT_LEN)?;

    let store = store::create(&state.pool, &payload).await?;

    tracing::info!(
        store_id = store.store_id,
        owner_user_id = store.owner_user_id,
        "Store created"
    );

    Ok((
        StatusCode::CREATED,
        Json(StoreCreated {
            message: "Store created and user updated".to_string(),
            store_id: store.store_id,
        }),
    ))
}

/// GET /api/stores/me - 当前店主的店铺
pub async fn my_store(
    State(state): State<ServerState>,
    owner: StoreOwner,
) -> AppResult<Json<Store>> {
    let store = store::find_by_id(&state.pool, owner.store_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Store {}", owner.store_id)))?;

    Ok(Json(store))
}

/// 公开门户视图 (店铺 + 商品)
#[derive(Serialize)]
pub struct StorefrontView {
    pub store: Store,
    pub products: Vec<Product>,
}

/// GET /api/stores/{id} - 公开店铺门户
pub async fn storefront(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<StorefrontView>> {
    let store = store::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Store {}", id)))?;

    let products = product::find_by_store(&state.pool, id).await?;

    Ok(Json(StorefrontView { store, products }))
}
