//! Seller resource handlers: create, list, get-with-books, update, delete.
//!
//! Each handler is one transactional unit: it begins a transaction on the
//! pool, hands the connection to the service layer, and commits on the
//! success path. Early returns (absent id, store failure) drop the
//! transaction, which rolls it back. Request bodies arrive as already
//! validated schemas; the `Json` extractor answers 422 on its own.

use crate::error::AppError;
use crate::schemas::{
    RegisterSeller, ReturnedAllSeller, ReturnedSeller, ReturnedSellerWithBooks, UpdateSeller,
};
use crate::service::SellerService;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

/// POST `/api/v1/seller/`: 201 with the projected seller; the generated id
/// rides along, the password never does.
pub async fn create_seller(
    State(state): State<AppState>,
    Json(new_seller): Json<RegisterSeller>,
) -> Result<(StatusCode, Json<ReturnedSeller>), AppError> {
    let mut tx = state.pool.begin().await?;
    let seller = SellerService::insert(&mut tx, &new_seller).await?;
    tx.commit().await?;
    Ok((StatusCode::CREATED, Json(seller.into())))
}

/// GET `/api/v1/seller/`: 200 with every seller ascending by id; an empty
/// store is an empty list, not an error.
pub async fn get_all_sellers(
    State(state): State<AppState>,
) -> Result<Json<ReturnedAllSeller>, AppError> {
    let mut tx = state.pool.begin().await?;
    let sellers = SellerService::list(&mut tx).await?;
    tx.commit().await?;
    Ok(Json(ReturnedAllSeller {
        sellers: sellers.into_iter().map(ReturnedSeller::from).collect(),
    }))
}

/// GET `/api/v1/seller/{seller_id}`: 200 with the seller and its (possibly
/// empty) books; 404 with an empty body when the id is absent.
pub async fn get_seller(
    State(state): State<AppState>,
    Path(seller_id): Path<i64>,
) -> Result<Json<ReturnedSellerWithBooks>, AppError> {
    let mut tx = state.pool.begin().await?;
    let found = SellerService::get_with_books(&mut tx, seller_id).await?;
    tx.commit().await?;

    let seller = found.ok_or(AppError::NotFound(seller_id))?;
    Ok(Json(seller.into()))
}

/// PUT `/api/v1/seller/{seller_id}`: overwrites exactly the three mutable
/// fields; the path id is authoritative and `password` stays as stored.
/// 404 when absent.
pub async fn update_seller(
    State(state): State<AppState>,
    Path(seller_id): Path<i64>,
    Json(changes): Json<UpdateSeller>,
) -> Result<Json<ReturnedSeller>, AppError> {
    let mut tx = state.pool.begin().await?;
    let updated = SellerService::update(&mut tx, seller_id, &changes)
        .await?
        .ok_or(AppError::NotFound(seller_id))?;
    tx.commit().await?;
    Ok(Json(updated.into()))
}

/// DELETE `/api/v1/seller/{seller_id}`: 204 with no body on the first
/// delete, 404 once the row is gone.
pub async fn delete_seller(
    State(state): State<AppState>,
    Path(seller_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let mut tx = state.pool.begin().await?;
    if !SellerService::delete(&mut tx, seller_id).await? {
        return Err(AppError::NotFound(seller_id));
    }
    tx.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}
