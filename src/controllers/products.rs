//! Catalog API under `/api/products`.

use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::http::{AppError, AppState};
use crate::params::ParamError;
use crate::shaper::SerializedBody;

pub async fn list(State(state): State<AppState>) -> Result<Response, AppError> {
    let products = state.products.find_all();
    state.shaper().render(SerializedBody::record(products)?)
}

pub async fn by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, AppError> {
    let id: i64 = raw_id
        .parse()
        .map_err(|_| ParamError::TypeMismatch { name: "id", value: raw_id.clone() })?;
    let product = state
        .products
        .find_by_id(id)
        .ok_or_else(|| AppError::not_found("Product", id))?;
    state.shaper().render(SerializedBody::record(product)?)
}
