use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use userd_core::UserId;
use userd_infra::user_store::UserStore;

use crate::app::dto::{CreateUserRequest, UpdateUserRequest};
use crate::app::errors::ApiError;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_users).post(create_user).put(update_user))
        .route("/:id", get(get_user).delete(delete_user))
}

pub async fn list_users(
    Extension(store): Extension<Arc<dyn UserStore>>,
) -> Result<impl IntoResponse, ApiError> {
    let users = store.find_all().await?;
    Ok((StatusCode::OK, Json(users)))
}

pub async fn get_user(
    Extension(store): Extension<Arc<dyn UserStore>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: UserId = id.parse()?;
    let user = store.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(user)))
}

pub async fn create_user(
    Extension(store): Extension<Arc<dyn UserStore>>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload?;
    let user = store.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn update_user(
    Extension(store): Extension<Arc<dyn UserStore>>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload?;
    let user = store.update(req.into()).await?;
    Ok((StatusCode::OK, Json(user)))
}

pub async fn delete_user(
    Extension(store): Extension<Arc<dyn UserStore>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: UserId = id.parse()?;
    store.delete(id).await?;
    Ok((StatusCode::OK, Json(serde_json::json!({ "delete": id }))))
}
