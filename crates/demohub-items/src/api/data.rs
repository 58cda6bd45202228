use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use demohub_core::model::{Item, NewItem};

use crate::api::ApiError;
use crate::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct Created {
    pub message: &'static str,
    pub data: Item,
}

#[derive(Debug, Serialize)]
pub struct Listing {
    pub count: usize,
    pub data: Vec<Item>,
}

#[derive(Debug, Serialize)]
pub struct Message {
    pub message: &'static str,
}

pub async fn create(
    State(state): State<AppState>,
    Json(new): Json<NewItem>,
) -> Result<Json<Created>, ApiError> {
    let item = state.store().create(new).await?;
    Ok(Json(Created {
        message: "Data created successfully",
        data: item,
    }))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Listing>, ApiError> {
    let data = state.store().list().await?;
    Ok(Json(Listing { count: data.len(), data }))
}

pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Item>, ApiError> {
    Ok(Json(state.store().get(id).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Message>, ApiError> {
    state.store().delete(id).await?;
    Ok(Json(Message {
        message: "Data deleted successfully",
    }))
}
