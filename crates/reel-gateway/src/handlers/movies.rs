use crate::error::{AppError, Result};
use crate::model::{ListMoviesQuery, MessageResponse};
use crate::state::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use reel_core::{Movie, MovieId};
use serde_json::Value;

pub async fn list_movies_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<ListMoviesQuery>, QueryRejection>,
) -> Result<Json<Vec<Movie>>> {
    let Query(query) = query?;
    let movies = state.catalog().list(query.genre.as_deref()).await?;
    Ok(Json(movies))
}

pub async fn get_movie_handler(
    id: std::result::Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<Movie>> {
    let Path(id) = id?;
    let movie = state.catalog().get(&MovieId::from(id)).await?;
    Ok(Json(movie))
}

pub async fn create_movie_handler(
    State(state): State<AppState>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Movie>)> {
    let Json(candidate) = body?;
    let movie = state.catalog().create(&candidate).await?;
    Ok((StatusCode::CREATED, Json(movie)))
}

pub async fn update_movie_handler(
    id: std::result::Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<Movie>> {
    let Path(id) = id?;
    let Json(candidate) = body?;
    let movie = state
        .catalog()
        .update(&MovieId::from(id), &candidate)
        .await
        .map_err(AppError::from_patch)?;
    Ok(Json(movie))
}

pub async fn delete_movie_handler(
    id: std::result::Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>> {
    let Path(id) = id?;
    state.catalog().delete(&MovieId::from(id)).await?;
    Ok(Json(MessageResponse::new("Movie deleted")))
}
