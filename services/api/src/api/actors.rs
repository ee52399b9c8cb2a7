//! Actor return endpoints.
//!
//! `GET /actor/{name}` computes the return summary for one actor and
//! `GET /actores` lists the actor directory.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use marquee_returns::ActorReturnSummary;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/actor/{actor_name}", get(get_actor_return))
        .route("/actores", get(list_actors))
}

// =============================================================================
// Response Types
// =============================================================================

#[derive(Debug, Serialize)]
pub struct ActorReturnResponse {
    pub actor: String,
    #[serde(rename = "cantidad_de_peliculas_en_que_actuó")]
    pub movie_count: usize,
    #[serde(rename = "cantidad_de_peliculas_con_return_0")]
    pub zero_return_count: usize,
    #[serde(rename = "return_total")]
    pub total_return: String,
    #[serde(rename = "return_promedio")]
    pub average_return: String,
    #[serde(rename = "return_promedio_contando_zeros")]
    pub average_return_with_zeros: String,
}

impl From<ActorReturnSummary> for ActorReturnResponse {
    fn from(summary: ActorReturnSummary) -> Self {
        Self {
            actor: summary.actor,
            movie_count: summary.total_appearances,
            zero_return_count: summary.zero_return_count,
            total_return: summary.total_return,
            average_return: summary.average_return,
            average_return_with_zeros: summary.average_return_with_zeros,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListActorsResponse {
    pub actores: Vec<String>,
}

// =============================================================================
// Handlers
// =============================================================================

async fn get_actor_return(
    State(state): State<AppState>,
    Path(actor_name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let summary = state.calculator().compute(&actor_name).map_err(|e| {
        tracing::debug!(error = %e, actor = %actor_name, "Actor return lookup rejected");
        ApiError::from(e)
    })?;

    Ok(Json(ActorReturnResponse::from(summary)))
}

async fn list_actors(State(state): State<AppState>) -> impl IntoResponse {
    Json(ListActorsResponse {
        actores: state.store().all_actor_names(),
    })
}
