//! Landing endpoint describing the API.

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(welcome))
}

async fn welcome(State(state): State<AppState>) -> impl IntoResponse {
    Json(welcome_payload(state.public_url()))
}

fn welcome_payload(base_url: &str) -> Value {
    json!({
        "message": "Bienvenido a la API de Análisis de Actores de Cine",
        "description": "Esta API permite obtener información sobre el rendimiento financiero de actores en películas. Puedes consultar el retorno total y promedio de un actor en base a sus películas.",
        "endpoints": {
            "/actor/{actor_name}": {
                "description": "Obtiene el rendimiento financiero del actor especificado.",
                "example": format!("{base_url}/actor/Leonardo%20DiCaprio"),
                "parameters": {
                    "actor_name": "El nombre del actor que deseas consultar. Asegúrate de reemplazar los espacios con '%20'."
                }
            },
            "/actores": {
                "description": "Lista todos los actores disponibles en la base de datos.",
                "example": format!("{base_url}/actores")
            }
        },
        "notes": "Para obtener resultados, asegúrate de que el nombre del actor esté correctamente escrito."
    })
}
