use axum::{Json, extract::State};
use shared::response::MessageResponse;

use crate::core::ServerState;
use crate::db::seed;
use crate::utils::AppResult;

pub async fn seed_db(State(state): State<ServerState>) -> AppResult<Json<MessageResponse>> {
    seed::seed(state.pool()).await?;
    Ok(Json(MessageResponse::new("Database seeded!")))
}
