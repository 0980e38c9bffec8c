use actix_web::{post, web, HttpResponse, Responder};
use serde::Serialize;

use crate::{
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::ApiResponse,
    thread::application::{
        domain::entities::AddedThread, ports::incoming::use_cases::AddThreadError,
    },
    AppState,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AddedThreadResponse {
    added_thread: AddedThread,
}

#[post("/threads")]
pub async fn create_thread_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<serde_json::Value>,
) -> impl Responder {
    match data
        .thread
        .add
        .execute(user.user_id, payload.into_inner())
        .await
    {
        Ok(added_thread) => ApiResponse::created(AddedThreadResponse { added_thread }),
        Err(err) => map_add_thread_error(err),
    }
}

fn map_add_thread_error(err: AddThreadError) -> HttpResponse {
    match err {
        AddThreadError::RepositoryError(msg) => {
            tracing::error!("Failed to add thread: {}", msg);
            ApiResponse::internal_error()
        }
        other => ApiResponse::from_error_code(other.code()),
    }
}
