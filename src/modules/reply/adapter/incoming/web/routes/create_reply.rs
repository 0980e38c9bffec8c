use actix_web::{post, web, HttpResponse, Responder};
use serde::Serialize;

use crate::{
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    reply::application::{domain::entities::AddedReply, ports::incoming::use_cases::AddReplyError},
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AddedReplyResponse {
    added_reply: AddedReply,
}

#[post("/threads/{thread_id}/comments/{comment_id}/replies")]
pub async fn create_reply_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<(String, String)>,
    payload: web::Json<serde_json::Value>,
) -> impl Responder {
    let (thread_id, comment_id) = path.into_inner();

    match data
        .reply
        .add
        .execute(user.user_id, &thread_id, &comment_id, payload.into_inner())
        .await
    {
        Ok(added_reply) => ApiResponse::created(AddedReplyResponse { added_reply }),
        Err(err) => map_add_reply_error(err),
    }
}

fn map_add_reply_error(err: AddReplyError) -> HttpResponse {
    match err {
        AddReplyError::RepositoryError(msg) => {
            tracing::error!("Failed to add reply: {}", msg);
            ApiResponse::internal_error()
        }
        other => ApiResponse::from_error_code(other.code()),
    }
}
