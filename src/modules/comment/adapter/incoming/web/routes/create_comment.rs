use actix_web::{post, web, HttpResponse, Responder};
use serde::Serialize;

use crate::{
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    comment::application::{
        domain::entities::AddedComment, ports::incoming::use_cases::AddCommentError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AddedCommentResponse {
    added_comment: AddedComment,
}

#[post("/threads/{thread_id}/comments")]
pub async fn create_comment_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<serde_json::Value>,
) -> impl Responder {
    let thread_id = path.into_inner();

    match data
        .comment
        .add
        .execute(user.user_id, &thread_id, payload.into_inner())
        .await
    {
        Ok(added_comment) => ApiResponse::created(AddedCommentResponse { added_comment }),
        Err(err) => map_add_comment_error(err),
    }
}

fn map_add_comment_error(err: AddCommentError) -> HttpResponse {
    match err {
        AddCommentError::RepositoryError(msg) => {
            tracing::error!("Failed to add comment: {}", msg);
            ApiResponse::internal_error()
        }
        other => ApiResponse::from_error_code(other.code()),
    }
}
