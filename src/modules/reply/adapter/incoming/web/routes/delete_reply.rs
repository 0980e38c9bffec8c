use actix_web::{delete, web, HttpResponse, Responder};

use crate::{
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    reply::application::ports::incoming::use_cases::DeleteReplyError, shared::api::ApiResponse,
    AppState,
};

#[delete("/threads/{thread_id}/comments/{comment_id}/replies/{reply_id}")]
pub async fn delete_reply_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<(String, String, String)>,
) -> impl Responder {
    let (thread_id, comment_id, reply_id) = path.into_inner();

    match data
        .reply
        .delete
        .execute(user.user_id, &thread_id, &comment_id, &reply_id)
        .await
    {
        Ok(()) => ApiResponse::ok(),
        Err(err) => map_delete_reply_error(err),
    }
}

fn map_delete_reply_error(err: DeleteReplyError) -> HttpResponse {
    match err {
        DeleteReplyError::RepositoryError(msg) => {
            tracing::error!("Failed to delete reply: {}", msg);
            ApiResponse::internal_error()
        }
        other => ApiResponse::from_error_code(other.code()),
    }
}
