use actix_web::{delete, web, HttpResponse, Responder};

use crate::{
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    comment::application::ports::incoming::use_cases::DeleteCommentError,
    shared::api::ApiResponse, AppState,
};

#[delete("/threads/{thread_id}/comments/{comment_id}")]
pub async fn delete_comment_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (thread_id, comment_id) = path.into_inner();

    match data
        .comment
        .delete
        .execute(user.user_id, &thread_id, &comment_id)
        .await
    {
        Ok(()) => ApiResponse::ok(),
        Err(err) => map_delete_comment_error(err),
    }
}

fn map_delete_comment_error(err: DeleteCommentError) -> HttpResponse {
    match err {
        DeleteCommentError::RepositoryError(msg) => {
            tracing::error!("Failed to delete comment: {}", msg);
            ApiResponse::internal_error()
        }
        other => ApiResponse::from_error_code(other.code()),
    }
}
