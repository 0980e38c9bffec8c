use actix_web::{get, web, HttpResponse, Responder};

use crate::{
    shared::api::ApiResponse,
    thread::application::ports::incoming::use_cases::GetThreadDetailError, AppState,
};

#[get("/threads/{thread_id}")]
pub async fn get_thread_detail_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let thread_id = path.into_inner();

    match data.thread.get_detail.execute(&thread_id).await {
        Ok(view) => ApiResponse::success(view),
        Err(err) => map_get_thread_detail_error(&thread_id, err),
    }
}

fn map_get_thread_detail_error(thread_id: &str, err: GetThreadDetailError) -> HttpResponse {
    match err {
        GetThreadDetailError::InvalidDetail(e) => {
            tracing::error!(thread_id = %thread_id, "Thread detail could not be assembled: {}", e);
            ApiResponse::internal_error()
        }
        GetThreadDetailError::RepositoryError(msg) => {
            tracing::error!(thread_id = %thread_id, "Failed to load thread detail: {}", msg);
            ApiResponse::internal_error()
        }
        other => ApiResponse::from_error_code(other.code()),
    }
}
