pub mod modules;
pub use modules::auth;
pub use modules::comment;
pub use modules::reply;
pub use modules::thread;
pub mod config;
pub mod health;
pub mod shared;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::UserRepositoryPostgres;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::comment::adapter::outgoing::CommentRepositoryPostgres;
use crate::comment::application::comment_use_cases::CommentUseCases;
use crate::comment::application::services::{AddCommentService, DeleteCommentService};
use crate::config::ServerConfig;
use crate::reply::adapter::outgoing::ReplyRepositoryPostgres;
use crate::reply::application::reply_use_cases::ReplyUseCases;
use crate::reply::application::services::{AddReplyService, DeleteReplyService};
use crate::shared::api::custom_json_config;
use crate::shared::id_generator::{IdGenerator, UuidIdGenerator};
use crate::thread::adapter::outgoing::ThreadRepositoryPostgres;
use crate::thread::application::services::{AddThreadService, GetThreadDetailService};
use crate::thread::application::thread_use_cases::ThreadUseCases;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub thread: ThreadUseCases,
    pub comment: CommentUseCases,
    pub reply: ReplyUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let server_config = ServerConfig::from_env()?;
    let jwt_config = JwtConfig::from_env()?;
    let server_url = server_config.server_url();

    let mut opt = ConnectOptions::new(server_config.database_url.clone());
    opt.max_connections(server_config.db_max_connections)
        .min_connections(server_config.db_min_connections)
        .connect_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await?;
    info!("Database connection established");
    let db_arc = Arc::new(conn);

    let id_generator: Arc<dyn IdGenerator> = Arc::new(UuidIdGenerator);
    let thread_repo = ThreadRepositoryPostgres::new(Arc::clone(&db_arc), Arc::clone(&id_generator));
    let comment_repo =
        CommentRepositoryPostgres::new(Arc::clone(&db_arc), Arc::clone(&id_generator));
    let reply_repo = ReplyRepositoryPostgres::new(Arc::clone(&db_arc), Arc::clone(&id_generator));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));

    let state = AppState {
        thread: ThreadUseCases {
            add: Arc::new(AddThreadService::new(thread_repo.clone())),
            get_detail: Arc::new(GetThreadDetailService::new(
                thread_repo.clone(),
                comment_repo.clone(),
                reply_repo.clone(),
                user_repo,
            )),
        },
        comment: CommentUseCases {
            add: Arc::new(AddCommentService::new(
                comment_repo.clone(),
                thread_repo.clone(),
            )),
            delete: Arc::new(DeleteCommentService::new(
                comment_repo.clone(),
                thread_repo.clone(),
            )),
        },
        reply: ReplyUseCases {
            add: Arc::new(AddReplyService::new(
                reply_repo.clone(),
                comment_repo.clone(),
                thread_repo.clone(),
            )),
            delete: Arc::new(DeleteReplyService::new(reply_repo, comment_repo, thread_repo)),
        },
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(jwt_config));

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Threads
    cfg.service(crate::thread::adapter::incoming::web::routes::create_thread_handler);
    cfg.service(crate::thread::adapter::incoming::web::routes::get_thread_detail_handler);
    // Comments
    cfg.service(crate::comment::adapter::incoming::web::routes::create_comment_handler);
    cfg.service(crate::comment::adapter::incoming::web::routes::delete_comment_handler);
    // Replies
    cfg.service(crate::reply::adapter::incoming::web::routes::create_reply_handler);
    cfg.service(crate::reply::adapter::incoming::web::routes::delete_reply_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
