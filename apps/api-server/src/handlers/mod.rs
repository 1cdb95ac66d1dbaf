//! HTTP handlers and route configuration.

mod comments;
mod health;
mod posts;
mod users;

use actix_web::{error, web};

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                .service(
                    web::scope("/posts")
                        .service(
                            web::resource("")
                                .route(web::get().to(posts::list_posts))
                                .route(web::post().to(posts::create_post)),
                        )
                        // Registered before "/{id}" so it is not taken for an id.
                        .route("/trending", web::get().to(posts::trending))
                        .service(
                            web::resource("/{id}")
                                .route(web::get().to(posts::get_post))
                                .route(web::patch().to(posts::update_post))
                                .route(web::delete().to(posts::delete_post)),
                        )
                        .route("/{id}/like", web::patch().to(posts::toggle_like))
                        .route("/{id}/reactions", web::post().to(posts::add_reaction))
                        .route(
                            "/{id}/reactions/{kind}",
                            web::delete().to(posts::remove_reaction),
                        )
                        .route("/{id}/comments", web::get().to(posts::post_comments)),
                )
                .service(
                    web::scope("/comments")
                        .service(
                            web::resource("")
                                .route(web::get().to(comments::list_comments))
                                .route(web::post().to(comments::create_comment)),
                        )
                        .service(
                            web::resource("/{id}")
                                .route(web::get().to(comments::get_comment))
                                .route(web::patch().to(comments::update_comment))
                                .route(web::delete().to(comments::delete_comment)),
                        ),
                )
                .service(
                    web::scope("/users")
                        .service(
                            web::resource("")
                                .route(web::get().to(users::list_users))
                                .route(web::post().to(users::create_user)),
                        )
                        .service(
                            web::resource("/{id}")
                                .route(web::get().to(users::get_user))
                                .route(web::patch().to(users::update_user))
                                .route(web::delete().to(users::delete_user)),
                        )
                        .route("/{id}/posts", web::get().to(users::user_posts)),
                ),
        );
}

/// Malformed JSON bodies become 400 problem documents.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        tracing::debug!(error = %err, "Rejected request body");
        error::Error::from(AppError::BadRequest(err.to_string()))
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        error::Error::from(AppError::BadRequest(err.to_string()))
    })
}
