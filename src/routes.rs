use actix_web::{Scope, web};

use crate::handlers::{
    general::{get_info, health_check},
    similarity::similarity,
};

pub fn configure_routes() -> Scope {
    web::scope("/api")
        .route("/health", web::get().to(health_check))
        .route("/info", web::get().to(get_info))
        .route("/similarity", web::post().to(similarity))
}
