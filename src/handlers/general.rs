use actix_web::{HttpResponse, Result, web};
use tokio::sync::RwLock;

use crate::{
    api_models::general::{HealthResponse, InfoResponse},
    app_state::AppState,
};

pub async fn health_check() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    }))
}

pub async fn get_info(data: web::Data<RwLock<AppState>>) -> Result<HttpResponse> {
    let server = data.read().await.config.server.clone();

    Ok(HttpResponse::Ok().json(InfoResponse {
        service: "VerseFinder".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        bind_address: format!("{}:{}", server.host, server.port),
    }))
}
