use actix_web::{HttpResponse, Result, web};
use log::error;
use tokio::sync::RwLock;

use crate::{
    api_models::similarity::{ErrorResponse, SimilarityRequest, SimilarityResponse},
    app_state::AppState,
};

// Sync endpoint
pub async fn similarity(
    data: web::Data<RwLock<AppState>>,
    request: web::Json<SimilarityRequest>,
) -> Result<HttpResponse> {
    let user_input: String = match &request.user_input {
        Some(text) => text.clone(),
        None => {
            return Ok(
                HttpResponse::BadRequest().json(ErrorResponse::new("No input provided"))
            );
        }
    };

    // Pull the capability out of AppState without holding the lock
    // during the query
    let search = { data.read().await.search.clone() };

    match search.get_similar_verses(&user_input).await {
        Ok(results) => {
            Ok(HttpResponse::Ok().json(SimilarityResponse {
                user_input,
                results,
            }))
        }
        Err(error) => {
            error!("Failed when trying searching: {}", error);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Similarity search failed")))
        }
    }
}
