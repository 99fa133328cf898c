use super::handlers::classify_restrictions::{__path_classify_restrictions, classify_restrictions};
use super::handlers::get_diet_rules::{__path_get_diet_rules, get_diet_rules};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_diet_rules, classify_restrictions))]
pub struct DietApiDoc;

pub fn diet_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/diets", state.args.server.root_path),
            get(get_diet_rules),
        )
        .route(
            &format!("{}/diets/classify", state.args.server.root_path),
            post(classify_restrictions),
        )
}
