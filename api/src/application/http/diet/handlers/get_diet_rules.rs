use mealplan_core::domain::diet::{Diet, DietRule, diet_rules};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::response::Response;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DietRuleView {
    pub diet: Diet,
    pub name: String,
    pub keywords: Vec<String>,
    pub forbidden_ingredients: Vec<String>,
}

impl From<&DietRule> for DietRuleView {
    fn from(rule: &DietRule) -> Self {
        Self {
            diet: rule.diet,
            name: rule.diet.canonical_name().to_string(),
            keywords: rule.keywords.iter().map(|k| k.to_string()).collect(),
            forbidden_ingredients: rule.forbidden.iter().map(|f| f.to_string()).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetDietRulesResponse {
    pub data: Vec<DietRuleView>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "diet",
    summary = "List diet rules",
    description = "Lists every recognised diet with its trigger keywords and forbidden ingredient tokens.",
    responses(
        (status = 200, body = GetDietRulesResponse)
    )
)]
pub async fn get_diet_rules() -> Response<GetDietRulesResponse> {
    Response::OK(GetDietRulesResponse {
        data: diet_rules().iter().map(DietRuleView::from).collect(),
    })
}
