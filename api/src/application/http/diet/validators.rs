use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyRestrictionsValidator {
    #[serde(default)]
    #[validate(length(max = 500, message = "dietaryRestrictions is too long"))]
    pub dietary_restrictions: String,
}
