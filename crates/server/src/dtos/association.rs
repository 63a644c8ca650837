use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Full replacement list of lookup ids; duplicates are ignored
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct IdsRequest {
    pub ids: Vec<i32>,
}
