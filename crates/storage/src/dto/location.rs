use serde::{Deserialize, Serialize};
use validator::Validate;

/// A custom camera/observer location added to one race on top of the
/// standard set inherited from the race type template.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateLocationRequest {
    pub race_id: i64,

    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[serde(default)]
    pub position: i64,
}
