use serde::Deserialize;
use utoipa::IntoParams;

/// Limit/offset paging for listing endpoints.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListParams {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    100
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            offset: 0,
        }
    }
}
