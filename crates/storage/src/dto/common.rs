use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_LIMIT: u32 = 50;
pub const MAX_LIMIT: u32 = 100;

/// `?limit=&offset=` paging parameters
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LimitOffsetParams {
    /// Page size
    #[serde(default = "default_limit")]
    #[param(minimum = 1, maximum = 100)]
    pub limit: u32,
    /// Number of items to skip
    #[serde(default)]
    pub offset: u32,
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

impl Default for LimitOffsetParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl LimitOffsetParams {
    pub fn validate(&self) -> Result<(), String> {
        if self.limit < 1 || self.limit > MAX_LIMIT {
            return Err(format!("limit must be between 1 and {}", MAX_LIMIT));
        }
        Ok(())
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.limit)
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.offset)
    }
}

/// A bounded slice of a result sequence plus what a client needs to request
/// the neighbouring pages.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LimitOffsetPage<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub limit: u32,
    pub offset: u32,
}

impl<T> LimitOffsetPage<T> {
    pub fn new(items: Vec<T>, params: LimitOffsetParams, total: i64) -> Self {
        Self {
            items,
            total,
            limit: params.limit,
            offset: params.offset,
        }
    }
}
