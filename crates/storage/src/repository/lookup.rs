use std::collections::HashMap;

use crate::error::Result;

/// Resolves entity ids to display names.
///
/// Athletes reference their category and training center by id only. Anything
/// that needs the human-readable name goes through this trait instead of
/// joining the tables directly, so the referenced entities stay independent
/// from the athlete rows that point at them.
#[async_trait::async_trait]
pub trait NameLookup: Send + Sync {
    /// Names for every id that exists; unknown ids are absent from the map.
    async fn names_by_ids(&self, ids: &[i32]) -> Result<HashMap<i32, String>>;

    async fn name_of(&self, id: i32) -> Result<Option<String>> {
        let mut names = self.names_by_ids(&[id]).await?;
        Ok(names.remove(&id))
    }
}
