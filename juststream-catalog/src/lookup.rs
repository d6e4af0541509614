//! Single item lookups of the watch page.

use std::cell::Cell;

use juststream_api::api::content::id::get as by_id;

use crate::{Result, service::ContentService};

/// Answers only the most recent lookup. An older lookup that resolves after a newer one was
/// issued, because the id changed or a retry was requested, yields `None`.
#[derive(Debug, Default)]
pub struct LatestLookup {
    issued: Cell<u64>,
}

impl LatestLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn fetch<S: ContentService>(
        &self,
        service: &S,
        id: &str,
    ) -> Option<Result<by_id::Response>> {
        let generation = self.issued.get() + 1;
        self.issued.set(generation);

        let result = service
            .fetch_content_by_id(&by_id::Query { id: id.to_string() })
            .await;

        if self.issued.get() != generation {
            log::debug!("Dropping stale lookup of {id}");
            return None;
        }
        Some(result)
    }
}
