use std::{cell::RefCell, ops::Range, time::Duration};

use juststream_api::api::content;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{CatalogConfig, Error, Result, generator::Catalog};

/// Source of the simulated network delay.
#[async_trait::async_trait(?Send)]
pub trait Latency {
    async fn sleep(&self, duration: Duration);
}

/// Resolves immediately. Used where no delay should be simulated.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoLatency;

#[async_trait::async_trait(?Send)]
impl Latency for NoLatency {
    async fn sleep(&self, _duration: Duration) {}
}

/// The content endpoints the site consumes.
#[async_trait::async_trait(?Send)]
pub trait ContentService {
    /// Obtains one page of the full catalog
    async fn fetch_content(&self, query: &content::get::Query) -> Result<content::get::Response>;

    /// Obtains one page of the catalog entries containing the requested genre
    async fn fetch_content_by_category(
        &self,
        query: &content::category::get::Query,
    ) -> Result<content::category::get::Response>;

    /// Looks up a single catalog entry. Unknown ids are not an error.
    async fn fetch_content_by_id(
        &self,
        query: &content::id::get::Query,
    ) -> Result<content::id::get::Response>;
}

/// In-process content service backed by a generated catalog.
///
/// The catalog is seeded once per instance, so all endpoints of one instance describe the same
/// catalog. Requests for any page after the first fail with [`Error::Transient`] with the
/// configured probability.
pub struct MockContentService<L> {
    config: CatalogConfig,
    catalog: Catalog,
    latency: L,
    failures: RefCell<StdRng>,
}

impl<L: Latency> MockContentService<L> {
    pub fn new(config: CatalogConfig, latency: L) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        log::debug!(
            "Generating mock catalog of {} items with seed {seed}",
            config.total_items
        );

        Self {
            catalog: Catalog::new(seed, config.total_items),
            failures: RefCell::new(StdRng::seed_from_u64(seed.rotate_left(17))),
            latency,
            config,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn page_range(&self, page: u32, total: usize) -> Result<Range<usize>> {
        if page == 0 {
            return Err(Error::InvalidPage(page));
        }

        let offset = (page as usize - 1).saturating_mul(self.config.page_size);
        let start = offset.min(total);
        let end = offset.saturating_add(self.config.page_size).min(total);
        Ok(start..end)
    }

    fn simulate_failure(&self, page: u32) -> Result<()> {
        if page <= 1 {
            return Ok(());
        }

        let roll: f64 = self.failures.borrow_mut().r#gen();
        if roll < self.config.failure_rate {
            log::warn!("Injecting transient failure for page {page}");
            return Err(Error::Transient);
        }
        Ok(())
    }
}

#[async_trait::async_trait(?Send)]
impl<L: Latency> ContentService for MockContentService<L> {
    async fn fetch_content(&self, query: &content::get::Query) -> Result<content::get::Response> {
        self.latency.sleep(self.config.latency).await;

        let range = self.page_range(query.page, self.catalog.len())?;
        self.simulate_failure(query.page)?;

        let total = self.catalog.len();
        Ok(content::get::Response {
            has_more: range.end < total,
            items: self.catalog.slice(range.start, range.len()),
            page: query.page,
            total,
        })
    }

    async fn fetch_content_by_category(
        &self,
        query: &content::category::get::Query,
    ) -> Result<content::category::get::Response> {
        self.latency.sleep(self.config.latency).await;

        let filtered: Vec<_> = self
            .catalog
            .iter()
            .filter(|item| item.has_genre(&query.category))
            .collect();

        let range = self.page_range(query.page, filtered.len())?;
        self.simulate_failure(query.page)?;

        let total = filtered.len();
        Ok(content::category::get::Response {
            has_more: range.end < total,
            items: filtered[range].to_vec(),
            page: query.page,
            total,
        })
    }

    async fn fetch_content_by_id(
        &self,
        query: &content::id::get::Query,
    ) -> Result<content::id::get::Response> {
        self.latency.sleep(self.config.lookup_latency).await;

        let item = self.catalog.find(&query.id);
        if item.is_none() {
            log::debug!("Content {} not found in catalog", query.id);
        }
        Ok(content::id::get::Response { item })
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;

    use googletest::prelude::*;
    use std::{cell::Cell, collections::HashSet};

    /// Records requested delays instead of waiting.
    #[derive(Default)]
    pub(crate) struct RecordingLatency {
        pub total: Cell<Duration>,
    }

    #[async_trait::async_trait(?Send)]
    impl Latency for &RecordingLatency {
        async fn sleep(&self, duration: Duration) {
            self.total.set(self.total.get() + duration);
        }
    }

    /// Yields to the executor a decreasing number of times per call, so the first request
    /// issued is the last one to resolve.
    pub(crate) struct CountdownLatency {
        pub yields: Cell<u32>,
    }

    #[async_trait::async_trait(?Send)]
    impl Latency for CountdownLatency {
        async fn sleep(&self, _duration: Duration) {
            let yields = self.yields.get();
            self.yields.set(yields.saturating_sub(1));
            for _ in 0..yields {
                tokio::task::yield_now().await;
            }
        }
    }

    pub(crate) fn service_with(failure_rate: f64) -> MockContentService<NoLatency> {
        let config = CatalogConfig {
            failure_rate,
            seed: Some(2024),
            ..Default::default()
        };
        MockContentService::new(config, NoLatency)
    }

    fn page(page: u32) -> content::get::Query {
        content::get::Query { page }
    }

    fn category(category: &str, page: u32) -> content::category::get::Query {
        content::category::get::Query {
            category: category.to_string(),
            page,
        }
    }

    #[tokio::test]
    #[googletest::test]
    async fn test_pages_hold_at_most_page_size_items() -> googletest::Result<()> {
        let service = service_with(0.0);

        for p in 1..=12 {
            let response = service.fetch_content(&page(p)).await.or_fail()?;
            let offset = (p as usize - 1) * 20;

            expect_that!(response.items.len(), le(20));
            expect_that!(response.page, eq(p));
            expect_that!(response.total, eq(200));
            expect_that!(
                response.has_more,
                eq(offset + response.items.len() < 200)
            );
        }
        Ok(())
    }

    #[tokio::test]
    #[googletest::test]
    async fn test_last_page_has_no_more() -> googletest::Result<()> {
        let service = service_with(0.0);

        let last = service.fetch_content(&page(10)).await.or_fail()?;
        expect_that!(last.items.len(), eq(20));
        expect_false!(last.has_more);
        expect_that!(
            last.items.last(),
            some(matches_pattern!(juststream_api::ContentItem {
                id: eq("content-200"),
                ..
            }))
        );

        let past_end = service.fetch_content(&page(11)).await.or_fail()?;
        expect_that!(past_end.items, is_empty());
        expect_false!(past_end.has_more);
        Ok(())
    }

    #[tokio::test]
    #[googletest::test]
    async fn test_short_last_page_and_pages_far_past_the_end() -> googletest::Result<()> {
        let config = CatalogConfig {
            page_size: 7,
            total_items: 20,
            failure_rate: 0.0,
            seed: Some(3),
            ..Default::default()
        };
        let service = MockContentService::new(config, NoLatency);

        let last = service.fetch_content(&page(3)).await.or_fail()?;
        expect_that!(last.items.len(), eq(6));
        expect_false!(last.has_more);

        let far = service.fetch_content(&page(u32::MAX)).await.or_fail()?;
        expect_that!(far.items, is_empty());
        expect_false!(far.has_more);

        let far_filtered = service
            .fetch_content_by_category(&category("Drama", u32::MAX))
            .await
            .or_fail()?;
        expect_that!(far_filtered.items, is_empty());
        expect_false!(far_filtered.has_more);
        Ok(())
    }

    #[tokio::test]
    #[googletest::test]
    async fn test_empty_catalog_has_no_more() -> googletest::Result<()> {
        let config = CatalogConfig {
            total_items: 0,
            seed: Some(3),
            ..Default::default()
        };
        let service = MockContentService::new(config, NoLatency);

        let response = service.fetch_content(&page(1)).await.or_fail()?;
        expect_that!(response.items, is_empty());
        expect_false!(response.has_more);
        expect_that!(response.total, eq(0));
        Ok(())
    }

    #[tokio::test]
    #[googletest::test]
    async fn test_consecutive_pages_do_not_overlap() -> googletest::Result<()> {
        let service = service_with(0.0);

        let first = service.fetch_content(&page(1)).await.or_fail()?;
        let second = service.fetch_content(&page(2)).await.or_fail()?;

        let ids: HashSet<_> = first.items.iter().map(|i| i.id.clone()).collect();
        expect_that!(ids.len(), eq(20));
        expect_false!(second.items.iter().any(|i| ids.contains(&i.id)));
        Ok(())
    }

    #[tokio::test]
    #[googletest::test]
    async fn test_page_zero_is_invalid() {
        let service = service_with(0.0);
        expect_that!(
            service.fetch_content(&page(0)).await,
            err(eq(&Error::InvalidPage(0)))
        );
    }

    #[tokio::test]
    #[googletest::test]
    async fn test_first_page_never_fails() -> googletest::Result<()> {
        let service = service_with(1.0);

        for _ in 0..5 {
            service.fetch_content(&page(1)).await.or_fail()?;
            service
                .fetch_content_by_category(&category("Drama", 1))
                .await
                .or_fail()?;
        }
        Ok(())
    }

    #[tokio::test]
    #[googletest::test]
    async fn test_later_pages_fail_when_injected() {
        let service = service_with(1.0);

        expect_that!(
            service.fetch_content(&page(2)).await,
            err(eq(&Error::Transient))
        );
        expect_that!(
            service.fetch_content_by_category(&category("Drama", 2)).await,
            err(eq(&Error::Transient))
        );
    }

    #[tokio::test]
    #[googletest::test]
    async fn test_category_pages_only_contain_genre() -> googletest::Result<()> {
        let service = service_with(0.0);
        let expected: Vec<_> = service
            .catalog()
            .iter()
            .filter(|i| i.has_genre("Horror"))
            .collect();

        let mut collected = vec![];
        let mut p = 1;
        loop {
            let response = service
                .fetch_content_by_category(&category("Horror", p))
                .await
                .or_fail()?;
            expect_that!(response.total, eq(expected.len()));
            expect_true!(response.items.iter().all(|i| i.has_genre("Horror")));
            collected.extend(response.items);
            if !response.has_more {
                break;
            }
            p += 1;
        }

        expect_that!(collected, eq(&expected));
        Ok(())
    }

    #[tokio::test]
    #[googletest::test]
    async fn test_unknown_category_is_empty() -> googletest::Result<()> {
        let service = service_with(0.0);
        let response = service
            .fetch_content_by_category(&category("Western", 1))
            .await
            .or_fail()?;

        expect_that!(response.items, is_empty());
        expect_that!(response.total, eq(0));
        expect_false!(response.has_more);
        Ok(())
    }

    #[tokio::test]
    #[googletest::test]
    async fn test_lookup_agrees_with_listing() -> googletest::Result<()> {
        let service = service_with(0.0);
        let listing = service.fetch_content(&page(3)).await.or_fail()?;

        for item in &listing.items {
            let response = service
                .fetch_content_by_id(&content::id::get::Query {
                    id: item.id.clone(),
                })
                .await
                .or_fail()?;
            expect_that!(response.item.as_ref(), some(eq(item)));
        }
        Ok(())
    }

    #[tokio::test]
    #[googletest::test]
    async fn test_lookup_of_absent_id_is_not_found() -> googletest::Result<()> {
        let service = service_with(0.0);
        let response = service
            .fetch_content_by_id(&content::id::get::Query {
                id: "content-9999".to_string(),
            })
            .await
            .or_fail()?;
        expect_that!(response.item, none());
        Ok(())
    }

    #[tokio::test]
    #[googletest::test]
    async fn test_latency_is_applied_per_request() -> googletest::Result<()> {
        let latency = RecordingLatency::default();
        let config = CatalogConfig {
            seed: Some(1),
            ..Default::default()
        };
        let service = MockContentService::new(config, &latency);

        service.fetch_content(&page(1)).await.or_fail()?;
        service
            .fetch_content_by_id(&content::id::get::Query {
                id: "content-1".to_string(),
            })
            .await
            .or_fail()?;

        expect_that!(latency.total.get(), eq(Duration::from_millis(1300)));
        Ok(())
    }
}
