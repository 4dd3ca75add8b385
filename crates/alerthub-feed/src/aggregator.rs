//! Merges seed and provider events into one cached feed.

use std::sync::Arc;
use std::time::Duration;

use futures::future;
use moka::future::Cache;
use tracing::{info, warn};

use alerthub_core::config::FeedsConfig;
use alerthub_core::types::EventId;
use alerthub_entity::event::DisasterEvent;

use crate::providers::{EonetProvider, FeedProvider, UsgsProvider};
use crate::seeds::seed_events;

/// Aggregates every configured event source into a single list, newest
/// first, cached for the configured TTL.
///
/// Reads between scheduler ticks are served from the cache; the worker
/// and the admin scan call [`EventAggregator::refresh`] to force a
/// re-fetch before matching alerts.
pub struct EventAggregator {
    providers: Vec<Arc<dyn FeedProvider>>,
    include_seeds: bool,
    cache: Cache<(), Arc<Vec<DisasterEvent>>>,
}

impl EventAggregator {
    /// Creates an aggregator over an explicit provider list.
    pub fn new(providers: Vec<Arc<dyn FeedProvider>>, config: &FeedsConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(1)
            .time_to_live(Duration::from_secs(config.cache_ttl_seconds.max(1)))
            .build();
        Self {
            providers,
            include_seeds: config.include_seed_events,
            cache,
        }
    }

    /// Creates the standard deployment aggregator: USGS and EONET, each
    /// subject to its enable flag.
    pub fn standard(client: reqwest::Client, config: &FeedsConfig) -> Self {
        let mut providers: Vec<Arc<dyn FeedProvider>> = Vec::new();
        if config.usgs_enabled {
            providers.push(Arc::new(UsgsProvider::new(client.clone(), config.clone())));
        }
        if config.eonet_enabled {
            providers.push(Arc::new(EonetProvider::new(client, config.clone())));
        }
        Self::new(providers, config)
    }

    /// Current events, newest first. Served from cache when fresh.
    pub async fn events(&self) -> Arc<Vec<DisasterEvent>> {
        self.cache
            .get_with((), async { Arc::new(self.fetch_all().await) })
            .await
    }

    /// Re-fetches every source now and replaces the cached list.
    pub async fn refresh(&self) -> Arc<Vec<DisasterEvent>> {
        let events = Arc::new(self.fetch_all().await);
        self.cache.insert((), events.clone()).await;
        events
    }

    /// Looks up a single event by id in the current feed.
    pub async fn find(&self, id: &EventId) -> Option<DisasterEvent> {
        self.events().await.iter().find(|event| &event.id == id).cloned()
    }

    async fn fetch_all(&self) -> Vec<DisasterEvent> {
        let mut combined = if self.include_seeds {
            seed_events()
        } else {
            Vec::new()
        };

        let fetches = self.providers.iter().map(|provider| provider.fetch());
        let results = future::join_all(fetches).await;
        for (provider, result) in self.providers.iter().zip(results) {
            match result {
                Ok(events) => {
                    info!(
                        provider = provider.name(),
                        count = events.len(),
                        "Feed contributed events"
                    );
                    combined.extend(events);
                }
                Err(error) => {
                    warn!(
                        provider = provider.name(),
                        %error,
                        "Feed fetch failed, contributing nothing this round"
                    );
                }
            }
        }

        combined.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        combined
    }
}
