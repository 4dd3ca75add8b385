//! Live hazard feed providers.

pub mod eonet;
pub mod usgs;

use async_trait::async_trait;

use alerthub_core::AppResult;
use alerthub_entity::event::DisasterEvent;

pub use eonet::EonetProvider;
pub use usgs::UsgsProvider;

/// A source of disaster events.
///
/// Providers return events already normalized to the internal model
/// (country resolved, severity assigned). Errors are propagated here and
/// absorbed by the aggregator, which logs and treats the provider as
/// having contributed nothing this round.
#[async_trait]
pub trait FeedProvider: Send + Sync {
    /// Short provider name for logs.
    fn name(&self) -> &str;

    /// Fetch the provider's current events.
    async fn fetch(&self) -> AppResult<Vec<DisasterEvent>>;
}
