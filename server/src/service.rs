use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use common::config::SiteConfig;

// core service trait
//
// a service is created from the config, then started, which spawns its tasks and
// returns once they are running.  wait() resolves when the service stops, which
// for a server means something went wrong
#[async_trait]
pub trait SiteService: Send + Sync + 'static {
    fn create(config: Arc<SiteConfig>) -> Self;

    async fn start(&self) -> Result<()>;

    async fn wait(&self) -> Result<()>;
}
