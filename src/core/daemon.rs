use anyhow::Result;
use tracing::{debug, info};

use crate::config::ToggleConfig;
use crate::core::adapter::LifecycleAdapter;
use crate::host::WmHost;

/// Wires the lifecycle adapter to a concrete host: registers shortcuts,
/// adopts windows that already exist, then dispatches host events until the
/// stream closes. All work happens synchronously inside one dispatch; there
/// is no background scheduling.
pub struct Daemon<H: WmHost> {
    host: H,
    adapter: LifecycleAdapter,
}

impl<H: WmHost> Daemon<H> {
    pub fn new(host: H, config: &ToggleConfig) -> Self {
        info!(
            "🪟 Scratchpad classes: [{}], max_aspect={}, scale_factor={}",
            config.classes.join(", "),
            config.max_aspect,
            config.scale_factor
        );

        Self {
            host,
            adapter: LifecycleAdapter::new(config),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        info!("🚀 Starting togglepad daemon");

        self.adapter.register_shortcuts(&self.host)?;
        self.adapter.sweep_existing(&self.host);

        info!("🔄 Entering event loop");
        while let Some(event) = self.host.next_event().await {
            debug!("📨 Handling event: {event:?}");
            self.adapter.handle_event(&self.host, &event);
        }

        info!("👋 Host event stream closed, shutting down");
        Ok(())
    }
}
