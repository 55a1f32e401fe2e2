use log::info;

use crate::builder::SiteBuilder;
use crate::config::Config;
use crate::server::{self, ServerConfig};
use crate::utils::error::BananaResult;

/// Handle the serve command
///
/// The initial build must succeed before anything is served. With `watch`,
/// later build failures are only logged.
pub async fn handle_serve_command(
    config: Config,
    server_config: ServerConfig,
    clean: bool,
    watch: bool,
) -> BananaResult<()> {
    let builder = SiteBuilder::new(config);

    if clean {
        builder.clean()?;
    }

    info!("Building site before serving...");
    builder.build()?;
    info!("Site built successfully at {}", builder.config().destination.display());

    let subscription = if watch {
        let subscription = builder.watch()?;
        info!("Watching for file changes...");
        Some(subscription)
    } else {
        None
    };

    server::serve(&server_config, builder.config().destination.clone(), subscription).await
}
