use log::info;

use crate::builder::SiteBuilder;
use crate::config::Config;
use crate::utils::error::BananaResult;

/// Handle the build command
pub fn handle_build_command(config: Config, clean: bool) -> BananaResult<()> {
    let builder = SiteBuilder::new(config);

    if clean {
        builder.clean()?;
    }

    info!("Building site...");
    let stats = builder.build()?;
    info!(
        "Site built successfully at {} ({} posts, {} pages)",
        builder.config().destination.display(),
        stats.posts,
        stats.pages
    );
    Ok(())
}
