use log::info;

use crate::builder::SiteBuilder;
use crate::config::Config;
use crate::utils::error::BananaResult;

/// Handle the clean command
pub fn handle_clean_command(config: Config) -> BananaResult<()> {
    SiteBuilder::new(config).clean()?;
    info!("Site cleaned successfully");
    Ok(())
}
