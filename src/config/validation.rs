use crate::config::Config;
use crate::utils::error::{BananaError, BananaResult};
use crate::utils::path::normalize_path;

/// Validate the runtime configuration before anything touches the disk
///
/// `clean` removes the whole destination, so it must never point at the
/// site root or one of its source directories.
pub fn validate_config(config: &Config) -> BananaResult<()> {
    if !config.source.is_dir() {
        return Err(BananaError::config(
            &config.source,
            "source directory does not exist",
        ));
    }

    validate_destination(config)?;

    if config.max_layout_depth == 0 {
        return Err(BananaError::config(
            &config.source,
            "maximum layout depth must be at least 1",
        ));
    }

    Ok(())
}

/// Check only that the destination is safe to delete
pub fn validate_destination(config: &Config) -> BananaResult<()> {
    let destination = normalize_path(&config.destination);
    if destination == normalize_path(&config.source)
        || destination.as_os_str().is_empty()
        || config.is_source_dir(&config.destination)
    {
        return Err(BananaError::config(
            &config.destination,
            "destination would overwrite site sources",
        ));
    }

    Ok(())
}
