use std::process::Command;

use log::{debug, error};

/// Launchers to try, in order, for the current platform
fn launchers(url: &str) -> Vec<(&'static str, Vec<String>)> {
    if cfg!(target_os = "windows") {
        vec![("cmd", vec!["/c".into(), "start".into(), url.into()])]
    } else if cfg!(target_os = "macos") {
        vec![("open", vec![url.into()])]
    } else if is_wsl() {
        vec![
            ("powershell.exe", vec!["-Command".into(), format!("Start-Process '{}'", url)]),
            ("xdg-open", vec![url.into()]),
        ]
    } else {
        vec![("xdg-open", vec![url.into()])]
    }
}

fn is_wsl() -> bool {
    std::fs::read_to_string("/proc/sys/kernel/osrelease")
        .map(|release| {
            let release = release.to_lowercase();
            release.contains("microsoft") || release.contains("wsl")
        })
        .unwrap_or(false)
}

/// Open a URL in the user's default browser; returns whether a launcher started
///
/// Failure is logged here, callers need not log it again.
pub fn open_browser(url: &str) -> bool {
    for (program, args) in launchers(url) {
        // Launchers hand off to the browser and exit; the child is not waited on
        match Command::new(program).args(&args).spawn() {
            Ok(_) => return true,
            Err(e) => debug!("{} failed: {}", program, e),
        }
    }

    error!("Failed to open browser at {}", url);
    false
}
