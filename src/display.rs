//! Hands the finished chart to the desktop's default image viewer.

use log::{debug, warn};
use std::path::Path;
use std::process::{Command, Stdio};

/// Platform command used to open a file with its default application
fn viewer_command(target: &str) -> (&'static str, Vec<&str>) {
    #[cfg(target_os = "macos")]
    let command = ("open", vec![target]);
    #[cfg(target_os = "windows")]
    let command = (
        "powershell",
        vec!["-NoProfile", "-Command", "Start-Process", "-FilePath", target],
    );
    #[cfg(all(not(target_os = "macos"), not(target_os = "windows")))]
    let command = ("xdg-open", vec![target]);

    command
}

/// Opens `path` in the platform's default viewer without waiting for it.
///
/// Returns whether a viewer process was started. A missing viewer (headless
/// machines, CI) only produces a warning.
pub fn open_in_viewer(path: &Path) -> bool {
    let canon = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    let target = canon.to_string_lossy().to_string();

    if target.bytes().any(|b| b < 0x20) {
        warn!("Skipping viewer for suspicious path: {}", target);
        return false;
    }

    let (program, args) = viewer_command(&target);
    debug!("Opening {} with {}", target, program);

    let spawned = Command::new(program)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .is_ok();

    if !spawned {
        warn!("Could not open {} in an image viewer", target);
    }
    spawned
}
