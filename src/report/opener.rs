//! Open a written report with the host's default application

use std::path::Path;
use std::process::Command;
use tracing::warn;

/// Launch the platform opener for `path`. Returns whether a viewer started.
pub fn open_report(path: &Path) -> bool {
    let canon = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    let target = canon.to_string_lossy().to_string();
    if target.bytes().any(|b| b < 0x20) {
        warn!("Skipping auto-open for suspicious path: {}", target);
        return false;
    }

    #[cfg(target_os = "macos")]
    let try_cmds = vec![("open", vec![target.as_str()])];
    #[cfg(target_os = "windows")]
    let try_cmds = vec![(
        "powershell",
        vec![
            "-NoProfile",
            "-Command",
            "Start-Process",
            "-FilePath",
            target.as_str(),
        ],
    )];
    #[cfg(all(not(target_os = "macos"), not(target_os = "windows")))]
    let try_cmds = vec![("xdg-open", vec![target.as_str()])];

    for (program, args) in try_cmds {
        if Command::new(program).args(&args).spawn().is_ok() {
            return true;
        }
    }

    warn!("Could not open report automatically: {}", target);
    false
}
