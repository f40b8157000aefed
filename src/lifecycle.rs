//! App lifetime: when the last window closes the app quits, except on macOS
//! where it stays in the dock. The backend process is left alone either way.

use tauri::{AppHandle, RunEvent, Runtime};

/// Whether closing every window should leave the app running on `os`
/// (a value of `std::env::consts::OS`).
pub fn stays_resident_when_windows_closed(os: &str) -> bool {
    os == "macos"
}

pub fn on_run_event<R: Runtime>(_app: &AppHandle<R>, event: RunEvent) {
    // `code` is only set for explicit exits, which always go through.
    if let RunEvent::ExitRequested { code: None, api, .. } = event {
        if stays_resident_when_windows_closed(std::env::consts::OS) {
            log::info!("All windows closed, staying resident");
            api.prevent_exit();
        } else {
            log::info!("All windows closed, quitting");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macos_stays_resident() {
        assert!(stays_resident_when_windows_closed("macos"));
    }

    #[test]
    fn other_platforms_quit() {
        for os in ["linux", "windows", "freebsd", "ios"] {
            assert!(!stays_resident_when_windows_closed(os), "{os}");
        }
    }
}
