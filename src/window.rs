//! Main window
//!
//! The shell owns a single webview window, created once the app is ready.
//! Nothing about it is persisted and it has no menu.

use tauri::{Manager, Runtime, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

use crate::error::Result;

/// Fixed description of the one window the shell opens.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSpec {
    pub label: &'static str,
    pub title: &'static str,
    pub width: f64,
    pub height: f64,
    /// Page loaded from the bundled frontend.
    pub document: &'static str,
}

impl WindowSpec {
    pub const fn main() -> Self {
        Self {
            label: "main",
            title: "Hueying AI",
            width: 1200.0,
            height: 800.0,
            document: "index.html",
        }
    }
}

/// Create the main window and load the bundled document into it.
///
/// Host scripting (`withGlobalTauri`) and the non-isolated security pattern
/// are app-wide in Tauri and live in `tauri.conf.json`.
pub fn create_main_window<R, M>(manager: &M) -> Result<WebviewWindow<R>>
where
    R: Runtime,
    M: Manager<R>,
{
    let spec = WindowSpec::main();
    let url = WebviewUrl::App(spec.document.into());

    let window = WebviewWindowBuilder::new(manager, spec.label, url)
        .title(spec.title)
        .inner_size(spec.width, spec.height)
        .build()?;

    log::info!(
        "[Window] Created '{}' ({}x{}) loading {}",
        spec.label,
        spec.width,
        spec.height,
        spec.document
    );
    Ok(window)
}
