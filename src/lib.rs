pub mod backend;
pub mod error;
pub mod lifecycle;
pub mod window;

use tauri::plugin::TauriPlugin;
use tauri::Runtime;
use tauri_plugin_log::{Target, TargetKind};

/// Console plus a file in the platform log dir, since packaged builds
/// have no console attached.
fn log_plugin<R: Runtime>() -> TauriPlugin<R> {
    tauri_plugin_log::Builder::new()
        .level(log::LevelFilter::Info)
        .targets([
            Target::new(TargetKind::Stdout),
            Target::new(TargetKind::LogDir {
                file_name: Some("hueying".to_string()),
            }),
        ])
        .build()
}

pub fn run() {
    tauri::Builder::default()
        .plugin(log_plugin())
        .plugin(tauri_plugin_shell::init())
        .setup(|app| {
            window::create_main_window(app.handle())?;

            // Backend failures never take the window down.
            if let Err(e) = backend::spawn_backend(app.handle()) {
                log::error!("[Backend] {}", e);
            }

            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while running tauri application")
        .run(lifecycle::on_run_event);
}
