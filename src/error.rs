use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("cannot determine install directory: {0}")]
    InstallDir(#[from] std::io::Error),

    #[error("failed to spawn backend: {0}")]
    Spawn(#[from] tauri_plugin_shell::Error),

    #[error("window error: {0}")]
    Window(#[from] tauri::Error),
}

pub type Result<T> = std::result::Result<T, ShellError>;
