//! Backend Process
//!
//! Starts the Python backend next to the shell and forwards its output into
//! the shell's log. The process is observed, never supervised: no restart,
//! no health check, and it is not killed when the shell exits.

use std::path::{Component, Path, PathBuf};

use tauri::async_runtime::Receiver;
use tauri::{AppHandle, Runtime};
use tauri_plugin_shell::process::{Command, CommandEvent};
use tauri_plugin_shell::{Shell, ShellExt};

use crate::error::Result;

const PYTHON: &str = "python";
const SCRIPT: &str = "main.py";

const STDOUT_PREFIX: &str = "python: ";
const STDERR_PREFIX: &str = "python error: ";

/// The backend invocation: `python <install-dir>/../main.py`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendCommand {
    pub program: String,
    pub script: PathBuf,
}

impl BackendCommand {
    /// Build the command for a shell installed in `install_dir`.
    pub fn for_install_dir(install_dir: &Path) -> Self {
        Self {
            program: PYTHON.to_string(),
            script: normalize(&install_dir.join("..").join(SCRIPT)),
        }
    }

    /// Build the command relative to the running executable.
    pub fn locate() -> Result<Self> {
        let exe = std::env::current_exe()?;
        let install_dir = exe.parent().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} has no parent directory", exe.display()),
            )
        })?;
        Ok(Self::for_install_dir(install_dir))
    }

    pub fn args(&self) -> [String; 1] {
        [self.script.to_string_lossy().into_owned()]
    }
}

/// Resolve `.` and `..` lexically, without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if out.file_name().is_some() {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Something the backend process reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendEvent {
    Stdout(Vec<u8>),
    Stderr(Vec<u8>),
    Exited { code: Option<i32>, signal: Option<i32> },
    /// Error raised by the platform while driving the process.
    Failed(String),
    /// A process event this shell has no use for.
    Other,
}

impl From<CommandEvent> for BackendEvent {
    fn from(event: CommandEvent) -> Self {
        match event {
            CommandEvent::Stdout(bytes) => BackendEvent::Stdout(bytes),
            CommandEvent::Stderr(bytes) => BackendEvent::Stderr(bytes),
            CommandEvent::Terminated(payload) => BackendEvent::Exited {
                code: payload.code,
                signal: payload.signal,
            },
            CommandEvent::Error(message) => BackendEvent::Failed(message),
            _ => BackendEvent::Other,
        }
    }
}

/// Where backend output ends up.
pub trait BackendLog {
    fn info(&mut self, line: String);
    fn error(&mut self, line: String);
}

/// Writes to the shell's own log.
pub struct ConsoleLog;

impl BackendLog for ConsoleLog {
    fn info(&mut self, line: String) {
        log::info!("{}", line);
    }

    fn error(&mut self, line: String) {
        log::error!("{}", line);
    }
}

/// Log one event.
pub fn record<S: BackendLog + ?Sized>(event: BackendEvent, sink: &mut S) {
    match event {
        BackendEvent::Stdout(bytes) => {
            sink.info(format!("{}{}", STDOUT_PREFIX, String::from_utf8_lossy(&bytes)))
        }
        BackendEvent::Stderr(bytes) => {
            sink.error(format!("{}{}", STDERR_PREFIX, String::from_utf8_lossy(&bytes)))
        }
        BackendEvent::Exited { code, signal } => sink.info(describe_exit(code, signal)),
        BackendEvent::Failed(message) => sink.error(format!("{}{}", STDERR_PREFIX, message)),
        BackendEvent::Other => log::debug!("[Backend] Ignoring unrecognized process event"),
    }
}

/// Log every event in delivery order until the process side hangs up.
pub async fn observe<E, S>(mut events: Receiver<E>, sink: &mut S)
where
    E: Into<BackendEvent>,
    S: BackendLog + ?Sized,
{
    while let Some(event) = events.recv().await {
        record(event.into(), sink);
    }
}

fn describe_exit(code: Option<i32>, signal: Option<i32>) -> String {
    match (code, signal) {
        (Some(code), _) => format!("python process exited with code {}", code),
        (None, Some(signal)) => format!("python process exited with signal {}", signal),
        (None, None) => "python process exited with unknown status".to_string(),
    }
}

/// The backend process as the shell plugin will run it.
///
/// Raw output mode: every read from the pipes becomes one event as soon as
/// it arrives, instead of being held back until a line ending.
fn backend_process<R: Runtime>(shell: &Shell<R>, command: &BackendCommand) -> Command {
    shell
        .command(&command.program)
        .args(command.args())
        .env("PYTHONUNBUFFERED", "1")
        .env("PYTHONIOENCODING", "utf-8")
        .set_raw_out(true)
}

/// Spawn the backend and start forwarding its output.
///
/// Returns once the process is running; its output is handled on the async
/// runtime. A spawn failure is returned to the caller, nothing is retried.
pub fn spawn_backend<R: Runtime>(app: &AppHandle<R>) -> Result<()> {
    let command = BackendCommand::locate()?;
    log::info!(
        "[Backend] Starting: {} {}",
        command.program,
        command.script.display()
    );

    let (events, child) = backend_process(app.shell(), &command).spawn()?;

    log::info!("[Backend] Started (PID: {})", child.pid());

    tauri::async_runtime::spawn(async move {
        // Held until the process exits so its pipes stay open.
        let _child = child;
        observe(events, &mut ConsoleLog).await;
    });

    Ok(())
}
