// Hueying AI desktop shell.
// Opens the bundled UI in a native window and runs the Python backend
// next to it, forwarding the backend's output into the shell's log.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    hueying_ui_lib::run()
}
