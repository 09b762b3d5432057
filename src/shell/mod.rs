//! Application shell: native dialogs, menu, events and the operations the
//! bridge exposes.
//!
//! - [`Shell`]: the operations, generic over the dialog and event seams
//! - [`MenuCommand`]: the closed menu catalog
//! - [`native`]: Tauri implementations of the seams

pub mod dialogs;
pub mod events;
pub mod menu;
pub mod native;
mod service;
pub mod window;

pub use dialogs::{Picked, SaveTarget, ShellDialogs};
pub use events::{EventSink, ShellEvent};
pub use menu::{CommandAction, MenuCommand, build_menu};
pub use native::{TauriDialogs, TauriEvents};
pub use service::Shell;
pub use window::create_main_window;

/// The shell as wired into the running app.
pub type AppShell = Shell<TauriDialogs, TauriEvents>;
