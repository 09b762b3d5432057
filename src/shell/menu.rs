//! Application menu: the command catalog and its native menu.
//!
//! [`MenuCommand`] is closed, so adding a command forces every match on it
//! (ids, labels, actions) to be updated.

use tauri::menu::{Menu, MenuBuilder, MenuItem, MenuItemBuilder, SubmenuBuilder};
use tauri::{Manager, Runtime};

use crate::core::config::APP_NAME;
use crate::shell::events::ShellEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuCommand {
    OpenImages,
    OpenFolder,
    SaveAll,
    SaveZip,
    SetOutputFolder,
    SelectAll,
    DeselectAll,
    RemoveSelected,
    ClearAll,
    ConvertAll,
    ConvertSelected,
    ShowShortcuts,
    About,
}

/// What triggering a command does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandAction {
    /// Pass a payload-free event to the webview
    Forward(ShellEvent),
    /// Pick images and push `files-selected`
    OpenImages,
    /// Pick a folder, scan it and push `files-selected`
    OpenFolder,
    /// Pick a folder, store it in the session and push `output-folder-set`
    SetOutputFolder,
    ShowAbout,
}

impl MenuCommand {
    pub const ALL: [MenuCommand; 13] = [
        Self::OpenImages,
        Self::OpenFolder,
        Self::SaveAll,
        Self::SaveZip,
        Self::SetOutputFolder,
        Self::SelectAll,
        Self::DeselectAll,
        Self::RemoveSelected,
        Self::ClearAll,
        Self::ConvertAll,
        Self::ConvertSelected,
        Self::ShowShortcuts,
        Self::About,
    ];

    /// Stable menu item id.
    pub fn id(&self) -> &'static str {
        match self {
            Self::OpenImages => "open-images",
            Self::OpenFolder => "open-folder",
            Self::SaveAll => "save-all",
            Self::SaveZip => "save-zip",
            Self::SetOutputFolder => "set-output-folder",
            Self::SelectAll => "select-all",
            Self::DeselectAll => "deselect-all",
            Self::RemoveSelected => "remove-selected",
            Self::ClearAll => "clear-all",
            Self::ConvertAll => "convert-all",
            Self::ConvertSelected => "convert-selected",
            Self::ShowShortcuts => "show-shortcuts",
            Self::About => "about",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    pub fn label(&self) -> String {
        match self {
            Self::OpenImages => "Open Images...".into(),
            Self::OpenFolder => "Open Folder...".into(),
            Self::SaveAll => "Save All".into(),
            Self::SaveZip => "Save As ZIP...".into(),
            Self::SetOutputFolder => "Set Output Folder...".into(),
            Self::SelectAll => "Select All".into(),
            Self::DeselectAll => "Deselect All".into(),
            Self::RemoveSelected => "Remove Selected".into(),
            Self::ClearAll => "Clear All".into(),
            Self::ConvertAll => "Convert All".into(),
            Self::ConvertSelected => "Convert Selected".into(),
            Self::ShowShortcuts => "Keyboard Shortcuts".into(),
            Self::About => format!("About {APP_NAME}"),
        }
    }

    pub fn accelerator(&self) -> Option<&'static str> {
        match self {
            Self::OpenImages => Some("CmdOrCtrl+O"),
            Self::OpenFolder => Some("CmdOrCtrl+Shift+O"),
            Self::SaveAll => Some("CmdOrCtrl+S"),
            Self::SaveZip => Some("CmdOrCtrl+Shift+S"),
            Self::SelectAll => Some("CmdOrCtrl+A"),
            Self::DeselectAll => Some("CmdOrCtrl+D"),
            Self::RemoveSelected => Some("Delete"),
            Self::ClearAll => Some("CmdOrCtrl+Shift+Delete"),
            Self::ConvertAll => Some("CmdOrCtrl+Enter"),
            Self::ConvertSelected => Some("CmdOrCtrl+Shift+Enter"),
            Self::ShowShortcuts => Some("F1"),
            Self::SetOutputFolder | Self::About => None,
        }
    }

    pub fn action(&self) -> CommandAction {
        match self {
            Self::OpenImages => CommandAction::OpenImages,
            Self::OpenFolder => CommandAction::OpenFolder,
            Self::SetOutputFolder => CommandAction::SetOutputFolder,
            Self::About => CommandAction::ShowAbout,
            Self::SaveAll => CommandAction::Forward(ShellEvent::SaveAll),
            Self::SaveZip => CommandAction::Forward(ShellEvent::SaveZip),
            Self::SelectAll => CommandAction::Forward(ShellEvent::SelectAll),
            Self::DeselectAll => CommandAction::Forward(ShellEvent::Deselect),
            Self::RemoveSelected => CommandAction::Forward(ShellEvent::RemoveSelected),
            Self::ClearAll => CommandAction::Forward(ShellEvent::ClearAll),
            Self::ConvertAll => CommandAction::Forward(ShellEvent::Convert),
            Self::ConvertSelected => CommandAction::Forward(ShellEvent::ConvertSelected),
            Self::ShowShortcuts => CommandAction::Forward(ShellEvent::Shortcuts),
        }
    }
}

fn item<R: Runtime, M: Manager<R>>(manager: &M, command: MenuCommand) -> tauri::Result<MenuItem<R>> {
    let mut builder = MenuItemBuilder::with_id(command.id(), command.label());
    if let Some(accelerator) = command.accelerator() {
        builder = builder.accelerator(accelerator);
    }
    builder.build(manager)
}

/// Builds the File / Edit / Convert / View / Help menu bar.
pub fn build_menu<R: Runtime, M: Manager<R>>(manager: &M) -> tauri::Result<Menu<R>> {
    use MenuCommand::*;

    let file = SubmenuBuilder::new(manager, "File")
        .item(&item(manager, OpenImages)?)
        .item(&item(manager, OpenFolder)?)
        .separator()
        .item(&item(manager, SaveAll)?)
        .item(&item(manager, SaveZip)?)
        .separator()
        .item(&item(manager, SetOutputFolder)?)
        .separator()
        .quit()
        .build()?;

    let edit = SubmenuBuilder::new(manager, "Edit")
        .item(&item(manager, SelectAll)?)
        .item(&item(manager, DeselectAll)?)
        .separator()
        .item(&item(manager, RemoveSelected)?)
        .item(&item(manager, ClearAll)?)
        .build()?;

    let convert = SubmenuBuilder::new(manager, "Convert")
        .item(&item(manager, ConvertAll)?)
        .item(&item(manager, ConvertSelected)?)
        .build()?;

    let view = SubmenuBuilder::new(manager, "View")
        .fullscreen()
        .build()?;

    let help = SubmenuBuilder::new(manager, "Help")
        .item(&item(manager, ShowShortcuts)?)
        .separator()
        .item(&item(manager, About)?)
        .build()?;

    MenuBuilder::new(manager)
        .items(&[&file, &edit, &convert, &view, &help])
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_and_round_trip() {
        let ids: HashSet<_> = MenuCommand::ALL.iter().map(|c| c.id()).collect();
        assert_eq!(ids.len(), MenuCommand::ALL.len());
        for command in MenuCommand::ALL {
            assert_eq!(MenuCommand::from_id(command.id()), Some(command));
        }
        assert_eq!(MenuCommand::from_id("reload"), None);
    }

    #[test]
    fn forwarded_commands_use_expected_event_names() {
        let expected = [
            (MenuCommand::SaveAll, "menu-save-all"),
            (MenuCommand::SaveZip, "menu-save-zip"),
            (MenuCommand::SelectAll, "menu-select-all"),
            (MenuCommand::DeselectAll, "menu-deselect"),
            (MenuCommand::RemoveSelected, "menu-remove-selected"),
            (MenuCommand::ClearAll, "menu-clear-all"),
            (MenuCommand::ConvertAll, "menu-convert"),
            (MenuCommand::ConvertSelected, "menu-convert-selected"),
            (MenuCommand::ShowShortcuts, "menu-shortcuts"),
        ];
        for (command, name) in expected {
            match command.action() {
                CommandAction::Forward(event) => assert_eq!(event.name(), name),
                other => panic!("{command:?} should forward, got {other:?}"),
            }
        }
    }

    #[test]
    fn direct_commands() {
        assert_eq!(MenuCommand::OpenImages.action(), CommandAction::OpenImages);
        assert_eq!(MenuCommand::OpenFolder.action(), CommandAction::OpenFolder);
        assert_eq!(MenuCommand::SetOutputFolder.action(), CommandAction::SetOutputFolder);
        assert_eq!(MenuCommand::About.action(), CommandAction::ShowAbout);
    }

    #[test]
    fn accelerators_are_unique() {
        let accelerators: Vec<_> = MenuCommand::ALL.iter().filter_map(|c| c.accelerator()).collect();
        let unique: HashSet<_> = accelerators.iter().collect();
        assert_eq!(unique.len(), accelerators.len());
    }

    #[test]
    fn about_label_names_the_app() {
        assert_eq!(MenuCommand::About.label(), "About ImageForge Pro");
    }
}
