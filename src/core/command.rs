//! Semantic commands: what the user asked for, independent of which key or
//! button produced it.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    // Board mutations
    AddScreen,
    AddSubScreen,
    DeleteSelected,
    RenameSelected,
    EditDescription,
    PromoteSelected,

    // Selection / viewport
    SelectionUp,
    SelectionDown,
    ScrollUp,
    ScrollDown,

    // System
    Escape,
    Quit,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddScreen => "addScreen",
            Command::AddSubScreen => "addSubScreen",
            Command::DeleteSelected => "deleteSelected",
            Command::RenameSelected => "renameSelected",
            Command::EditDescription => "editDescription",
            Command::PromoteSelected => "promoteSelected",
            Command::SelectionUp => "selectionUp",
            Command::SelectionDown => "selectionDown",
            Command::ScrollUp => "scrollUp",
            Command::ScrollDown => "scrollDown",
            Command::Escape => "escape",
            Command::Quit => "quit",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let cmd = match name {
            "addScreen" => Command::AddScreen,
            "addSubScreen" => Command::AddSubScreen,
            "deleteSelected" => Command::DeleteSelected,
            "renameSelected" => Command::RenameSelected,
            "editDescription" => Command::EditDescription,
            "promoteSelected" => Command::PromoteSelected,
            "selectionUp" => Command::SelectionUp,
            "selectionDown" => Command::SelectionDown,
            "scrollUp" => Command::ScrollUp,
            "scrollDown" => Command::ScrollDown,
            "escape" => Command::Escape,
            "quit" => Command::Quit,
            _ => return None,
        };
        Some(cmd)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
