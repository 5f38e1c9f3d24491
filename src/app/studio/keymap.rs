use crossterm::event::{KeyCode, KeyModifiers};
use rustc_hash::FxHashMap;

use crate::core::event::Key;
use crate::core::Command;
use crate::services::KeybindingRule;

/// Key chord -> command table. Defaults below, overridable from settings.
#[derive(Debug, Default)]
pub(super) struct Keymap {
    map: FxHashMap<Key, Command>,
}

impl Keymap {
    pub fn with_defaults() -> Self {
        let mut keymap = Self::default();
        keymap.bind(Key::simple(KeyCode::Char('q')), Command::Quit);
        keymap.bind(Key::ctrl(KeyCode::Char('c')), Command::Quit);
        keymap.bind(Key::simple(KeyCode::Char('a')), Command::AddScreen);
        keymap.bind(Key::simple(KeyCode::Char('s')), Command::AddSubScreen);
        keymap.bind(Key::simple(KeyCode::Char('r')), Command::RenameSelected);
        keymap.bind(Key::simple(KeyCode::Char('e')), Command::EditDescription);
        keymap.bind(Key::simple(KeyCode::Char('p')), Command::PromoteSelected);
        keymap.bind(Key::simple(KeyCode::Char('x')), Command::DeleteSelected);
        keymap.bind(Key::simple(KeyCode::Delete), Command::DeleteSelected);
        keymap.bind(Key::simple(KeyCode::Up), Command::SelectionUp);
        keymap.bind(Key::simple(KeyCode::Down), Command::SelectionDown);
        keymap.bind(Key::simple(KeyCode::PageUp), Command::ScrollUp);
        keymap.bind(Key::simple(KeyCode::PageDown), Command::ScrollDown);
        keymap.bind(Key::simple(KeyCode::Esc), Command::Escape);
        keymap
    }

    pub fn bind(&mut self, key: Key, cmd: Command) {
        self.map.insert(key, cmd);
    }

    pub fn unbind(&mut self, key: &Key) -> bool {
        self.map.remove(key).is_some()
    }

    pub fn resolve(&self, key: &Key) -> Option<&Command> {
        self.map.get(key)
    }

    /// Apply settings overrides. An empty command string unbinds the key.
    pub fn apply_overrides(&mut self, rules: &[KeybindingRule]) {
        for rule in rules {
            let Some(key) = parse_keybinding(&rule.key) else {
                tracing::warn!(key = %rule.key, "unparseable keybinding, ignored");
                continue;
            };
            let command = rule.command.trim();
            if command.is_empty() {
                self.unbind(&key);
            } else if let Some(cmd) = Command::from_name(command) {
                self.bind(key, cmd);
            } else {
                tracing::warn!(command, "unknown command in keybinding, ignored");
            }
        }
    }
}

/// Parse `"ctrl+n"` / `"delete"` / `"f2"` style chords.
pub(super) fn parse_keybinding(chord: &str) -> Option<Key> {
    let mut modifiers = KeyModifiers::NONE;
    let mut code = None;

    for part in chord.split('+') {
        let part = part.trim().to_ascii_lowercase();
        match part.as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "esc" | "escape" => code = Some(KeyCode::Esc),
            "enter" | "return" => code = Some(KeyCode::Enter),
            "tab" => code = Some(KeyCode::Tab),
            "backspace" => code = Some(KeyCode::Backspace),
            "delete" | "del" => code = Some(KeyCode::Delete),
            "space" => code = Some(KeyCode::Char(' ')),
            "up" => code = Some(KeyCode::Up),
            "down" => code = Some(KeyCode::Down),
            "left" => code = Some(KeyCode::Left),
            "right" => code = Some(KeyCode::Right),
            "home" => code = Some(KeyCode::Home),
            "end" => code = Some(KeyCode::End),
            "pageup" => code = Some(KeyCode::PageUp),
            "pagedown" => code = Some(KeyCode::PageDown),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.as_str()) {
                    (Some(ch), "") => code = Some(KeyCode::Char(ch)),
                    (Some('f'), digits) if !digits.is_empty() => {
                        code = Some(KeyCode::F(digits.parse().ok()?));
                    }
                    _ => return None,
                }
            }
        }
    }

    code.map(|code| Key::new(code, modifiers))
}

#[cfg(test)]
#[path = "../../../tests/unit/app/studio/keymap.rs"]
mod tests;
