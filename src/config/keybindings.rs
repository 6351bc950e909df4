//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Character keys are matched without the Shift modifier: terminals differ
/// in whether `M` or `+` arrive with `SHIFT` set, and the character already
/// carries the case.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<(KeyCode, KeyModifiers), KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&normalize(key)).copied()
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings
            .insert(normalize(KeyEvent::new(code, modifiers)), action);
    }
}

fn normalize(key: KeyEvent) -> (KeyCode, KeyModifiers) {
    match key.code {
        KeyCode::Char(_) => (key.code, key.modifiers - KeyModifiers::SHIFT),
        _ => (key.code, key.modifiers),
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use KeyCode::Char;
        let none = KeyModifiers::NONE;

        let mut keys = Self {
            bindings: HashMap::new(),
        };

        // Filters
        keys.bind(Char('/'), none, KeyAction::EditSearch);
        keys.bind(Char('s'), none, KeyAction::EditStartDate);
        keys.bind(Char('e'), none, KeyAction::EditEndDate);
        keys.bind(Char('m'), none, KeyAction::NextMessageFilter);
        keys.bind(Char('M'), none, KeyAction::PrevMessageFilter);
        keys.bind(Char('c'), none, KeyAction::ClearFilters);

        // Sorting
        keys.bind(Char('t'), none, KeyAction::ToggleSort);

        // Pagination
        keys.bind(KeyCode::Home, none, KeyAction::FirstPage);
        keys.bind(Char('g'), none, KeyAction::FirstPage);
        keys.bind(KeyCode::Left, none, KeyAction::PrevPage);
        keys.bind(Char('h'), none, KeyAction::PrevPage);
        keys.bind(Char('p'), none, KeyAction::PrevPage);
        keys.bind(KeyCode::PageUp, none, KeyAction::PrevPage);
        keys.bind(KeyCode::Right, none, KeyAction::NextPage);
        keys.bind(Char('l'), none, KeyAction::NextPage);
        keys.bind(Char('n'), none, KeyAction::NextPage);
        keys.bind(KeyCode::PageDown, none, KeyAction::NextPage);
        keys.bind(KeyCode::End, none, KeyAction::LastPage);
        keys.bind(Char('G'), none, KeyAction::LastPage);
        keys.bind(Char(':'), none, KeyAction::GoToPage);
        keys.bind(Char('+'), none, KeyAction::IncreasePageSize);
        keys.bind(Char('='), none, KeyAction::IncreasePageSize);
        keys.bind(Char('-'), none, KeyAction::DecreasePageSize);

        // Application controls
        keys.bind(Char('r'), none, KeyAction::Reload);
        keys.bind(Char('?'), none, KeyAction::Help);
        keys.bind(Char('q'), none, KeyAction::Quit);
        keys.bind(Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        keys
    }
}
