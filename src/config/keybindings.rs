//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Only consulted while the search box does not have focus; typing into
/// the search box never reaches these bindings.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    /// Bind `key` to `action`, replacing any previous binding of that key.
    pub fn bind(&mut self, key: KeyEvent, action: KeyAction) {
        self.bindings.insert(key, action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        let none = |code| KeyEvent::new(code, KeyModifiers::NONE);
        let shift = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::SHIFT);
        let ctrl = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);

        let mut bindings = HashMap::new();

        // Page navigation
        for key in [
            none(KeyCode::Char('n')),
            none(KeyCode::Right),
            none(KeyCode::PageDown),
        ] {
            bindings.insert(key, KeyAction::NextPage);
        }
        for key in [
            none(KeyCode::Char('p')),
            none(KeyCode::Left),
            none(KeyCode::PageUp),
        ] {
            bindings.insert(key, KeyAction::PrevPage);
        }
        bindings.insert(none(KeyCode::Char('g')), KeyAction::FirstPage);
        bindings.insert(none(KeyCode::Home), KeyAction::FirstPage);
        bindings.insert(shift('G'), KeyAction::LastPage);
        bindings.insert(none(KeyCode::End), KeyAction::LastPage);

        // Search
        bindings.insert(none(KeyCode::Char('/')), KeyAction::StartSearch);
        bindings.insert(ctrl('f'), KeyAction::StartSearch);

        // Filters
        bindings.insert(none(KeyCode::Char('i')), KeyAction::CycleIndustry);
        bindings.insert(shift('I'), KeyAction::CycleIndustryBack);
        bindings.insert(none(KeyCode::Char('l')), KeyAction::CycleLocation);
        bindings.insert(shift('L'), KeyAction::CycleLocationBack);
        bindings.insert(none(KeyCode::Char('x')), KeyAction::ClearFilters);

        // Sorting and view
        bindings.insert(none(KeyCode::Char('s')), KeyAction::CycleSortField);
        bindings.insert(none(KeyCode::Char('o')), KeyAction::ToggleSortDirection);
        bindings.insert(none(KeyCode::Char('v')), KeyAction::ToggleViewMode);

        // Application controls
        bindings.insert(none(KeyCode::Char('r')), KeyAction::Retry);
        bindings.insert(none(KeyCode::Char('?')), KeyAction::Help);
        bindings.insert(none(KeyCode::Char('q')), KeyAction::Quit);
        bindings.insert(ctrl('c'), KeyAction::Quit);

        Self { bindings }
    }
}
