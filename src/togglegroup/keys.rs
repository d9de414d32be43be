//! Key bindings for toggle group navigation and selection.
//!
//! ## Navigation Keys
//!
//! - **Previous button**: `←/h`, `↑/k`
//! - **Next button**: `→/l`, `↓/j`
//! - **Jump**: `g/home` (first button), `G/end` (last button)
//!
//! Navigation skips disabled buttons and stops at either end.
//!
//! ## Selection Keys
//!
//! - **Click**: `enter/space` clicks the focused button
//!
//! ## Example
//!
//! ```rust
//! use bubbletea_toggle_group::togglegroup::ToggleGroupKeyMap;
//! use bubbletea_toggle_group::key::KeyMap;
//!
//! let keymap = ToggleGroupKeyMap::default();
//! assert_eq!(keymap.short_help().len(), 3);
//! ```

use crate::key;
use crossterm::event::KeyCode;

/// Key bindings for moving between buttons and clicking them.
#[derive(Debug, Clone)]
pub struct ToggleGroupKeyMap {
    /// Move focus to the previous enabled button.
    pub prev: key::Binding,
    /// Move focus to the next enabled button.
    pub next: key::Binding,
    /// Move focus to the first enabled button.
    pub first: key::Binding,
    /// Move focus to the last enabled button.
    pub last: key::Binding,
    /// Click the focused button.
    pub select: key::Binding,
}

impl Default for ToggleGroupKeyMap {
    fn default() -> Self {
        Self {
            prev: key::Binding::new(vec![
                KeyCode::Left,
                KeyCode::Char('h'),
                KeyCode::Up,
                KeyCode::Char('k'),
            ])
            .with_help("←/h", "prev"),
            next: key::Binding::new(vec![
                KeyCode::Right,
                KeyCode::Char('l'),
                KeyCode::Down,
                KeyCode::Char('j'),
            ])
            .with_help("→/l", "next"),
            first: key::Binding::new(vec![KeyCode::Home, KeyCode::Char('g')])
                .with_help("g/home", "first"),
            last: key::Binding::new(vec![KeyCode::End, KeyCode::Char('G')])
                .with_help("G/end", "last"),
            select: key::new_binding(vec![
                key::with_keys_str(&["enter", "space"]),
                key::with_help("enter", "toggle"),
            ]),
        }
    }
}

impl key::KeyMap for ToggleGroupKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev, &self.next, &self.select]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.prev, &self.next, &self.first, &self.last],
            vec![&self.select],
        ]
    }
}
