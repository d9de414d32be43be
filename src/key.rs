//! Type-safe key bindings for components.
//!
//! A [`Binding`] groups one or more key presses with the help text shown to
//! users. Components keep their bindings in a key map struct and implement
//! [`KeyMap`] so applications can build contextual help out of them.
//!
//! Bindings can be created directly from crossterm key codes or through the
//! functional options API, which also accepts key names as strings:
//!
//! ```rust
//! use bubbletea_toggle_group::key::{self, Binding};
//! use crossterm::event::KeyCode;
//!
//! let select = Binding::new(vec![KeyCode::Enter, KeyCode::Char(' ')])
//!     .with_help("enter", "select");
//!
//! let quit = key::new_binding(vec![
//!     key::with_keys_str(&["q", "ctrl+c"]),
//!     key::with_help("q", "quit"),
//! ]);
//!
//! assert_eq!(select.help().desc, "select");
//! assert_eq!(quit.keys().len(), 2);
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifiers held while pressing the key.
    pub mods: KeyModifiers,
}

impl KeyPress {
    /// Creates a key press from a code and modifiers.
    pub fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    /// Parses a key name such as `"left"`, `"ctrl+c"`, `"space"` or `"G"`.
    ///
    /// Returns `None` for names that do not describe a key.
    ///
    /// ```rust
    /// use bubbletea_toggle_group::key::KeyPress;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let kp = KeyPress::parse("ctrl+c").unwrap();
    /// assert_eq!(kp.code, KeyCode::Char('c'));
    /// assert_eq!(kp.mods, KeyModifiers::CONTROL);
    /// assert!(KeyPress::parse("").is_none());
    /// ```
    pub fn parse(name: &str) -> Option<Self> {
        if name.is_empty() {
            return None;
        }
        // "+" on its own is a key, not a separator.
        if name == "+" {
            return Some(Self::from(KeyCode::Char('+')));
        }

        let mut mods = KeyModifiers::NONE;
        let mut parts: Vec<&str> = name.split('+').collect();
        let key_name = parts.pop()?;
        for part in parts {
            match part.to_ascii_lowercase().as_str() {
                "ctrl" => mods |= KeyModifiers::CONTROL,
                "alt" => mods |= KeyModifiers::ALT,
                "shift" => mods |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match key_name.to_ascii_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "enter" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" if mods.contains(KeyModifiers::SHIFT) => {
                mods.remove(KeyModifiers::SHIFT);
                KeyCode::BackTab
            }
            "tab" => KeyCode::Tab,
            "backspace" => KeyCode::Backspace,
            "delete" | "del" => KeyCode::Delete,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pgup" | "pageup" => KeyCode::PageUp,
            "pgdown" | "pagedown" => KeyCode::PageDown,
            "space" | " " => KeyCode::Char(' '),
            lower => {
                if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                    KeyCode::F(n)
                } else {
                    let mut chars = key_name.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => KeyCode::Char(c),
                        _ => return None,
                    }
                }
            }
        };

        Some(Self { code, mods })
    }

    fn matches(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }
        if self.mods == msg.modifiers {
            return true;
        }
        // Terminals disagree on whether uppercase letters and back-tab carry
        // SHIFT.
        matches!(self.code, KeyCode::Char(_) | KeyCode::BackTab)
            && self.mods.difference(KeyModifiers::SHIFT)
                == msg.modifiers.difference(KeyModifiers::SHIFT)
    }
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, mods): (KeyCode, KeyModifiers)) -> Self {
        Self::new(code, mods)
    }
}

/// Help text attached to a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key label, e.g. `"←/h"`.
    pub key: String,
    /// What the binding does, e.g. `"prev"`.
    pub desc: String,
}

/// A set of key presses that trigger one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from anything convertible into key presses.
    ///
    /// ```rust
    /// use bubbletea_toggle_group::key::Binding;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let b = Binding::new(vec![(KeyCode::Char('s'), KeyModifiers::CONTROL)]);
    /// assert_eq!(b.keys().len(), 1);
    /// ```
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text (builder pattern).
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.set_help(key, desc);
        self
    }

    /// Disables the binding (builder pattern).
    pub fn with_disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Replaces the key presses of this binding.
    pub fn set_keys<K: Into<KeyPress>>(&mut self, keys: Vec<K>) {
        self.keys = keys.into_iter().map(Into::into).collect();
    }

    /// Sets the help text.
    pub fn set_help(&mut self, key: impl Into<String>, desc: impl Into<String>) {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// The key presses of this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// The help text of this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// A binding is enabled when it is not disabled and has at least one key.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Removes all keys and help text, leaving an inert binding.
    pub fn unbind(&mut self) {
        self.keys.clear();
        self.help = Help::default();
    }

    /// Reports whether a key message triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|kp| kp.matches(msg))
    }
}

/// A functional option applied by [`new_binding`].
pub type BindingOpt = Box<dyn FnOnce(&mut Binding)>;

/// Creates a binding from functional options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        opt(&mut binding);
    }
    binding
}

/// Sets keys from key codes or tuples.
pub fn with_keys<K: Into<KeyPress> + 'static>(keys: Vec<K>) -> BindingOpt {
    Box::new(move |b: &mut Binding| b.set_keys(keys))
}

/// Sets keys from key names; names that do not parse are skipped.
pub fn with_keys_str(names: &[&str]) -> BindingOpt {
    let keys: Vec<KeyPress> = names.iter().filter_map(|n| KeyPress::parse(n)).collect();
    Box::new(move |b: &mut Binding| b.keys = keys)
}

/// Sets the help text.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    let key = key.to_string();
    let desc = desc.to_string();
    Box::new(move |b: &mut Binding| b.set_help(key, desc))
}

/// Starts the binding disabled.
pub fn with_disabled() -> BindingOpt {
    Box::new(|b: &mut Binding| b.disabled = true)
}

/// Reports whether the message matches any of the bindings.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

/// Reports whether the message matches the binding.
pub fn matches_binding(msg: &KeyMsg, binding: &Binding) -> bool {
    binding.matches(msg)
}

/// Implemented by key map structs so their bindings can be shown as help.
pub trait KeyMap {
    /// Bindings for a compact single-line help view.
    fn short_help(&self) -> Vec<&Binding>;

    /// Bindings grouped into columns for an expanded help view.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}
