//! Styling for toggle groups.
//!
//! Buttons carry class names and theme variants rather than styles. When a
//! group is rendered, each button's look is resolved from
//! [`ToggleGroupStyles`]:
//!
//! 1. a style registered for one of the button's class names (classes added
//!    later win over earlier ones),
//! 2. otherwise `primary` when the button has the primary variant,
//! 3. otherwise `disabled` when the button is disabled,
//! 4. otherwise `button`.
//!
//! The focused button is additionally underlined.
//!
//! ## Class names
//!
//! Every button gets a base class and one positional class, suffixed with
//! the orientation (`h`, `v` or `s`):
//!
//! - `toggle-button-group-button-{o}`
//! - `toggle-button-group-first-button-{o}`
//! - `toggle-button-group-middle-button-{o}`
//! - `toggle-button-group-last-button-{o}`
//!
//! Registering a style for one of these classes restyles that position for
//! every group using the style sheet.
//!
//! ## Example
//!
//! ```rust
//! use bubbletea_toggle_group::togglegroup::ToggleGroupStyles;
//! use lipgloss_extras::prelude::*;
//!
//! let styles = ToggleGroupStyles::default()
//!     .with_class_style(
//!         "status-approved",
//!         Style::new().background(Color::from("28")).foreground(Color::from("230")),
//!     );
//! assert!(styles.class_style("status-approved").is_some());
//! ```

use super::button::{Button, ButtonVariant};
use super::types::Orientation;
use lipgloss_extras::prelude::*;
use std::collections::HashMap;

/// Class name carried by every toggle group.
pub const GROUP_CLASS: &str = "toggle-button-group";

/// Base class name of every button in a group with the given orientation.
pub fn button_class(orientation: Orientation) -> String {
    format!("{}-button-{}", GROUP_CLASS, orientation.style_postfix())
}

/// Class name of the first button.
pub fn first_button_class(orientation: Orientation) -> String {
    format!("{}-first-button-{}", GROUP_CLASS, orientation.style_postfix())
}

/// Class name of buttons between the first and the last.
pub fn middle_button_class(orientation: Orientation) -> String {
    format!("{}-middle-button-{}", GROUP_CLASS, orientation.style_postfix())
}

/// Class name of the last button.
pub fn last_button_class(orientation: Orientation) -> String {
    format!("{}-last-button-{}", GROUP_CLASS, orientation.style_postfix())
}

/// Style sheet for toggle groups.
#[derive(Debug, Clone)]
pub struct ToggleGroupStyles {
    /// Caption above the buttons.
    pub label: Style,
    /// Regular button.
    pub button: Style,
    /// Button with the primary variant (the default selected marker).
    pub primary: Style,
    /// Disabled button.
    pub disabled: Style,
    /// Tooltip line below the buttons.
    pub tooltip: Style,
    class_styles: HashMap<String, Style>,
}

impl Default for ToggleGroupStyles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };

        Self {
            label: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            button: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#1a1a1a",
                    Dark: "#dddddd",
                })
                .background(AdaptiveColor {
                    Light: "#E4E4E4",
                    Dark: "#3A3A3A",
                })
                .padding(0, 1, 0, 1),
            primary: Style::new()
                .foreground(Color::from("230"))
                .background(Color::from("62"))
                .bold(true)
                .padding(0, 1, 0, 1),
            disabled: Style::new()
                .foreground(subdued)
                .background(AdaptiveColor {
                    Light: "#F2F2F2",
                    Dark: "#262626",
                })
                .padding(0, 1, 0, 1),
            tooltip: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            class_styles: HashMap::new(),
        }
    }
}

impl ToggleGroupStyles {
    /// Registers a style for a class name (builder pattern).
    pub fn with_class_style(mut self, class_name: impl Into<String>, style: Style) -> Self {
        self.set_class_style(class_name, style);
        self
    }

    /// Registers or replaces the style for a class name.
    pub fn set_class_style(&mut self, class_name: impl Into<String>, style: Style) {
        self.class_styles.insert(class_name.into(), style);
    }

    /// Removes the style registered for a class name.
    pub fn remove_class_style(&mut self, class_name: &str) -> Option<Style> {
        self.class_styles.remove(class_name)
    }

    /// The style registered for a class name, if any.
    pub fn class_style(&self, class_name: &str) -> Option<&Style> {
        self.class_styles.get(class_name)
    }

    /// Picks the style a button is drawn with.
    pub fn resolve(&self, button: &Button, focused: bool) -> Style {
        let registered = button
            .class_names()
            .iter()
            .rev()
            .find_map(|c| self.class_styles.get(c));

        let style = match registered {
            Some(style) => style.clone(),
            None if button.has_theme_variant(ButtonVariant::Primary) => self.primary.clone(),
            None if !button.is_enabled() => self.disabled.clone(),
            None => self.button.clone(),
        };

        if focused {
            style.underline(true)
        } else {
            style
        }
    }
}
