#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-toggle-group/")]

//! # bubbletea-toggle-group
//!
//! A toggle button group for terminal applications built with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs): a row, column or
//! stack of buttons, one per item, of which at most one is selected.
//!
//! ## Overview
//!
//! The group is generic over the item type. Labels, icons, tooltips,
//! per-item enablement, identity, sort order and the look of the selected
//! button all come from closures the application supplies, and the buttons
//! are regenerated whenever one of them changes. Like every bubbletea-rs
//! component it follows the Elm Architecture with `update()` and `view()`
//! methods.
//!
//! ## Features
//!
//! - **Three layouts**: horizontal, vertical, and stacked (one visible button
//!   that cycles on click)
//! - **Toggleable selection**: re-clicking the selected button clears it,
//!   unless the group is configured otherwise
//! - **Change notification** through listeners and a `ValueChangedMsg`
//!   delivered by the runtime
//! - **Keyboard navigation** with type-safe key bindings
//! - **Theming** through class-name based styles
//!
//! ## Focus Management
//!
//! The group implements the `Component` trait:
//!
//! ```rust
//! use bubbletea_toggle_group::prelude::*;
//! use bubbletea_rs::Cmd;
//!
//! fn handle_focus<T: Component>(component: &mut T) {
//!     let _cmd: Option<Cmd> = component.focus();
//!     assert!(component.focused());
//!     component.blur();
//!     assert!(!component.focused());
//! }
//!
//! let mut group = ToggleGroup::with_items(vec!["Yes", "No"]);
//! handle_focus(&mut group);
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_toggle_group::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     answer: ToggleGroup<&'static str>,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut answer = ToggleGroup::with_label_and_items("Answer", vec!["Yes", "No"]);
//!         let cmd = answer.focus();
//!         (Self { answer }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(changed) = msg.downcast_ref::<ValueChangedMsg<&'static str>>() {
//!             // react to the new selection
//!             let _ = &changed.value;
//!             return None;
//!         }
//!         self.answer.update(&msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.answer.view()
//!     }
//! }
//! ```
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! bubbletea-toggle-group = "0.1.0"
//! bubbletea-rs = "0.0.7"
//! crossterm = "0.29"
//! ```

pub mod key;
pub mod togglegroup;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// A focused component receives key presses and draws its focus indicator;
/// a blurred one ignores keys.
///
/// ## Examples
///
/// ```rust
/// use bubbletea_toggle_group::prelude::*;
/// use bubbletea_rs::Cmd;
///
/// struct Form {
///     size: ToggleGroup<&'static str>,
///     crust: ToggleGroup<&'static str>,
///     focused: usize,
/// }
///
/// impl Form {
///     fn focus_next(&mut self) -> Option<Cmd> {
///         match self.focused {
///             0 => self.size.blur(),
///             _ => self.crust.blur(),
///         }
///         self.focused = (self.focused + 1) % 2;
///         match self.focused {
///             0 => self.size.focus(),
///             _ => self.crust.focus(),
///         }
///     }
/// }
///
/// let mut form = Form {
///     size: ToggleGroup::with_items(vec!["S", "M", "L"]),
///     crust: ToggleGroup::with_items(vec!["Thin", "Thick"]),
///     focused: 0,
/// };
/// form.size.focus();
/// form.focus_next();
/// assert!(form.crust.focused());
/// assert!(!form.size.focused());
/// ```
pub trait Component {
    /// Sets the component to focused state.
    ///
    /// May return a command for the runtime, for example to start a timer.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred (unfocused) state.
    fn blur(&mut self);

    /// Returns `true` if the component currently receives keyboard input.
    fn focused(&self) -> bool;
}

pub use key::{
    matches, matches_binding, new_binding, with_disabled, with_help, with_keys, with_keys_str,
    Binding, Help as KeyHelp, KeyMap, KeyPress,
};
pub use togglegroup::Model as ToggleGroup;
pub use togglegroup::{
    Button as ToggleButton, ButtonVariant, ItemId, ListenerId, Orientation, ToggleGroupError,
    ToggleGroupKeyMap, ToggleGroupStyles, ValueChangeEvent, ValueChangedMsg,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_toggle_group::prelude::*;
///
/// let mut group = ToggleGroup::with_items(vec!["Left", "Right"])
///     .with_orientation(Orientation::Vertical);
/// group.set_value(Some("Right")).unwrap();
/// assert_eq!(group.selected_index(), Some(1));
/// ```
pub mod prelude {
    pub use crate::key::{
        matches, matches_binding, new_binding, with_disabled, with_help, with_keys,
        with_keys_str, Binding, KeyMap, KeyPress,
    };
    pub use crate::togglegroup::Model as ToggleGroup;
    pub use crate::togglegroup::{
        Button as ToggleButton, ButtonVariant, ItemId, ListenerId, Orientation,
        ToggleGroupError, ToggleGroupKeyMap, ToggleGroupStyles, ValueChangeEvent,
        ValueChangedMsg,
    };
    pub use crate::Component;
}
