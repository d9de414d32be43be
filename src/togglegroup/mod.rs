//! Toggle button group: a row or column of buttons where at most one item is
//! selected.
//!
//! This module exposes a generic `Model<T>` plus supporting types:
//! - `Orientation`: horizontal, vertical, or stacked layout
//! - `ItemId`: identity of an item, derived by a pluggable id generator
//! - `Button`: the button generated for each item
//! - Submodules `keys` and `style` for key bindings and the style sheet
//!
//! ## Selection
//!
//! The selection is `Option<T>` and only changes through
//! [`Model::set_value`] and clicks. Listeners and change messages are only
//! produced when the identity of the selection changes.
//!
//! Clicking an item selects it. Clicking the selected item again:
//! - clears the selection when the group is toggleable (the default),
//! - advances to the next enabled item, wrapping around, when the group is
//!   stacked,
//! - does nothing when the group is not toggleable.
//!
//! Read-only groups ignore clicks; disabled groups are also read-only and
//! draw every button disabled.
//!
//! ## Customization
//!
//! Labels, icons, tooltips, per-item enablement, identity, sort order and the
//! class applied to the selected button all come from caller-supplied
//! closures. Every change to one of them regenerates the buttons; the
//! selection and its marker survive the rebuild.
//!
//! ## Example
//!
//! ```rust
//! use bubbletea_toggle_group::togglegroup::{Model, Orientation};
//! use std::sync::{Arc, Mutex};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum Status { NotProcessed, Declined, Approved }
//!
//! impl std::fmt::Display for Status {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         let s = match self {
//!             Status::NotProcessed => "Not processed",
//!             Status::Declined => "Declined",
//!             Status::Approved => "Approved",
//!         };
//!         f.write_str(s)
//!     }
//! }
//!
//! let mut group = Model::with_label_and_items(
//!     "Status",
//!     vec![Status::NotProcessed, Status::Declined, Status::Approved],
//! )
//! .with_orientation(Orientation::Vertical);
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! group.add_value_change_listener(move |event| {
//!     sink.lock().unwrap().push(event.value);
//! });
//!
//! group.click(2);
//! assert_eq!(group.value(), Some(&Status::Approved));
//!
//! group.set_item_order_provider(|s: &Status| match s {
//!     Status::Approved => 0,
//!     Status::NotProcessed => 1,
//!     Status::Declined => 2,
//! });
//! assert_eq!(group.button_labels(), vec!["Approved", "Not processed", "Declined"]);
//! assert_eq!(group.value(), Some(&Status::Approved));
//! assert_eq!(*seen.lock().unwrap(), vec![Some(Status::Approved)]);
//! ```

mod button;
mod error;
pub mod keys;
mod model;
mod rendering;
mod selection;
pub mod style;
mod types;

#[cfg(test)]
mod tests;

pub use button::{Button, ButtonVariant};
pub use error::ToggleGroupError;
pub use keys::ToggleGroupKeyMap;
pub use model::Model;
pub use style::ToggleGroupStyles;
pub use types::{
    IdGenerator, ItemId, ItemPredicate, LabelGenerator, ListenerId, OrderProvider, Orientation,
    TextGenerator, ValueChangeEvent, ValueChangeListener, ValueChangedMsg,
};

use crate::key;
use crate::Component;
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use std::fmt::Display;
use std::hash::Hash;

impl<T> key::KeyMap for Model<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn short_help(&self) -> Vec<&key::Binding> {
        if self.orientation == Orientation::Stacked {
            return vec![&self.keymap.select];
        }
        vec![&self.keymap.prev, &self.keymap.next, &self.keymap.select]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        if self.orientation == Orientation::Stacked {
            return vec![vec![&self.keymap.select]];
        }
        vec![
            vec![
                &self.keymap.prev,
                &self.keymap.next,
                &self.keymap.first,
                &self.keymap.last,
            ],
            vec![&self.keymap.select],
        ]
    }
}

impl<T> Component for Model<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        self.reset_cursor();
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

impl<T> BubbleTeaModel for Model<T>
where
    T: Clone + Display + Hash + Send + Sync + 'static,
{
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        Model::update(self, &msg)
    }

    fn view(&self) -> String {
        Model::view(self)
    }
}
