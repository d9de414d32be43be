//! Selection state: programmatic value changes, click handling, the selected
//! marker, change listeners, and keyboard focus movement.

use super::button::ButtonVariant;
use super::error::ToggleGroupError;
use super::model::Model;
use super::types::{
    is_blank, ListenerId, Orientation, ValueChangeEvent, ValueChangeListener, ValueChangedMsg,
};
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use tracing::{debug, trace, warn};

impl<T> Model<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// The selected item, if any.
    pub fn value(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    /// Alias of [`value`](Self::value).
    pub fn selected(&self) -> Option<&T> {
        self.value()
    }

    /// Index of the selected item's button, if the selected item is shown.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected.as_ref().and_then(|v| self.index_of(v))
    }

    /// Selects an item, or clears the selection with `None`.
    ///
    /// Listeners are notified only when the identity of the selection
    /// changes. The change is reported with `from_client = false`.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleGroupError::NoItems`] when no items have been set.
    ///
    /// ```rust
    /// use bubbletea_toggle_group::togglegroup::{Model, ToggleGroupError};
    ///
    /// let mut group: Model<&str> = Model::new();
    /// assert_eq!(group.set_value(Some("A")), Err(ToggleGroupError::NoItems));
    ///
    /// group.set_items(vec!["A", "B"]);
    /// assert!(group.set_value(Some("A")).is_ok());
    /// ```
    pub fn set_value(&mut self, value: Option<T>) -> Result<(), ToggleGroupError> {
        if self.items.is_empty() {
            return Err(ToggleGroupError::NoItems);
        }
        self.apply_value(value, false);
        Ok(())
    }

    /// Clears the selection. Does nothing on a group without items.
    pub fn clear(&mut self) {
        if !self.items.is_empty() {
            self.apply_value(None, false);
        }
    }

    /// Registers a listener called on every selection change.
    pub fn add_value_change_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&ValueChangeEvent<T>) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners
            .push((id, Box::new(listener) as ValueChangeListener<T>));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn remove_value_change_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Clicks the button at `index` as if the user had pressed it.
    ///
    /// Ignored while read-only, on disabled buttons, and for indices out of
    /// range. Clicking the selected item clears the selection when the group
    /// is toggleable, or advances to the next enabled item when it is stacked.
    ///
    /// Returns a command delivering a [`ValueChangedMsg`] when the selection
    /// changed.
    pub fn click(&mut self, index: usize) -> Option<Cmd> {
        let event = self.handle_click(index)?;
        Some(self.value_changed_cmd(event))
    }

    fn handle_click(&mut self, index: usize) -> Option<ValueChangeEvent<T>> {
        if self.read_only {
            trace!(target: "bubbletea_toggle_group", group = self.id, index, "click ignored, read-only");
            return None;
        }
        let Some(button) = self.buttons.get(index) else {
            warn!(
                target: "bubbletea_toggle_group",
                group = self.id,
                index,
                buttons = self.buttons.len(),
                "click on a button that does not exist"
            );
            return None;
        };
        if !button.is_enabled() {
            trace!(target: "bubbletea_toggle_group", group = self.id, index, "click ignored, button disabled");
            return None;
        }

        let clicked = self.items[index].clone();
        if self.toggleable {
            let clicked_id = (self.item_id_generator)(&clicked);
            let previous_id = self.selected.as_ref().map(|v| (self.item_id_generator)(v));
            if previous_id == Some(clicked_id) {
                let next = if self.orientation == Orientation::Stacked {
                    // Stay put when no other item can be shown.
                    let next_index = self.enabled_after_wrapping(index)?;
                    Some(self.items[next_index].clone())
                } else {
                    None
                };
                return self.apply_value(next, true);
            }
        }
        self.apply_value(Some(clicked), true)
    }

    /// The single place the selection changes. Moves the selected marker,
    /// then notifies listeners if the identity changed.
    pub(super) fn apply_value(
        &mut self,
        value: Option<T>,
        from_client: bool,
    ) -> Option<ValueChangeEvent<T>> {
        let old_value = std::mem::replace(&mut self.selected, value.clone());
        if let Some(old) = &old_value {
            self.unmark_selected(old);
        }
        if let Some(new) = &value {
            self.mark_selected(new);
        }
        if self.orientation == Orientation::Stacked {
            if let Some(index) = self.selected_index() {
                self.cursor = index;
            }
        }

        let old_id = old_value.as_ref().map(|v| (self.item_id_generator)(v));
        let new_id = value.as_ref().map(|v| (self.item_id_generator)(v));
        if old_id == new_id {
            return None;
        }

        debug!(
            target: "bubbletea_toggle_group",
            group = self.id,
            old = ?old_id,
            new = ?new_id,
            from_client,
            "value changed"
        );

        let event = ValueChangeEvent {
            old_value,
            value,
            from_client,
        };
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
        Some(event)
    }

    pub(super) fn mark_selected(&mut self, item: &T) {
        let Some(index) = self.index_of(item) else {
            return;
        };
        let class_name = (self.selected_item_class_name_generator)(item);
        let button = &mut self.buttons[index];
        if is_blank(&class_name) {
            button.add_theme_variant(ButtonVariant::Primary);
        } else {
            button.add_class_name(&class_name);
        }
    }

    fn unmark_selected(&mut self, item: &T) {
        let Some(index) = self.index_of(item) else {
            return;
        };
        let class_name = (self.selected_item_class_name_generator)(item);
        let button = &mut self.buttons[index];
        if is_blank(&class_name) {
            button.remove_theme_variant(ButtonVariant::Primary);
        } else {
            button.remove_class_name(&class_name);
        }
    }

    fn value_changed_cmd(&self, event: ValueChangeEvent<T>) -> Cmd {
        let msg = ValueChangedMsg {
            id: self.id,
            group_id: self.group_id.clone(),
            old_value: event.old_value,
            value: event.value,
            from_client: event.from_client,
        };
        Box::pin(async move { Some(Box::new(msg) as Msg) })
    }

    /// Index of the button that has keyboard focus.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Handles a message. Only key presses are handled, and only while the
    /// group is focused.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        let key_msg = msg.downcast_ref::<KeyMsg>()?;
        self.handle_key(key_msg)
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if !self.focus || self.buttons.is_empty() {
            return None;
        }

        if self.keymap.select.matches(key_msg) {
            return self.click(self.cursor);
        }

        // A stacked group shows one button; the cursor follows the selection.
        if self.orientation == Orientation::Stacked {
            return None;
        }

        if self.keymap.prev.matches(key_msg) {
            if let Some(i) = self.enabled_before(self.cursor) {
                self.cursor = i;
            }
        } else if self.keymap.next.matches(key_msg) {
            if let Some(i) = self.enabled_after(self.cursor) {
                self.cursor = i;
            }
        } else if self.keymap.first.matches(key_msg) {
            if let Some(i) = self.first_enabled() {
                self.cursor = i;
            }
        } else if self.keymap.last.matches(key_msg) {
            if let Some(i) = self.buttons.iter().rposition(|b| b.is_enabled()) {
                self.cursor = i;
            }
        }
        None
    }

    fn enabled_before(&self, index: usize) -> Option<usize> {
        (0..index).rev().find(|&i| self.buttons[i].is_enabled())
    }

    fn enabled_after(&self, index: usize) -> Option<usize> {
        (index + 1..self.buttons.len()).find(|&i| self.buttons[i].is_enabled())
    }

    fn enabled_after_wrapping(&self, index: usize) -> Option<usize> {
        let len = self.buttons.len();
        (1..len)
            .map(|step| (index + step) % len)
            .find(|&i| self.buttons[i].is_enabled())
    }

    pub(super) fn first_enabled(&self) -> Option<usize> {
        self.buttons.iter().position(|b| b.is_enabled())
    }

    /// Puts the cursor on the selected button, or the first enabled one.
    pub(super) fn reset_cursor(&mut self) {
        self.cursor = self
            .selected_index()
            .or_else(|| self.first_enabled())
            .unwrap_or(0);
    }

    pub(super) fn clamp_cursor(&mut self) {
        if self.orientation == Orientation::Stacked {
            self.cursor = self.selected_index().unwrap_or(0);
        } else if self.cursor >= self.buttons.len() {
            self.cursor = self.buttons.len().saturating_sub(1);
        }
    }
}
