//! The toggle group model: construction, configuration, and the rebuild that
//! regenerates buttons and bookkeeping after every structural change.

use super::button::Button;
use super::keys::ToggleGroupKeyMap;
use super::style::{
    button_class, first_button_class, last_button_class, middle_button_class, ToggleGroupStyles,
};
use super::types::{
    is_blank, IdGenerator, ItemId, ItemPredicate, LabelGenerator, ListenerId, OrderProvider,
    Orientation, TextGenerator, ValueChangeListener,
};
use std::collections::HashMap;
use std::fmt;
use std::fmt::Display;
use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

static LAST_ID: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::Relaxed) + 1
}

/// A group of buttons, one per item, with at most one selected item.
///
/// Items are sorted before they are drawn, either by the order provider or
/// by the order they were given in. `buttons()[i]` always belongs to
/// `items()[i]`.
///
/// # Examples
///
/// ```rust
/// use bubbletea_toggle_group::togglegroup::Model;
///
/// let mut group = Model::with_label_and_items("Menu", vec!["Pasta", "Pizza", "Salad"]);
/// group.set_value(Some("Pizza")).unwrap();
/// assert_eq!(group.value(), Some(&"Pizza"));
///
/// // Clicking the selected item again clears it.
/// group.click(1);
/// assert_eq!(group.value(), None);
/// ```
///
/// Items that are neither `Display` nor `Hash` need their own label and id
/// generators:
///
/// ```rust
/// use bubbletea_toggle_group::togglegroup::{ItemId, Model};
///
/// #[derive(Clone)]
/// struct Dessert {
///     name: &'static str,
///     available: u32,
/// }
///
/// let mut group: Model<Dessert> = Model::with_generators(
///     |d: &Dessert| format!("{} ({})", d.name, d.available),
///     |d: &Dessert| ItemId::of(d.name),
/// );
/// group.set_item_enabled_provider(|d: &Dessert| d.available > 0);
/// group.set_items(vec![
///     Dessert { name: "Jelly", available: 100 },
///     Dessert { name: "Coffee", available: 0 },
/// ]);
/// assert!(group.buttons()[0].is_enabled());
/// assert!(!group.buttons()[1].is_enabled());
/// ```
pub struct Model<T> {
    pub(super) id: usize,
    pub(super) group_id: Option<String>,
    pub(super) label: String,
    pub(super) tooltip: Option<String>,
    pub(super) width: usize,

    pub(super) items: Vec<T>,
    pub(super) selected: Option<T>,

    // Generators
    pub(super) item_label_generator: LabelGenerator<T>,
    pub(super) selected_item_class_name_generator: TextGenerator<T>,
    pub(super) item_icon_generator: Option<TextGenerator<T>>,
    pub(super) item_tooltip_text_generator: Option<TextGenerator<T>>,
    pub(super) item_enabled_provider: ItemPredicate<T>,
    pub(super) item_id_generator: IdGenerator<T>,
    pub(super) item_order_provider: Option<OrderProvider<T>>,

    // Flags
    pub(super) enabled: bool,
    pub(super) read_only: bool,
    pub(super) toggleable: bool,
    pub(super) orientation: Orientation,

    // Bookkeeping, rebuilt together by `rebuild`
    pub(super) original_order: HashMap<ItemId, usize>,
    pub(super) id_to_button: HashMap<ItemId, usize>,
    pub(super) buttons: Vec<Button>,

    // Keyboard focus
    pub(super) focus: bool,
    pub(super) cursor: usize,

    pub(super) listeners: Vec<(ListenerId, ValueChangeListener<T>)>,
    pub(super) next_listener: usize,

    /// Key bindings.
    pub keymap: ToggleGroupKeyMap,
    /// Style sheet.
    pub styles: ToggleGroupStyles,
}

impl<T> fmt::Debug for Model<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("id", &self.id)
            .field("group_id", &self.group_id)
            .field("label", &self.label)
            .field("items", &self.items.len())
            .field("buttons", &self.buttons)
            .field("enabled", &self.enabled)
            .field("read_only", &self.read_only)
            .field("toggleable", &self.toggleable)
            .field("orientation", &self.orientation)
            .field("focus", &self.focus)
            .finish_non_exhaustive()
    }
}

impl<T> Model<T>
where
    T: Clone + Display + Hash + Send + Sync + 'static,
{
    /// Creates an empty group. Labels come from `Display` and identity from
    /// `Hash`.
    pub fn new() -> Self {
        Self::with_generators(|item: &T| item.to_string(), |item: &T| ItemId::of(item))
    }

    /// Creates an empty group with a caption.
    pub fn with_label(label: impl Into<String>) -> Self {
        let mut group = Self::new();
        group.label = label.into();
        group
    }

    /// Creates a group showing the given items.
    pub fn with_items(items: Vec<T>) -> Self {
        let mut group = Self::new();
        group.set_items(items);
        group
    }

    /// Creates a group with a caption and items.
    pub fn with_label_and_items(label: impl Into<String>, items: Vec<T>) -> Self {
        let mut group = Self::with_items(items);
        group.label = label.into();
        group
    }

    /// Creates a group with a caption, items, and a label generator.
    pub fn with_label_generator<F>(label: impl Into<String>, items: Vec<T>, generator: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        let mut group = Self::with_label_and_items(label, items);
        group.set_item_label_generator(generator);
        group
    }
}

impl<T> Default for Model<T>
where
    T: Clone + Display + Hash + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Model<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Creates an empty group from a label generator and an id generator.
    pub fn with_generators<L, I>(label_generator: L, id_generator: I) -> Self
    where
        L: Fn(&T) -> String + Send + Sync + 'static,
        I: Fn(&T) -> ItemId + Send + Sync + 'static,
    {
        Self {
            id: next_id(),
            group_id: None,
            label: String::new(),
            tooltip: None,
            width: 0,
            items: Vec::new(),
            selected: None,
            item_label_generator: Box::new(label_generator),
            selected_item_class_name_generator: Box::new(|_: &T| String::new()),
            item_icon_generator: None,
            item_tooltip_text_generator: None,
            item_enabled_provider: Box::new(|_: &T| true),
            item_id_generator: Box::new(id_generator),
            item_order_provider: None,
            enabled: true,
            read_only: false,
            toggleable: true,
            orientation: Orientation::default(),
            original_order: HashMap::new(),
            id_to_button: HashMap::new(),
            buttons: Vec::new(),
            focus: false,
            cursor: 0,
            listeners: Vec::new(),
            next_listener: 0,
            keymap: ToggleGroupKeyMap::default(),
            styles: ToggleGroupStyles::default(),
        }
    }

    /// Sets the orientation (builder pattern).
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.set_orientation(orientation);
        self
    }

    /// Sets whether re-clicking the selection clears it (builder pattern).
    pub fn with_toggleable(mut self, toggleable: bool) -> Self {
        self.toggleable = toggleable;
        self
    }

    /// Sets the style sheet (builder pattern).
    pub fn with_styles(mut self, styles: ToggleGroupStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Process-unique id, carried in [`ValueChangedMsg`](super::ValueChangedMsg).
    pub fn id(&self) -> usize {
        self.id
    }

    /// Caller-assigned id, if any.
    pub fn group_id(&self) -> Option<&str> {
        self.group_id.as_deref()
    }

    /// Assigns an id so the application can tell groups apart in messages.
    pub fn set_id(&mut self, group_id: impl Into<String>) {
        self.group_id = Some(group_id.into());
    }

    /// The caption drawn above the buttons.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Sets the caption.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Tooltip of the whole group, shown while focused when the focused
    /// button has none of its own.
    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    /// Sets the group tooltip; a blank text removes it.
    pub fn set_tooltip(&mut self, tooltip: impl Into<String>) {
        let tooltip = tooltip.into();
        self.tooltip = if is_blank(&tooltip) { None } else { Some(tooltip) };
    }

    /// Width the horizontal layout stretches to, `0` for natural width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Stretches a horizontal group to `width` columns.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
    }

    /// The items in display order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The generated buttons, in the same order as [`items`](Self::items).
    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// Labels of the buttons in display order.
    pub fn button_labels(&self) -> Vec<&str> {
        self.buttons.iter().map(Button::label).collect()
    }

    /// The button of an item, looked up by the item's id.
    pub fn button_for(&self, item: &T) -> Option<&Button> {
        let id = (self.item_id_generator)(item);
        self.id_to_button.get(&id).and_then(|&i| self.buttons.get(i))
    }

    /// Replaces the items. The selection is kept; its marker is re-applied if
    /// the selected item is still present.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.initialize_original_order();
        self.rebuild();
    }

    fn initialize_original_order(&mut self) {
        self.original_order.clear();
        for (i, item) in self.items.iter().enumerate() {
            self.original_order.insert((self.item_id_generator)(item), i);
        }
    }

    /// Sets the generator of button labels.
    pub fn set_item_label_generator<F>(&mut self, generator: F)
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.item_label_generator = Box::new(generator);
        self.rebuild();
    }

    /// Sets the generator of the class name applied to the selected button.
    /// A blank class falls back to the primary variant.
    pub fn set_selected_item_class_name_generator<F>(&mut self, generator: F)
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.selected_item_class_name_generator = Box::new(generator);
        self.rebuild();
    }

    /// Sets the generator of icon glyphs; blank results mean no icon.
    pub fn set_item_icon_generator<F>(&mut self, generator: F)
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.item_icon_generator = Some(Box::new(generator));
        self.rebuild();
    }

    /// Removes the icon generator.
    pub fn clear_item_icon_generator(&mut self) {
        self.item_icon_generator = None;
        self.rebuild();
    }

    /// Sets the generator of per-button tooltips; blank results mean none.
    pub fn set_item_tooltip_text_generator<F>(&mut self, generator: F)
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.item_tooltip_text_generator = Some(Box::new(generator));
        self.rebuild();
    }

    /// Removes the tooltip generator.
    pub fn clear_item_tooltip_text_generator(&mut self) {
        self.item_tooltip_text_generator = None;
        self.rebuild();
    }

    /// Sets the predicate deciding which buttons are enabled. A button is
    /// enabled only if both the group and the predicate allow it.
    pub fn set_item_enabled_provider<F>(&mut self, provider: F)
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.item_enabled_provider = Box::new(provider);
        self.rebuild();
    }

    /// Sets how item identity is derived. Original order is recomputed under
    /// the new identity.
    pub fn set_item_id_generator<F>(&mut self, generator: F)
    where
        F: Fn(&T) -> ItemId + Send + Sync + 'static,
    {
        self.item_id_generator = Box::new(generator);
        self.initialize_original_order();
        self.rebuild();
    }

    /// Sorts items by the key the provider returns instead of insertion order.
    pub fn set_item_order_provider<F>(&mut self, provider: F)
    where
        F: Fn(&T) -> i32 + Send + Sync + 'static,
    {
        self.item_order_provider = Some(Box::new(provider));
        self.rebuild();
    }

    /// Goes back to insertion order.
    pub fn clear_item_order_provider(&mut self) {
        self.item_order_provider = None;
        self.rebuild();
    }

    /// The current orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Changes the orientation and regenerates the buttons.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        self.rebuild();
    }

    /// Whether re-clicking the selection clears it (or cycles, when stacked).
    pub fn is_toggleable(&self) -> bool {
        self.toggleable
    }

    /// Sets whether re-clicking the selection clears it.
    pub fn set_toggleable(&mut self, toggleable: bool) {
        self.toggleable = toggleable;
    }

    /// Whether the group is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables the group. Disabling also makes it read-only and
    /// disables every button; enabling restores each button to what the
    /// enabled provider says.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.read_only = !enabled;
        for (button, item) in self.buttons.iter_mut().zip(&self.items) {
            button.set_enabled(enabled && (self.item_enabled_provider)(item));
        }
    }

    /// Whether clicks are ignored.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Makes the group ignore clicks without disabling its buttons.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Regenerates buttons and all bookkeeping from the current items and
    /// configuration.
    pub(super) fn rebuild(&mut self) {
        self.sort_items();

        let count = self.items.len();
        let buttons: Vec<Button> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let mut button = self.create_button(item);
                self.apply_button_styles(&mut button, i, count);
                button
            })
            .collect();

        self.id_to_button = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| ((self.item_id_generator)(item), i))
            .collect();
        self.buttons = buttons;

        debug!(
            target: "bubbletea_toggle_group",
            group = self.id,
            buttons = count,
            orientation = ?self.orientation,
            "rebuilt toggle group"
        );

        if let Some(selected) = self.selected.clone() {
            self.mark_selected(&selected);
        }
        // A stacked group always shows its value, so it must be one of the items.
        if self.orientation == Orientation::Stacked
            && !self.items.is_empty()
            && self.selected_index().is_none()
        {
            let first = self.first_enabled().unwrap_or(0);
            let item = self.items[first].clone();
            self.apply_value(Some(item), false);
        }

        self.clamp_cursor();
    }

    fn sort_items(&mut self) {
        let provider = &self.item_order_provider;
        let original = &self.original_order;
        let id_generator = &self.item_id_generator;
        // Stable: ties keep their current relative order.
        self.items.sort_by_cached_key(|item| match provider {
            Some(order) => i64::from(order(item)),
            None => original
                .get(&id_generator(item))
                .map_or(i64::MAX, |&i| i as i64),
        });
    }

    fn create_button(&self, item: &T) -> Button {
        let mut button = Button::new((self.item_label_generator)(item));
        button.set_enabled(self.enabled && (self.item_enabled_provider)(item));
        if let Some(generator) = &self.item_icon_generator {
            let icon = generator(item);
            button.set_icon((!is_blank(&icon)).then_some(icon));
        }
        if let Some(generator) = &self.item_tooltip_text_generator {
            let tooltip = generator(item);
            button.set_tooltip((!is_blank(&tooltip)).then_some(tooltip));
        }
        button
    }

    fn apply_button_styles(&self, button: &mut Button, index: usize, count: usize) {
        button.add_class_name(&button_class(self.orientation));
        if index == 0 {
            button.add_class_name(&first_button_class(self.orientation));
        } else if index == count - 1 {
            button.add_class_name(&last_button_class(self.orientation));
        } else {
            button.add_class_name(&middle_button_class(self.orientation));
        }
    }

    pub(super) fn index_of(&self, item: &T) -> Option<usize> {
        self.id_to_button
            .get(&(self.item_id_generator)(item))
            .copied()
    }
}
