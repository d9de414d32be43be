//! Core types for the toggle group: orientation, item identity, generator
//! aliases, and the value-change event and message.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// How the buttons of a group are laid out.
///
/// Stacked groups draw only the selected button; re-clicking it cycles to the
/// next item instead of clearing the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Buttons side by side.
    #[default]
    Horizontal,
    /// Buttons one below the other, stretched to the same width.
    Vertical,
    /// One visible button that cycles through the items.
    Stacked,
}

impl Orientation {
    /// Suffix appended to the positional class names of the buttons.
    ///
    /// ```rust
    /// use bubbletea_toggle_group::togglegroup::Orientation;
    ///
    /// assert_eq!(Orientation::Horizontal.style_postfix(), "h");
    /// assert_eq!(Orientation::Vertical.style_postfix(), "v");
    /// assert_eq!(Orientation::Stacked.style_postfix(), "s");
    /// ```
    pub fn style_postfix(self) -> &'static str {
        match self {
            Orientation::Horizontal => "h",
            Orientation::Vertical => "v",
            Orientation::Stacked => "s",
        }
    }

    /// Horizontal groups join buttons side by side; the others stack them.
    pub fn is_horizontal(self) -> bool {
        self == Orientation::Horizontal
    }
}

/// Identity of an item, used to find its button and to decide whether a
/// selection change is a real change.
///
/// Two items with the same id are the same item as far as the group is
/// concerned, even when they are not equal values.
///
/// ```rust
/// use bubbletea_toggle_group::togglegroup::ItemId;
///
/// assert_eq!(ItemId::of("apple"), ItemId::of("apple"));
/// assert_ne!(ItemId::of("apple"), ItemId::of("pear"));
/// assert_eq!(ItemId::from_raw(7).raw(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    /// Derives an id by hashing a value.
    pub fn of<H: Hash + ?Sized>(value: &H) -> Self {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        ItemId(hasher.finish())
    }

    /// Wraps an id the caller already has, e.g. a database key.
    pub fn from_raw(raw: u64) -> Self {
        ItemId(raw)
    }

    /// The numeric value of the id.
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Produces the text shown on an item's button.
pub type LabelGenerator<T> = Box<dyn Fn(&T) -> String + Send + Sync>;

/// Produces a string for an item; blank results mean "nothing". Used for
/// icons, tooltips and the selected-item class name.
pub type TextGenerator<T> = Box<dyn Fn(&T) -> String + Send + Sync>;

/// Decides whether an item's button may be clicked.
pub type ItemPredicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Derives the identity of an item.
pub type IdGenerator<T> = Box<dyn Fn(&T) -> ItemId + Send + Sync>;

/// Maps an item to its sort key.
pub type OrderProvider<T> = Box<dyn Fn(&T) -> i32 + Send + Sync>;

/// Called for every selection change.
pub type ValueChangeListener<T> = Box<dyn FnMut(&ValueChangeEvent<T>) + Send + Sync>;

/// Handle returned when registering a listener, used to remove it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(super) usize);

/// A change of the selected value.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueChangeEvent<T> {
    /// Selection before the change.
    pub old_value: Option<T>,
    /// Selection after the change.
    pub value: Option<T>,
    /// `true` when the change came from a click or key press rather than
    /// from [`set_value`](super::Model::set_value).
    pub from_client: bool,
}

/// Message delivered to the application when a key press changes the
/// selection of a group.
///
/// `id` is the process-unique id of the group and `group_id` the id the
/// application assigned with [`set_id`](super::Model::set_id), if any.
#[derive(Debug, Clone)]
pub struct ValueChangedMsg<T> {
    /// Unique id of the group that changed.
    pub id: usize,
    /// Caller-assigned id of the group.
    pub group_id: Option<String>,
    /// Selection before the change.
    pub old_value: Option<T>,
    /// Selection after the change.
    pub value: Option<T>,
    /// Whether the change came from user interaction.
    pub from_client: bool,
}

/// Returns `true` when a generated string carries no information.
pub(super) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
