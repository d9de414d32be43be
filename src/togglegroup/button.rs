//! The buttons generated for each item of a group.
//!
//! A [`Button`] carries everything the renderer needs: label, icon, tooltip,
//! enabled state, and the class names and theme variants that select its
//! style from [`ToggleGroupStyles`](super::ToggleGroupStyles).

/// Built-in visual variants of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ButtonVariant {
    /// Highlighted button; marks the selected item unless a custom class is
    /// used instead.
    Primary,
}

/// A button generated for one item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Button {
    label: String,
    icon: Option<String>,
    tooltip: Option<String>,
    enabled: bool,
    class_names: Vec<String>,
    variants: Vec<ButtonVariant>,
}

impl Button {
    /// Creates an enabled button with the given label.
    ///
    /// ```rust
    /// use bubbletea_toggle_group::togglegroup::Button;
    ///
    /// let button = Button::new("Pasta");
    /// assert_eq!(button.label(), "Pasta");
    /// assert!(button.is_enabled());
    /// ```
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            enabled: true,
            ..Default::default()
        }
    }

    /// The button label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The icon glyph, if any.
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// The tooltip text, if any.
    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    /// Whether the button reacts to clicks.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Class names in the order they were added.
    pub fn class_names(&self) -> &[String] {
        &self.class_names
    }

    /// Theme variants currently applied.
    pub fn theme_variants(&self) -> &[ButtonVariant] {
        &self.variants
    }

    pub(super) fn set_icon(&mut self, icon: Option<String>) {
        self.icon = icon;
    }

    pub(super) fn set_tooltip(&mut self, tooltip: Option<String>) {
        self.tooltip = tooltip;
    }

    pub(super) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Adds a class name; adding one that is already present does nothing.
    pub fn add_class_name(&mut self, class_name: &str) {
        if !self.has_class_name(class_name) {
            self.class_names.push(class_name.to_string());
        }
    }

    /// Removes a class name if present.
    pub fn remove_class_name(&mut self, class_name: &str) {
        self.class_names.retain(|c| c != class_name);
    }

    /// Reports whether the class name is present.
    pub fn has_class_name(&self, class_name: &str) -> bool {
        self.class_names.iter().any(|c| c == class_name)
    }

    /// Adds a theme variant; duplicates are ignored.
    pub fn add_theme_variant(&mut self, variant: ButtonVariant) {
        if !self.has_theme_variant(variant) {
            self.variants.push(variant);
        }
    }

    /// Removes a theme variant if present.
    pub fn remove_theme_variant(&mut self, variant: ButtonVariant) {
        self.variants.retain(|v| *v != variant);
    }

    /// Reports whether the theme variant is present.
    pub fn has_theme_variant(&self, variant: ButtonVariant) -> bool {
        self.variants.contains(&variant)
    }

    /// Text drawn inside the button: the icon followed by the label.
    ///
    /// ```rust
    /// use bubbletea_toggle_group::togglegroup::Button;
    ///
    /// assert_eq!(Button::new("Left").text(), "Left");
    /// ```
    pub fn text(&self) -> String {
        match (self.icon.as_deref(), self.label.is_empty()) {
            (Some(icon), true) => icon.to_string(),
            (Some(icon), false) => format!("{} {}", icon, self.label),
            (None, _) => self.label.clone(),
        }
    }
}
