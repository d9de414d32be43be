//! Rendering of toggle groups.
//!
//! The view is made of up to three sections joined by newlines:
//!
//! 1. **Caption**: the group label, when set
//! 2. **Buttons**: side by side for horizontal groups, one per line for
//!    vertical groups, and only the selected button for stacked groups
//! 3. **Tooltip**: while focused, the focused button's tooltip or else the
//!    group tooltip
//!
//! Vertical and stacked buttons are stretched to the widest label so they
//! line up. Horizontal buttons keep their natural width unless the group has
//! a width, in which case the free space is shared between them.

use super::model::Model;
use super::types::Orientation;
use lipgloss_extras::lipgloss;
use unicode_width::UnicodeWidthStr;

// Left and right padding of the default button styles.
const BUTTON_PADDING: usize = 2;

impl<T> Model<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Renders the group.
    ///
    /// ```rust
    /// use bubbletea_toggle_group::togglegroup::Model;
    /// use lipgloss_extras::lipgloss;
    ///
    /// let group = Model::with_label_and_items("Answer", vec!["Yes", "No"]);
    /// let plain = lipgloss::strip_ansi(&group.view());
    /// assert!(plain.starts_with("Answer"));
    /// assert!(plain.contains("Yes"));
    /// assert!(plain.contains("No"));
    /// ```
    pub fn view(&self) -> String {
        let mut sections = Vec::new();

        if !self.label.is_empty() {
            sections.push(self.styles.label.render(&self.label));
        }

        let buttons = self.view_buttons();
        if !buttons.is_empty() {
            sections.push(buttons);
        }

        if let Some(tooltip) = self.active_tooltip() {
            sections.push(self.styles.tooltip.render(tooltip));
        }

        sections.join("\n")
    }

    /// Indices of the buttons that are drawn.
    pub fn visible_buttons(&self) -> Vec<usize> {
        if self.buttons.is_empty() {
            return Vec::new();
        }
        match self.orientation {
            Orientation::Stacked => vec![self.selected_index().unwrap_or(0)],
            _ => (0..self.buttons.len()).collect(),
        }
    }

    fn view_buttons(&self) -> String {
        let visible = self.visible_buttons();
        if visible.is_empty() {
            return String::new();
        }

        let widths = self.cell_widths(&visible);
        let rendered: Vec<String> = visible
            .iter()
            .zip(widths)
            .map(|(&i, width)| {
                let button = &self.buttons[i];
                let focused = self.focus && i == self.cursor;
                let text = center(&button.text(), width);
                self.styles.resolve(button, focused).render(&text)
            })
            .collect();
        let parts: Vec<&str> = rendered.iter().map(String::as_str).collect();

        if self.orientation.is_horizontal() {
            lipgloss::join_horizontal(lipgloss::TOP, &parts)
        } else {
            lipgloss::join_vertical(lipgloss::LEFT, &parts)
        }
    }

    /// Text width of each visible button before padding.
    fn cell_widths(&self, visible: &[usize]) -> Vec<usize> {
        let natural: Vec<usize> = visible
            .iter()
            .map(|&i| self.buttons[i].text().width())
            .collect();

        match self.orientation {
            Orientation::Vertical | Orientation::Stacked => {
                // Stacked buttons take the widest label so cycling does not
                // change the width of the group.
                let widest = self
                    .buttons
                    .iter()
                    .map(|b| b.text().width())
                    .max()
                    .unwrap_or(0);
                vec![widest; visible.len()]
            }
            Orientation::Horizontal => {
                let used: usize = natural.iter().map(|w| w + BUTTON_PADDING).sum();
                if self.width <= used {
                    return natural;
                }
                let free = self.width - used;
                let share = free / natural.len();
                let remainder = free % natural.len();
                natural
                    .iter()
                    .enumerate()
                    .map(|(i, w)| w + share + usize::from(i < remainder))
                    .collect()
            }
        }
    }

    fn active_tooltip(&self) -> Option<&str> {
        if !self.focus {
            return None;
        }
        self.buttons
            .get(self.cursor)
            .and_then(|b| b.tooltip())
            .or(self.tooltip.as_deref())
    }
}

fn center(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let left = (width - text_width) / 2;
    let right = width - text_width - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}
