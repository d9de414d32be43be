//! Interactive showcase of toggle button groups.
//!
//! `tab`/`shift+tab` move between groups, the arrow keys (or `h`/`l`) move
//! between buttons and `enter`/`space` clicks. Set `TOGGLE_GROUP_LOG` to a
//! file path to record the component's tracing output.

use bubbletea_rs::{quit, Cmd, KeyMsg, Model, Msg, Program};
use bubbletea_toggle_group::key::{self, new_binding, with_help, with_keys_str};
use bubbletea_toggle_group::prelude::*;
use lipgloss_extras::prelude::*;
use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Menu {
    Pasta,
    Pizza,
    Burger,
    Salad,
}

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Menu::Pasta => "PASTA",
            Menu::Pizza => "PIZZA",
            Menu::Burger => "BURGER",
            Menu::Salad => "SALAD",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Status {
    NotProcessed,
    Approved,
    Declined,
}

impl Status {
    fn class_name(&self) -> String {
        let name = match self {
            Status::NotProcessed => "not_processed",
            Status::Approved => "approved",
            Status::Declined => "declined",
        };
        format!("status-{}", name)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::NotProcessed => "NOT_PROCESSED",
            Status::Approved => "APPROVED",
            Status::Declined => "DECLINED",
        };
        f.write_str(s)
    }
}

fn status_label(status: &Status) -> String {
    match status {
        Status::NotProcessed => "Not processed",
        Status::Approved => "Approved",
        Status::Declined => "Declined",
    }
    .to_string()
}

const STATUSES: [Status; 3] = [Status::NotProcessed, Status::Approved, Status::Declined];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Answer {
    Yes,
    No,
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Answer::Yes => "YES",
            Answer::No => "NO",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum TextAlignment {
    Left,
    Center,
    Right,
}

impl fmt::Display for TextAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone)]
struct Dessert {
    name: &'static str,
    available: u32,
}

/// Last value published by each group's change listener, keyed by group id.
type Published = Arc<Mutex<HashMap<String, String>>>;

/// The parts of a group the app drives without knowing its item type.
trait Field: Component {
    fn handle(&mut self, msg: &Msg) -> Option<Cmd>;
    fn render(&self) -> String;
    fn is_interactive(&self) -> bool;
    fn group_key(&self) -> Option<&str>;
    fn bindings(&self) -> Vec<&key::Binding>;
}

impl<T> Field for ToggleGroup<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn handle(&mut self, msg: &Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn render(&self) -> String {
        self.view()
    }

    fn is_interactive(&self) -> bool {
        self.is_enabled()
    }

    fn group_key(&self) -> Option<&str> {
        self.group_id()
    }

    fn bindings(&self) -> Vec<&key::Binding> {
        self.short_help()
    }
}

fn publish<T>(group: &mut ToggleGroup<T>, published: &Published)
where
    T: Clone + fmt::Display + Send + Sync + 'static,
{
    let Some(id) = group.group_id().map(str::to_string) else {
        return;
    };
    let sink = Arc::clone(published);
    group.add_value_change_listener(move |event| {
        let text = event
            .value
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        if let Ok(mut map) = sink.lock() {
            map.insert(id.clone(), text);
        }
    });
}

struct AppKeyMap {
    quit: key::Binding,
    next_group: key::Binding,
    prev_group: key::Binding,
    clear: key::Binding,
    reorder: key::Binding,
}

impl Default for AppKeyMap {
    fn default() -> Self {
        Self {
            quit: new_binding(vec![with_keys_str(&["q", "ctrl+c"]), with_help("q", "quit")]),
            next_group: new_binding(vec![with_keys_str(&["tab"]), with_help("tab", "next group")]),
            prev_group: new_binding(vec![
                with_keys_str(&["shift+tab"]),
                with_help("shift+tab", "prev group"),
            ]),
            clear: new_binding(vec![with_keys_str(&["c"]), with_help("c", "clear menu")]),
            reorder: new_binding(vec![with_keys_str(&["o"]), with_help("o", "toggle order")]),
        }
    }
}

impl KeyMap for AppKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![
            &self.next_group,
            &self.prev_group,
            &self.clear,
            &self.reorder,
            &self.quit,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![self.short_help()]
    }
}

struct App {
    menu_fixed: ToggleGroup<Menu>,
    menu: ToggleGroup<Menu>,
    status_wide: ToggleGroup<Status>,
    direction: ToggleGroup<Direction>,
    answer: ToggleGroup<Answer>,
    grades: ToggleGroup<&'static str>,
    disabled: ToggleGroup<&'static str>,
    desserts: ToggleGroup<Dessert>,
    status_styled: ToggleGroup<Status>,
    status_ordered: ToggleGroup<Status>,
    status_vertical: ToggleGroup<Status>,
    alignment: ToggleGroup<TextAlignment>,
    answer_tooltips: ToggleGroup<Answer>,
    status_stacked: ToggleGroup<Status>,

    stock: Vec<Dessert>,
    custom_order: bool,
    published: Published,
    focused: usize,
    keymap: AppKeyMap,
}

fn status_styles() -> ToggleGroupStyles {
    let selected = |bg: &str| {
        Style::new()
            .foreground(Color::from("230"))
            .background(Color::from(bg))
            .bold(true)
            .padding(0, 1, 0, 1)
    };
    ToggleGroupStyles::default()
        .with_class_style(Status::NotProcessed.class_name(), selected("240"))
        .with_class_style(Status::Approved.class_name(), selected("28"))
        .with_class_style(Status::Declined.class_name(), selected("124"))
}

fn dessert_order(dessert: &Dessert) -> i32 {
    match dessert.name {
        "Jelly" => 0,
        "Ice Cream" => 1,
        "Coffee" => 2,
        "Chocolate Cake" => 3,
        "Quark" => 4,
        _ => 1000,
    }
}

impl App {
    fn new() -> Self {
        let published: Published = Arc::new(Mutex::new(HashMap::new()));
        let menu_items = vec![Menu::Pasta, Menu::Pizza, Menu::Burger, Menu::Salad];

        let mut menu_fixed = ToggleGroup::with_label_and_items(
            "Menu: [toggleable = false] (c clears the selection)",
            menu_items.clone(),
        )
        .with_toggleable(false);
        menu_fixed.set_id("group10");
        publish(&mut menu_fixed, &published);

        let mut menu =
            ToggleGroup::with_label_and_items("Menu: [toggleable = true (default)]", menu_items);
        menu.set_id("group15");
        publish(&mut menu, &published);

        let mut status_wide =
            ToggleGroup::with_label_generator("Status: [full width]", STATUSES.to_vec(), status_label);
        status_wide.set_id("group20");
        status_wide.set_tooltip(
            "Labels for the original values of Status come from the label generator.",
        );
        status_wide.set_width(72);

        let mut direction = ToggleGroup::with_label_and_items(
            "Direction: (icons come from the icon generator)",
            vec![Direction::Up, Direction::Down, Direction::Left, Direction::Right],
        );
        direction.set_id("group30");
        direction.set_item_icon_generator(|d: &Direction| {
            match d {
                Direction::Up => "↑",
                Direction::Down => "↓",
                Direction::Left => "←",
                Direction::Right => "→",
            }
            .to_string()
        });

        let mut answer = ToggleGroup::with_items(vec![Answer::Yes, Answer::No]);
        answer.set_id("group40");
        if let Err(err) = answer.set_value(Some(Answer::Yes)) {
            warn!(target: "toggle_group", %err, "could not preselect answer");
        }

        let mut grades = ToggleGroup::with_label_and_items(
            "Grade: [read-only]",
            vec!["A", "B", "C", "D", "F"],
        );
        grades.set_id("group50");
        grades.set_item_tooltip_text_generator(|grade: &&str| {
            match *grade {
                "A" => "Excellent: 90 - 100",
                "B" => "Good: 80 - 89",
                "C" => "Average: 70 - 79",
                "D" => "Poor: 60 - 69",
                _ => "Failing: 0 - 59",
            }
            .to_string()
        });
        grades.set_tooltip("Grades are calculated on a 0-100 scale.");
        grades.set_read_only(true);
        publish(&mut grades, &published);
        if let Err(err) = grades.set_value(Some("B")) {
            warn!(target: "toggle_group", %err, "could not preselect grade");
        }

        let mut disabled = ToggleGroup::with_label_and_items(
            "Disabled group:",
            vec!["All", "Items", "Are", "Disabled", "Selected"],
        );
        disabled.set_id("group60");
        if let Err(err) = disabled.set_value(Some("Selected")) {
            warn!(target: "toggle_group", %err, "could not preselect disabled group");
        }
        disabled.set_enabled(false);

        let stock = vec![
            Dessert { name: "Jelly", available: 100 },
            Dessert { name: "Ice Cream", available: 50 },
            Dessert { name: "Coffee", available: 0 },
            Dessert { name: "Chocolate Cake", available: 10 },
            Dessert { name: "Quark", available: 0 },
        ];
        let mut desserts: ToggleGroup<Dessert> = ToggleGroup::with_generators(
            |d: &Dessert| format!("{} ({})", d.name, d.available),
            |d: &Dessert| ItemId::of(d.name),
        );
        desserts.set_label("Choose dessert: [unavailable items are disabled]");
        desserts.set_id("group70");
        desserts.set_item_enabled_provider(|d: &Dessert| d.available > 0);
        desserts.set_item_order_provider(dessert_order);
        desserts.set_items(stock.clone());

        let mut status_styled = ToggleGroup::with_label_generator(
            "Status: [custom style for the selected item]",
            STATUSES.to_vec(),
            status_label,
        )
        .with_styles(status_styles());
        status_styled.set_id("group80");
        status_styled.set_selected_item_class_name_generator(Status::class_name);
        if let Err(err) = status_styled.set_value(Some(Status::Approved)) {
            warn!(target: "toggle_group", %err, "could not preselect status");
        }

        let mut status_ordered = ToggleGroup::with_label_generator(
            "Status: [o changes the order of items at runtime]",
            STATUSES.to_vec(),
            status_label,
        )
        .with_styles(status_styles());
        status_ordered.set_id("group90");
        status_ordered.set_selected_item_class_name_generator(Status::class_name);

        let mut status_vertical = ToggleGroup::with_label_and_items(
            "Status: [orientation = vertical]",
            STATUSES.to_vec(),
        )
        .with_orientation(Orientation::Vertical);
        status_vertical.set_id("group100");

        let mut alignment = ToggleGroup::with_label_and_items(
            "Alignment:",
            vec![TextAlignment::Left, TextAlignment::Center, TextAlignment::Right],
        );
        alignment.set_id("group110");
        alignment.set_item_icon_generator(|a: &TextAlignment| {
            match a {
                TextAlignment::Left => "⇤",
                TextAlignment::Center => "⇔",
                TextAlignment::Right => "⇥",
            }
            .to_string()
        });
        alignment.set_item_label_generator(|_: &TextAlignment| String::new());

        let mut answer_tooltips =
            ToggleGroup::with_label_and_items("Answer: (focus to see tooltips)", vec![Answer::Yes, Answer::No]);
        answer_tooltips.set_id("group120");
        if let Err(err) = answer_tooltips.set_value(Some(Answer::No)) {
            warn!(target: "toggle_group", %err, "could not preselect answer");
        }
        answer_tooltips.set_item_tooltip_text_generator(|a: &Answer| match a {
            Answer::Yes => "Answer is yes".to_string(),
            Answer::No => "Answer is no".to_string(),
        });

        let mut status_stacked = ToggleGroup::with_label_generator(
            "Status: [orientation = stacked] (enter cycles)",
            STATUSES.to_vec(),
            status_label,
        )
        .with_orientation(Orientation::Stacked);
        status_stacked.set_id("group130");

        let mut app = Self {
            menu_fixed,
            menu,
            status_wide,
            direction,
            answer,
            grades,
            disabled,
            desserts,
            status_styled,
            status_ordered,
            status_vertical,
            alignment,
            answer_tooltips,
            status_stacked,
            stock,
            custom_order: false,
            published,
            focused: 0,
            keymap: AppKeyMap::default(),
        };
        let _ = app.menu_fixed.focus();
        app
    }

    fn fields(&self) -> Vec<&dyn Field> {
        vec![
            &self.menu_fixed,
            &self.menu,
            &self.status_wide,
            &self.direction,
            &self.answer,
            &self.grades,
            &self.disabled,
            &self.desserts,
            &self.status_styled,
            &self.status_ordered,
            &self.status_vertical,
            &self.alignment,
            &self.answer_tooltips,
            &self.status_stacked,
        ]
    }

    fn fields_mut(&mut self) -> Vec<&mut dyn Field> {
        vec![
            &mut self.menu_fixed,
            &mut self.menu,
            &mut self.status_wide,
            &mut self.direction,
            &mut self.answer,
            &mut self.grades,
            &mut self.disabled,
            &mut self.desserts,
            &mut self.status_styled,
            &mut self.status_ordered,
            &mut self.status_vertical,
            &mut self.alignment,
            &mut self.answer_tooltips,
            &mut self.status_stacked,
        ]
    }

    fn move_focus(&mut self, forward: bool) -> Option<Cmd> {
        let fields = self.fields();
        let count = fields.len();
        let mut next = self.focused;
        for _ in 0..count {
            next = if forward {
                (next + 1) % count
            } else {
                (next + count - 1) % count
            };
            if fields[next].is_interactive() {
                break;
            }
        }

        let current = self.focused;
        let cmd = {
            let mut fields = self.fields_mut();
            fields[current].blur();
            fields[next].focus()
        };
        self.focused = next;
        cmd
    }

    fn toggle_order(&mut self) {
        self.custom_order = !self.custom_order;
        if self.custom_order {
            self.status_ordered.set_item_order_provider(|s: &Status| match s {
                Status::NotProcessed => 1,
                Status::Approved => 0,
                Status::Declined => 2,
            });
        } else {
            self.status_ordered.clear_item_order_provider();
        }
        info!(target: "toggle_group", custom = self.custom_order, "status order changed");
    }

    /// Moves one unit of stock from the old selection to the new one.
    fn on_dessert_changed(&mut self, changed: &ValueChangedMsg<Dessert>) {
        for dessert in self.stock.iter_mut() {
            if changed.old_value.as_ref().is_some_and(|d| d.name == dessert.name) {
                dessert.available += 1;
            }
            if changed.value.as_ref().is_some_and(|d| d.name == dessert.name) {
                dessert.available = dessert.available.saturating_sub(1);
            }
        }
        let selected = changed
            .value
            .as_ref()
            .and_then(|d| self.stock.iter().find(|s| s.name == d.name).cloned());

        self.desserts.set_items(self.stock.clone());
        if let Err(err) = self.desserts.set_value(selected) {
            warn!(target: "toggle_group", %err, "could not restore dessert selection");
        }
    }

    fn help_view(&self) -> String {
        let key_style = Style::new().foreground(AdaptiveColor {
            Light: "#909090",
            Dark: "#626262",
        });
        let desc_style = Style::new().foreground(AdaptiveColor {
            Light: "#B2B2B2",
            Dark: "#4A4A4A",
        });

        let fields = self.fields();
        let mut bindings = fields
            .get(self.focused)
            .map(|f| f.bindings())
            .unwrap_or_default();
        bindings.extend(self.keymap.short_help());

        bindings
            .iter()
            .filter(|b| b.enabled())
            .map(|b| {
                format!(
                    "{} {}",
                    key_style.render(&b.help().key),
                    desc_style.render(&b.help().desc)
                )
            })
            .collect::<Vec<_>>()
            .join(" • ")
    }
}

fn indent(block: &str, focused: bool) -> String {
    let bar = if focused {
        Style::new().foreground(Color::from("62")).render("│ ")
    } else {
        "  ".to_string()
    };
    block
        .lines()
        .map(|line| format!("{}{}", bar, line))
        .collect::<Vec<_>>()
        .join("\n")
}

impl Model for App {
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.keymap.quit.matches(key_msg) {
                return Some(quit());
            }
            if self.keymap.next_group.matches(key_msg) {
                return self.move_focus(true);
            }
            if self.keymap.prev_group.matches(key_msg) {
                return self.move_focus(false);
            }
            if self.keymap.clear.matches(key_msg) {
                self.menu_fixed.clear();
                return None;
            }
            if self.keymap.reorder.matches(key_msg) {
                self.toggle_order();
                return None;
            }
            let focused = self.focused;
            return self.fields_mut().get_mut(focused)?.handle(&msg);
        }

        if let Some(changed) = msg.downcast_ref::<ValueChangedMsg<Dessert>>() {
            self.on_dessert_changed(changed);
            return None;
        }
        if let Some(changed) = msg.downcast_ref::<ValueChangedMsg<Menu>>() {
            info!(
                target: "toggle_group",
                group = ?changed.group_id,
                value = ?changed.value,
                "menu selection changed"
            );
        }
        None
    }

    fn view(&self) -> String {
        let title = Style::new()
            .foreground(Color::from("230"))
            .background(Color::from("62"))
            .padding(0, 1, 0, 1)
            .render("Toggle button groups");
        let note = Style::new().foreground(AdaptiveColor {
            Light: "#909090",
            Dark: "#626262",
        });

        let published = self
            .published
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default();

        let mut blocks = vec![title];
        for (i, field) in self.fields().into_iter().enumerate() {
            let mut block = field.render();
            if let Some(value) = field.group_key().and_then(|id| published.get(id)) {
                block.push('\n');
                block.push_str(&note.render(&format!("Selected value: {}", value)));
            }
            blocks.push(indent(&block, i == self.focused));
        }
        blocks.push(self.help_view());

        blocks.join("\n\n")
    }
}

fn init_logging() -> Result<(), Box<dyn Error>> {
    let Ok(path) = std::env::var("TOGGLE_GROUP_LOG") else {
        return Ok(());
    };
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("bubbletea_toggle_group=trace,toggle_group=debug"));
    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_logging()?;
    let program = Program::<App>::builder().alt_screen(true).build()?;
    program.run().await?;
    Ok(())
}
