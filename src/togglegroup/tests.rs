//! Tests for the toggle group component.

use super::*;
use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::lipgloss;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Menu {
    Pasta,
    Pizza,
    Burger,
    Salad,
}

impl std::fmt::Display for Menu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
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
    Declined,
    Approved,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Status::NotProcessed => "Not processed",
            Status::Declined => "Declined",
            Status::Approved => "Approved",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone)]
struct Dessert {
    name: &'static str,
    available: u32,
}

fn menu_group() -> Model<Menu> {
    Model::with_items(vec![Menu::Pasta, Menu::Pizza, Menu::Burger, Menu::Salad])
}

fn status_group() -> Model<Status> {
    Model::with_items(vec![Status::NotProcessed, Status::Declined, Status::Approved])
}

fn recorder<T: Clone + Send + Sync + 'static>(
    group: &mut Model<T>,
) -> Arc<Mutex<Vec<ValueChangeEvent<T>>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    group.add_value_change_listener(move |event| sink.lock().unwrap().push(event.clone()));
    events
}

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    }) as Msg
}

#[test]
fn test_new_group_defaults() {
    let group: Model<Menu> = Model::new();
    assert!(group.items().is_empty());
    assert!(group.buttons().is_empty());
    assert_eq!(group.value(), None);
    assert!(group.is_enabled());
    assert!(!group.is_read_only());
    assert!(group.is_toggleable());
    assert_eq!(group.orientation(), Orientation::Horizontal);
    assert_eq!(group.label(), "");
    assert!(!group.focused());
}

#[test]
fn test_ids_are_unique() {
    let a: Model<Menu> = Model::new();
    let b: Model<Menu> = Model::new();
    assert_ne!(a.id(), b.id());
}

#[test]
fn test_one_button_per_item_with_labels() {
    let group = menu_group();
    assert_eq!(group.buttons().len(), 4);
    assert_eq!(
        group.button_labels(),
        vec!["PASTA", "PIZZA", "BURGER", "SALAD"]
    );
}

#[test]
fn test_constructor_with_label_generator() {
    let group = Model::with_label_generator(
        "Status:",
        vec![Status::NotProcessed, Status::Approved],
        |s: &Status| format!("<{:?}>", s),
    );
    assert_eq!(group.label(), "Status:");
    assert_eq!(group.button_labels(), vec!["<NotProcessed>", "<Approved>"]);
}

#[test]
fn test_set_value_without_items_fails() {
    let mut group: Model<Menu> = Model::with_label("Menu");
    assert_eq!(
        group.set_value(Some(Menu::Pasta)),
        Err(ToggleGroupError::NoItems)
    );
    assert_eq!(group.value(), None);
}

#[test]
fn test_set_value_after_items_succeeds() {
    let mut group: Model<Menu> = Model::new();
    group.set_items(vec![Menu::Pasta, Menu::Pizza]);
    assert!(group.set_value(Some(Menu::Pizza)).is_ok());
    assert_eq!(group.value(), Some(&Menu::Pizza));
    assert_eq!(group.selected_index(), Some(1));
}

#[test]
fn test_clicks_publish_selected_value() {
    let mut group = menu_group();
    let events = recorder(&mut group);

    for (i, expected) in [Menu::Pasta, Menu::Pizza, Menu::Burger, Menu::Salad]
        .into_iter()
        .enumerate()
    {
        group.click(i);
        assert_eq!(group.value(), Some(&expected));
    }

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 4);
    assert!(events.iter().all(|e| e.from_client));
    assert_eq!(events[1].old_value, Some(Menu::Pasta));
    assert_eq!(events[1].value, Some(Menu::Pizza));
}

#[test]
fn test_toggleable_reclick_clears_then_reselects() {
    let mut group = menu_group();
    group.click(2);
    assert_eq!(group.value(), Some(&Menu::Burger));
    group.click(2);
    assert_eq!(group.value(), None);
    group.click(2);
    assert_eq!(group.value(), Some(&Menu::Burger));
    group.click(2);
    assert_eq!(group.value(), None);
}

#[test]
fn test_not_toggleable_reclick_keeps_selection_without_event() {
    let mut group = menu_group().with_toggleable(false);
    let events = recorder(&mut group);

    group.click(2);
    group.click(2);
    group.click(2);

    assert_eq!(group.value(), Some(&Menu::Burger));
    assert_eq!(events.lock().unwrap().len(), 1);
    assert!(group.buttons()[2].has_theme_variant(ButtonVariant::Primary));
}

#[test]
fn test_not_toggleable_can_be_cleared_programmatically() {
    let mut group = menu_group().with_toggleable(false);
    let events = recorder(&mut group);

    group.click(0);
    group.click(0);
    assert_eq!(group.value(), Some(&Menu::Pasta));

    group.set_value(None).unwrap();
    assert_eq!(group.value(), None);

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 2);
    assert!(!events[1].from_client);
    assert_eq!(events[1].value, None);
}

#[test]
fn test_same_identity_does_not_fire() {
    let mut group = menu_group();
    let events = recorder(&mut group);

    group.set_value(None).unwrap();
    group.set_value(Some(Menu::Salad)).unwrap();
    group.set_value(Some(Menu::Salad)).unwrap();

    assert_eq!(events.lock().unwrap().len(), 1);
}

#[test]
fn test_removed_listener_is_not_called() {
    let mut group = menu_group();
    let count = Arc::new(Mutex::new(0));
    let sink = Arc::clone(&count);
    let id = group.add_value_change_listener(move |_| *sink.lock().unwrap() += 1);

    group.click(0);
    assert!(group.remove_value_change_listener(id));
    assert!(!group.remove_value_change_listener(id));
    group.click(1);

    assert_eq!(*count.lock().unwrap(), 1);
}

#[test]
fn test_stacked_reclick_cycles_and_wraps() {
    let mut group = status_group().with_orientation(Orientation::Stacked);
    // Stacked groups start on the first item.
    assert_eq!(group.value(), Some(&Status::NotProcessed));

    group.click(0);
    assert_eq!(group.value(), Some(&Status::Declined));
    group.click(1);
    assert_eq!(group.value(), Some(&Status::Approved));
    group.click(2);
    assert_eq!(group.value(), Some(&Status::NotProcessed));
}

#[test]
fn test_stacked_not_toggleable_does_not_cycle() {
    let mut group = status_group()
        .with_toggleable(false)
        .with_orientation(Orientation::Stacked);
    group.click(0);
    assert_eq!(group.value(), Some(&Status::NotProcessed));
}

#[test]
fn test_stacked_shows_only_selected_button() {
    let mut group = status_group().with_orientation(Orientation::Stacked);
    assert_eq!(group.visible_buttons(), vec![0]);
    group.click(0);
    assert_eq!(group.visible_buttons(), vec![1]);

    let plain = lipgloss::strip_ansi(&group.view());
    assert!(plain.contains("Declined"));
    assert!(!plain.contains("Approved"));
}

#[test]
fn test_read_only_ignores_clicks() {
    let mut group =
        Model::with_label_and_items("Grade", vec!["A", "B", "C", "D", "F"]);
    group.set_value(Some("B")).unwrap();
    group.set_read_only(true);
    let events = recorder(&mut group);

    // Read-only leaves the buttons enabled.
    assert!(group.buttons().iter().all(Button::is_enabled));
    assert!(group.click(0).is_none());
    assert_eq!(group.value(), Some(&"B"));
    assert!(group.click(1).is_none());
    assert_eq!(group.value(), Some(&"B"));
    assert!(events.lock().unwrap().is_empty());
}

#[test]
fn test_read_only_still_accepts_set_value() {
    let mut group = menu_group();
    group.set_read_only(true);
    group.set_value(Some(Menu::Salad)).unwrap();
    assert_eq!(group.value(), Some(&Menu::Salad));
}

#[test]
fn test_disabled_group_disables_all_buttons() {
    let mut group = Model::with_label_and_items(
        "Disabled group:",
        vec!["All", "Items", "Are", "Disabled", "Selected"],
    );
    group.set_value(Some("Selected")).unwrap();
    group.set_enabled(false);

    assert!(group.buttons().iter().all(|b| !b.is_enabled()));
    assert!(group.is_read_only());
    assert!(group.click(0).is_none());
    assert_eq!(group.value(), Some(&"Selected"));
}

#[test]
fn test_disabled_group_overrides_enabled_provider() {
    let mut group = menu_group();
    group.set_item_enabled_provider(|m: &Menu| *m != Menu::Burger);
    group.set_enabled(false);
    assert!(group.buttons().iter().all(|b| !b.is_enabled()));

    // Re-enabling restores what the provider says.
    group.set_enabled(true);
    let enabled: Vec<bool> = group.buttons().iter().map(Button::is_enabled).collect();
    assert_eq!(enabled, vec![true, true, false, true]);
    assert!(!group.is_read_only());
}

#[test]
fn test_disabled_group_stays_disabled_after_rebuild() {
    let mut group = menu_group();
    group.set_enabled(false);
    group.set_item_label_generator(|m: &Menu| format!("{:?}", m));
    assert!(group.buttons().iter().all(|b| !b.is_enabled()));
}

#[test]
fn test_enabled_provider_and_clicks_on_disabled_buttons() {
    let mut group: Model<Dessert> = Model::with_generators(
        |d: &Dessert| format!("{} ({})", d.name, d.available),
        |d: &Dessert| ItemId::of(d.name),
    );
    group.set_label("Choose dessert:");
    group.set_item_enabled_provider(|d: &Dessert| d.available > 0);
    group.set_item_order_provider(|d: &Dessert| match d.name {
        "Jelly" => 0,
        "Ice Cream" => 1,
        "Coffee" => 2,
        "Chocolate Cake" => 3,
        "Quark" => 4,
        _ => 1000,
    });
    group.set_items(vec![
        Dessert { name: "Quark", available: 0 },
        Dessert { name: "Coffee", available: 0 },
        Dessert { name: "Jelly", available: 100 },
        Dessert { name: "Chocolate Cake", available: 10 },
        Dessert { name: "Ice Cream", available: 50 },
    ]);

    let enabled: Vec<bool> = group.buttons().iter().map(Button::is_enabled).collect();
    assert_eq!(enabled, vec![true, true, false, true, false]);
    assert_eq!(group.buttons()[0].label(), "Jelly (100)");

    assert!(group.click(2).is_none());
    assert!(group.value().is_none());
}

#[test]
fn test_identity_comes_from_id_generator() {
    let mut group: Model<Dessert> =
        Model::with_generators(|d: &Dessert| d.name.to_string(), |d: &Dessert| ItemId::of(d.name));
    group.set_items(vec![
        Dessert { name: "Jelly", available: 3 },
        Dessert { name: "Quark", available: 1 },
    ]);
    let events = recorder(&mut group);

    group.click(0);
    // Same name, different count: same item, so no new event.
    group
        .set_value(Some(Dessert { name: "Jelly", available: 2 }))
        .unwrap();
    assert_eq!(events.lock().unwrap().len(), 1);
    assert_eq!(group.value().map(|d| d.available), Some(2));
}

#[test]
fn test_order_provider_changes_order_not_selection() {
    let mut group = status_group();
    group.set_selected_item_class_name_generator(|s: &Status| {
        format!("status-{:?}", s).to_lowercase()
    });
    group.set_value(Some(Status::Declined)).unwrap();
    assert_eq!(
        group.button_labels(),
        vec!["Not processed", "Declined", "Approved"]
    );

    group.set_item_order_provider(|s: &Status| match s {
        Status::NotProcessed => 1,
        Status::Approved => 0,
        Status::Declined => 2,
    });
    assert_eq!(
        group.button_labels(),
        vec!["Approved", "Not processed", "Declined"]
    );
    assert_eq!(group.value(), Some(&Status::Declined));
    assert!(group.buttons()[2].has_class_name("status-declined"));

    group.clear_item_order_provider();
    assert_eq!(
        group.button_labels(),
        vec!["Not processed", "Declined", "Approved"]
    );
    assert_eq!(group.value(), Some(&Status::Declined));
}

#[test]
fn test_order_ties_keep_relative_order() {
    let mut group = Model::with_items(vec!["b", "a", "c"]);
    group.set_item_order_provider(|_: &&str| 0);
    assert_eq!(group.button_labels(), vec!["b", "a", "c"]);
}

#[test]
fn test_set_items_recomputes_original_order() {
    let mut group = Model::with_items(vec!["x", "y"]);
    group.set_items(vec!["z", "y", "x"]);
    assert_eq!(group.button_labels(), vec!["z", "y", "x"]);
}

#[test]
fn test_selected_marker_defaults_to_primary() {
    let mut group = Model::with_items(vec!["Yes", "No"]);
    group.set_value(Some("Yes")).unwrap();
    assert!(group.buttons()[0].has_theme_variant(ButtonVariant::Primary));
    assert!(!group.buttons()[1].has_theme_variant(ButtonVariant::Primary));

    group.click(1);
    assert!(!group.buttons()[0].has_theme_variant(ButtonVariant::Primary));
    assert!(group.buttons()[1].has_theme_variant(ButtonVariant::Primary));
}

#[test]
fn test_custom_selected_class_replaces_primary() {
    let mut group = status_group();
    group.set_selected_item_class_name_generator(|s: &Status| {
        format!("status-{:?}", s).to_lowercase()
    });

    for i in 0..3 {
        group.click(i);
        let button = &group.buttons()[i];
        // base class, positional class, custom class
        assert_eq!(button.class_names().len(), 3);
        assert!(!button.has_theme_variant(ButtonVariant::Primary));
    }
    assert!(!group.buttons()[0].has_class_name("status-notprocessed"));
    assert!(group.buttons()[2].has_class_name("status-approved"));
}

#[test]
fn test_blank_selected_class_falls_back_to_primary() {
    let mut group = status_group();
    group.set_selected_item_class_name_generator(|s: &Status| match s {
        Status::Approved => "approved".to_string(),
        _ => "   ".to_string(),
    });
    group.click(0);
    assert!(group.buttons()[0].has_theme_variant(ButtonVariant::Primary));
    assert_eq!(group.buttons()[0].class_names().len(), 2);
    group.click(2);
    assert!(!group.buttons()[0].has_theme_variant(ButtonVariant::Primary));
    assert!(group.buttons()[2].has_class_name("approved"));
}

#[test]
fn test_reconfiguring_after_set_value_keeps_marker() {
    let mut group = Model::with_items(vec!["YES", "NO"]);
    group.set_value(Some("NO")).unwrap();
    group.set_item_tooltip_text_generator(|a: &&str| format!("Answer is {}", a.to_lowercase()));

    assert!(group.buttons()[1].has_theme_variant(ButtonVariant::Primary));
    assert_eq!(group.buttons()[0].tooltip(), Some("Answer is yes"));
    assert_eq!(group.buttons()[1].tooltip(), Some("Answer is no"));
}

#[test]
fn test_positional_classes_per_orientation() {
    let group = menu_group();
    let classes: Vec<&[String]> = group.buttons().iter().map(Button::class_names).collect();
    assert_eq!(
        classes[0],
        &[
            "toggle-button-group-button-h".to_string(),
            "toggle-button-group-first-button-h".to_string()
        ]
    );
    assert!(classes[1].contains(&"toggle-button-group-middle-button-h".to_string()));
    assert!(classes[2].contains(&"toggle-button-group-middle-button-h".to_string()));
    assert!(classes[3].contains(&"toggle-button-group-last-button-h".to_string()));

    let vertical = menu_group().with_orientation(Orientation::Vertical);
    assert!(vertical.buttons()[0].has_class_name("toggle-button-group-first-button-v"));
    assert!(vertical.buttons()[3].has_class_name("toggle-button-group-last-button-v"));
}

#[test]
fn test_single_button_is_first() {
    let group = Model::with_items(vec!["only"]);
    assert!(group.buttons()[0].has_class_name("toggle-button-group-first-button-h"));
    assert!(!group.buttons()[0].has_class_name("toggle-button-group-last-button-h"));
}

#[test]
fn test_icons_and_icon_only_buttons() {
    let mut group = Model::with_label("Alignment:");
    group.set_items(vec!["left", "center", "right"]);
    group.set_item_icon_generator(|a: &&str| match *a {
        "left" => "⇤".to_string(),
        "right" => "⇥".to_string(),
        _ => String::new(),
    });
    group.set_item_label_generator(|_: &&str| String::new());

    assert_eq!(group.buttons()[0].icon(), Some("⇤"));
    assert_eq!(group.buttons()[1].icon(), None);
    assert_eq!(group.buttons()[0].text(), "⇤");

    group.clear_item_icon_generator();
    assert!(group.buttons().iter().all(|b| b.icon().is_none()));
}

#[test]
fn test_button_for_looks_up_by_id() {
    let group = menu_group();
    assert_eq!(group.button_for(&Menu::Burger).map(Button::label), Some("BURGER"));
}

#[test]
fn test_out_of_range_click_is_ignored() {
    let mut group = menu_group();
    assert!(group.click(99).is_none());
    assert_eq!(group.value(), None);
}

#[test]
fn test_view_layouts() {
    let horizontal = Model::with_label_and_items("Answer", vec!["Yes", "No"]);
    let plain = lipgloss::strip_ansi(&horizontal.view());
    let lines: Vec<&str> = plain.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "Answer");
    assert!(lines[1].find("Yes").unwrap() < lines[1].find("No").unwrap());

    let vertical = Model::with_items(vec!["Yes", "No"]).with_orientation(Orientation::Vertical);
    let plain = lipgloss::strip_ansi(&vertical.view());
    let lines: Vec<&str> = plain.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("Yes"));
    assert!(lines[1].contains("No"));
}

#[test]
fn test_width_full_stretches_horizontal_group() {
    let mut group = Model::with_items(vec!["A", "B"]);
    group.set_width(20);
    let plain = lipgloss::strip_ansi(&group.view());
    assert_eq!(lipgloss::width_visible(&plain), 20);
}

#[test]
fn test_tooltip_shown_only_when_focused() {
    let mut group = Model::with_items(vec!["A", "B"]);
    group.set_tooltip("Grades on a 0-100 scale.");
    group.set_item_tooltip_text_generator(|g: &&str| match *g {
        "A" => "90 - 100".to_string(),
        _ => String::new(),
    });

    assert!(!lipgloss::strip_ansi(&group.view()).contains("90 - 100"));

    group.focus();
    assert!(lipgloss::strip_ansi(&group.view()).contains("90 - 100"));

    Model::update(&mut group, &key(KeyCode::Right));
    let plain = lipgloss::strip_ansi(&group.view());
    assert!(plain.contains("Grades on a 0-100 scale."));
    assert!(!plain.contains("90 - 100"));
}

#[test]
fn test_keys_ignored_without_focus() {
    let mut group = menu_group();
    assert!(Model::update(&mut group, &key(KeyCode::Enter)).is_none());
    assert_eq!(group.value(), None);
}

#[test]
fn test_key_navigation_skips_disabled_buttons() {
    let mut group = menu_group();
    group.set_item_enabled_provider(|m: &Menu| *m != Menu::Pizza);
    group.focus();
    assert_eq!(group.cursor(), 0);

    Model::update(&mut group, &key(KeyCode::Right));
    assert_eq!(group.cursor(), 2);
    Model::update(&mut group, &key(KeyCode::Char('l')));
    assert_eq!(group.cursor(), 3);
    // No wrap at the end.
    Model::update(&mut group, &key(KeyCode::Right));
    assert_eq!(group.cursor(), 3);
    Model::update(&mut group, &key(KeyCode::Home));
    assert_eq!(group.cursor(), 0);
    Model::update(&mut group, &key(KeyCode::End));
    assert_eq!(group.cursor(), 3);
    Model::update(&mut group, &key(KeyCode::Left));
    assert_eq!(group.cursor(), 2);
}

#[test]
fn test_focus_starts_on_selection() {
    let mut group = menu_group();
    group.set_value(Some(Menu::Burger)).unwrap();
    group.focus();
    assert_eq!(group.cursor(), 2);
    group.blur();
    assert!(!group.focused());
}

#[test]
fn test_cursor_clamped_when_items_shrink() {
    let mut group = menu_group();
    group.focus();
    Model::update(&mut group, &key(KeyCode::End));
    group.set_items(vec![Menu::Pasta]);
    assert_eq!(group.cursor(), 0);
}

#[tokio::test]
async fn test_select_key_emits_value_changed_msg() {
    let mut group = menu_group();
    group.set_id("group10");
    group.focus();
    Model::update(&mut group, &key(KeyCode::Right));

    let cmd = Model::update(&mut group, &key(KeyCode::Enter)).expect("selection changed");
    let msg = cmd.await.expect("command yields a message");
    let changed = msg
        .downcast_ref::<ValueChangedMsg<Menu>>()
        .expect("value changed message");

    assert_eq!(changed.id, group.id());
    assert_eq!(changed.group_id.as_deref(), Some("group10"));
    assert_eq!(changed.old_value, None);
    assert_eq!(changed.value, Some(Menu::Pizza));
    assert!(changed.from_client);
}

#[tokio::test]
async fn test_space_reclick_clears_through_message() {
    let mut group = menu_group();
    group.focus();
    let _ = Model::update(&mut group, &key(KeyCode::Char(' ')));
    let cmd = Model::update(&mut group, &key(KeyCode::Char(' '))).expect("cleared");
    let msg = cmd.await.expect("message");
    let changed = msg.downcast_ref::<ValueChangedMsg<Menu>>().unwrap();
    assert_eq!(changed.old_value, Some(Menu::Pasta));
    assert_eq!(changed.value, None);
}

#[test]
fn test_stacked_replacing_items_selects_first() {
    let mut group = Model::with_items(vec!["A", "B", "C"]).with_orientation(Orientation::Stacked);
    assert_eq!(group.value(), Some(&"A"));
    let events = recorder(&mut group);

    group.set_items(vec!["X", "Y"]);

    assert_eq!(group.value(), Some(&"X"));
    assert_eq!(group.visible_buttons(), vec![0]);
    assert!(group.buttons()[0].has_theme_variant(ButtonVariant::Primary));
    assert!(!group.buttons()[1].has_theme_variant(ButtonVariant::Primary));
    assert_eq!(lipgloss::strip_ansi(&group.view()).trim(), "X");

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].old_value, Some("A"));
    assert!(!events[0].from_client);
}

#[test]
fn test_stacked_replacing_items_keeps_present_selection() {
    let mut group = Model::with_items(vec!["A", "B", "C"]).with_orientation(Orientation::Stacked);
    group.click(0);
    assert_eq!(group.value(), Some(&"B"));

    group.set_items(vec!["C", "B"]);
    assert_eq!(group.value(), Some(&"B"));
    assert_eq!(group.visible_buttons(), vec![1]);
}

#[test]
fn test_stacked_cycle_skips_disabled_items() {
    let mut group = Model::with_items(vec!["A", "B", "C"]).with_orientation(Orientation::Stacked);
    group.set_item_enabled_provider(|s: &&str| *s != "B");
    assert_eq!(group.value(), Some(&"A"));

    group.click(group.cursor());
    assert_eq!(group.value(), Some(&"C"));
    assert_eq!(group.cursor(), 2);

    group.click(group.cursor());
    assert_eq!(group.value(), Some(&"A"));
    assert_eq!(group.cursor(), 0);
}

#[test]
fn test_stacked_cycle_stays_when_nothing_else_enabled() {
    let mut group = Model::with_items(vec!["A", "B", "C"]).with_orientation(Orientation::Stacked);
    group.set_item_enabled_provider(|s: &&str| *s == "A");
    let events = recorder(&mut group);

    assert!(group.click(0).is_none());
    assert_eq!(group.value(), Some(&"A"));
    assert!(events.lock().unwrap().is_empty());
}

#[test]
fn test_stacked_starts_on_first_enabled_item() {
    let mut group: Model<&str> = Model::new().with_orientation(Orientation::Stacked);
    group.set_item_enabled_provider(|s: &&str| *s != "A");
    group.set_items(vec!["A", "B", "C"]);
    assert_eq!(group.value(), Some(&"B"));
    assert_eq!(group.visible_buttons(), vec![1]);
}

#[test]
fn test_stacked_select_key_cycles() {
    let mut group = status_group().with_orientation(Orientation::Stacked);
    group.focus();
    assert_eq!(group.cursor(), 0);

    // Navigation keys do nothing; the visible button follows the selection.
    Model::update(&mut group, &key(KeyCode::Right));
    assert_eq!(group.cursor(), 0);

    let _ = Model::update(&mut group, &key(KeyCode::Enter));
    assert_eq!(group.value(), Some(&Status::Declined));
    assert_eq!(group.cursor(), 1);
}

#[test]
fn test_help_bindings_follow_orientation() {
    use crate::key::KeyMap;

    let group = menu_group();
    assert_eq!(group.short_help().len(), 3);
    assert_eq!(group.full_help().len(), 2);

    let stacked = menu_group().with_orientation(Orientation::Stacked);
    assert_eq!(stacked.short_help().len(), 1);
}

#[test]
fn test_bubbletea_init_is_empty_group() {
    use bubbletea_rs::Model as BubbleTeaModel;

    let (group, cmd) = <Model<Menu> as BubbleTeaModel>::init();
    assert!(cmd.is_none());
    assert!(group.items().is_empty());
    assert_eq!(BubbleTeaModel::view(&group), "");
}

#[test]
fn test_styles_resolve_selected_class() {
    use lipgloss_extras::prelude::*;

    let styles = ToggleGroupStyles::default()
        .with_class_style("status-approved", Style::new().bold(true));
    let mut group = status_group().with_styles(styles);
    group.set_selected_item_class_name_generator(|s: &Status| {
        format!("status-{:?}", s).to_lowercase()
    });
    group.click(2);

    let button = &group.buttons()[2];
    let rendered = group.styles.resolve(button, false).render("x");
    let expected = group
        .styles
        .class_style("status-approved")
        .unwrap()
        .render("x");
    assert_eq!(rendered, expected);
}
