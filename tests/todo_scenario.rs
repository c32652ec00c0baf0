//! A small todo list driven end to end: a button whose click adds a row, rows
//! rebuilt from a `StateCell`, and a frame driver ticking the whole thing.

use std::cell::RefCell;
use std::rc::Rc;

use finch_ui::*;

struct TodoApp {
    tree: UiTree,
    list: ElementId,
    add_button: ElementId,
    items: StateCell<Vec<String>>,
}

fn build() -> TodoApp {
    let mut tree = UiTree::new(UiConfig::default().with_viewport(400, 300));
    let root = tree.root();

    let column = tree.create_flex(
        "column",
        Container::new(),
        FlexLayout::column().with_spacing(8).with_align_items(Alignment::Stretch),
    );
    tree.add_child(root, column).unwrap();
    tree.set_bounds(column, Rect::new(0, 0, 400, 300));
    tree.set_box_model(column, BoxModel::default().with_padding(Spacing::all(10)));

    let add_button = tree.create("add-btn", Container::with_background(Rgba::GRAY));
    tree.set_bounds(add_button, Rect::new(0, 0, 0, 30));
    tree.add_class(add_button, "action");
    tree.add_child(column, add_button).unwrap();

    let list = tree.create_flex("list", Container::new(), FlexLayout::column().with_spacing(2));
    tree.set_bounds(list, Rect::new(0, 0, 0, 200));
    tree.add_child(column, list).unwrap();

    TodoApp {
        tree,
        list,
        add_button,
        items: StateCell::new(Vec::new()),
    }
}

/// Rebuild the list subtree from the current items.
fn render_items(tree: &mut UiTree, list: ElementId, items: &[String]) {
    tree.remove_all_children(list);
    for (i, text) in items.iter().enumerate() {
        let row = tree.create(format!("item-{i}"), Label::new(text.clone()));
        tree.set_bounds(row, Rect::new(0, 0, 200, 20));
        tree.add_class(row, "item");
        tree.add_child(list, row).ok();
    }
}

#[test]
fn test_layout_of_initial_tree() {
    let app = build();

    // Column content box starts at (10, 10); stretch gives full content width
    assert_eq!(
        app.tree.computed_bounds(app.add_button),
        Some(Rect::new(10, 10, 380, 30))
    );
    assert_eq!(
        app.tree.computed_bounds(app.list),
        Some(Rect::new(10, 48, 380, 200))
    );
}

#[test]
fn test_click_adds_item_visible_in_same_tick() {
    let mut app = build();
    let list = app.list;

    // Pending rebuilds requested by the state cell, applied from handlers
    let pending: Rc<RefCell<Option<Vec<String>>>> = Rc::new(RefCell::new(None));
    let sink = pending.clone();
    app.items.watch(move |items| *sink.borrow_mut() = Some(items.clone()));

    let items = app.items.clone();
    let queue = pending.clone();
    app.tree.on_click(app.add_button, move |tree, _| {
        items.update(|mut v| {
            v.push(format!("todo {}", v.len() + 1));
            v
        });
        if let Some(next) = queue.borrow_mut().take() {
            render_items(tree, list, &next);
        }
    });

    let mut driver = FrameDriver::new();
    let mut surface = RecordingSurface::new();

    driver.tick(&mut app.tree, PointerSnapshot::new(50, 20, false), &mut surface);
    driver.tick(&mut app.tree, PointerSnapshot::new(50, 20, true), &mut surface);
    surface.clear_commands();
    let report = driver.tick(&mut app.tree, PointerSnapshot::new(50, 20, false), &mut surface);

    assert!(report.handled);
    assert_eq!(app.items.value(), vec!["todo 1".to_string()]);

    // The new row is laid out and drawn in the same tick as the click
    let row = app.tree.find_by_id("item-0").unwrap();
    assert_eq!(app.tree.computed_bounds(row), Some(Rect::new(10, 48, 200, 20)));
    assert!(surface.commands().iter().any(|cmd| matches!(
        cmd,
        DrawCommand::Text { text, x: 10, y: 48, .. } if text == "todo 1"
    )));

    // And it is hittable without waiting for another frame
    assert_eq!(app.tree.hit_test(15, 50), Some(row));
}

#[test]
fn test_rebuild_replaces_rows() {
    let mut app = build();

    render_items(&mut app.tree, app.list, &["a".into(), "b".into(), "c".into()]);
    let first = app.tree.query_selector_all(".item");
    assert_eq!(first.len(), 3);

    render_items(&mut app.tree, app.list, &["a".into()]);

    assert_eq!(app.tree.query_selector_all(".item").len(), 1);
    for stale in &first {
        assert!(!app.tree.contains(*stale));
    }
    assert_eq!(app.tree.children(app.list).len(), 1);
}

#[test]
fn test_second_row_follows_spacing() {
    let mut app = build();

    render_items(&mut app.tree, app.list, &["a".into(), "b".into()]);

    let b = app.tree.find_by_id("item-1").unwrap();
    assert_eq!(app.tree.computed_bounds(b), Some(Rect::new(10, 70, 200, 20)));
}

#[test]
fn test_refused_structural_request() {
    let mut app = build();
    let root = app.tree.root();

    let err = app.tree.add_child(app.list, root).unwrap_err();
    assert_eq!(err, TreeError::RootHasNoParent);
    assert_eq!(err.to_string(), "the root element cannot be given a parent");
}
