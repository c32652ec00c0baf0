use finch_ui::*;
use proptest::prelude::*;

fn spacing() -> impl Strategy<Value = Spacing> {
    (0i32..20, 0i32..20, 0i32..20, 0i32..20).prop_map(|(t, r, b, l)| Spacing::new(t, r, b, l))
}

fn rect() -> impl Strategy<Value = Rect> {
    (-50i32..200, -50i32..200, 0i32..300, 0i32..300).prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

fn position() -> impl Strategy<Value = PositionType> {
    prop_oneof![
        Just(PositionType::Relative),
        Just(PositionType::Absolute),
        Just(PositionType::Fixed),
    ]
}

/// A chain root > e0 > e1 > ... with random geometry on every link.
fn build_chain(links: &[(Rect, Spacing, Spacing, PositionType)]) -> (UiTree, Vec<ElementId>) {
    let mut tree = UiTree::new(UiConfig::default().with_viewport(800, 600));
    let mut parent = tree.root();
    let mut ids = Vec::new();

    for (i, &(bounds, margin, padding, position)) in links.iter().enumerate() {
        let id = tree.create(format!("e{i}"), Container::new());
        tree.add_child(parent, id).unwrap();
        tree.set_bounds(id, bounds);
        tree.set_box_model(id, BoxModel::default().with_margin(margin).with_padding(padding));
        tree.set_position_type(id, position);
        ids.push(id);
        parent = id;
    }

    (tree, ids)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_computed_bounds_is_idempotent(
        links in prop::collection::vec((rect(), spacing(), spacing(), position()), 1..6)
    ) {
        let (tree, ids) = build_chain(&links);

        for &id in &ids {
            let first = tree.computed_bounds(id);
            let second = tree.computed_bounds(id);
            prop_assert_eq!(first, second);

            // Drawing or hit testing in between must not drift either
            tree.draw(&mut RecordingSurface::new());
            let _ = tree.hit_test(10, 10);
            prop_assert_eq!(tree.computed_bounds(id), first);
        }
    }

    #[test]
    fn prop_margin_never_changes_size(
        links in prop::collection::vec((rect(), spacing(), spacing(), position()), 1..6)
    ) {
        let (tree, ids) = build_chain(&links);

        for (&id, &(bounds, ..)) in ids.iter().zip(&links) {
            let computed = tree.computed_bounds(id).unwrap();
            prop_assert_eq!(computed.size(), bounds.size());
        }
    }

    #[test]
    fn prop_add_then_remove_restores_children(
        existing in 0usize..6,
        at_width in 0i32..200,
        flex in any::<bool>()
    ) {
        let mut tree = UiTree::default();
        let root = tree.root();
        let parent = if flex {
            tree.create_flex("parent", Container::new(), FlexLayout::row())
        } else {
            tree.create("parent", Container::new())
        };
        tree.add_child(root, parent).unwrap();

        for i in 0..existing {
            let child = tree.create(format!("c{i}"), Container::new());
            tree.set_bounds(child, Rect::new(0, 0, 10 + i as i32, 10));
            tree.add_child(parent, child).unwrap();
        }
        let before = tree.children(parent).to_vec();
        let bounds_before: Vec<_> = before.iter().map(|&c| tree.bounds(c)).collect();

        let extra = tree.create("extra", Container::new());
        tree.set_bounds(extra, Rect::new(0, 0, at_width, 10));
        tree.add_child(parent, extra).unwrap();
        tree.remove_child(parent, extra);

        prop_assert_eq!(tree.children(parent), before.as_slice());
        let bounds_after: Vec<_> = before.iter().map(|&c| tree.bounds(c)).collect();
        prop_assert_eq!(bounds_after, bounds_before);
    }

    #[test]
    fn prop_row_children_do_not_overlap(
        widths in prop::collection::vec(0i32..100, 0..8),
        spacing in 0i32..20
    ) {
        let sizes: Vec<Size> = widths.iter().map(|&w| Size::new(w, 10)).collect();
        let placed = arrange(Size::new(1000, 50), &FlexLayout::row().with_spacing(spacing), &sizes);

        prop_assert_eq!(placed.len(), sizes.len());
        for pair in placed.windows(2) {
            prop_assert_eq!(pair[1].x, pair[0].x + pair[0].width + spacing);
        }
        if let Some(first) = placed.first() {
            prop_assert_eq!(first.x, 0);
        }
    }
}
