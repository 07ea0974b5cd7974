//! Property tests for the drawer state machine against a real page.
//!
//! Operation sequences mix existing drawer names with names that match
//! nothing, and the page/controller agreement is checked after every step.

use drawer::{DrawerConfig, DrawerController, DrawerError, DrawerSurface};
use pagedom::{Document, Element};
use proptest::prelude::*;

const DRAWERS: [&str; 3] = ["nav", "cart", "search"];

// =============================================================================
// Helper Functions
// =============================================================================

fn page() -> Document {
    Document::new(
        DRAWERS
            .iter()
            .map(|name| Element::box_().id(*name).attr("data-drawer", *name)),
    )
}

fn open_names(controller: &DrawerController, doc: &Document) -> Vec<String> {
    let config = controller.config();
    doc.open_names(&config.drawer_attribute, &config.open_marker)
}

#[derive(Debug, Clone)]
enum Op {
    Open(String),
    Close(String),
    Toggle(String),
}

fn name() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => prop::sample::select(DRAWERS.to_vec()).prop_map(str::to_string),
        1 => "[a-z]{1,6}".prop_filter("must not name a drawer", |n| !DRAWERS.contains(&n.as_str())),
    ]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        name().prop_map(Op::Open),
        name().prop_map(Op::Close),
        name().prop_map(Op::Toggle),
    ]
}

fn apply(
    controller: &mut DrawerController,
    doc: &mut Document,
    op: &Op,
) -> Result<drawer::Transition, DrawerError> {
    match op {
        Op::Open(n) => controller.open(doc, n),
        Op::Close(n) => controller.close(doc, n),
        Op::Toggle(n) => controller.toggle(doc, n),
    }
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_at_most_one_open_and_state_agrees(ops in prop::collection::vec(op(), 0..40)) {
        let mut controller = DrawerController::default();
        let mut doc = page();

        for op in &ops {
            let _ = apply(&mut controller, &mut doc, op);

            let open = open_names(&controller, &doc);
            prop_assert!(open.len() <= 1);
            prop_assert_eq!(open.first().map(String::as_str), controller.open_drawer());
        }
    }

    #[test]
    fn prop_open_b_after_a_closes_a(
        a in prop::sample::select(DRAWERS.to_vec()),
        b in prop::sample::select(DRAWERS.to_vec()),
    ) {
        prop_assume!(a != b);
        let mut controller = DrawerController::default();
        let mut doc = page();

        controller.open(&mut doc, a).unwrap();
        controller.open(&mut doc, b).unwrap();

        prop_assert_eq!(controller.open_drawer(), Some(b));
        prop_assert!(controller.is_open(&doc, b));
        prop_assert!(!controller.is_open(&doc, a));
    }

    #[test]
    fn prop_open_is_idempotent(
        prefix in prop::collection::vec(op(), 0..10),
        a in prop::sample::select(DRAWERS.to_vec()),
    ) {
        let mut once = DrawerController::default();
        let mut once_doc = page();
        let mut twice = DrawerController::default();
        let mut twice_doc = page();

        for op in &prefix {
            let _ = apply(&mut once, &mut once_doc, op);
            let _ = apply(&mut twice, &mut twice_doc, op);
        }

        once.open(&mut once_doc, a).unwrap();
        twice.open(&mut twice_doc, a).unwrap();
        twice.open(&mut twice_doc, a).unwrap();

        prop_assert_eq!(once.open_drawer(), twice.open_drawer());
        prop_assert_eq!(open_names(&once, &once_doc), open_names(&twice, &twice_doc));
    }

    #[test]
    fn prop_toggle_twice_restores_state(
        start_open in any::<bool>(),
        a in name(),
    ) {
        let mut controller = DrawerController::default();
        let mut doc = page();
        if start_open && DRAWERS.contains(&a.as_str()) {
            controller.open(&mut doc, &a).unwrap();
        }

        let before_state = controller.open_drawer().map(str::to_string);
        let before_page = open_names(&controller, &doc);

        let _ = controller.toggle(&mut doc, &a);
        let _ = controller.toggle(&mut doc, &a);

        prop_assert_eq!(controller.open_drawer().map(str::to_string), before_state);
        prop_assert_eq!(open_names(&controller, &doc), before_page);
    }

    #[test]
    fn prop_missing_name_changes_nothing(
        prefix in prop::collection::vec(op(), 0..10),
        missing in "[a-z]{1,6}".prop_filter("must not name a drawer", |n| !DRAWERS.contains(&n.as_str())),
    ) {
        let mut controller = DrawerController::default();
        let mut doc = page();
        for op in &prefix {
            let _ = apply(&mut controller, &mut doc, op);
        }

        let before_state = controller.open_drawer().map(str::to_string);
        let before_page = open_names(&controller, &doc);

        for op in [Op::Open(missing.clone()), Op::Close(missing.clone()), Op::Toggle(missing.clone())] {
            prop_assert_eq!(
                apply(&mut controller, &mut doc, &op),
                Err(DrawerError::NotFound(missing.clone()))
            );
        }

        prop_assert_eq!(controller.open_drawer().map(str::to_string), before_state);
        prop_assert_eq!(open_names(&controller, &doc), before_page);
    }

    #[test]
    fn prop_non_exclusive_open_set_matches_model(ops in prop::collection::vec(op(), 0..40)) {
        let mut controller = DrawerController::new(DrawerConfig::new().exclusive(false));
        let mut doc = page();
        let mut model: Vec<String> = Vec::new();

        for op in &ops {
            let _ = apply(&mut controller, &mut doc, op);
            match op {
                Op::Open(n) if DRAWERS.contains(&n.as_str()) && !model.contains(n) => model.push(n.clone()),
                Op::Close(n) => model.retain(|m| m != n),
                Op::Toggle(n) if DRAWERS.contains(&n.as_str()) => {
                    if model.contains(n) {
                        model.retain(|m| m != n);
                    } else {
                        model.push(n.clone());
                    }
                }
                _ => {}
            }

            let mut expected = model.clone();
            expected.sort_by_key(|n| DRAWERS.iter().position(|d| *d == n.as_str()));
            prop_assert_eq!(open_names(&controller, &doc), expected);
        }
    }
}
