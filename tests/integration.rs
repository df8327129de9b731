//! Integration tests for the pagecraft layout core.
//!
//! These drive the public API the way an editor would: add elements through
//! the store, apply mutations, run the reflow each mutation asks for, and
//! check the geometry a renderer would receive.

use std::collections::BTreeMap;

use pagecraft::drag::{DragController, DragOutcome};
use pagecraft::layout::sorted_elements;
use pagecraft::model::*;
use pagecraft::resolve::{resolve_responsive, Side, SpacingProperty};
use pagecraft::{EditorConfig, ElementStore, Reflow};

// ─── Helpers ────────────────────────────────────────────────────

fn new_store() -> ElementStore {
    ElementStore::new(EditorConfig::default())
}

fn assert_sequential(store: &ElementStore) {
    let elements = store.elements();
    assert_eq!(elements[0].position.y, 50.0, "first element sits at the top offset");
    for pair in elements.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        assert_eq!(
            next.position.y,
            prev.position.y + prev.flow_height() + prev.spacing.bottom,
            "{} should sit directly below {}",
            next.id,
            prev.id
        );
    }
}

fn sample_document() -> Document {
    let mut store = new_store();
    let heading = store.add_element(ElementKind::Heading, None, None);
    let text = store.add_element(ElementKind::Text, None, None);
    store.add_element(ElementKind::Spacer, None, None);
    let video = store.add_element(ElementKind::Video, None, None);
    store.add_element(ElementKind::Html, None, None);

    let mut responsive = BTreeMap::new();
    responsive.insert(
        Breakpoint::Mobile,
        ResponsiveOverride {
            position: Some(PointOverride {
                x: Some(10.0),
                y: None,
            }),
            size: Some(SizeOverride {
                width: Some(320.5),
                height: None,
            }),
            content: BoxProps {
                font_size: Some(22.0),
                ..Default::default()
            },
        },
    );
    store.update_element(
        &heading.id,
        ElementPatch {
            responsive,
            ..Default::default()
        },
    );
    store.toggle_link(SpacingProperty::Margin);
    store.set_breakpoint(Breakpoint::Tablet);
    store.set_spacing(&text.id, SpacingProperty::Margin, Side::Left, 12.25);
    store.apply_alignment(&video.id, Alignment::Right);
    store.set_background(Background {
        kind: BackgroundKind::Image,
        value: String::new(),
        image: Some("uploads/bg.jpg".to_string()),
        opacity: 0.35,
    });
    store.into_document()
}

// ─── Scenarios ──────────────────────────────────────────────────

#[test]
fn scenario_a_first_heading_is_centered_at_top() {
    let mut store = new_store();
    let heading = store.add_element(ElementKind::Heading, None, None);
    assert_eq!(heading.size.width, 400.0);
    assert_eq!(heading.size.height, 60.0);
    assert_eq!(heading.position.x, 400.0);
    assert_eq!(heading.position.y, 50.0);
}

#[test]
fn scenario_b_text_follows_heading() {
    let mut store = new_store();
    store.add_element(ElementKind::Heading, None, None);
    let text = store.add_element(ElementKind::Text, None, None);
    assert_eq!(text.size.height, 80.0);
    assert_eq!(text.position.y, 50.0 + 60.0 + 20.0);
}

#[test]
fn scenario_c_spacer_growth_moves_element_below() {
    let mut store = new_store();
    let spacer = store.add_element(ElementKind::Spacer, None, Some(200.0));
    let below = store.add_element(ElementKind::Text, None, Some(270.0));
    assert_eq!(store.get(&spacer.id).unwrap().flow_height(), 50.0);

    let reflow = store.set_spacer_height(&spacer.id, 100.0);
    assert_eq!(
        reflow,
        Reflow::BelowSpacer {
            spacer_id: spacer.id.clone(),
            delta: 50.0
        }
    );
    store.reflow(reflow);

    assert_eq!(store.get(&below.id).unwrap().position.y, 320.0);
    assert_eq!(store.get(&spacer.id).unwrap().position.y, 200.0);
}

#[test]
fn scenario_c_collapse_stacks_all_elements_below() {
    let mut store = new_store();
    let above = store.add_element(ElementKind::Heading, None, Some(100.0));
    let spacer = store.add_element(ElementKind::Spacer, None, Some(200.0));
    let a = store.add_element(ElementKind::Text, None, Some(270.0));
    let b = store.add_element(ElementKind::Image, None, Some(370.0));

    let reflow = store.set_spacer_height(&spacer.id, 100.0);
    store.reflow(reflow);

    assert_eq!(store.get(&above.id).unwrap().position.y, 100.0);
    assert_eq!(store.get(&a.id).unwrap().position.y, 320.0);
    assert_eq!(store.get(&b.id).unwrap().position.y, 320.0);
}

#[test]
fn scenario_d_canvas_grows_past_base_height() {
    let mut store = new_store();
    assert_eq!(store.canvas_size(Breakpoint::Desktop).height, 800.0);

    let image = store.add_element(ElementKind::Image, None, Some(600.0));
    // 600 + 300 + 20 = 920 > 800
    let bottom = image.position.y + image.size.height + image.spacing.bottom;
    let size = store.canvas_size(Breakpoint::Desktop);
    assert_eq!(size.height, bottom + 50.0);
    assert_eq!(size.width, 1200.0);
}

// ─── Properties ─────────────────────────────────────────────────

#[test]
fn adds_keep_the_sequential_invariant() {
    let mut store = new_store();
    for kind in ElementKind::ALL.iter().chain(ElementKind::ALL.iter()) {
        store.add_element(*kind, None, None);
    }
    assert_sequential(&store);
    assert!(store.engine().is_sequential(store.elements()));
}

#[test]
fn full_reflow_twice_is_identical() {
    let mut store = new_store();
    for kind in [ElementKind::Text, ElementKind::Spacer, ElementKind::Button] {
        store.add_element(kind, None, Some(999.0));
    }
    store.recalculate_positions();
    let once = store.document().clone();
    store.recalculate_positions();
    assert_eq!(&once, store.document());
    assert_sequential(&store);
}

#[test]
fn alignment_is_idempotent() {
    let mut store = new_store();
    let el = store.add_element(ElementKind::Image, None, None);
    store.apply_alignment(&el.id, Alignment::Center);
    let first = store.get(&el.id).unwrap().position.x;
    store.apply_alignment(&el.id, Alignment::Center);
    assert_eq!(store.get(&el.id).unwrap().position.x, first);
}

#[test]
fn responsive_widths_scale_without_overrides() {
    let mut store = new_store();
    let el = store.add_element(ElementKind::Image, None, None);
    assert_eq!(el.size.width, 400.0);
    let tablet = resolve_responsive(&el, Breakpoint::Tablet);
    let mobile = resolve_responsive(&el, Breakpoint::Mobile);
    assert!((tablet.width - 320.0).abs() < 1e-9);
    assert!((mobile.width - 240.0).abs() < 1e-9);
    assert_eq!(tablet.y, el.position.y);
    assert_eq!(mobile.y, el.position.y);
}

#[test]
fn document_round_trips_through_json() {
    let doc = sample_document();
    let json = doc.to_json().unwrap();
    let back = Document::from_json(&json).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn sorted_elements_follow_y() {
    let mut store = new_store();
    let low = store.add_element(ElementKind::Text, None, Some(500.0));
    let high = store.add_element(ElementKind::Text, None, Some(100.0));
    let ids: Vec<&str> = store.sorted_elements().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec![high.id.as_str(), low.id.as_str()]);
    assert_eq!(sorted_elements(store.elements()).len(), 2);
}

// ─── Editing flows ──────────────────────────────────────────────

#[test]
fn delete_then_reflow_closes_the_gap() {
    let mut store = new_store();
    let a = store.add_element(ElementKind::Heading, None, None);
    let b = store.add_element(ElementKind::Text, None, None);
    let c = store.add_element(ElementKind::Button, None, None);

    let reflow = store.delete_element(&b.id);
    assert_eq!(store.get(&c.id).unwrap().position.y, 230.0);
    store.reflow(reflow);
    assert_eq!(store.get(&a.id).unwrap().position.y, 50.0);
    assert_eq!(store.get(&c.id).unwrap().position.y, 130.0);
}

#[test]
fn resize_then_reflow_pushes_followers_down() {
    let mut store = new_store();
    let a = store.add_element(ElementKind::Text, None, None);
    let b = store.add_element(ElementKind::Text, None, None);
    let reflow = store.update_element(
        &a.id,
        ElementPatch {
            size: Some(Size {
                width: 400.0,
                height: 200.0,
            }),
            ..Default::default()
        },
    );
    store.reflow(reflow);
    assert_eq!(store.get(&b.id).unwrap().position.y, 50.0 + 200.0 + 20.0);
    assert_sequential(&store);
}

#[test]
fn drag_reorder_then_snapshot() {
    let mut store = new_store();
    let heading = store.add_element(ElementKind::Heading, None, None);
    let text = store.add_element(ElementKind::Text, None, None);

    let mut drag = DragController::new();
    drag.pointer_down(&text.id, 150.0);
    drag.pointer_move(120.0);
    drag.pointer_move(60.0);
    let outcome = drag.pointer_up(Some(40.0), &mut store);
    assert_eq!(
        outcome,
        DragOutcome::Reordered {
            id: text.id.clone(),
            from: 1,
            to: 0
        }
    );
    assert_sequential(&store);

    let snapshot = store.snapshot(Breakpoint::Mobile);
    assert_eq!(snapshot.canvas.width, 375.0);
    assert_eq!(snapshot.canvas.height, 667.0);
    assert_eq!(snapshot.elements[0].id, text.id);
    assert_eq!(snapshot.elements[1].id, heading.id);
    // Heading font 32 scaled to mobile.
    assert!((snapshot.elements[1].font_size.unwrap() - 19.2).abs() < 1e-9);
}

#[test]
fn breakpoint_overrides_survive_reflow() {
    let mut store = new_store();
    let el = store.add_element(ElementKind::Image, None, None);
    store.add_element(ElementKind::Text, None, None);
    store.set_breakpoint(Breakpoint::Mobile);
    store.set_spacing(&el.id, SpacingProperty::Padding, Side::Top, 24.0);
    let mut responsive = BTreeMap::new();
    responsive.insert(
        Breakpoint::Mobile,
        ResponsiveOverride {
            content: BoxProps {
                custom_width: Some(300.0),
                padding: store.get(&el.id).unwrap().responsive[&Breakpoint::Mobile]
                    .content
                    .padding,
                ..Default::default()
            },
            ..Default::default()
        },
    );
    store.update_element(
        &el.id,
        ElementPatch {
            responsive,
            ..Default::default()
        },
    );

    let reflow = store.reorder_element(&el.id, 1);
    store.reflow(reflow);

    let resolved = store.resolve(&el.id, Breakpoint::Mobile).unwrap();
    assert_eq!(resolved.width, 300.0);
    assert_eq!(resolved.padding.top, 24.0);
    assert_eq!(resolved.x, (375.0 - 300.0) / 2.0);
    let desktop = store.resolve(&el.id, Breakpoint::Desktop).unwrap();
    assert_eq!(desktop.width, 400.0);
    assert_eq!(desktop.padding.top, 0.0);
}

#[test]
fn layout_json_resolves_documents() {
    let json = sample_document().to_json().unwrap();
    let out = pagecraft::layout_json(&json, Breakpoint::Tablet).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["breakpoint"], "tablet");
    assert_eq!(value["canvas"]["width"], 768.0);
    assert_eq!(value["elements"].as_array().unwrap().len(), 5);
    assert_eq!(value["background"]["type"], "image");
}

#[test]
fn malformed_documents_are_rejected_with_a_hint() {
    let err = Document::from_json(r#"{ "elements": [ { "id": "x", "type": "carousel" } ] }"#)
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("Failed to parse input"), "{msg}");
    assert!(msg.contains("Hint"), "{msg}");
}
