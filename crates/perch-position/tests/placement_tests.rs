//! Integration tests for overlay placement against body and nested containers.

use perch_common::warning::has_warned;
use perch_dom::{DomRect, DomTree, LayoutGeometry, NodeId};
use perch_position::{
    ArrowOffset, ContainerKind, ContainerRef, OverlayNodes, Percentage, Placement,
    PlacementRequest, PositionError, VerticalAnchor, VerticalPosition, ViewportMetrics,
    compute_position, compute_position_str,
};

fn boxed(x: f32, y: f32, width: f32, height: f32) -> LayoutGeometry {
    LayoutGeometry::from_rect(DomRect::new(x, y, width, height))
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

/// Helper: a document scrolled to `page_y`, with anchor and overlay placed in
/// the body. `anchor` is in viewport coordinates.
fn body_scene(anchor: DomRect, overlay: (f32, f32), page_y: f32) -> (DomTree, ViewportMetrics, OverlayNodes) {
    let mut tree = DomTree::new();
    let html = tree.append_element(
        NodeId::ROOT,
        "html",
        LayoutGeometry {
            scroll_top: page_y,
            ..boxed(0.0, -page_y, 800.0, 3000.0)
        },
    );
    let body = tree.append_element(
        html,
        "body",
        LayoutGeometry {
            client_height: 600.0,
            ..boxed(0.0, -page_y, 800.0, 3000.0)
        },
    );
    let target = tree.append_element(body, "button", LayoutGeometry::from_rect(anchor));
    let overlay = tree.append_element(body, "div", boxed(0.0, 0.0, overlay.0, overlay.1));

    let viewport = ViewportMetrics::new(800.0, 600.0).scrolled_to(0.0, page_y);
    (
        tree,
        viewport,
        OverlayNodes {
            overlay,
            target,
            container: body,
        },
    )
}

/// Helper: a scrollable 300x200 panel at (100, 50) in an unscrolled page.
/// `local_anchor` is in the panel's content coordinates.
fn panel_scene(
    local_anchor: DomRect,
    overlay: (f32, f32),
    panel_scroll: f32,
) -> (DomTree, ViewportMetrics, OverlayNodes) {
    let mut tree = DomTree::new();
    let html = tree.append_element(NodeId::ROOT, "html", boxed(0.0, 0.0, 800.0, 600.0));
    let body = tree.append_element(html, "body", boxed(0.0, 0.0, 800.0, 600.0));
    let panel = tree.append_element(
        body,
        "section",
        LayoutGeometry {
            scroll_top: panel_scroll,
            ..boxed(100.0, 50.0, 300.0, 200.0)
        },
    );
    let target = tree.append_element(
        panel,
        "a",
        boxed(
            100.0 + local_anchor.x,
            50.0 + local_anchor.y - panel_scroll,
            local_anchor.width,
            local_anchor.height,
        ),
    );
    let overlay = tree.append_element(panel, "div", boxed(0.0, 0.0, overlay.0, overlay.1));
    (
        tree,
        ViewportMetrics::new(800.0, 600.0),
        OverlayNodes {
            overlay,
            target,
            container: panel,
        },
    )
}

// ========== body container ==========

#[test]
fn test_body_container_uses_page_coordinates() {
    let (tree, viewport, nodes) = body_scene(DomRect::new(100.0, 200.0, 60.0, 20.0), (40.0, 30.0), 1000.0);
    let result = compute_position_str(&tree, &viewport, "right", "top", nodes, 0.0).unwrap();

    assert!(close(result.position_left, 160.0));
    assert_eq!(result.vertical, VerticalPosition::Top(1195.0));
    assert_eq!(result.arrow, ArrowOffset::Top(Percentage::CENTER));
}

#[test]
fn test_body_clamp_accounts_for_page_scroll() {
    let (tree, viewport, nodes) = body_scene(DomRect::new(100.0, 5.0, 60.0, 10.0), (40.0, 30.0), 1000.0);
    let result = compute_position_str(&tree, &viewport, "left", "top", nodes, 10.0).unwrap();

    // Proposed top 995 sits above the visible region (1000 + 10 padding).
    let top = result.position_top().unwrap();
    assert!(close(top - 10.0 - 1000.0, 0.0));
    assert!(close(result.arrow.percentage().value(), 0.0));
}

#[test]
fn test_body_bottom_anchor_warns_on_height_mismatch() {
    let (mut tree, viewport, nodes) =
        body_scene(DomRect::new(100.0, 200.0, 60.0, 20.0), (40.0, 30.0), 0.0);
    tree.set_geometry(
        nodes.container,
        LayoutGeometry {
            client_height: 2400.0,
            ..*tree.geometry(nodes.container)
        },
    );

    let result = compute_position_str(&tree, &viewport, "top", "bottom", nodes, 0.0).unwrap();

    // clientHeight wins for the bottom-anchored position ...
    assert_eq!(result.position_bottom(), Some(2400.0 - 200.0));
    // ... and the disagreement with the viewport height is reported.
    assert!(has_warned(
        "Position",
        "container clientHeight 2400 differs from measured height 600; bottom-anchored overlays use clientHeight"
    ));
}

// ========== nested, scrollable container ==========

#[test]
fn test_panel_positions_are_local_and_scroll_stable() {
    let anchor = DomRect::new(20.0, 150.0, 40.0, 10.0);
    let (tree, viewport, nodes) = panel_scene(anchor, (30.0, 20.0), 0.0);
    let unscrolled = compute_position_str(&tree, &viewport, "bottom", "top", nodes, 0.0).unwrap();

    let (tree, viewport, nodes) = panel_scene(anchor, (30.0, 20.0), 120.0);
    let scrolled = compute_position_str(&tree, &viewport, "bottom", "top", nodes, 0.0).unwrap();

    assert_eq!(unscrolled.position_top(), Some(160.0));
    assert_eq!(unscrolled, scrolled);
}

#[test]
fn test_panel_vertical_clamp_uses_panel_scroll() {
    // Anchor scrolled out of view above the panel's visible region.
    let (tree, viewport, nodes) = panel_scene(DomRect::new(20.0, 30.0, 40.0, 10.0), (30.0, 20.0), 120.0);
    let result = compute_position_str(&tree, &viewport, "right", "top", nodes, 4.0).unwrap();

    assert!(close(result.position_top().unwrap(), 124.0));
    assert!(close(result.position_left, 60.0));
}

#[test]
fn test_panel_bottom_clamp_pulls_overlay_up() {
    // Proposed top 190 + 20 + 5 = 215 > 200.
    let (tree, viewport, nodes) = panel_scene(DomRect::new(20.0, 190.0, 40.0, 20.0), (30.0, 20.0), 0.0);
    let result = compute_position_str(&tree, &viewport, "left", "top", nodes, 5.0).unwrap();

    assert!(close(result.position_top().unwrap(), 175.0));
    assert!(close(result.arrow_offset_top().unwrap().value(), 125.0));
}

#[test]
fn test_arrow_outside_overlay_is_reported_not_clamped() {
    let (tree, viewport, nodes) = panel_scene(DomRect::new(20.0, 0.0, 40.0, 2.0), (30.0, 10.0), 0.0);
    let result = compute_position_str(&tree, &viewport, "right", "top", nodes, 20.0).unwrap();

    // Proposed top -4, corrected by 24 on a 10px overlay.
    assert!(close(result.arrow.percentage().value(), -190.0));
    assert!(has_warned(
        "Position",
        "arrow offset lies outside the overlay; the boundary correction exceeds half its size"
    ));
}

#[test]
fn test_truncated_anchor_centres_on_visible_width() {
    let (mut tree, viewport, nodes) = panel_scene(DomRect::new(0.0, 100.0, 240.0, 20.0), (40.0, 20.0), 0.0);
    tree.set_geometry(
        nodes.target,
        LayoutGeometry {
            offset_width: 120.0,
            scroll_width: 240.0,
            ..*tree.geometry(nodes.target)
        },
    );
    let result = compute_position_str(&tree, &viewport, "top", "top", nodes, 0.0).unwrap();

    assert!(close(result.position_left, (120.0 - 40.0) / 2.0));
}

// ========== request shapes ==========

#[test]
fn test_every_combination_sets_one_key_per_axis() {
    let (tree, viewport, nodes) = panel_scene(DomRect::new(100.0, 80.0, 40.0, 10.0), (30.0, 20.0), 0.0);
    for placement in ["top", "bottom", "left", "right"] {
        for anchor in ["top", "bottom"] {
            let record = compute_position_str(&tree, &viewport, placement, anchor, nodes, 2.0)
                .unwrap()
                .to_record();
            assert!(record.position_left.is_some());
            assert!(record.position_top.is_some() != record.position_bottom.is_some());
            assert!(record.arrow_offset_left.is_some() != record.arrow_offset_top.is_some());
        }
    }
}

#[test]
fn test_explicit_container_kind_overrides_tag() {
    let (tree, viewport, nodes) = panel_scene(DomRect::new(100.0, 80.0, 40.0, 10.0), (30.0, 20.0), 0.0);
    let inferred = ContainerRef::infer(&tree, nodes.container);
    assert_eq!(inferred.kind, ContainerKind::Element);

    let as_page = ContainerRef::new(nodes.container, ContainerKind::Body);
    let local = compute_position(
        &tree,
        &viewport,
        &PlacementRequest::new(Placement::Right, nodes.overlay, nodes.target, inferred),
    );
    let page = compute_position(
        &tree,
        &viewport,
        &PlacementRequest::new(Placement::Right, nodes.overlay, nodes.target, as_page),
    );

    assert!(close(local.position_left, 140.0));
    assert!(close(page.position_left, 240.0));
}

#[test]
fn test_typed_and_string_entry_points_agree() {
    let (tree, viewport, nodes) = panel_scene(DomRect::new(100.0, 80.0, 40.0, 10.0), (30.0, 20.0), 0.0);
    let request = PlacementRequest::new(
        Placement::Bottom,
        nodes.overlay,
        nodes.target,
        ContainerRef::infer(&tree, nodes.container),
    )
    .vertical_anchor(VerticalAnchor::Bottom)
    .padding(3.0);

    assert_eq!(
        Ok(compute_position(&tree, &viewport, &request)),
        compute_position_str(&tree, &viewport, "bottom", "bottom", nodes, 3.0)
    );
}

#[test]
fn test_invalid_placement_produces_no_result() {
    let (tree, viewport, nodes) = panel_scene(DomRect::new(100.0, 80.0, 40.0, 10.0), (30.0, 20.0), 0.0);
    let err = compute_position_str(&tree, &viewport, "diagonal", "top", nodes, 0.0).unwrap_err();
    assert_eq!(err, PositionError::invalid_placement("diagonal"));
    assert!(err.to_string().contains("\"diagonal\""));
}
