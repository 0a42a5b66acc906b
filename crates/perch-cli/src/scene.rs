//! JSON scene snapshots.
//!
//! A scene is everything the positioner reads for one overlay: window
//! metrics, the container, the anchor (optionally inside a clipping parent),
//! the overlay, and the requested placement. Geometry uses the same
//! camelCase names as [`LayoutGeometry`].

use anyhow::{Context, Result};
use perch_dom::{DomTree, LayoutGeometry, NodeId};
use perch_position::{OverlayNodes, ViewportMetrics};
use serde::Deserialize;

fn default_vertical_position() -> String {
    "top".to_string()
}

/// One element of a scene.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneElement {
    /// Local name; decides whether a container is the body.
    #[serde(default)]
    pub tag: Option<String>,
    /// Layout snapshot.
    #[serde(default)]
    pub geometry: LayoutGeometry,
}

impl SceneElement {
    /// The element's tag, or `default` when the scene leaves it out.
    #[must_use]
    pub fn tag_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.tag.as_deref().unwrap_or(default)
    }
}

/// A complete positioning scene.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    /// Window metrics.
    #[serde(default)]
    pub viewport: ViewportMetrics,
    /// Geometry of the `<html>` document element (page scroll, borders).
    #[serde(default)]
    pub document: LayoutGeometry,
    /// The bounding container. A `body` tag makes it the page body.
    pub container: SceneElement,
    /// Optional element between the container and the anchor, e.g. a
    /// clipping label wrapper.
    #[serde(default)]
    pub anchor_parent: Option<SceneElement>,
    /// The anchor.
    pub anchor: SceneElement,
    /// The overlay being positioned.
    pub overlay: SceneElement,
    /// `top`, `bottom`, `left` or `right`.
    pub placement: String,
    /// `top` or `bottom`; only read for top/bottom placements.
    #[serde(default = "default_vertical_position")]
    pub vertical_position: String,
    /// Gap to keep between overlay and container edge.
    #[serde(default)]
    pub padding: f32,
}

impl Scene {
    /// Parse a scene from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid scene.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid scene JSON")
    }

    /// Build the DOM snapshot the positioner reads.
    ///
    /// ```text
    /// html
    /// └── body (or body > container)
    ///     ├── [anchor parent] > anchor
    ///     └── overlay
    /// ```
    #[must_use]
    pub fn build_tree(&self) -> (DomTree, OverlayNodes) {
        let mut tree = DomTree::new();
        let html = tree.append_element(NodeId::ROOT, "html", self.document);

        let container_tag = self.container.tag_or("body");
        let container = if container_tag.eq_ignore_ascii_case("body") {
            tree.append_element(html, container_tag, self.container.geometry)
        } else {
            let body = tree.append_element(html, "body", self.document);
            tree.append_element(body, container_tag, self.container.geometry)
        };

        let anchor_parent = self.anchor_parent.as_ref().map_or(container, |parent| {
            tree.append_element(container, parent.tag_or("div"), parent.geometry)
        });
        let target =
            tree.append_element(anchor_parent, self.anchor.tag_or("span"), self.anchor.geometry);
        let overlay =
            tree.append_element(container, self.overlay.tag_or("div"), self.overlay.geometry);

        (
            tree,
            OverlayNodes {
                overlay,
                target,
                container,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use perch_position::compute_position_str;

    const RIGHT_OF_BUTTON: &str = r#"{
        "viewport": { "innerWidth": 800, "innerHeight": 600 },
        "container": {
            "tag": "div",
            "geometry": {
                "clientRect": { "x": 0, "y": 0, "width": 500, "height": 500 },
                "offsetWidth": 500, "offsetHeight": 500,
                "clientWidth": 500, "clientHeight": 500, "scrollWidth": 500
            }
        },
        "anchor": {
            "geometry": {
                "clientRect": { "x": 50, "y": 0, "width": 20, "height": 10 },
                "offsetWidth": 20, "offsetHeight": 10, "scrollWidth": 20
            }
        },
        "overlay": { "geometry": { "clientRect": { "width": 40, "height": 16 } } },
        "placement": "right",
        "padding": 5
    }"#;

    #[test]
    fn test_scene_defaults() {
        let scene = Scene::from_json(RIGHT_OF_BUTTON).unwrap();
        assert_eq!(scene.anchor.tag_or("span"), "span");
        assert_eq!(scene.container.tag_or("body"), "div");
        assert_eq!(scene.vertical_position, "top");
        assert!(scene.anchor_parent.is_none());
    }

    #[test]
    fn test_scene_builds_nested_container() {
        let scene = Scene::from_json(RIGHT_OF_BUTTON).unwrap();
        let (tree, nodes) = scene.build_tree();

        let body = tree.body().unwrap();
        assert_eq!(tree.parent(nodes.container), Some(body));
        assert_eq!(tree.parent(nodes.target), Some(nodes.container));
        assert_eq!(tree.parent(nodes.overlay), Some(nodes.container));
    }

    #[test]
    fn test_scene_positions_overlay() {
        let scene = Scene::from_json(RIGHT_OF_BUTTON).unwrap();
        let (tree, nodes) = scene.build_tree();
        let record = compute_position_str(
            &tree,
            &scene.viewport,
            &scene.placement,
            &scene.vertical_position,
            nodes,
            scene.padding,
        )
        .unwrap()
        .to_record();

        assert_eq!(record.position_top, Some(5.0));
        assert_eq!(record.arrow_offset_top.as_deref(), Some("0%"));
    }

    #[test]
    fn test_body_container_is_the_body() {
        let json = r#"{
            "container": { "tag": "BODY" },
            "anchorParent": { "tag": "label" },
            "anchor": {},
            "overlay": {},
            "placement": "top"
        }"#;
        let scene = Scene::from_json(json).unwrap();
        let (tree, nodes) = scene.build_tree();

        assert_eq!(tree.body(), Some(nodes.container));
        let label = tree.parent(nodes.target).unwrap();
        assert!(tree.is_element(label, "label"));
    }

    #[test]
    fn test_missing_placement_is_rejected() {
        let err = Scene::from_json(r#"{ "container": {}, "anchor": {}, "overlay": {} }"#).unwrap_err();
        assert!(err.to_string().contains("invalid scene JSON"));
    }
}
