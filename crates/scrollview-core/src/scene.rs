//! Static composition content: the component node table and connector spans.
//!
//! Nodes are configuration, immutable once the engine is built. Only their
//! derived screen position changes from tick to tick.

use crate::paint::Rgba;
use glam::Vec2;
use serde::Deserialize;
use std::rc::Rc;

/// One entry of the node table as it appears in configuration.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NodeSpec {
    pub id: String,
    /// Displacement from the viewport center at full explosion, in reference pixels.
    pub offset: [f32; 2],
    pub label: String,
    pub color: Rgba,
    pub radius: f32,
}

/// A line between two reference offsets, displaced the same way nodes are.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct ConnectorSpec {
    pub from: [f32; 2],
    pub to: [f32; 2],
}

/// Render-ready node with its caption pre-computed.
#[derive(Clone, Debug, PartialEq)]
pub struct ComponentNode {
    pub id: String,
    pub offset: Vec2,
    pub label: String,
    /// Upper-cased label as drawn.
    pub caption: Rc<str>,
    pub color: Rgba,
    pub radius: f32,
}

impl ComponentNode {
    pub fn new(id: &str, offset: Vec2, label: &str, color: Rgba, radius: f32) -> Self {
        Self {
            id: id.to_string(),
            offset,
            label: label.to_string(),
            caption: Rc::from(label.to_uppercase()),
            color,
            radius,
        }
    }
}

impl From<&NodeSpec> for ComponentNode {
    fn from(spec: &NodeSpec) -> Self {
        ComponentNode::new(
            &spec.id,
            Vec2::from(spec.offset),
            &spec.label,
            spec.color,
            spec.radius,
        )
    }
}

const BLUE: Rgba = Rgba::opaque(0x00, 0x50, 0xFF);
const CYAN: Rgba = Rgba::opaque(0x00, 0xD6, 0xFF);

fn spec(id: &str, offset: [f32; 2], label: &str, color: Rgba, radius: f32) -> NodeSpec {
    NodeSpec {
        id: id.to_string(),
        offset,
        label: label.to_string(),
        color,
        radius,
    }
}

/// The eight headphone components of the reference composition.
pub fn reference_nodes() -> Vec<NodeSpec> {
    vec![
        spec("processor", [0.0, 0.0], "Sony QN2e Processor", BLUE, 60.0),
        spec("driver", [-280.0, 0.0], "40mm Driver", CYAN, 90.0),
        spec("chamber", [280.0, 0.0], "Acoustic Chamber", CYAN, 90.0),
        spec("headband", [0.0, -220.0], "Magnesium Band", Rgba::WHITE, 40.0),
        spec("mic_left", [-130.0, -130.0], "NC Mic", BLUE, 20.0),
        spec("mic_right", [130.0, -130.0], "NC Mic", BLUE, 20.0),
        spec("array_left", [-130.0, 130.0], "Voice Array", CYAN, 20.0),
        spec("array_right", [130.0, 130.0], "Voice Array", CYAN, 20.0),
    ]
}

/// Horizontal span across the driver/chamber pair and vertical span from the
/// headband down to the voice-array row.
pub fn reference_connectors() -> Vec<ConnectorSpec> {
    vec![
        ConnectorSpec {
            from: [-280.0, 0.0],
            to: [280.0, 0.0],
        },
        ConnectorSpec {
            from: [0.0, -220.0],
            to: [0.0, 130.0],
        },
    ]
}
