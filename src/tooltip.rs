//! Hover tooltip state for interactive renderers.
//!
//! A renderer feeds node pointer events in; the tooltip tracks what to
//! show and where. Events are applied one at a time on the UI thread.

use serde::{Deserialize, Serialize};

/// Rendered (screen) position of a node, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderedPosition {
    pub x: f64,
    pub y: f64,
}

impl RenderedPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pointer events on a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum NodeEvent {
    /// Pointer entered a node.
    Over { label: String, position: RenderedPosition },
    /// The hovered node moved (e.g. dragged or re-laid out).
    Moved { position: RenderedPosition },
    /// Pointer left the node.
    Out,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub text: String,
    pub position: RenderedPosition,
    pub hidden: bool,
}

impl Default for Tooltip {
    fn default() -> Self {
        Self { text: String::new(), position: RenderedPosition::default(), hidden: true }
    }
}

impl Tooltip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: &NodeEvent) {
        match event {
            NodeEvent::Over { label, position } => {
                self.text.clone_from(label);
                self.position = *position;
                self.hidden = false;
            }
            // Position tracks the node even while hidden.
            NodeEvent::Moved { position } => self.position = *position,
            NodeEvent::Out => self.hidden = true,
        }
    }

    pub fn is_visible(&self) -> bool {
        !self.hidden
    }

    /// CSS `left` value.
    pub fn css_left(&self) -> String {
        format!("{}px", self.position.x)
    }

    /// CSS `top` value.
    pub fn css_top(&self) -> String {
        format!("{}px", self.position.y)
    }
}
