//! Default visual encoding for connectivity graphs.
//!
//! Expressed as Cytoscape-style selector/style rules. Node colour encodes
//! the terminal classification; edges are directed.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as Json, json};

use crate::model::Classification;

pub const NODE_COLOR: &str = "#80F0F0";
pub const AXON_COLOR: &str = "green";
pub const DENDRITE_COLOR: &str = "red";
pub const BOTH_COLOR: &str = "gray";
pub const EDGE_COLOR: &str = "#9dbaea";

/// One selector and the style properties applied to matching elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleRule {
    pub selector: String,
    pub style: Map<String, Json>,
}

impl StyleRule {
    fn new(selector: impl Into<String>, style: Json) -> Self {
        let style = match style {
            Json::Object(map) => map,
            _ => Map::new(),
        };
        Self { selector: selector.into(), style }
    }
}

/// Selector matching nodes of one classification.
pub fn classification_selector(classification: Classification) -> String {
    format!("node[classification = \"{classification}\"]")
}

/// Colour used for a classification.
pub fn classification_color(classification: Classification) -> &'static str {
    match classification {
        Classification::None => NODE_COLOR,
        Classification::Axon => AXON_COLOR,
        Classification::Dendrite => DENDRITE_COLOR,
        Classification::Both => BOTH_COLOR,
    }
}

pub fn default_stylesheet() -> Vec<StyleRule> {
    let mut rules = vec![StyleRule::new(
        "node",
        json!({
            "label": "data(label)",
            "background-color": NODE_COLOR,
            "text-valign": "center",
            "text-wrap": "wrap",
            "text-max-width": "80px",
            "font-size": "6px"
        }),
    )];

    for classification in [Classification::Axon, Classification::Dendrite, Classification::Both] {
        rules.push(StyleRule::new(
            classification_selector(classification),
            json!({ "background-color": classification_color(classification) }),
        ));
    }

    rules.push(StyleRule::new(
        "edge",
        json!({
            "width": 2,
            "line-color": EDGE_COLOR,
            "target-arrow-color": EDGE_COLOR,
            "target-arrow-shape": "triangle",
            "curve-style": "bezier"
        }),
    ));
    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_terminal_state_is_styled() {
        let sheet = default_stylesheet();
        assert_eq!(sheet.len(), 5);
        assert_eq!(sheet[0].selector, "node");
        assert_eq!(sheet[1].selector, r#"node[classification = "axon"]"#);
        assert_eq!(sheet[3].style["background-color"], "gray");
        assert_eq!(sheet[4].style["target-arrow-shape"], "triangle");
    }
}
