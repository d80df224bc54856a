//! Conversion of untyped design-source JSON into the typed model.
//!
//! Conversion is lenient. Only a top-level value that is not an object is an
//! error; every other problem drops the offending entry and records a
//! malformed-input diagnostic.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::diagnostics::Diagnostics;
use crate::error::{DtxError, Result};

use super::node::{Document, Node, NodeId, NodeKind, SpacingField};
use super::paint::{Effect, Paint, TextStyle};
use super::style::{StyleDefinition, StyleEntry, StyleType};
use super::DesignSource;

/// Parse design-source JSON text.
///
/// Nesting depth is unlimited here; the walker's caps bound traversal
/// instead. Deserialization grows the stack on demand.
pub fn parse_source(text: &str) -> Result<DesignSource> {
    let mut deserializer = serde_json::Deserializer::from_str(text);
    deserializer.disable_recursion_limit();

    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))
        .and_then(|value| deserializer.end().map(|()| value))
        .map_err(|e| DtxError::Parse {
            message: format!("Invalid design-source JSON: {}", e),
            help: None,
        })?;
    source_from_value(value)
}

/// Convert an already-parsed JSON value.
pub fn source_from_value(value: Value) -> Result<DesignSource> {
    let Value::Object(mut root) = value else {
        return Err(DtxError::Parse {
            message: "Design source must be a JSON object".to_string(),
            help: Some("Expected { \"document\": {...}, \"styles\": {...} }".to_string()),
        });
    };

    let mut diagnostics = Diagnostics::new();

    let name = take_string(&mut root, "name", "source", &mut diagnostics);
    let file_id = take_string(&mut root, "fileId", "source", &mut diagnostics);

    let document = match root.remove("document") {
        None | Some(Value::Null) => None,
        Some(value @ Value::Object(_)) => Some(parse_document(value, &mut diagnostics)),
        Some(_) => {
            diagnostics.malformed("document", "document is not an object");
            None
        }
    };

    let styles = match root.remove("styles") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Object(map)) => parse_styles(map, &mut diagnostics),
        Some(_) => {
            diagnostics.malformed("styles", "styles is not an object");
            Vec::new()
        }
    };

    Ok(DesignSource {
        name,
        file_id,
        document,
        styles,
        diagnostics,
    })
}

/// Build the node arena with an explicit stack.
///
/// Children are pushed in reverse so they are popped, and therefore stored,
/// in source order.
fn parse_document(root: Value, diagnostics: &mut Diagnostics) -> Document {
    let mut document = Document::new();
    let mut stack: Vec<(Value, Option<NodeId>)> = vec![(root, None)];

    while let Some((value, parent)) = stack.pop() {
        let Value::Object(mut object) = value else {
            let subject = parent
                .and_then(|p| document.get(p))
                .map(|n| n.id.clone())
                .unwrap_or_else(|| "document".to_string());
            diagnostics.malformed(subject, "child node is not an object");
            continue;
        };

        let children = object.remove("children");
        let node = parse_node(object, document.len(), diagnostics);
        let node_id = node.id.clone();

        let Some(id) = document.push(parent, node) else {
            continue;
        };

        match children {
            None | Some(Value::Null) => {}
            Some(Value::Array(children)) => {
                for child in children.into_iter().rev() {
                    stack.push((child, Some(id)));
                }
            }
            Some(_) => diagnostics.malformed(node_id, "children is not an array"),
        }
    }

    document
}

fn parse_node(mut object: Map<String, Value>, index: usize, diagnostics: &mut Diagnostics) -> Node {
    let id = match take_string(&mut object, "id", "node", diagnostics) {
        Some(id) => id,
        None => {
            let fallback = format!("#{}", index);
            diagnostics.malformed(fallback.clone(), "node has no id");
            fallback
        }
    };

    let kind = take_string(&mut object, "type", &id, diagnostics)
        .map(|t| NodeKind::parse(&t))
        .unwrap_or_else(|| NodeKind::Other(String::new()));

    let mut node = Node::new(id, kind);
    node.name = take_string(&mut object, "name", &node.id, diagnostics);

    if let Some(fills) = object.remove("fills") {
        node.fills = parse_list::<Paint>(fills, "fill", &node.id, diagnostics);
    }
    if let Some(effects) = object.remove("effects") {
        node.effects = parse_list::<Effect>(effects, "effect", &node.id, diagnostics);
    }
    if node.kind == NodeKind::Text {
        if let Some(style) = object.remove("style") {
            node.style = parse_item::<TextStyle>(style, "text style", &node.id, diagnostics);
        }
    }

    node.corner_radius = take_number(&object, "cornerRadius", &node.id, diagnostics);
    for field in SpacingField::ALL {
        if let Some(value) = take_number(&object, field.key(), &node.id, diagnostics) {
            node.spacing.push((field, value));
        }
    }

    node
}

fn parse_styles(map: Map<String, Value>, diagnostics: &mut Diagnostics) -> Vec<StyleEntry> {
    let mut styles = Vec::with_capacity(map.len());

    for (id, value) in map {
        let Value::Object(mut object) = value else {
            diagnostics.malformed(id, "style entry is not an object");
            continue;
        };

        let Some(style_type) = take_string(&mut object, "styleType", &id, diagnostics) else {
            diagnostics.malformed(id, "style has no styleType");
            continue;
        };
        let Some(style_type) = StyleType::parse(&style_type) else {
            tracing::debug!(style = %id, style_type = %style_type, "ignoring style type");
            continue;
        };
        let Some(name) = take_string(&mut object, "name", &id, diagnostics) else {
            diagnostics.malformed(id, "style has no name");
            continue;
        };
        let description = take_string(&mut object, "description", &id, diagnostics)
            .filter(|d| !d.trim().is_empty());
        let Some(definition) = object.remove("definition") else {
            diagnostics.malformed(id, "style has no definition");
            continue;
        };

        let definition = match style_type {
            StyleType::Fill => unwrap_definition(definition, "fills")
                .map(|v| StyleDefinition::Fill(parse_list(v, "fill", &id, diagnostics))),
            StyleType::Text => unwrap_definition(definition, "style")
                .and_then(|v| parse_item::<TextStyle>(v, "text style", &id, diagnostics))
                .map(StyleDefinition::Text),
            StyleType::Effect => unwrap_definition(definition, "effects")
                .map(|v| StyleDefinition::Effect(parse_list(v, "effect", &id, diagnostics))),
        };

        match definition {
            Some(definition) => styles.push(StyleEntry {
                id,
                name,
                description,
                definition,
            }),
            None => diagnostics.malformed(id, "style definition is malformed"),
        }
    }

    styles
}

/// Accept a definition either directly or wrapped as `{ key: ... }`.
fn unwrap_definition(definition: Value, key: &str) -> Option<Value> {
    match definition {
        Value::Object(mut object) if object.contains_key(key) => object.remove(key),
        Value::Null => None,
        other => Some(other),
    }
}

fn parse_list<T: DeserializeOwned>(
    value: Value,
    what: &str,
    subject: &str,
    diagnostics: &mut Diagnostics,
) -> Vec<T> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| parse_item(item, what, subject, diagnostics))
            .collect(),
        _ => {
            diagnostics.malformed(subject, format!("{} list is not an array", what));
            Vec::new()
        }
    }
}

fn parse_item<T: DeserializeOwned>(
    value: Value,
    what: &str,
    subject: &str,
    diagnostics: &mut Diagnostics,
) -> Option<T> {
    match serde_json::from_value(value) {
        Ok(item) => Some(item),
        Err(e) => {
            diagnostics.malformed(subject, format!("invalid {}: {}", what, e));
            None
        }
    }
}

fn take_string(
    object: &mut Map<String, Value>,
    key: &str,
    subject: &str,
    diagnostics: &mut Diagnostics,
) -> Option<String> {
    match object.remove(key)? {
        Value::String(s) => Some(s),
        Value::Null => None,
        _ => {
            diagnostics.malformed(subject, format!("{} is not a string", key));
            None
        }
    }
}

fn take_number(
    object: &Map<String, Value>,
    key: &str,
    subject: &str,
    diagnostics: &mut Diagnostics,
) -> Option<f64> {
    match object.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::Null => None,
        _ => {
            diagnostics.malformed(subject, format!("{} is not a number", key));
            None
        }
    }
}
