//! Pre-order traversal of the node tree.

use crate::classify::{color_from, radius_from, shadow_from, spacing_from, typography_from};
use crate::diagnostics::Diagnostics;
use crate::source::{Document, Node};
use crate::types::Origin;

use super::bag::RawBag;
use super::TraversalLimit;

/// Caps applied while walking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Deepest node depth visited; the root is depth 0.
    pub max_depth: usize,
    /// Maximum number of nodes visited.
    pub max_nodes: usize,
}

/// Result of walking a document.
#[derive(Debug, Default)]
pub struct Walk {
    pub bag: RawBag,
    pub visited: usize,
    /// Set when a cap stopped the walk early.
    pub limit: Option<TraversalLimit>,
}

/// Walk the document in pre-order, emitting raw tokens per node.
///
/// Parents are visited before their children and siblings in source order.
/// The walk uses an explicit stack, so depth is bounded only by `limits`.
pub fn traverse(document: &Document, limits: Limits, diagnostics: &mut Diagnostics) -> Walk {
    let mut walk = Walk::default();
    let Some(root) = document.root() else {
        return walk;
    };

    let mut depth_capped = false;
    let mut stack = vec![root];

    while let Some(id) = stack.pop() {
        if walk.visited >= limits.max_nodes {
            walk.limit = Some(TraversalLimit::Nodes {
                max: limits.max_nodes,
            });
            break;
        }
        let Some(node) = document.get(id) else {
            continue;
        };

        walk.visited += 1;
        visit(node, &mut walk.bag, diagnostics);

        let children = document.children(id);
        if children.is_empty() {
            continue;
        }
        if node.depth() >= limits.max_depth {
            depth_capped = true;
            continue;
        }
        stack.extend(children.iter().rev().copied());
    }

    if walk.limit.is_none() && depth_capped {
        walk.limit = Some(TraversalLimit::Depth {
            max: limits.max_depth,
        });
    }

    walk
}

/// Emit the tokens of a single node.
fn visit(node: &Node, bag: &mut RawBag, diagnostics: &mut Diagnostics) {
    for (index, paint) in node.fills.iter().enumerate() {
        // Gradients, images and hidden paints carry no colour token.
        let Some(color) = paint.solid_color() else {
            continue;
        };
        let origin = Origin::node(format!("color-{}-{}", node.id, index), &node.id);
        match color.and_then(|c| color_from(c, None, origin)) {
            Some(token) => bag.colors.push(token),
            None => diagnostics.malformed(
                &node.id,
                format!("solid fill {} has no complete color", index),
            ),
        }
    }

    if let Some(style) = node.text_style() {
        let origin = Origin::node(format!("typography-{}", node.id), &node.id);
        match typography_from(style, None, origin) {
            Some(token) => bag.typography.push(token),
            None => diagnostics.malformed(&node.id, "text style lacks fontFamily or fontSize"),
        }
    }

    for (index, effect) in node.effects.iter().enumerate() {
        let Some((params, inset)) = effect.shadow() else {
            continue;
        };
        let origin = Origin::node(format!("shadow-{}-{}", node.id, index), &node.id);
        match shadow_from(params, inset, None, origin) {
            Some(token) => bag.shadows.push(token),
            None => diagnostics.malformed(
                &node.id,
                format!("shadow effect {} lacks offset, radius or color", index),
            ),
        }
    }

    if let Some(radius) = node.corner_radius {
        let origin = Origin::node(format!("radius-{}", node.id), &node.id);
        match radius_from(radius, origin) {
            Some(token) => bag.border_radius.push(token),
            None => diagnostics.malformed(&node.id, "cornerRadius is negative"),
        }
    }

    for &(field, value) in &node.spacing {
        let origin = Origin::node(format!("spacing-{}-{}", node.id, field.key()), &node.id);
        if let Some(token) = spacing_from(field, value, origin) {
            bag.spacing.push(token);
        }
    }
}
