// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::ids::{EdgeId, NodeId};
use super::node::Node;

/// A connection between two nodes.
///
/// Edges reference their endpoints by id and never own them. Identity is the edge id, so two
/// edges between the same pair of nodes are distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    id: EdgeId,
    source: NodeId,
    target: NodeId,
}

#[derive(Serialize)]
struct EdgeDoc<'a> {
    id: &'a EdgeId,
    source: &'a Node,
    target: &'a Node,
}

impl Edge {
    pub fn new(id: EdgeId, source: NodeId, target: NodeId) -> Self {
        Self { id, source, target }
    }

    pub fn id(&self) -> &EdgeId {
        &self.id
    }

    pub fn source(&self) -> &NodeId {
        &self.source
    }

    pub fn target(&self) -> &NodeId {
        &self.target
    }

    pub fn touches(&self, node_id: &NodeId) -> bool {
        &self.source == node_id || &self.target == node_id
    }

    /// Serializes as `{ "id", "source": <node>, "target": <node> }` with the endpoint nodes
    /// embedded in full.
    pub fn to_json(&self, source: &Node, target: &Node) -> Result<Value, serde_json::Error> {
        serde_json::to_value(EdgeDoc {
            id: &self.id,
            source,
            target,
        })
    }

    /// Rebuilds an edge from its JSON form, binding the endpoints to `nodes` by id.
    pub fn from_json(value: &Value, nodes: &[Node]) -> Result<Self, EdgeLoadError> {
        let object = value
            .as_object()
            .ok_or_else(|| EdgeLoadError::format("expected an object"))?;

        let id = object
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| EdgeLoadError::format("expected a string 'id'"))?;
        let id = EdgeId::new(id).map_err(|err| EdgeLoadError::format(format!("edge id: {err}")))?;

        let (Some(source), Some(target)) = (object.get("source"), object.get("target")) else {
            return Err(EdgeLoadError::format("expected 'source' and 'target' keys"));
        };

        let source = endpoint_id(source, "source")?;
        let target = endpoint_id(target, "target")?;

        let source = resolve_node(nodes, source)?;
        let target = resolve_node(nodes, target)?;

        Ok(Self::new(id, source, target))
    }
}

fn endpoint_id<'v>(value: &'v Value, key: &str) -> Result<&'v str, EdgeLoadError> {
    let object = value
        .as_object()
        .ok_or_else(|| EdgeLoadError::format(format!("expected '{key}' to be an object")))?;
    object
        .get("id")
        .and_then(Value::as_str)
        .ok_or_else(|| EdgeLoadError::format(format!("expected a string 'id' in '{key}'")))
}

fn resolve_node(nodes: &[Node], node_id: &str) -> Result<NodeId, EdgeLoadError> {
    nodes
        .iter()
        .find(|node| node.id().as_str() == node_id)
        .map(|node| node.id().clone())
        .ok_or_else(|| EdgeLoadError::NodeNotFound {
            node_id: node_id.to_owned(),
        })
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge({}, {})", self.source, self.target)
    }
}

/// Why an edge could not be rebuilt from JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeLoadError {
    /// The edge JSON does not have the expected structure.
    Format { reason: String },
    /// An endpoint references a node id missing from the candidate list.
    NodeNotFound { node_id: String },
}

impl EdgeLoadError {
    fn format(reason: impl Into<String>) -> Self {
        Self::Format {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for EdgeLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format { reason } => write!(f, "invalid edge format: {reason}"),
            Self::NodeNotFound { node_id } => write!(f, "node with id {node_id} not found"),
        }
    }
}

impl std::error::Error for EdgeLoadError {}
