// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;
use std::fmt;

use rayon::prelude::*;

use super::edge::Edge;
use super::ids::{EdgeId, Id, NodeId};
use super::node::Node;
use crate::route::{route, Route};

/// Nodes and the edges between them.
///
/// Node order is draw order: later nodes are drawn on top and win hit tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagram {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Diagram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, node_id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id() == node_id)
    }

    pub fn node_mut(&mut self, node_id: &NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|node| node.id() == node_id)
    }

    pub fn edge(&self, edge_id: &EdgeId) -> Option<&Edge> {
        self.edges.iter().find(|edge| edge.id() == edge_id)
    }

    pub fn add_node(&mut self, node: Node) -> Result<(), DiagramError> {
        if self.node(node.id()).is_some() {
            return Err(DiagramError::DuplicateNode {
                node_id: node.id().clone(),
            });
        }
        self.nodes.push(node);
        Ok(())
    }

    /// Removes a node together with every edge that touches it.
    pub fn remove_node(&mut self, node_id: &NodeId) -> Option<Node> {
        let idx = self.nodes.iter().position(|node| node.id() == node_id)?;
        self.edges.retain(|edge| !edge.touches(node_id));
        Some(self.nodes.remove(idx))
    }

    /// Moves a node by `(dx, dy)` world cells. Returns `false` when the node does not exist.
    pub fn move_node(&mut self, node_id: &NodeId, dx: i32, dy: i32) -> bool {
        match self.node_mut(node_id) {
            Some(node) => {
                node.move_by(dx, dy);
                true
            }
            None => false,
        }
    }

    pub fn add_edge(&mut self, edge: Edge) -> Result<(), DiagramError> {
        if self.edge(edge.id()).is_some() {
            return Err(DiagramError::DuplicateEdge {
                edge_id: edge.id().clone(),
            });
        }
        for endpoint in [edge.source(), edge.target()] {
            if self.node(endpoint).is_none() {
                return Err(DiagramError::UnknownNode {
                    node_id: endpoint.clone(),
                });
            }
        }
        self.edges.push(edge);
        Ok(())
    }

    /// Adds an edge with a fresh id between two existing nodes.
    pub fn connect(&mut self, source: &NodeId, target: &NodeId) -> Result<EdgeId, DiagramError> {
        let edge_id = self.next_edge_id();
        self.add_edge(Edge::new(edge_id.clone(), source.clone(), target.clone()))?;
        Ok(edge_id)
    }

    /// The topmost node whose outline contains the world cell `(x, y)`.
    pub fn node_at(&self, x: i32, y: i32) -> Option<&Node> {
        self.nodes.iter().rev().find(|node| node.contains(x, y))
    }

    /// First unused `n:<k>` with `k >= 1`.
    pub fn next_node_id(&self) -> NodeId {
        fresh_id("n", |candidate| {
            self.nodes.iter().any(|node| node.id().as_str() == candidate)
        })
    }

    /// First unused `e:<k>` with `k >= 1`.
    pub fn next_edge_id(&self) -> EdgeId {
        fresh_id("e", |candidate| {
            self.edges.iter().any(|edge| edge.id().as_str() == candidate)
        })
    }

    /// Routes a single edge and clears the connected markers of both endpoints.
    ///
    /// Returns `None` when the edge or one of its endpoints is missing.
    pub fn route_edge(&mut self, edge_id: &EdgeId) -> Option<Route> {
        let edge = self.edge(edge_id)?;
        let (source_id, target_id) = (edge.source().clone(), edge.target().clone());
        let route = route(self.node(&source_id)?, self.node(&target_id)?);
        self.reset_endpoints(&source_id, &target_id);
        Some(route)
    }

    /// Routes every edge in edge order.
    ///
    /// Geometry is computed in parallel; the connected-marker resets are applied afterwards in
    /// edge order. Edges with a missing endpoint are skipped.
    pub fn routes(&mut self) -> Vec<Route> {
        let index: HashMap<&str, &Node> = self
            .nodes
            .iter()
            .map(|node| (node.id().as_str(), node))
            .collect();

        let routed: Vec<(NodeId, NodeId, Route)> = self
            .edges
            .par_iter()
            .filter_map(|edge| {
                let source = index.get(edge.source().as_str())?;
                let target = index.get(edge.target().as_str())?;
                Some((
                    edge.source().clone(),
                    edge.target().clone(),
                    route(*source, *target),
                ))
            })
            .collect();

        routed
            .into_iter()
            .map(|(source_id, target_id, route)| {
                self.reset_endpoints(&source_id, &target_id);
                route
            })
            .collect()
    }

    fn reset_endpoints(&mut self, source_id: &NodeId, target_id: &NodeId) {
        for node in self.nodes.iter_mut() {
            if node.id() == source_id || node.id() == target_id {
                node.reset_edges();
            }
        }
    }
}

fn fresh_id<T>(prefix: &str, taken: impl Fn(&str) -> bool) -> Id<T> {
    let mut k: u64 = 1;
    loop {
        let candidate = format!("{prefix}:{k}");
        if !taken(&candidate) {
            if let Ok(id) = Id::new(candidate) {
                return id;
            }
        }
        k += 1;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagramError {
    DuplicateNode { node_id: NodeId },
    DuplicateEdge { edge_id: EdgeId },
    UnknownNode { node_id: NodeId },
}

impl fmt::Display for DiagramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateNode { node_id } => write!(f, "node {node_id} already exists"),
            Self::DuplicateEdge { edge_id } => write!(f, "edge {edge_id} already exists"),
            Self::UnknownNode { node_id } => write!(f, "node with id {node_id} not found"),
        }
    }
}

impl std::error::Error for DiagramError {}
