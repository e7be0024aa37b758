// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ids::NodeId;
use crate::route::RouteNode;

/// One side of a node's box outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

/// Set of node sides flagged as carrying an edge connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sides(u8);

impl Sides {
    pub const NONE: Self = Self(0);

    const fn bit(side: Side) -> u8 {
        match side {
            Side::Top => 1 << 0,
            Side::Bottom => 1 << 1,
            Side::Left => 1 << 2,
            Side::Right => 1 << 3,
        }
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, side: Side) -> bool {
        (self.0 & Self::bit(side)) != 0
    }

    pub fn with(self, side: Side) -> Self {
        Self(self.0 | Self::bit(side))
    }
}

/// Largest absolute coordinate or extent a node may have.
///
/// Keeps every derived sum (outline ends, centers, spans between two nodes) inside `i32`.
pub const COORD_LIMIT: i32 = 1 << 28;

/// A labeled box on the canvas.
///
/// `(x, y)` is the top-left corner of the outline. The outline spans `x..=x + width` and
/// `y..=y + height`, so the center sits `width / 2` and `height / 2` cells in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NodeDoc")]
pub struct Node {
    id: NodeId,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    label: String,
    #[serde(skip)]
    connected: Sides,
}

#[derive(Deserialize)]
struct NodeDoc {
    id: NodeId,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    #[serde(default)]
    label: String,
}

impl TryFrom<NodeDoc> for Node {
    type Error = NodeError;

    fn try_from(doc: NodeDoc) -> Result<Self, Self::Error> {
        let mut node = Node::new(doc.id, doc.x, doc.y, doc.width, doc.height)?;
        node.label = doc.label;
        Ok(node)
    }
}

impl Node {
    pub fn new(id: NodeId, x: i32, y: i32, width: i32, height: i32) -> Result<Self, NodeError> {
        if width < 1 || height < 1 {
            return Err(NodeError::InvalidSize { width, height });
        }
        let in_range = |value: i32| (-COORD_LIMIT..=COORD_LIMIT).contains(&value);
        if !(in_range(x) && in_range(y) && width <= COORD_LIMIT && height <= COORD_LIMIT) {
            return Err(NodeError::OutOfRange {
                x,
                y,
                width,
                height,
            });
        }

        Ok(Self {
            id,
            x,
            y,
            width,
            height,
            label: String::new(),
            connected: Sides::NONE,
        })
    }

    /// Builds a node whose center lands on `(center_x, center_y)`.
    pub fn centered(
        id: NodeId,
        center_x: i32,
        center_y: i32,
        width: i32,
        height: i32,
    ) -> Result<Self, NodeError> {
        Self::new(
            id,
            center_x.saturating_sub(width / 2),
            center_y.saturating_sub(height / 2),
            width,
            height,
        )
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    pub fn center_y(&self) -> i32 {
        self.y + self.height / 2
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Column of the right edge of the outline.
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Row of the bottom edge of the outline.
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Moves the node, stopping at [`COORD_LIMIT`].
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.x = self.x.saturating_add(dx).clamp(-COORD_LIMIT, COORD_LIMIT);
        self.y = self.y.saturating_add(dy).clamp(-COORD_LIMIT, COORD_LIMIT);
    }

    /// Returns `true` when the world cell `(x, y)` lies on the outline or inside it.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    pub fn connected(&self) -> Sides {
        self.connected
    }

    pub fn connect_side(&mut self, side: Side) {
        self.connected = self.connected.with(side);
    }

    /// Clears every connected-side marker.
    pub fn reset_edges(&mut self) {
        self.connected = Sides::NONE;
    }
}

impl RouteNode for Node {
    fn center_x(&self) -> i32 {
        Node::center_x(self)
    }

    fn center_y(&self) -> i32 {
        Node::center_y(self)
    }

    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Node({}, {}x{} at {},{})",
            self.id, self.width, self.height, self.x, self.y
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeError {
    InvalidSize {
        width: i32,
        height: i32,
    },
    OutOfRange {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
}

impl fmt::Display for NodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "node size must be at least 1x1, got {width}x{height}")
            }
            Self::OutOfRange {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "node {width}x{height} at {x},{y} exceeds the coordinate limit of {COORD_LIMIT}"
            ),
        }
    }
}

impl std::error::Error for NodeError {}
