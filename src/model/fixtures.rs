// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::diagram::Diagram;
use super::edge::Edge;
use super::ids::{EdgeId, NodeId};
use super::node::Node;

fn nid(value: &str) -> NodeId {
    NodeId::new(value).expect("node id")
}

fn eid(value: &str) -> EdgeId {
    EdgeId::new(value).expect("edge id")
}

fn boxed(id: &str, center_x: i32, center_y: i32, label: &str) -> Node {
    Node::centered(nid(id), center_x, center_y, 10, 2)
        .expect("node size")
        .with_label(label)
}

/// A small pipeline that exercises both biases, with and without corners.
pub fn demo_diagram() -> Diagram {
    let mut diagram = Diagram::new();

    for node in [
        boxed("n:1", 10, 4, "start"),
        boxed("n:2", 10, 12, "parse"),
        boxed("n:3", 34, 12, "route"),
        boxed("n:4", 40, 22, "render"),
    ] {
        diagram.add_node(node).expect("unique node id");
    }

    for (id, source, target) in [
        ("e:1", "n:1", "n:2"),
        ("e:2", "n:2", "n:3"),
        ("e:3", "n:3", "n:4"),
        ("e:4", "n:1", "n:3"),
    ] {
        diagram
            .add_edge(Edge::new(eid(id), nid(source), nid(target)))
            .expect("known endpoints");
    }

    diagram
}
