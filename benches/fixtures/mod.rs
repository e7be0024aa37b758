// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use graphos::model::{Diagram, Node, NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridParams {
    pub cols: usize,
    pub rows: usize,
    /// Each node connects to this many of the nodes that follow it in grid order.
    pub fan_out: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Small,
    MediumGrid,
    DenseFan,
}

impl Case {
    pub const fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::MediumGrid => "medium_grid",
            Self::DenseFan => "dense_fan",
        }
    }

    pub const fn params(self) -> GridParams {
        match self {
            Self::Small => GridParams {
                cols: 3,
                rows: 2,
                fan_out: 1,
            },
            Self::MediumGrid => GridParams {
                cols: 8,
                rows: 6,
                fan_out: 2,
            },
            Self::DenseFan => GridParams {
                cols: 12,
                rows: 10,
                fan_out: 6,
            },
        }
    }
}

/// Nodes on a staggered grid so routes mix both biases and both corner pairs.
pub fn grid(params: GridParams) -> Diagram {
    let mut diagram = Diagram::new();
    let mut ids = Vec::with_capacity(params.cols * params.rows);

    for row in 0..params.rows {
        for col in 0..params.cols {
            let idx = row * params.cols + col;
            let id = NodeId::new(format!("n:{}", idx + 1)).expect("node id");
            let stagger = if col % 2 == 0 { 0 } else { 3 };
            let node = Node::new(id.clone(), col as i32 * 16, row as i32 * 8 + stagger, 10, 2)
                .expect("node")
                .with_label(format!("node {}", idx + 1));
            diagram.add_node(node).expect("add node");
            ids.push(id);
        }
    }

    for (idx, source) in ids.iter().enumerate() {
        for target in ids.iter().skip(idx + 1).take(params.fan_out) {
            diagram.connect(source, target).expect("connect");
        }
    }

    diagram
}

pub fn fixture(case: Case) -> Diagram {
    grid(case.params())
}
