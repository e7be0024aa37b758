// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A [`Diagram`] owns its nodes and edges; edges reference nodes by [`NodeId`].

pub mod diagram;
pub mod edge;
pub(crate) mod fixtures;
pub mod ids;
pub mod node;

pub use diagram::{Diagram, DiagramError};
pub use edge::{Edge, EdgeLoadError};
pub use fixtures::demo_diagram;
pub use ids::{EdgeId, Id, IdError, NodeId};
pub use node::{Node, NodeError, Side, Sides, COORD_LIMIT};
