// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence for diagrams on disk.
//!
//! A diagram lives in one JSON file holding its nodes and edges. Edges embed their endpoint
//! nodes and are rebound by id on load.

pub mod diagram_file;

pub use diagram_file::{DiagramFile, StoreError, WriteDurability};
