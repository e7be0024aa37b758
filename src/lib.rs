// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Graphos: terminal diagram editor with orthogonal, corner-routed edges.
//!
//! `route` turns a pair of nodes into axis-aligned segments, `render` draws them (and the
//! nodes) onto any [`render::Surface`], and `tui` wraps both in an interactive editor.

pub mod model;
pub mod render;
pub mod route;
pub mod store;
pub mod tui;
pub mod ui;
