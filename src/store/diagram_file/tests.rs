// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rstest::{fixture, rstest};
use serde_json::json;

use super::{fill_tmp, DiagramFile, StoreError, WriteDurability};
use crate::model::{demo_diagram, Diagram, DiagramError, EdgeLoadError, NodeId};

static TEMP_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

struct TempDir {
    path: PathBuf,
}

impl TempDir {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let counter = TEMP_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let mut path = env::temp_dir();
        path.push(format!(
            "graphos-{prefix}-{}-{nanos}-{counter}",
            std::process::id()
        ));
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

struct DiagramFileTestCtx {
    tmp: TempDir,
    file: DiagramFile,
}

impl DiagramFileTestCtx {
    fn new(prefix: &str) -> Self {
        let tmp = TempDir::new(prefix);
        let file = DiagramFile::new(tmp.path().join("diagram.json"));
        Self { tmp, file }
    }

    fn write_json(&self, value: serde_json::Value) {
        std::fs::write(self.file.path(), value.to_string()).unwrap();
    }
}

#[fixture]
fn ctx() -> DiagramFileTestCtx {
    DiagramFileTestCtx::new("diagram-file")
}

fn node_json(id: &str, x: i32) -> serde_json::Value {
    json!({ "id": id, "x": x, "y": 0, "width": 4, "height": 2, "label": id })
}

fn edge_json(id: &str, source: &str, target: &str) -> serde_json::Value {
    json!({ "id": id, "source": node_json(source, 0), "target": node_json(target, 10) })
}

#[rstest]
fn save_then_load_round_trips(ctx: DiagramFileTestCtx) {
    let diagram = demo_diagram();
    ctx.file.save(&diagram).unwrap();

    assert!(ctx.file.exists());
    assert_eq!(ctx.file.load().unwrap(), diagram);
}

#[rstest]
fn saved_edges_embed_their_endpoint_nodes(ctx: DiagramFileTestCtx) {
    ctx.file.save(&demo_diagram()).unwrap();

    let raw = std::fs::read_to_string(ctx.file.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["nodes"].as_array().map(Vec::len), Some(4));

    let first = &value["edges"][0];
    assert_eq!(first["id"], "e:1");
    assert_eq!(first["source"]["id"], "n:1");
    assert_eq!(first["source"]["label"], "start");
    assert_eq!(first["target"]["id"], "n:2");
}

#[rstest]
fn save_leaves_no_temp_files_behind(ctx: DiagramFileTestCtx) {
    let file = ctx.file.clone().with_durability(WriteDurability::Durable);
    file.save(&demo_diagram()).unwrap();
    file.save(&Diagram::new()).unwrap();

    let names = std::fs::read_dir(ctx.tmp.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["diagram.json".to_owned()]);
    assert_eq!(file.load().unwrap(), Diagram::new());
}

#[cfg(target_os = "linux")]
#[rstest]
fn failed_temp_write_removes_the_temp_file(ctx: DiagramFileTestCtx) {
    let tmp_path = ctx.tmp.path().join(".graphos.tmp.diagram.json.1");
    std::fs::write(&tmp_path, b"").unwrap();
    // Every write to /dev/full fails with ENOSPC.
    let full = std::fs::OpenOptions::new()
        .write(true)
        .open("/dev/full")
        .unwrap();

    let err = fill_tmp(full, &tmp_path, b"{}", WriteDurability::Durable).unwrap_err();

    match err {
        StoreError::Io { path, .. } => assert_eq!(path, tmp_path),
        other => panic!("expected io error, got {other:?}"),
    }
    assert!(!tmp_path.exists());
}

#[rstest]
fn save_creates_missing_parent_directories(ctx: DiagramFileTestCtx) {
    let file = DiagramFile::new(ctx.tmp.path().join("nested").join("deeper").join("d.json"));
    file.save(&demo_diagram()).unwrap();
    assert_eq!(file.load().unwrap().nodes().len(), 4);
}

#[rstest]
fn strict_load_fails_on_dangling_edge(ctx: DiagramFileTestCtx) {
    ctx.write_json(json!({
        "nodes": [node_json("n:1", 0), node_json("n:2", 10)],
        "edges": [edge_json("e:1", "n:1", "n:2"), edge_json("e:2", "n:1", "n:9")],
    }));

    let err = ctx.file.load().unwrap_err();
    match err {
        StoreError::InvalidEdge { index, source, .. } => {
            assert_eq!(index, 1);
            assert_eq!(
                source,
                EdgeLoadError::NodeNotFound {
                    node_id: "n:9".to_owned()
                }
            );
        }
        other => panic!("expected InvalidEdge, got {other:?}"),
    }
}

#[rstest]
fn lenient_load_skips_dangling_edge(ctx: DiagramFileTestCtx) {
    ctx.write_json(json!({
        "nodes": [node_json("n:1", 0), node_json("n:2", 10)],
        "edges": [
            edge_json("e:1", "n:9", "n:2"),
            edge_json("e:2", "n:1", "n:2"),
            json!({ "id": "e:3", "source": "n:1" }),
        ],
    }));

    let (diagram, skipped) = ctx.file.load_lenient().unwrap();
    let ids = diagram
        .edges()
        .iter()
        .map(|edge| edge.id().as_str())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["e:2"]);

    assert_eq!(skipped.len(), 2);
    assert!(matches!(
        &skipped[0],
        StoreError::InvalidEdge {
            index: 0,
            source: EdgeLoadError::NodeNotFound { .. },
            ..
        }
    ));
    assert!(matches!(
        &skipped[1],
        StoreError::InvalidEdge {
            index: 2,
            source: EdgeLoadError::Format { .. },
            ..
        }
    ));
}

#[rstest]
fn edges_bind_to_loaded_nodes_not_embedded_copies(ctx: DiagramFileTestCtx) {
    // The embedded copies are stale; only their ids matter.
    ctx.write_json(json!({
        "nodes": [node_json("n:1", 40), node_json("n:2", 80)],
        "edges": [edge_json("e:1", "n:1", "n:2")],
    }));

    let diagram = ctx.file.load().unwrap();
    let source = diagram
        .node(&NodeId::new("n:1").unwrap())
        .expect("source node");
    assert_eq!(source.x(), 40);
    assert_eq!(diagram.edges()[0].source().as_str(), "n:1");
}

#[rstest]
fn missing_edges_key_means_no_edges(ctx: DiagramFileTestCtx) {
    ctx.write_json(json!({ "nodes": [node_json("n:1", 0)] }));
    let diagram = ctx.file.load().unwrap();
    assert_eq!(diagram.nodes().len(), 1);
    assert!(diagram.edges().is_empty());
}

#[rstest]
fn invalid_node_size_fails_even_when_lenient(ctx: DiagramFileTestCtx) {
    ctx.write_json(json!({
        "nodes": [node_json("n:1", 0), { "id": "n:2", "x": 0, "y": 0, "width": 0, "height": 2 }],
    }));

    let err = ctx.file.load_lenient().unwrap_err();
    assert!(matches!(err, StoreError::InvalidNode { index: 1, .. }));
    assert!(err.to_string().contains("node size must be at least 1x1"));
}

#[rstest]
fn duplicate_node_ids_are_rejected(ctx: DiagramFileTestCtx) {
    ctx.write_json(json!({ "nodes": [node_json("n:1", 0), node_json("n:1", 5)] }));

    let err = ctx.file.load().unwrap_err();
    match err {
        StoreError::Diagram { source, .. } => assert_eq!(
            source,
            DiagramError::DuplicateNode {
                node_id: NodeId::new("n:1").unwrap()
            }
        ),
        other => panic!("expected Diagram error, got {other:?}"),
    }
}

#[rstest]
fn missing_file_is_an_io_error(ctx: DiagramFileTestCtx) {
    assert!(!ctx.file.exists());
    let err = ctx.file.load().unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
}

#[rstest]
fn malformed_json_is_a_json_error(ctx: DiagramFileTestCtx) {
    std::fs::write(ctx.file.path(), "{ nodes: oops").unwrap();
    let err = ctx.file.load().unwrap_err();
    assert!(matches!(err, StoreError::Json { .. }));
    assert!(std::error::Error::source(&err).is_some());
}
