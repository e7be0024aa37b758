// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::fs;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Deserialize;
use serde_json::{json, Value};

use crate::model::{Diagram, DiagramError, Edge, EdgeLoadError, Node, NodeId};

#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    InvalidNode {
        path: PathBuf,
        index: usize,
        source: serde_json::Error,
    },
    InvalidEdge {
        path: PathBuf,
        index: usize,
        source: EdgeLoadError,
    },
    Diagram {
        path: PathBuf,
        source: DiagramError,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "json error at {path:?}: {source}"),
            Self::InvalidNode {
                path,
                index,
                source,
            } => write!(f, "invalid node #{index} in {path:?}: {source}"),
            Self::InvalidEdge {
                path,
                index,
                source,
            } => write!(f, "invalid edge #{index} in {path:?}: {source}"),
            Self::Diagram { path, source } => {
                write!(f, "inconsistent diagram in {path:?}: {source}")
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::InvalidNode { source, .. } => Some(source),
            Self::InvalidEdge { source, .. } => Some(source),
            Self::Diagram { source, .. } => Some(source),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WriteDurability {
    /// Writes a temp file and renames it into place without syncing.
    #[default]
    BestEffort,

    /// Additionally syncs the file contents and its directory entry where the platform allows.
    Durable,
}

/// On-disk layout: `{ "nodes": [...], "edges": [...] }`. Both keys default to empty.
#[derive(Deserialize)]
struct DiagramDoc {
    #[serde(default)]
    nodes: Vec<Value>,
    #[serde(default)]
    edges: Vec<Value>,
}

/// A diagram stored as a single JSON file.
#[derive(Debug, Clone)]
pub struct DiagramFile {
    path: PathBuf,
    durability: WriteDurability,
}

impl DiagramFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            durability: WriteDurability::default(),
        }
    }

    pub fn with_durability(mut self, durability: WriteDurability) -> Self {
        self.durability = durability;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Loads the diagram, failing on the first node or edge that cannot be rebuilt.
    pub fn load(&self) -> Result<Diagram, StoreError> {
        let (diagram, mut skipped) = self.load_inner(true)?;
        match skipped.pop() {
            Some(err) => Err(err),
            None => Ok(diagram),
        }
    }

    /// Loads the diagram, skipping edges that cannot be rebuilt.
    ///
    /// Skipped edges come back as warnings next to the diagram. Broken nodes still fail the
    /// whole load since edges cannot be checked without them.
    pub fn load_lenient(&self) -> Result<(Diagram, Vec<StoreError>), StoreError> {
        self.load_inner(false)
    }

    fn load_inner(&self, strict: bool) -> Result<(Diagram, Vec<StoreError>), StoreError> {
        let bytes = fs::read(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        let doc: DiagramDoc = serde_json::from_slice(&bytes).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;

        let mut diagram = Diagram::new();
        for (index, value) in doc.nodes.into_iter().enumerate() {
            let node: Node =
                serde_json::from_value(value).map_err(|source| StoreError::InvalidNode {
                    path: self.path.clone(),
                    index,
                    source,
                })?;
            diagram.add_node(node).map_err(|source| StoreError::Diagram {
                path: self.path.clone(),
                source,
            })?;
        }

        let mut skipped = Vec::new();
        for (index, value) in doc.edges.iter().enumerate() {
            let added = Edge::from_json(value, diagram.nodes())
                .map_err(|source| StoreError::InvalidEdge {
                    path: self.path.clone(),
                    index,
                    source,
                })
                .and_then(|edge| {
                    diagram.add_edge(edge).map_err(|source| StoreError::Diagram {
                        path: self.path.clone(),
                        source,
                    })
                });

            if let Err(err) = added {
                skipped.push(err);
                if strict {
                    break;
                }
            }
        }

        Ok((diagram, skipped))
    }

    /// Writes the diagram atomically, replacing any previous file.
    pub fn save(&self, diagram: &Diagram) -> Result<(), StoreError> {
        let contents = self.encode(diagram)?;
        write_atomic(&self.path, contents.as_bytes(), self.durability)
    }

    fn encode(&self, diagram: &Diagram) -> Result<String, StoreError> {
        let json_err = |source| StoreError::Json {
            path: self.path.clone(),
            source,
        };

        let nodes = diagram
            .nodes()
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()
            .map_err(json_err)?;

        let endpoint = |node_id: &NodeId| {
            diagram.node(node_id).ok_or_else(|| StoreError::Diagram {
                path: self.path.clone(),
                source: DiagramError::UnknownNode {
                    node_id: node_id.clone(),
                },
            })
        };
        let edges = diagram
            .edges()
            .iter()
            .map(|edge| {
                let source = endpoint(edge.source())?;
                let target = endpoint(edge.target())?;
                edge.to_json(source, target).map_err(json_err)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut out = serde_json::to_string_pretty(&json!({ "nodes": nodes, "edges": edges }))
            .map_err(json_err)?;
        out.push('\n');
        Ok(out)
    }
}

fn write_atomic(
    path: &Path,
    contents: &[u8],
    durability: WriteDurability,
) -> Result<(), StoreError> {
    let Some(file_name) = path.file_name() else {
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
        });
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(io_error(parent))?;

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp_path = parent.join(format!(
        ".graphos.tmp.{}.{}",
        file_name.to_string_lossy(),
        nanos
    ));

    let file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .map_err(io_error(&tmp_path))?;
    fill_tmp(file, &tmp_path, contents, durability)?;

    if let Err(source) = rename_overwrite(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        });
    }

    if durability == WriteDurability::Durable {
        #[cfg(unix)]
        {
            let dir = fs::File::open(parent).map_err(io_error(parent))?;
            dir.sync_all().map_err(io_error(parent))?;
        }
    }

    Ok(())
}

/// Writes `contents` into the freshly created temp `file`, removing `tmp_path` when that fails.
fn fill_tmp(
    mut file: fs::File,
    tmp_path: &Path,
    contents: &[u8],
    durability: WriteDurability,
) -> Result<(), StoreError> {
    let mut written = file.write_all(contents);
    if written.is_ok() && durability == WriteDurability::Durable {
        written = file.sync_all();
    }
    drop(file);

    written.map_err(|source| {
        let _ = fs::remove_file(tmp_path);
        StoreError::Io {
            path: tmp_path.to_path_buf(),
            source,
        }
    })
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> StoreError {
    let path = path.to_path_buf();
    move |source| StoreError::Io { path, source }
}

fn rename_overwrite(from: &Path, to: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        match fs::rename(from, to) {
            Ok(()) => Ok(()),
            Err(err)
                if matches!(
                    err.kind(),
                    io::ErrorKind::AlreadyExists | io::ErrorKind::PermissionDenied
                ) =>
            {
                let _ = fs::remove_file(to);
                fs::rename(from, to)
            }
            Err(err) => Err(err),
        }
    }

    #[cfg(not(windows))]
    {
        fs::rename(from, to)
    }
}

#[cfg(test)]
mod tests;
