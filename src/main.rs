// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Graphos CLI entrypoint.
//!
//! By default this opens the interactive editor. `--print` renders the diagram as text to
//! stdout instead.

use std::error::Error;

use graphos::model::{demo_diagram, Diagram};
use graphos::render::render_diagram_text;
use graphos::store::{DiagramFile, WriteDurability};
use graphos::ui::Offset;

const DEFAULT_PRINT_WIDTH: usize = 80;
const DEFAULT_PRINT_HEIGHT: usize = 24;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<file>] [--durable-writes]\n  {program} --demo\n  {program} [<file> | --demo] --print [--width <cols>] [--height <rows>]\n\nWithout --print the interactive editor starts; `s` saves back to <file>.\nA missing <file> starts an empty diagram that is created on first save.\n--demo uses a built-in diagram and cannot be combined with <file>.\n\n--print renders the diagram as text (default {DEFAULT_PRINT_WIDTH}x{DEFAULT_PRINT_HEIGHT}).\n--durable-writes opts into slower, best-effort durable saves (fsync where supported)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    file: Option<String>,
    print: bool,
    width: Option<usize>,
    height: Option<usize>,
    durable_writes: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--print" => {
                if options.print {
                    return Err(());
                }
                options.print = true;
            }
            "--width" => {
                if options.width.is_some() {
                    return Err(());
                }
                options.width = Some(parse_extent(args.next())?);
            }
            "--height" => {
                if options.height.is_some() {
                    return Err(());
                }
                options.height = Some(parse_extent(args.next())?);
            }
            "--durable-writes" => {
                if options.durable_writes {
                    return Err(());
                }
                options.durable_writes = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.file.is_some() {
                    return Err(());
                }
                options.file = Some(arg);
            }
        }
    }

    if options.demo && options.file.is_some() {
        return Err(());
    }

    if !options.print && (options.width.is_some() || options.height.is_some()) {
        return Err(());
    }

    Ok(options)
}

fn parse_extent(raw: Option<String>) -> Result<usize, ()> {
    let raw = raw.ok_or(())?;
    raw.parse().map_err(|_| ())
}

/// Loads `file` leniently and reports skipped edges on stderr.
fn load_diagram(file: &DiagramFile) -> Result<Diagram, Box<dyn Error>> {
    let (diagram, skipped) = file.load_lenient()?;
    for err in &skipped {
        eprintln!("warning: skipped {err}");
    }
    Ok(diagram)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "graphos".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let file = options.file.map(|path| {
            let file = DiagramFile::new(path);
            if options.durable_writes {
                file.with_durability(WriteDurability::Durable)
            } else {
                file
            }
        });

        if options.print {
            let mut diagram = match &file {
                Some(file) => load_diagram(file)?,
                None if options.demo => demo_diagram(),
                None => Diagram::new(),
            };
            let width = options.width.unwrap_or(DEFAULT_PRINT_WIDTH);
            let height = options.height.unwrap_or(DEFAULT_PRINT_HEIGHT);
            let text = render_diagram_text(&mut diagram, Offset::default(), width, height)?;
            if !text.is_empty() {
                println!("{text}");
            }
            return Ok(());
        }

        let diagram = match &file {
            Some(file) if file.exists() => load_diagram(file)?,
            Some(_) => Diagram::new(),
            None if options.demo => demo_diagram(),
            None => Diagram::new(),
        };

        graphos::tui::run_with_diagram(diagram, file)
    })();

    if let Err(err) = result {
        eprintln!("graphos: {err}");
        std::process::exit(1);
    }
}
