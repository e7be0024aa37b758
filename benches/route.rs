// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use graphos::model::{Node, NodeId};
use graphos::render::render_diagram_text;
use graphos::route::route;
use graphos::ui::Offset;

mod fixtures;

use fixtures::Case;

fn pair_node(id: &str, x: i32, y: i32) -> Node {
    Node::new(NodeId::new(id).expect("node id"), x, y, 10, 2).expect("node")
}

// Benchmark identity (keep stable):
// - Group names in this file: `route.pair`, `render.diagram`
// - Case IDs (the string after the `/`) must remain stable across refactors so
//   results stay comparable over time.
fn benches_route(c: &mut Criterion) {
    let mut group = c.benchmark_group("route.pair");
    for (id, source, target) in [
        ("straight_vertical", pair_node("n:1", 10, 5), pair_node("n:2", 10, 25)),
        ("straight_horizontal", pair_node("n:1", 5, 5), pair_node("n:2", 45, 5)),
        ("kinked_vertical", pair_node("n:1", 30, 5), pair_node("n:2", 10, 35)),
        ("kinked_horizontal", pair_node("n:1", 5, 20), pair_node("n:2", 60, 4)),
    ] {
        group.bench_function(id, move |b| {
            b.iter(|| {
                let routed = route(black_box(&source), black_box(&target));
                black_box(routed.segments().len())
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("render.diagram");
    for case in [Case::Small, Case::MediumGrid, Case::DenseFan] {
        let mut diagram = fixtures::fixture(case);
        group.bench_function(case.id(), move |b| {
            b.iter(|| {
                let rendered =
                    render_diagram_text(black_box(&mut diagram), Offset::default(), 200, 90)
                        .expect("render_diagram_text");
                black_box(rendered.len())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, benches_route);
criterion_main!(benches);
