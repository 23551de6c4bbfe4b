use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use gravitas_core::prelude::*;

/// Square grid of walkable stops with one facility every `spacing` stops
/// and a line running along every row
fn grid_network(side: usize, spacing: usize) -> Network {
    let mut builder = NetworkBuilder::new();
    let stops: Vec<NodeId> = (0..side * side)
        .map(|i| builder.add_node(NodeKind::Stop, 1.0 + (i % 7) as f64))
        .collect();

    for row in 0..side {
        for col in 0..side {
            let here = stops[row * side + col];
            if col + 1 < side {
                let right = stops[row * side + col + 1];
                builder.add_arc(ArcKind::Walking, here, right, 5.0, None).unwrap();
                builder.add_arc(ArcKind::Walking, right, here, 5.0, None).unwrap();
            }
            if row + 1 < side {
                let down = stops[(row + 1) * side + col];
                builder.add_arc(ArcKind::Walking, here, down, 5.0, None).unwrap();
                builder.add_arc(ArcKind::Walking, down, here, 5.0, None).unwrap();
            }
        }

        let line = builder.add_line(Line::new(format!("row {row}"), 60.0, 40.0, 1.0, 1440.0, 6));
        let mut previous = None;
        for col in 0..side {
            let stop = stops[row * side + col];
            let platform = builder.add_node(NodeKind::Boarding, 0.0);
            builder.add_arc(ArcKind::Boarding, stop, platform, 5.0, Some(line)).unwrap();
            builder.add_arc(ArcKind::Alighting, platform, stop, 0.0, Some(line)).unwrap();
            if let Some(prev) = previous {
                builder.add_arc(ArcKind::Line, prev, platform, 1.0, Some(line)).unwrap();
            }
            previous = Some(platform);
        }
    }

    for (i, &stop) in stops.iter().enumerate().step_by(spacing) {
        let facility = builder.add_node(NodeKind::Facility, 1.0 + (i % 3) as f64);
        builder.add_arc(ArcKind::Access, facility, stop, 2.0, None).unwrap();
    }

    builder.build()
}

fn bench_search(c: &mut Criterion) {
    let network = grid_network(40, 37);
    let source = network.stop_nodes()[0];
    let mut state = SearchState::new(network.node_count());

    c.bench_function("dijkstra_single_source_40x40", |b| {
        b.iter(|| {
            state.run(black_box(&network), black_box(source)).unwrap();
        });
    });
}

fn bench_accessibility(c: &mut Criterion) {
    let network = grid_network(30, 23);
    let config = AccessConfig {
        gravity_exponent: 1.5,
        lowest_metrics: 5,
        ..AccessConfig::default()
    };

    let mut group = c.benchmark_group("accessibility");
    group.sample_size(10);
    group.bench_function("all_stops_30x30", |b| {
        b.iter(|| compute_accessibility(black_box(&network), black_box(&config)).unwrap());
    });
    group.finish();
}

criterion_group!(benches, bench_search, bench_accessibility);
criterion_main!(benches);
