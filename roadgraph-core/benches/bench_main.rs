use std::hint::black_box;
use std::io::Cursor;

use criterion::{Criterion, criterion_group, criterion_main};
use roadgraph_core::io::write_graph;
use roadgraph_core::{
    EdgeValidation, ExternalNode, FileReader, FingerprintPolicy, NodeBasedEdge, NodeId, OsmNodeId,
    read_graph, validate_edges,
};

const NODES: u32 = 200_000;

fn synthetic_stream() -> (Vec<u8>, Vec<NodeBasedEdge>) {
    let nodes: Vec<ExternalNode> = (0..NODES)
        .map(|i| {
            let offset = i32::try_from(i).unwrap_or(i32::MAX);
            ExternalNode::new(offset, -offset, OsmNodeId::new(u64::from(i) * 3))
                .with_barrier(i % 97 == 0)
                .with_traffic_lights(i % 31 == 0)
        })
        .collect();
    // ring in both directions plus a chord every 10 nodes
    let mut edges = Vec::new();
    for i in 0..NODES {
        let next = (i + 1) % NODES;
        edges.push(NodeBasedEdge::new(NodeId::new(i), NodeId::new(next), 5));
        edges.push(NodeBasedEdge::new(NodeId::new(next), NodeId::new(i), 5));
        if i % 10 == 0 {
            let far = (i + NODES / 2) % NODES;
            edges.push(NodeBasedEdge::new(NodeId::new(i), NodeId::new(far), 40));
        }
    }
    let bytes = write_graph(Vec::new(), &nodes, &edges).unwrap_or_default();
    (bytes, edges)
}

fn bench_loading(c: &mut Criterion) {
    let (bytes, edges) = synthetic_stream();

    c.bench_function("read_graph", |b| {
        b.iter(|| {
            let mut reader =
                FileReader::new(Cursor::new(black_box(&bytes[..])), FingerprintPolicy::Warn)
                    .unwrap();
            read_graph(&mut reader, EdgeValidation::Never).unwrap()
        });
    });

    c.bench_function("validate_edges", |b| {
        b.iter(|| validate_edges(black_box(&edges)));
    });
}

criterion_group!(benches, bench_loading);
criterion_main!(benches);
