use criterion::{black_box, criterion_group, criterion_main, Criterion};
use linesnip::prelude::*;

fn region() -> ClipRegion {
    ClipRegion::new(-100.0, 100.0, -100.0, 100.0).expect("valid bounds")
}

fn benchmark_clip(c: &mut Criterion) {
    let clipper = LineClipper::new(region());
    let mut group = c.benchmark_group("clip_segment");

    for (name, segment) in [
        ("trivial_accept", Segment::from_coords(0.0, 0.0, 50.0, 50.0)),
        ("trivial_reject", Segment::from_coords(120.0, 30.0, 150.0, 40.0)),
        ("one_trim", Segment::from_coords(-180.0, 40.0, 50.0, 10.0)),
        ("two_trims", Segment::from_coords(-120.0, 30.0, 30.0, 255.0)),
        ("four_trims", Segment::from_coords(-150.0, -150.0, 150.0, 150.0)),
    ] {
        group.bench_function(name, |b| b.iter(|| clipper.clip(black_box(segment))));
    }

    group.finish();
}

criterion_group!(benches, benchmark_clip);
criterion_main!(benches);
