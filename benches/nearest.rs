//! Timings for building an intersection and snapping points into it.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use intersect_intervals::{Intersection, IntervalSet, Range};

const ADDED_RANGES: usize = 5_000;
const QUERIES: usize = 500;

fn closed(lower: f64, upper: f64) -> Range {
	Range::closed(lower, upper).unwrap()
}

fn input_sets() -> [IntervalSet; 3] {
	[
		IntervalSet::from_ranges([
			closed(f64::NEG_INFINITY, 1.0),
			closed(2.0, 10.0),
			closed(16.0, f64::INFINITY),
		]),
		IntervalSet::from_ranges([
			closed(-18.0, -15.0),
			closed(-13.0, 0.0),
			Range::open_closed(3.0, 20.0).unwrap(),
			closed(22.0, 23.0),
		]),
		IntervalSet::from_ranges([
			closed(-18.0, -16.0),
			closed(-13.0, -7.0),
			closed(-4.0, -2.0),
			closed(1.0, 2.0),
			closed(3.0, 5.0),
			closed(8.0, 11.0),
			closed(14.0, 17.0),
			Range::closed_open(19.0, 23.0).unwrap(),
		]),
	]
}

// evenly spread points in [0, 1) without pulling in a random number crate
fn spread(count: usize, offset: f64) -> impl Iterator<Item = f64> {
	(0..count).map(move |i| (i as f64 * 0.618_033_988_75 + offset).fract())
}

fn bench_new(c: &mut Criterion) {
	c.bench_function("intersect three sets", |b| {
		b.iter(|| Intersection::new(black_box(input_sets())))
	});
}

fn bench_nearest(c: &mut Criterion) {
	let mut group = c.benchmark_group("nearest");

	for added in [0, ADDED_RANGES] {
		let mut intersection = Intersection::new(input_sets());
		for lower in spread(added, 0.0) {
			intersection.add(closed(lower * 100.0, lower * 100.0 + 10.0));
		}
		let points: Vec<f64> = spread(QUERIES, 0.5).map(|x| x * 150.0 - 50.0).collect();

		group.bench_with_input(
			BenchmarkId::from_parameter(added),
			&points,
			|b, points| {
				b.iter(|| {
					for point in points {
						let _ = black_box(intersection.nearest(*point));
					}
				})
			},
		);
	}

	group.finish();
}

criterion_group!(benches, bench_new, bench_nearest);
criterion_main!(benches);
