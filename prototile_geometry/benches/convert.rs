use criterion::{Criterion, criterion_group, criterion_main};
use prototile_geometry::{ConvertOptions, GeoCollection, GeoFeature, GeoInput, Geometry, convert};

fn build_input() -> GeoInput {
	let mut features = Vec::new();
	for i in 0..100 {
		let offset = f64::from(i) * 0.01;
		let line: Vec<[f64; 2]> = (0..256)
			.map(|j| {
				let t = f64::from(j);
				[offset + t * 0.001, (t * 0.1).sin() * 0.5]
			})
			.collect();
		features.push(GeoFeature::new(Geometry::new_line_string(line)));
	}
	for i in 0..20 {
		let offset = f64::from(i) * 0.5;
		let mut ring: Vec<[f64; 2]> = (0..90)
			.map(|j| {
				let angle = f64::from(j) * 4.0f64.to_radians();
				[offset + angle.cos() * 0.2, angle.sin() * 0.2]
			})
			.collect();
		ring.push(ring[0]);
		features.push(GeoFeature::new(Geometry::new_polygon(vec![ring])));
	}
	GeoInput::from(GeoCollection::from(features))
}

fn bench_convert(c: &mut Criterion) {
	let input = build_input();
	c.bench_function("convert 120 features", |b| {
		b.iter(|| convert(&input, ConvertOptions::default()).unwrap());
	});
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
