use criterion::{black_box, criterion_group, criterion_main, Criterion};
use inmet::{nearby, nearest, search, LatLon, Municipality};
use serde_json::json;

fn generated_catalog(size: usize) -> Vec<Municipality> {
    let entries: Vec<_> = (0..size)
        .map(|i| {
            let lat = -33.0 + (i % 300) as f64 * 0.1;
            let lon = -73.0 + (i / 300) as f64 * 0.8;
            json!({
                "geocode": 1_100_000 + i as u32,
                "nome": format!("Município {i}"),
                "sigla": "BR",
                "latitude": format!("{lat:.4}"),
                "longitude": format!("{lon:.4}"),
            })
        })
        .collect();
    serde_json::from_value(json!(entries)).unwrap()
}

fn bench_catalog_queries(c: &mut Criterion) {
    let catalog = generated_catalog(5_570);
    let here = LatLon(-23.55, -46.63);

    c.bench_function("search", |b| {
        b.iter(|| search(black_box("município 12"), &catalog))
    });
    c.bench_function("nearest", |b| b.iter(|| nearest(black_box(here), &catalog)));
    c.bench_function("nearby", |b| {
        b.iter(|| {
            nearby()
                .catalog(&catalog)
                .location(black_box(here))
                .max_distance_km(100.0)
                .call()
        })
    });
}

criterion_group!(benches, bench_catalog_queries);
criterion_main!(benches);
