// benches/feed.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use serde_json::{json, Value};

use dbd_scrape::specs::characters::parse_feed;

/// Synthetic feed roughly the size of the live roster, times a few.
fn sample_feed(n: usize) -> Value {
    let edges: Vec<Value> = (0..n)
        .map(|i| json!({ "node": {
            "id": format!("id-{i}"),
            "title": format!("Character {i}"),
            "slug": format!("character-{i}"),
            "role": if i % 2 == 0 { "killer" } else { "survivor" },
            "difficulty": "moderate",
            "inclusion": "chapter",
            "description": if i % 5 == 0 { Value::Null } else { json!("A long-ish lore blurb. ".repeat(20)) },
            "releaseDate": "2021-03-02",
            "headshot": { "url": format!("https://images.example/{i}.png") }
        }}))
        .collect();
    json!({ "result": { "pageContext": { "postsData": { "characters": { "edges": edges } } } } })
}

fn bench_parse_feed(c: &mut Criterion) {
    for n in [64usize, 512] {
        let doc = sample_feed(n);
        c.bench_function(&format!("parse_feed_{n}"), |b| {
            b.iter(|| {
                let entries = parse_feed(black_box(&doc)).unwrap();
                black_box(entries.len())
            })
        });
    }
}

criterion_group!(benches, bench_parse_feed);
criterion_main!(benches);
