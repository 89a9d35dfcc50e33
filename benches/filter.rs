// benches/filter.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use spot_viewer::{
    export,
    model::{Column, Spot},
    table::SpotTable,
};

fn synthetic(n: usize) -> Vec<Spot> {
    (0..n)
        .map(|i| Spot {
            title: format!("Spot {i}"),
            director: format!("Director {}", i % 97),
            label: format!("Label {}", i % 13),
            date: format!("20{:02}-{:02}-{:02}", i % 25, i % 12 + 1, i % 28 + 1),
            duration_secs: (i % 400) as i64,
            genre: ["Pop", "Rock", "Hip-hop", "Folk"][i % 4].to_string(),
            views: (i * 7919 % 1_000_000) as i64,
            comments: (i % 500) as i64,
            likes: (i * 31 % 50_000) as i64,
            performers: vec![format!("Singer {}", i % 211), format!("Band {}", i % 17)],
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let rows = synthetic(10_000);

    c.bench_function("search_all_10k", |b| {
        let mut table = SpotTable::new(rows.clone());
        b.iter(|| {
            table.search_all(black_box("singer 4"));
            black_box(table.len())
        })
    });

    c.bench_function("search_column_10k", |b| {
        let mut table = SpotTable::new(rows.clone());
        b.iter(|| {
            table.search_column(Column::Genre.index(), black_box("rock")).ok();
            black_box(table.len())
        })
    });

    c.bench_function("sort_views_10k", |b| {
        let mut table = SpotTable::new(rows.clone());
        b.iter(|| {
            table.sort_by(Column::Views, black_box(false));
            black_box(table.len())
        })
    });
}

fn bench_export(c: &mut Criterion) {
    let rows = synthetic(10_000);

    c.bench_function("to_csv_10k", |b| {
        b.iter(|| black_box(export::to_csv(black_box(&rows)).map(|s| s.len())))
    });

    c.bench_function("to_json_10k", |b| {
        b.iter(|| black_box(export::to_json(black_box(&rows)).map(|s| s.len())))
    });
}

criterion_group!(benches, bench_filter, bench_export);
criterion_main!(benches);
