// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sightline_host::{ListView, ViewportHost};
use sightline_window::WindowConfig;

struct StaticPane(f64);

impl ViewportHost for StaticPane {
    type Scalar = f64;
    type Registration = ();

    fn viewport_height(&self) -> f64 {
        self.0
    }

    fn register_resize(&mut self) {}

    fn unregister_resize(&mut self, _: ()) {}
}

type TitleView = ListView<StaticPane, fn(&String) -> usize>;

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_view/render");
    let titles: Vec<String> = (0..50_000).map(|i| format!("Resource {i}")).collect();

    for viewport in [300.0_f64, 1_080.0, 2_160.0] {
        let mut view = TitleView::new(WindowConfig::new(60.0), String::len).unwrap();
        view.attach(StaticPane(viewport));
        view.handle_scroll(25_000.0 * 60.0);

        group.bench_with_input(BenchmarkId::from_parameter(viewport), &titles, |b, titles| {
            b.iter(|| black_box(view.render(black_box(titles))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
