use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nubos_foundation::Direction;
use nubos_ui::{
    resolve_direction, AppCatalog, AppSlot, ElementId, FocusableElement, NavigationConfig,
};
use nubos_ui_graphics::Rect;

const COLUMNS: usize = 4;
const ELEMENT_COUNT_SAMPLES: &[usize] = &[16, 64, 256];
const CELL: f32 = 72.0;

fn grid_layout(count: usize) -> Vec<FocusableElement> {
    (0..count)
        .map(|index| {
            let column = (index % COLUMNS) as f32;
            let row = (index / COLUMNS) as f32;
            FocusableElement::new(
                format!("item-{index}"),
                Rect::new(column * CELL, row * CELL, CELL - 8.0, CELL - 8.0),
            )
        })
        .collect()
}

fn bench_resolve(c: &mut Criterion) {
    let config = NavigationConfig::default();
    let mut group = c.benchmark_group("resolve_direction");
    for &count in ELEMENT_COUNT_SAMPLES {
        let elements = grid_layout(count);
        let current = ElementId::from(format!("item-{}", count / 2));
        group.bench_with_input(BenchmarkId::new("elements", count), &elements, |b, elements| {
            b.iter(|| {
                for direction in Direction::ALL {
                    black_box(resolve_direction(
                        direction,
                        Some(&current),
                        black_box(elements),
                        &config,
                    ));
                }
            });
        });
    }
    group.finish();
}

fn bench_springboard(c: &mut Criterion) {
    let catalog = AppCatalog::phone();
    c.bench_function("springboard_step", |b| {
        b.iter(|| {
            let mut slot = AppSlot(0);
            for direction in Direction::ALL {
                slot = catalog.step(black_box(slot), direction);
            }
            black_box(slot)
        });
    });
}

criterion_group!(navigation, bench_resolve, bench_springboard);
criterion_main!(navigation);
