use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use procdash::sort::{self, SortStrategy};
use procdash::system::snapshot::{ProcessRecord, Snapshot};
use procdash::system::stats::SystemStats;
use procdash::ui::{self, DisplayOptions};
use procdash::view::ViewState;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use std::hint::black_box;

fn make_records(n: usize) -> Vec<ProcessRecord> {
    (0..n)
        .map(|i| ProcessRecord {
            name: format!("proc_{}", (i * 7919) % n),
            pid: i as u32 + 1,
            cpu_percent: (i % 100) as f32 * 0.37,
            mem_percent: ((n - i) % 50) as f32 * 0.11,
        })
        .collect()
}

fn bench_sort_strategies(c: &mut Criterion) {
    let strategies = [
        ("cpu", SortStrategy::cpu()),
        ("memory", SortStrategy::ByMemPercent),
        ("name", SortStrategy::ByName),
    ];

    for (label, strategy) in strategies {
        let mut group = c.benchmark_group(format!("sort_{label}_500_1000_2000"));
        for size in [500usize, 1000, 2000] {
            let records = make_records(size);
            group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
                b.iter(|| {
                    let mut sorted = black_box(records.clone());
                    sort::apply(&mut sorted, Some(strategy), true);
                    black_box(sorted);
                })
            });
        }
        group.finish();
    }
}

fn bench_frame_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_render_500_1000_2000");
    let stats = SystemStats {
        total_cpu_percent: 37.5,
        per_core_cpu_percent: vec![12.0, 48.0, 90.0, 3.0, 27.0, 66.0, 5.0, 71.0],
        mem_percent: 58.2,
        battery: None,
    };
    let view = ViewState::default();
    let options = DisplayOptions::default();

    for size in [500usize, 1000, 2000] {
        let snapshot = Snapshot::new(make_records(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &snapshot, |b, snapshot| {
            b.iter(|| {
                let backend = TestBackend::new(160, 50);
                let mut terminal = Terminal::new(backend).expect("bench terminal init failed");
                terminal
                    .draw(|frame| {
                        let _ = ui::draw(frame, black_box(snapshot), &stats, &view, &options);
                    })
                    .expect("bench draw failed");
                black_box(terminal.backend());
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sort_strategies, bench_frame_render);
criterion_main!(benches);
