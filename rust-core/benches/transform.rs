use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use spectral_sweep::spectrum::{dft, fft_real, SpectrumAnalyzer};
use spectral_sweep::window::{generate_window, WindowType};
use spectral_sweep::TransformMethod;

fn tone(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| (2.0 * std::f64::consts::PI * 5.0 * i as f64 / len as f64).sin())
        .collect()
}

fn bench_transforms(c: &mut Criterion) {
    let mut g = c.benchmark_group("transform");
    for &size in &[64usize, 256, 1024] {
        let signal = tone(size);
        g.bench_with_input(BenchmarkId::new("naive", size), &signal, |b, s| {
            b.iter(|| dft(black_box(s.as_slice())));
        });
        g.bench_with_input(BenchmarkId::new("fast", size), &signal, |b, s| {
            b.iter(|| fft_real(black_box(s)));
        });
    }
    g.finish();
}

fn bench_analyzer(c: &mut Criterion) {
    let mut g = c.benchmark_group("analyzer");
    for &size in &[500usize, 1000] {
        let signal = tone(size);
        for method in [TransformMethod::Naive, TransformMethod::Fast] {
            let mut analyzer = SpectrumAnalyzer::new(method);
            let mut out = Vec::with_capacity(size / 2);
            let name = format!("{:?}", method).to_lowercase();

            g.bench_with_input(BenchmarkId::new(name, size), &signal, |b, s| {
                b.iter(|| analyzer.analyze_into(black_box(s), &mut out).unwrap());
            });
        }
    }
    g.finish();
}

fn bench_windows(c: &mut Criterion) {
    let mut g = c.benchmark_group("window");
    for window in [WindowType::Hann, WindowType::FlatTop] {
        g.bench_with_input(BenchmarkId::new(window.name(), 3000), &3000usize, |b, &n| {
            b.iter(|| generate_window(window, n));
        });
    }
    g.finish();
}

criterion_group!(benches, bench_transforms, bench_analyzer, bench_windows);
criterion_main!(benches);
