//! Benchmarks for the bounded flux-correction limiter.
//!
//! Run with: `cargo bench --bench limiter_bench`
//!
//! Benchmarks each stage (accumulate, blend, tighten) and the composed
//! pass on uniform rectangular meshes, plus the sequential/parallel
//! comparison behind the `parallel` feature.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mules_rs::{
    accumulate_interior, blend_limiter_negative, blend_limiter_positive, limiter_pass,
    update_interior_lambda, LduMesh, LimiterConfig, Workspace,
};

/// Setup a test problem with sign-varying corrective fluxes and tight
/// bounds so the limiter has real work to do.
fn setup_problem(nx: usize, ny: usize) -> (LduMesh, Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>) {
    let mesh = LduMesh::uniform_rectangle(nx, ny);
    let n_faces = mesh.n_faces();

    let phi_corr: Vec<f64> = (0..n_faces)
        .map(|f| ((f as f64) * 0.83).sin() * 3.0)
        .collect();
    let psi_min = vec![0.0; mesh.n_cells];
    let psi_max = vec![0.1; mesh.n_cells];
    let sum_phi: Vec<f64> = (0..mesh.n_cells)
        .map(|c| ((c as f64) * 0.31).cos() + 1.5)
        .collect();

    (mesh, phi_corr, psi_min, psi_max, sum_phi)
}

/// Benchmark interior-face accumulation.
fn bench_accumulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("accumulate");

    for (nx, ny) in [(32, 32), (64, 64), (128, 128)] {
        let n_cells = nx * ny;
        let (mesh, phi_corr, _, _, _) = setup_problem(nx, ny);
        let lambda = vec![1.0; mesh.n_faces()];
        let mut ws = Workspace::new(mesh.n_cells);

        group.bench_with_input(
            BenchmarkId::new("interior", format!("{}_cells", n_cells)),
            &n_cells,
            |b, _| {
                b.iter(|| {
                    ws.reset();
                    accumulate_interior(
                        black_box(&mesh),
                        black_box(&lambda),
                        black_box(&phi_corr),
                        &mut ws.suml_phip,
                        &mut ws.m_suml_phim,
                    )
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the per-cell blend for both branches.
fn bench_blend(c: &mut Criterion) {
    let mut group = c.benchmark_group("blend");

    for (nx, ny) in [(32, 32), (64, 64), (128, 128)] {
        let n_cells = nx * ny;
        let (mesh, phi_corr, psi_min, psi_max, sum_phi) = setup_problem(nx, ny);
        let lambda = vec![1.0; mesh.n_faces()];
        let config = LimiterConfig::default();

        let mut ws = Workspace::new(mesh.n_cells);
        accumulate_interior(
            &mesh,
            &lambda,
            &phi_corr,
            &mut ws.suml_phip,
            &mut ws.m_suml_phim,
        );

        group.bench_with_input(
            BenchmarkId::new("both_branches", format!("{}_cells", n_cells)),
            &n_cells,
            |b, _| {
                b.iter(|| {
                    blend_limiter_positive(
                        black_box(&ws.suml_phip),
                        black_box(&psi_max),
                        black_box(&sum_phi),
                        black_box(&config),
                        &mut ws.lambda_plus,
                    );
                    blend_limiter_negative(
                        black_box(&ws.m_suml_phim),
                        black_box(&psi_min),
                        black_box(&sum_phi),
                        black_box(&config),
                        &mut ws.lambda_minus,
                    )
                });
            },
        );
    }

    group.finish();
}

/// Benchmark per-face limiter tightening.
fn bench_tighten(c: &mut Criterion) {
    let mut group = c.benchmark_group("tighten");

    for (nx, ny) in [(32, 32), (64, 64), (128, 128)] {
        let n_cells = nx * ny;
        let (mesh, phi_corr, psi_min, psi_max, sum_phi) = setup_problem(nx, ny);
        let config = LimiterConfig::default();
        let lambda_init = vec![1.0; mesh.n_faces()];

        let mut ws = Workspace::new(mesh.n_cells);
        accumulate_interior(
            &mesh,
            &lambda_init,
            &phi_corr,
            &mut ws.suml_phip,
            &mut ws.m_suml_phim,
        );
        blend_limiter_positive(
            &ws.suml_phip,
            &psi_max,
            &sum_phi,
            &config,
            &mut ws.lambda_plus,
        );
        blend_limiter_negative(
            &ws.m_suml_phim,
            &psi_min,
            &sum_phi,
            &config,
            &mut ws.lambda_minus,
        );

        group.bench_with_input(
            BenchmarkId::new("interior", format!("{}_cells", n_cells)),
            &n_cells,
            |b, _| {
                let mut lambda = lambda_init.clone();
                b.iter(|| {
                    lambda.copy_from_slice(&lambda_init);
                    update_interior_lambda(
                        black_box(&mesh),
                        black_box(&phi_corr),
                        black_box(&ws.lambda_plus),
                        black_box(&ws.lambda_minus),
                        black_box(&mut lambda),
                    )
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the full composed pass.
fn bench_full_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pass");

    for (nx, ny) in [(32, 32), (64, 64), (128, 128)] {
        let n_cells = nx * ny;
        let (mesh, phi_corr, psi_min, psi_max, sum_phi) = setup_problem(nx, ny);
        let config = LimiterConfig::default();
        let lambda_init = vec![1.0; mesh.n_faces()];
        let mut ws = Workspace::new(mesh.n_cells);

        group.bench_with_input(
            BenchmarkId::new("sequential", format!("{}_cells", n_cells)),
            &n_cells,
            |b, _| {
                let mut lambda = lambda_init.clone();
                b.iter(|| {
                    lambda.copy_from_slice(&lambda_init);
                    limiter_pass(
                        black_box(&mesh),
                        black_box(&phi_corr),
                        black_box(&psi_min),
                        black_box(&psi_max),
                        black_box(&sum_phi),
                        black_box(&mut lambda),
                        &mut [],
                        black_box(&config),
                        &mut ws,
                    )
                });
            },
        );
    }

    group.finish();
}

/// Compare sequential and parallel passes at the same mesh size.
#[cfg(feature = "parallel")]
fn bench_parallel_comparison(c: &mut Criterion) {
    use mules_rs::limiter_pass_parallel;

    let mut group = c.benchmark_group("parallel_comparison");

    let (nx, ny) = (128, 128);
    let (mesh, phi_corr, psi_min, psi_max, sum_phi) = setup_problem(nx, ny);
    let config = LimiterConfig::default();
    let lambda_init = vec![1.0; mesh.n_faces()];
    let mut ws = Workspace::new(mesh.n_cells);

    group.bench_function("sequential_full", |b| {
        let mut lambda = lambda_init.clone();
        b.iter(|| {
            lambda.copy_from_slice(&lambda_init);
            limiter_pass(
                black_box(&mesh),
                black_box(&phi_corr),
                black_box(&psi_min),
                black_box(&psi_max),
                black_box(&sum_phi),
                black_box(&mut lambda),
                &mut [],
                black_box(&config),
                &mut ws,
            )
        });
    });

    group.bench_function("parallel_full", |b| {
        let mut lambda = lambda_init.clone();
        b.iter(|| {
            lambda.copy_from_slice(&lambda_init);
            limiter_pass_parallel(
                black_box(&mesh),
                black_box(&phi_corr),
                black_box(&psi_min),
                black_box(&psi_max),
                black_box(&sum_phi),
                black_box(&mut lambda),
                &mut [],
                black_box(&config),
                &mut ws,
            )
        });
    });

    group.finish();
}

#[cfg(feature = "parallel")]
criterion_group!(
    benches,
    bench_accumulate,
    bench_blend,
    bench_tighten,
    bench_full_pass,
    bench_parallel_comparison
);

#[cfg(not(feature = "parallel"))]
criterion_group!(
    benches,
    bench_accumulate,
    bench_blend,
    bench_tighten,
    bench_full_pass
);

criterion_main!(benches);
