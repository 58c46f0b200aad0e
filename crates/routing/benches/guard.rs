use criterion::{Criterion, black_box, criterion_group, criterion_main};

use vetrina_core::{Role, RoutePath, Session};
use vetrina_routing::resolve;

/// The guard runs on every navigation and on every change notification, so
/// its cost is per-render, not per-login.
fn guard_benchmark(c: &mut Criterion) {
    let paths: Vec<RoutePath> = [
        "/",
        "/home",
        "/try-on/42",
        "/admin/customers",
        "/merchants/billing",
        "/affiliate/dashboard",
        "/dashboard/analytics",
        "/affiliate/login",
    ]
    .into_iter()
    .map(RoutePath::new)
    .collect();

    let sessions = [
        Session::guest(),
        Session::authenticated(Role::User),
        Session::authenticated(Role::Merchant),
        Session::authenticated(Role::Affiliate),
        Session::authenticated(Role::Admin),
    ];

    c.bench_function("guard_resolve_full_matrix", |b| {
        b.iter(|| {
            for path in &paths {
                for session in &sessions {
                    black_box(resolve(black_box(path), black_box(session)));
                }
            }
        })
    });
}

criterion_group!(benches, guard_benchmark);
criterion_main!(benches);
