use criterion::{criterion_group, criterion_main, Criterion};
use model::base_types::{PackageId, Time, VehicleIdx};
use solution::{
    test_utilities::{default_plan, init_test_data},
    Pricing, Trip,
};

pub fn plan_modification_benchmarks(c: &mut Criterion) {
    let d = init_test_data();
    let plan = default_plan(&d);

    c.bench_function("set_pricing", |b| {
        let empty = solution::DeliveryPlan::empty(d.packages.clone());
        b.iter(|| {
            empty.set_pricing(d.pkg1, Pricing::new(0, 750)).unwrap();
        })
    });

    c.bench_function("record_trip", |b| {
        b.iter(|| {
            plan.record_trip(Trip::new(
                VehicleIdx(0),
                Time::ZERO,
                vec![(PackageId::from("PKG1"), Time::from_hours(0.43))],
                Time::from_hours(0.86),
            ))
            .unwrap();
        })
    });
}

criterion_group!(benches, plan_modification_benchmarks);
criterion_main!(benches);
