use std::sync::Arc;

use model::base_types::{PackageId, Time, VehicleIdx};
use model::config::Config;
use model::fleet::Fleet;
use model::offers::Offers;
use model::packages::{Package, Packages};

use crate::{DeliveryPlan, Pricing, Trip};

pub struct TestData {
    pub offers: Arc<Offers>,
    pub packages: Arc<Packages>,
    pub fleet: Arc<Fleet>,
    pub config: Arc<Config>,
    pub pkg1: PackageId,
    pub pkg2: PackageId,
    pub pkg3: PackageId,
}

/// the three-package one-vehicle instance used by the plan tests and benches
pub fn init_test_data() -> TestData {
    let packages = Packages::new(vec![
        Package::new("PKG1", 50.0, 30.0, None).unwrap(),
        Package::new("PKG2", 75.0, 125.0, None).unwrap(),
        Package::new("PKG3", 175.0, 100.0, None).unwrap(),
    ])
    .unwrap();
    TestData {
        offers: Arc::new(Offers::defaults()),
        packages: Arc::new(packages),
        fleet: Arc::new(Fleet::uniform(1, 70.0, 200.0).unwrap()),
        config: Arc::new(Config::default()),
        pkg1: PackageId::from("PKG1"),
        pkg2: PackageId::from("PKG2"),
        pkg3: PackageId::from("PKG3"),
    }
}

/// a plan with all three packages priced but nothing scheduled
pub fn default_plan(d: &TestData) -> DeliveryPlan {
    let plan = DeliveryPlan::empty(d.packages.clone());
    let plan = plan.set_pricing(d.pkg1, Pricing::new(0, 750)).unwrap();
    let plan = plan.set_pricing(d.pkg2, Pricing::new(0, 1475)).unwrap();
    plan.set_pricing(d.pkg3, Pricing::new(0, 2350)).unwrap()
}

/// a single trip carrying PKG1 dispatched at time zero
pub fn default_trip(d: &TestData) -> Trip {
    Trip::new(
        VehicleIdx(0),
        Time::ZERO,
        vec![(d.pkg1, Time::from_hours(0.43))],
        Time::from_hours(30.0 / 70.0).round_trip(),
    )
}
