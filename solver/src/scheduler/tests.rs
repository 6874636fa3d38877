use std::sync::Arc;

use model::base_types::{PackageId, Time, VehicleIdx};
use model::config::{Config, ConfigScheduling};
use model::errors::Error;
use model::fleet::{Fleet, Vehicle};
use model::offers::Offers;
use model::packages::{Package, Packages};
use solution::DeliveryPlan;

use crate::cost::CostModel;
use super::DeliveryScheduler;

fn package(id: &str, weight: f64, distance: f64) -> Package {
    Package::new(id, weight, distance, None).unwrap()
}

fn packages(packages: Vec<Package>) -> Arc<Packages> {
    Arc::new(Packages::new(packages).unwrap())
}

fn scheduler(fleet: Fleet) -> DeliveryScheduler {
    DeliveryScheduler::initialize(Arc::new(fleet), Arc::new(Config::default()))
}

#[test]
fn single_vehicle_single_package_test() {
    // ARRANGE
    let scheduler = scheduler(Fleet::uniform(1, 70.0, 200.0).unwrap());
    let packages = packages(vec![package("PKG1", 50.0, 30.0)]);

    // ACT
    let plan = scheduler
        .schedule(DeliveryPlan::empty(packages))
        .unwrap();

    // ASSERT: 30km at 70km/h, rounded to two decimals
    assert_eq!(
        plan.delivery_time_of(PackageId::from("PKG1")),
        Some(Time::from_hours(0.43))
    );
    assert!(plan.is_fully_scheduled());
    assert_eq!(plan.number_of_trips(), 1);

    let trip = plan.trips_iter().next().unwrap();
    assert_eq!(trip.vehicle(), VehicleIdx(0));
    assert_eq!(trip.dispatched_at(), Time::ZERO);
    assert_eq!(trip.returns_at(), Time::travel(30.0, 70.0).round_trip());
}

#[test]
fn empty_package_set_is_a_no_op_test() {
    let scheduler = scheduler(Fleet::uniform(2, 70.0, 200.0).unwrap());
    let plan = scheduler
        .schedule(DeliveryPlan::empty(packages(vec![])))
        .unwrap();
    assert_eq!(plan.number_of_trips(), 0);
}

#[test]
fn two_vehicle_five_package_simulation_test() {
    // ARRANGE: the five-package sample instance
    let offers = Arc::new(Offers::defaults());
    let cost_model = CostModel::initialize(100.0, offers).unwrap();
    let packages = packages(vec![
        package("PKG1", 50.0, 30.0),
        package("PKG2", 75.0, 125.0),
        package("PKG3", 175.0, 100.0),
        package("PKG4", 110.0, 60.0),
        package("PKG5", 155.0, 95.0),
    ]);
    let scheduler = scheduler(Fleet::uniform(2, 70.0, 200.0).unwrap());

    // ACT
    let plan = scheduler.schedule(cost_model.price_all(packages)).unwrap();

    // ASSERT: vehicle 0 carries PKG3 (the heaviest) at t=0, vehicle 1
    // carries PKG5; vehicle 1 is back first (2*95/70 < 2*100/70) and takes
    // PKG4 and PKG2 together, vehicle 0 then takes PKG1.
    let delivery_time =
        |id: &str| plan.delivery_time_of(PackageId::from(id)).unwrap();
    assert_eq!(delivery_time("PKG3"), Time::from_hours(1.43));
    assert_eq!(delivery_time("PKG5"), Time::from_hours(1.36));
    assert_eq!(delivery_time("PKG4"), Time::from_hours(3.57));
    assert_eq!(delivery_time("PKG2"), Time::from_hours(4.5));
    assert_eq!(delivery_time("PKG1"), Time::from_hours(3.29));

    assert!(plan.is_fully_scheduled());
    assert_eq!(plan.number_of_trips(), 4);

    // dispatch log is in dispatch order, ties broken by vehicle index
    let trips: Vec<_> = plan.trips_iter().collect();
    assert_eq!(trips[0].vehicle(), VehicleIdx(0));
    assert_eq!(trips[0].package_ids().collect::<Vec<_>>(), vec![PackageId::from("PKG3")]);
    assert_eq!(trips[1].vehicle(), VehicleIdx(1));
    assert_eq!(trips[1].package_ids().collect::<Vec<_>>(), vec![PackageId::from("PKG5")]);
    assert_eq!(trips[2].vehicle(), VehicleIdx(1));
    assert_eq!(
        trips[2].package_ids().collect::<Vec<_>>(),
        vec![PackageId::from("PKG4"), PackageId::from("PKG2")]
    );
    assert_eq!(trips[3].vehicle(), VehicleIdx(0));
    assert_eq!(trips[3].package_ids().collect::<Vec<_>>(), vec![PackageId::from("PKG1")]);
}

#[test]
fn scheduling_is_deterministic_test() {
    let packages = packages(vec![
        package("PKG1", 50.0, 30.0),
        package("PKG2", 75.0, 125.0),
        package("PKG3", 175.0, 100.0),
    ]);
    let scheduler = scheduler(Fleet::uniform(2, 70.0, 200.0).unwrap());

    let first = scheduler
        .schedule(DeliveryPlan::empty(packages.clone()))
        .unwrap();
    let second = scheduler
        .schedule(DeliveryPlan::empty(packages.clone()))
        .unwrap();

    for package in packages.iter() {
        assert_eq!(
            first.delivery_time_of(package.id()),
            second.delivery_time_of(package.id())
        );
    }
    assert_eq!(first.number_of_trips(), second.number_of_trips());
}

#[test]
fn oversized_package_is_reported_test() {
    // ARRANGE: PKG2 exceeds every vehicle's max load
    let scheduler = scheduler(Fleet::uniform(2, 70.0, 200.0).unwrap());
    let packages = packages(vec![
        package("PKG1", 50.0, 30.0),
        package("PKG2", 500.0, 30.0),
    ]);

    // ACT
    let result = scheduler.schedule(DeliveryPlan::empty(packages));

    // ASSERT: reported before the loop, instead of requeueing forever
    assert_eq!(
        result.unwrap_err(),
        Error::UnschedulableItem {
            package: PackageId::from("PKG2"),
            weight: 500.0,
            max_load: 200.0,
        }
    );
}

#[test]
fn smaller_vehicles_wait_for_larger_ones_test() {
    // ARRANGE: vehicle 0 can never carry the 150kg packages; vehicle 1
    // carries them one at a time while vehicle 0 keeps redispatching
    let fleet = Fleet::new(vec![
        Vehicle::new(VehicleIdx(0), 70.0, 100.0).unwrap(),
        Vehicle::new(VehicleIdx(1), 70.0, 200.0).unwrap(),
    ])
    .unwrap();
    let packages = packages(vec![
        package("PKG1", 150.0, 50.0),
        package("PKG2", 150.0, 10.0),
    ]);

    // ACT
    let plan = scheduler(fleet).schedule(DeliveryPlan::empty(packages)).unwrap();

    // ASSERT: the nearer package first, the other after the round trip
    assert_eq!(
        plan.delivery_time_of(PackageId::from("PKG2")),
        Some(Time::from_hours(0.14))
    );
    assert_eq!(
        plan.delivery_time_of(PackageId::from("PKG1")),
        Some(Time::from_hours(1.0))
    );
    assert!(plan
        .trips_iter()
        .all(|trip| trip.vehicle() == VehicleIdx(1)));
}

#[test]
fn stall_limit_is_a_backstop_test() {
    // ARRANGE: with a stall limit of 1 the small vehicle exceeds the cap
    // while the large one is still out
    let fleet = Fleet::new(vec![
        Vehicle::new(VehicleIdx(0), 70.0, 100.0).unwrap(),
        Vehicle::new(VehicleIdx(1), 70.0, 200.0).unwrap(),
    ])
    .unwrap();
    let config = Config {
        scheduling: ConfigScheduling {
            redispatch_delay: Time::from_hours(0.1),
            stall_limit: 1,
        },
    };
    let scheduler = DeliveryScheduler::initialize(Arc::new(fleet), Arc::new(config));
    let packages = packages(vec![
        package("PKG1", 150.0, 50.0),
        package("PKG2", 150.0, 10.0),
    ]);

    // ACT
    let result = scheduler.schedule(DeliveryPlan::empty(packages));

    // ASSERT
    assert!(matches!(
        result.unwrap_err(),
        Error::SchedulerStalled { rounds: 2 }
    ));
}

#[test]
fn zero_redispatch_delay_is_rejected_test() {
    let fleet = Fleet::uniform(1, 70.0, 200.0).unwrap();
    let config = Config {
        scheduling: ConfigScheduling {
            redispatch_delay: Time::ZERO,
            stall_limit: 10,
        },
    };
    let scheduler = DeliveryScheduler::initialize(Arc::new(fleet), Arc::new(config));
    let packages = packages(vec![package("PKG1", 50.0, 30.0)]);

    let result = scheduler.schedule(DeliveryPlan::empty(packages));

    assert!(matches!(
        result.unwrap_err(),
        Error::InvalidConfiguration(_)
    ));
}
