
use im::HashMap;
use im::Vector;
use model::base_types::{Cost, PackageId, Time};
use model::packages::Packages;
use std::sync::Arc;

use crate::trip::Trip;

/// Discount and total cost of a single package, written exactly once by the
/// cost engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pricing {
    discount: Cost,
    total: Cost,
}

impl Pricing {
    pub fn new(discount: Cost, total: Cost) -> Pricing {
        Pricing { discount, total }
    }

    pub fn discount(&self) -> Cost {
        self.discount
    }

    pub fn total(&self) -> Cost {
        self.total
    }
}

// this represents a solution to the courier problem (priced and, when a
// fleet was given, scheduled packages).
// It is an immutable object. So whenever a modification is applied a copy of
// the plan is created (cheap due to the im data structures).
#[derive(Clone, Debug)]
pub struct DeliveryPlan {
    // pricing per package, written exactly once
    pricings: HashMap<PackageId, Pricing>,

    // delivery time per package; absent until the package was part of a
    // dispatched trip, never overwritten afterwards
    delivery_times: HashMap<PackageId, Time>,

    // the dispatch log, in dispatch order
    trips: Vector<Trip>,

    packages: Arc<Packages>,
}

// basic methods
impl DeliveryPlan {
    pub fn empty(packages: Arc<Packages>) -> DeliveryPlan {
        DeliveryPlan {
            pricings: HashMap::new(),
            delivery_times: HashMap::new(),
            trips: Vector::new(),
            packages,
        }
    }

    pub fn packages(&self) -> Arc<Packages> {
        self.packages.clone()
    }

    pub fn pricing_of(&self, package: PackageId) -> Option<Pricing> {
        self.pricings.get(&package).copied()
    }

    pub fn delivery_time_of(&self, package: PackageId) -> Option<Time> {
        self.delivery_times.get(&package).copied()
    }

    pub fn trips_iter(&self) -> impl Iterator<Item = &Trip> + '_ {
        self.trips.iter()
    }

    pub fn number_of_trips(&self) -> usize {
        self.trips.len()
    }

    pub fn is_fully_priced(&self) -> bool {
        self.pricings.len() == self.packages.len()
    }

    pub fn is_fully_scheduled(&self) -> bool {
        self.delivery_times.len() == self.packages.len()
    }

    pub fn total_discount(&self) -> Cost {
        self.pricings.values().map(Pricing::discount).sum()
    }

    pub fn total_cost(&self) -> Cost {
        self.pricings.values().map(Pricing::total).sum()
    }
}

// modification methods (copy-on-write)
impl DeliveryPlan {
    /// Sets the pricing of `package`. Err if the package is unknown or
    /// already priced (pricing is write-once).
    pub fn set_pricing(
        &self,
        package: PackageId,
        pricing: Pricing,
    ) -> Result<DeliveryPlan, String> {
        if !self.packages.contains(package) {
            return Err(format!("unknown package: {}", package));
        }
        if self.pricings.contains_key(&package) {
            return Err(format!("package {} is already priced", package));
        }
        let mut plan = self.clone();
        plan.pricings.insert(package, pricing);
        Ok(plan)
    }

    /// Records a dispatched trip, assigning each carried package its
    /// delivery time. Err if the trip is empty, carries an unknown package
    /// or one that already has a delivery time (delivery times are
    /// write-once).
    pub fn record_trip(&self, trip: Trip) -> Result<DeliveryPlan, String> {
        if trip.number_of_packages() == 0 {
            return Err("cannot record an empty trip".to_string());
        }
        for (package, _) in trip.deliveries() {
            if !self.packages.contains(package) {
                return Err(format!("unknown package: {}", package));
            }
            if self.delivery_times.contains_key(&package) {
                return Err(format!("package {} already has a delivery time", package));
            }
        }
        let mut plan = self.clone();
        for (package, delivery_time) in trip.deliveries() {
            plan.delivery_times.insert(package, delivery_time);
        }
        plan.trips.push_back(trip);
        Ok(plan)
    }
}
