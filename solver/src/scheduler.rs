#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::sync::Arc;

use model::base_types::{PackageId, Time, VehicleIdx};
use model::config::Config;
use model::errors::{Error, Result};
use model::fleet::Fleet;
use model::packages::Package;
use solution::{DeliveryPlan, Trip};

use crate::shipment::select_shipment;

/// Assigns delivery times by simulating the fleet on a logical clock:
/// repeatedly dispatch the earliest-available vehicle with a greedy
/// shipment and re-queue it at its return time.
pub struct DeliveryScheduler {
    fleet: Arc<Fleet>,
    config: Arc<Config>,
}

impl DeliveryScheduler {
    pub fn initialize(fleet: Arc<Fleet>, config: Arc<Config>) -> DeliveryScheduler {
        DeliveryScheduler { fleet, config }
    }

    /// Extends the plan by a delivery time for every package and the trip
    /// log. No-op for an empty package set. Fails with UnschedulableItem
    /// if some package is heavier than every vehicle's max load.
    pub fn schedule(&self, plan: DeliveryPlan) -> Result<DeliveryPlan> {
        let packages = plan.packages();
        if packages.is_empty() {
            return Ok(plan);
        }

        if self.config.scheduling.redispatch_delay <= Time::ZERO {
            return Err(Error::InvalidConfiguration(
                "redispatch delay must be positive".to_string(),
            ));
        }

        // fail fast instead of starving the simulation loop below
        let maximal_load = self.fleet.maximal_load();
        if let Some(oversized) = packages.iter().find(|p| p.weight() > maximal_load) {
            return Err(Error::UnschedulableItem {
                package: oversized.id(),
                weight: oversized.weight(),
                max_load: maximal_load,
            });
        }

        // vehicles keyed by (available_at, idx) ascending; the idx keeps
        // the ordering total and the simulation deterministic
        let mut vehicle_queue: BTreeMap<(Time, VehicleIdx), VehicleIdx> = self
            .fleet
            .iter()
            .map(|vehicle| ((Time::ZERO, vehicle.idx()), vehicle.idx()))
            .collect();

        let mut unshipped: Vec<&Package> = packages.iter().collect();
        let mut plan = plan;
        let mut stalled_rounds: u32 = 0;

        while !unshipped.is_empty() {
            let (available_at, idx) = *vehicle_queue
                .keys()
                .next()
                .expect("the fleet is non-empty");
            vehicle_queue.remove(&(available_at, idx));
            let vehicle = self.fleet.get(idx);

            let (shipment, remaining) = select_shipment(&unshipped, vehicle.max_load());

            if shipment.is_empty() {
                // every remaining package is too heavy for this vehicle;
                // push it into the future so larger vehicles get a turn
                stalled_rounds += 1;
                if stalled_rounds > self.config.scheduling.stall_limit {
                    return Err(Error::SchedulerStalled {
                        rounds: stalled_rounds,
                    });
                }
                vehicle_queue.insert(
                    (
                        available_at + self.config.scheduling.redispatch_delay,
                        idx,
                    ),
                    idx,
                );
                continue;
            }
            stalled_rounds = 0;

            let deliveries: Vec<(PackageId, Time)> = shipment
                .iter()
                .map(|package| {
                    let travel = Time::travel(package.distance(), vehicle.max_speed());
                    (package.id(), (available_at + travel).rounded_to_hundredths())
                })
                .collect();

            // the vehicle must return from its farthest stop before the
            // next trip
            let longest_leg = shipment
                .iter()
                .map(|package| Time::travel(package.distance(), vehicle.max_speed()))
                .max()
                .expect("the shipment is non-empty");
            let returns_at = available_at + longest_leg.round_trip();

            plan = plan
                .record_trip(Trip::new(idx, available_at, deliveries, returns_at))
                .expect("each package is shipped at most once");

            vehicle_queue.insert((returns_at, idx), idx);
            unshipped = remaining;
        }

        Ok(plan)
    }
}
