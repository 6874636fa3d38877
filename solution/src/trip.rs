use std::fmt;

use itertools::Itertools;
use model::base_types::{PackageId, Time, VehicleIdx};

/// One dispatch of one vehicle: the packages it carries, when each of them
/// is delivered and when the vehicle is back for its next trip.
///
/// Immutable value object; the scheduler creates it and the plan records it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    vehicle: VehicleIdx,
    dispatched_at: Time,
    deliveries: Vec<(PackageId, Time)>, // in loading order
    returns_at: Time,
}

impl Trip {
    pub fn new(
        vehicle: VehicleIdx,
        dispatched_at: Time,
        deliveries: Vec<(PackageId, Time)>,
        returns_at: Time,
    ) -> Trip {
        Trip {
            vehicle,
            dispatched_at,
            deliveries,
            returns_at,
        }
    }

    pub fn vehicle(&self) -> VehicleIdx {
        self.vehicle
    }

    pub fn dispatched_at(&self) -> Time {
        self.dispatched_at
    }

    pub fn deliveries(&self) -> impl Iterator<Item = (PackageId, Time)> + '_ {
        self.deliveries.iter().copied()
    }

    pub fn package_ids(&self) -> impl Iterator<Item = PackageId> + '_ {
        self.deliveries.iter().map(|(id, _)| *id)
    }

    pub fn number_of_packages(&self) -> usize {
        self.deliveries.len()
    }

    pub fn returns_at(&self) -> Time {
        self.returns_at
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} at {}h: [{}], back at {}h",
            self.vehicle,
            self.dispatched_at,
            self.deliveries
                .iter()
                .map(|(id, time)| format!("{} ({}h)", id, time))
                .join(", "),
            self.returns_at
        )
    }
}
