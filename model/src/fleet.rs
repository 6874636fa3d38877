use std::fmt;

use crate::base_types::{Kg, KmPerHour, VehicleCount, VehicleIdx};
use crate::errors::{Error, Result};

/// The delivery fleet. Construction fails fast on an empty vehicle list, so
/// a Fleet value is always non-empty.
pub struct Fleet {
    vehicles: Vec<Vehicle>,
}

/// A delivery vehicle. Immutable; the time at which a vehicle becomes
/// available again is state of the scheduling loop, not of the vehicle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vehicle {
    idx: VehicleIdx,
    max_speed: KmPerHour,
    max_load: Kg,
}

/////////////////////////////////////////////////////////////////////
////////////////////////////// Fleet ////////////////////////////////
/////////////////////////////////////////////////////////////////////

impl Fleet {
    pub fn new(vehicles: Vec<Vehicle>) -> Result<Fleet> {
        if vehicles.is_empty() {
            return Err(Error::InvalidConfiguration(
                "at least one vehicle is required".to_string(),
            ));
        }
        Ok(Fleet { vehicles })
    }

    /// the homogeneous fleet described by the instance's vehicle line
    pub fn uniform(count: VehicleCount, max_speed: KmPerHour, max_load: Kg) -> Result<Fleet> {
        if count == 0 {
            return Err(Error::InvalidConfiguration(
                "number of vehicles must be positive".to_string(),
            ));
        }
        let vehicles = (0..count)
            .map(|idx| Vehicle::new(VehicleIdx(idx), max_speed, max_load))
            .collect::<Result<Vec<_>>>()?;
        Fleet::new(vehicles)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vehicle> + '_ {
        self.vehicles.iter()
    }

    pub fn get(&self, idx: VehicleIdx) -> &Vehicle {
        &self.vehicles[idx.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// the largest max_load over the fleet; anything heavier can never be
    /// shipped
    pub fn maximal_load(&self) -> Kg {
        self.vehicles
            .iter()
            .map(Vehicle::max_load)
            .fold(0.0, Kg::max)
    }
}

/////////////////////////////////////////////////////////////////////
///////////////////////////// Vehicle ///////////////////////////////
/////////////////////////////////////////////////////////////////////

impl Vehicle {
    pub fn new(idx: VehicleIdx, max_speed: KmPerHour, max_load: Kg) -> Result<Vehicle> {
        if max_speed <= 0.0 {
            return Err(Error::InvalidConfiguration(format!(
                "vehicle {} must have a positive max speed",
                idx
            )));
        }
        if max_load <= 0.0 {
            return Err(Error::InvalidConfiguration(format!(
                "vehicle {} must have a positive max load",
                idx
            )));
        }
        Ok(Vehicle {
            idx,
            max_speed,
            max_load,
        })
    }

    pub fn idx(&self) -> VehicleIdx {
        self.idx
    }

    pub fn max_speed(&self) -> KmPerHour {
        self.max_speed
    }

    pub fn max_load(&self) -> Kg {
        self.max_load
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ({}km/h; {}kg)",
            self.idx, self.max_speed, self.max_load
        )
    }
}
