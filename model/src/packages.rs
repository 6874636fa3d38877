use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::base_types::{Kg, Km, OfferCode, PackageId};
use crate::errors::{Error, Result};

/// All packages of one instance, in input order.
#[derive(Debug)]
pub struct Packages {
    packages: Vec<Package>,
    position_by_id: HashMap<PackageId, usize>, // redundant information for faster access
}

/// A delivery package. Invariant fields only; computed results (discount,
/// total cost, delivery time) live in the solution's DeliveryPlan so they
/// can be written exactly once.
#[derive(Debug, Clone)]
pub struct Package {
    id: PackageId,
    weight: Kg,
    distance: Km,
    offer_code: Option<OfferCode>,
}

/////////////////////////////////////////////////////////////////////
///////////////////////////// Packages //////////////////////////////
/////////////////////////////////////////////////////////////////////

impl Packages {
    /// input order is preserved; duplicate ids are rejected
    pub fn new(packages: Vec<Package>) -> Result<Packages> {
        let mut position_by_id = HashMap::with_capacity(packages.len());
        for (position, package) in packages.iter().enumerate() {
            if position_by_id.insert(package.id, position).is_some() {
                return Err(Error::InvalidInput(format!(
                    "duplicate package id: {}",
                    package.id
                )));
            }
        }
        Ok(Packages {
            packages,
            position_by_id,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Package> + '_ {
        self.packages.iter()
    }

    pub fn as_slice(&self) -> &[Package] {
        &self.packages
    }

    pub fn get(&self, id: PackageId) -> Option<&Package> {
        self.position_by_id.get(&id).map(|&pos| &self.packages[pos])
    }

    pub fn contains(&self, id: PackageId) -> bool {
        self.position_by_id.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

/////////////////////////////////////////////////////////////////////
///////////////////////////// Package ///////////////////////////////
/////////////////////////////////////////////////////////////////////

impl Package {
    pub fn new(
        id: &str,
        weight: Kg,
        distance: Km,
        offer_code: Option<OfferCode>,
    ) -> Result<Package> {
        let id = PackageId::try_from(id)?;
        if weight <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "package {} must have a positive weight",
                id
            )));
        }
        if distance < 0.0 {
            return Err(Error::InvalidInput(format!(
                "package {} cannot have a negative distance",
                id
            )));
        }
        Ok(Package {
            id,
            weight,
            distance,
            offer_code,
        })
    }

    pub fn id(&self) -> PackageId {
        self.id
    }

    pub fn weight(&self) -> Kg {
        self.weight
    }

    pub fn distance(&self) -> Km {
        self.distance
    }

    pub fn offer_code(&self) -> Option<OfferCode> {
        self.offer_code
    }
}

// identity is given by the package id alone
impl PartialEq for Package {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Package {}

impl Hash for Package {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "package {} ({}kg, {}km)", self.id, self.weight, self.distance)
    }
}
