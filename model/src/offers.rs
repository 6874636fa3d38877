use std::collections::HashMap;

use crate::base_types::{Kg, Km, OfferCode, Percent};

/// The offer catalog. A pure lookup store: lookups are total functions,
/// a missing code is an absence, never an error.
pub struct Offers {
    offers: HashMap<OfferCode, Offer>,
}

impl Offers {
    pub fn new(offers: Vec<Offer>) -> Offers {
        Offers {
            offers: offers.into_iter().map(|o| (o.code, o)).collect(),
        }
    }

    /// the three built-in offers every instance starts with unless it
    /// configures its own
    pub fn defaults() -> Offers {
        Offers::new(vec![
            Offer::new("OFR001", 10, 70.0, 200.0, 0.0, 199.0),
            Offer::new("OFR002", 7, 100.0, 250.0, 50.0, 150.0),
            Offer::new("OFR003", 5, 10.0, 150.0, 50.0, 250.0),
        ])
    }

    /// inserts, overwriting any offer with the same code
    pub fn add(&mut self, offer: Offer) {
        self.offers.insert(offer.code, offer);
    }

    pub fn get(&self, code: OfferCode) -> Option<&Offer> {
        self.offers.get(&code)
    }

    /// no-op if the code is absent
    pub fn remove(&mut self, code: OfferCode) {
        self.offers.remove(&code);
    }

    /// snapshot copy; callers never observe later catalog mutation through it
    pub fn all(&self) -> HashMap<OfferCode, Offer> {
        self.offers.clone()
    }
}

/// A named discount rule. Eligibility is an inclusive window on both the
/// weight and the distance axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Offer {
    code: OfferCode,
    discount_percentage: Percent,
    min_weight: Kg,
    max_weight: Kg,
    min_distance: Km,
    max_distance: Km,
}

impl Offer {
    pub fn new(
        code: &str,
        discount_percentage: Percent,
        min_weight: Kg,
        max_weight: Kg,
        min_distance: Km,
        max_distance: Km,
    ) -> Offer {
        Offer {
            code: OfferCode::from(code),
            discount_percentage,
            min_weight,
            max_weight,
            min_distance,
            max_distance,
        }
    }

    pub fn code(&self) -> OfferCode {
        self.code
    }

    pub fn discount_percentage(&self) -> Percent {
        self.discount_percentage
    }

    /// closed interval test on both axes; boundary values are applicable
    pub fn is_applicable(&self, weight: Kg, distance: Km) -> bool {
        weight >= self.min_weight
            && weight <= self.max_weight
            && distance >= self.min_distance
            && distance <= self.max_distance
    }
}
