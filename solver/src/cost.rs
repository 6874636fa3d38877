
use std::sync::Arc;

use model::base_types::{Cost, PackageId};
use model::errors::{Error, Result};
use model::offers::Offers;
use model::packages::{Package, Packages};
use rayon::prelude::*;
use solution::{DeliveryPlan, Pricing};

/// cost per kg of package weight
const WEIGHT_COST_MULTIPLIER: f64 = 10.0;
/// cost per km of delivery distance
const DISTANCE_COST_MULTIPLIER: f64 = 5.0;

/// Computes delivery cost and discount per package against an offer
/// catalog. Pricing is independent of scheduling.
pub struct CostModel {
    base_delivery_cost: f64,
    offers: Arc<Offers>,
}

impl CostModel {
    pub fn initialize(base_delivery_cost: f64, offers: Arc<Offers>) -> Result<CostModel> {
        if base_delivery_cost < 0.0 {
            return Err(Error::InvalidConfiguration(
                "base delivery cost cannot be negative".to_string(),
            ));
        }
        Ok(CostModel {
            base_delivery_cost,
            offers,
        })
    }

    /// Discount and total for a single package.
    ///
    /// The raw cost and the discount are rounded to integers independently
    /// before subtracting (this can differ by one from rounding the net
    /// amount and is the defined behavior). Rounding is half away from
    /// zero (f64::round).
    pub fn price(&self, package: &Package) -> Pricing {
        let raw_cost = self.base_delivery_cost
            + package.weight() * WEIGHT_COST_MULTIPLIER
            + package.distance() * DISTANCE_COST_MULTIPLIER;

        let discount = match package.offer_code().and_then(|code| self.offers.get(code)) {
            // an unknown or inapplicable code is a no-discount outcome, not an error
            Some(offer) if offer.is_applicable(package.weight(), package.distance()) => {
                raw_cost * offer.discount_percentage() as f64 / 100.0
            }
            _ => 0.0,
        };

        let discount = discount.round() as Cost;
        Pricing::new(discount, raw_cost.round() as Cost - discount)
    }

    /// Prices every package of the instance. Per-package computation is
    /// independent, so the batch runs on rayon worker threads; the plan
    /// itself is assembled sequentially.
    pub fn price_all(&self, packages: Arc<Packages>) -> DeliveryPlan {
        let pricings: Vec<(PackageId, Pricing)> = packages
            .as_slice()
            .par_iter()
            .map(|package| (package.id(), self.price(package)))
            .collect();

        let mut plan = DeliveryPlan::empty(packages);
        for (package, pricing) in pricings {
            plan = plan
                .set_pricing(package, pricing)
                .expect("each package is priced exactly once");
        }
        plan
    }
}
