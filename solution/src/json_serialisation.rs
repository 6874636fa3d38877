use serde::{Deserialize, Serialize};

use crate::DeliveryPlan;

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonDelivery {
    id: String,
    discount: u64,
    total_cost: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    delivery_time: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonTrip {
    vehicle: String,
    dispatched_at: f64,
    packages: Vec<String>,
    returns_at: f64,
}

/// Serializes the plan: one delivery record per package in input order, the
/// dispatch log in dispatch order and the cost summary.
pub fn plan_to_json(plan: &DeliveryPlan) -> serde_json::Value {
    let packages = plan.packages();

    let deliveries: Vec<JsonDelivery> = packages
        .iter()
        .map(|package| {
            let pricing = plan
                .pricing_of(package.id())
                .expect("every package of a reported plan is priced");
            JsonDelivery {
                id: package.id().to_string(),
                discount: pricing.discount(),
                total_cost: pricing.total(),
                delivery_time: plan
                    .delivery_time_of(package.id())
                    .map(|time| time.in_hours()),
            }
        })
        .collect();

    let trips: Vec<JsonTrip> = plan
        .trips_iter()
        .map(|trip| JsonTrip {
            vehicle: trip.vehicle().to_string(),
            dispatched_at: trip.dispatched_at().in_hours(),
            packages: trip.package_ids().map(|id| id.to_string()).collect(),
            returns_at: trip.returns_at().in_hours(),
        })
        .collect();

    serde_json::json!({
        "deliveries": serde_json::to_value(deliveries).unwrap(),
        "trips": serde_json::to_value(trips).unwrap(),
        "summary": {
            "totalDiscount": plan.total_discount(),
            "totalCost": plan.total_cost(),
        },
    })
}
