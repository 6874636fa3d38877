use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::base_types::{OfferCode, Time};
use crate::config::{Config, ConfigScheduling};
use crate::errors::{Error, Result};
use crate::fleet::Fleet;
use crate::offers::{Offer, Offers};
use crate::packages::{Package, Packages};

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonInstance {
    base_delivery_cost: f64,
    packages: Vec<JsonPackage>,
    #[serde(default)]
    offers: Option<Vec<JsonOffer>>,
    #[serde(default)]
    fleet: Option<JsonFleet>,
    #[serde(default)]
    parameters: Option<JsonParameters>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonPackage {
    id: String,
    weight_in_kg: f64,
    distance_in_km: f64,
    #[serde(default)]
    offer_code: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonOffer {
    code: String,
    discount_in_percent: u8,
    min_weight_in_kg: f64,
    max_weight_in_kg: f64,
    min_distance_in_km: f64,
    max_distance_in_km: f64,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonFleet {
    vehicle_count: u16,
    max_speed_in_km_per_hour: f64,
    max_carriable_weight_in_kg: f64,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonParameters {
    #[serde(default)]
    redispatch_delay_in_hours: Option<f64>,
    #[serde(default)]
    stall_limit: Option<u32>,
}

/// Loads a courier problem instance from its JSON representation. Absent
/// "offers" means the default catalog; absent "fleet" means cost
/// computation only; absent "parameters" means default scheduling knobs.
pub fn load_courier_problem_instance_from_json(
    input_data: serde_json::Value,
) -> Result<(f64, Arc<Offers>, Arc<Packages>, Option<Arc<Fleet>>, Arc<Config>)> {
    let json_instance: JsonInstance = serde_json::from_value(input_data)
        .map_err(|e| Error::InvalidInput(format!("malformed instance json: {}", e)))?;

    if json_instance.base_delivery_cost < 0.0 {
        return Err(Error::InvalidInput(
            "base delivery cost cannot be negative".to_string(),
        ));
    }

    let offers = create_offers(&json_instance)?;
    let packages = create_packages(&json_instance)?;
    let fleet = match &json_instance.fleet {
        Some(json_fleet) => Some(Arc::new(Fleet::uniform(
            json_fleet.vehicle_count,
            json_fleet.max_speed_in_km_per_hour,
            json_fleet.max_carriable_weight_in_kg,
        )?)),
        None => None,
    };
    let config = create_config(&json_instance);

    Ok((
        json_instance.base_delivery_cost,
        Arc::new(offers),
        Arc::new(packages),
        fleet,
        Arc::new(config),
    ))
}

fn create_offers(json_instance: &JsonInstance) -> Result<Offers> {
    let json_offers = match &json_instance.offers {
        None => return Ok(Offers::defaults()),
        Some(json_offers) => json_offers,
    };

    let mut offers = Vec::with_capacity(json_offers.len());
    for json_offer in json_offers {
        if json_offer.discount_in_percent > 100 {
            return Err(Error::InvalidInput(format!(
                "offer {} has a discount above 100 percent",
                json_offer.code
            )));
        }
        let code = OfferCode::try_from(json_offer.code.as_str())?;
        offers.push(Offer::new(
            code.as_str(),
            json_offer.discount_in_percent,
            json_offer.min_weight_in_kg,
            json_offer.max_weight_in_kg,
            json_offer.min_distance_in_km,
            json_offer.max_distance_in_km,
        ));
    }
    Ok(Offers::new(offers))
}

fn create_packages(json_instance: &JsonInstance) -> Result<Packages> {
    let packages = json_instance
        .packages
        .iter()
        .map(|json_package| {
            let offer_code = json_package
                .offer_code
                .as_deref()
                .map(OfferCode::try_from)
                .transpose()?;
            Package::new(
                &json_package.id,
                json_package.weight_in_kg,
                json_package.distance_in_km,
                offer_code,
            )
        })
        .collect::<Result<Vec<_>>>()?;
    Packages::new(packages)
}

fn create_config(json_instance: &JsonInstance) -> Config {
    let default = Config::default();
    match &json_instance.parameters {
        None => default,
        Some(parameters) => Config {
            scheduling: ConfigScheduling {
                redispatch_delay: parameters
                    .redispatch_delay_in_hours
                    .map(Time::from_hours)
                    .unwrap_or(default.scheduling.redispatch_delay),
                stall_limit: parameters
                    .stall_limit
                    .unwrap_or(default.scheduling.stall_limit),
            },
        },
    }
}
