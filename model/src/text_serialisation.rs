use std::sync::Arc;

use crate::base_types::OfferCode;
use crate::config::Config;
use crate::errors::{Error, Result};
use crate::fleet::Fleet;
use crate::offers::Offers;
use crate::packages::{Package, Packages};

/// The whitespace-separated text instance format:
///
/// base_delivery_cost number_of_packages
/// id weight distance [offer_code|NA]     (one line per package)
/// vehicle_count max_speed max_load       (optional)
///
/// The offer catalog is not part of the text format; instances get the
/// default offers and the default scheduling parameters.
pub fn read_input(
    lines: &[&str],
) -> Result<(f64, Arc<Offers>, Arc<Packages>, Option<Arc<Fleet>>, Arc<Config>)> {
    if lines.len() < 2 {
        return Err(Error::InvalidInput(
            "insufficient input: need at least 2 lines".to_string(),
        ));
    }

    let (base_delivery_cost, number_of_packages) = parse_base_info(lines[0])?;

    if lines.len() < number_of_packages + 1 {
        return Err(Error::InvalidInput(format!(
            "expected {} package lines, got {}",
            number_of_packages,
            lines.len() - 1
        )));
    }

    let packages = lines[1..=number_of_packages]
        .iter()
        .map(|line| parse_package(line))
        .collect::<Result<Vec<_>>>()?;
    let packages = Packages::new(packages)?;

    let fleet = if lines.len() > number_of_packages + 1 {
        Some(Arc::new(parse_fleet_info(lines[number_of_packages + 1])?))
    } else {
        None
    };

    Ok((
        base_delivery_cost,
        Arc::new(Offers::defaults()),
        Arc::new(packages),
        fleet,
        Arc::new(Config::default()),
    ))
}

/// "base_delivery_cost number_of_packages"
pub fn parse_base_info(line: &str) -> Result<(f64, usize)> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() != 2 {
        return Err(Error::InvalidInput(format!(
            "base info must contain exactly 2 values: {}",
            line
        )));
    }

    let base_delivery_cost = parse_number(parts[0], "base delivery cost")?;
    let number_of_packages: usize = parts[1].parse().map_err(|_| {
        Error::InvalidInput(format!("invalid number of packages: {}", parts[1]))
    })?;

    if base_delivery_cost < 0.0 {
        return Err(Error::InvalidInput(
            "base delivery cost cannot be negative".to_string(),
        ));
    }
    if number_of_packages == 0 {
        return Err(Error::InvalidInput(
            "number of packages must be positive".to_string(),
        ));
    }

    Ok((base_delivery_cost, number_of_packages))
}

/// "id weight distance [offer_code|NA]"
pub fn parse_package(line: &str) -> Result<Package> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 3 {
        return Err(Error::InvalidInput(format!(
            "package must have at least 3 fields: {}",
            line
        )));
    }

    let weight = parse_number(parts[1], "package weight")?;
    let distance = parse_number(parts[2], "package distance")?;
    let offer_code = match parts.get(3) {
        None => None,
        Some(&"NA") => None,
        Some(&code) => Some(OfferCode::try_from(code)?),
    };

    Package::new(parts[0], weight, distance, offer_code)
}

/// "vehicle_count max_speed max_load"
pub fn parse_fleet_info(line: &str) -> Result<Fleet> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(Error::InvalidInput(format!(
            "vehicle info must contain exactly 3 values: {}",
            line
        )));
    }

    let vehicle_count: u16 = parts[0].parse().map_err(|_| {
        Error::InvalidInput(format!("invalid number of vehicles: {}", parts[0]))
    })?;
    let max_speed = parse_number(parts[1], "vehicle max speed")?;
    let max_load = parse_number(parts[2], "vehicle max load")?;

    Fleet::uniform(vehicle_count, max_speed, max_load)
}

fn parse_number(text: &str, what: &str) -> Result<f64> {
    text.parse()
        .map_err(|_| Error::InvalidInput(format!("invalid {}: {}", what, text)))
}
