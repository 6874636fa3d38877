use std::sync::Arc;
use std::time as stdtime;

use model::config::Config;
use model::errors::Result;
use model::fleet::Fleet;
use model::json_serialisation::load_courier_problem_instance_from_json;
use model::offers::Offers;
use model::packages::Packages;
use model::text_serialisation::read_input;
use solution::json_serialisation::plan_to_json;
use solver::{CostModel, DeliveryScheduler};

/// Runs the pipeline on a text instance (the line-based input format).
pub fn run_text(input: &str) -> Result<serde_json::Value> {
    let lines: Vec<&str> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let (base_delivery_cost, offers, packages, fleet, config) = read_input(&lines)?;
    run(base_delivery_cost, offers, packages, fleet, config)
}

/// Runs the pipeline on a JSON instance.
pub fn run_json(input_data: serde_json::Value) -> Result<serde_json::Value> {
    let (base_delivery_cost, offers, packages, fleet, config) =
        load_courier_problem_instance_from_json(input_data)?;
    run(base_delivery_cost, offers, packages, fleet, config)
}

fn run(
    base_delivery_cost: f64,
    offers: Arc<Offers>,
    packages: Arc<Packages>,
    fleet: Option<Arc<Fleet>>,
    config: Arc<Config>,
) -> Result<serde_json::Value> {
    let start_time = stdtime::Instant::now();
    println!(
        "*** Instance with {} packages and {} vehicles loaded ***",
        packages.len(),
        fleet.as_ref().map(|f| f.len()).unwrap_or(0),
    );

    let cost_model = CostModel::initialize(base_delivery_cost, offers)?;
    let plan = cost_model.price_all(packages.clone());

    let plan = match fleet {
        Some(fleet) => DeliveryScheduler::initialize(fleet, config).schedule(plan)?,
        None => plan,
    };

    // one line per package, in input order: id discount total [delivery_time]
    println!();
    for package in packages.iter() {
        let pricing = plan
            .pricing_of(package.id())
            .expect("every package is priced");
        match plan.delivery_time_of(package.id()) {
            Some(delivery_time) => println!(
                "{} {} {} {}",
                package.id(),
                pricing.discount(),
                pricing.total(),
                delivery_time
            ),
            None => println!(
                "{} {} {}",
                package.id(),
                pricing.discount(),
                pricing.total()
            ),
        }
    }

    println!(
        "\ntotal discount: {}, total cost: {}, trips: {}",
        plan.total_discount(),
        plan.total_cost(),
        plan.number_of_trips()
    );
    println!(
        "running time: {:0.2}sec",
        start_time.elapsed().as_secs_f32()
    );

    Ok(plan_to_json(&plan))
}
