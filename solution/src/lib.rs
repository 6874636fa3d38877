pub mod json_serialisation;
mod plan;
pub mod test_utilities;
mod trip;

pub use plan::{DeliveryPlan, Pricing};
pub use trip::Trip;
