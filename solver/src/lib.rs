pub mod cost;
pub mod scheduler;
pub mod shipment;

pub use cost::CostModel;
pub use scheduler::DeliveryScheduler;
pub use shipment::select_shipment;
