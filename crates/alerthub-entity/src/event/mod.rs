//! Disaster event domain entities.

pub mod disaster_type;
pub mod model;
pub mod severity;

pub use disaster_type::DisasterType;
pub use model::DisasterEvent;
pub use severity::SeverityLevel;
