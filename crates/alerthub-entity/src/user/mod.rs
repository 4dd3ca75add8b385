//! User domain entities.

pub mod model;
pub mod pending;
pub mod preferences;
pub mod role;

pub use model::User;
pub use pending::PendingUpdate;
pub use preferences::UserPreferences;
pub use role::UserRole;
