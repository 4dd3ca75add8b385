//! Typed collections layered over the document store.
//!
//! Each collection owns one document key, deserializes the whole document
//! on read, and serializes the whole document on write. Mutating methods
//! hold the collection's write guard across the full
//! read-modify-write-persist cycle, which is the single-writer guarantee
//! the rest of the system assumes.

pub mod guest;
pub mod ledger;
pub mod sessions;
pub mod users;

pub use guest::GuestConfigCollection;
pub use ledger::LedgerCollection;
pub use sessions::SessionsCollection;
pub use users::UsersCollection;
