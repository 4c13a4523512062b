//! Live adapters for real external interactions.

pub mod auth;
pub mod clock;
pub mod id_gen;
pub mod kv_store;

pub use auth::LiveAuthClient;
pub use clock::LiveClock;
pub use id_gen::LiveIdGenerator;
pub use kv_store::FileKeyValueStore;
