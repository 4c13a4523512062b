//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the task list and something
//! outside the process (time, local storage, id allocation, the auth API).
//! Implementations live in `src/adapters/`.

pub mod auth;
pub mod clock;
pub mod id_gen;
pub mod kv_store;

pub use auth::{AuthClient, AuthError, AuthFuture, Credentials, TokenPair};
pub use clock::Clock;
pub use id_gen::IdGenerator;
pub use kv_store::KeyValueStore;
