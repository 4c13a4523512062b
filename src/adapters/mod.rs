//! Port implementations.
//!
//! - `live`: real clock, JSON-file storage, timestamp ids, HTTP auth.
//! - `memory`: in-process stand-ins with no side effects.
//! - `recording` / `replaying`: cassette capture and playback.

pub mod live;
pub mod memory;
pub mod recording;
pub mod replaying;
