//! Player progression and session persistence

pub mod profile;
pub mod session;
pub mod store;

pub use profile::PlayerProfile;
pub use session::SessionRecord;
pub use store::{JsonFileSink, MemorySink, SessionSink};
