//! What leaves the trust boundary.
//!
//! `GameState` holds every rack and the bag. Clients only ever receive a
//! `PublicState` plus their own rack, wrapped in a `ServerEvent`.

pub mod events;
pub mod redact;

pub use events::{broadcast, ServerEvent};
pub use redact::{redact, PublicPlayer, PublicState};
