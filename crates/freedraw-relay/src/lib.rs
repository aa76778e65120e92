//! FreeDraw Relay Library
//!
//! The "logo imported" notification contract between the drawing window
//! and the host page: a typed cross-window message plus a persisted
//! key-value slot holding the exported image data URI. The drawing core
//! never touches this channel; only the page glue does.

mod inbox;
mod store;

pub use inbox::{LOGO_SLOT_KEY, LogoImport, LogoInbox, Notice, RelayMessage, publish_logo};
pub use store::{KeyValueStore, MemoryStore, RelayError, RelayResult};
