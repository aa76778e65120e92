//! Cross-window message contract and receiving inbox.

use crate::store::{KeyValueStore, RelayError, RelayResult};
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Storage slot holding the most recently exported logo data URI.
pub const LOGO_SLOT_KEY: &str = "markza-drawn-logo";

/// How long an import notice stays visible.
const NOTICE_TTL: Duration = Duration::from_secs(3);

/// Typed cross-window message. The JSON wire shape is an object with a
/// `type` discriminator, e.g. `{"type":"MARKZA_LOGO_IMPORTED"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RelayMessage {
    /// The drawing window finished an export and stored it in the slot.
    #[serde(rename = "MARKZA_LOGO_IMPORTED")]
    LogoImported,
}

impl RelayMessage {
    /// Serialize to the wire form posted between windows.
    pub fn to_json(self) -> RelayResult<String> {
        Ok(serde_json::to_string(&self)?)
    }
}

/// Store an exported logo and produce the message announcing it. This is
/// the sending half of the relay, called from the drawing window's glue.
pub fn publish_logo(store: &dyn KeyValueStore, data_uri: &str) -> RelayResult<RelayMessage> {
    store.set(LOGO_SLOT_KEY, data_uri)?;
    Ok(RelayMessage::LogoImported)
}

/// A logo handed over through the relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoImport {
    pub data_uri: String,
}

/// Transient confirmation shown after a live import.
#[derive(Debug, Clone)]
pub struct Notice {
    text: String,
    created: Instant,
}

impl Notice {
    fn new(text: impl Into<String>, now: Instant) -> Self {
        Self {
            text: text.into(),
            created: now,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the notice has outlived its display window.
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.created) >= NOTICE_TTL
    }
}

/// Receiving side of the relay, owned by the host page.
///
/// Messages arrive as raw JSON from another window; anything that is not
/// a recognized relay message is ignored, since the message channel is
/// shared with unrelated traffic.
#[derive(Debug, Default)]
pub struct LogoInbox {
    notices: Vec<Notice>,
}

impl LogoInbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle an incoming cross-window message. Returns the imported
    /// logo when the message announces one and the slot is populated.
    /// Malformed JSON is an error; well-formed but unrecognized messages
    /// are silently skipped.
    pub fn deliver(
        &mut self,
        json: &str,
        store: &dyn KeyValueStore,
    ) -> RelayResult<Option<LogoImport>> {
        self.deliver_at(json, store, Instant::now())
    }

    /// As [`deliver`](Self::deliver), with an explicit clock for notice
    /// bookkeeping.
    pub fn deliver_at(
        &mut self,
        json: &str,
        store: &dyn KeyValueStore,
        now: Instant,
    ) -> RelayResult<Option<LogoImport>> {
        let value: serde_json::Value = serde_json::from_str(json).map_err(RelayError::Malformed)?;
        match serde_json::from_value::<RelayMessage>(value) {
            Ok(RelayMessage::LogoImported) => {}
            Err(_) => {
                debug!("ignoring unrecognized window message");
                return Ok(None);
            }
        }

        let Some(data_uri) = store.get(LOGO_SLOT_KEY)? else {
            debug!("logo message received but slot {LOGO_SLOT_KEY} is empty");
            return Ok(None);
        };

        self.notices
            .push(Notice::new("Logo imported successfully", now));
        Ok(Some(LogoImport { data_uri }))
    }

    /// Read back a previously imported logo, e.g. on page load. Does not
    /// raise a notice.
    pub fn poll_on_load(&self, store: &dyn KeyValueStore) -> RelayResult<Option<LogoImport>> {
        Ok(store
            .get(LOGO_SLOT_KEY)?
            .map(|data_uri| LogoImport { data_uri }))
    }

    /// Notices still within their display window, pruning the rest.
    pub fn active_notices(&mut self, now: Instant) -> &[Notice] {
        self.notices.retain(|notice| !notice.is_expired(now));
        &self.notices
    }
}
