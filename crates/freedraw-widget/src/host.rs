//! Host container resolution.
//!
//! The surface is bound to one host container, looked up by identifier
//! at mount time. The resolver stands in for the embedder's element
//! tree; the widget only needs the host's current bounding box.

use std::collections::HashMap;

/// Bounding box of a host container, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostRect {
    pub width: u32,
    pub height: u32,
}

impl HostRect {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Resolves a host container identifier to its current bounding box.
pub trait HostResolver {
    fn resolve(&self, id: &str) -> Option<HostRect>;
}

/// Map-backed resolver for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticHosts {
    hosts: HashMap<String, HostRect>,
}

impl StaticHosts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a host container.
    pub fn insert(&mut self, id: impl Into<String>, rect: HostRect) {
        self.hosts.insert(id.into(), rect);
    }

    /// Builder-style registration.
    pub fn with(mut self, id: impl Into<String>, rect: HostRect) -> Self {
        self.insert(id, rect);
        self
    }
}

impl HostResolver for StaticHosts {
    fn resolve(&self, id: &str) -> Option<HostRect> {
        self.hosts.get(id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_host() {
        let hosts = StaticHosts::new().with("preview", HostRect::new(320, 240));
        assert_eq!(hosts.resolve("preview"), Some(HostRect::new(320, 240)));
    }

    #[test]
    fn test_resolve_unknown_host() {
        let hosts = StaticHosts::new();
        assert!(hosts.resolve("missing").is_none());
    }
}
