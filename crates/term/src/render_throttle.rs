//! Skip redundant frames.
//!
//! Most screens are static between key presses; only a running clock or a
//! pending memory comparison changes them on its own. The app hashes what it
//! is about to draw and only redraws on change, plus a slow heartbeat.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Stable-within-process hash of whatever feeds the next frame.
pub fn fingerprint<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    heartbeat_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
    forced: bool,
}

impl RenderThrottle {
    pub fn new(heartbeat_ms: u64) -> Self {
        Self {
            heartbeat_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
            forced: false,
        }
    }

    /// Render the next frame regardless of fingerprint (e.g. after a resize).
    pub fn force(&mut self) {
        self.forced = true;
    }

    /// Decide whether to render a new frame.
    ///
    /// Renders on the first call, after `force`, whenever the fingerprint
    /// changes, and otherwise at most once per heartbeat.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let changed = !self.has_rendered || self.forced || fingerprint != self.last_fingerprint;
        let heartbeat = now_ms.saturating_sub(self.last_render_ms) >= self.heartbeat_ms;
        if !changed && !heartbeat {
            return false;
        }
        self.has_rendered = true;
        self.forced = false;
        self.last_render_ms = now_ms;
        self.last_fingerprint = fingerprint;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_always_renders() {
        let mut t = RenderThrottle::new(1000);
        assert!(t.should_render(0, 7));
        assert!(!t.should_render(10, 7));
    }

    #[test]
    fn change_renders_immediately() {
        let mut t = RenderThrottle::new(1000);
        t.should_render(0, 1);
        assert!(t.should_render(5, 2));
        assert!(!t.should_render(6, 2));
    }

    #[test]
    fn heartbeat_and_force() {
        let mut t = RenderThrottle::new(500);
        t.should_render(0, 1);
        assert!(!t.should_render(499, 1));
        assert!(t.should_render(500, 1));
        t.force();
        assert!(t.should_render(501, 1));
        assert!(!t.should_render(502, 1));
    }

    #[test]
    fn fingerprint_tracks_content() {
        assert_eq!(fingerprint(&[1u8, 2, 3]), fingerprint(&[1u8, 2, 3]));
        assert_ne!(fingerprint("moves 1"), fingerprint("moves 2"));
    }
}
