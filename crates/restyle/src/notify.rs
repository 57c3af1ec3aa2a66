//! Transient status notices.
//!
//! The notifier owns its hide timer. Callers drive it with [`Notifier::tick`]
//! from whatever clock they run on.

use std::time::{Duration, Instant};

/// How long a notice stays visible unless told otherwise
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_secs(3);

/// A pending hide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Timer {
    deadline: Instant,
}

/// A single transient message with a hide deadline
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    message: String,
    visible: bool,
    timer: Option<Timer>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a message for `duration`, replacing the current one.
    ///
    /// A pending hide is cancelled first, so an earlier deadline never cuts
    /// the new message short.
    pub fn show(&mut self, message: &str, duration: Duration, now: Instant) {
        self.cancel();
        self.message = message.to_string();
        self.visible = true;
        self.timer = Some(Timer {
            deadline: now + duration,
        });
        tracing::debug!(notice = message, ?duration, "Showing notice");
    }

    /// Show a message for [`DEFAULT_NOTICE_DURATION`]
    pub fn notify(&mut self, message: &str, now: Instant) {
        self.show(message, DEFAULT_NOTICE_DURATION, now);
    }

    /// Hide the notice once its deadline has passed. Returns true when this
    /// call hid it.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.timer {
            Some(timer) if now >= timer.deadline => {
                self.timer = None;
                self.visible = false;
                true
            }
            _ => false,
        }
    }

    /// Drop the pending hide without touching visibility
    pub fn cancel(&mut self) {
        self.timer = None;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// When the current notice will hide, if a hide is pending
    pub fn deadline(&self) -> Option<Instant> {
        self.timer.map(|t| t.deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hides_after_duration() {
        let start = Instant::now();
        let mut notifier = Notifier::new();
        notifier.notify("Template applied", start);

        assert!(notifier.is_visible());
        assert!(!notifier.tick(start + Duration::from_millis(2999)));
        assert!(notifier.is_visible());
        assert!(notifier.tick(start + DEFAULT_NOTICE_DURATION));
        assert!(!notifier.is_visible());
        assert_eq!(notifier.message(), "Template applied");
        assert_eq!(notifier.deadline(), None);
    }

    #[test]
    fn test_reschedule_cancels_previous_timer() {
        let start = Instant::now();
        let mut notifier = Notifier::new();
        notifier.show("first", Duration::from_millis(100), start);
        notifier.show("second", Duration::from_millis(500), start + Duration::from_millis(50));

        assert!(!notifier.tick(start + Duration::from_millis(150)));
        assert!(notifier.is_visible());
        assert_eq!(notifier.message(), "second");
        assert!(notifier.tick(start + Duration::from_millis(550)));
    }

    #[test]
    fn test_notifiers_are_independent() {
        let start = Instant::now();
        let mut a = Notifier::new();
        let mut b = Notifier::new();
        a.show("a", Duration::from_millis(10), start);
        b.show("b", Duration::from_secs(10), start);

        assert!(a.tick(start + Duration::from_millis(20)));
        assert!(!b.tick(start + Duration::from_millis(20)));
        assert!(b.is_visible());
    }

    #[test]
    fn test_tick_without_notice() {
        let mut notifier = Notifier::new();
        assert!(!notifier.tick(Instant::now()));
        assert!(!notifier.is_visible());
    }
}
