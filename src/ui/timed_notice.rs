use std::time::{Duration, Instant};

/// A message that replaces a prompt until its deadline passes.
///
/// Showing a new message or cancelling drops the pending one, so at most one
/// revert is ever scheduled per prompt.
#[derive(Debug, Clone)]
pub struct TimedNotice {
    duration: Duration,
    pending: Option<(String, Instant)>,
}

impl TimedNotice {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            pending: None,
        }
    }

    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.pending = Some((message.into(), now + self.duration));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn message(&self) -> Option<&str> {
        self.pending.as_ref().map(|(message, _)| message.as_str())
    }

    /// Drops the message once its deadline has passed, otherwise returns the
    /// time left until it does.
    pub fn poll(&mut self, now: Instant) -> Option<Duration> {
        let (_, deadline) = self.pending.as_ref()?;
        match deadline.checked_duration_since(now) {
            Some(remaining) if !remaining.is_zero() => Some(remaining),
            _ => {
                self.pending = None;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_expires_after_duration() {
        let start = Instant::now();
        let mut notice = TimedNotice::new(Duration::from_millis(2000));

        notice.show("Select a valid directory!", start);

        assert_eq!(
            notice.poll(start + Duration::from_millis(500)),
            Some(Duration::from_millis(1500))
        );
        assert_eq!(notice.message(), Some("Select a valid directory!"));
        assert_eq!(notice.poll(start + Duration::from_millis(2000)), None);
        assert_eq!(notice.message(), None);
    }

    #[test]
    fn cancel_drops_pending_message() {
        let start = Instant::now();
        let mut notice = TimedNotice::new(Duration::from_secs(2));
        notice.show("Select a folder named \"data\"!", start);

        notice.cancel();

        assert_eq!(notice.message(), None);
        assert_eq!(notice.poll(start), None);
    }

    #[test]
    fn new_message_restarts_the_deadline() {
        let start = Instant::now();
        let mut notice = TimedNotice::new(Duration::from_secs(2));
        notice.show("first", start);

        notice.show("second", start + Duration::from_secs(1));

        assert!(notice.poll(start + Duration::from_millis(2500)).is_some());
        assert_eq!(notice.message(), Some("second"));
    }
}
