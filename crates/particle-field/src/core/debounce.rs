/// Trailing-edge debouncer for viewport resize notifications.
/// Bursts of resize events collapse into a single rebuild once the
/// viewport has been quiet for `window` seconds.
pub struct ResizeDebouncer {
    /// Quiet period in seconds.
    window: f32,
    /// Time accumulated since the most recent notification.
    quiet: f32,
    /// Latest requested size, held until the quiet period elapses.
    pending: Option<(f32, f32)>,
}

impl ResizeDebouncer {
    pub fn new(window: f32) -> Self {
        Self {
            window,
            quiet: 0.0,
            pending: None,
        }
    }

    /// Record a new viewport size and restart the quiet period.
    pub fn notify(&mut self, width: f32, height: f32) {
        self.pending = Some((width, height));
        self.quiet = 0.0;
    }

    /// Add frame time. Returns the latest size once the quiet period has elapsed.
    pub fn advance(&mut self, dt: f32) -> Option<(f32, f32)> {
        self.pending?;
        self.quiet += dt;
        if self.quiet >= self.window {
            self.quiet = 0.0;
            return self.pending.take();
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_debouncer_never_fires() {
        let mut d = ResizeDebouncer::new(0.2);
        assert_eq!(d.advance(1.0), None);
        assert_eq!(d.advance(1.0), None);
    }

    #[test]
    fn fires_after_quiet_period() {
        let mut d = ResizeDebouncer::new(0.2);
        d.notify(800.0, 600.0);
        assert_eq!(d.advance(0.1), None);
        assert_eq!(d.advance(0.1), Some((800.0, 600.0)));
        assert_eq!(d.advance(0.5), None);
    }

    #[test]
    fn burst_within_window_coalesces_to_one() {
        let mut d = ResizeDebouncer::new(0.2);
        let mut fired = Vec::new();
        for i in 0..5 {
            d.notify(800.0 + i as f32, 600.0);
            // 5 events spread over 160ms
            if let Some(size) = d.advance(0.04) {
                fired.push(size);
            }
        }
        for _ in 0..30 {
            if let Some(size) = d.advance(1.0 / 60.0) {
                fired.push(size);
            }
        }
        assert_eq!(fired, vec![(804.0, 600.0)]);
    }

    #[test]
    fn notify_restarts_quiet_period() {
        let mut d = ResizeDebouncer::new(0.2);
        d.notify(100.0, 100.0);
        assert_eq!(d.advance(0.1), None);
        d.notify(200.0, 200.0);
        assert_eq!(d.advance(0.1), None);
        assert_eq!(d.advance(0.1), Some((200.0, 200.0)));
    }
}
