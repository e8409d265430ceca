use std::time::Duration;

/// Roughly one animation frame.
pub const FRAME_COOLDOWN: Duration = Duration::from_millis(16);
/// Quiet window a burst of resize events must leave before the handler runs.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);

/// Lets a high-frequency handler through at most once per cooldown window.
///
/// Time is passed in by the caller (milliseconds on any monotonic clock), so
/// the throttle carries no timer of its own.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameThrottle {
    cooldown_ms: f64,
    last_admitted: Option<f64>,
}

impl Default for FrameThrottle {
    fn default() -> Self {
        Self::new(FRAME_COOLDOWN)
    }
}

impl FrameThrottle {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown_ms: cooldown.as_secs_f64() * 1_000.0,
            last_admitted: None,
        }
    }

    pub fn admit(&mut self, now_ms: f64) -> bool {
        let ready = match self.last_admitted {
            Some(last) => now_ms - last >= self.cooldown_ms || now_ms < last,
            None => true,
        };

        if ready {
            self.last_admitted = Some(now_ms);
        }

        ready
    }
}

/// Browser timers take whole milliseconds as `u32`.
pub fn as_millis_u32(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admits_once_per_cooldown_window() {
        let mut throttle = FrameThrottle::default();

        assert!(throttle.admit(0.0));
        assert!(!throttle.admit(5.0));
        assert!(!throttle.admit(15.9));
        assert!(throttle.admit(16.0));
        assert!(!throttle.admit(20.0));
        assert!(throttle.admit(40.0));
    }

    #[test]
    fn clock_going_backwards_resets_the_window() {
        let mut throttle = FrameThrottle::default();

        assert!(throttle.admit(1_000.0));
        assert!(throttle.admit(10.0));
    }

    #[test]
    fn burst_of_events_is_cut_to_frame_rate() {
        let mut throttle = FrameThrottle::default();
        let admitted = (0..1_000u32)
            .map(f64::from)
            .filter(|now| throttle.admit(*now))
            .count();

        assert_eq!(admitted, 63);
    }

    #[test]
    fn millis_conversion_saturates() {
        assert_eq!(as_millis_u32(Duration::from_millis(250)), 250);
        assert_eq!(as_millis_u32(Duration::from_secs(u64::MAX)), u32::MAX);
    }
}
