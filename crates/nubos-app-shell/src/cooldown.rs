use web_time::{Duration, Instant};

/// Rate limit for directional steps, applied after recognition.
#[derive(Clone, Debug)]
pub(crate) struct NavigationCooldown {
    window: Duration,
    last: Option<Instant>,
}

impl NavigationCooldown {
    pub(crate) fn new(window: Duration) -> Self {
        Self { window, last: None }
    }

    pub(crate) fn is_cooling(&self, now: Instant) -> bool {
        self.last.is_some_and(|last| {
            now.checked_duration_since(last)
                .is_some_and(|elapsed| elapsed < self.window)
        })
    }

    pub(crate) fn stamp(&mut self, now: Instant) {
        self.last = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_step_inside_window_is_blocked() {
        let start = Instant::now();
        let mut cooldown = NavigationCooldown::new(Duration::from_millis(200));
        assert!(!cooldown.is_cooling(start));
        cooldown.stamp(start);
        assert!(cooldown.is_cooling(start + Duration::from_millis(199)));
        assert!(!cooldown.is_cooling(start + Duration::from_millis(200)));
    }

    #[test]
    fn zero_window_never_blocks() {
        let start = Instant::now();
        let mut cooldown = NavigationCooldown::new(Duration::ZERO);
        cooldown.stamp(start);
        assert!(!cooldown.is_cooling(start));
    }
}
