use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Paces rendered generations so `run` stays watchable.
pub struct FpsLimiter {
    target_frametime: Duration,
    frame_timer: Instant,
}

impl Default for FpsLimiter {
    fn default() -> Self {
        Self {
            target_frametime: Duration::ZERO,
            frame_timer: Instant::now(),
        }
    }
}

impl FpsLimiter {
    pub fn new(max_fps: f64) -> Self {
        let mut limiter = Self::default();
        limiter.set_max_fps(max_fps);
        limiter
    }

    /// Non-positive or non-finite values disable the limit.
    pub fn set_max_fps(&mut self, max_fps: f64) {
        self.target_frametime = if max_fps.is_finite() && max_fps > 0. {
            Duration::from_secs_f64(1. / max_fps)
        } else {
            Duration::ZERO
        };
    }

    pub fn delay(&mut self) {
        let before_wait = self.frame_timer.elapsed();

        if self.target_frametime > before_wait {
            sleep(self.target_frametime - before_wait);
        }
        self.frame_timer = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::FpsLimiter;
    use std::time::{Duration, Instant};

    #[test]
    fn test_unlimited_does_not_sleep() {
        let mut limiter = FpsLimiter::new(0.);
        let timer = Instant::now();
        for _ in 0..100 {
            limiter.delay();
        }
        assert!(timer.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_limit_is_respected() {
        let mut limiter = FpsLimiter::new(100.);
        limiter.delay();
        let timer = Instant::now();
        for _ in 0..5 {
            limiter.delay();
        }
        assert!(timer.elapsed() >= Duration::from_millis(40));
    }
}
