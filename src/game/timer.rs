//! Countdown clock for a round
//!
//! The timer knows nothing about the board. Whoever owns it registers a single
//! expiry callback, which fires exactly once each time the remaining time
//! crosses zero.

use std::fmt;

/// Whole minutes and seconds left, as shown to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Clock {
    pub minutes: u32,
    pub seconds: u32,
}

impl Clock {
    /// Floor a number of seconds into a clock reading
    ///
    /// # Examples
    /// ```
    /// use wordle_blitz::game::Clock;
    ///
    /// let clock = Clock::from_seconds(125.9);
    /// assert_eq!((clock.minutes, clock.seconds), (2, 5));
    /// assert_eq!(clock.to_string(), "02:05");
    /// ```
    #[must_use]
    pub fn from_seconds(seconds: f64) -> Self {
        let whole = seconds.max(0.0).floor() as u32;
        Self {
            minutes: whole / 60,
            seconds: whole % 60,
        }
    }
}

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes, self.seconds)
    }
}

/// Outcome of advancing or reducing the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStatus {
    /// Timer is stopped; nothing changed
    Idle,
    /// Time remains
    Running,
    /// This call took the timer to zero and fired the expiry callback
    Expired,
}

type ExpiryCallback = Box<dyn FnMut()>;

/// Ticking countdown with a one-shot expiry notification
pub struct CountdownTimer {
    duration: f64,
    remaining: f64,
    running: bool,
    on_expire: Option<ExpiryCallback>,
}

impl CountdownTimer {
    /// Create a stopped timer whose default round length is `duration` seconds
    #[must_use]
    pub fn new(duration: f64) -> Self {
        let duration = duration.max(0.0);
        Self {
            duration,
            remaining: duration,
            running: false,
            on_expire: None,
        }
    }

    /// Register the expiry callback, replacing any previous one
    pub fn set_on_expire(&mut self, callback: impl FnMut() + 'static) {
        self.on_expire = Some(Box::new(callback));
    }

    /// Start (or restart) counting down from `duration_seconds`
    pub fn start(&mut self, duration_seconds: f64) {
        self.remaining = duration_seconds.max(0.0);
        self.running = true;
    }

    /// Start again from the configured round length
    pub fn restart(&mut self) {
        self.start(self.duration);
    }

    /// Stop counting. The remaining time is kept.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Take time off the clock, whether or not it is running
    pub fn deduct(&mut self, seconds: f64) -> TimerStatus {
        let armed = self.is_armed();
        self.remaining -= seconds;
        self.settle(armed)
    }

    /// Advance by `delta_seconds` of elapsed time. No-op while stopped.
    pub fn tick(&mut self, delta_seconds: f64) -> TimerStatus {
        if !self.running {
            return TimerStatus::Idle;
        }
        self.remaining -= delta_seconds;
        self.settle(true)
    }

    /// A stopped timer already sitting at zero has fired for its last crossing
    fn is_armed(&self) -> bool {
        self.running || self.remaining > 0.0
    }

    fn settle(&mut self, armed: bool) -> TimerStatus {
        if self.remaining > 0.0 {
            return if self.running {
                TimerStatus::Running
            } else {
                TimerStatus::Idle
            };
        }

        self.remaining = 0.0;
        self.running = false;
        if !armed {
            return TimerStatus::Idle;
        }

        log::debug!("countdown reached zero");
        if let Some(callback) = self.on_expire.as_mut() {
            callback();
        }
        TimerStatus::Expired
    }

    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> f64 {
        self.remaining
    }

    #[inline]
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    #[must_use]
    pub const fn duration(&self) -> f64 {
        self.duration
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        Clock::from_seconds(self.remaining)
    }
}

impl fmt::Debug for CountdownTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountdownTimer")
            .field("duration", &self.duration)
            .field("remaining", &self.remaining)
            .field("running", &self.running)
            .field("on_expire", &self.on_expire.is_some())
            .finish()
    }
}
