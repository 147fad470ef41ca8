//! Timer-driven animation state.
//!
//! Everything here advances by explicit [`Duration`] deltas fed from the
//! event-loop tick, so tests simulate time instead of sleeping. Each
//! value is owned by the view that displays it; dropping the owner
//! cancels the timer.

use std::time::Duration;

/// One-shot countdown.
#[derive(Debug, Clone, Copy)]
pub struct Delay {
    remaining: Option<Duration>,
}

impl Delay {
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self {
            remaining: Some(duration),
        }
    }

    /// Advance by `dt`. Returns `true` exactly once, on the call that
    /// makes the delay elapse.
    pub fn advance(&mut self, dt: Duration) -> bool {
        match self.remaining {
            Some(remaining) if dt >= remaining => {
                self.remaining = None;
                true
            }
            Some(remaining) => {
                self.remaining = Some(remaining - dt);
                false
            }
            None => false,
        }
    }

    #[must_use]
    pub const fn is_elapsed(&self) -> bool {
        self.remaining.is_none()
    }
}

/// Square-wave toggle for cursor blinking.
#[derive(Debug, Clone, Copy)]
pub struct Blink {
    half_period: Duration,
    accumulated: Duration,
    on: bool,
}

impl Blink {
    #[must_use]
    pub const fn new(half_period: Duration) -> Self {
        Self {
            half_period,
            accumulated: Duration::ZERO,
            on: true,
        }
    }

    pub fn advance(&mut self, dt: Duration) {
        self.accumulated += dt;
        while self.accumulated >= self.half_period {
            self.accumulated -= self.half_period;
            self.on = !self.on;
        }
    }

    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.on
    }
}

/// Character-by-character text reveal with a blinking cursor.
///
/// Waits out an initial delay, then reveals one character per `speed`
/// interval. The cursor blinks at a 500 ms half-period while typing and
/// hides one second after the full text is shown.
#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
    delay: Delay,
    speed: Duration,
    carry: Duration,
    blink: Blink,
    hide_cursor: Option<Delay>,
    cursor_hidden: bool,
}

impl Typewriter {
    const BLINK_HALF_PERIOD: Duration = Duration::from_millis(500);
    const CURSOR_LINGER: Duration = Duration::from_secs(1);

    #[must_use]
    pub fn new(text: &str, delay: Duration, speed: Duration) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
            delay: Delay::new(delay),
            speed,
            carry: Duration::ZERO,
            blink: Blink::new(Self::BLINK_HALF_PERIOD),
            hide_cursor: None,
            cursor_hidden: false,
        }
    }

    /// Replace the text and restart from the beginning, cancelling any
    /// in-flight reveal.
    #[allow(dead_code)]
    pub fn reset(&mut self, text: &str, delay: Duration) {
        self.chars = text.chars().collect();
        self.shown = 0;
        self.delay = Delay::new(delay);
        self.carry = Duration::ZERO;
        self.hide_cursor = None;
        self.cursor_hidden = false;
    }

    pub fn advance(&mut self, dt: Duration) {
        self.blink.advance(dt);

        if self.is_complete() {
            if let Some(linger) = &mut self.hide_cursor {
                if linger.advance(dt) {
                    self.cursor_hidden = true;
                }
            }
            return;
        }

        if !self.delay.is_elapsed() {
            // The tick that ends the delay does not also reveal text.
            self.delay.advance(dt);
            return;
        }

        self.carry += dt;
        while self.carry >= self.speed && self.shown < self.chars.len() {
            self.carry -= self.speed;
            self.shown += 1;
        }
        if self.is_complete() {
            self.hide_cursor = Some(Delay::new(Self::CURSOR_LINGER));
        }
    }

    /// The currently revealed prefix.
    #[must_use]
    pub fn visible(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.shown == self.chars.len()
    }

    /// Whether the trailing cursor should be drawn this frame.
    #[must_use]
    pub const fn cursor_visible(&self) -> bool {
        !self.cursor_hidden && self.blink.is_on()
    }
}

/// Integer count-up from zero towards a target, after an initial delay.
///
/// Used for the skill percentage reveal: one increment per `step`
/// interval, clamped at the target.
#[derive(Debug, Clone, Copy)]
pub struct CountUp {
    target: u8,
    current: u8,
    delay: Delay,
    step: Duration,
    carry: Duration,
}

impl CountUp {
    #[must_use]
    pub const fn new(target: u8, delay: Duration, step: Duration) -> Self {
        Self {
            target,
            current: 0,
            delay: Delay::new(delay),
            step,
            carry: Duration::ZERO,
        }
    }

    pub fn advance(&mut self, dt: Duration) {
        if self.current == self.target {
            return;
        }
        if !self.delay.is_elapsed() {
            self.delay.advance(dt);
            return;
        }
        self.carry += dt;
        while self.carry >= self.step && self.current < self.target {
            self.carry -= self.step;
            self.current += 1;
        }
    }

    #[must_use]
    pub const fn value(&self) -> u8 {
        self.current
    }

    #[allow(dead_code)]
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.current == self.target
    }
}
