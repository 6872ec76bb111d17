//! Throttle and debounce rate limiters.
//!
//! DESIGN
//! ======
//! The timing contracts live in clock-injected state machines (`Throttle`,
//! `Debounce`) that never touch a timer themselves. The browser wrappers feed
//! them `Date::now()` and hold the pending `gloo_timers` timeout; dropping a
//! `Timeout` clears it, so replacing the stored handle is the cancellation.

#[cfg(test)]
#[path = "timing_test.rs"]
mod timing_test;

/// What the caller should do with one throttled call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ThrottleAction {
    /// The window has elapsed; invoke now.
    RunNow,
    /// Invoke once `wait_ms` from now unless superseded.
    ScheduleTrailing { wait_ms: f64 },
    /// A trailing call is already pending and will cover this one.
    Coalesced,
}

/// Leading + trailing throttle gate.
#[derive(Clone, Debug)]
pub struct Throttle {
    delay_ms: f64,
    last_exec_ms: Option<f64>,
    trailing_due_ms: Option<f64>,
}

impl Throttle {
    #[must_use]
    pub fn new(delay_ms: f64) -> Self {
        Self { delay_ms, last_exec_ms: None, trailing_due_ms: None }
    }

    /// Register a call at `now_ms`.
    pub fn call(&mut self, now_ms: f64) -> ThrottleAction {
        match self.last_exec_ms {
            Some(last) if now_ms - last < self.delay_ms => {
                if self.trailing_due_ms.is_some() {
                    return ThrottleAction::Coalesced;
                }
                let due = last + self.delay_ms;
                self.trailing_due_ms = Some(due);
                ThrottleAction::ScheduleTrailing { wait_ms: due - now_ms }
            }
            _ => {
                self.trailing_due_ms = None;
                self.last_exec_ms = Some(now_ms);
                ThrottleAction::RunNow
            }
        }
    }

    /// Consume the pending trailing call. Returns `false` when it was already
    /// cleared by a leading call, in which case the callback must not run.
    pub fn fire_trailing(&mut self, now_ms: f64) -> bool {
        if self.trailing_due_ms.take().is_none() {
            return false;
        }
        self.last_exec_ms = Some(now_ms);
        true
    }
}

/// Trailing-edge debounce gate.
///
/// Each call issues a fresh token; only the timer holding the latest token
/// may fire, so a timer that escaped cancellation is a no-op.
#[derive(Clone, Debug)]
pub struct Debounce {
    delay_ms: f64,
    generation: u64,
    pending: bool,
}

impl Debounce {
    #[must_use]
    pub fn new(delay_ms: f64) -> Self {
        Self { delay_ms, generation: 0, pending: false }
    }

    /// Register a call; returns the token to fire with and the wait in ms.
    pub fn call(&mut self) -> (u64, f64) {
        self.generation += 1;
        self.pending = true;
        (self.generation, self.delay_ms)
    }

    /// Fire the timer holding `token`. Superseded tokens see `false`.
    pub fn fire(&mut self, token: u64) -> bool {
        if !self.pending || token != self.generation {
            return false;
        }
        self.pending = false;
        true
    }
}

/// Convert a non-negative millisecond span to a timer argument.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn timer_ms(ms: f64) -> u32 {
    if ms.is_nan() || ms <= 0.0 {
        return 0;
    }
    ms.ceil().min(f64::from(u32::MAX)) as u32
}

/// Wrap `f` so it runs at most once per `delay_ms`, with a trailing call.
#[cfg(feature = "csr")]
pub fn throttle<F>(f: F, delay_ms: u32) -> impl Fn() + 'static
where
    F: Fn() + 'static,
{
    use gloo_timers::callback::Timeout;
    use std::cell::RefCell;
    use std::rc::Rc;

    let f = Rc::new(f);
    let gate = Rc::new(RefCell::new(Throttle::new(f64::from(delay_ms))));
    let pending = Rc::new(RefCell::new(None::<Timeout>));

    move || {
        let action = gate.borrow_mut().call(js_sys::Date::now());
        match action {
            ThrottleAction::RunNow => {
                drop(pending.borrow_mut().take());
                f();
            }
            ThrottleAction::ScheduleTrailing { wait_ms } => {
                let f = Rc::clone(&f);
                let gate = Rc::clone(&gate);
                let timeout = Timeout::new(timer_ms(wait_ms), move || {
                    if gate.borrow_mut().fire_trailing(js_sys::Date::now()) {
                        f();
                    }
                });
                *pending.borrow_mut() = Some(timeout);
            }
            ThrottleAction::Coalesced => {}
        }
    }
}

/// Wrap `f` so it runs once `delay_ms` after the last call.
#[cfg(feature = "csr")]
pub fn debounce<F>(f: F, delay_ms: u32) -> impl Fn() + 'static
where
    F: Fn() + 'static,
{
    use gloo_timers::callback::Timeout;
    use std::cell::RefCell;
    use std::rc::Rc;

    let f = Rc::new(f);
    let gate = Rc::new(RefCell::new(Debounce::new(f64::from(delay_ms))));
    let pending = Rc::new(RefCell::new(None::<Timeout>));

    move || {
        let (token, wait_ms) = gate.borrow_mut().call();
        let f = Rc::clone(&f);
        let gate = Rc::clone(&gate);
        let timeout = Timeout::new(timer_ms(wait_ms), move || {
            if gate.borrow_mut().fire(token) {
                f();
            }
        });
        // Replacing the handle drops, and so clears, the previous timer.
        *pending.borrow_mut() = Some(timeout);
    }
}

/// Run `f` once after `delay_ms`. The timer is never cancelled, so `f` must
/// check for itself whether it still applies. Off the browser nothing runs.
pub fn run_after<F>(delay_ms: u32, f: F)
where
    F: FnOnce() + 'static,
{
    #[cfg(feature = "csr")]
    {
        gloo_timers::callback::Timeout::new(delay_ms, f).forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (delay_ms, f);
    }
}
