use super::*;

/// Drive a throttle through call times, firing trailing timers in order.
fn run_throttle(delay: f64, calls: &[f64]) -> Vec<f64> {
    let mut gate = Throttle::new(delay);
    let mut executions = Vec::new();
    let mut timer: Option<f64> = None;

    for &now in calls {
        if let Some(due) = timer {
            if due <= now {
                if gate.fire_trailing(due) {
                    executions.push(due);
                }
                timer = None;
            }
        }
        match gate.call(now) {
            ThrottleAction::RunNow => {
                timer = None;
                executions.push(now);
            }
            ThrottleAction::ScheduleTrailing { wait_ms } => timer = Some(now + wait_ms),
            ThrottleAction::Coalesced => {}
        }
    }
    if let Some(due) = timer {
        if gate.fire_trailing(due) {
            executions.push(due);
        }
    }
    executions
}

// =============================================================
// Throttle
// =============================================================

#[test]
fn throttle_runs_first_call_immediately() {
    let mut gate = Throttle::new(16.0);
    assert_eq!(gate.call(1000.0), ThrottleAction::RunNow);
}

#[test]
fn throttle_schedules_trailing_for_remaining_window() {
    let mut gate = Throttle::new(16.0);
    gate.call(1000.0);
    assert_eq!(gate.call(1005.0), ThrottleAction::ScheduleTrailing { wait_ms: 11.0 });
    assert!(gate.fire_trailing(1016.0));
    assert_eq!(gate.call(1020.0), ThrottleAction::ScheduleTrailing { wait_ms: 12.0 });
}

#[test]
fn throttle_coalesces_calls_while_trailing_pending() {
    let mut gate = Throttle::new(16.0);
    gate.call(1000.0);
    gate.call(1005.0);
    assert_eq!(gate.call(1010.0), ThrottleAction::Coalesced);
}

#[test]
fn throttle_t_t5_t20_runs_leading_then_trailing_windows() {
    let runs = run_throttle(16.0, &[0.0, 5.0, 20.0]);
    assert_eq!(runs, vec![0.0, 16.0, 32.0]);
    for pair in runs.windows(2) {
        assert!(pair[1] - pair[0] >= 16.0);
    }
}

#[test]
fn throttle_final_call_always_fires() {
    let calls: Vec<f64> = (0..10).map(|i| f64::from(i) * 3.0).collect();
    let runs = run_throttle(16.0, &calls);
    assert_eq!(runs.first(), Some(&0.0));
    assert!(*runs.last().unwrap_or(&0.0) >= 27.0);
}

#[test]
fn throttle_boundary_is_inclusive() {
    let mut gate = Throttle::new(16.0);
    gate.call(0.0);
    assert_eq!(gate.call(16.0), ThrottleAction::RunNow);
}

#[test]
fn throttle_leading_call_voids_stale_trailing() {
    let mut gate = Throttle::new(16.0);
    gate.call(0.0);
    gate.call(5.0);
    // Timer lagged past the next window; a fresh leading call wins.
    assert_eq!(gate.call(40.0), ThrottleAction::RunNow);
    assert!(!gate.fire_trailing(41.0));
}

// =============================================================
// Debounce
// =============================================================

#[test]
fn debounce_burst_fires_once_after_last_call() {
    let mut gate = Debounce::new(300.0);
    let mut timers = Vec::new();
    let mut t = 0.0;
    while t <= 100.0 {
        let (token, wait) = gate.call();
        timers.push((t + wait, token));
        t += 10.0;
    }

    let mut fired_at = Vec::new();
    for (due, token) in timers {
        if gate.fire(token) {
            fired_at.push(due);
        }
    }
    assert_eq!(fired_at, vec![400.0]);
}

#[test]
fn debounce_has_no_leading_call() {
    let mut gate = Debounce::new(300.0);
    let (token, wait_ms) = gate.call();
    assert_eq!(wait_ms, 300.0);
    assert!(gate.fire(token));
}

#[test]
fn debounce_fire_is_one_shot() {
    let mut gate = Debounce::new(300.0);
    let (token, _) = gate.call();
    assert!(gate.fire(token));
    assert!(!gate.fire(token));
}

// =============================================================
// timer_ms
// =============================================================

#[test]
fn timer_ms_rounds_up_and_clamps() {
    assert_eq!(timer_ms(10.2), 11);
    assert_eq!(timer_ms(-5.0), 0);
    assert_eq!(timer_ms(f64::NAN), 0);
    assert_eq!(timer_ms(16.0), 16);
}
