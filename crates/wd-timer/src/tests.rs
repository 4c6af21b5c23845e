//! Unit tests for wd-timer.

use wd_core::Tick;

use crate::{TimerError, TimerId, TimerMode, TimerQueue};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// 10 ms resolution with every timer registered in its usual mode.
fn wanderer_queue() -> TimerQueue {
    let mut q = TimerQueue::new(10);
    q.register(TimerId::ForwardDrive, TimerMode::Periodic);
    q.register(TimerId::ForwardStop, TimerMode::OneShot);
    q.register(TimerId::Reverse, TimerMode::Periodic);
    q.register(TimerId::ReverseStop, TimerMode::OneShot);
    q.register(TimerId::Spin, TimerMode::Periodic);
    q.register(TimerId::SpinStop, TimerMode::OneShot);
    q
}

fn drain(q: &mut TimerQueue, now: Tick) -> Vec<TimerId> {
    std::iter::from_fn(|| q.pop_due(now)).collect()
}

// ── TimerId ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod timer_id {
    use super::*;

    #[test]
    fn indices_are_dense() {
        for (i, id) in TimerId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn display() {
        assert_eq!(TimerId::ReverseStop.to_string(), "reverse_stop");
    }
}

// ── Arming and firing ─────────────────────────────────────────────────────────

#[cfg(test)]
mod firing {
    use super::*;

    #[test]
    fn periodic_refires_every_period() {
        let mut q = wanderer_queue();
        q.arm(TimerId::ForwardDrive, Tick(0), 500).unwrap();
        assert_eq!(q.due_tick(TimerId::ForwardDrive), Some(Tick(50)));

        assert!(drain(&mut q, Tick(49)).is_empty());
        assert_eq!(drain(&mut q, Tick(50)), vec![TimerId::ForwardDrive]);
        assert_eq!(q.due_tick(TimerId::ForwardDrive), Some(Tick(100)));
        assert_eq!(drain(&mut q, Tick(100)), vec![TimerId::ForwardDrive]);
        assert!(q.is_armed(TimerId::ForwardDrive));
    }

    #[test]
    fn one_shot_disarms_after_fire() {
        let mut q = wanderer_queue();
        q.arm(TimerId::ReverseStop, Tick(10), 3_000).unwrap();
        assert_eq!(drain(&mut q, Tick(310)), vec![TimerId::ReverseStop]);
        assert!(!q.is_armed(TimerId::ReverseStop));
        assert!(q.is_empty());
    }

    #[test]
    fn same_tick_fires_in_arm_order() {
        let mut q = wanderer_queue();
        q.arm(TimerId::ReverseStop, Tick(0), 300).unwrap();
        q.arm(TimerId::Reverse, Tick(0), 300).unwrap();
        assert_eq!(drain(&mut q, Tick(30)), vec![TimerId::ReverseStop, TimerId::Reverse]);
    }

    #[test]
    fn period_rounds_up_to_whole_ticks() {
        let mut q = TimerQueue::new(100);
        q.register(TimerId::Spin, TimerMode::Periodic);
        q.arm(TimerId::Spin, Tick(0), 150).unwrap();
        assert_eq!(q.due_tick(TimerId::Spin), Some(Tick(2)));
    }

    #[test]
    fn arming_past_the_last_tick_is_an_error() {
        let mut q = wanderer_queue();
        assert!(matches!(
            q.arm(TimerId::Reverse, Tick(u64::MAX - 10), 3_000),
            Err(TimerError::Overflow(TimerId::Reverse))
        ));
        assert!(!q.is_armed(TimerId::Reverse));
        assert!(q.is_empty());
    }

    #[test]
    fn periodic_requeue_stops_at_the_last_tick() {
        let mut q = wanderer_queue();
        let start = Tick(u64::MAX - 80);
        q.arm(TimerId::Spin, start, 500).unwrap();
        assert_eq!(drain(&mut q, start + 50), vec![TimerId::Spin]);
        assert!(!q.is_armed(TimerId::Spin));
    }

    #[test]
    fn unregistered_and_zero_period_rejected() {
        let mut q = TimerQueue::new(10);
        assert!(q.arm(TimerId::Spin, Tick(0), 500).is_err());
        q.register(TimerId::Spin, TimerMode::Periodic);
        assert!(q.arm(TimerId::Spin, Tick(0), 0).is_err());
        assert!(!q.is_armed(TimerId::Spin));
    }
}

// ── Cancellation ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod cancellation {
    use super::*;

    #[test]
    fn cancelled_timer_never_fires() {
        let mut q = wanderer_queue();
        q.arm(TimerId::Spin, Tick(0), 500).unwrap();
        q.cancel(TimerId::Spin);
        assert!(!q.is_armed(TimerId::Spin));
        assert!(drain(&mut q, Tick(50)).is_empty());
        // The stale entry was consumed by the drain.
        assert_eq!(q.pending_entries(), 0);
    }

    #[test]
    fn cancel_during_same_tick_drain_suppresses_sibling() {
        let mut q = wanderer_queue();
        q.arm(TimerId::ReverseStop, Tick(0), 3_000).unwrap();
        q.arm(TimerId::Reverse, Tick(0), 1_500).unwrap();
        assert_eq!(drain(&mut q, Tick(150)), vec![TimerId::Reverse]);

        // Both due at tick 300; the stop fires first and cancels the tick.
        assert_eq!(q.pop_due(Tick(300)), Some(TimerId::ReverseStop));
        q.cancel(TimerId::Reverse);
        assert_eq!(q.pop_due(Tick(300)), None);
        assert_eq!(q.armed_count(), 0);
    }

    #[test]
    fn rearm_discards_old_schedule() {
        let mut q = wanderer_queue();
        q.arm(TimerId::ForwardDrive, Tick(0), 500).unwrap();
        q.arm(TimerId::ForwardDrive, Tick(20), 500).unwrap();
        assert!(drain(&mut q, Tick(50)).is_empty());
        assert_eq!(drain(&mut q, Tick(70)), vec![TimerId::ForwardDrive]);
    }

    #[test]
    fn cancel_unarmed_is_noop() {
        let mut q = wanderer_queue();
        q.cancel(TimerId::SpinStop);
        q.cancel(TimerId::SpinStop);
        assert_eq!(q.armed_count(), 0);
        let mut empty = TimerQueue::new(10);
        empty.cancel(TimerId::Spin);
        assert!(!empty.is_registered(TimerId::Spin));
    }

    #[test]
    fn next_tick_reports_earliest_entry() {
        let mut q = wanderer_queue();
        assert_eq!(q.next_tick(), None);
        q.arm(TimerId::ReverseStop, Tick(0), 3_000).unwrap();
        q.arm(TimerId::Spin, Tick(0), 500).unwrap();
        assert_eq!(q.next_tick(), Some(Tick(50)));
    }
}
