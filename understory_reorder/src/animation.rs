// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entrance and ghost progress driven by a cooperative tick.
//!
//! ## Overview
//!
//! Two progress values gate the visual side of a reorder:
//!
//! - `entrance` grows the dragged item's placeholder into its new slot. It idles at `1.0`.
//! - `ghost` shrinks the placeholder left behind in the vacated slot. It idles at `0.0`.
//!
//! [`AnimationDriver::start_transition`] plays `ghost` in reverse from `1.0` and
//! `entrance` forward from `0.0`, both over the same duration.
//!
//! ## Scheduling
//!
//! There are no timers or threads. The host calls [`AnimationDriver::tick`] once
//! per frame with the elapsed time; the returned [`Settled`] flags report which
//! values reached their end on that tick. Each settle is reported once, on the
//! tick where it happens. Consumers that need level-triggered behavior can ask
//! [`AnimationDriver::is_entrance_settled`] at any time.

use core::time::Duration;

use bitflags::bitflags;

/// Default reorder transition duration.
pub const DEFAULT_REORDER_DURATION: Duration = Duration::from_millis(200);

/// Identifies one of the two progress values.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    /// The incoming placeholder at the current slot.
    Entrance,
    /// The outgoing placeholder at the vacated slot.
    Ghost,
}

/// Direction a progress value is playing in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlayDirection {
    /// Toward `1.0`.
    #[default]
    Forward,
    /// Toward `0.0`.
    Reverse,
}

bitflags! {
    /// Progress values that reached their end during a tick.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Settled: u8 {
        /// `entrance` reached `1.0`.
        const ENTRANCE = 0b0000_0001;
        /// `ghost` reached `0.0`.
        const GHOST    = 0b0000_0010;
    }
}

/// A single value in `[0, 1]` moving in one direction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Progress {
    value: f64,
    direction: PlayDirection,
    animating: bool,
}

impl Progress {
    /// A value at rest.
    pub const fn at_rest(value: f64) -> Self {
        Self {
            value,
            direction: PlayDirection::Forward,
            animating: false,
        }
    }

    /// Current value in `[0, 1]`.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Direction of the most recent play.
    pub fn direction(&self) -> PlayDirection {
        self.direction
    }

    /// True while moving.
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// At rest at `1.0`.
    pub fn is_completed(&self) -> bool {
        !self.animating && self.value >= 1.0
    }

    /// At rest at `0.0`.
    pub fn is_dismissed(&self) -> bool {
        !self.animating && self.value <= 0.0
    }

    fn play(&mut self, from: f64, direction: PlayDirection) {
        self.value = from;
        self.direction = direction;
        self.animating = true;
    }

    /// Advance by `delta` (a fraction of the full range). Returns true on the
    /// step that reaches the end.
    fn advance(&mut self, delta: f64) -> bool {
        if !self.animating {
            return false;
        }
        let (next, done) = match self.direction {
            PlayDirection::Forward => {
                let v = (self.value + delta).min(1.0);
                (v, v >= 1.0)
            }
            PlayDirection::Reverse => {
                let v = (self.value - delta).max(0.0);
                (v, v <= 0.0)
            }
        };
        self.value = next;
        if done {
            self.animating = false;
        }
        done
    }
}

/// Drives the `entrance` and `ghost` progress values.
#[derive(Clone, Debug)]
pub struct AnimationDriver {
    entrance: Progress,
    ghost: Progress,
    duration: Duration,
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new(DEFAULT_REORDER_DURATION)
    }
}

impl AnimationDriver {
    /// Create a settled driver with the given transition duration.
    pub fn new(duration: Duration) -> Self {
        Self {
            entrance: Progress::at_rest(1.0),
            ghost: Progress::at_rest(0.0),
            duration,
        }
    }

    /// Transition duration.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Change the duration used by later transitions and by in-flight ones from
    /// the next tick on.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// The entrance value.
    pub fn entrance(&self) -> &Progress {
        &self.entrance
    }

    /// The ghost value.
    pub fn ghost(&self) -> &Progress {
        &self.ghost
    }

    /// Progress of `kind`.
    pub fn progress(&self, kind: AnimationKind) -> &Progress {
        match kind {
            AnimationKind::Entrance => &self.entrance,
            AnimationKind::Ghost => &self.ghost,
        }
    }

    /// True when the entrance value is at rest at `1.0`.
    pub fn is_entrance_settled(&self) -> bool {
        self.entrance.is_completed()
    }

    /// True while either value is moving.
    pub fn is_animating(&self) -> bool {
        self.entrance.is_animating() || self.ghost.is_animating()
    }

    /// Play `ghost` in reverse from `1.0` and `entrance` forward from `0.0`.
    pub fn start_transition(&mut self) {
        self.ghost.play(1.0, PlayDirection::Reverse);
        self.entrance.play(0.0, PlayDirection::Forward);
    }

    /// Jump `kind` to the end of its current play.
    ///
    /// Hosts that run their own animation clock report completion this way.
    /// Returns false if the value was already at rest.
    pub fn settle(&mut self, kind: AnimationKind) -> bool {
        let p = match kind {
            AnimationKind::Entrance => &mut self.entrance,
            AnimationKind::Ghost => &mut self.ghost,
        };
        if !p.animating {
            return false;
        }
        p.value = match p.direction {
            PlayDirection::Forward => 1.0,
            PlayDirection::Reverse => 0.0,
        };
        p.animating = false;
        true
    }

    /// Return both values to rest (`entrance = 1.0`, `ghost = 0.0`) without
    /// reporting a settle.
    pub fn reset(&mut self) {
        self.entrance = Progress::at_rest(1.0);
        self.ghost = Progress::at_rest(0.0);
    }

    /// Advance both values by `elapsed` and report which ones settled.
    pub fn tick(&mut self, elapsed: Duration) -> Settled {
        if !self.is_animating() {
            return Settled::empty();
        }
        let delta = if self.duration.is_zero() {
            1.0
        } else {
            elapsed.as_secs_f64() / self.duration.as_secs_f64()
        };
        let mut settled = Settled::empty();
        if self.entrance.advance(delta) {
            settled |= Settled::ENTRANCE;
        }
        if self.ghost.advance(delta) {
            settled |= Settled::GHOST;
        }
        settled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn close(a: f64, b: f64) -> bool {
        a - b < 1e-9 && b - a < 1e-9
    }

    #[test]
    fn starts_settled() {
        let d = AnimationDriver::default();
        assert!(d.is_entrance_settled());
        assert!(d.ghost().is_dismissed());
        assert!(!d.is_animating());
        assert_eq!(d.duration(), DEFAULT_REORDER_DURATION);
    }

    #[test]
    fn transition_runs_to_completion() {
        let mut d = AnimationDriver::new(ms(200));
        d.start_transition();
        assert_eq!(d.entrance().value(), 0.0);
        assert_eq!(d.ghost().value(), 1.0);
        assert_eq!(d.ghost().direction(), PlayDirection::Reverse);
        assert!(!d.is_entrance_settled());

        assert_eq!(d.tick(ms(100)), Settled::empty());
        assert!(close(d.entrance().value(), 0.5));
        assert!(close(d.ghost().value(), 0.5));

        let s = d.tick(ms(150));
        assert_eq!(s, Settled::ENTRANCE | Settled::GHOST);
        assert!(d.is_entrance_settled());
        assert!(d.ghost().is_dismissed());
    }

    #[test]
    fn settle_reported_once() {
        let mut d = AnimationDriver::new(ms(10));
        d.start_transition();
        assert!(d.tick(ms(10)).contains(Settled::ENTRANCE));
        assert_eq!(d.tick(ms(10)), Settled::empty());
        assert_eq!(d.tick(ms(10)), Settled::empty());
    }

    #[test]
    fn zero_duration_settles_on_first_tick() {
        let mut d = AnimationDriver::new(Duration::ZERO);
        d.start_transition();
        assert_eq!(d.tick(Duration::ZERO), Settled::all());
    }

    #[test]
    fn explicit_settle_is_idempotent() {
        let mut d = AnimationDriver::default();
        d.start_transition();
        assert!(d.settle(AnimationKind::Entrance));
        assert!(!d.settle(AnimationKind::Entrance));
        assert!(d.is_entrance_settled());
        // Ghost keeps playing until settled on its own.
        assert!(d.ghost().is_animating());
        assert!(d.settle(AnimationKind::Ghost));
        assert!(d.ghost().is_dismissed());
        assert_eq!(d.ghost().direction(), PlayDirection::Reverse);
        assert_eq!(d.tick(ms(50)), Settled::empty());
    }

    #[test]
    fn restart_mid_flight() {
        let mut d = AnimationDriver::new(ms(100));
        d.start_transition();
        let _ = d.tick(ms(60));
        d.start_transition();
        assert_eq!(d.entrance().value(), 0.0);
        assert_eq!(d.progress(AnimationKind::Ghost).value(), 1.0);
        d.reset();
        assert!(d.is_entrance_settled());
        assert!(!d.is_animating());
    }
}
