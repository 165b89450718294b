//! Counter Animation
//!
//! Counts from zero up to a target in fixed steps. Runs once:
//! `Idle -> Animating -> Done`, with no way back.

use crate::error::SiteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterPhase {
    Idle,
    Animating,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    target: u32,
    step: u32,
    count: u32,
    phase: CounterPhase,
}

impl Counter {
    /// Counter reaching `target` in about `steps` increments
    pub fn new(target: u32, steps: u32) -> Self {
        Self {
            target,
            step: target.div_ceil(steps.max(1)),
            count: 0,
            phase: CounterPhase::Idle,
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == CounterPhase::Done
    }

    /// Begin animating. Only legal from `Idle`.
    pub fn start(&mut self) -> Result<(), SiteError> {
        if self.phase != CounterPhase::Idle {
            return Err(SiteError::CounterRejected { phase: self.phase });
        }
        self.phase = if self.target == 0 { CounterPhase::Done } else { CounterPhase::Animating };
        Ok(())
    }

    /// Advance one step, clamping to the target. No-op unless animating.
    pub fn tick(&mut self) -> u32 {
        if self.phase == CounterPhase::Animating {
            self.count = self.count.saturating_add(self.step).min(self.target);
            if self.count == self.target {
                self.phase = CounterPhase::Done;
            }
        }
        self.count
    }
}

/// Format with thousands separators, e.g. `2,000`
pub fn format_count(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(counter: &mut Counter) -> Vec<u32> {
        let mut seen = Vec::new();
        while !counter.is_done() {
            seen.push(counter.tick());
        }
        seen
    }

    #[test]
    fn test_reaches_target_exactly() {
        let mut counter = Counter::new(2000, 40);
        counter.start().unwrap();
        let seen = run(&mut counter);

        assert_eq!(seen.len(), 40);
        assert_eq!(seen[0], 50);
        assert_eq!(*seen.last().unwrap(), 2000);
        assert!(seen.iter().all(|&v| v <= 2000));

        // Further ticks do nothing
        assert_eq!(counter.tick(), 2000);
        assert_eq!(counter.count(), 2000);
    }

    #[test]
    fn test_uneven_step_clamps() {
        let mut counter = Counter::new(150, 40);
        counter.start().unwrap();
        let seen = run(&mut counter);
        // ceil(150 / 40) = 4, so the last step is clamped from 152 to 150
        assert_eq!(seen[0], 4);
        assert_eq!(*seen.last().unwrap(), 150);
        assert_eq!(seen.len(), 38);
    }

    #[test]
    fn test_small_target() {
        let mut counter = Counter::new(7, 40);
        counter.start().unwrap();
        assert_eq!(run(&mut counter), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_zero_target_finishes_immediately() {
        let mut counter = Counter::new(0, 40);
        counter.start().unwrap();
        assert!(counter.is_done());
        assert_eq!(counter.tick(), 0);
    }

    #[test]
    fn test_tick_before_start_is_noop() {
        let mut counter = Counter::new(100, 40);
        assert_eq!(counter.tick(), 0);
        assert_eq!(counter.phase(), CounterPhase::Idle);
    }

    #[test]
    fn test_restart_rejected() {
        let mut counter = Counter::new(10, 40);
        counter.start().unwrap();
        assert!(matches!(
            counter.start(),
            Err(SiteError::CounterRejected { phase: CounterPhase::Animating })
        ));

        run(&mut counter);
        assert!(matches!(
            counter.start(),
            Err(SiteError::CounterRejected { phase: CounterPhase::Done })
        ));
        assert_eq!(counter.count(), 10);
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(2000), "2,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
