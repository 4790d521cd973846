use super::*;

const COMMENTS_PER_SCROLL_STEP: usize = 20;

pub(crate) const COMMENT_THREAD_SELECTOR: &str =
  "#contents ytd-comment-thread-renderer";

const EXTRA_SCROLL_STEPS: usize = 5;

const NUDGE_AFTER_STABLE_POLLS: usize = 2;

const STABILITY_THRESHOLD: usize = 3;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Convergence {
  expected: usize,
  max_loaded: usize,
  poll_cap: Option<usize>,
}

impl Convergence {
  // Pure transition table over {Advancing, Polling, Stable, Done}. Height
  // stability across STABILITY_THRESHOLD + 1 consecutive polls is the
  // primary termination guarantee for feeds shorter than the target.
  pub(crate) fn after_poll(
    &self,
    phase: Phase,
    height_changed: bool,
    loaded: usize,
  ) -> Phase {
    if loaded > self.max_loaded {
      return Phase::Done;
    }

    if height_changed {
      return Phase::Polling;
    }

    match phase {
      Phase::Stable { polls } if polls >= STABILITY_THRESHOLD => Phase::Done,
      Phase::Stable { polls } => Phase::Stable { polls: polls + 1 },
      _ => Phase::Stable { polls: 1 },
    }
  }

  pub(crate) fn initial_phase(&self) -> Phase {
    Phase::Advancing {
      remaining: self.initial_steps(),
    }
  }

  fn initial_steps(&self) -> usize {
    self
      .expected
      .div_ceil(COMMENTS_PER_SCROLL_STEP)
      .max(1)
      .saturating_add(EXTRA_SCROLL_STEPS)
  }

  pub(crate) fn new(
    expected: usize,
    max_loaded: usize,
    poll_cap: Option<usize>,
  ) -> Self {
    Self {
      expected,
      max_loaded,
      poll_cap,
    }
  }

  pub(crate) async fn run(&self, tab: &Tab, pacing: &Pacing) -> Result {
    let mut phase = self.initial_phase();
    let mut polls = 0;

    while phase != Phase::Done {
      phase = match phase {
        Phase::Advancing { remaining } => {
          tab.press_end().await?;
          pacing.pause(1).await;

          if remaining <= 1 {
            Phase::Polling
          } else {
            Phase::Advancing {
              remaining: remaining - 1,
            }
          }
        }
        Phase::Done => Phase::Done,
        Phase::Polling | Phase::Stable { .. } => {
          if let Phase::Stable { polls: stable } = phase
            && stable == NUDGE_AFTER_STABLE_POLLS
          {
            pacing.pause(1).await;
            tab.slow_scroll(pacing).await?;
          }

          let before = tab.scroll_height().await?;

          pacing.pause(5).await;
          tab.scroll_to_bottom().await?;

          let after = tab.scroll_height().await?;
          let loaded = tab.count(COMMENT_THREAD_SELECTOR).await?;

          polls += 1;

          if self.poll_cap.is_some_and(|cap| polls >= cap) {
            Phase::Done
          } else {
            self.after_poll(phase, after != before, loaded)
          }
        }
      };
    }

    Ok(())
  }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Phase {
  Advancing { remaining: usize },
  Done,
  Polling,
  Stable { polls: usize },
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn stability_terminates_within_threshold_plus_one_polls() {
    let engine = Convergence::new(1_000_000, 1_000_000, None);

    let mut phase = Phase::Polling;
    let mut polls = 0;

    while phase != Phase::Done {
      phase = engine.after_poll(phase, false, 0);
      polls += 1;
    }

    assert_eq!(polls, STABILITY_THRESHOLD + 1);
  }

  #[test]
  fn growth_resets_the_stability_counter() {
    let engine = Convergence::new(100, 100, None);

    let phase = engine.after_poll(
      Phase::Stable {
        polls: STABILITY_THRESHOLD,
      },
      true,
      0,
    );

    assert_eq!(phase, Phase::Polling);
  }

  #[test]
  fn count_overflow_terminates_without_height_stability() {
    let engine = Convergence::new(100, 20, None);

    assert_eq!(engine.after_poll(Phase::Polling, true, 21), Phase::Done);
  }

  #[test]
  fn count_at_the_maximum_keeps_polling() {
    let engine = Convergence::new(100, 20, None);

    assert_eq!(engine.after_poll(Phase::Polling, true, 20), Phase::Polling);
  }

  #[test]
  fn zero_target_still_schedules_scrolling_and_polling() {
    let engine = Convergence::new(0, 20, None);

    let Phase::Advancing { remaining } = engine.initial_phase() else {
      panic!("expected an advancing phase");
    };

    assert!(remaining >= 1);
  }

  #[test]
  fn advancing_steps_scale_with_the_per_step_estimate() {
    let engine = Convergence::new(100, 100, None);

    assert_eq!(
      engine.initial_phase(),
      Phase::Advancing {
        remaining: 100 / COMMENTS_PER_SCROLL_STEP + EXTRA_SCROLL_STEPS,
      }
    );
  }

  #[test]
  fn stable_feed_walks_the_full_stability_ladder() {
    let engine = Convergence::new(40, 40, None);

    let mut phase = Phase::Polling;

    for polls in 1..=STABILITY_THRESHOLD {
      phase = engine.after_poll(phase, false, 10);
      assert_eq!(phase, Phase::Stable { polls });
    }

    assert_eq!(engine.after_poll(phase, false, 10), Phase::Done);
  }
}
