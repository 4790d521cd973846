use super::*;

#[derive(Debug)]
pub(crate) struct Pacing {
  base_secs: u32,
}

impl Pacing {
  const JITTER_SECS: f64 = 3.0;

  pub(crate) fn delay(&self) -> Duration {
    let base = f64::from(self.base_secs);

    let jittered = rand::rng().random_range(base..=base + Self::JITTER_SECS);

    Duration::from_secs_f64(jittered)
  }

  pub(crate) fn new(base_secs: u32) -> Self {
    Self { base_secs }
  }

  pub(crate) async fn pause(&self, extra_secs: u32) {
    tokio::time::sleep(self.delay() + Duration::from_secs(u64::from(extra_secs)))
      .await;
  }
}
