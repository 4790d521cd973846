use super::*;

const EXPAND_REPLIES_SELECTOR: &str = "#more-replies button";

const MAX_ROUNDS: usize = 50;

const SHOW_MORE_SELECTOR: &str = "button[aria-label='Show more replies']";

async fn activate(button: &Element, tab: &Tab, pacing: &Pacing) -> Result {
  button.scroll_into_view().await?;
  pacing.pause(1).await;

  button.click().await?;
  pacing.pause(2).await;

  tab.slow_scroll(pacing).await?;
  pacing.pause(2).await;

  Ok(())
}

pub(crate) async fn expand_all_replies(tab: &Tab, pacing: &Pacing) -> Result {
  info!("expanding reply threads");

  for button in tab.find_all(EXPAND_REPLIES_SELECTOR).await? {
    activate(&button, tab, pacing).await?;
  }

  // Fixed point: activating one control can reveal nested ones, so rescan
  // until a pass finds nothing.
  for _ in 0..MAX_ROUNDS {
    let buttons = tab.find_all(SHOW_MORE_SELECTOR).await?;

    if buttons.is_empty() {
      return Ok(());
    }

    for button in buttons {
      activate(&button, tab, pacing).await?;
      pacing.pause(2).await;
    }
  }

  warn!("reply expansion stopped at the round cap");

  Ok(())
}
