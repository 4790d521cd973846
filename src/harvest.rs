use super::*;

const OWNER_BADGE_SELECTOR: &str = "#owner-sub-count";

pub(crate) async fn harvest_comments<W: Write>(
  tab: &Tab,
  pacing: &Pacing,
  extractor: &Extractor,
  expected: usize,
  max_comments: usize,
  output: &mut W,
  snapshot_path: &Path,
) -> Result {
  tab.slow_scroll(pacing).await?;

  info!("loading comments");

  pacing.pause(2).await;

  // Give the window focus so the synthetic End keys land.
  if let Ok(buttons) = tab.find_all(OWNER_BADGE_SELECTOR).await
    && let Some(button) = buttons.first()
  {
    let _ = button.click().await;
    pacing.pause(2).await;
  }

  Convergence::new(expected, max_comments, None)
    .run(tab, pacing)
    .await?;

  expansion::expand_all_replies(tab, pacing).await?;

  let html = tab.content().await?;

  match extractor.extract(&html, output) {
    Ok(snapshot) => {
      info!("harvested {} comments", snapshot.len());

      if !snapshot.is_empty()
        && let Err(error) = snapshot.write(snapshot_path)
      {
        error!(
          path = %snapshot_path.display(),
          %error,
          "could not write the comment snapshot",
        );
      }
    }
    Err(error) => {
      error!(%error, "comment extraction aborted");
    }
  }

  Ok(())
}
