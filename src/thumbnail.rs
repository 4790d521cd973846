use super::*;

use std::fs;

pub(crate) async fn download(url: &str, target: &Path) -> Result {
  let response = reqwest::get(url).await?;

  if !response.status().is_success() {
    bail!("thumbnail request failed with status {}", response.status());
  }

  let bytes = response.bytes().await?;

  fs::write(target, &bytes)
    .with_context(|| format!("could not write {}", target.display()))?;

  Ok(())
}
