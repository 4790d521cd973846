use super::*;

use std::fs;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub(crate) struct ExtraSettings {
  pub(crate) delay: u32,
  pub(crate) headless: bool,
}

impl Default for ExtraSettings {
  fn default() -> Self {
    Self {
      delay: 1,
      headless: false,
    }
  }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
  pub(crate) extra: ExtraSettings,
  pub(crate) youtube: YoutubeSettings,
}

impl Settings {
  const PATH: &str = "settings.json";

  pub(crate) fn load() -> Result<Self> {
    if !Path::new(Self::PATH).exists() {
      return Ok(Self::default());
    }

    let data = fs::read(Self::PATH)
      .with_context(|| format!("could not read {}", Self::PATH))?;

    Ok(
      serde_json::from_slice(&data)
        .with_context(|| format!("{} is not valid", Self::PATH))?,
    )
  }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub(crate) struct YoutubeSettings {
  pub(crate) max_comments: usize,
  pub(crate) save_comments: bool,
}

impl Default for YoutubeSettings {
  fn default() -> Self {
    Self {
      max_comments: 100,
      save_comments: true,
    }
  }
}
