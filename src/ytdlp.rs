use super::*;

use tokio::process::Command;

const AUDIO_FORMAT: &str = "bestaudio/best";

const OUTPUT_TEMPLATE: &str = "%(title)s [%(id)s].%(ext)s";

const PROGRAM: &str = "yt-dlp";

const VIDEO_FORMAT: &str = "bestvideo[ext=mp4]+bestaudio[ext=m4a]/best";

pub(crate) async fn download(url: &str, dir: &Path) -> Result<VideoInfo> {
  let template = output_template(dir)?;

  let stdout = run(&[
    "--quiet",
    "--no-warnings",
    "--format",
    VIDEO_FORMAT,
    "--merge-output-format",
    "mp4",
    "--write-info-json",
    "--no-simulate",
    "--dump-single-json",
    "--output",
    &template,
    "--",
    url,
  ])
  .await?;

  Ok(
    serde_json::from_slice(&stdout)
      .context("could not parse video metadata")?,
  )
}

pub(crate) async fn download_audio(url: &str, dir: &Path) -> Result {
  let template = output_template(dir)?;

  run(&[
    "--quiet",
    "--no-warnings",
    "--format",
    AUDIO_FORMAT,
    "--extract-audio",
    "--audio-format",
    "mp3",
    "--audio-quality",
    "320K",
    "--output",
    &template,
    "--",
    url,
  ])
  .await?;

  Ok(())
}

pub(crate) async fn expand_collections(
  links: Vec<String>,
) -> Result<Vec<String>> {
  let mut expanded = Vec::new();

  for link in links {
    if link.contains("&list=") || link.contains("/@") {
      expanded.extend(playlist_links(&link).await?);
    } else {
      expanded.push(link);
    }
  }

  Ok(expanded)
}

pub(crate) async fn fetch_info(url: &str) -> Result<VideoInfo> {
  let stdout = run(&[
    "--quiet",
    "--no-warnings",
    "--skip-download",
    "--dump-single-json",
    "--",
    url,
  ])
  .await?;

  Ok(
    serde_json::from_slice(&stdout)
      .context("could not parse video metadata")?,
  )
}

fn output_template(dir: &Path) -> Result<String> {
  let template = dir.join(OUTPUT_TEMPLATE);

  template
    .to_str()
    .map(str::to_string)
    .ok_or_else(|| anyhow!("output directory is not valid unicode"))
}

async fn playlist_links(url: &str) -> Result<Vec<String>> {
  let stdout = run(&[
    "--quiet",
    "--no-warnings",
    "--flat-playlist",
    "--print",
    "url",
    "--",
    url,
  ])
  .await?;

  Ok(
    String::from_utf8_lossy(&stdout)
      .lines()
      .filter(|line| !line.is_empty())
      .map(str::to_string)
      .collect(),
  )
}

async fn run(args: &[&str]) -> Result<Vec<u8>> {
  let output = Command::new(PROGRAM)
    .args(args)
    .output()
    .await
    .with_context(|| format!("could not execute {PROGRAM}"))?;

  if !output.status.success() {
    bail!(
      "{PROGRAM} failed: {}",
      String::from_utf8_lossy(&output.stderr).trim()
    );
  }

  Ok(output.stdout)
}
