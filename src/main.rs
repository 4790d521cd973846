use {
  anyhow::{Context, anyhow, bail},
  archive::ArchiveJob,
  chromiumoxide::{
    Browser, BrowserConfig, Page,
    cdp::browser_protocol::input::{
      DispatchKeyEventParams, DispatchKeyEventType,
    },
    element::Element,
  },
  chrono::{Local, NaiveDate},
  comment::Comment,
  convergence::Convergence,
  crossterm::style::Stylize,
  driver::Driver,
  extractor::Extractor,
  futures::StreamExt,
  pacing::Pacing,
  percent_encoding::percent_decode_str,
  rand::Rng,
  regex::{Captures, Regex},
  reply::Reply,
  scraper::{ElementRef, Html, Node, Selector},
  serde::{Deserialize, Serialize, de::DeserializeOwned},
  settings::Settings,
  snapshot::Snapshot,
  std::{
    io::{self, IsTerminal, Write},
    path::{Path, PathBuf},
    process,
    sync::LazyLock,
    time::Duration,
  },
  tab::Tab,
  tracing::{error, info, warn},
  tracing_subscriber::EnvFilter,
  video_info::VideoInfo,
};

mod archive;
mod comment;
mod convergence;
mod driver;
mod emoji;
mod expansion;
mod extractor;
mod files;
mod harvest;
mod markup;
mod pacing;
mod page;
mod prompt;
mod reply;
mod rich_text;
mod settings;
mod snapshot;
mod tab;
mod thumbnail;
mod video_info;
mod ytdlp;

const AVATAR_SIZE_DEFAULT: &str = "s88-c-k";

const AVATAR_SIZE_SMALL: &str = "s48-c-k";

const YOUTUBE_BASE_URL: &str = "https://www.youtube.com";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

async fn prepare_job(url: &str, run_dir: &Path) -> Result<ArchiveJob> {
  let info = ytdlp::download(url, run_dir).await?;

  let (video_dir, video_path) =
    files::prepare_video_directory(run_dir, &info.id)?;

  Ok(ArchiveJob {
    info,
    url: url.to_string(),
    video_dir,
    video_path,
  })
}

async fn run() -> Result {
  let settings = Settings::load().context("could not load settings")?;

  let links = prompt::input_links().await?;

  if links.is_empty() {
    println!("{}", "No links provided.".yellow());
    return Ok(());
  }

  let links = ytdlp::expand_collections(links).await?;

  let run_dir = files::create_run_directory()?;

  info!("downloading videos...");

  let mut jobs = Vec::new();

  for url in &links {
    match prepare_job(url, &run_dir).await {
      Ok(job) => jobs.push(job),
      Err(error) => error!(%url, %error, "could not download video"),
    }
  }

  if jobs.is_empty() {
    bail!("none of the requested videos could be downloaded");
  }

  let driver = Driver::launch(settings.extra.headless)
    .await
    .context("could not launch the browser")?;

  let pacing = Pacing::new(settings.extra.delay);

  for job in &jobs {
    if let Err(error) =
      archive::archive_video(&driver, &settings, &pacing, job).await
    {
      error!(video = %job.info.id, %error, "archiving failed");
    }
  }

  driver.close().await?;

  info!("completed");

  Ok(())
}

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info")),
    )
    .init();

  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    process::exit(1);
  }
}
