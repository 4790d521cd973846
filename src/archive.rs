use super::*;

use std::{ffi::OsStr, fs::File, io::BufWriter};

pub(crate) struct ArchiveJob {
  pub(crate) info: VideoInfo,
  pub(crate) url: String,
  pub(crate) video_dir: PathBuf,
  pub(crate) video_path: PathBuf,
}

pub(crate) async fn archive_video(
  driver: &Driver,
  settings: &Settings,
  pacing: &Pacing,
  job: &ArchiveJob,
) -> Result {
  let title = job.info.title.clone().unwrap_or_else(|| job.info.id.clone());

  info!(video = %job.info.id, "archiving {title}");

  if let Some(thumbnail_url) = &job.info.thumbnail {
    let target = job.video_dir.join(format!("{}_thumbnail.jpg", job.info.id));

    if let Err(error) = thumbnail::download(thumbnail_url, &target).await {
      error!(video = %job.info.id, %error, "could not download the thumbnail");
    }
  }

  let tab = driver.open(&job.url).await?;

  pacing.pause(2).await;

  // Settle down to the description so lazily rendered channel details load.
  tab.slow_scroll(pacing).await?;
  pacing.pause(2).await;

  let profile_image = channel_profile_image(&tab.content().await?);

  let comments_enabled = job.info.comment_count.unwrap_or(0) > 0;

  let filename = job
    .video_path
    .file_name()
    .and_then(OsStr::to_str)
    .ok_or_else(|| anyhow!("video path is not valid unicode"))?;

  let rendered = page::render(
    &job.info,
    &job.url,
    filename,
    &profile_image,
    comments_enabled,
  );

  let file = File::create(job.video_dir.join("YouTube.html"))?;
  let mut output = BufWriter::new(file);

  output.write_all(rendered.as_bytes())?;

  if settings.youtube.save_comments && comments_enabled {
    let extractor = Extractor::new(
      job.info.uploader.clone().unwrap_or_default(),
      profile_image.clone(),
      settings.youtube.max_comments,
    )?;

    let expected =
      usize::try_from(job.info.comment_count.unwrap_or(0)).unwrap_or(usize::MAX);

    harvest::harvest_comments(
      &tab,
      pacing,
      &extractor,
      expected,
      settings.youtube.max_comments,
      &mut output,
      &job.video_dir.join("comments.json"),
    )
    .await?;
  }

  output.write_all(markup::PAGE_END.as_bytes())?;
  output.flush()?;

  drop(output);

  if let Err(error) = tab.close().await {
    warn!(video = %job.info.id, %error, "could not close the tab");
  }

  files::relocate_artifacts(&job.video_dir)?;

  if let Err(error) =
    ytdlp::download_audio(&job.url, &job.video_dir.join("media-extracted"))
      .await
  {
    error!(video = %job.info.id, %error, "could not download the audio track");
  }

  info!(video = %job.info.id, "page written");

  Ok(())
}

fn channel_profile_image(html: &str) -> String {
  let Ok(avatar) = Selector::parse("yt-img-shadow#avatar img") else {
    return String::new();
  };

  let document = Html::parse_document(html);

  document
    .select(&avatar)
    .next()
    .and_then(|image| image.value().attr("src"))
    .map_or_else(String::new, |src| {
      src.replace(AVATAR_SIZE_DEFAULT, AVATAR_SIZE_SMALL)
    })
}
