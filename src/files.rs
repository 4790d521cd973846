use super::*;

use std::{ffi::OsStr, fs};

pub(crate) fn create_run_directory() -> Result<PathBuf> {
  let stamp = Local::now().format("%Y-%m-%d_%H-%M-%S");

  let dir = PathBuf::from(format!("youtube_downloads ({stamp})"));

  fs::create_dir_all(&dir)?;

  Ok(dir)
}

fn find_video_file(dir: &Path, id: &str) -> Result<PathBuf> {
  let marker = format!("[{id}]");

  for entry in fs::read_dir(dir)? {
    let path = entry?.path();

    if path.is_file()
      && path
        .extension()
        .is_some_and(|extension| extension == "mp4")
      && path
        .file_name()
        .and_then(OsStr::to_str)
        .is_some_and(|name| name.contains(&marker))
    {
      return Ok(path);
    }
  }

  bail!("no downloaded video found for {id} in {}", dir.display());
}

pub(crate) fn move_files_with_extension(
  src: &Path,
  extension: &str,
  dest: &Path,
) -> Result {
  fs::create_dir_all(dest)?;

  for entry in fs::read_dir(src)? {
    let path = entry?.path();

    if !path.is_file()
      || path
        .extension()
        .is_none_or(|candidate| candidate != extension)
    {
      continue;
    }

    let Some(name) = path.file_name() else {
      continue;
    };

    let target = dest.join(name);

    if target.exists() {
      warn!(file = %target.display(), "file already exists, skipping");
      continue;
    }

    if let Err(error) = fs::rename(&path, &target) {
      error!(
        from = %path.display(),
        to = %target.display(),
        %error,
        "could not move file",
      );
    }
  }

  Ok(())
}

pub(crate) fn prepare_video_directory(
  run_dir: &Path,
  id: &str,
) -> Result<(PathBuf, PathBuf)> {
  let source = find_video_file(run_dir, id)?;

  let stem = source
    .file_stem()
    .and_then(OsStr::to_str)
    .ok_or_else(|| anyhow!("video filename is not valid unicode"))?
    .to_string();

  let video_dir = run_dir.join(&stem);

  fs::create_dir_all(&video_dir)?;

  let target = video_dir.join(format!("{id}.mp4"));

  fs::rename(&source, &target)?;

  // The extractor's sidecar metadata follows the video.
  for entry in fs::read_dir(run_dir)? {
    let path = entry?.path();

    let is_sidecar = path.is_file()
      && path
        .extension()
        .is_some_and(|extension| extension == "json")
      && path
        .file_name()
        .and_then(OsStr::to_str)
        .is_some_and(|name| name.contains(&stem));

    if !is_sidecar {
      continue;
    }

    let Some(name) = path.file_name() else {
      continue;
    };

    if let Err(error) = fs::rename(&path, video_dir.join(name)) {
      error!(file = %path.display(), %error, "could not move metadata file");
    }
  }

  Ok((video_dir, target))
}

pub(crate) fn relocate_artifacts(video_dir: &Path) -> Result {
  move_files_with_extension(
    video_dir,
    "json",
    &video_dir.join("data-extracted"),
  )?;

  move_files_with_extension(
    video_dir,
    "mp4",
    &video_dir.join("media-extracted"),
  )?;

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  use std::{
    env, fs,
    sync::atomic::{AtomicUsize, Ordering},
  };

  static COUNTER: AtomicUsize = AtomicUsize::new(0);

  fn temp_dir() -> PathBuf {
    let unique = COUNTER.fetch_add(1, Ordering::Relaxed);

    let dir = env::temp_dir().join(format!("ytar_files_test_{unique}"));
    fs::create_dir_all(&dir).unwrap();

    dir
  }

  #[test]
  fn move_files_with_extension_only_moves_matches() {
    let src = temp_dir();

    fs::write(src.join("data.json"), b"{}").unwrap();
    fs::write(src.join("video.mp4"), b"bytes").unwrap();

    let dest = src.join("data-extracted");

    move_files_with_extension(&src, "json", &dest).unwrap();

    assert!(dest.join("data.json").exists());
    assert!(!src.join("data.json").exists());
    assert!(src.join("video.mp4").exists());

    let _ = fs::remove_dir_all(&src);
  }

  #[test]
  fn prepare_video_directory_renames_to_the_video_id() {
    let run_dir = temp_dir();

    fs::write(run_dir.join("My Video [abc123].mp4"), b"bytes").unwrap();
    fs::write(run_dir.join("My Video [abc123].info.json"), b"{}").unwrap();

    let (video_dir, video_path) =
      prepare_video_directory(&run_dir, "abc123").unwrap();

    assert_eq!(video_dir, run_dir.join("My Video [abc123]"));
    assert_eq!(video_path, video_dir.join("abc123.mp4"));
    assert!(video_path.exists());
    assert!(video_dir.join("My Video [abc123].info.json").exists());

    let _ = fs::remove_dir_all(&run_dir);
  }

  #[test]
  fn missing_video_file_is_an_error() {
    let run_dir = temp_dir();

    assert!(prepare_video_directory(&run_dir, "missing").is_err());

    let _ = fs::remove_dir_all(&run_dir);
  }

  #[test]
  fn relocate_artifacts_splits_media_and_data() {
    let video_dir = temp_dir();

    fs::write(video_dir.join("comments.json"), b"[]").unwrap();
    fs::write(video_dir.join("abc123.mp4"), b"bytes").unwrap();
    fs::write(video_dir.join("YouTube.html"), b"<html>").unwrap();

    relocate_artifacts(&video_dir).unwrap();

    assert!(video_dir.join("data-extracted/comments.json").exists());
    assert!(video_dir.join("media-extracted/abc123.mp4").exists());
    assert!(video_dir.join("YouTube.html").exists());

    let _ = fs::remove_dir_all(&video_dir);
  }
}
