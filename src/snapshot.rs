use super::*;

use std::fs;

#[derive(Debug, Default)]
pub(crate) struct Snapshot {
  comments: Vec<Comment>,
}

impl Snapshot {
  pub(crate) fn comments(&self) -> &[Comment] {
    &self.comments
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.comments.is_empty()
  }

  pub(crate) fn len(&self) -> usize {
    self.comments.len()
  }

  pub(crate) fn push(&mut self, comment: Comment) {
    self.comments.push(comment);
  }

  pub(crate) fn write(&self, path: &Path) -> Result {
    if self.comments.is_empty() {
      return Ok(());
    }

    let serialized = serde_json::to_vec_pretty(self.comments())?;

    fs::write(path, serialized)
      .with_context(|| format!("could not write {}", path.display()))?;

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use std::{
    env, fs,
    sync::atomic::{AtomicUsize, Ordering},
  };

  static COUNTER: AtomicUsize = AtomicUsize::new(0);

  fn temp_snapshot_path() -> PathBuf {
    let unique = COUNTER.fetch_add(1, Ordering::Relaxed);
    env::temp_dir().join(format!("ytar_snapshot_test_{unique}.json"))
  }

  fn sample_comment(text: &str) -> Comment {
    Comment {
      author_heart: false,
      channel_pfp: "https://example.com/pfp.jpg".to_string(),
      channel_url: "https://www.youtube.com/@someone".to_string(),
      channel_username: "@someone".to_string(),
      comment_date: "1 year ago".to_string(),
      is_pinned: false,
      like_count: "3".to_string(),
      replies: Vec::new(),
      styled_text: text.to_string(),
      text: text.to_string(),
    }
  }

  #[test]
  fn empty_snapshot_is_not_written() {
    let path = temp_snapshot_path();

    Snapshot::default().write(&path).unwrap();

    assert!(!path.exists());
  }

  #[test]
  fn write_produces_an_array_of_comments() {
    let path = temp_snapshot_path();

    let mut snapshot = Snapshot::default();
    snapshot.push(sample_comment("first"));
    snapshot.push(sample_comment("second"));

    snapshot.write(&path).unwrap();

    let data = fs::read(&path).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&data).unwrap();

    let comments = value.as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["text"], "first");
    assert_eq!(comments[1]["text"], "second");

    let _ = fs::remove_file(&path);
  }

  #[test]
  fn write_overwrites_an_existing_file() {
    let path = temp_snapshot_path();

    fs::write(&path, b"stale").unwrap();

    let mut snapshot = Snapshot::default();
    snapshot.push(sample_comment("fresh"));
    snapshot.write(&path).unwrap();

    let data = fs::read_to_string(&path).unwrap();
    assert!(data.contains("fresh"));
    assert!(!data.contains("stale"));

    let _ = fs::remove_file(&path);
  }
}
