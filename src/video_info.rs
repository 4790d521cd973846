use super::*;

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct VideoInfo {
  pub(crate) channel_follower_count: Option<u64>,
  pub(crate) comment_count: Option<u64>,
  pub(crate) description: Option<String>,
  pub(crate) dislike_count: Option<u64>,
  pub(crate) id: String,
  pub(crate) like_count: Option<u64>,
  pub(crate) tags: Option<Vec<String>>,
  pub(crate) thumbnail: Option<String>,
  pub(crate) title: Option<String>,
  pub(crate) upload_date: Option<String>,
  pub(crate) uploader: Option<String>,
  pub(crate) uploader_url: Option<String>,
  pub(crate) view_count: Option<u64>,
}
