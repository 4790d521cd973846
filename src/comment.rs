use super::*;

#[derive(Clone, Debug, Serialize)]
pub(crate) struct Comment {
  pub(crate) author_heart: bool,
  pub(crate) channel_pfp: String,
  pub(crate) channel_url: String,
  pub(crate) channel_username: String,
  pub(crate) comment_date: String,
  #[serde(skip)]
  pub(crate) is_pinned: bool,
  pub(crate) like_count: String,
  pub(crate) replies: Vec<Reply>,
  #[serde(skip)]
  pub(crate) styled_text: String,
  pub(crate) text: String,
}
