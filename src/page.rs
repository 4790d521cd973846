use super::*;

static HASHTAG: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"#\w+").expect("pattern is valid"));

static LINK: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"http\S+").expect("pattern is valid"));

const TEMPLATE: &str = include_str!("../assets/page.html");

static TIMECODE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(^|[^\d])(\d+:\d{2})\b").expect("pattern is valid")
});

fn enrich_description(description: &str, watch_url: &str) -> String {
  let linked =
    LINK.replace_all(description, r#"<a href="$0">$0</a>"#);

  let tagged = HASHTAG.replace_all(&linked, |captures: &Captures| {
    let tag = &captures[0];

    markup::redirect_url(
      tag,
      &format!("{YOUTUBE_BASE_URL}/hashtag/{}", tag[1..].to_lowercase()),
    )
  });

  TIMECODE
    .replace_all(&tagged, |captures: &Captures| {
      let stamp = &captures[2];

      format!(
        "{}{}",
        &captures[1],
        markup::redirect_url(
          stamp,
          &format!("{watch_url}&t={}s", timecode_seconds(stamp)),
        ),
      )
    })
    .into_owned()
}

fn format_count(value: u64) -> String {
  let digits = value.to_string();

  let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

  for (index, digit) in digits.chars().enumerate() {
    if index > 0 && (digits.len() - index) % 3 == 0 {
      grouped.push(',');
    }

    grouped.push(digit);
  }

  grouped
}

fn format_upload_date(raw: &str) -> String {
  NaiveDate::parse_from_str(raw, "%Y%m%d").map_or_else(
    |_| raw.to_string(),
    |date| date.format("%d %B %Y").to_string(),
  )
}

pub(crate) fn render(
  info: &VideoInfo,
  url: &str,
  video_filename: &str,
  profile_image: &str,
  comments_enabled: bool,
) -> String {
  let watch_url = url.split('&').next().unwrap_or(url);

  let title = info.title.clone().unwrap_or_default();

  let views = info.view_count.map_or_else(String::new, format_count);

  let author = info.uploader.clone().unwrap_or_default();

  let channel_url = info
    .uploader_url
    .clone()
    .unwrap_or_else(|| "Channel URL not found".to_string());

  let publish_date = info
    .upload_date
    .as_deref()
    .map_or_else(String::new, format_upload_date);

  let keywords = info.tags.as_deref().map_or_else(String::new, |tags| {
    tags
      .iter()
      .map(|tag| format!("#{tag}"))
      .collect::<Vec<_>>()
      .join(" ")
  });

  let description = enrich_description(
    info.description.as_deref().unwrap_or_default(),
    watch_url,
  );

  let subscribers = info.channel_follower_count.map_or_else(String::new, |count| {
    format!("{} subscribers", format_count(count))
  });

  let likes = info
    .like_count
    .map_or_else(|| "LIKE".to_string(), format_count);

  let dislikes = info
    .dislike_count
    .map_or_else(|| "DISLIKE".to_string(), format_count);

  let comment_caption = if comments_enabled {
    format!("{} Comments", format_count(info.comment_count.unwrap_or(0)))
  } else {
    "Comments are turned off.".to_string()
  };

  TEMPLATE
    .replace("REPLACE_TITLE", &html_escape::encode_text(&title))
    .replace("TITLE_URL", watch_url)
    .replace("NUMBER_OF_VIEWS", &views)
    .replace("CHANNEL_AUTHOR", &author)
    .replace("CHANNEL_URL", &channel_url)
    .replace("PUBLISH_DATE", &publish_date)
    .replace("CHANNEL_KEYWORDS", &keywords)
    .replace("CHANNEL_DESCRIPTION", &description)
    .replace("CHANNEL_SUBSCRIBERS", &subscribers)
    .replace("PROFILE_IMAGE_LINK", profile_image)
    .replace("LIKE_COUNT", &likes)
    .replace("DISLIKES_COUNT", &dislikes)
    .replace("COMMENT_COUNT", &comment_caption)
    .replace("VIDEO_SOURCE", &format!("media-extracted/{video_filename}"))
}

fn timecode_seconds(stamp: &str) -> u64 {
  let Some((minutes, seconds)) = stamp.split_once(':') else {
    return 0;
  };

  let minutes: u64 = minutes.parse().unwrap_or(0);
  let seconds: u64 = seconds.parse().unwrap_or(0);

  minutes * 60 + seconds
}
