use super::*;

struct CommentFields {
  channel_pfp: String,
  channel_url: String,
  channel_username: String,
  comment_date: String,
  like_count: String,
}

pub(crate) struct Extractor {
  channel_author: String,
  max_comments: usize,
  profile_image: String,
  selectors: Selectors,
}

impl Extractor {
  pub(crate) fn extract<W: Write>(
    &self,
    html: &str,
    output: &mut W,
  ) -> Result<Snapshot> {
    let document = Html::parse_document(html);

    let threads = document
      .select(&self.selectors.threads)
      .take(self.max_comments)
      .collect::<Vec<_>>();

    if threads.is_empty() {
      warn!("no comments found in the page snapshot");
      return Ok(Snapshot::default());
    }

    let total = threads.len();

    let mut snapshot = Snapshot::default();

    for (index, thread) in threads.into_iter().enumerate() {
      let comment = self
        .parse_comment(thread, index == 0)
        .with_context(|| format!("could not parse comment {}", index + 1))?;

      info!("fetched {}/{total} comments", index + 1);

      let mut rendered =
        markup::comment_box(&comment, &self.channel_author, &self.profile_image);

      if comment.replies.is_empty() {
        rendered.push_str(markup::CLOSING_DIVS);
      } else {
        rendered.push_str(&markup::replies_toggle(&self.reply_count_label(thread)));
        rendered.push_str(markup::CLOSING_DIVS);

        for reply in &comment.replies {
          rendered.push_str(&markup::reply_box(reply, &self.profile_image));
        }
      }

      output.write_all(rendered.as_bytes())?;

      snapshot.push(comment);
    }

    Ok(snapshot)
  }

  pub(crate) fn new(
    channel_author: String,
    profile_image: String,
    max_comments: usize,
  ) -> Result<Self> {
    Ok(Self {
      channel_author,
      max_comments,
      profile_image,
      selectors: Selectors::new()?,
    })
  }

  fn parse_comment(&self, thread: ElementRef, first: bool) -> Result<Comment> {
    // Pin badges only render on the first fetched comment, so only that one
    // is ever checked.
    let is_pinned =
      first && thread.select(&self.selectors.pin_badge).next().is_some();

    let content = thread
      .select(&self.selectors.content_text)
      .next()
      .ok_or_else(|| anyhow!("comment has no text container"))?;

    let text = rich_text::parse_content(content);

    let fields = self.parse_fields(thread)?;

    let author_heart =
      thread.select(&self.selectors.heart).next().is_some();

    let replies = if thread
      .select(&self.selectors.more_replies)
      .next()
      .is_some()
    {
      thread
        .select(&self.selectors.expander_bodies)
        .map(|body| self.parse_reply(body))
        .collect::<Result<Vec<_>>>()?
    } else {
      Vec::new()
    };

    Ok(Comment {
      author_heart,
      channel_pfp: fields.channel_pfp,
      channel_url: fields.channel_url,
      channel_username: fields.channel_username,
      comment_date: fields.comment_date,
      is_pinned,
      like_count: fields.like_count,
      replies,
      styled_text: text.styled,
      text: text.plain,
    })
  }

  fn parse_fields(&self, element: ElementRef) -> Result<CommentFields> {
    let like_count = element
      .select(&self.selectors.like_count)
      .next()
      .ok_or_else(|| anyhow!("missing like count"))?
      .text()
      .collect::<String>()
      .trim()
      .to_string();

    let author_href = element
      .select(&self.selectors.author)
      .next()
      .and_then(|author| author.value().attr("href"))
      .ok_or_else(|| anyhow!("missing author link"))?;

    let handle = author_href.strip_prefix('/').unwrap_or(author_href);

    let channel_username =
      percent_decode_str(handle).decode_utf8_lossy().into_owned();

    let comment_date = element
      .select(&self.selectors.date)
      .next()
      .ok_or_else(|| anyhow!("missing publish date"))?
      .text()
      .collect::<String>()
      .trim()
      .to_string();

    let channel_path = element
      .select(&self.selectors.main_link)
      .next()
      .and_then(|link| link.value().attr("href"))
      .ok_or_else(|| anyhow!("missing channel link"))?;

    let channel_url = format!("{YOUTUBE_BASE_URL}{channel_path}");

    let channel_pfp = element
      .select(&self.selectors.avatar)
      .next()
      .and_then(|image| image.value().attr("src"))
      .ok_or_else(|| anyhow!("missing avatar image"))?
      .replace(AVATAR_SIZE_DEFAULT, AVATAR_SIZE_SMALL);

    Ok(CommentFields {
      channel_pfp,
      channel_url,
      channel_username,
      comment_date,
      like_count,
    })
  }

  fn parse_reply(&self, body: ElementRef) -> Result<Reply> {
    let content = body
      .select(&self.selectors.content_text)
      .next()
      .ok_or_else(|| anyhow!("reply has no text container"))?;

    let text = rich_text::parse_content(content);

    let styled_text = rich_text::style_reply_mention(&text.styled);

    let fields = self.parse_fields(body)?;

    let author_heart = body.select(&self.selectors.heart).next().is_some();

    Ok(Reply {
      author_heart,
      channel_pfp: fields.channel_pfp,
      channel_url: fields.channel_url,
      channel_username: fields.channel_username,
      comment_date: fields.comment_date,
      like_count: fields.like_count,
      styled_text,
      text: text.plain,
    })
  }

  fn reply_count_label(&self, thread: ElementRef) -> String {
    let Some(button) = thread.select(&self.selectors.more_replies).next()
    else {
      return String::new();
    };

    button.value().attr("aria-label").map_or_else(
      || button.text().collect::<String>().trim().to_string(),
      ToString::to_string,
    )
  }
}

struct Selectors {
  author: Selector,
  avatar: Selector,
  content_text: Selector,
  date: Selector,
  expander_bodies: Selector,
  heart: Selector,
  like_count: Selector,
  main_link: Selector,
  more_replies: Selector,
  pin_badge: Selector,
  threads: Selector,
}

impl Selectors {
  fn new() -> Result<Self> {
    Ok(Self {
      author: selector("#author-text")?,
      avatar: selector("yt-img-shadow [id='img']")?,
      content_text: selector("#content-text")?,
      date: selector(
        "div[id='header-author'] span[id='published-time-text'] a",
      )?,
      expander_bodies: selector(
        r#"div[id="expander"] div[id="expander-contents"] #body"#,
      )?,
      heart: selector("#creator-heart-button")?,
      like_count: selector("[id='vote-count-middle']")?,
      main_link: selector("div[id='main'] div a")?,
      more_replies: selector("#more-replies button")?,
      pin_badge: selector("ytd-pinned-comment-badge-renderer")?,
      threads: selector(convergence::COMMENT_THREAD_SELECTOR)?,
    })
  }
}

fn selector(css: &str) -> Result<Selector> {
  Selector::parse(css).map_err(|error| anyhow!("invalid selector `{css}`: {error}"))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn reply_body(author: &str, text: &str) -> String {
    format!(
      r#"
      <div id="body">
        <div id="main">
          <div><a href="/channel/UCreply">reply channel</a></div>
          <a id="author-text" href="/{author}"></a>
          <div id="header-author">
            <span id="published-time-text"><a> 1 month ago </a></span>
          </div>
          <yt-img-shadow><img id="img" src="https://yt3.ggpht.com/reply=s88-c-k-c0x00ffffff-no-rj"></yt-img-shadow>
          <span id="content-text">{text}</span>
          <span id="vote-count-middle"> 2 </span>
        </div>
      </div>
"#
    )
  }

  fn thread(author: &str, text: &str, pinned: bool, replies: &[String]) -> String {
    let badge = if pinned {
      "<ytd-pinned-comment-badge-renderer></ytd-pinned-comment-badge-renderer>"
    } else {
      ""
    };

    let reply_section = if replies.is_empty() {
      String::new()
    } else {
      format!(
        r#"
        <div id="more-replies"><button aria-label="{count} replies"></button></div>
        <div id="expander"><div id="expander-contents">{bodies}</div></div>
"#,
        count = replies.len(),
        bodies = replies.concat(),
      )
    };

    format!(
      r#"
      <ytd-comment-thread-renderer>
        {badge}
        <div id="main">
          <div><a href="/channel/UCmain">channel</a></div>
          <a id="author-text" href="/{author}"></a>
          <div id="header-author">
            <span id="published-time-text"><a> 2 years ago </a></span>
          </div>
          <yt-img-shadow><img id="img" src="https://yt3.ggpht.com/abc=s88-c-k-c0x00ffffff-no-rj"></yt-img-shadow>
          <span id="content-text">{text}</span>
          <span id="vote-count-middle"> 42 </span>
        </div>
        {reply_section}
      </ytd-comment-thread-renderer>
"#
    )
  }

  fn page(threads: &[String]) -> String {
    format!(
      r#"<html><body><div id="contents">{}</div></body></html>"#,
      threads.concat()
    )
  }

  fn make_extractor(max_comments: usize) -> Extractor {
    Extractor::new("Author".to_string(), "pfp.jpg".to_string(), max_comments)
      .unwrap()
  }

  #[test]
  fn extraction_truncates_to_the_configured_maximum() {
    let threads = (0..25)
      .map(|index| thread("@user", &format!("comment {index}"), false, &[]))
      .collect::<Vec<_>>();

    let mut output = Vec::new();

    let snapshot = make_extractor(20)
      .extract(&page(&threads), &mut output)
      .unwrap();

    assert_eq!(snapshot.len(), 20);
    assert_eq!(snapshot.comments()[0].text, "comment 0");
    assert_eq!(snapshot.comments()[19].text, "comment 19");
  }

  #[test]
  fn pin_badge_is_only_honored_on_the_first_comment() {
    let threads = vec![
      thread("@first", "first", true, &[]),
      thread("@second", "second", true, &[]),
    ];

    let mut output = Vec::new();

    let snapshot = make_extractor(10)
      .extract(&page(&threads), &mut output)
      .unwrap();

    assert!(snapshot.comments()[0].is_pinned);
    assert!(!snapshot.comments()[1].is_pinned);

    let pinned = snapshot
      .comments()
      .iter()
      .filter(|comment| comment.is_pinned)
      .count();

    assert_eq!(pinned, 1);
  }

  #[test]
  fn comment_without_replies_renders_no_toggle() {
    let threads = vec![thread("@user", "hello", false, &[])];

    let mut output = Vec::new();

    let snapshot = make_extractor(10)
      .extract(&page(&threads), &mut output)
      .unwrap();

    assert!(snapshot.comments()[0].replies.is_empty());

    let rendered = String::from_utf8(output).unwrap();
    assert!(rendered.contains("class=\"comment\""));
    assert!(!rendered.contains("view-replies"));
  }

  #[test]
  fn replies_are_parsed_in_order_with_styled_mentions() {
    let replies = vec![
      reply_body("@other", "@someone hello there"),
      reply_body("@third", "plain answer"),
    ];

    let threads = vec![thread("@user", "root", false, &replies)];

    let mut output = Vec::new();

    let snapshot = make_extractor(10)
      .extract(&page(&threads), &mut output)
      .unwrap();

    let comment = &snapshot.comments()[0];
    assert_eq!(comment.replies.len(), 2);

    let first = &comment.replies[0];
    assert_eq!(first.text, "@someone hello there");
    assert_eq!(
      first.styled_text,
      format!("{} hello there", markup::mention("@someone"))
    );

    assert_eq!(comment.replies[1].text, "plain answer");

    let rendered = String::from_utf8(output).unwrap();
    assert!(rendered.contains("2 replies"));
    assert!(rendered.contains("left:80px"));
  }

  #[test]
  fn author_handles_are_percent_decoded() {
    let threads = vec![thread("@some%20user", "hi", false, &[])];

    let mut output = Vec::new();

    let snapshot = make_extractor(10)
      .extract(&page(&threads), &mut output)
      .unwrap();

    assert_eq!(snapshot.comments()[0].channel_username, "@some user");
  }

  #[test]
  fn avatar_size_token_is_rewritten() {
    let threads = vec![thread("@user", "hi", false, &[])];

    let mut output = Vec::new();

    let snapshot = make_extractor(10)
      .extract(&page(&threads), &mut output)
      .unwrap();

    let comment = &snapshot.comments()[0];
    assert!(comment.channel_pfp.contains("s48-c-k"));
    assert!(!comment.channel_pfp.contains("s88-c-k"));
  }

  #[test]
  fn channel_url_is_host_qualified() {
    let threads = vec![thread("@user", "hi", false, &[])];

    let mut output = Vec::new();

    let snapshot = make_extractor(10)
      .extract(&page(&threads), &mut output)
      .unwrap();

    assert_eq!(
      snapshot.comments()[0].channel_url,
      "https://www.youtube.com/channel/UCmain"
    );
  }

  #[test]
  fn missing_required_field_aborts_extraction() {
    let broken = r#"
      <html><body><div id="contents">
        <ytd-comment-thread-renderer>
          <span id="content-text">orphan</span>
        </ytd-comment-thread-renderer>
      </div></body></html>
"#;

    let mut output = Vec::new();

    assert!(make_extractor(10).extract(broken, &mut output).is_err());
  }

  #[test]
  fn empty_page_yields_an_empty_snapshot() {
    let mut output = Vec::new();

    let snapshot = make_extractor(10)
      .extract("<html><body></body></html>", &mut output)
      .unwrap();

    assert!(snapshot.is_empty());
    assert!(output.is_empty());
  }
}
