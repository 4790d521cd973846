use super::*;

pub(crate) struct RenderedText {
  pub(crate) plain: String,
  pub(crate) styled: String,
}

fn collect(
  element: ElementRef,
  plain: &mut Vec<String>,
  styled: &mut Vec<String>,
) {
  for child in element.children() {
    match child.value() {
      Node::Element(node) => match node.name() {
        "a" => {
          if let Some(anchor) = ElementRef::wrap(child) {
            push_anchor(anchor, plain, styled);
          }
        }
        "img" => {
          if let Some(src) = node.attr("src")
            && src.contains("emoji")
          {
            let glyph = emoji::from_url(src);

            if !glyph.is_empty() {
              plain.push(glyph.clone());
              styled.push(glyph);
            }
          }
        }
        _ => {
          if let Some(nested) = ElementRef::wrap(child) {
            collect(nested, plain, styled);
          }
        }
      },
      Node::Text(text) => {
        let trimmed = text.trim();

        if !trimmed.is_empty() {
          plain.push(trimmed.to_string());
          styled.push(html_escape::encode_text(trimmed).into_owned());
        }
      }
      _ => {}
    }
  }
}

pub(crate) fn parse_content(content: ElementRef) -> RenderedText {
  let mut plain = Vec::new();
  let mut styled = Vec::new();

  collect(content, &mut plain, &mut styled);

  RenderedText {
    plain: plain.join(" "),
    styled: styled.join(" "),
  }
}

fn push_anchor(
  anchor: ElementRef,
  plain: &mut Vec<String>,
  styled: &mut Vec<String>,
) {
  let text = anchor.text().collect::<String>();
  let text = text.trim();

  if text.is_empty() {
    return;
  }

  let href = anchor.value().attr("href").unwrap_or_default();

  if text.contains("https://") {
    plain.push(text.to_string());
    styled.push(markup::styled_url(text));
    return;
  }

  if href.contains("&t=") {
    plain.push(text.to_string());
    styled.push(markup::redirect_url(
      text,
      &format!("{YOUTUBE_BASE_URL}{href}"),
    ));
    return;
  }

  plain.push(text.to_string());
  styled.push(html_escape::encode_text(text).into_owned());
}

pub(crate) fn style_reply_mention(input: &str) -> String {
  let trimmed = input.trim();

  if trimmed.starts_with('@')
    && let Some((mention, remaining)) = trimmed.split_once(' ')
  {
    return format!("{} {remaining}", markup::mention(mention.trim()));
  }

  trimmed.to_string()
}
