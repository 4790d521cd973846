use super::*;

static CODEPOINT: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"emoji_(\w+)\.png").expect("pattern is valid"));

pub(crate) fn from_url(url: &str) -> String {
  let Some(captures) = CODEPOINT.captures(url) else {
    return String::new();
  };

  let codepoint = captures[1].trim_matches('u');

  u32::from_str_radix(codepoint, 16)
    .ok()
    .and_then(char::from_u32)
    .map_or_else(String::new, String::from)
}
