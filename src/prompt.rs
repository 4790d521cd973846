use super::*;

use std::io::BufRead;

pub(crate) async fn input_links() -> Result<Vec<String>> {
  println!();
  println!("{}", "NOTE:".bold().yellow());
  println!(
    "{}",
    "Add YouTube video/playlist/channel URLs one by one. Type 's' to start."
      .cyan()
  );

  let mut links: Vec<String> = Vec::new();

  loop {
    print!("\n >> Add YouTube link: ");
    io::stdout().flush()?;

    let mut line = String::new();

    if io::stdin().lock().read_line(&mut line)? == 0 {
      break;
    }

    let entry = line.trim();

    if entry.eq_ignore_ascii_case("s") {
      break;
    }

    if entry.is_empty() {
      continue;
    }

    let link = if entry.contains("&list=") || entry.contains("/@") {
      entry.to_string()
    } else {
      entry.split('&').next().unwrap_or(entry).to_string()
    };

    if links.contains(&link) {
      continue;
    }

    match ytdlp::fetch_info(&link).await {
      Ok(info) => {
        let author = info
          .uploader
          .unwrap_or_else(|| "unknown channel".to_string());

        let title = info.title.unwrap_or_else(|| link.clone());

        println!("{} {title}", format!("{author} —").bold());
      }
      Err(error) => {
        println!("{}", format!("could not read link info: {error}").red());
      }
    }

    links.push(link);
  }

  Ok(links)
}
