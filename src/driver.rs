use super::*;

pub(crate) struct Driver {
  browser: Browser,
  handler_task: tokio::task::JoinHandle<()>,
}

impl Driver {
  pub(crate) async fn close(mut self) -> Result {
    self.browser.close().await?;
    self.browser.wait().await?;

    self.handler_task.abort();

    Ok(())
  }

  pub(crate) async fn launch(headless: bool) -> Result<Self> {
    let mut config = BrowserConfig::builder().args(vec![
      "--mute-audio",
      "--disable-notifications",
      "--no-first-run",
      "--no-service-autorun",
      "--password-store=basic",
      "--hide-crash-restore-bubble",
      "--lang=en-US",
    ]);

    if !headless {
      config = config.with_head();
    }

    let config = config.build().map_err(|error| anyhow!(error))?;

    let (browser, mut handler) = Browser::launch(config).await?;

    let handler_task = tokio::spawn(async move {
      while let Some(event) = handler.next().await {
        if event.is_err() {
          break;
        }
      }
    });

    Ok(Self {
      browser,
      handler_task,
    })
  }

  pub(crate) async fn open(&self, url: &str) -> Result<Tab> {
    let page = self.browser.new_page(url).await?;

    page.wait_for_navigation().await?;

    Ok(Tab::new(page))
  }
}
