use super::*;

const END_VIRTUAL_KEY_CODE: i64 = 35;

const SCROLL_TO_BOTTOM_SCRIPT: &str = "
  var scrollingElement = document.scrollingElement || document.body;
  scrollingElement.scrollTop = scrollingElement.scrollHeight;
";

pub(crate) struct Tab {
  page: Page,
}

impl Tab {
  pub(crate) async fn close(self) -> Result {
    self.page.close().await?;

    Ok(())
  }

  pub(crate) async fn content(&self) -> Result<String> {
    Ok(self.page.content().await?)
  }

  pub(crate) async fn count(&self, selector: &str) -> Result<usize> {
    self
      .evaluate(&format!("document.querySelectorAll({selector:?}).length"))
      .await
  }

  pub(crate) async fn evaluate<T: DeserializeOwned>(
    &self,
    script: &str,
  ) -> Result<T> {
    Ok(self.page.evaluate(script).await?.into_value()?)
  }

  pub(crate) async fn find_all(&self, selector: &str) -> Result<Vec<Element>> {
    Ok(self.page.find_elements(selector).await?)
  }

  pub(crate) fn new(page: Page) -> Self {
    Self { page }
  }

  pub(crate) async fn press_end(&self) -> Result {
    for kind in [DispatchKeyEventType::KeyDown, DispatchKeyEventType::KeyUp] {
      let event = DispatchKeyEventParams::builder()
        .r#type(kind)
        .key("End")
        .code("End")
        .windows_virtual_key_code(END_VIRTUAL_KEY_CODE)
        .build()
        .map_err(|error| anyhow!(error))?;

      self.page.execute(event).await?;
    }

    Ok(())
  }

  pub(crate) async fn scroll_by(&self, amount: f64) -> Result {
    self
      .page
      .evaluate(format!("window.scrollBy(0, {amount});"))
      .await?;

    Ok(())
  }

  pub(crate) async fn scroll_height(&self) -> Result<i64> {
    self.evaluate("document.body.scrollHeight").await
  }

  pub(crate) async fn scroll_to_bottom(&self) -> Result {
    self.page.evaluate(SCROLL_TO_BOTTOM_SCRIPT).await?;

    Ok(())
  }

  pub(crate) async fn slow_scroll(&self, pacing: &Pacing) -> Result {
    for _ in 0..3 {
      let amount = rand::rng().random_range(100.0..=120.0);

      self.scroll_by(amount).await?;
      pacing.pause(1).await;
    }

    Ok(())
  }
}
