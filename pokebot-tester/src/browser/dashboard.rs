use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::time::Duration;
use thirtyfour::prelude::*;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Thin page-object over a WebDriver session pointed at the dashboard.
#[derive(Debug, Clone)]
pub struct DashboardDriver<'a> {
    driver: &'a WebDriver,
    base_url: String,
    timeout: Duration,
}

impl<'a> DashboardDriver<'a> {
    pub fn new(driver: &'a WebDriver, base_url: &str) -> Self {
        Self {
            driver,
            base_url: base_url.to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    pub async fn open(&self, path: &str) -> Result<()> {
        let url = self.url_for(path);
        self.driver
            .goto(&url)
            .await
            .with_context(|| format!("navigating to {url}"))?;
        self.wait_for_id("main").await?;
        Ok(())
    }

    /// Poll until an element with `id` is present.
    pub async fn wait_for_id(&self, id: &str) -> Result<WebElement> {
        self.driver
            .query(By::Id(id))
            .wait(self.timeout, POLL_INTERVAL)
            .first()
            .await
            .with_context(|| format!("waiting for #{id}"))
    }

    pub async fn click_id(&self, id: &str) -> Result<()> {
        let element = self.wait_for_id(id).await?;
        element
            .click()
            .await
            .with_context(|| format!("clicking #{id}"))?;
        Ok(())
    }

    pub async fn text_of(&self, id: &str) -> Result<String> {
        let element = self.wait_for_id(id).await?;
        Ok(element.text().await?.trim().to_string())
    }

    /// Poll `#page-title` until it reads `expected`.
    pub async fn expect_title(&self, expected: &str) -> Result<()> {
        let deadline = tokio::time::Instant::now() + self.timeout;
        loop {
            let title = self.text_of("page-title").await?;
            if title == expected {
                return Ok(());
            }
            if tokio::time::Instant::now() >= deadline {
                bail!("expected page title {expected:?}, found {title:?}");
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    pub async fn is_dark(&self) -> Result<bool> {
        let ret = self
            .driver
            .execute(
                "return document.documentElement.classList.contains('dark')",
                vec![],
            )
            .await?;
        ret.json()
            .as_bool()
            .context("theme probe did not return a boolean")
    }

    /// Every `localStorage` entry, for failure artifacts.
    pub async fn storage_snapshot(&self) -> Result<Value> {
        let ret = self
            .driver
            .execute(
                "const out = {}; for (let i = 0; i < localStorage.length; i++) { const k = localStorage.key(i); out[k] = localStorage.getItem(k); } return out;",
                vec![],
            )
            .await?;
        Ok(ret.json().clone())
    }
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_normalizes_slashes() {
        assert_eq!(
            join_url("http://localhost:8080/", "/pokemon/pokedex"),
            "http://localhost:8080/pokemon/pokedex"
        );
        assert_eq!(
            join_url("http://localhost:8080", "dashboard"),
            "http://localhost:8080/dashboard"
        );
    }
}
