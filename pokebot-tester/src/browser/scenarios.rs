use anyhow::{Result, ensure};
use pokebot_core::nav::{self, HOME_PATH};

use crate::common::scenario::ScenarioCtx;

/// The shell boots and lands on the overview.
pub async fn smoke(ctx: &ScenarioCtx<'_>) -> Result<()> {
    ctx.dashboard.open(HOME_PATH).await?;
    ctx.dashboard.wait_for_id("overview").await?;
    ctx.dashboard.expect_title(nav::page_title(HOME_PATH)).await?;
    if ctx.verbose {
        println!(
            "  🌐 Dashboard shell loaded from {} (seed {})",
            ctx.base_url, ctx.seed
        );
    }
    Ok(())
}

/// Every sidebar link resolves to a page whose header matches the link.
pub async fn navigation(ctx: &ScenarioCtx<'_>) -> Result<()> {
    for link in nav::all_links() {
        ctx.dashboard.open(link.path).await?;
        ctx.dashboard.expect_title(link.label).await?;
        if ctx.verbose {
            println!("  🧭 {} -> {}", link.path, link.label);
        }
    }

    for redirecting in ["/", "/dashboard/overview", "/no/such/page"] {
        ctx.dashboard.open(redirecting).await?;
        ctx.dashboard.wait_for_id("overview").await?;
        if ctx.verbose {
            println!("  ↪️  {redirecting} redirected home");
        }
    }
    Ok(())
}

/// The header toggle flips the root `dark` class and survives a reload.
pub async fn theme_toggle(ctx: &ScenarioCtx<'_>) -> Result<()> {
    ctx.dashboard.open(HOME_PATH).await?;
    let before = ctx.dashboard.is_dark().await?;
    ctx.dashboard.click_id("theme-toggle").await?;
    let after = ctx.dashboard.is_dark().await?;
    ensure!(after != before, "theme toggle left dark={before}");

    ctx.dashboard.open(HOME_PATH).await?;
    let reloaded = ctx.dashboard.is_dark().await?;
    ensure!(
        reloaded == after,
        "theme did not persist across reload (expected dark={after})"
    );

    // Leave the browser profile the way we found it.
    ctx.dashboard.click_id("theme-toggle").await?;
    Ok(())
}
