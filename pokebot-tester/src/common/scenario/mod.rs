use anyhow::Result;
use rand_chacha::ChaCha8Rng;
use thirtyfour::prelude::*;

use crate::browser::{DashboardDriver, scenarios as flows};
use crate::logic::checks;

/// A seeded logic check. Each iteration gets a fresh generator.
pub type LogicCheck = fn(&mut ChaCha8Rng) -> Result<()>;

#[derive(Debug, Clone)]
pub struct ScenarioCtx<'a> {
    pub base_url: String,
    pub seed: u64,
    pub dashboard: DashboardDriver<'a>,
    pub verbose: bool,
}

// Logic test scenario
#[derive(Debug, Clone)]
pub struct TestScenario {
    pub name: String,
    pub check: LogicCheck,
}

// Browser test scenario
#[async_trait::async_trait]
pub trait BrowserScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()>;
}

// Combined scenario that can run both logic and browser tests
pub trait CombinedScenario: BrowserScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario>;

    fn has_browser_flow(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserFlow {
    Smoke,
    Navigation,
    ThemeToggle,
}

/// One registry entry: a logic check, a browser flow, or both.
#[derive(Debug, Clone, Copy)]
pub struct DashboardScenario {
    pub key: &'static str,
    pub name: &'static str,
    check: Option<LogicCheck>,
    flow: Option<BrowserFlow>,
}

impl DashboardScenario {
    const fn logic(key: &'static str, name: &'static str, check: LogicCheck) -> Self {
        Self {
            key,
            name,
            check: Some(check),
            flow: None,
        }
    }

    const fn with_flow(mut self, flow: BrowserFlow) -> Self {
        self.flow = Some(flow);
        self
    }

    const fn browser(key: &'static str, name: &'static str, flow: BrowserFlow) -> Self {
        Self {
            key,
            name,
            check: None,
            flow: Some(flow),
        }
    }
}

#[async_trait::async_trait]
impl BrowserScenario for DashboardScenario {
    async fn run_browser(&self, _driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        match self.flow {
            Some(BrowserFlow::Smoke) => flows::smoke(ctx).await,
            Some(BrowserFlow::Navigation) => flows::navigation(ctx).await,
            Some(BrowserFlow::ThemeToggle) => flows::theme_toggle(ctx).await,
            None => anyhow::bail!("{} has no browser flow", self.name),
        }
    }
}

impl CombinedScenario for DashboardScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        self.check.map(|check| TestScenario {
            name: self.name.to_string(),
            check,
        })
    }

    fn has_browser_flow(&self) -> bool {
        self.flow.is_some()
    }
}

const SCENARIOS: [DashboardScenario; 15] = [
    DashboardScenario::logic("smoke", "Smoke Test", checks::spawn_round_trip)
        .with_flow(BrowserFlow::Smoke),
    DashboardScenario::logic(
        "spawn-wizard",
        "Spawn Wizard Round Trip",
        checks::spawn_round_trip,
    ),
    DashboardScenario::logic(
        "spawn-percentages",
        "Spawn Rarity Percentage Gate",
        checks::spawn_percentages,
    ),
    DashboardScenario::logic(
        "items-wizard",
        "Item Drop Quantities and Cooldown",
        checks::item_quantities,
    ),
    DashboardScenario::logic("shop-catalog", "Shop Catalog Save All", checks::shop_catalog),
    DashboardScenario::logic(
        "event-validation",
        "Event Form Validation",
        checks::event_validation,
    ),
    DashboardScenario::logic("save-failure", "Save Failure Banner", checks::save_failure),
    DashboardScenario::logic(
        "pokedex-batches",
        "Pokédex Batch Loading",
        checks::pokedex_batches,
    ),
    DashboardScenario::logic(
        "step-navigation",
        "Wizard Step Navigation",
        checks::step_navigation,
    ),
    DashboardScenario::logic("live-feed", "Discord Live Feed", checks::live_feed),
    DashboardScenario::logic(
        "control-terminal",
        "Control Terminal Lifecycle",
        checks::control_terminal,
    ),
    DashboardScenario::logic(
        "appearance",
        "Palette Shades and File Sizes",
        checks::appearance,
    ),
    DashboardScenario::logic("navigation", "Navigation Titles", checks::navigation_titles)
        .with_flow(BrowserFlow::Navigation),
    DashboardScenario::logic("settings-merge", "Stored Settings Merge", checks::settings_merge),
    DashboardScenario::browser("theme-toggle", "Theme Toggle", BrowserFlow::ThemeToggle),
];

pub fn get_scenario(name: &str) -> Option<Box<dyn CombinedScenario + Send + Sync>> {
    let key = name.trim().to_lowercase();
    SCENARIOS
        .iter()
        .find(|scenario| scenario.key == key)
        .map(|scenario| Box::new(*scenario) as Box<dyn CombinedScenario + Send + Sync>)
}

/// Keys that `all` expands to, in registry order.
pub fn all_scenario_keys() -> Vec<String> {
    SCENARIOS.iter().map(|s| s.key.to_string()).collect()
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    SCENARIOS.iter().map(|s| (s.key, s.name)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn registry_keys_are_unique() {
        let mut keys = all_scenario_keys();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), SCENARIOS.len());
    }

    #[test]
    fn lookup_ignores_case_and_whitespace() {
        assert!(get_scenario(" Smoke ").is_some());
        assert!(get_scenario("unknown").is_none());
    }

    #[test]
    fn browser_only_scenarios_have_no_logic_check() {
        let theme = get_scenario("theme-toggle").expect("registered");
        assert!(theme.as_logic_scenario().is_none());
        assert!(theme.has_browser_flow());
        let smoke = get_scenario("smoke").expect("registered");
        assert!(smoke.has_browser_flow());
        assert!(!get_scenario("shop-catalog").expect("registered").has_browser_flow());
        assert_eq!(smoke.as_logic_scenario().expect("logic").name, "Smoke Test");
    }

    #[test]
    fn every_logic_check_passes_on_a_fixed_seed() {
        for scenario in SCENARIOS {
            if let Some(logic) = scenario.as_logic_scenario() {
                let mut rng = ChaCha8Rng::seed_from_u64(1337);
                (logic.check)(&mut rng)
                    .unwrap_or_else(|err| panic!("{} failed: {err:#}", logic.name));
            }
        }
    }
}
