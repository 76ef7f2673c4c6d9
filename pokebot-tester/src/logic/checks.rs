//! Seeded checks that drive `pokebot-core` the way the dashboard pages do,
//! against the in-memory mock backend.

use anyhow::{Context, Result, anyhow, bail, ensure};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use futures::executor::block_on;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use pokebot_core::catalog::{POKEMON_NAMES, Rarity, mock_channels};
use pokebot_core::events::{EventBoard, EventType, format_datetime_input};
use pokebot_core::feed::ALL_CHANNELS;
use pokebot_core::items::{ItemIssue, QuantityBound};
use pokebot_core::nav::{self, FALLBACK_TITLE, HOME_PATH};
use pokebot_core::pokedex::batch::{BatchPlan, CancelToken, load_in_batches};
use pokebot_core::spawn::SpawnIssue;
use pokebot_core::steps::WizardStep;
use pokebot_core::terminal::{TerminalCommand, TerminalError};
use pokebot_core::theme::{SHADE_COUNT, generate_shades, parse_hex, to_hex};
use pokebot_core::uploads::format_file_size;
use pokebot_core::wizard::{self, SaveStatus};
use pokebot_core::{
    BotStatus, ConfigPort, DashboardSettings, EventDraft, EventFieldError, FeedGenerator, FeedLog,
    ItemConfig, ItemStep, MemoryStore, MockBackend, NoDelay, ShopCatalog, ShopItem,
    ShopItemDraft, ShopItemError, SpawnConfig, SpawnStep, StepNavigator, StepState,
    TerminalEntryKind, TerminalSession,
};

type Backend = MockBackend<MemoryStore, NoDelay>;

fn backend() -> Backend {
    MockBackend::new(MemoryStore::default(), NoDelay)
}

fn noon() -> Result<NaiveDateTime> {
    NaiveDate::from_ymd_opt(2024, 8, 1)
        .and_then(|day| day.and_hms_opt(12, 0, 0))
        .context("fixed clock")
}

fn pick<'a>(rng: &mut ChaCha8Rng, options: &[&'a str]) -> &'a str {
    options[rng.gen_range(0..options.len())]
}

/// Walk the spawn wizard end to end and read the saved draft back.
pub fn spawn_round_trip(rng: &mut ChaCha8Rng) -> Result<()> {
    let general = mock_channels()
        .into_iter()
        .find(|channel| channel.name == "general")
        .context("mock channels should include #general")?;

    let mut draft = SpawnConfig::new_draft();
    ensure!(
        draft.validate_step(SpawnStep::Channels, false) == Err(SpawnIssue::ChannelsNotLoaded),
        "channel step must wait for the channel list"
    );
    draft.toggle_channel(&general.id);
    draft.add_to_roster(Rarity::Common, pick(rng, &POKEMON_NAMES));
    draft.set_percentage(Rarity::Common, "100");
    draft.name = format!("Test {}", rng.gen_range(1..=999));

    for step in SpawnStep::ALL {
        draft
            .validate_step(*step, true)
            .map_err(|issue| anyhow!("{} blocked: {issue}", step.label()))?;
    }

    let backend = backend();
    let (status, result) = block_on(wizard::submit(
        &backend,
        draft.clone(),
        SpawnConfig::success_message,
    ));
    let saved = result.context("saving spawn configuration")?;
    ensure!(
        status == SaveStatus::Saved(saved.success_message()),
        "unexpected banner {status:?}"
    );
    let id = saved.id.clone().context("backend should assign an id")?;
    let loaded: Option<SpawnConfig> = block_on(backend.load(&id))?;
    ensure!(loaded.as_ref() == Some(&saved), "stored config differs from saved one");
    ensure!(
        saved.time_between_spawns == 30 && saved.time_to_flee == 15,
        "default timing changed to {}/{}",
        saved.time_between_spawns,
        saved.time_to_flee
    );
    ensure!(saved.shiny_chance == "1/4096", "default shiny odds changed");
    ensure!(
        saved.selected_channel_ids == vec![general.id],
        "channel selection lost"
    );
    Ok(())
}

/// Random splits of 100% pass; one point either way blocks the step.
pub fn spawn_percentages(rng: &mut ChaCha8Rng) -> Result<()> {
    let mut draft = SpawnConfig::new_draft();
    let mut remaining = 100u32;
    for (index, rarity) in Rarity::ALL.iter().enumerate() {
        let share = if index + 1 == Rarity::ALL.len() {
            remaining
        } else {
            rng.gen_range(0..=remaining)
        };
        remaining -= share;
        draft.set_percentage(*rarity, &share.to_string());
    }
    ensure!(
        draft.percentage_total() == 100,
        "split should total 100, got {}",
        draft.percentage_total()
    );
    ensure!(draft.is_step_valid(SpawnStep::RarityPercentages, true));

    let common = draft
        .rarity_percentages
        .get(&Rarity::Common)
        .copied()
        .unwrap_or_default();
    let nudged = if common < 100 { common + 1 } else { common - 1 };
    draft.set_percentage(Rarity::Common, &nudged.to_string());
    let total = draft.percentage_total();
    ensure!(total == 99 || total == 101, "nudge produced {total}");
    ensure!(
        draft.validate_step(SpawnStep::RarityPercentages, true)
            == Err(SpawnIssue::PercentageTotal(total)),
        "a {total}% split must block the step"
    );
    ensure!(!draft.is_complete(true));
    Ok(())
}

/// Min above max blocks the quantities step; cooldown must be positive.
pub fn item_quantities(rng: &mut ChaCha8Rng) -> Result<()> {
    let mut config = ItemConfig::new_draft();
    config.toggle_channel("channel-1");
    config.name = "Weekend Drops".to_string();
    let item = config
        .item_drop_rates
        .keys()
        .next()
        .cloned()
        .context("draft should seed items")?;

    let max = rng.gen_range(1..=10u32);
    config.set_quantity(&item, QuantityBound::Max, &max.to_string());
    config.set_quantity(&item, QuantityBound::Min, &(max + 1).to_string());
    ensure!(
        config.validate_step(ItemStep::Quantities) == Err(ItemIssue::InvalidQuantity(item.clone())),
        "min above max must block {item}"
    );
    config.set_quantity(&item, QuantityBound::Min, &max.to_string());
    ensure!(config.is_step_valid(ItemStep::Quantities));

    config.set_cooldown("0");
    ensure!(config.validate_step(ItemStep::Cooldown) == Err(ItemIssue::InvalidCooldown));
    config.set_cooldown(&rng.gen_range(1..=240u32).to_string());
    ensure!(config.is_complete(), "config should be saveable");

    let saved = block_on(backend().save(config))?;
    ensure!(saved.id.is_some(), "backend should assign an id");
    Ok(())
}

/// Local adds and removes, then one save-all that assigns ids.
pub fn shop_catalog(rng: &mut ChaCha8Rng) -> Result<()> {
    let backend = backend();
    let mut catalog = ShopCatalog::default();
    let mut draft = ShopItemDraft::default();

    draft.set_price("0");
    ensure!(catalog.add(&draft, 1) == Err(ShopItemError::InvalidPrice));
    draft.set_price(&rng.gen_range(1..=5000u32).to_string());
    draft.set_stock("0");
    ensure!(catalog.add(&draft, 2) == Err(ShopItemError::InvalidStock));
    ensure!(catalog.is_empty(), "rejected drafts must not be added");

    draft.set_unlimited(true);
    catalog.add(&draft, 3)?;
    draft.set_unlimited(false);
    catalog.add(&draft, 4)?;
    ensure!(catalog.len() == 2);
    ensure!(catalog.remove("temp-4"), "temp key should remove the item");

    let saved = block_on(backend.save_all(catalog.to_vec()))?;
    ensure!(saved.len() == 1 && saved.iter().all(|item| item.id.is_some()));
    catalog.replace(saved);
    let listed: Vec<ShopItem> = block_on(backend.list())?;
    ensure!(listed == catalog.to_vec(), "listed items differ from saved ones");
    Ok(())
}

/// Blank drafts collect every error; disabled events land in the past section.
pub fn event_validation(rng: &mut ChaCha8Rng) -> Result<()> {
    let now = noon()?;
    let mut draft = EventDraft::new_at(now);
    let Err(errors) = draft.validate() else {
        bail!("blank draft should not validate");
    };
    for expected in [
        EventFieldError::NameRequired,
        EventFieldError::EndNotAfterStart,
        EventFieldError::NoTargetChannels,
    ] {
        ensure!(errors.contains(&expected), "missing {expected:?} in {errors:?}");
    }

    draft.name = "Night Shift".to_string();
    draft.toggle_channel("channel-2");
    draft.end = format_datetime_input(now + TimeDelta::hours(rng.gen_range(1..=72)));
    draft.set_event_type(EventType::ShinyBoost);
    draft.set_boost("0");
    ensure!(
        draft.validate() == Err(vec![EventFieldError::BoostNotPositive]),
        "zero boost must be rejected"
    );
    draft.set_boost(&rng.gen_range(1..=200u32).to_string());
    draft.is_enabled = false;

    let mut board = EventBoard::mock();
    let before = board.events().len();
    board
        .save(&draft, 1_000)
        .map_err(|errors| anyhow!("valid draft rejected: {errors:?}"))?;
    ensure!(board.events().len() == before + 1);
    let sections = board.sections(now);
    let saved = sections
        .past_disabled
        .iter()
        .find(|event| event.name == "Night Shift")
        .context("disabled event should be listed as past/disabled")?;
    let id = saved.id.clone().context("board should assign an id")?;
    ensure!(board.delete(&id));
    ensure!(board.events().len() == before);
    Ok(())
}

/// A rejected save surfaces once as a failure banner and stores nothing.
pub fn save_failure(_rng: &mut ChaCha8Rng) -> Result<()> {
    let backend = backend();
    backend.fail_next_with("simulated outage");
    let (status, result) = block_on(wizard::submit(
        &backend,
        ItemConfig::new_draft(),
        ItemConfig::success_message,
    ));
    ensure!(result.is_err(), "injected failure should surface");
    match status {
        SaveStatus::Failed(message) => ensure!(
            message.contains("simulated outage"),
            "failure banner lost the reason: {message}"
        ),
        other => bail!("expected a failure banner, got {other:?}"),
    }
    ensure!(backend.store().is_empty(), "failed save must not persist");

    let (status, _) = block_on(wizard::submit(
        &backend,
        ItemConfig::new_draft(),
        ItemConfig::success_message,
    ));
    ensure!(matches!(status, SaveStatus::Saved(_)), "next save should succeed");
    Ok(())
}

/// ceil(N/B) batches, failures skipped, progress after every batch.
pub fn pokedex_batches(rng: &mut ChaCha8Rng) -> Result<()> {
    let total = rng.gen_range(1..=240usize);
    let batch_size = rng.gen_range(1..=60usize);
    let fail_every = rng.gen_range(2..=9usize);
    let inputs: Vec<usize> = (0..total).collect();
    let plan = BatchPlan::new(total, batch_size);
    ensure!(plan.batch_count() == total.div_ceil(batch_size));

    let mut progress = Vec::new();
    let outcome = block_on(load_in_batches(
        &inputs,
        batch_size,
        |n: &usize| {
            let n = *n;
            async move {
                if n % fail_every == 0 {
                    Err(format!("#{n} unavailable"))
                } else {
                    Ok(n)
                }
            }
        },
        &NoDelay,
        &CancelToken::new(),
        |done, of| progress.push((done, of)),
    ));

    let expected_failures = inputs.iter().filter(|n| **n % fail_every == 0).count();
    ensure!(!outcome.cancelled);
    ensure!(outcome.failed == expected_failures);
    ensure!(outcome.loaded.len() == total - expected_failures);
    ensure!(
        outcome.loaded.windows(2).all(|pair| pair[0] < pair[1]),
        "results must keep input order"
    );
    ensure!(progress.len() == plan.batch_count());
    ensure!(progress.last() == Some(&(total, total)));

    let cancel = CancelToken::new();
    cancel.cancel();
    let cancelled = block_on(load_in_batches(
        &inputs,
        batch_size,
        |n: &usize| {
            let n = *n;
            async move { Ok::<usize, String>(n) }
        },
        &NoDelay,
        &cancel,
        |_, _| {},
    ));
    ensure!(cancelled.cancelled && cancelled.loaded.is_empty());
    Ok(())
}

/// Random next/back/jump sequences never leave the step range.
pub fn step_navigation(rng: &mut ChaCha8Rng) -> Result<()> {
    let total = rng.gen_range(1..=8usize);
    let mut navigator = StepNavigator::new(total);
    for _ in 0..64 {
        match rng.gen_range(0..3) {
            0 => navigator.next(),
            1 => navigator.previous(),
            _ => navigator.go_to(rng.gen_range(0..total + 2)),
        }
        let current = navigator.current();
        ensure!(current < total, "cursor {current} escaped {total} steps");
        ensure!(navigator.step_state(current) == StepState::Current);
        ensure!((0..current).all(|i| navigator.step_state(i) == StepState::Completed));
        ensure!((current + 1..total).all(|i| navigator.step_state(i) == StepState::Upcoming));
        ensure!(navigator.is_first() == (current == 0));
        ensure!(navigator.is_last() == (current + 1 == total));
    }
    Ok(())
}

/// The feed keeps only the newest entries and honours the channel filter.
pub fn live_feed(rng: &mut ChaCha8Rng) -> Result<()> {
    let mut generator = FeedGenerator::new(rng.r#gen());
    let capacity = rng.gen_range(5..=40usize);
    let mut log = FeedLog::with_capacity(capacity);
    let at = NaiveTime::from_hms_opt(12, 0, 0).context("fixed clock")?;

    let ticks = capacity * 4;
    for _ in 0..ticks {
        let entry = generator
            .tick(ALL_CHANNELS, at)
            .context("unfiltered ticks always produce an entry")?;
        log.push(entry);
    }
    ensure!(log.len() == capacity, "log grew to {}", log.len());
    let newest = log.entries().last().map(|entry| entry.id);
    ensure!(newest == Some(u64::try_from(ticks)?), "newest entry was dropped");

    let general = mock_channels()
        .into_iter()
        .find(|channel| channel.name == "general")
        .context("mock channels should include #general")?;
    for _ in 0..50 {
        if let Some(entry) = generator.tick(&general.id, at) {
            ensure!(entry.channel_name == "#general", "filter leaked {}", entry.channel_name);
        }
    }
    Ok(())
}

/// Commands are refused while stopped and acknowledged once running.
pub fn control_terminal(rng: &mut ChaCha8Rng) -> Result<()> {
    let at = NaiveTime::from_hms_opt(9, 30, 0).context("fixed clock")?;
    let mut session = TerminalSession::new();
    let command = TerminalCommand::ALL[rng.gen_range(0..TerminalCommand::ALL.len())];

    ensure!(session.send(command, at) == Err(TerminalError::NotRunning));
    ensure!(
        session
            .log()
            .last()
            .is_some_and(|entry| entry.kind == TerminalEntryKind::Error),
        "refused command should leave an error entry"
    );

    session.begin_start(at)?;
    ensure!(session.status() == BotStatus::Starting);
    ensure!(session.begin_start(at).is_err(), "double start must be refused");
    session.finish_start(at);
    ensure!(session.status() == BotStatus::Running);

    session.send(command, at)?;
    session.complete(command, at);
    ensure!(TerminalCommand::parse(&format!("  !{}  ", command.name())) == Some(command));

    session.begin_stop(at)?;
    session.finish_stop(at);
    ensure!(session.status() == BotStatus::Stopped);
    Ok(())
}

/// Shade ramps pivot on the input colour; sizes format in base 1024.
pub fn appearance(rng: &mut ChaCha8Rng) -> Result<()> {
    let rgb: (u8, u8, u8) = (rng.r#gen(), rng.r#gen(), rng.r#gen());
    let hex = to_hex(rgb);
    ensure!(parse_hex(&hex) == Some(rgb), "{hex} did not parse back");

    let shades = generate_shades(&hex, SHADE_COUNT);
    ensure!(shades.len() == SHADE_COUNT);
    ensure!(
        shades[SHADE_COUNT / 2].1.eq_ignore_ascii_case(&hex),
        "middle shade should be {hex}"
    );
    ensure!(
        shades
            .iter()
            .enumerate()
            .all(|(i, (key, _))| usize::from(*key) == (i + 1) * 100),
        "shade keys should run 100, 200, ..."
    );
    ensure!(
        generate_shades("not-a-colour", 3)
            .iter()
            .all(|(_, value)| value == "#808080"),
        "invalid input falls back to grey"
    );

    for (bytes, expected) in [
        (0, "0 Bytes"),
        (1536, "1.5 KB"),
        (1_048_576, "1 MB"),
    ] {
        let formatted = format_file_size(bytes);
        ensure!(formatted == expected, "{bytes} bytes formatted as {formatted}");
    }
    Ok(())
}

/// Every link titles its own page; nested paths inherit; unknown paths fall back.
pub fn navigation_titles(_rng: &mut ChaCha8Rng) -> Result<()> {
    for link in nav::all_links() {
        let title = nav::page_title(link.path);
        ensure!(title == link.label, "{} titled {title}", link.path);
        let nested = format!("{}/some-child", link.path);
        ensure!(
            nav::page_title(&nested) != FALLBACK_TITLE,
            "{nested} lost its title"
        );
    }
    ensure!(nav::page_title("/pokemon/pokedex/pikachu") == "Pokedex");
    ensure!(nav::page_title("/") == nav::page_title(HOME_PATH));
    ensure!(nav::page_title("/nowhere") == FALLBACK_TITLE);
    Ok(())
}

/// Stored settings merge over defaults; garbage yields the defaults.
pub fn settings_merge(_rng: &mut ChaCha8Rng) -> Result<()> {
    let defaults = DashboardSettings::default();
    let merged =
        DashboardSettings::from_stored(r#"{"developmentModeEnabled":false,"serverId":"42"}"#);
    ensure!(!merged.development_mode_enabled);
    ensure!(merged.server_id == "42");
    ensure!(merged.welcome_message == defaults.welcome_message);
    ensure!(DashboardSettings::from_stored("not json") == defaults);
    ensure!(
        merged.render_welcome("Ash", "Kanto").contains("Ash"),
        "welcome placeholders not filled"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn run_seeds(check: fn(&mut ChaCha8Rng) -> Result<()>) {
        for seed in [1, 42, 1337, 9001] {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            check(&mut rng).unwrap_or_else(|err| panic!("seed {seed}: {err:#}"));
        }
    }

    #[test]
    fn randomized_checks_hold_across_seeds() {
        run_seeds(spawn_percentages);
        run_seeds(item_quantities);
        run_seeds(pokedex_batches);
        run_seeds(step_navigation);
        run_seeds(live_feed);
        run_seeds(appearance);
    }

    #[test]
    fn deterministic_checks_pass() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        save_failure(&mut rng).unwrap();
        navigation_titles(&mut rng).unwrap();
        settings_merge(&mut rng).unwrap();
    }
}
