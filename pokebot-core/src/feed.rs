//! Simulated Discord channel activity for the listener page.

use crate::catalog::{Channel, mock_channels};
use chrono::NaiveTime;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

pub const FEED_INTERVAL_MS: u32 = 3000;
/// Oldest entries are dropped past this many.
pub const FEED_CAPACITY: usize = 200;
/// Filter value meaning every channel.
pub const ALL_CHANNELS: &str = "all";
pub const ALL_CHANNELS_LABEL: &str = "All Active Channels";

pub const BOT_NAME: &str = "PokéBot";
pub const BOT_AVATAR_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/132.png";
pub const SYSTEM_NOTICE: &str = "System maintenance starting in 5 minutes.";

const USER_MESSAGE_CUTOFF: f64 = 0.70;
const BOT_ACTION_CUTOFF: f64 = 0.95;

const AVATAR_COLORS: [&str; 6] = ["FFC107", "4CAF50", "2196F3", "E91E63", "9C27B0", "00BCD4"];

const USERNAMES: [&str; 6] = [
    "TrainerRed",
    "GymLeaderMisty",
    "EliteFourLance",
    "ProfOak",
    "RivalBlue",
    "PokeFanJessie",
];

const MESSAGES: [&str; 10] = [
    "Has anyone seen a Pikachu around here?",
    "Just caught a shiny Magikarp! So excited!",
    "What's the best team for the Elite Four?",
    "Trading a Charizard, looking for Blastoise.",
    "!pokedex Snorlax",
    "I love this bot!",
    "Where do Dragon types spawn most often?",
    "!help",
    "The spawn rates seem fair.",
    "Can someone help me with a trade evolution?",
];

const BOT_ACTIONS: [&str; 7] = [
    "Responded to !pokedex command.",
    "Spawned a wild Bulbasaur in #pokemon-spawns.",
    "User TrainerRed caught Bulbasaur!",
    "Sent help information via DM.",
    "Updated shop inventory.",
    "Distributed daily login bonus.",
    "Processed a trade between UserA and UserB.",
];

/// Background colour (no `#`) picked from a character-sum hash.
#[must_use]
pub fn avatar_color(seed: &str) -> &'static str {
    let sum: u32 = seed.chars().map(u32::from).sum();
    AVATAR_COLORS[sum as usize % AVATAR_COLORS.len()]
}

#[must_use]
pub fn avatar_url(seed: &str) -> String {
    let initials: String = seed.chars().take(2).collect();
    format!(
        "https://ui-avatars.com/api/?name={initials}&background={}&color=fff&size=32&bold=true&rounded=true",
        avatar_color(seed)
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedKind {
    UserMessage {
        user_name: String,
        avatar_url: String,
        content: String,
    },
    BotAction {
        description: String,
    },
    SystemNotification {
        description: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub id: u64,
    /// `#`-prefixed.
    pub channel_name: String,
    pub timestamp: String,
    pub kind: FeedKind,
}

impl FeedEntry {
    #[must_use]
    pub fn author(&self) -> &str {
        match &self.kind {
            FeedKind::UserMessage { user_name, .. } => user_name,
            FeedKind::BotAction { .. } => BOT_NAME,
            FeedKind::SystemNotification { .. } => "System",
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        match &self.kind {
            FeedKind::UserMessage { content, .. } => content,
            FeedKind::BotAction { description } | FeedKind::SystemNotification { description } => {
                description
            }
        }
    }

    #[must_use]
    pub fn avatar(&self) -> Option<&str> {
        match &self.kind {
            FeedKind::UserMessage { avatar_url, .. } => Some(avatar_url),
            FeedKind::BotAction { .. } => Some(BOT_AVATAR_URL),
            FeedKind::SystemNotification { .. } => None,
        }
    }
}

/// Seeded source of mock feed entries.
#[derive(Debug, Clone)]
pub struct FeedGenerator {
    rng: ChaCha8Rng,
    channels: Vec<Channel>,
    next_id: u64,
}

impl FeedGenerator {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            channels: mock_channels(),
            next_id: 1,
        }
    }

    fn pick<'a>(&mut self, options: &[&'a str]) -> &'a str {
        options[self.rng.gen_range(0..options.len())]
    }

    /// One timer tick. Picks a random channel and returns `None` when it is
    /// filtered out by `channel_filter` (a channel id, or [`ALL_CHANNELS`]).
    pub fn tick(&mut self, channel_filter: &str, at: NaiveTime) -> Option<FeedEntry> {
        if self.channels.is_empty() {
            return None;
        }
        let channel = self.channels[self.rng.gen_range(0..self.channels.len())].clone();
        if channel_filter != ALL_CHANNELS && channel.id != channel_filter {
            return None;
        }

        let roll: f64 = self.rng.r#gen();
        let kind = if roll < USER_MESSAGE_CUTOFF {
            let user_name = self.pick(&USERNAMES).to_string();
            FeedKind::UserMessage {
                avatar_url: avatar_url(&user_name),
                content: self.pick(&MESSAGES).to_string(),
                user_name,
            }
        } else if roll < BOT_ACTION_CUTOFF {
            FeedKind::BotAction {
                description: self.pick(&BOT_ACTIONS).to_string(),
            }
        } else {
            FeedKind::SystemNotification {
                description: SYSTEM_NOTICE.to_string(),
            }
        };

        let id = self.next_id;
        self.next_id += 1;
        Some(FeedEntry {
            id,
            channel_name: format!("#{}", channel.name),
            timestamp: at.format("%H:%M:%S").to_string(),
            kind,
        })
    }
}

/// Append-only log that keeps the newest [`FEED_CAPACITY`] entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedLog {
    entries: VecDeque<FeedEntry>,
    capacity: usize,
}

impl Default for FeedLog {
    fn default() -> Self {
        Self::with_capacity(FEED_CAPACITY)
    }
}

impl FeedLog {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(FEED_CAPACITY)),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, entry: FeedEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn entries(&self) -> impl Iterator<Item = &FeedEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noon() -> NaiveTime {
        NaiveTime::from_hms_opt(12, 0, 5).unwrap()
    }

    #[test]
    fn same_seed_same_feed() {
        let mut a = FeedGenerator::new(7);
        let mut b = FeedGenerator::new(7);
        for _ in 0..20 {
            assert_eq!(a.tick(ALL_CHANNELS, noon()), b.tick(ALL_CHANNELS, noon()));
        }
    }

    #[test]
    fn unfiltered_ticks_always_produce() {
        let mut feed = FeedGenerator::new(1);
        let entries: Vec<_> = (0..50).filter_map(|_| feed.tick(ALL_CHANNELS, noon())).collect();
        assert_eq!(entries.len(), 50);
        assert_eq!(entries[0].timestamp, "12:00:05");
        assert!(entries.iter().all(|e| e.channel_name.starts_with('#')));
        assert!(entries.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn channel_filter_suppresses_other_channels() {
        let mut feed = FeedGenerator::new(3);
        let kept: Vec<_> = (0..200).filter_map(|_| feed.tick("channel-1", noon())).collect();
        assert!(!kept.is_empty());
        assert!(kept.len() < 200);
        assert!(kept.iter().all(|e| e.channel_name == "#general"));
    }

    #[test]
    fn all_categories_appear_over_time() {
        let mut feed = FeedGenerator::new(11);
        let entries: Vec<_> = (0..500).filter_map(|_| feed.tick(ALL_CHANNELS, noon())).collect();
        let users = entries
            .iter()
            .filter(|e| matches!(e.kind, FeedKind::UserMessage { .. }))
            .count();
        let systems = entries
            .iter()
            .filter(|e| e.author() == "System")
            .count();
        assert!(users > 250);
        assert!(systems > 0);
        assert!(entries.iter().any(|e| e.author() == BOT_NAME));
    }

    #[test]
    fn log_is_bounded() {
        let mut feed = FeedGenerator::new(5);
        let mut log = FeedLog::default();
        for _ in 0..(FEED_CAPACITY + 25) {
            if let Some(entry) = feed.tick(ALL_CHANNELS, noon()) {
                log.push(entry);
            }
        }
        assert_eq!(log.len(), FEED_CAPACITY);
        assert_eq!(log.entries().next().map(|e| e.id), Some(26));
    }

    #[test]
    fn avatar_colour_is_stable() {
        assert_eq!(avatar_color("ProfOak"), avatar_color("ProfOak"));
        assert!(avatar_url("ProfOak").contains("name=Pr&"));
    }
}
