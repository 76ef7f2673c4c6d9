//! Mock bot control terminal.
//!
//! Start, stop and commands are two-phase: the page calls `begin_*`, waits
//! [`OPERATION_DELAY_MS`], then calls the matching `finish_*`.

use chrono::NaiveTime;
use std::fmt;
use thiserror::Error;

pub const OPERATION_DELAY_MS: u32 = 1000;
pub const ADMIN_USER: &str = "AdminUser";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BotStatus {
    #[default]
    Stopped,
    Starting,
    Running,
    Stopping,
}

impl BotStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Stopped => "Stopped",
            Self::Starting => "Starting",
            Self::Running => "Running",
            Self::Stopping => "Stopping",
        }
    }

    #[must_use]
    pub const fn is_busy(self) -> bool {
        matches!(self, Self::Starting | Self::Stopping)
    }
}

impl fmt::Display for BotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalCommand {
    Ping,
    Status,
    Help,
}

impl TerminalCommand {
    pub const ALL: [Self; 3] = [Self::Ping, Self::Status, Self::Help];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ping => "ping",
            Self::Status => "status",
            Self::Help => "help",
        }
    }

    /// Accepts `ping` or `!ping`.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let name = input.trim().trim_start_matches('!');
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for TerminalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "!{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalEntryKind {
    Command,
    System,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalEntry {
    pub id: u64,
    pub timestamp: String,
    pub kind: TerminalEntryKind,
    pub username: Option<String>,
    pub command: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TerminalError {
    #[error("Bot is already {0}.")]
    InvalidTransition(BotStatus),
    #[error("Bot is not running. Start the bot before sending commands.")]
    NotRunning,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerminalSession {
    status: BotStatus,
    log: Vec<TerminalEntry>,
    next_id: u64,
}

impl TerminalSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn status(&self) -> BotStatus {
        self.status
    }

    #[must_use]
    pub fn log(&self) -> &[TerminalEntry] {
        &self.log
    }

    #[must_use]
    pub fn can_start(&self) -> bool {
        self.status == BotStatus::Stopped
    }

    #[must_use]
    pub fn can_stop(&self) -> bool {
        self.status == BotStatus::Running
    }

    fn push(
        &mut self,
        at: NaiveTime,
        kind: TerminalEntryKind,
        command: Option<TerminalCommand>,
        text: String,
    ) {
        self.next_id += 1;
        self.log.push(TerminalEntry {
            id: self.next_id,
            timestamp: at.format("%H:%M:%S").to_string(),
            kind,
            username: command.map(|_| ADMIN_USER.to_string()),
            command: command.map(|c| c.to_string()),
            text,
        });
    }

    fn system(&mut self, at: NaiveTime, text: &str) {
        self.push(at, TerminalEntryKind::System, None, text.to_string());
    }

    /// # Errors
    ///
    /// Returns [`TerminalError::InvalidTransition`] unless the bot is stopped.
    pub fn begin_start(&mut self, at: NaiveTime) -> Result<(), TerminalError> {
        if !self.can_start() {
            return Err(TerminalError::InvalidTransition(self.status));
        }
        self.status = BotStatus::Starting;
        self.system(at, "Attempting to start bot (mock operation)...");
        Ok(())
    }

    pub fn finish_start(&mut self, at: NaiveTime) {
        if self.status == BotStatus::Starting {
            self.status = BotStatus::Running;
            self.system(at, "Bot started successfully (mock).");
        }
    }

    /// # Errors
    ///
    /// Returns [`TerminalError::InvalidTransition`] unless the bot is running.
    pub fn begin_stop(&mut self, at: NaiveTime) -> Result<(), TerminalError> {
        if !self.can_stop() {
            return Err(TerminalError::InvalidTransition(self.status));
        }
        self.status = BotStatus::Stopping;
        self.system(at, "Attempting to stop bot (mock operation)...");
        Ok(())
    }

    pub fn finish_stop(&mut self, at: NaiveTime) {
        if self.status == BotStatus::Stopping {
            self.status = BotStatus::Stopped;
            self.system(at, "Bot stopped successfully (mock).");
        }
    }

    /// Log a command. Rejected commands leave an error entry.
    ///
    /// # Errors
    ///
    /// Returns [`TerminalError::NotRunning`] unless the bot is running.
    pub fn send(&mut self, command: TerminalCommand, at: NaiveTime) -> Result<(), TerminalError> {
        if self.status != BotStatus::Running {
            let err = TerminalError::NotRunning;
            self.push(at, TerminalEntryKind::Error, Some(command), err.to_string());
            return Err(err);
        }
        let name = command.name();
        self.push(
            at,
            TerminalEntryKind::Command,
            Some(command),
            format!(
                "Simulating execution of {name}... Acknowledged. This is a frontend simulation."
            ),
        );
        Ok(())
    }

    pub fn complete(&mut self, command: TerminalCommand, at: NaiveTime) {
        let name = command.name();
        self.system(at, &format!("{name} simulation complete. Result: Success."));
    }

    pub fn clear(&mut self) {
        self.log.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(9, 30, s).unwrap()
    }

    fn running() -> TerminalSession {
        let mut session = TerminalSession::new();
        session.begin_start(at(0)).unwrap();
        session.finish_start(at(1));
        session
    }

    #[test]
    fn start_and_stop_walk_the_lifecycle() {
        let mut session = TerminalSession::new();
        session.begin_start(at(0)).unwrap();
        assert_eq!(session.status(), BotStatus::Starting);
        assert!(session.status().is_busy());
        session.finish_start(at(1));
        assert_eq!(session.status(), BotStatus::Running);

        session.begin_stop(at(2)).unwrap();
        session.finish_stop(at(3));
        assert_eq!(session.status(), BotStatus::Stopped);

        let texts: Vec<_> = session.log().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Attempting to start bot (mock operation)...",
                "Bot started successfully (mock).",
                "Attempting to stop bot (mock operation)...",
                "Bot stopped successfully (mock).",
            ]
        );
        assert_eq!(session.log()[0].timestamp, "09:30:00");
    }

    #[test]
    fn transitions_out_of_order_are_rejected() {
        let mut session = TerminalSession::new();
        assert_eq!(
            session.begin_stop(at(0)),
            Err(TerminalError::InvalidTransition(BotStatus::Stopped))
        );
        session.begin_start(at(0)).unwrap();
        assert!(session.begin_start(at(0)).is_err());
        session.finish_stop(at(1));
        assert_eq!(session.status(), BotStatus::Starting);
    }

    #[test]
    fn commands_are_rejected_while_stopped() {
        let mut session = TerminalSession::new();
        assert_eq!(
            session.send(TerminalCommand::Ping, at(0)),
            Err(TerminalError::NotRunning)
        );
        let entry = &session.log()[0];
        assert_eq!(entry.kind, TerminalEntryKind::Error);
        assert_eq!(entry.command.as_deref(), Some("!ping"));
    }

    #[test]
    fn commands_log_then_complete() {
        let mut session = running();
        session.send(TerminalCommand::Status, at(2)).unwrap();
        session.complete(TerminalCommand::Status, at(3));
        let log = session.log();
        assert_eq!(log[2].kind, TerminalEntryKind::Command);
        assert_eq!(log[2].username.as_deref(), Some(ADMIN_USER));
        assert_eq!(log[3].text, "status simulation complete. Result: Success.");
    }

    #[test]
    fn commands_parse_with_or_without_bang() {
        assert_eq!(TerminalCommand::parse("!help"), Some(TerminalCommand::Help));
        assert_eq!(TerminalCommand::parse(" ping "), Some(TerminalCommand::Ping));
        assert_eq!(TerminalCommand::parse("!kick"), None);
    }
}
