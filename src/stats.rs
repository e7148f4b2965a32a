//! Lifetime statistics and their persisted ledger.
//!
//! A ledger is stored as text, one participant per line:
//!
//! ```text
//! name:played:won:lost:pushed:max_score
//! ```
//!
//! The five counters are taken from the end of the line, so a name may itself
//! contain `:`.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::error::RecordError;
use crate::participant::Participant;

/// Per-participant counters accumulated across rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Statistics {
    /// Rounds resolved.
    pub games_played: u32,
    /// Rounds won.
    pub games_won: u32,
    /// Rounds lost.
    pub games_lost: u32,
    /// Rounds pushed.
    pub games_pushed: u32,
    /// Best non-bust score reached.
    pub max_score: u8,
}

impl Statistics {
    /// Records a win.
    pub const fn record_win(&mut self) {
        self.games_played = self.games_played.saturating_add(1);
        self.games_won = self.games_won.saturating_add(1);
    }

    /// Records a loss.
    pub const fn record_loss(&mut self) {
        self.games_played = self.games_played.saturating_add(1);
        self.games_lost = self.games_lost.saturating_add(1);
    }

    /// Records a push.
    pub const fn record_push(&mut self) {
        self.games_played = self.games_played.saturating_add(1);
        self.games_pushed = self.games_pushed.saturating_add(1);
    }

    /// Raises the best score if `score` beats it.
    pub fn update_max_score(&mut self, score: u8) {
        self.max_score = self.max_score.max(score);
    }

    /// Returns the percentage of played rounds that were won.
    ///
    /// Returns `0.0` when nothing has been played.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        f64::from(self.games_won) / f64::from(self.games_played) * 100.0
    }

    /// Adds another set of counters into this one. Counters stop at
    /// `u32::MAX`.
    pub fn absorb(&mut self, other: &Self) {
        self.games_played = self.games_played.saturating_add(other.games_played);
        self.games_won = self.games_won.saturating_add(other.games_won);
        self.games_lost = self.games_lost.saturating_add(other.games_lost);
        self.games_pushed = self.games_pushed.saturating_add(other.games_pushed);
        self.update_max_score(other.max_score);
    }
}

/// One persisted line of the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsRecord {
    /// Participant name.
    pub name: String,
    /// Persisted counters.
    pub stats: Statistics,
}

fn parse_field<T: FromStr>(field: Option<&str>, label: &'static str) -> Result<T, RecordError> {
    let raw = field.ok_or(RecordError::MissingField(label))?;
    raw.trim()
        .parse()
        .map_err(|_| RecordError::InvalidNumber(label))
}

impl FromStr for StatsRecord {
    type Err = RecordError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut fields = line.trim_end_matches(['\r', '\n']).rsplitn(6, ':');

        let max_score = parse_field(fields.next(), "max_score")?;
        let games_pushed = parse_field(fields.next(), "pushed")?;
        let games_lost = parse_field(fields.next(), "lost")?;
        let games_won = parse_field(fields.next(), "won")?;
        let games_played: u32 = parse_field(fields.next(), "played")?;
        let name = fields.next().ok_or(RecordError::EmptyName)?;

        if name.is_empty() {
            return Err(RecordError::EmptyName);
        }

        let outcomes = u64::from(games_won) + u64::from(games_lost) + u64::from(games_pushed);
        if outcomes != u64::from(games_played) {
            return Err(RecordError::InconsistentTotals);
        }

        Ok(Self {
            name: name.to_string(),
            stats: Statistics {
                games_played,
                games_won,
                games_lost,
                games_pushed,
                max_score,
            },
        })
    }
}

impl fmt::Display for StatsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.stats;
        write!(
            f,
            "{}:{}:{}:{}:{}:{}",
            self.name, s.games_played, s.games_won, s.games_lost, s.games_pushed, s.max_score
        )
    }
}

/// Statistics keyed by participant name, in file order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ledger {
    records: Vec<StatsRecord>,
}

impl Ledger {
    /// Creates an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Parses a ledger, skipping blank lines and malformed records.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::parse_bytes(text.as_bytes())
    }

    /// Parses a ledger from raw file contents.
    ///
    /// Lines that are not valid UTF-8 are skipped like any other malformed
    /// record, so one damaged line never costs the rest of the file.
    #[must_use]
    pub fn parse_bytes(bytes: &[u8]) -> Self {
        let mut ledger = Self::new();

        for (index, raw) in bytes.split(|&b| b == b'\n').enumerate() {
            let Ok(line) = core::str::from_utf8(raw) else {
                log::warn!("skipping statistics line {}: not valid utf-8", index + 1);
                continue;
            };
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<StatsRecord>() {
                Ok(record) => ledger.records.push(record),
                Err(err) => log::warn!("skipping statistics line {}: {err}", index + 1),
            }
        }

        ledger
    }

    /// Builds a ledger from the given participants, in order.
    #[must_use]
    pub fn from_participants(participants: &[Participant]) -> Self {
        Self {
            records: participants
                .iter()
                .map(|p| StatsRecord {
                    name: p.name().to_string(),
                    stats: *p.statistics(),
                })
                .collect(),
        }
    }

    /// Returns the statistics stored for `name`.
    ///
    /// When a name appears more than once, the last line wins.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Statistics> {
        self.records
            .iter()
            .rev()
            .find(|r| r.name == name)
            .map(|r| &r.stats)
    }

    /// Restores statistics onto participants by exact name.
    ///
    /// Only the first participant carrying a name receives its record.
    /// Returns how many participants were restored.
    pub fn restore(&self, participants: &mut [Participant]) -> usize {
        let mut seen: Vec<String> = Vec::new();
        let mut restored = 0;

        for participant in participants.iter_mut() {
            if seen.iter().any(|name| name == participant.name()) {
                continue;
            }
            seen.push(participant.name().to_string());

            if let Some(stats) = self.get(participant.name()) {
                participant.set_statistics(*stats);
                restored += 1;
            }
        }

        restored
    }

    /// Returns the records, in order.
    #[must_use]
    pub fn records(&self) -> &[StatsRecord] {
        &self.records
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the ledger holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl fmt::Display for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.records {
            writeln!(f, "{record}")?;
        }
        Ok(())
    }
}

/// Persistent storage for a [`Ledger`].
pub trait StatsStore {
    /// Error returned by the store.
    type Error;

    /// Loads the ledger. A store with nothing saved yields an empty ledger.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn load(&mut self) -> Result<Ledger, Self::Error>;

    /// Replaces the stored ledger.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn save(&mut self, ledger: &Ledger) -> Result<(), Self::Error>;
}

/// A ledger kept in a text file.
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct FileStore {
    path: std::path::PathBuf,
}

#[cfg(feature = "std")]
impl FileStore {
    /// Default statistics file name.
    pub const DEFAULT_PATH: &'static str = "blackjack_stats.txt";

    /// Creates a store backed by the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[cfg(feature = "std")]
impl StatsStore for FileStore {
    type Error = crate::error::StoreError;

    fn load(&mut self) -> Result<Ledger, Self::Error> {
        match std::fs::read(&self.path) {
            Ok(bytes) => {
                let ledger = Ledger::parse_bytes(&bytes);
                log::info!(
                    "loaded {} statistics records from {}",
                    ledger.len(),
                    self.path.display()
                );
                Ok(ledger)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!("no statistics file at {}", self.path.display());
                Ok(Ledger::new())
            }
            Err(err) => Err(err.into()),
        }
    }

    fn save(&mut self, ledger: &Ledger) -> Result<(), Self::Error> {
        std::fs::write(&self.path, ledger.to_string())?;
        log::info!(
            "saved {} statistics records to {}",
            ledger.len(),
            self.path.display()
        );
        Ok(())
    }
}
