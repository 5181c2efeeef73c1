//! Board history with a movable cursor.
//!
//! `snapshots[0]` is always the empty board and each later snapshot adds
//! exactly one mark to the one before it. The cursor always names an
//! existing snapshot; the player to move is derived from it.

use super::action::apply_move;
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A jump target that does not exist in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Move {} is out of range (history has {} entries)", requested, len)]
pub struct JumpError {
    /// Requested cursor value.
    pub requested: usize,
    /// History length at the time of the request.
    pub len: usize,
}

/// A serialized history that could not have been produced by play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum HistoryError {
    /// No snapshots at all.
    #[display("History has no snapshots")]
    Empty,

    /// The first snapshot already holds marks.
    #[display("History does not start from the empty board")]
    NonEmptyStart,

    /// A snapshot is not one legal move after the previous one.
    #[display("Snapshot {} is not a legal move for {}", step, player)]
    IllegalStep {
        /// Index of the offending snapshot.
        step: usize,
        /// Player expected to have moved.
        player: Player,
    },

    /// The cursor names no snapshot.
    #[display("Cursor {} is out of range (history has {} entries)", cursor, len)]
    CursorOutOfRange {
        /// Stored cursor.
        cursor: usize,
        /// Number of snapshots.
        len: usize,
    },
}

/// Ordered board snapshots plus the index of the displayed one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HistoryRecord")]
pub struct History {
    snapshots: Vec<Board>,
    cursor: usize,
}

/// Unchecked wire form of [`History`].
#[derive(Deserialize)]
struct HistoryRecord {
    snapshots: Vec<Board>,
    cursor: usize,
}

impl TryFrom<HistoryRecord> for History {
    type Error = HistoryError;

    /// Replays every snapshot pair through [`apply_move`], so a loaded
    /// history holds the same invariants as one built by play.
    fn try_from(record: HistoryRecord) -> Result<Self, Self::Error> {
        let HistoryRecord { snapshots, cursor } = record;

        match snapshots.first() {
            None => return Err(HistoryError::Empty),
            Some(first) if *first != Board::new() => return Err(HistoryError::NonEmptyStart),
            Some(_) => {}
        }

        let mut player = Player::X;
        for (step, pair) in snapshots.windows(2).enumerate().map(|(i, w)| (i + 1, w)) {
            let (prev, next) = (&pair[0], &pair[1]);
            let mut changed = Position::ALL
                .into_iter()
                .filter(|&pos| prev.get(pos) != next.get(pos));
            let legal = match (changed.next(), changed.next()) {
                (Some(pos), None) => apply_move(prev, pos.to_index(), player).ok() == Some(*next),
                _ => false,
            };
            if !legal {
                return Err(HistoryError::IllegalStep { step, player });
            }
            player = player.opponent();
        }

        if cursor >= snapshots.len() {
            return Err(HistoryError::CursorOutOfRange {
                cursor,
                len: snapshots.len(),
            });
        }

        Ok(Self { snapshots, cursor })
    }
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            cursor: 0,
        }
    }

    /// Returns every snapshot, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Returns the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the empty board is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The snapshot under the cursor.
    pub fn current(&self) -> &Board {
        &self.snapshots[self.cursor]
    }

    /// X moves on even cursors.
    pub fn x_is_next(&self) -> bool {
        self.cursor % 2 == 0
    }

    /// The player whose mark the next move places.
    pub fn current_player(&self) -> Player {
        if self.x_is_next() { Player::X } else { Player::O }
    }

    /// Appends `next` after the cursor, discarding any snapshots beyond it.
    ///
    /// `next` must come from [`apply_move`] on the current board.
    #[instrument(skip(self, next), fields(cursor = self.cursor, len = self.snapshots.len()))]
    pub(crate) fn play(&mut self, next: Board) {
        let discarded = self.snapshots.len() - (self.cursor + 1);
        if discarded > 0 {
            debug!(discarded, "Overwriting abandoned branch");
        }
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(next);
        self.cursor = self.snapshots.len() - 1;
    }

    /// Moves the cursor to `step` without touching the snapshots.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), JumpError> {
        if step >= self.snapshots.len() {
            return Err(JumpError {
                requested: step,
                len: self.snapshots.len(),
            });
        }
        self.cursor = step;
        Ok(())
    }

    /// Back to a single empty board.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.snapshots.clear();
        self.snapshots.push(Board::new());
        self.cursor = 0;
    }

    /// Describes each snapshot for the move list.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        (0..self.snapshots.len())
            .map(|step| HistoryEntry {
                step,
                is_current: step == self.cursor,
            })
            .collect()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

/// One line of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Index into the history.
    pub step: usize,
    /// Whether the cursor is on this entry.
    pub is_current: bool,
}

impl HistoryEntry {
    /// Text shown for this entry.
    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.step == 0 {
            write!(f, "Go to game start")
        } else {
            write!(f, "Go to move #{}", self.step)
        }
    }
}
