//! The session-wide mutable accumulator.
//!
//! Pure storage plus invariant enforcement; all routing logic lives in the
//! block and line parsers, which receive `&mut SessionState` on every call.

use ascent_types::{ChallengePath, ParsingConfig};

use crate::model::{
    DayChange, EquipmentChange, EquipmentSnapshot, FamiliarChange, FamiliarSnapshot, LevelReached,
    PlayerSnapshot, PullEntry, Turn, TurnInterval, TurnVersion,
};

/// Area/encounter name given to the synthetic turn 0 that anchors
/// pre-adventure activity (pulls, consumption before the first turn).
pub const RUN_START_AREA: &str = "Ascension Start";

#[derive(Debug, Clone)]
pub struct SessionState {
    pub(crate) log_name: String,
    pub path: ChallengePath,
    path_overridden: bool,
    pub player_name: Option<String>,

    pub(crate) turns: Vec<Turn>,
    pub(crate) intervals: Vec<TurnInterval>,
    pub(crate) equipment_stack: Vec<EquipmentChange>,
    pub(crate) familiar_changes: Vec<FamiliarChange>,
    pub(crate) day_changes: Vec<DayChange>,
    pub(crate) pulls: Vec<PullEntry>,
    pub(crate) levels: Vec<LevelReached>,
    pub(crate) snapshots: Vec<PlayerSnapshot>,

    current_familiar: FamiliarSnapshot,
    pub current_day: u32,
    /// Notes arriving right after a day boundary attach to the boundary
    /// instead of a turn.
    day_comment_pending: bool,
}

impl SessionState {
    pub fn new(log_name: impl Into<String>, config: &ParsingConfig) -> Self {
        let mut start = Turn::new(
            0,
            1,
            RUN_START_AREA,
            RUN_START_AREA,
            EquipmentSnapshot::default(),
            FamiliarSnapshot::default(),
        );
        start.first_encounter_mut().set_version(TurnVersion::Other);

        Self {
            log_name: log_name.into(),
            path: config.challenge_path,
            path_overridden: config.challenge_path != ChallengePath::None,
            player_name: config.player_name.clone(),
            turns: vec![start],
            intervals: Vec::new(),
            equipment_stack: Vec::new(),
            familiar_changes: Vec::new(),
            day_changes: vec![DayChange::new(1, 0)],
            pulls: Vec::new(),
            levels: Vec::new(),
            snapshots: Vec::new(),
            current_familiar: FamiliarSnapshot::default(),
            current_day: 1,
            day_comment_pending: false,
        }
    }

    pub fn log_name(&self) -> &str {
        &self.log_name
    }

    /// Apply the challenge path found in the log's ascension-data block,
    /// unless the config explicitly pinned one.
    pub fn set_path_from_log(&mut self, path: ChallengePath) {
        if !self.path_overridden {
            self.path = path;
        }
    }

    // ─── Turns ───────────────────────────────────────────────────────────────

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn last_turn_spent(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn last_turn_spent_mut(&mut self) -> Option<&mut Turn> {
        self.turns.last_mut()
    }

    pub fn last_turn_number(&self) -> u32 {
        self.turns.last().map(Turn::number).unwrap_or(0)
    }

    /// Append a turn. Turn numbers must be non-decreasing across the
    /// session; a regressing number (mislogged) is clamped to the previous
    /// turn's number, which the renumber re-tags through owned records.
    pub fn add_turn_spent(&mut self, mut turn: Turn) {
        let last = self.last_turn_number();
        if turn.number() < last {
            tracing::debug!(
                number = turn.number(),
                last,
                area = turn.area(),
                "regressing turn number clamped"
            );
            turn.renumber(last);
        }
        self.turns.push(turn);
        self.day_comment_pending = false;
    }

    // ─── Intervals (pre-parsed logs) ─────────────────────────────────────────

    pub fn intervals(&self) -> &[TurnInterval] {
        &self.intervals
    }

    pub fn last_interval_mut(&mut self) -> Option<&mut TurnInterval> {
        self.intervals.last_mut()
    }

    pub fn add_interval(&mut self, interval: TurnInterval) {
        self.intervals.push(interval);
    }

    // ─── Equipment ───────────────────────────────────────────────────────────

    pub fn equipment_changes(&self) -> &[EquipmentChange] {
        &self.equipment_stack
    }

    pub fn last_equipment_change(&self) -> Option<&EquipmentChange> {
        self.equipment_stack.last()
    }

    /// Current loadout: the top of the equipment stack, or all-empty
    /// before the first change.
    pub fn current_equipment(&self) -> EquipmentSnapshot {
        self.equipment_stack
            .last()
            .map(|c| c.snapshot.clone())
            .unwrap_or_default()
    }

    pub fn add_equipment_change(&mut self, change: EquipmentChange) {
        // Recording an unchanged snapshot would only bloat the stack
        if self
            .equipment_stack
            .last()
            .is_some_and(|last| last.snapshot == change.snapshot)
        {
            return;
        }
        self.equipment_stack.push(change);
    }

    /// Roll back one equipment change ("previous outfit"); the stack top
    /// becomes the snapshot that was current before the popped change.
    pub fn pop_equipment_change(&mut self) -> Option<EquipmentChange> {
        self.equipment_stack.pop()
    }

    // ─── Familiar ────────────────────────────────────────────────────────────

    pub fn familiar_changes(&self) -> &[FamiliarChange] {
        &self.familiar_changes
    }

    pub fn last_familiar_change(&self) -> Option<&FamiliarChange> {
        self.familiar_changes.last()
    }

    pub fn current_familiar(&self) -> FamiliarSnapshot {
        self.current_familiar.clone()
    }

    pub fn set_current_familiar(&mut self, familiar: FamiliarSnapshot) {
        if familiar.name != self.current_familiar.name {
            self.familiar_changes
                .push(FamiliarChange::new(self.last_turn_number() + 1, familiar.name.clone()));
        }
        self.current_familiar = familiar;
    }

    // ─── Days ────────────────────────────────────────────────────────────────

    pub fn day_changes(&self) -> &[DayChange] {
        &self.day_changes
    }

    pub fn last_day_change(&self) -> Option<&DayChange> {
        self.day_changes.last()
    }

    /// Advance to the given day, inserting a boundary for every day in
    /// between so the list stays contiguous and increasing.
    pub fn add_day_change(&mut self, day: u32) {
        if day <= self.current_day {
            return;
        }
        let turn = self.last_turn_number();
        for d in (self.current_day + 1)..=day {
            self.day_changes.push(DayChange::new(d, turn));
        }
        self.current_day = day;
        self.day_comment_pending = true;
    }

    /// Whether a note line should attach to the latest day boundary
    /// rather than the current turn.
    pub fn day_comment_pending(&self) -> bool {
        self.day_comment_pending
    }

    pub fn add_day_comment(&mut self, comment: &str) {
        if let Some(change) = self.day_changes.last_mut() {
            change.comments.push(comment.to_string());
        }
    }

    // ─── Pulls, levels, snapshots ────────────────────────────────────────────

    pub fn pulls(&self) -> &[PullEntry] {
        &self.pulls
    }

    pub fn add_pull(&mut self, pull: PullEntry) {
        self.pulls.push(pull);
    }

    pub fn levels(&self) -> &[LevelReached] {
        &self.levels
    }

    pub fn last_level(&self) -> u32 {
        self.levels.last().map(|l| l.level).unwrap_or(1)
    }

    pub fn add_level(&mut self, level: LevelReached) {
        if level.level > self.last_level() {
            self.levels.push(level);
        }
    }

    pub fn snapshots(&self) -> &[PlayerSnapshot] {
        &self.snapshots
    }

    pub fn add_snapshot(&mut self, snapshot: PlayerSnapshot) {
        self.snapshots.push(snapshot);
    }
}
