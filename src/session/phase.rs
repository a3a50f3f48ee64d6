use serde::{Deserialize, Serialize};

/// Where the session is within a turn.
///
/// ```text
/// start -> training -> action -> meeting -> training (next turn)
///                                        -> end (after the last turn)
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Before the opening draft.
    #[default]
    Start,
    /// A training offer is drawn and waits for a pick.
    Training,
    /// Cards are drawn into hand and placed into role slots.
    Action,
    /// Cards are returned to the deck and some may be deleted.
    Meeting,
    /// All turns played.
    End,
}

impl Phase {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Phase::Start => "start",
            Phase::Training => "training",
            Phase::Action => "action",
            Phase::Meeting => "meeting",
            Phase::End => "end",
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Phase::End)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
