//! The chart database.
//!
//! A parse grows a single database of [chart entries](chart::ChartEntry), monotonically --- entries are created during seeding and combination and never removed.
//! Entries are accessed through [EntryId]s, and derivations reference their sources by id rather than by nested value trees.

pub mod chart;

/// The id of a chart entry.
///
/// Ids are produced by a context-owned monotonic counter and are never reset, so retired-set membership never collides across parses within one context.
pub type EntryId = u32;

/// The names of the combination operators, in engine priority order.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum OperatorName {
    InsertAdjunct,
    Spellout,
    MergeComp,
    MergeSpec,
    MergeNonFinal,
    Insert,
}

impl std::fmt::Display for OperatorName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsertAdjunct => write!(f, "insert_adjunct"),
            Self::Spellout => write!(f, "spellout"),
            Self::MergeComp => write!(f, "merge_comp"),
            Self::MergeSpec => write!(f, "merge_spec"),
            Self::MergeNonFinal => write!(f, "merge_nonfinal"),
            Self::Insert => write!(f, "insert"),
        }
    }
}
