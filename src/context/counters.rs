use crate::{db::EntryId, structures::formula::Index};

/// Counters owned by a context.
///
/// The id and theta-index producers are monotone and never reset, not even between parses: retired-set membership and variable binding must stay unique across every derivation built within one context.
#[derive(Debug)]
pub struct Counters {
    /// The next chart-entry id.
    next_entry: EntryId,

    /// The next fresh theta index.
    ///
    /// Theta indices are negative, counting down, so they never collide with lexicon-supplied pronoun indices.
    next_theta: Index,

    /// A count of agenda pops across every parse.
    pub total_steps: usize,

    /// A count of parses attempted.
    pub total_parses: usize,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            next_entry: 0,
            next_theta: -1,

            total_steps: 0,
            total_parses: 0,
        }
    }
}

impl Counters {
    /// A globally fresh chart-entry id.
    pub fn next_id(&mut self) -> EntryId {
        let id = self.next_entry;
        self.next_entry += 1;
        id
    }

    /// A globally fresh negative theta index.
    pub fn next_index(&mut self) -> Index {
        let index = self.next_theta;
        self.next_theta -= 1;
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_are_monotone() {
        let mut counters = Counters::default();
        assert_eq!(counters.next_id(), 0);
        assert_eq!(counters.next_id(), 1);

        assert_eq!(counters.next_index(), -1);
        assert_eq!(counters.next_index(), -2);
    }
}
