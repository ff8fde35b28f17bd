/*!
The chart --- the growing set of all expressions derived so far.

Derived entries are deduplicated by structural equality of their expression and derivation, excluding the entry's own id: deriving the same expression from the same sources by the same operator a second time is a no-op.
Lexical entries always enter the chart: two occurrences of one word in a sentence are distinct resources, distinguished by id alone.

# The retired set

Each derived entry carries the set of entry ids already consumed transitively by its derivation.
The set only grows, by union across combinations, and a successful combination's result strictly contains each operand's set.
Binary combination is rejected outright unless the operands are [combinable] --- distinct, neither consumed by the other, and with disjoint retired sets.
This is a resource discipline over lexical material: each lexical insertion contributes to at most one path of an accepted derivation.
*/

use std::collections::{BTreeSet, HashSet};

use crate::{
    db::{EntryId, OperatorName},
    structures::expression::Expression,
};

/// How a chart entry came to be.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Derivation {
    /// A leaf insertion from the lexicon.
    Lexical,

    /// The result of a combination operator.
    Derived {
        operator: OperatorName,

        /// The chart entries combined, by id.
        sources: Vec<EntryId>,

        /// Every entry id consumed transitively by this derivation.
        retired: BTreeSet<EntryId>,
    },
}

/// A chart entry: a globally unique id, an expression, and its derivation.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ChartEntry {
    pub id: EntryId,
    pub expression: Expression,
    pub derivation: Derivation,
}

impl ChartEntry {
    /// The retired set of the entry; empty for lexical leaves.
    pub fn retired(&self) -> BTreeSet<EntryId> {
        match &self.derivation {
            Derivation::Lexical => BTreeSet::default(),
            Derivation::Derived { retired, .. } => retired.clone(),
        }
    }

    /// Whether `id` has been consumed by this entry's derivation.
    pub fn retires(&self, id: EntryId) -> bool {
        match &self.derivation {
            Derivation::Lexical => false,
            Derivation::Derived { retired, .. } => retired.contains(&id),
        }
    }

    /// The derivation of a unary combination of `source`.
    pub fn derive_unary(operator: OperatorName, source: &ChartEntry) -> Derivation {
        let mut retired = source.retired();
        retired.insert(source.id);
        Derivation::Derived {
            operator,
            sources: vec![source.id],
            retired,
        }
    }

    /// The derivation of a binary combination of `first` and `second`.
    ///
    /// Callers check [combinable] beforehand; the union here then strictly contains both operands' sets.
    pub fn derive_binary(operator: OperatorName, first: &ChartEntry, second: &ChartEntry) -> Derivation {
        let mut retired = first.retired();
        retired.extend(second.retired());
        retired.insert(first.id);
        retired.insert(second.id);
        Derivation::Derived {
            operator,
            sources: vec![first.id, second.id],
            retired,
        }
    }
}

/// Whether two entries may take part in one binary combination.
pub fn combinable(first: &ChartEntry, second: &ChartEntry) -> bool {
    first.id != second.id
        && !first.retires(second.id)
        && !second.retires(first.id)
        && first.retired().is_disjoint(&second.retired())
}

/// The chart itself, a monotone store of entries with structural deduplication.
#[derive(Debug, Default)]
pub struct Chart {
    entries: Vec<ChartEntry>,
    seen: HashSet<(Expression, Derivation)>,
}

impl Chart {
    /// Whether an equivalent derived entry (same expression, same derivation) is already present.
    pub fn saturated(&self, entry: &ChartEntry) -> bool {
        match entry.derivation {
            Derivation::Lexical => false,
            Derivation::Derived { .. } => self
                .seen
                .contains(&(entry.expression.clone(), entry.derivation.clone())),
        }
    }

    /// Adds an entry.
    ///
    /// Returns false, without adding, if an equivalent derived entry is already present.
    pub fn push(&mut self, entry: ChartEntry) -> bool {
        if self.saturated(&entry) {
            return false;
        }
        if matches!(entry.derivation, Derivation::Derived { .. }) {
            self.seen
                .insert((entry.expression.clone(), entry.derivation.clone()));
        }
        self.entries.push(entry);
        true
    }

    /// The entries, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ChartEntry> {
        self.entries.iter()
    }

    /// The entry with the given id, if present.
    pub fn get(&self, id: EntryId) -> Option<&ChartEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::{
        expression::{Expression, ExpressionKind},
        feature::Feature,
        formula::Formula,
    };

    fn leaf(id: EntryId, token: &str) -> ChartEntry {
        ChartEntry {
            id,
            expression: Expression {
                phon: token.to_owned(),
                kind: ExpressionKind::Lexical,
                features: vec![Feature::licensee("d")],
                arguments: Vec::default(),
                children: Vec::default(),
                meaning: Formula::constant(token),
            },
            derivation: Derivation::Lexical,
        }
    }

    #[test]
    fn retired_sets_grow_strictly() {
        let a = leaf(0, "a");
        let b = leaf(1, "b");

        assert!(combinable(&a, &b));

        let ab = ChartEntry {
            id: 2,
            expression: a.expression.clone(),
            derivation: ChartEntry::derive_binary(OperatorName::Insert, &a, &b),
        };

        assert!(ab.retired().is_superset(&a.retired()));
        assert!(ab.retires(a.id) && ab.retires(b.id));

        // Neither operand may be reused against the result.
        assert!(!combinable(&ab, &a));
        assert!(!combinable(&b, &ab));
        assert!(!combinable(&a, &a));
    }

    #[test]
    fn chart_deduplicates_derived_entries() {
        let mut chart = Chart::default();
        let a = leaf(0, "a");
        let b = leaf(1, "b");

        // Lexical twins are distinct resources.
        assert!(chart.push(a.clone()));
        assert!(chart.push(ChartEntry { id: 2, ..a.clone() }));

        chart.push(b.clone());

        let derived = ChartEntry {
            id: 3,
            expression: a.expression.clone(),
            derivation: ChartEntry::derive_binary(OperatorName::Insert, &a, &b),
        };
        assert!(chart.push(derived.clone()));

        // A fresh id does not distinguish a structurally identical combination.
        assert!(!chart.push(ChartEntry { id: 4, ..derived }));
        assert_eq!(chart.len(), 4);
    }
}
