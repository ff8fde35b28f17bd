/*!
The parse procedure --- a chart/agenda fixpoint over the combination operators.

A parse seeds the chart with one lexical entry per matching item at each token position, plus the phonologically-null items when configured, and then works an agenda of unexamined entries.
Each pop is first checked for acceptance; otherwise the entry is offered to the operators in priority order and the first result, if fresh, is pushed to the *front* of the agenda.
Front pushing makes the engine chase each derivation depth-first before returning to the remaining seeds.

Acceptance requires a single remaining licensee of a start category, no pending movers, and total consumption of the input: every token position must have contributed one of its seeds to the entry's derivation.
An accepted entry which still carries arguments or adjuncts receives one final spellout pass before it is returned.

The procedure is greedy.
Only the first applicable operator fires for each pop, and an entry whose first result is already in the chart is simply abandoned.
*/

use std::collections::VecDeque;

use crate::{
    builder,
    context::Context,
    db::{
        chart::{combinable, Chart, ChartEntry, Derivation},
        EntryId, OperatorName,
    },
    misc::log::targets,
    structures::{expression::Expression, feature::Feature},
};

impl Context {
    /// Parses `input`, returning the accepting chart entry, if any.
    pub fn parse(&mut self, input: &str) -> Option<ChartEntry> {
        self.parse_recorded(input).1
    }

    /// As [parse](Context::parse), returning the full chart alongside the result.
    ///
    /// The chart is what [reports](crate::reports) renders derivation trees from.
    pub fn parse_recorded(&mut self, input: &str) -> (Chart, Option<ChartEntry>) {
        self.counters.total_parses += 1;

        let tokens = builder::tokenize(input);

        let mut chart = Chart::default();
        let mut agenda: VecDeque<ChartEntry> = VecDeque::default();

        // The seed ids of each token position, for the totality check.
        let mut positions: Vec<Vec<EntryId>> = Vec::default();

        for token in &tokens {
            let items = self.lexicon.lookup(token).cloned().collect::<Vec<_>>();
            if items.is_empty() {
                log::warn!(target: targets::CHART, "No lexical item for \"{token}\"");
                return (chart, None);
            }

            let mut seeds = Vec::default();
            for item in &items {
                let entry = ChartEntry {
                    id: self.counters.next_id(),
                    expression: Expression::lexical(item),
                    derivation: Derivation::Lexical,
                };
                seeds.push(entry.id);
                chart.push(entry.clone());
                agenda.push_back(entry);
            }
            positions.push(seeds);
        }

        // Null items are seeded alongside the input, and count towards totality like any
        // other insertion. Each is its own group, so every null element must be consumed.
        if self.config.seed_null_items && !tokens.iter().any(String::is_empty) {
            let nulls = self.lexicon.nulls().cloned().collect::<Vec<_>>();
            for item in &nulls {
                let entry = ChartEntry {
                    id: self.counters.next_id(),
                    expression: Expression::lexical(item),
                    derivation: Derivation::Lexical,
                };
                positions.push(vec![entry.id]);
                chart.push(entry.clone());
                agenda.push_back(entry);
            }
        }

        let mut steps = 0;
        let mut accepted = None;

        while let Some(entry) = agenda.pop_front() {
            if let Some(limit) = self.config.step_limit {
                if steps >= limit {
                    log::warn!(target: targets::CHART, "Step limit {limit} reached");
                    break;
                }
            }
            steps += 1;
            self.counters.total_steps += 1;

            log::trace!(target: targets::CHART, "Pop {}: {}", entry.id, entry.expression);

            if self.accepts(&positions, &entry) {
                if let Some(parsed) = self.finalize(&mut chart, &entry) {
                    log::debug!(
                        target: targets::CHART,
                        "Accepted after {steps} steps: {}",
                        parsed.expression
                    );
                    accepted = Some(parsed);
                    break;
                }
            }

            if let Some(next) = self.step(&chart, &entry) {
                if chart.push(next.clone()) {
                    agenda.push_front(next);
                }
            }
        }

        if accepted.is_none() {
            log::debug!(target: targets::CHART, "No accepting entry after {steps} steps");
        }
        (chart, accepted)
    }

    /// Whether `input` parses.
    pub fn recognize(&mut self, input: &str) -> bool {
        self.parse(input).is_some()
    }

    /// Whether an entry is a total derivation down to a start licensee.
    fn accepts(&self, positions: &[Vec<EntryId>], entry: &ChartEntry) -> bool {
        let [Feature::Licensee(category)] = entry.expression.features.as_slice() else {
            return false;
        };
        if !self.lexicon.is_start(category) {
            return false;
        }

        // Pending movers have not landed.
        if entry
            .expression
            .children
            .iter()
            .any(|child| !child.is_adjunct())
        {
            return false;
        }

        // Totality is judged on the retired set alone, so a bare lexical seed never
        // accepts, even over a one-token input. With an ambiguous token, one consumed
        // reading per position suffices; the other readings stay unconsumed.
        let used = entry.retired();
        positions
            .iter()
            .all(|seeds| seeds.iter().any(|seed| used.contains(seed)))
    }

    /// Spells out an accepting entry which still has material to assemble.
    fn finalize(&mut self, chart: &mut Chart, entry: &ChartEntry) -> Option<ChartEntry> {
        if !entry.expression.needs_spellout() {
            return Some(entry.clone());
        }

        let expression = self.spellout(&entry.expression)?;
        let parsed = ChartEntry {
            id: self.counters.next_id(),
            expression,
            derivation: ChartEntry::derive_unary(OperatorName::Spellout, entry),
        };
        chart.push(parsed.clone());
        Some(parsed)
    }

    /// The first operator application available to `entry`, in priority order.
    ///
    /// Binary operators scan the chart for a partner in insertion order, skipping pairs whose retired sets overlap.
    fn step(&mut self, chart: &Chart, entry: &ChartEntry) -> Option<ChartEntry> {
        for partner in chart.iter() {
            if !combinable(entry, partner) {
                continue;
            }
            if let Some(expression) = self.insert_adjunct(&entry.expression, &partner.expression) {
                return Some(ChartEntry {
                    id: self.counters.next_id(),
                    expression,
                    derivation: ChartEntry::derive_binary(
                        OperatorName::InsertAdjunct,
                        entry,
                        partner,
                    ),
                });
            }
        }

        if let Some(expression) = self.spellout(&entry.expression) {
            return Some(ChartEntry {
                id: self.counters.next_id(),
                expression,
                derivation: ChartEntry::derive_unary(OperatorName::Spellout, entry),
            });
        }

        if let Some(expression) = self.merge_comp(&entry.expression) {
            return Some(ChartEntry {
                id: self.counters.next_id(),
                expression,
                derivation: ChartEntry::derive_unary(OperatorName::MergeComp, entry),
            });
        }

        if let Some(expression) = self.merge_spec(&entry.expression) {
            return Some(ChartEntry {
                id: self.counters.next_id(),
                expression,
                derivation: ChartEntry::derive_unary(OperatorName::MergeSpec, entry),
            });
        }

        if let Some(expression) = self.merge_nonfinal(&entry.expression) {
            return Some(ChartEntry {
                id: self.counters.next_id(),
                expression,
                derivation: ChartEntry::derive_unary(OperatorName::MergeNonFinal, entry),
            });
        }

        for partner in chart.iter() {
            if !combinable(entry, partner) {
                continue;
            }
            if let Some(expression) = self.insert(&entry.expression, &partner.expression) {
                return Some(ChartEntry {
                    id: self.counters.next_id(),
                    expression,
                    derivation: ChartEntry::derive_binary(OperatorName::Insert, entry, partner),
                });
            }
        }

        None
    }
}
