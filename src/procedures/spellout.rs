/*!
Spellout --- linearization and meaning assembly for a completed constituent.

Spellout rewrites an expression whose outermost feature is a licensee of a spellout-eligible category and which still has material to assemble: recorded arguments (at most two) and/or adjunct children.

Adjunct children are partitioned out of the child list first.
Their tokens are appended, in encountered order, to the phonological string, and their meanings conjoined onto the base meaning, innermost adjunct first.
Non-adjunct children --- movers awaiting a landing site --- ride through unchanged.

The base is composed from the head's spellout class and argument count.
Arguments are read in merge order: with two arguments the first is the internal and the second the external; a sole argument is external.

| head / arity | phonology | meaning |
|---|---|---|
| clausal, 1 | external | external |
| clausal, 2 | internal | external & internal |
| verbal, 1 | external head | head & ext(external) |
| quantificational nominal, 1 | head external | int_i(external) & head, `i` fresh |
| nominal, 1 | head external | head & external |
| nominal, 2 | external head internal | \<head & internal\> |
| verbal, 2 | external head internal | head & (int(internal) & ext(external)) |

The two-argument verbal phonology places the external argument before the head and the internal after.
This ordering is deliberate and should not be "corrected" without separately verifying the intended linguistic target.

In the quantificational row the conjunction is built indexed-restrictor first, so the quantifier tag terminates the rightmost spine and the result keeps the structural scope convention of [formula](crate::structures::formula).
*/

use crate::{
    context::Context,
    misc::log::targets,
    structures::{
        expression::{Expression, ExpressionKind},
        feature::Feature,
        formula::Formula,
    },
};

/// The spellout class of a head category.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum HeadClass {
    Clausal,
    Verbal,
    Nominal,
}

/// Joins non-empty phonological parts with single spaces.
fn join(parts: &[&str]) -> String {
    parts
        .iter()
        .copied()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

impl Context {
    /// Assembles phonology and meaning for a constituent with pending arguments or adjuncts.
    pub fn spellout(&mut self, host: &Expression) -> Option<Expression> {
        let Some(Feature::Licensee(category)) = host.outer() else {
            return None;
        };

        let class = if self.lexicon.clausal.contains(category) {
            HeadClass::Clausal
        } else if self.lexicon.verbal.contains(category) {
            HeadClass::Verbal
        } else if self.lexicon.nominal.contains(category) {
            HeadClass::Nominal
        } else {
            return None;
        };

        if !host.needs_spellout() || host.arguments.len() > 2 {
            return None;
        }

        let head = host.phon.as_str();
        let meaning = host.meaning.clone();

        let (mut phon, mut meaning) = match (class, host.arguments.as_slice()) {
            // Adjunct-only pass: nothing further to compose.
            (_, []) => (head.to_owned(), meaning),

            (HeadClass::Clausal, [external]) => (external.token.clone(), external.meaning.clone()),

            (HeadClass::Clausal, [internal, external]) => (
                internal.token.clone(),
                Formula::conjunction(external.meaning.clone(), internal.meaning.clone()),
            ),

            (HeadClass::Verbal, [external]) => (
                join(&[&external.token, head]),
                Formula::conjunction(
                    meaning,
                    Formula::Ext(Box::new(external.meaning.clone())),
                ),
            ),

            (HeadClass::Verbal, [internal, external]) => (
                join(&[&external.token, head, &internal.token]),
                Formula::conjunction(
                    meaning,
                    Formula::conjunction(
                        Formula::Int(Box::new(internal.meaning.clone())),
                        Formula::Ext(Box::new(external.meaning.clone())),
                    ),
                ),
            ),

            (HeadClass::Nominal, [external]) if meaning.is_quantificational() => {
                let theta = self.counters.next_index();
                log::trace!(target: targets::SPELLOUT, "Fresh theta index {theta} for \"{head}\"");
                (
                    join(&[head, &external.token]),
                    Formula::conjunction(
                        Formula::IndexedInternal(Box::new(external.meaning.clone()), theta),
                        meaning,
                    ),
                )
            }

            (HeadClass::Nominal, [external]) => (
                join(&[head, &external.token]),
                Formula::conjunction(meaning, external.meaning.clone()),
            ),

            (HeadClass::Nominal, [internal, external]) => (
                join(&[&external.token, head, &internal.token]),
                Formula::Closure(Box::new(Formula::conjunction(
                    meaning,
                    internal.meaning.clone(),
                ))),
            ),

            _ => return None,
        };

        let (adjuncts, movers): (Vec<&Expression>, Vec<&Expression>) =
            host.children.iter().partition(|child| child.is_adjunct());

        for adjunct in &adjuncts {
            phon = join(&[&phon, &adjunct.phon]);
            meaning = Formula::conjunction(meaning, adjunct.meaning.clone());
        }

        log::debug!(target: targets::SPELLOUT, "\"{phon}\" : {meaning}");

        Some(Expression {
            phon,
            kind: ExpressionKind::Derived,
            features: host.features.clone(),
            arguments: Vec::default(),
            children: movers.into_iter().cloned().collect(),
            meaning,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        builder::fragment,
        config::Config,
        structures::{expression::Argument, formula::QuantifierKind},
    };

    fn context() -> Context {
        Context::from_config(Config::default(), fragment::lexicon())
    }

    fn head(token: &str, category: &str, meaning: Formula, arguments: Vec<Argument>) -> Expression {
        Expression {
            phon: token.to_owned(),
            kind: ExpressionKind::Derived,
            features: vec![Feature::licensee(category)],
            arguments,
            children: Vec::default(),
            meaning,
        }
    }

    fn argument(token: &str, category: &str, meaning: Formula) -> Argument {
        Argument {
            token: token.to_owned(),
            category: category.to_owned(),
            meaning,
        }
    }

    #[test]
    fn verbal_two_argument_order_is_external_head_internal() {
        let verb = head(
            "chase",
            "v",
            Formula::constant("chase"),
            vec![
                argument("bob", "acc", Formula::constant("bob")),
                argument("alice.NOM", "d", Formula::constant("alice")),
            ],
        );

        let spelled = context().spellout(&verb).unwrap();
        assert_eq!(spelled.phon, "alice.NOM chase bob");
        assert_eq!(
            spelled.meaning,
            Formula::conjunction(
                Formula::constant("chase"),
                Formula::conjunction(
                    Formula::Int(Box::new(Formula::constant("bob"))),
                    Formula::Ext(Box::new(Formula::constant("alice"))),
                ),
            ),
        );
        assert!(spelled.arguments.is_empty());
    }

    #[test]
    fn quantificational_head_mints_a_fresh_negative_index() {
        let mut the_context = context();

        let phrase = head(
            "some",
            "acc",
            Formula::Quantifier(QuantifierKind::Exists),
            vec![argument("girl", "n", Formula::constant("girl"))],
        );

        let first = the_context.spellout(&phrase).unwrap();
        let second = the_context.spellout(&phrase).unwrap();

        assert_eq!(first.phon, "some girl");
        assert!(first.meaning.is_quantificational());

        let (one, two) = (first.meaning.theta_index(), second.meaning.theta_index());
        assert!(one.unwrap() < 0 && two.unwrap() < 0);
        assert_ne!(one, two);
    }

    #[test]
    fn adjuncts_append_innermost_first() {
        let mut phrase = head(
            "run",
            "v",
            Formula::constant("run"),
            vec![argument("alice.NOM", "d", Formula::constant("alice"))],
        );
        phrase.children.push(Expression {
            phon: "quickly".to_owned(),
            kind: ExpressionKind::Lexical,
            features: vec![Feature::adjunct("v")],
            arguments: Vec::default(),
            children: Vec::default(),
            meaning: Formula::constant("quick"),
        });

        let spelled = context().spellout(&phrase).unwrap();
        assert_eq!(spelled.phon, "alice.NOM run quickly");
        assert_eq!(
            spelled.meaning,
            Formula::conjunction(
                Formula::conjunction(
                    Formula::constant("run"),
                    Formula::Ext(Box::new(Formula::constant("alice"))),
                ),
                Formula::constant("quick"),
            ),
        );
        assert!(spelled.children.is_empty());

        // With neither arguments nor adjuncts there is nothing to assemble.
        assert!(context().spellout(&spelled).is_none());
    }

    #[test]
    fn clausal_head_with_one_argument_passes_the_meaning_through() {
        let clause = head(
            "ε",
            "c",
            Formula::constant("decl"),
            vec![argument("alice.NOM run -s", "t", Formula::constant("body"))],
        );

        let spelled = context().spellout(&clause).unwrap();
        assert_eq!(spelled.phon, "alice.NOM run -s");
        assert_eq!(spelled.meaning, Formula::constant("body"));
    }
}
