/*!
A small English fragment and a matching model, used by the documentation and the test suite.

The fragment derives present-tense clauses with transitive and intransitive verbs, verbal adjuncts, a lexicon-indexed pronoun, and quantified noun phrases in object and subject position.
Case is written into the tokens: subjects carry `.NOM`, pronouns additionally carry their assignment index.

The clause heads are pronounced `ε`, so every derivation names its head in the input.
A clause is plain (`ε`) or hosts a quantified phrase in its specifier (`ε.Q`).
*/

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    builder::item,
    semantics::model::{Model, EXTERNAL, INTERNAL},
    structures::{
        formula::{Formula, QuantifierKind},
        lexicon::Lexicon,
    },
};

/// The fragment's lexicon.
pub fn lexicon() -> Lexicon {
    let items = vec![
        // Clause heads.
        item("ε", &["+t", "+t", "-c"], Formula::constant("decl")),
        item("ε.Q", &["+t", "+t", "+q", "-c"], Formula::constant("decl")),
        // Present tense.
        item("-s", &["+v", "+v", "+nom", "-t"], Formula::constant("present")),
        // Verbs.
        item(
            "chase",
            &["+acc", "+acc", "+d", "+d", "-v"],
            Formula::constant("chase"),
        ),
        item("run", &["+d", "+d", "-v"], Formula::constant("run")),
        // Subjects.
        item("alice.NOM", &["-d", "-nom"], Formula::constant("alice")),
        item("he.1.NOM", &["-d", "-nom"], Formula::Variable(1)),
        // Objects.
        item("alice", &["-acc"], Formula::constant("alice")),
        item("bob", &["-acc"], Formula::constant("bob")),
        // Nouns and determiners.
        item("girl", &["-n"], Formula::constant("girl")),
        item(
            "some",
            &["+n", "+n", "-acc", "-q"],
            Formula::Quantifier(QuantifierKind::Exists),
        ),
        item(
            "every.NOM",
            &["+n", "+n", "-d", "-nom", "-q"],
            Formula::Quantifier(QuantifierKind::Forall),
        ),
        // Adjuncts.
        item("quickly", &["~v"], Formula::constant("quick")),
    ];

    let class = |names: &[&str]| {
        names
            .iter()
            .map(|name| (*name).to_owned())
            .collect::<BTreeSet<_>>()
    };

    Lexicon {
        items,
        start: class(&["c"]),
        clausal: class(&["c"]),
        verbal: class(&["v"]),
        nominal: class(&["n", "d", "acc", "t"]),
    }
}

/// The fragment's model.
///
/// Alice chases Bob and Carol; the girls, Carol and Daisy, each chase Bob; Alice runs, though not quickly.
/// The assignment reads pronoun index 1 as Bob.
pub fn model() -> Model {
    let names = |list: &[&str]| {
        list.iter()
            .map(|name| (*name).to_owned())
            .collect::<BTreeSet<_>>()
    };
    let pairs = |list: &[(&str, &str)]| {
        list.iter()
            .map(|(event, entity)| ((*event).to_owned(), (*entity).to_owned()))
            .collect::<BTreeSet<_>>()
    };

    Model {
        entities: names(&["alice", "bob", "carol", "daisy"]),
        events: names(&["e1", "e2", "e3", "e4", "e5"]),
        assignments: BTreeMap::from([(1, "bob".to_owned())]),
        predicates: BTreeMap::from([
            ("chase".to_owned(), names(&["e1", "e2", "e3", "e4"])),
            ("run".to_owned(), names(&["e5"])),
            ("present".to_owned(), names(&["e1", "e2", "e3", "e4", "e5"])),
            ("girl".to_owned(), names(&["carol", "daisy"])),
            ("quick".to_owned(), names(&[])),
        ]),
        predicates2: BTreeMap::from([
            (
                INTERNAL.to_owned(),
                pairs(&[("e1", "bob"), ("e2", "carol"), ("e3", "bob"), ("e4", "bob")]),
            ),
            (
                EXTERNAL.to_owned(),
                pairs(&[
                    ("e1", "alice"),
                    ("e2", "alice"),
                    ("e3", "carol"),
                    ("e4", "daisy"),
                    ("e5", "alice"),
                ]),
            ),
        ]),
    }
}
