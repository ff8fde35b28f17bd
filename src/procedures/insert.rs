/*!
The insertion operators --- attachment of one expression to another.

[insert](crate::context::Context::insert) matches a licensor against a licensee across two expressions and attaches the licensee side as a child of the licensor side, consuming the host's licensor.
Discharge of the attached expression's own feature is deferred: a later merge step consumes it, from its attached position.
The dependent must be fully assembled --- an expression with pending arguments or adjuncts still owes a spellout pass, and attaching it early would carry an unfinished meaning into the host's derivation.

[insert_adjunct](crate::context::Context::insert_adjunct) matches a licensee against an adjunct feature.
The adjunct is attached as a child of the licensee side, keeping its whole feature sequence: an adjunct is never merged again, and is instead consumed wholesale at spellout.
The host's licensee is left in place --- it is still needed by spellout and by the eventual landing merge --- so repeated adjunction of the *same* material is fenced off by the retired-set discipline rather than by a feature.

Both operators are symmetric in argument order.
*/

use crate::{
    context::Context,
    misc::log::targets,
    structures::{expression::Expression, feature::Feature},
};

impl Context {
    /// Attaches the licensee-outer expression as a child of the licensor-outer expression.
    pub fn insert(&self, first: &Expression, second: &Expression) -> Option<Expression> {
        let (host, dependent) = match (first.outer(), second.outer()) {
            (Some(Feature::Licensor(require)), Some(Feature::Licensee(provide)))
                if require == provide =>
            {
                (first, second)
            }

            (Some(Feature::Licensee(provide)), Some(Feature::Licensor(require)))
                if require == provide =>
            {
                (second, first)
            }

            _ => return None,
        };

        // An expression is attachable only once fully assembled: a dependent with
        // pending arguments or adjuncts would contribute an unfinished meaning.
        if dependent.needs_spellout() {
            return None;
        }

        log::trace!(
            target: targets::INSERT,
            "\"{}\" hosts \"{}\"",
            host.phon,
            dependent.phon
        );

        let mut result = host.clone();
        result.features.remove(0);
        result.children.push(dependent.clone());
        Some(result)
    }

    /// Attaches the adjunct-outer expression as a child of the licensee-outer expression.
    pub fn insert_adjunct(&self, first: &Expression, second: &Expression) -> Option<Expression> {
        let (host, adjunct) = match (first.outer(), second.outer()) {
            (Some(Feature::Licensee(category)), Some(Feature::Adjunct(modifies)))
                if category == modifies =>
            {
                (first, second)
            }

            (Some(Feature::Adjunct(modifies)), Some(Feature::Licensee(category)))
                if category == modifies =>
            {
                (second, first)
            }

            _ => return None,
        };

        log::trace!(
            target: targets::INSERT,
            "\"{}\" adjoins to \"{}\"",
            adjunct.phon,
            host.phon
        );

        let mut result = host.clone();
        result.children.push(adjunct.clone());
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config,
        structures::{
            expression::{Argument, ExpressionKind},
            formula::Formula,
            lexicon::Lexicon,
        },
    };

    fn context() -> Context {
        Context::from_config(Config::default(), Lexicon::default())
    }

    fn expression(token: &str, features: Vec<Feature>) -> Expression {
        Expression {
            phon: token.to_owned(),
            kind: ExpressionKind::Lexical,
            features,
            arguments: Vec::default(),
            children: Vec::default(),
            meaning: Formula::constant(token),
        }
    }

    #[test]
    fn insert_is_symmetric_and_defers_discharge() {
        let verb = expression("chase", vec![Feature::licensor("d"), Feature::licensee("v")]);
        let object = expression("bob", vec![Feature::licensee("d")]);

        let hosted = context().insert(&verb, &object).unwrap();
        let hosted_flipped = context().insert(&object, &verb).unwrap();
        assert_eq!(hosted, hosted_flipped);

        assert_eq!(hosted.features, vec![Feature::licensee("v")]);
        // The dependent keeps its own undischarged feature.
        assert_eq!(hosted.children[0].features, vec![Feature::licensee("d")]);
    }

    #[test]
    fn insert_requires_matching_categories() {
        let verb = expression("chase", vec![Feature::licensor("d")]);
        let clause = expression("that", vec![Feature::licensee("c")]);
        assert!(context().insert(&verb, &clause).is_none());

        let other = expression("run", vec![Feature::licensor("d")]);
        assert!(context().insert(&verb, &other).is_none());
    }

    #[test]
    fn unassembled_dependents_are_not_attached() {
        let verb = expression("chase", vec![Feature::licensor("d"), Feature::licensee("v")]);

        // A quantified phrase which has merged its noun but not yet spelled out.
        let mut phrase = expression("every.NOM", vec![Feature::licensee("d")]);
        phrase.arguments.push(Argument {
            token: "girl".to_owned(),
            category: "n".to_owned(),
            meaning: Formula::constant("girl"),
        });

        assert!(context().insert(&verb, &phrase).is_none());
        assert!(context().insert(&phrase, &verb).is_none());

        phrase.arguments.clear();
        assert!(context().insert(&verb, &phrase).is_some());
    }

    #[test]
    fn adjunction_leaves_the_host_licensee_in_place() {
        let phrase = expression("run", vec![Feature::licensee("v")]);
        let adverb = expression("quickly", vec![Feature::adjunct("v")]);

        let adjoined = context().insert_adjunct(&phrase, &adverb).unwrap();
        assert_eq!(adjoined.features, vec![Feature::licensee("v")]);
        assert_eq!(adjoined.children[0].features, vec![Feature::adjunct("v")]);

        assert!(context().insert_adjunct(&phrase, &phrase).is_none());
    }
}
