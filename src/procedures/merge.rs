/*!
The merge operators --- discharge of a licensor against a licensee child.

All three operators share a skeleton: the host's outermost feature is a licensor of some category, and exactly one attached child answers it with a matching licensee.
They differ in what happens to the child:

- [merge_comp](crate::context::Context::merge_comp) and [merge_spec](crate::context::Context::merge_spec) apply when the matched licensee is the child's *final* feature.
  The child is removed and recorded as an argument; its own children are spliced into the host so movers stay reachable.
  Comp applies to lexical hosts and records the child's phonology; spec applies to derived hosts and records a placeholder, since specifier meanings contribute only semantically.
- [merge_nonfinal](crate::context::Context::merge_nonfinal) applies when the child has features remaining beyond the matched one.
  Only the matched feature is stripped; the child stays attached for a later landing site.
  The recorded meaning is the child's own, unless that meaning is quantificational, in which case a variable bound to the quantifier's theta index is recorded instead --- the binding site of restricted quantification.

The final/non-final split keeps the three operators disjoint, so the engine's priority order never shadows a merge.
*/

use crate::{
    context::Context,
    misc::log::targets,
    structures::{
        expression::{Argument, Expression, ExpressionKind, PLACEHOLDER},
        feature::Feature,
        formula::Formula,
    },
};

impl Context {
    /// Merges the single final-feature licensee child of a lexical host as its complement.
    pub fn merge_comp(&self, host: &Expression) -> Option<Expression> {
        if !matches!(host.kind, ExpressionKind::Lexical) {
            return None;
        }
        self.merge_final(host, false)
    }

    /// Merges the single final-feature licensee child of a derived host as its specifier.
    pub fn merge_spec(&self, host: &Expression) -> Option<Expression> {
        if !matches!(host.kind, ExpressionKind::Derived) {
            return None;
        }
        self.merge_final(host, true)
    }

    fn merge_final(&self, host: &Expression, placeholder: bool) -> Option<Expression> {
        let Some(Feature::Licensor(category)) = host.outer() else {
            return None;
        };
        let category = category.clone();

        let matches = host.licensee_children(&category);
        let [index] = matches.as_slice() else {
            return None;
        };
        if host.children[*index].features.len() != 1 {
            return None;
        }

        let mut result = host.clone();
        result.features.remove(0);
        result.kind = ExpressionKind::Derived;

        let child = result.children.remove(*index);

        // Movers attached to the removed child percolate to the host.
        result.children.extend(child.children);

        let token = match placeholder {
            true => PLACEHOLDER.to_owned(),
            false => child.phon,
        };
        log::trace!(target: targets::MERGE, "Discharged {category} against \"{token}\"");

        result.arguments.push(Argument {
            token,
            category,
            meaning: child.meaning,
        });

        Some(result)
    }

    /// Strips the matched licensee from a child which has further features remaining.
    ///
    /// The child stays attached, supporting successive movement.
    pub fn merge_nonfinal(&self, host: &Expression) -> Option<Expression> {
        let Some(Feature::Licensor(category)) = host.outer() else {
            return None;
        };
        let category = category.clone();

        let matches = host.licensee_children(&category);
        let [index] = matches.as_slice() else {
            return None;
        };
        if host.children[*index].features.len() < 2 {
            return None;
        }

        let mut result = host.clone();
        result.features.remove(0);
        result.kind = ExpressionKind::Derived;

        let child = &mut result.children[*index];
        child.features.remove(0);

        let meaning = match child.meaning.is_quantificational() {
            false => child.meaning.clone(),

            true => match child.meaning.theta_index() {
                Some(theta) => Formula::Variable(theta),
                None => {
                    log::warn!(target: targets::MERGE, "Quantificational child without a theta index");
                    return None;
                }
            },
        };

        let token = child.phon.clone();
        log::trace!(target: targets::MERGE, "Passed {category} through \"{token}\"");

        result.arguments.push(Argument {
            token,
            category,
            meaning,
        });

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config,
        structures::{formula::QuantifierKind, lexicon::Lexicon},
    };

    fn context() -> Context {
        Context::from_config(Config::default(), Lexicon::default())
    }

    fn verb_with(children: Vec<Expression>) -> Expression {
        Expression {
            phon: "chase".to_owned(),
            kind: ExpressionKind::Lexical,
            features: vec![Feature::licensor("d"), Feature::licensee("v")],
            arguments: Vec::default(),
            children,
            meaning: Formula::constant("chase"),
        }
    }

    fn noun(token: &str, features: Vec<Feature>) -> Expression {
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
    fn comp_takes_the_single_final_child() {
        let host = verb_with(vec![noun("bob", vec![Feature::licensee("d")])]);

        let merged = context().merge_comp(&host).unwrap();
        assert_eq!(merged.kind, ExpressionKind::Derived);
        assert_eq!(merged.features, vec![Feature::licensee("v")]);
        assert!(merged.children.is_empty());
        assert_eq!(merged.arguments[0].token, "bob");
    }

    #[test]
    fn comp_requires_exactly_one_match() {
        let none = verb_with(vec![]);
        assert!(context().merge_comp(&none).is_none());

        let two = verb_with(vec![
            noun("bob", vec![Feature::licensee("d")]),
            noun("carol", vec![Feature::licensee("d")]),
        ]);
        assert!(context().merge_comp(&two).is_none());
    }

    #[test]
    fn final_and_nonfinal_are_disjoint() {
        // A child with features remaining resists comp and spec, and only nonfinal fires.
        let mover = noun(
            "alice.NOM",
            vec![Feature::licensee("d"), Feature::licensee("nom")],
        );
        let host = verb_with(vec![mover]);

        assert!(context().merge_comp(&host).is_none());

        let moved = context().merge_nonfinal(&host).unwrap();
        assert_eq!(moved.children.len(), 1);
        assert_eq!(moved.children[0].features, vec![Feature::licensee("nom")]);
        assert_eq!(moved.arguments[0].meaning, Formula::constant("alice.NOM"));
    }

    #[test]
    fn nonfinal_binds_a_quantifier_to_its_index() {
        let mut phrase = noun("some girl", vec![Feature::licensee("d"), Feature::licensee("q")]);
        phrase.meaning = Formula::conjunction(
            Formula::IndexedInternal(Box::new(Formula::constant("girl")), -3),
            Formula::Quantifier(QuantifierKind::Exists),
        );
        let host = verb_with(vec![phrase]);

        let moved = context().merge_nonfinal(&host).unwrap();
        assert_eq!(moved.arguments[0].meaning, Formula::Variable(-3));
    }
}
