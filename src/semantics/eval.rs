/*!
The evaluator --- truth of a formula in a model.

Evaluation is by `has_value`: a formula is checked against a [Value], which is either a truth value or a specific entity (events included, as names of the same underlying type).
`eval(model, formula)` is `has_value(True, ...)`.

A bare constant is false at a truth value --- it only holds *of* something --- while at an entity it holds iff the entity is in the constant's predicate extension, or names the entity itself.
[Closure](Formula::Closure), [Int](Formula::Int), and [Ext](Formula::Ext) quantify existentially over the model's events when queried at a truth value, and recurse through the theta relations when queried at an event.

Restricted quantification is recognized structurally, as a conjunction whose left branch pairs an indexed restrictor with a quantifier tag.
The domain is the restrictor's extension over the model's entities, never the whole domain, and the binding for the restrictor's index is extended and restored around each test of the body, so sibling evaluations see no leaked assignment.

The evaluator mutates only its own scratch assignment.
`eval` is a pure function of the model and formula.
*/

use std::collections::BTreeMap;

use crate::{
    misc::log::targets,
    semantics::model::{Model, EXTERNAL, INTERNAL},
    structures::formula::{Formula, Index, QuantifierKind},
    types::err::EvalError,
};

/// The value domain of evaluation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Value<'m> {
    True,
    False,
    Entity(&'m str),
}

/// Whether `formula` is true in `model`.
pub fn eval(model: &Model, formula: &Formula) -> Result<bool, EvalError> {
    let result = Evaluator::new(model).has_value(Value::True, formula);
    log::debug!(target: targets::EVAL, "{formula} ⇒ {result:?}");
    result
}

/// An evaluation pass over one model, with a scratch assignment for quantifier bindings.
pub struct Evaluator<'m> {
    model: &'m Model,

    /// The model assignment, extended and restored around quantifier bodies.
    assignment: BTreeMap<Index, String>,
}

impl<'m> Evaluator<'m> {
    pub fn new(model: &'m Model) -> Self {
        Evaluator {
            model,
            assignment: model.assignments.clone(),
        }
    }

    /// Whether `formula` holds at `value`.
    pub fn has_value(&mut self, value: Value<'m>, formula: &Formula) -> Result<bool, EvalError> {
        match formula {
            Formula::Constant(name) => match value {
                Value::Entity(entity) => Ok(self
                    .model
                    .extension(name)
                    .any(|member| member == entity)
                    || (entity == name && self.model.entities.contains(entity))),

                _ => Ok(false),
            },

            Formula::Variable(index) => match value {
                Value::Entity(entity) => match self.assignment.get(index) {
                    Some(bound) => Ok(bound == entity),
                    None => Err(EvalError::UnboundVariable),
                },

                _ => Err(EvalError::BareVariable),
            },

            Formula::Conjunction(left, right) => {
                if let Formula::Conjunction(restrictor, tag) = left.as_ref() {
                    if let Formula::Quantifier(kind) = tag.as_ref() {
                        return self.quantified(value, restrictor, *kind, right);
                    }
                }
                Ok(self.has_value(value, left)? && self.has_value(value, right)?)
            }

            Formula::Closure(inner) => match value {
                Value::Entity(_) => self.has_value(value, inner),
                Value::True => self.over_events(inner),
                Value::False => Ok(!self.over_events(inner)?),
            },

            Formula::Int(inner) => self.theta(value, INTERNAL, inner),
            Formula::Ext(inner) => self.theta(value, EXTERNAL, inner),

            // A bare tag holds of nothing.
            Formula::Quantifier(_) => Ok(false),

            Formula::IndexedInternal(..) => Err(EvalError::StrayThetaIndex),
        }
    }

    /// Existential over the model's events.
    fn over_events(&mut self, inner: &Formula) -> Result<bool, EvalError> {
        let model = self.model;
        for event in &model.events {
            if self.has_value(Value::Entity(event), inner)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Whether some participant of `value` under `relation` satisfies `inner`.
    fn theta(
        &mut self,
        value: Value<'m>,
        relation: &str,
        inner: &Formula,
    ) -> Result<bool, EvalError> {
        match value {
            Value::Entity(event) => {
                let model = self.model;
                for (listed, participant) in model.relation(relation) {
                    if listed == event && self.has_value(Value::Entity(participant), inner)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }

            Value::True => {
                let model = self.model;
                for event in &model.events {
                    if self.theta(Value::Entity(event), relation, inner)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }

            Value::False => Ok(!self.theta(Value::True, relation, inner)?),
        }
    }

    /// Restricted quantification of `body` over the extension of `restrictor`.
    fn quantified(
        &mut self,
        value: Value<'m>,
        restrictor: &Formula,
        kind: QuantifierKind,
        body: &Formula,
    ) -> Result<bool, EvalError> {
        let Formula::IndexedInternal(restriction, index) = restrictor else {
            return Err(EvalError::NonIndexedRestrictor);
        };

        if matches!(value, Value::False) {
            return Ok(!self.quantified(Value::True, restrictor, kind, body)?);
        }

        let model = self.model;
        let mut domain = Vec::default();
        for entity in &model.entities {
            if self.has_value(Value::Entity(entity), restriction)? {
                domain.push(entity);
            }
        }

        for entity in domain {
            let previous = self.assignment.insert(*index, entity.clone());
            let result = self.has_value(value, body);
            match previous {
                Some(bound) => self.assignment.insert(*index, bound),
                None => self.assignment.remove(index),
            };
            match (kind, result?) {
                (QuantifierKind::Exists, true) => return Ok(true),
                (QuantifierKind::Forall, false) => return Ok(false),
                _ => {}
            }
        }

        // Vacuous domain: no witness, no counterexample.
        Ok(matches!(kind, QuantifierKind::Forall))
    }
}
