/*!
The model --- a situation against which formulas are checked.

Entities and events share one underlying name type.
The two collections are disjoint in any sensible model, though nothing structural enforces this.

Monadic predicates map a name to the set of entities or events satisfying it.
Dyadic predicates exist only for the two fixed theta relations, [INTERNAL] and [EXTERNAL], each a set of (event, entity) pairs.

The assignment maps variable indices to entities.
Positive indices resolve lexicon-supplied pronouns; negative indices are bound temporarily during quantifier evaluation and never appear here.
*/

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::structures::formula::Index;

/// The name of the internal theta relation.
pub const INTERNAL: &str = "internal";

/// The name of the external theta relation.
pub const EXTERNAL: &str = "external";

/// A model: domains, an assignment, and predicate extensions.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Model {
    /// The entities of the model.
    pub entities: BTreeSet<String>,

    /// The events of the model.
    pub events: BTreeSet<String>,

    /// A partial mapping from variable index to entity.
    pub assignments: BTreeMap<Index, String>,

    /// Monadic predicate extensions, over entities and events alike.
    pub predicates: BTreeMap<String, BTreeSet<String>>,

    /// Dyadic (event, entity) extensions for the theta relations.
    pub predicates2: BTreeMap<String, BTreeSet<(String, String)>>,
}

impl Model {
    /// The extension of the monadic predicate `name`; empty if unlisted.
    pub fn extension(&self, name: &str) -> impl Iterator<Item = &String> {
        self.predicates.get(name).into_iter().flatten()
    }

    /// The (event, entity) pairs of the dyadic relation `name`; empty if unlisted.
    pub fn relation(&self, name: &str) -> impl Iterator<Item = &(String, String)> {
        self.predicates2.get(name).into_iter().flatten()
    }
}
