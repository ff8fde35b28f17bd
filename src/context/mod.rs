/*!
The context --- which holds a lexicon and within which parses take place.

A context owns the two monotonic counters (entry ids, theta indices) whose uniqueness across parses underwrites the retired-set and variable-binding invariants.
Chart and agenda, by contrast, are scoped to a single parse call.

# Example
```rust
# use mg_sem::builder::fragment;
# use mg_sem::config::Config;
# use mg_sem::context::Context;
let mut the_context = Context::from_config(Config::default(), fragment::lexicon());

assert!(the_context.recognize("ε alice.NOM run -s quickly"));
assert!(!the_context.recognize("ε alice.NOM run"));
```
*/

mod counters;
pub use counters::Counters;

use crate::{config::Config, structures::lexicon::Lexicon};

/// A context: configuration, lexicon, and counters.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// The lexicon parses draw from.
    pub lexicon: Lexicon,

    /// Counters related to the context.
    pub counters: Counters,
}

impl Context {
    /// A context with the given configuration and lexicon.
    pub fn from_config(config: Config, lexicon: Lexicon) -> Self {
        Context {
            config,
            lexicon,
            counters: Counters::default(),
        }
    }
}
