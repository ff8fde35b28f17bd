/*!
Configuration of a context.

All configuration for a context is contained within the context.
There is far less to configure than in a stochastic system: a parse is a deterministic, finite computation, and the options here only adjust its outer envelope.
*/

use serde::{Deserialize, Serialize};

/// The primary configuration structure.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    /// Seed one chart entry per phonologically-null lexical item at the start of each parse.
    ///
    /// Null items are keyed by the empty string and are available at every parse, not tied to a token position.
    pub seed_null_items: bool,

    /// An upper bound on agenda pops, as a safety valve against pathological grammars.
    ///
    /// Exhausting the bound is an ordinary parse failure, logged at warn.
    pub step_limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seed_null_items: true,
            step_limit: None,
        }
    }
}
