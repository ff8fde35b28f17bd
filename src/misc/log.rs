/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [chart and agenda](crate::procedures::parse)
    pub const CHART: &str = "chart";

    /// Logs related to the [merge operators](crate::procedures::merge)
    pub const MERGE: &str = "merge";

    /// Logs related to [insertion and adjunction](crate::procedures::insert)
    pub const INSERT: &str = "insert";

    /// Logs related to [spellout](crate::procedures::spellout)
    pub const SPELLOUT: &str = "spellout";

    /// Logs related to [evaluation](crate::semantics::eval)
    pub const EVAL: &str = "eval";
}
