//! A library for parsing small natural-language fragments under a minimalist-grammar feature calculus and checking the resulting logical forms against finite relational models.
//!
//! mg_sem derives expressions with a chart/agenda engine driven by three feature kinds (licensor, licensee, adjunct), assembles Neo-Davidsonian logical forms at spellout, and evaluates those forms over a relational model of entities and events under a conjunctivist restriction to monadic predicates.
//!
//! mg_sem is developed to support investigation into feature-driven derivation and event semantics, whether as a novice or through implementing novel ideas.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context](crate::context::Context).
//!
//! Contexts are built from a configuration and a lexicon.
//! A parse seeds a chart with one entry per lexical item matching a token of the input, then repeatedly applies combination operators until an accepting entry is found or the agenda is exhausted.
//!
//! Internally, and at a high level, a parse is viewed in terms of manipulation of, and relationships between, a handful of structures:
//! - Expressions and their features are defined in [structures].
//! - Derived expressions are stored in a chart, see [db].
//! - The combination operators and the parse loop are factored into [procedures].
//! - Truth evaluation of a composed formula lives in [semantics].
//!
//! Useful starting points, then, may be:
//! - The high-level [parse procedure](crate::procedures::parse) to inspect the dynamics of a parse.
//! - The [formula structure](crate::structures::formula) for the logical-form algebra.
//! - The [evaluator](crate::semantics::eval) for the model-theoretic side.
//!
//! # Examples
//!
//! Parse a fragment sentence and check it against a model.
//!
//! ```rust
//! # use mg_sem::builder::fragment;
//! # use mg_sem::config::Config;
//! # use mg_sem::context::Context;
//! # use mg_sem::semantics::eval::eval;
//! let mut the_context = Context::from_config(Config::default(), fragment::lexicon());
//! let model = fragment::model();
//!
//! let derivation = the_context.parse("ε alice.NOM chase -s bob").unwrap();
//! assert_eq!(eval(&model, &derivation.expression.meaning), Ok(true));
//!
//! assert!(!the_context.recognize("ε alice.NOM blorp"));
//! ```
//!
//! # Logs
//!
//! To help diagnose issues (somewhat) detailed calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/), logs related to the chart and agenda can be filtered with `RUST_LOG=chart …`.

#![allow(mixed_script_confusables)]
#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod db;

pub mod semantics;

pub mod misc;

pub mod reports;
