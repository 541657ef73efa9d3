//! Script generation for keyword test cases.
//!
//! A [`KeywordTestCase`] holds ordered steps, each binding values to the
//! slots of a library [`ActionWord`](action_words::ActionWord), plus optional
//! datasets. [`ScriptWriter`] renders it as text in a target [`Dialect`]:
//! [`Cucumber`] for Gherkin feature files and [`Robot`] for Robot Framework
//! test suites. Both dialects share value formatting and the example-table
//! builder; only their decoration differs.

mod examples;
mod format;
mod model;
mod translate;
mod writer;

pub use examples::ExampleTable;
pub use format::{format_cell, format_value};
pub use model::{BindingError, BoundValue, Dataset, KeywordTestCase, KeywordTestStep};
pub use translate::{Label, Translator};
pub use writer::{Cucumber, Dialect, Robot, ScriptContext, ScriptWriter};
