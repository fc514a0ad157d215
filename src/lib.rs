//! A small in-process test harness.
//!
//! Test cases are registered on a [`Framework`] with an expectation about
//! their action: that it returns normally, that it raises a [`Failure`], or
//! that it raises one particular error. The framework runs them in order and
//! prints a verdict line for each, followed by a summary.

#[macro_use] extern crate log;
extern crate colored;
extern crate thiserror;

pub mod assertions;
pub mod expect_error;
pub mod expect_failure;
pub mod expect_no_failure;
pub mod failure;
pub mod framework;
pub mod reporter;
pub mod summary;
pub mod test_case;

pub use assertions::{assert, assert_eq, assert_ne, assert_not, assert_not_with, assert_with, panic, Check};
pub use expect_error::ExpectSpecificError;
pub use expect_failure::ExpectFailure;
pub use expect_no_failure::ExpectNoFailure;
pub use failure::{Failure, Outcome};
pub use framework::Framework;
pub use summary::Summary;
pub use test_case::{Action, TestCase, Verdict};
