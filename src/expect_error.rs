use std::any::type_name;
use std::error::Error;
use super::failure::Outcome;
use super::test_case::{Action, TestCase, Verdict};

/// Expects the action to raise an `E` whose message matches `expected`'s
/// exactly.
pub struct ExpectSpecificError<E> {
    name: String,
    expected: E,
    label: String,
    action: Action,
}

impl<E> ExpectSpecificError<E>
    where E: Error + 'static
{
    pub fn new<S, L, F>(name: S, expected: E, label: L, action: F) -> Box<dyn TestCase>
        where S: Into<String>,
              L: Into<String>,
              F: FnMut() -> Outcome + 'static
    {
        Box::new(ExpectSpecificError {
            name: name.into(),
            expected: expected,
            label: label.into(),
            action: Box::new(action),
        })
    }

    /// Like `new`, labelling the expected error with its Rust type name.
    pub fn labelled_by_type<S, F>(name: S, expected: E, action: F) -> Box<dyn TestCase>
        where S: Into<String>,
              F: FnMut() -> Outcome + 'static
    {
        ExpectSpecificError::new(name, expected, type_name::<E>(), action)
    }
}

impl<E> TestCase for ExpectSpecificError<E>
    where E: Error + 'static
{
    fn name(&self) -> &str {
        &self.name
    }

    fn expectation(&self) -> String {
        format!("should throw {}(\"{}\")", self.label, self.expected)
    }

    fn execute(&mut self) -> Verdict {
        let err = match (self.action)() {
            Ok(()) => return Verdict::failed_because("didn't throw anything"),
            Err(err) => err,
        };
        match err.downcast_ref::<E>() {
            Some(actual) => {
                let actual = actual.to_string();
                if actual == self.expected.to_string() {
                    Verdict::Passed
                } else {
                    Verdict::failed_because(format!("wrong message: {}", actual))
                }
            }
            None => {
                debug!("test `{}` raised `{}`, not a {}", self.name, err, self.label);
                Verdict::failed_because("wrong exception type")
            }
        }
    }
}

#[cfg(test)]
use super::failure::Failure;

#[cfg(test)]
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct RuntimeError(&'static str);

#[test]
fn test_expectation_line() {
    let test_case = ExpectSpecificError::new(
        "kitty throws up", RuntimeError("burps"), "RuntimeError", || Ok(()));
    assert_eq!(test_case.expectation(), "should throw RuntimeError(\"burps\")");
}

#[test]
fn test_matching_message_passes() {
    let mut test_case = ExpectSpecificError::new(
        "kitty throws up", RuntimeError("burps"), "RuntimeError",
        || Err(RuntimeError("burps").into()));
    assert_eq!(test_case.execute(), Verdict::Passed);
}

#[test]
fn test_wrong_message_fails() {
    let mut test_case = ExpectSpecificError::new(
        "kitty throws up", RuntimeError("burps"), "RuntimeError",
        || Err(RuntimeError("oops").into()));
    assert_eq!(test_case.execute(), Verdict::failed_because("wrong message: oops"));
}

#[test]
fn test_message_comparison_is_exact() {
    let mut test_case = ExpectSpecificError::new(
        "kitty throws up", RuntimeError("burps"), "RuntimeError",
        || Err(RuntimeError("burps ").into()));
    assert_eq!(test_case.execute(), Verdict::failed_because("wrong message: burps "));
}

#[test]
fn test_no_error_fails() {
    let mut test_case = ExpectSpecificError::new(
        "kitty holds it in", RuntimeError("burps"), "RuntimeError", || Ok(()));
    assert_eq!(test_case.execute(), Verdict::failed_because("didn't throw anything"));
}

#[test]
fn test_failure_is_the_wrong_type() {
    let mut test_case = ExpectSpecificError::new(
        "kitty panics", RuntimeError("burps"), "RuntimeError",
        || Err(Failure::new("burps").into()));
    assert_eq!(test_case.execute(), Verdict::failed_because("wrong exception type"));
}

#[test]
fn test_failure_can_be_expected() {
    let mut test_case = ExpectSpecificError::new(
        "kitty panics", Failure::new("burps"), "Failure",
        || Err(Failure::new("burps").into()));
    assert_eq!(test_case.execute(), Verdict::Passed);
}

#[test]
fn test_labelled_by_type() {
    let test_case = ExpectSpecificError::labelled_by_type(
        "kitty throws up", Failure::new("burps"), || Ok(()));
    assert_eq!(test_case.expectation(), "should throw die::failure::Failure(\"burps\")");
}
