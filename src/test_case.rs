use std::error::Error;
use std::fmt;
use super::failure::Outcome;

/// The unit of work a test case runs.
pub type Action = Box<dyn FnMut() -> Outcome>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    /// Failed, with an optional detail printed in parentheses.
    Failed(Option<String>),
}

impl Verdict {
    pub fn failed() -> Verdict {
        Verdict::Failed(None)
    }

    pub fn failed_because<S: Into<String>>(detail: S) -> Verdict {
        Verdict::Failed(Some(detail.into()))
    }

    pub fn is_passed(&self) -> bool {
        *self == Verdict::Passed
    }

    pub fn detail(&self) -> Option<&str> {
        match *self {
            Verdict::Failed(Some(ref detail)) => Some(detail),
            _ => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Verdict::Passed => write!(f, "passed"),
            Verdict::Failed(None) => write!(f, "FAILED"),
            Verdict::Failed(Some(ref detail)) => write!(f, "FAILED ({})", detail),
        }
    }
}

pub trait TestCase {
    fn name(&self) -> &str;

    /// What the test case expects from its action, e.g. `should panic`.
    fn expectation(&self) -> String;

    /// Runs the action once and classifies what it did.
    fn execute(&mut self) -> Verdict;
}

/// Verdict for an error the test case was not written to expect.
pub fn unexpected_error(name: &str, err: &dyn Error) -> Verdict {
    warn!("test `{}` raised an unexpected error: {}", name, err);
    Verdict::failed_because(format!("unexpected error: {}", err))
}

#[test]
fn test_verdict_display() {
    assert_eq!(Verdict::Passed.to_string(), "passed");
    assert_eq!(Verdict::failed().to_string(), "FAILED");
    assert_eq!(Verdict::failed_because("panic: boom").to_string(), "FAILED (panic: boom)");
}

#[test]
fn test_verdict_detail() {
    assert!(Verdict::Passed.is_passed());
    assert!(!Verdict::failed().is_passed());
    assert_eq!(Verdict::failed().detail(), None);
    assert_eq!(Verdict::failed_because("why").detail(), Some("why"));
}
