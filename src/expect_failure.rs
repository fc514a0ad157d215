use super::failure::{Failure, Outcome};
use super::test_case::{unexpected_error, Action, TestCase, Verdict};

pub struct ExpectFailure {
    name: String,
    action: Action,
}

impl ExpectFailure {
    pub fn new<S, F>(name: S, action: F) -> Box<dyn TestCase>
        where S: Into<String>,
              F: FnMut() -> Outcome + 'static
    {
        Box::new(ExpectFailure {
            name: name.into(),
            action: Box::new(action),
        })
    }
}

impl TestCase for ExpectFailure {
    fn name(&self) -> &str {
        &self.name
    }

    fn expectation(&self) -> String {
        "should panic".to_string()
    }

    fn execute(&mut self) -> Verdict {
        match (self.action)() {
            Ok(()) => Verdict::failed(),
            Err(ref err) if err.is::<Failure>() => Verdict::Passed,
            Err(err) => unexpected_error(&self.name, &*err),
        }
    }
}

#[cfg(test)]
use std::fmt;
#[cfg(test)]
use super::assertions;

#[test]
fn test_failure_passes() {
    let mut test_case = ExpectFailure::new("kitty panic", || {
        let mut i = 0;
        i += 1;
        assertions::assert_ne(i, 1)?;
        Ok(())
    });
    assert_eq!(test_case.expectation(), "should panic");
    assert_eq!(test_case.execute(), Verdict::Passed);
}

#[test]
fn test_any_message_passes() {
    let mut test_case = ExpectFailure::new("quiet panic", || Err(Failure::default().into()));
    assert_eq!(test_case.execute(), Verdict::Passed);
}

#[test]
fn test_normal_return_fails() {
    let mut test_case = ExpectFailure::new("calm kitty", || Ok(()));
    assert_eq!(test_case.execute(), Verdict::failed());
    assert_eq!(test_case.execute().to_string(), "FAILED");
}

#[test]
fn test_other_errors_fail_as_unexpected() {
    #[derive(Debug)]
    struct Hairball;

    impl fmt::Display for Hairball {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "hairball")
        }
    }

    impl std::error::Error for Hairball {}

    let mut test_case = ExpectFailure::new("coughing kitty", || Err(Hairball.into()));
    assert_eq!(test_case.execute(), Verdict::failed_because("unexpected error: hairball"));
}
