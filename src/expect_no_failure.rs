use super::failure::{Failure, Outcome};
use super::test_case::{unexpected_error, Action, TestCase, Verdict};

pub struct ExpectNoFailure {
    name: String,
    action: Action,
}

impl ExpectNoFailure {
    pub fn new<S, F>(name: S, action: F) -> Box<dyn TestCase>
        where S: Into<String>,
              F: FnMut() -> Outcome + 'static
    {
        Box::new(ExpectNoFailure {
            name: name.into(),
            action: Box::new(action),
        })
    }
}

impl TestCase for ExpectNoFailure {
    fn name(&self) -> &str {
        &self.name
    }

    fn expectation(&self) -> String {
        "should not panic".to_string()
    }

    fn execute(&mut self) -> Verdict {
        match (self.action)() {
            Ok(()) => Verdict::Passed,
            Err(err) => match err.downcast_ref::<Failure>() {
                Some(failure) => Verdict::failed_because(format!("panic: {}", failure.message())),
                None => unexpected_error(&self.name, &*err),
            },
        }
    }
}

#[cfg(test)]
use std::io;
#[cfg(test)]
use super::assertions;

#[test]
fn test_normal_return_passes() {
    let mut test_case = ExpectNoFailure::new("smart kitty", || {
        let mut i = 0;
        i += 1;
        assertions::assert_eq(i, 1)?;
        Ok(())
    });
    assert_eq!(test_case.name(), "smart kitty");
    assert_eq!(test_case.expectation(), "should not panic");
    assert_eq!(test_case.execute(), Verdict::Passed);
}

#[test]
fn test_failure_fails_with_its_message() {
    let mut test_case = ExpectNoFailure::new("clumsy kitty", || {
        assertions::assert_eq(1, 2)?;
        Ok(())
    });
    assert_eq!(
        test_case.execute(),
        Verdict::failed_because("panic: lhs different from rhs, with lhs = 1 and rhs = 2")
    );
}

#[test]
fn test_empty_failure_uses_placeholder() {
    let mut test_case = ExpectNoFailure::new("silent kitty", || Err(Failure::default().into()));
    assert_eq!(test_case.execute(), Verdict::failed_because("panic: (no message)"));
}

#[test]
fn test_other_errors_fail_as_unexpected() {
    let mut test_case = ExpectNoFailure::new("io kitty", || {
        Err(io::Error::new(io::ErrorKind::Other, "disk full").into())
    });
    assert_eq!(test_case.execute(), Verdict::failed_because("unexpected error: disk full"));
}
