use std::error::Error;
use std::io::{self, Stdout, Write};
use super::expect_error::ExpectSpecificError;
use super::expect_failure::ExpectFailure;
use super::expect_no_failure::ExpectNoFailure;
use super::failure::Outcome;
use super::reporter::Reporter;
use super::summary::Summary;
use super::test_case::TestCase;

type TestCaseCollection = Vec<Box<dyn TestCase>>;

/// An ordered test series.
///
/// Meant to be used once: build it, register test cases, `run`, then
/// `display_summary`. Running twice counts every pass again against the
/// same total.
pub struct Framework<W: Write = Stdout> {
    name: String,
    purpose: Option<String>,
    test_cases: TestCaseCollection,
    passed: usize,
    reporter: Reporter<W>,
}

impl Framework<Stdout> {
    pub fn new<S: Into<String>>(name: S) -> Framework<Stdout> {
        Framework::with_writer(name, io::stdout())
    }
}

impl<W: Write> Framework<W> {

    pub fn with_writer<S: Into<String>>(name: S, out: W) -> Framework<W> {
        Framework {
            name: name.into(),
            purpose: None,
            test_cases: Vec::new(),
            passed: 0,
            reporter: Reporter::new(out),
        }
    }

    pub fn with_purpose<S: Into<String>>(mut self, purpose: S) -> Framework<W> {
        self.purpose = Some(purpose.into());
        self
    }

    pub fn colored(mut self, colorize: bool) -> Framework<W> {
        self.reporter.set_colorize(colorize);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.test_cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.test_cases.is_empty()
    }

    pub fn into_writer(self) -> W {
        self.reporter.into_inner()
    }

    pub fn display_greetings(&mut self) -> io::Result<()> {
        self.reporter.greetings(&self.name, self.purpose.as_deref())
    }

    pub fn add(&mut self, test_case: Box<dyn TestCase>) {
        self.test_cases.push(test_case);
    }

    pub fn add_should_not_panic<S, F>(&mut self, name: S, action: F)
        where S: Into<String>,
              F: FnMut() -> Outcome + 'static
    {
        self.add(ExpectNoFailure::new(name, action));
    }

    pub fn add_should_panic<S, F>(&mut self, name: S, action: F)
        where S: Into<String>,
              F: FnMut() -> Outcome + 'static
    {
        self.add(ExpectFailure::new(name, action));
    }

    pub fn add_should_throw<S, E, L, F>(&mut self, name: S, expected: E, label: L, action: F)
        where S: Into<String>,
              E: Error + 'static,
              L: Into<String>,
              F: FnMut() -> Outcome + 'static
    {
        self.add(ExpectSpecificError::new(name, expected, label, action));
    }

    pub fn run(&mut self) -> io::Result<()> {
        info!("running test series `{}` ({} tests)", self.name, self.test_cases.len());
        self.reporter.blank_line()?;
        for test_case in self.test_cases.iter_mut() {
            self.reporter.test_header(test_case.name(), &test_case.expectation())?;
            debug!("executing `{}`", test_case.name());
            let verdict = test_case.execute();
            self.reporter.verdict(&verdict)?;
            if verdict.is_passed() {
                self.passed += 1;
            }
        }
        self.reporter.blank_line()?;
        info!("test series `{}`: {}/{} passed", self.name, self.passed, self.test_cases.len());
        Ok(())
    }

    pub fn summary(&self) -> Summary {
        Summary {
            total: self.test_cases.len(),
            passed: self.passed,
        }
    }

    pub fn display_summary(&mut self) -> io::Result<()> {
        let summary = self.summary();
        self.reporter.summary(&summary)
    }
}

#[cfg(test)]
use super::assertions;
#[cfg(test)]
use super::test_case::Verdict;

#[cfg(test)]
fn framework() -> Framework<Vec<u8>> {
    Framework::with_writer("hello kitty", Vec::new()).colored(false)
}

#[cfg(test)]
fn output(framework: Framework<Vec<u8>>) -> String {
    String::from_utf8(framework.into_writer()).unwrap()
}

#[test]
fn test_runs_in_registration_order() {
    let mut tests = framework();
    tests.add_should_not_panic("first", || Ok(()));
    tests.add_should_panic("second", || Ok(()));
    tests.add_should_not_panic("third", || Ok(()));
    tests.run().unwrap();

    assert_eq!(tests.summary(), Summary { total: 3, passed: 2 });
    assert_eq!(
        output(tests),
        "\ntest first: should not panic -> passed\n\
         test second: should panic -> FAILED\n\
         test third: should not panic -> passed\n\n"
    );
}

#[test]
fn test_duplicate_names_are_reported_twice() {
    let mut tests = framework();
    tests.add_should_not_panic("twin", || Ok(()));
    tests.add_should_not_panic("twin", || assertions::panic("second twin").map_err(Into::into));
    tests.run().unwrap();

    let output = output(tests);
    assert_eq!(output.matches("test twin:").count(), 2);
    assert!(output.contains("FAILED (panic: second twin)"));
}

#[test]
fn test_actions_keep_their_state() {
    let mut counter = 0;
    let mut tests = framework();
    tests.add_should_not_panic("counting kitty", move || {
        counter += 1;
        assertions::assert_eq(counter, 1)?;
        Ok(())
    });
    tests.run().unwrap();
    assert!(tests.summary().all_passed());
}

#[test]
fn test_custom_test_case() {
    struct AlwaysFails;

    impl TestCase for AlwaysFails {
        fn name(&self) -> &str {
            "grumpy kitty"
        }

        fn expectation(&self) -> String {
            "should smile".to_string()
        }

        fn execute(&mut self) -> Verdict {
            Verdict::failed_because("never smiles")
        }
    }

    let mut tests = framework();
    tests.add(Box::new(AlwaysFails));
    assert_eq!(tests.len(), 1);
    tests.run().unwrap();
    assert!(output(tests).contains("test grumpy kitty: should smile -> FAILED (never smiles)\n"));
}

#[test]
fn test_summary_counts_only_after_run() {
    let mut tests = framework();
    tests.add_should_not_panic("lazy kitty", || Ok(()));
    assert_eq!(tests.summary(), Summary { total: 1, passed: 0 });
    tests.run().unwrap();
    assert_eq!(tests.summary(), Summary { total: 1, passed: 1 });
}

#[test]
fn test_running_twice_counts_twice() {
    let mut tests = framework();
    tests.add_should_not_panic("eager kitty", || Ok(()));
    tests.run().unwrap();
    tests.run().unwrap();
    assert_eq!(tests.summary().passed, 2);
}

#[test]
fn test_empty_series() {
    let mut tests = framework();
    assert!(tests.is_empty());
    tests.run().unwrap();
    tests.display_summary().unwrap();
    assert!(output(tests).contains("all 0 tests passed"));
}
