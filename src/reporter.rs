use colored::*;
use std::io::{self, Write};
use super::summary::Summary;
use super::test_case::Verdict;

const SEPARATOR_WIDTH: usize = 80;

/// Line-oriented writer for banners, verdicts and summaries.
pub struct Reporter<W> {
    out: W,
    colorize: bool,
}

impl<W: Write> Reporter<W> {

    pub fn new(out: W) -> Reporter<W> {
        Reporter {
            out: out,
            colorize: control::SHOULD_COLORIZE.should_colorize(),
        }
    }

    pub fn set_colorize(&mut self, colorize: bool) {
        self.colorize = colorize;
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn separator(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", "-".repeat(SEPARATOR_WIDTH))
    }

    pub fn blank_line(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    pub fn greetings(&mut self, name: &str, purpose: Option<&str>) -> io::Result<()> {
        self.separator()?;
        writeln!(self.out, "This is test series:\n\t{}", name)?;
        if let Some(purpose) = purpose.filter(|p| !p.is_empty()) {
            writeln!(self.out, "Its purpose is:\n\t{}", purpose)?;
        }
        self.separator()
    }

    /// Starts a verdict line; flushed so it shows while the action runs.
    pub fn test_header(&mut self, name: &str, expectation: &str) -> io::Result<()> {
        write!(self.out, "test {}: {} -> ", name, expectation)?;
        self.out.flush()
    }

    pub fn verdict(&mut self, verdict: &Verdict) -> io::Result<()> {
        if !self.colorize {
            return writeln!(self.out, "{}", verdict);
        }
        match *verdict {
            Verdict::Passed => writeln!(self.out, "{}", "passed".green()),
            Verdict::Failed(None) => writeln!(self.out, "{}", "FAILED".red().bold()),
            Verdict::Failed(Some(ref detail)) => {
                writeln!(self.out, "{} ({})", "FAILED".red().bold(), detail)
            }
        }
    }

    pub fn summary(&mut self, summary: &Summary) -> io::Result<()> {
        self.separator()?;
        if summary.all_passed() {
            let line = format!("all {} tests passed", summary.total);
            self.colored_line(line, Color::Green)?;
        } else {
            let passed = format!("{} tests passed ({:.2}%)",
                                 summary.passed, summary.passed_percentage());
            let failed = format!("{} tests failed ({:.2}%)",
                                 summary.failed(), summary.failed_percentage());
            self.colored_line(passed, Color::Green)?;
            self.colored_line(failed, Color::Red)?;
        }
        self.separator()
    }

    fn colored_line(&mut self, line: String, color: Color) -> io::Result<()> {
        if self.colorize {
            writeln!(self.out, "{}", line.color(color).bold())
        } else {
            writeln!(self.out, "{}", line)
        }
    }
}

#[cfg(test)]
fn plain() -> Reporter<Vec<u8>> {
    let mut reporter = Reporter::new(Vec::new());
    reporter.set_colorize(false);
    reporter
}

#[cfg(test)]
fn written(reporter: Reporter<Vec<u8>>) -> String {
    String::from_utf8(reporter.into_inner()).unwrap()
}

#[test]
fn test_greetings_with_purpose() {
    let mut reporter = plain();
    reporter.greetings("hello kitty", Some("Testing the powers of Hello Kitty!")).unwrap();

    let dashes = "-".repeat(80);
    let expected = format!(
        "{0}\nThis is test series:\n\thello kitty\nIts purpose is:\n\tTesting the powers of Hello Kitty!\n{0}\n",
        dashes);
    assert_eq!(written(reporter), expected);
}

#[test]
fn test_greetings_skip_empty_purpose() {
    let mut reporter = plain();
    reporter.greetings("hello kitty", Some("")).unwrap();
    let output = written(reporter);
    assert!(!output.contains("Its purpose is:"));
    assert_eq!(output.lines().count(), 4);
}

#[test]
fn test_verdict_line() {
    let mut reporter = plain();
    reporter.test_header("kitty", "should panic").unwrap();
    reporter.verdict(&Verdict::failed()).unwrap();
    assert_eq!(written(reporter), "test kitty: should panic -> FAILED\n");
}

#[test]
fn test_summary_all_passed() {
    let mut reporter = plain();
    reporter.summary(&Summary { total: 3, passed: 3 }).unwrap();
    let output = written(reporter);
    assert!(output.contains("all 3 tests passed\n"));
    assert!(!output.contains('%'));
}

#[test]
fn test_summary_with_failures() {
    let mut reporter = plain();
    reporter.summary(&Summary { total: 4, passed: 3 }).unwrap();
    let output = written(reporter);
    assert!(output.contains("3 tests passed (75.00%)\n"));
    assert!(output.contains("1 tests failed (25.00%)\n"));
}
