/// Tally of one run, taken when the summary is asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
}

impl Summary {
    pub fn failed(&self) -> usize {
        self.total.saturating_sub(self.passed)
    }

    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }

    /// NaN when nothing was registered.
    pub fn passed_percentage(&self) -> f64 {
        percentage(self.passed, self.total)
    }

    pub fn failed_percentage(&self) -> f64 {
        percentage(self.failed(), self.total)
    }
}

fn percentage(count: usize, total: usize) -> f64 {
    count as f64 / total as f64 * 100.0
}

#[test]
fn test_all_passed() {
    let summary = Summary { total: 3, passed: 3 };
    assert!(summary.all_passed());
    assert_eq!(summary.failed(), 0);
    assert_eq!(summary.passed_percentage(), 100.0);
}

#[test]
fn test_percentages() {
    let summary = Summary { total: 4, passed: 3 };
    assert!(!summary.all_passed());
    assert_eq!(summary.failed(), 1);
    assert_eq!(summary.passed_percentage(), 75.0);
    assert_eq!(summary.failed_percentage(), 25.0);

    let summary = Summary { total: 3, passed: 1 };
    assert_eq!(summary.passed_percentage(), 1.0 / 3.0 * 100.0);
    assert_eq!(summary.failed_percentage(), 2.0 / 3.0 * 100.0);
}

#[test]
fn test_empty_run() {
    let summary = Summary { total: 0, passed: 0 };
    assert!(summary.all_passed());
    assert!(summary.passed_percentage().is_nan());
    assert!(summary.failed_percentage().is_nan());
}
