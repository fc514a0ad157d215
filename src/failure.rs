use std::error::Error;

const NO_MESSAGE: &str = "(no message)";

/// Raised by an action when one of its own checks does not hold.
///
/// A `Failure` travels back to the enclosing test case through `?` and is
/// what the `should panic` / `should not panic` expectations look for.
#[derive(Clone, Debug, Default, PartialEq, Eq, thiserror::Error)]
#[error("{}", or_placeholder(.message))]
pub struct Failure {
    message: String,
}

impl Failure {
    pub fn new<S: Into<String>>(message: S) -> Failure {
        Failure {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        or_placeholder(&self.message)
    }
}

fn or_placeholder(message: &str) -> &str {
    if message.is_empty() {
        NO_MESSAGE
    } else {
        message
    }
}

/// What an action hands back: `Ok(())` for a normal return, or the error it
/// raised.
pub type Outcome = Result<(), Box<dyn Error>>;

#[test]
fn test_message_read_back() {
    assert_eq!(Failure::new("kitty fell").message(), "kitty fell");
    assert_eq!(Failure::new("kitty fell").to_string(), "kitty fell");
}

#[test]
fn test_empty_message_placeholder() {
    assert_eq!(Failure::default().message(), "(no message)");
    assert_eq!(Failure::new("").to_string(), "(no message)");
}

#[test]
fn test_failure_boxes_through_question_mark() {
    fn action() -> Outcome {
        let raised: Result<(), Failure> = Err(Failure::new("boxed"));
        raised?;
        Ok(())
    }

    let err = action().unwrap_err();
    assert_eq!(err.downcast_ref::<Failure>(), Some(&Failure::new("boxed")));
}
