extern crate die;

use die::Framework;
use std::io;

fn hello_kitty() -> Framework<Vec<u8>> {
    Framework::with_writer("hello kitty", Vec::new())
        .with_purpose("Testing the powers of Hello Kitty!")
        .colored(false)
}

fn runtime_error(message: &str) -> io::Error {
    io::Error::new(io::ErrorKind::Other, message)
}

#[test]
fn test_hello_kitty_series() {
    let mut tests = hello_kitty();
    tests.display_greetings().unwrap();

    tests.add_should_not_panic("smart kitty", || {
        let mut i = 0;
        i += 1;
        die::assert_eq(i, 1)?;
        Ok(())
    });
    tests.add_should_panic("kitty panic", || {
        let mut i = 0;
        i += 1;
        die::assert_ne(i, 1)?;
        Ok(())
    });
    tests.add_should_throw("kitty throws up", runtime_error("burps"), "std::io::Error", || {
        Err(runtime_error("burps").into())
    });

    tests.run().unwrap();
    assert_eq!(tests.summary().passed, 3);
    tests.display_summary().unwrap();

    let dashes = "-".repeat(80);
    let expected = format!(
        "{0}\n\
         This is test series:\n\thello kitty\n\
         Its purpose is:\n\tTesting the powers of Hello Kitty!\n\
         {0}\n\
         \n\
         test smart kitty: should not panic -> passed\n\
         test kitty panic: should panic -> passed\n\
         test kitty throws up: should throw std::io::Error(\"burps\") -> passed\n\
         \n\
         {0}\n\
         all 3 tests passed\n\
         {0}\n",
        dashes);
    assert_eq!(String::from_utf8(tests.into_writer()).unwrap(), expected);
}

#[test]
fn test_wrong_message_is_reported() {
    let mut tests = hello_kitty();
    tests.add_should_throw("kitty throws up", runtime_error("burps"), "std::io::Error", || {
        Err(runtime_error("oops").into())
    });
    tests.run().unwrap();

    let summary = tests.summary();
    assert_eq!(summary.failed(), 1);
    assert_eq!(summary.failed_percentage(), 100.0);

    let output = String::from_utf8(tests.into_writer()).unwrap();
    assert!(output.contains(
        "test kitty throws up: should throw std::io::Error(\"burps\") -> FAILED (wrong message: oops)"));
}

#[test]
fn test_mixed_results_summary() {
    let mut tests = hello_kitty();
    tests.add_should_not_panic("calm kitty", || Ok(()));
    tests.add_should_not_panic("silent kitty", || {
        die::panic("")?;
        Ok(())
    });
    tests.add_should_panic("stubborn kitty", || Ok(()));
    tests.add_should_throw("wrong kitty", runtime_error("burps"), "std::io::Error", || {
        die::assert(false)?;
        Ok(())
    });
    tests.run().unwrap();
    tests.display_summary().unwrap();

    let output = String::from_utf8(tests.into_writer()).unwrap();
    let verdicts: Vec<&str> = output.lines().filter(|line| line.starts_with("test ")).collect();
    assert_eq!(verdicts, vec![
        "test calm kitty: should not panic -> passed",
        "test silent kitty: should not panic -> FAILED (panic: (no message))",
        "test stubborn kitty: should panic -> FAILED",
        "test wrong kitty: should throw std::io::Error(\"burps\") -> FAILED (wrong exception type)",
    ]);
    assert!(output.contains("1 tests passed (25.00%)\n"));
    assert!(output.contains("3 tests failed (75.00%)\n"));
    assert!(!output.contains("all 4 tests passed"));
}
