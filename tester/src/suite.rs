use die::Framework;
use std::io::{self, Write};

fn runtime_error(message: &str) -> io::Error {
    io::Error::new(io::ErrorKind::Other, message)
}

/// Registers the Hello Kitty series on `tests`.
pub fn hello_kitty<W: Write>(tests: &mut Framework<W>) {
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
}

#[test]
fn test_hello_kitty_passes() {
    let mut tests = Framework::with_writer("hello kitty", Vec::new()).colored(false);
    hello_kitty(&mut tests);
    assert_eq!(tests.len(), 3);
    tests.run().unwrap();
    assert!(tests.summary().all_passed());
}
