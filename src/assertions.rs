//! Checks for use inside actions. Each one hands back `Err(Failure)` when it
//! does not hold, ready to be raised with `?`.

use std::fmt::Debug;
use super::failure::Failure;

pub type Check<T = ()> = Result<T, Failure>;

pub fn panic<S: Into<String>>(message: S) -> Check {
    Err(Failure::new(message))
}

pub fn assert(condition: bool) -> Check {
    assert_with(condition, "assert failed")
}

pub fn assert_with<S: Into<String>>(condition: bool, message: S) -> Check {
    if condition {
        Ok(())
    } else {
        panic(message)
    }
}

pub fn assert_not(condition: bool) -> Check {
    assert_not_with(condition, "assert_not failed")
}

pub fn assert_not_with<S: Into<String>>(condition: bool, message: S) -> Check {
    assert_with(!condition, message)
}

/// Both values show up in the failure message, rendered with `Debug`.
pub fn assert_eq<T>(lhs: T, rhs: T) -> Check
    where T: PartialEq + Debug
{
    if lhs == rhs {
        Ok(())
    } else {
        panic(format!("lhs different from rhs, with lhs = {:?} and rhs = {:?}", lhs, rhs))
    }
}

pub fn assert_ne<T>(lhs: T, rhs: T) -> Check
    where T: PartialEq + Debug
{
    if lhs != rhs {
        Ok(())
    } else {
        panic(format!("either lhs or rhs should be different from {:?}", lhs))
    }
}

#[test]
fn test_panic_always_fails() {
    assert_eq!(panic("kitty"), Err(Failure::new("kitty")));
    assert_eq!(panic(String::new()).unwrap_err().message(), "(no message)");
}

#[test]
fn test_assert() {
    assert_eq!(assert(true), Ok(()));
    assert_eq!(assert(false), Err(Failure::new("assert failed")));
    assert_eq!(assert_with(false, "whiskers"), Err(Failure::new("whiskers")));
}

#[test]
fn test_assert_not() {
    assert_eq!(assert_not(false), Ok(()));
    assert_eq!(assert_not(true), Err(Failure::new("assert_not failed")));
    assert_eq!(assert_not_with(true, "paws"), Err(Failure::new("paws")));
}

#[test]
fn test_assert_eq() {
    assert_eq!(assert_eq(1, 1), Ok(()));
    assert_eq!(assert_eq("kitty", "kitty"), Ok(()));

    let failure = assert_eq(1, 2).unwrap_err();
    assert_eq!(failure.message(), "lhs different from rhs, with lhs = 1 and rhs = 2");
}

#[test]
fn test_assert_ne() {
    assert_eq!(assert_ne(1, 2), Ok(()));

    let failure = assert_ne("a", "a").unwrap_err();
    assert_eq!(failure.message(), "either lhs or rhs should be different from \"a\"");
}
