//! Combinators for predicates, consumers, and plain functions.
//!
//! Each combinator takes function values and returns a new function value;
//! nothing is dispatched at runtime and no input is called more than once
//! per invocation.

/// Negate a predicate.
pub fn not<T: ?Sized>(predicate: impl Fn(&T) -> bool) -> impl Fn(&T) -> bool {
    move |value| !predicate(value)
}

/// Short-circuit conjunction: `second` is not called when `first` is false.
pub fn and<T: ?Sized>(
    first: impl Fn(&T) -> bool,
    second: impl Fn(&T) -> bool,
) -> impl Fn(&T) -> bool {
    move |value| first(value) && second(value)
}

/// Short-circuit disjunction: `second` is not called when `first` is true.
pub fn or<T: ?Sized>(
    first: impl Fn(&T) -> bool,
    second: impl Fn(&T) -> bool,
) -> impl Fn(&T) -> bool {
    move |value| first(value) || second(value)
}

/// Run `first` then `second` on the same input.
///
/// A panic in `first` unwinds before `second` is ever called.
pub fn and_then<T: ?Sized>(first: impl Fn(&T), second: impl Fn(&T)) -> impl Fn(&T) {
    move |value| {
        first(value);
        second(value);
    }
}

/// Compose two functions: the result applies `f` then `g`.
pub fn compose<A, B, C>(f: impl Fn(A) -> B, g: impl Fn(B) -> C) -> impl Fn(A) -> C {
    move |value| g(f(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn negated_predicates_combine_with_and() {
        let is_null = |s: &Option<&str>| s.is_none();
        let is_empty = |s: &Option<&str>| s.is_some_and(|v| v.is_empty());
        let is_not_null_or_empty = and(not(is_null), not(is_empty));

        assert!(!is_not_null_or_empty(&None));
        assert!(!is_not_null_or_empty(&Some("")));
        assert!(is_not_null_or_empty(&Some("Hello Students")));
    }

    #[test]
    fn or_accepts_either_side() {
        let short = |s: &str| s.len() < 3;
        let shouty = |s: &str| s.chars().all(|c| c.is_uppercase());
        let short_or_shouty = or(short, shouty);

        assert!(short_or_shouty("ab"));
        assert!(short_or_shouty("LOUD"));
        assert!(!short_or_shouty("quiet"));
    }

    #[test]
    fn and_short_circuits() {
        let calls = RefCell::new(0);
        let never = |_: &i32| {
            *calls.borrow_mut() += 1;
            true
        };
        let always_false = |_: &i32| false;

        assert!(!and(always_false, &never)(&1));
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn sequenced_consumers_run_in_order_on_same_input() {
        let log = RefCell::new(Vec::new());
        let upper = |s: &str| log.borrow_mut().push(s.to_uppercase());
        let lower = |s: &str| log.borrow_mut().push(s.to_lowercase());

        and_then(upper, lower)("Hello Students");

        assert_eq!(
            *log.borrow(),
            vec!["HELLO STUDENTS".to_string(), "hello students".to_string()]
        );
    }

    #[test]
    fn compose_applies_left_to_right() {
        let length = |s: &str| s.len();
        let double = |n: usize| n * 2;
        assert_eq!(compose(length, double)("abc"), 6);
    }
}
