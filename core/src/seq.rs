//! Adapters that turn a single value into a one-element sequence.
//!
//! `yield_one` gives an `Iterator`, `yield_one_async` a `Stream`. Neither
//! does any work beyond handing the value over once, and every call builds a
//! fresh sequence, so they can be created again from the same value at will.

use futures::future::{self, Ready};
use futures::stream::{self, Once};

/// One-element iterator over `value`.
pub fn yield_one<T>(value: T) -> std::iter::Once<T> {
    std::iter::once(value)
}

/// One-element stream over `value`. The element is ready on the first poll.
pub fn yield_one_async<T>(value: T) -> Once<Ready<T>> {
    stream::once(future::ready(value))
}

/// Method-call form of [`yield_one`] and [`yield_one_async`].
pub trait YieldExt: Sized {
    fn yield_one(self) -> std::iter::Once<Self> {
        yield_one(self)
    }

    fn yield_one_async(self) -> Once<Ready<Self>> {
        yield_one_async(self)
    }
}

impl<T> YieldExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[test]
    fn yield_one_produces_the_value_once() {
        let items: Vec<_> = yield_one("foo").collect();
        assert_eq!(items, vec!["foo"]);
    }

    #[test]
    fn yield_one_terminates_after_the_value() {
        let mut it = yield_one(7);
        assert_eq!(it.size_hint(), (1, Some(1)));
        assert_eq!(it.next(), Some(7));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn yield_one_is_restartable() {
        let value = String::from("foo");
        let first = yield_one(value.clone());
        let again = first.clone();
        assert_eq!(first.collect::<Vec<_>>(), vec!["foo".to_string()]);
        assert_eq!(again.collect::<Vec<_>>(), vec!["foo".to_string()]);
        assert_eq!(yield_one(value).count(), 1);
    }

    #[tokio::test]
    async fn yield_one_async_produces_the_value_once() {
        let items: Vec<_> = yield_one_async("foo").collect().await;
        assert_eq!(items, vec!["foo"]);
    }

    #[tokio::test]
    async fn yield_one_async_signals_end_after_the_value() {
        let mut s = yield_one_async(42);
        assert_eq!(s.next().await, Some(42));
        assert_eq!(s.next().await, None);
    }

    #[tokio::test]
    async fn yield_one_async_is_restartable() {
        for _ in 0..3 {
            let items: Vec<_> = yield_one_async(vec![1, 2]).collect().await;
            assert_eq!(items, vec![vec![1, 2]]);
        }
    }

    #[tokio::test]
    async fn extension_trait_matches_free_functions() {
        assert_eq!("bar".yield_one().collect::<Vec<_>>(), vec!["bar"]);
        let items: Vec<_> = "bar".yield_one_async().collect().await;
        assert_eq!(items, vec!["bar"]);
    }
}
