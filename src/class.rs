// Copyright 2021 Vladislav Melnik
// SPDX-License-Identifier: MIT

//! Capability dictionaries.
//!
//! A dictionary is an ordinary value implementing one of the traits below,
//! passed to every combinator as its first argument. `Of<A>` is the
//! computation type the dictionary works over. Dictionaries are immutable
//! and cheap to clone, so a combinator may capture one in a continuation.

use super::{
    closure::{Closure, Thunk, Value},
    error::Violation,
};

pub trait Functor: Clone + 'static {
    type Of<A: Value>: Value;

    fn map<A: Value, B: Value>(&self, f: Closure<A, B>, fa: Self::Of<A>) -> Self::Of<B>;

    /// Replace the result of `fa` with `b`, keeping its effect.
    fn map_const<A: Value, B: Value>(&self, b: B, fa: Self::Of<A>) -> Self::Of<B> {
        self.map::<A, B>(Closure::new(move |_| b.clone()), fa)
    }
}

pub trait Applicative: Functor {
    fn pure<A: Value>(&self, a: A) -> Self::Of<A>;

    /// Runs the effect of `ff` first, then the effect of `fa`.
    fn seq<A: Value, B: Value>(&self, ff: Self::Of<Closure<A, B>>, fa: Self::Of<A>) -> Self::Of<B>;
}

pub trait Monad: Applicative {
    fn bind<A: Value, B: Value>(&self, fa: Self::Of<A>, k: Closure<A, Self::Of<B>>) -> Self::Of<B>;
}

pub trait Alternative: Applicative {
    /// Expected, recoverable absence of a result.
    fn failure<A: Value>(&self) -> Self::Of<A>;

    /// Recover from [`Alternative::failure`]. The fallback is only forced if
    /// the computation's semantics need it.
    fn or_else<A: Value>(&self, fa: Self::Of<A>, fallback: Thunk<Self::Of<A>>) -> Self::Of<A>;

    /// Fatal failure, never recovered by `or_else`.
    ///
    /// The default aborts the current thread. Computation types with an
    /// error channel should carry the violation instead.
    fn violation<A: Value>(&self, violation: Violation) -> Self::Of<A> {
        tracing::error!(%violation, "invariant violated");
        panic!("{}", violation)
    }
}
