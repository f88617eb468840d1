// Copyright 2021 Vladislav Melnik
// SPDX-License-Identifier: MIT

use super::{
    class::{Alternative, Applicative},
    closure::{Closure, Thunk, Value},
    error::Violation,
};

/// `action` if `cond`, otherwise `pure(())`.
///
/// `action` is already built when this is called, defer its construction
/// at the call site if building it has a cost.
pub fn when<M>(monad: &M, cond: bool, action: M::Of<()>) -> M::Of<()>
where
    M: Applicative,
{
    if cond {
        action
    } else {
        monad.pure(())
    }
}

pub fn unless<M>(monad: &M, cond: bool, action: M::Of<()>) -> M::Of<()>
where
    M: Applicative,
{
    when(monad, !cond, action)
}

/// Recoverable failure unless `cond` holds.
pub fn guard<F>(alt: &F, cond: bool) -> F::Of<()>
where
    F: Alternative,
{
    if cond {
        alt.pure(())
    } else {
        tracing::trace!("guard failed");
        alt.failure::<()>()
    }
}

/// Fatal failure unless `cond` holds.
///
/// Goes through [`Alternative::violation`], never through `failure`, so
/// neither `or_else` nor [`optional`] can swallow it.
#[track_caller]
pub fn assert<F>(alt: &F, cond: bool) -> F::Of<()>
where
    F: Alternative,
{
    if cond {
        alt.pure(())
    } else {
        alt.violation::<()>(Violation::here())
    }
}

/// Turn a recoverable failure of `action` into `None`.
pub fn optional<F, A>(alt: &F, action: F::Of<A>) -> F::Of<Option<A>>
where
    F: Alternative,
    A: Value,
{
    let found = alt.map::<A, Option<A>>(Closure::new(Some), action);
    let fallback = {
        let alt = alt.clone();
        Thunk::new(move || {
            tracing::trace!("optional: absorbed failure");
            alt.pure::<Option<A>>(None)
        })
    };
    alt.or_else::<Option<A>>(found, fallback)
}
