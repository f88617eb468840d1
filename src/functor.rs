// Copyright 2021 Vladislav Melnik
// SPDX-License-Identifier: MIT

use super::{
    class::Functor,
    closure::{Closure, Value},
};

/// Keep the effect of `fa`, forget its result.
pub fn discard<F, A>(functor: &F, fa: F::Of<A>) -> F::Of<()>
where
    F: Functor,
    A: Value,
{
    functor.map::<A, ()>(Closure::new(|_| ()), fa)
}

/// Keep the effect of `fa`, tag it with `b`.
pub fn map_rev<F, A, B>(functor: &F, fa: F::Of<A>, b: B) -> F::Of<B>
where
    F: Functor,
    A: Value,
    B: Value,
{
    functor.map_const::<A, B>(b, fa)
}
