// Copyright 2021 Vladislav Melnik
// SPDX-License-Identifier: MIT

use std::{cell::OnceCell, rc::Rc};

use super::{
    class::{Alternative, Applicative, Functor, Monad},
    closure::{Closure, Thunk, Value},
    error::Violation,
};

/// Runs two independent computations side by side, `D1` first.
///
/// Any two dictionaries compose, including products themselves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Product<D1, D2>(pub D1, pub D2);

impl<D1, D2> Functor for Product<D1, D2>
where
    D1: Functor,
    D2: Functor,
{
    type Of<A: Value> = (D1::Of<A>, D2::Of<A>);

    fn map<A: Value, B: Value>(&self, f: Closure<A, B>, (fa1, fa2): Self::Of<A>) -> Self::Of<B> {
        let fb1 = self.0.map::<A, B>(f.clone(), fa1);
        let fb2 = self.1.map::<A, B>(f, fa2);
        (fb1, fb2)
    }
}

impl<D1, D2> Applicative for Product<D1, D2>
where
    D1: Applicative,
    D2: Applicative,
{
    fn pure<A: Value>(&self, a: A) -> Self::Of<A> {
        (self.0.pure::<A>(a.clone()), self.1.pure::<A>(a))
    }

    fn seq<A: Value, B: Value>(
        &self,
        (ff1, ff2): Self::Of<Closure<A, B>>,
        (fa1, fa2): Self::Of<A>,
    ) -> Self::Of<B> {
        let fb1 = self.0.seq::<A, B>(ff1, fa1);
        let fb2 = self.1.seq::<A, B>(ff2, fa2);
        (fb1, fb2)
    }
}

impl<D1, D2> Monad for Product<D1, D2>
where
    D1: Monad,
    D2: Monad,
{
    fn bind<A: Value, B: Value>(
        &self,
        (fa1, fa2): Self::Of<A>,
        k: Closure<A, Self::Of<B>>,
    ) -> Self::Of<B> {
        let first = k.clone().then(|(fb1, _): (D1::Of<B>, D2::Of<B>)| fb1);
        let second = k.then(|(_, fb2): (D1::Of<B>, D2::Of<B>)| fb2);
        let fb1 = self.0.bind::<A, B>(fa1, first);
        let fb2 = self.1.bind::<A, B>(fa2, second);
        (fb1, fb2)
    }
}

impl<D1, D2> Alternative for Product<D1, D2>
where
    D1: Alternative,
    D2: Alternative,
{
    fn failure<A: Value>(&self) -> Self::Of<A> {
        (self.0.failure::<A>(), self.1.failure::<A>())
    }

    fn or_else<A: Value>(
        &self,
        (fa1, fa2): Self::Of<A>,
        fallback: Thunk<Self::Of<A>>,
    ) -> Self::Of<A> {
        // both layers may recover; the fallback pair is built at most once
        let forced = Rc::new(OnceCell::<Self::Of<A>>::new());
        let first = {
            let (fallback, forced) = (fallback.clone(), forced.clone());
            Thunk::new(move || forced.get_or_init(|| fallback.force()).0.clone())
        };
        let second = Thunk::new(move || forced.get_or_init(|| fallback.force()).1.clone());
        let fa1 = self.0.or_else::<A>(fa1, first);
        let fa2 = self.1.or_else::<A>(fa2, second);
        (fa1, fa2)
    }

    fn violation<A: Value>(&self, violation: Violation) -> Self::Of<A> {
        (self.0.violation::<A>(violation), self.1.violation::<A>(violation))
    }
}
