// Copyright 2021 Vladislav Melnik
// SPDX-License-Identifier: MIT

use either::Either;

use super::{
    class::{Functor, Monad},
    closure::{Closure, Value},
};

/// Values that read as a yes or a no.
pub trait ToBool {
    fn to_bool(&self) -> bool;
}

impl ToBool for bool {
    fn to_bool(&self) -> bool {
        *self
    }
}

impl<T> ToBool for Option<T> {
    fn to_bool(&self) -> bool {
        self.is_some()
    }
}

impl<T, E> ToBool for Result<T, E> {
    fn to_bool(&self) -> bool {
        self.is_ok()
    }
}

impl<L, R> ToBool for Either<L, R> {
    fn to_bool(&self) -> bool {
        self.is_right()
    }
}

/// `on_true` if `b` reads as true, else `on_false`.
///
/// Both branches are already built, only the choice happens here.
pub fn select<B, T>(on_false: T, on_true: T, b: &B) -> T
where
    B: ToBool + ?Sized,
{
    if b.to_bool() {
        on_true
    } else {
        on_false
    }
}

pub fn bool<A, B, P>(pred: P, on_false: B, on_true: B) -> impl Fn(A) -> B
where
    B: Clone,
    P: Fn(A) -> bool,
{
    move |x| select(on_false.clone(), on_true.clone(), &pred(x))
}

pub fn not_m<F>(functor: &F, mb: F::Of<bool>) -> F::Of<bool>
where
    F: Functor,
{
    functor.map::<bool, bool>(Closure::new(|b: bool| !b), mb)
}

/// Run `ma`; if it reads as true, `mb` decides the result. `mb` is never
/// run otherwise.
pub fn and_m<M, B>(monad: &M, ma: M::Of<B>, mb: M::Of<B>) -> M::Of<B>
where
    M: Monad,
    B: ToBool + Value,
{
    let this = monad.clone();
    let k = Closure::new(move |b: B| {
        if b.to_bool() {
            mb.clone()
        } else {
            tracing::trace!("and_m: short-circuit");
            this.pure::<B>(b)
        }
    });
    monad.bind::<B, B>(ma, k)
}

/// Run `ma`; unless it reads as true, `mb` decides the result. `mb` is
/// never run otherwise.
pub fn or_m<M, B>(monad: &M, ma: M::Of<B>, mb: M::Of<B>) -> M::Of<B>
where
    M: Monad,
    B: ToBool + Value,
{
    let this = monad.clone();
    let k = Closure::new(move |b: B| {
        if b.to_bool() {
            tracing::trace!("or_m: short-circuit");
            this.pure::<B>(b)
        } else {
            mb.clone()
        }
    });
    monad.bind::<B, B>(ma, k)
}
