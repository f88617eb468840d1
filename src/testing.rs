// Copyright 2021 Vladislav Melnik
// SPDX-License-Identifier: MIT

// Computation types a caller would bring, used by the unit tests.

use std::{cell::RefCell, marker::PhantomData, rc::Rc};

use super::{
    class::{Alternative, Applicative, Functor, Monad},
    closure::{Closure, Thunk, Value},
    control::{LiftWith, MonadControl, RunInBase},
    error::{ShortCircuit, Violation},
};

/// Deferred computation that appends to a log when run.
#[derive(Clone, Copy, Debug, Default)]
pub struct Logged;

type Log = RefCell<Vec<String>>;

pub struct Eff<A>(Rc<dyn Fn(&Log) -> A>);

impl<A> Clone for Eff<A> {
    fn clone(&self) -> Self {
        Eff(self.0.clone())
    }
}

impl<A> Eff<A> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Log) -> A + 'static,
    {
        Eff(Rc::new(f))
    }

    pub fn run(&self) -> (A, Vec<String>) {
        let log = RefCell::new(Vec::new());
        let a = (self.0)(&log);
        (a, log.into_inner())
    }

    fn step(&self, log: &Log) -> A {
        (self.0)(log)
    }
}

pub fn record<A: Value>(label: &str, a: A) -> Eff<A> {
    let label = label.to_string();
    Eff::new(move |log| {
        log.borrow_mut().push(label.clone());
        a.clone()
    })
}

impl Functor for Logged {
    type Of<A: Value> = Eff<A>;

    fn map<A: Value, B: Value>(&self, f: Closure<A, B>, fa: Eff<A>) -> Eff<B> {
        Eff::new(move |log| f.call(fa.step(log)))
    }
}

impl Applicative for Logged {
    fn pure<A: Value>(&self, a: A) -> Eff<A> {
        Eff::new(move |_| a.clone())
    }

    fn seq<A: Value, B: Value>(&self, ff: Eff<Closure<A, B>>, fa: Eff<A>) -> Eff<B> {
        Eff::new(move |log| {
            let f = ff.step(log);
            f.call(fa.step(log))
        })
    }
}

impl Monad for Logged {
    fn bind<A: Value, B: Value>(&self, fa: Eff<A>, k: Closure<A, Eff<B>>) -> Eff<B> {
        Eff::new(move |log| {
            let a = fa.step(log);
            k.call(a).step(log)
        })
    }
}

/// Nondeterminism.
#[derive(Clone, Copy, Debug, Default)]
pub struct Many;

impl Functor for Many {
    type Of<A: Value> = Vec<A>;

    fn map<A: Value, B: Value>(&self, f: Closure<A, B>, fa: Vec<A>) -> Vec<B> {
        fa.into_iter().map(|a| f.call(a)).collect()
    }
}

impl Applicative for Many {
    fn pure<A: Value>(&self, a: A) -> Vec<A> {
        vec![a]
    }

    fn seq<A: Value, B: Value>(&self, ff: Vec<Closure<A, B>>, fa: Vec<A>) -> Vec<B> {
        let mut out = Vec::with_capacity(ff.len() * fa.len());
        for f in &ff {
            for a in &fa {
                out.push(f.call(a.clone()));
            }
        }
        out
    }
}

impl Monad for Many {
    fn bind<A: Value, B: Value>(&self, fa: Vec<A>, k: Closure<A, Vec<B>>) -> Vec<B> {
        fa.into_iter().flat_map(|a| k.call(a)).collect()
    }
}

/// Absence without a reason.
#[derive(Clone, Copy, Debug, Default)]
pub struct Maybe;

impl Functor for Maybe {
    type Of<A: Value> = Option<A>;

    fn map<A: Value, B: Value>(&self, f: Closure<A, B>, fa: Option<A>) -> Option<B> {
        fa.map(|a| f.call(a))
    }
}

impl Applicative for Maybe {
    fn pure<A: Value>(&self, a: A) -> Option<A> {
        Some(a)
    }

    fn seq<A: Value, B: Value>(&self, ff: Option<Closure<A, B>>, fa: Option<A>) -> Option<B> {
        Some(ff?.call(fa?))
    }
}

impl Monad for Maybe {
    fn bind<A: Value, B: Value>(&self, fa: Option<A>, k: Closure<A, Option<B>>) -> Option<B> {
        fa.and_then(|a| k.call(a))
    }
}

impl Alternative for Maybe {
    fn failure<A: Value>(&self) -> Option<A> {
        None
    }

    fn or_else<A: Value>(&self, fa: Option<A>, fallback: Thunk<Option<A>>) -> Option<A> {
        fa.or_else(|| fallback.force())
    }
}

/// Failure with a reason, violations are carried rather than raised.
#[derive(Clone, Copy, Debug, Default)]
pub struct Checked;

impl Functor for Checked {
    type Of<A: Value> = Result<A, ShortCircuit>;

    fn map<A: Value, B: Value>(
        &self,
        f: Closure<A, B>,
        fa: Result<A, ShortCircuit>,
    ) -> Result<B, ShortCircuit> {
        fa.map(|a| f.call(a))
    }
}

impl Applicative for Checked {
    fn pure<A: Value>(&self, a: A) -> Result<A, ShortCircuit> {
        Ok(a)
    }

    fn seq<A: Value, B: Value>(
        &self,
        ff: Result<Closure<A, B>, ShortCircuit>,
        fa: Result<A, ShortCircuit>,
    ) -> Result<B, ShortCircuit> {
        Ok(ff?.call(fa?))
    }
}

impl Monad for Checked {
    fn bind<A: Value, B: Value>(
        &self,
        fa: Result<A, ShortCircuit>,
        k: Closure<A, Result<B, ShortCircuit>>,
    ) -> Result<B, ShortCircuit> {
        fa.and_then(|a| k.call(a))
    }
}

impl Alternative for Checked {
    fn failure<A: Value>(&self) -> Result<A, ShortCircuit> {
        Err(ShortCircuit::ExpectedEmpty)
    }

    fn or_else<A: Value>(
        &self,
        fa: Result<A, ShortCircuit>,
        fallback: Thunk<Result<A, ShortCircuit>>,
    ) -> Result<A, ShortCircuit> {
        match fa {
            Err(ShortCircuit::ExpectedEmpty) => fallback.force(),
            other => other,
        }
    }

    fn violation<A: Value>(&self, violation: Violation) -> Result<A, ShortCircuit> {
        Err(ShortCircuit::InvariantViolation(violation))
    }
}

/// State transformer over any monad.
pub struct StateT<S, M> {
    inner: M,
    phantom_data: PhantomData<fn() -> S>,
}

impl<S, M> Clone for StateT<S, M>
where
    M: Clone,
{
    fn clone(&self) -> Self {
        StateT {
            inner: self.inner.clone(),
            phantom_data: PhantomData,
        }
    }
}

impl<S, M> StateT<S, M>
where
    S: Value,
    M: Monad,
{
    pub fn new(inner: M) -> Self {
        StateT {
            inner,
            phantom_data: PhantomData,
        }
    }

    pub fn get(&self) -> Stateful<S, M, S> {
        let inner = self.inner.clone();
        Stateful::new(move |s: S| inner.pure((s.clone(), s)))
    }

    pub fn put(&self, s: S) -> Stateful<S, M, ()> {
        let inner = self.inner.clone();
        Stateful::new(move |_| inner.pure(((), s.clone())))
    }

    pub fn lift<A: Value>(&self, ma: M::Of<A>) -> Stateful<S, M, A> {
        let inner = self.inner.clone();
        Stateful::new(move |s: S| {
            inner.map::<A, (A, S)>(Closure::new(move |a| (a, s.clone())), ma.clone())
        })
    }
}

pub struct Stateful<S, M, A>(Rc<dyn Fn(S) -> M::Of<(A, S)>>)
where
    S: Value,
    M: Functor,
    A: Value;

impl<S, M, A> Clone for Stateful<S, M, A>
where
    S: Value,
    M: Functor,
    A: Value,
{
    fn clone(&self) -> Self {
        Stateful(self.0.clone())
    }
}

impl<S, M, A> Stateful<S, M, A>
where
    S: Value,
    M: Functor,
    A: Value,
{
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(S) -> M::Of<(A, S)> + 'static,
    {
        Stateful(Rc::new(f))
    }

    pub fn run(&self, s: S) -> M::Of<(A, S)> {
        (self.0)(s)
    }
}

impl<S, M> Functor for StateT<S, M>
where
    S: Value,
    M: Monad,
{
    type Of<A: Value> = Stateful<S, M, A>;

    fn map<A: Value, B: Value>(&self, f: Closure<A, B>, fa: Self::Of<A>) -> Self::Of<B> {
        let inner = self.inner.clone();
        Stateful::new(move |s| {
            let f = f.clone();
            inner.map::<(A, S), (B, S)>(
                Closure::new(move |(a, s): (A, S)| (f.call(a), s)),
                fa.run(s),
            )
        })
    }
}

impl<S, M> Applicative for StateT<S, M>
where
    S: Value,
    M: Monad,
{
    fn pure<A: Value>(&self, a: A) -> Self::Of<A> {
        let inner = self.inner.clone();
        Stateful::new(move |s| inner.pure((a.clone(), s)))
    }

    fn seq<A: Value, B: Value>(
        &self,
        ff: Self::Of<Closure<A, B>>,
        fa: Self::Of<A>,
    ) -> Self::Of<B> {
        let this = self.clone();
        self.bind::<Closure<A, B>, B>(ff, Closure::new(move |f| this.map(f, fa.clone())))
    }
}

impl<S, M> Monad for StateT<S, M>
where
    S: Value,
    M: Monad,
{
    fn bind<A: Value, B: Value>(
        &self,
        fa: Self::Of<A>,
        k: Closure<A, Self::Of<B>>,
    ) -> Self::Of<B> {
        let inner = self.inner.clone();
        Stateful::new(move |s| {
            let k = k.clone();
            inner.bind::<(A, S), (B, S)>(
                fa.run(s),
                Closure::new(move |(a, s): (A, S)| k.call(a).run(s)),
            )
        })
    }
}

impl<S, M> LiftWith for StateT<S, M>
where
    S: Value,
    M: Monad,
{
    type Base = M;
    type Stack = Self;
    type St<A: Value> = (A, S);
    type Runner = S;

    fn base(&self) -> &M {
        &self.inner
    }

    fn stack(&self) -> &Self {
        self
    }

    fn run_in_base<B: Value>(&self, runner: &S, nb: Stateful<S, M, B>) -> M::Of<(B, S)> {
        nb.run(runner.clone())
    }

    fn lift_with<A: Value>(&self, f: Closure<RunInBase<Self>, M::Of<A>>) -> Stateful<S, M, A> {
        let this = self.clone();
        Stateful::new(move |s: S| {
            let ma = f.call(RunInBase::new(this.clone(), s.clone()));
            this.inner.map::<A, (A, S)>(Closure::new(move |a| (a, s.clone())), ma)
        })
    }
}

impl<S, M> MonadControl for StateT<S, M>
where
    S: Value,
    M: Monad,
{
    fn restore<A: Value>(&self, m: M::Of<(A, S)>) -> Stateful<S, M, A> {
        Stateful::new(move |_| m.clone())
    }
}
