// Copyright 2021 Vladislav Melnik
// SPDX-License-Identifier: MIT

//! Escaping a transformer stack into its base monad.
//!
//! A stack computation can be run inside the base monad if the stack's
//! remaining state is returned alongside the result (`St<A>`), and later
//! restored. This lets code that only knows the base monad, for example a
//! bracket or a finalizer, work on stack computations.

use super::{
    class::{Applicative, Functor, Monad},
    closure::{Closure, Value},
};

pub type BaseOf<C, A> = <<C as LiftWith>::Base as Functor>::Of<A>;

pub type StackOf<C, A> = <<C as LiftWith>::Stack as Functor>::Of<A>;

/// The part shared by [`MonadControl`] and [`MonadControlT`].
pub trait LiftWith: Clone + 'static {
    type Base: Monad;
    type Stack: Monad;
    /// A result of the stack together with whatever the stack needs to
    /// resume.
    type St<A: Value>: Value;
    /// The stack's state at the moment of the escape.
    type Runner: Value;

    fn base(&self) -> &Self::Base;

    fn stack(&self) -> &Self::Stack;

    fn run_in_base<B: Value>(
        &self,
        runner: &Self::Runner,
        nb: StackOf<Self, B>,
    ) -> BaseOf<Self, Self::St<B>>;

    /// Run `f` in the base monad, handing it a way to run stack
    /// computations from the current state.
    fn lift_with<A: Value>(&self, f: Closure<RunInBase<Self>, BaseOf<Self, A>>) -> StackOf<Self, A>;
}

/// One layer: the stack sits directly on the base.
pub trait MonadControl: LiftWith {
    fn restore<A: Value>(&self, m: BaseOf<Self, Self::St<A>>) -> StackOf<Self, A>;
}

/// Any number of layers.
pub trait MonadControlT: LiftWith {
    fn restore_t<A: Value>(&self, st: Self::St<A>) -> StackOf<Self, A>;
}

/// Runs stack computations in the base monad, starting from the state
/// captured by `lift_with`.
pub struct RunInBase<C>
where
    C: LiftWith,
{
    control: C,
    runner: C::Runner,
}

impl<C> Clone for RunInBase<C>
where
    C: LiftWith,
{
    fn clone(&self) -> Self {
        RunInBase {
            control: self.control.clone(),
            runner: self.runner.clone(),
        }
    }
}

impl<C> RunInBase<C>
where
    C: LiftWith,
{
    pub fn new(control: C, runner: C::Runner) -> Self {
        RunInBase { control, runner }
    }

    pub fn run<B: Value>(&self, nb: StackOf<C, B>) -> BaseOf<C, C::St<B>> {
        self.control.run_in_base(&self.runner, nb)
    }

    pub fn runner(&self) -> &C::Runner {
        &self.runner
    }
}

/// A monad is its own base.
pub struct Refl<M>(M);

impl<M> Clone for Refl<M>
where
    M: Clone,
{
    fn clone(&self) -> Self {
        Refl(self.0.clone())
    }
}

impl<M> Refl<M>
where
    M: Monad,
{
    pub fn new(monad: M) -> Self {
        Refl(monad)
    }
}

impl<M> LiftWith for Refl<M>
where
    M: Monad,
{
    type Base = M;
    type Stack = M;
    type St<A: Value> = A;
    type Runner = ();

    fn base(&self) -> &M {
        &self.0
    }

    fn stack(&self) -> &M {
        &self.0
    }

    fn run_in_base<B: Value>(&self, _: &(), nb: M::Of<B>) -> M::Of<B> {
        nb
    }

    fn lift_with<A: Value>(&self, f: Closure<RunInBase<Self>, M::Of<A>>) -> M::Of<A> {
        f.call(RunInBase::new(self.clone(), ()))
    }
}

impl<M> MonadControlT for Refl<M>
where
    M: Monad,
{
    fn restore_t<A: Value>(&self, st: A) -> M::Of<A> {
        self.0.pure(st)
    }
}

/// `upper` on top of everything `lower` controls.
pub struct Stacked<U, L> {
    upper: U,
    lower: L,
}

impl<U, L> Clone for Stacked<U, L>
where
    U: Clone,
    L: Clone,
{
    fn clone(&self) -> Self {
        Stacked {
            upper: self.upper.clone(),
            lower: self.lower.clone(),
        }
    }
}

impl<U, L> Stacked<U, L>
where
    U: MonadControl,
    L: MonadControlT<Stack = U::Base>,
{
    pub fn new(upper: U, lower: L) -> Self {
        Stacked { upper, lower }
    }

    pub fn upper(&self) -> &U {
        &self.upper
    }

    pub fn lower(&self) -> &L {
        &self.lower
    }
}

impl<U, L> LiftWith for Stacked<U, L>
where
    U: MonadControl,
    L: MonadControlT<Stack = U::Base>,
{
    type Base = L::Base;
    type Stack = U::Stack;
    type St<A: Value> = L::St<U::St<A>>;
    type Runner = (U::Runner, L::Runner);

    fn base(&self) -> &L::Base {
        self.lower.base()
    }

    fn stack(&self) -> &U::Stack {
        self.upper.stack()
    }

    fn run_in_base<B: Value>(
        &self,
        runner: &Self::Runner,
        nb: StackOf<Self, B>,
    ) -> BaseOf<Self, Self::St<B>> {
        let (upper_runner, lower_runner) = runner;
        let nb = self.upper.run_in_base::<B>(upper_runner, nb);
        self.lower.run_in_base::<U::St<B>>(lower_runner, nb)
    }

    fn lift_with<A: Value>(&self, f: Closure<RunInBase<Self>, BaseOf<Self, A>>) -> StackOf<Self, A> {
        let this = self.clone();
        self.upper.lift_with::<A>(Closure::new(move |upper_run: RunInBase<U>| {
            let (this, f) = (this.clone(), f.clone());
            let lower = this.lower.clone();
            lower.lift_with::<A>(Closure::new(move |lower_run: RunInBase<L>| {
                let runner = (upper_run.runner.clone(), lower_run.runner);
                f.call(RunInBase::new(this.clone(), runner))
            }))
        }))
    }
}

impl<U, L> MonadControlT for Stacked<U, L>
where
    U: MonadControl,
    L: MonadControlT<Stack = U::Base>,
{
    fn restore_t<A: Value>(&self, st: Self::St<A>) -> StackOf<Self, A> {
        let lowered = self.lower.restore_t::<U::St<A>>(st);
        self.upper.restore::<A>(lowered)
    }
}

/// Escape one layer: run `f` in the base monad, then resume the stack
/// from the state `f` hands back.
pub fn control<C, A>(ctl: &C, f: Closure<RunInBase<C>, BaseOf<C, C::St<A>>>) -> StackOf<C, A>
where
    C: MonadControl,
    A: Value,
{
    tracing::trace!("control: escaping to base");
    let lifted = ctl.lift_with::<C::St<A>>(f);
    let this = ctl.clone();
    ctl.stack().bind::<C::St<A>, A>(
        lifted,
        Closure::new(move |st: C::St<A>| {
            let resumed = this.base().pure::<C::St<A>>(st);
            this.restore::<A>(resumed)
        }),
    )
}

/// Escape a whole stack down to the base `ctl` controls.
pub fn control_at<C, A>(ctl: &C, f: Closure<RunInBase<C>, BaseOf<C, C::St<A>>>) -> StackOf<C, A>
where
    C: MonadControlT,
    A: Value,
{
    tracing::trace!("control_at: escaping to base");
    let lifted = ctl.lift_with::<C::St<A>>(f);
    let this = ctl.clone();
    ctl.stack().bind::<C::St<A>, A>(
        lifted,
        Closure::new(move |st: C::St<A>| this.restore_t::<A>(st)),
    )
}
