// Copyright 2021 Vladislav Melnik
// SPDX-License-Identifier: MIT

use std::{rc::Rc, fmt};

/// Anything that can be carried inside a computation.
///
/// Values are shared rather than moved out of a computation, a list
/// computation may hand the same element to several continuations.
pub trait Value: Clone + 'static {}

impl<T> Value for T where T: Clone + 'static {}

/// Shared-ownership function `A -> B`.
///
/// Cloning captures one more reference to the same environment, the
/// environment is dropped together with the last clone.
pub struct Closure<A, B>(Rc<dyn Fn(A) -> B>);

impl<A, B> Closure<A, B> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(A) -> B + 'static,
    {
        Closure(Rc::new(f))
    }

    pub fn call(&self, a: A) -> B {
        (self.0)(a)
    }

    /// Post-compose with `g`.
    pub fn then<C, G>(self, g: G) -> Closure<A, C>
    where
        A: 'static,
        B: 'static,
        G: Fn(B) -> C + 'static,
    {
        Closure::new(move |a| g(self.call(a)))
    }

    pub fn share_count(&self) -> usize {
        Rc::strong_count(&self.0)
    }
}

impl<A, B> Clone for Closure<A, B> {
    fn clone(&self) -> Self {
        Closure(self.0.clone())
    }
}

impl<A, B> fmt::Debug for Closure<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Closure")
            .field(&Rc::strong_count(&self.0))
            .finish()
    }
}

/// Shared-ownership suspension, nothing runs until [`Thunk::force`].
pub struct Thunk<A>(Rc<dyn Fn() -> A>);

impl<A> Thunk<A> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Thunk(Rc::new(f))
    }

    pub fn force(&self) -> A {
        (self.0)()
    }
}

impl<A> Clone for Thunk<A> {
    fn clone(&self) -> Self {
        Thunk(self.0.clone())
    }
}

impl<A> fmt::Debug for Thunk<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Thunk(..)")
    }
}
