// Copyright 2021 Vladislav Melnik
// SPDX-License-Identifier: MIT

//! Control combinators that work over any computation type.
//!
//! A computation type is described by a dictionary: a value implementing
//! [`Functor`], [`Applicative`], [`Monad`] or [`Alternative`]. Every
//! combinator takes the dictionary it needs as its first argument.

#![forbid(unsafe_code)]

#[cfg(feature = "monadic-control-macros")]
pub use monadic_control_macros::*;

mod closure;
pub use self::closure::{Closure, Thunk, Value};

mod error;
pub use self::error::{ShortCircuit, Violation};

mod class;
pub use self::class::{Alternative, Applicative, Functor, Monad};

mod functor;
pub use self::functor::{discard, map_rev};

mod conditional;
pub use self::conditional::{assert, guard, optional, unless, when};

mod boolean;
pub use self::boolean::{and_m, bool, not_m, or_m, select, ToBool};

mod product;
pub use self::product::Product;

pub mod control;
pub use self::control::{control, control_at, MonadControl, MonadControlT};

#[cfg(test)]
mod testing;
