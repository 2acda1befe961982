use serde::{Deserialize, Serialize};
use std::{fmt, ops::Div};

macro_rules! impl_unit {
    ($name:ident) => {
        impl $name {
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            pub const fn as_u64(&self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl PartialEq<u64> for $name {
            fn eq(&self, other: &u64) -> bool {
                self.0 == *other
            }
        }
    };
}

/// A slot: the fixed-duration unit of time in which at most one block is proposed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slot(u64);

/// An epoch: a fixed count of consecutive slots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Epoch(u64);

impl_unit!(Slot);
impl_unit!(Epoch);

/// Floor division of a slot by a number of slots.
///
/// # Panics
///
/// If `rhs` is zero.
impl Div<u64> for Slot {
    type Output = Slot;

    fn div(self, rhs: u64) -> Self::Output {
        Slot(self.0 / rhs)
    }
}
