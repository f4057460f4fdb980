/*!
Exact 256-bit sign-magnitude integer arithmetic.

> Note that `int256` is still `0.*.*`, so breaking changes
> [may occur at any time](https://semver.org/#spec-item-4). If you must depend
> on `int256`, we recommend pinning to a specific version, i.e., `=0.y.z`.

An [`Int256`] stores a 256-bit unsigned magnitude and a separate sign, so it
covers `-(2^256 - 1)..=2^256 - 1` symmetrically. Zero is always positive.

## Parsing and formatting

[`parse`] reads decimal, `0x` hex and `0b` binary text with an optional
sign. [`format_decimal`] and [`format_hex`] render values back.

```
use int256::{format_hex, parse};

let value = parse("  -0x1F").into_value();
assert_eq!(value.to_string(), "-31");
assert_eq!(format_hex(&value), "-0x1f");
```

## Arithmetic and diagnostics

Nothing in this crate panics on bad input or overflow. Operations that can
run into trouble return an [`Outcome`]: the (possibly truncated) value plus
an optional [`Diagnostic`] for the caller to surface, log or escalate.

```
use int256::{Diagnostic, Int256};

let sum = Int256::MAX.add(&Int256::ONE);
assert_eq!(sum.diagnostic(), Some(Diagnostic::AdditionOverflow));
assert_eq!(sum.into_value(), Int256::ZERO);
```

Each diagnostic is also emitted as a `tracing` debug event when raised.

## Calculator commands

[`calc`] wraps the operations as numbered [`Command`]s for interactive
front ends.
*/

#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;
extern crate core;

pub mod const_helpers;

pub mod arithmetic;
pub mod bits;
pub mod calc;
pub mod diagnostic;
mod format;
mod int;
mod ops;
mod parse;

#[cfg(all(test, feature = "std"))]
mod test_helpers;

pub use arithmetic::{Uint256, WideUint};
pub use calc::{Answer, Command, CommandKind};
pub use diagnostic::{Diagnostic, Outcome, Severity};
pub use format::{format_decimal, format_hex};
pub use int::Int256;
pub use parse::parse;
