//! Calculator commands.
//!
//! A front end (menu loop, REPL, RPC handler) picks a [`CommandKind`],
//! gathers the operands it asks for, builds a [`Command`] and calls
//! [`Command::evaluate`]. Rendering the [`Answer`] and any diagnostic is
//! left to the caller.

use core::{cmp::Ordering, fmt};

use crate::{Diagnostic, Int256, Outcome};

/// Largest shift count a shift command applies.
pub const MAX_SHIFT: u32 = 255;

/// Cap a requested shift count at [`MAX_SHIFT`].
///
/// ```
/// use int256::{calc::clamp_shift, Diagnostic};
///
/// assert_eq!(clamp_shift(8).into_value(), 8);
///
/// let clamped = clamp_shift(300);
/// assert_eq!(clamped.diagnostic(), Some(Diagnostic::ShiftClamped { requested: 300 }));
/// assert_eq!(clamped.into_value(), 255);
/// ```
pub fn clamp_shift(bits: u32) -> Outcome<u32> {
    if bits > MAX_SHIFT {
        Outcome::flagged(MAX_SHIFT, Diagnostic::ShiftClamped { requested: bits })
    } else {
        Outcome::clean(bits)
    }
}

/// What a command needs from the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operands {
    /// Two numbers.
    Pair,
    /// A number and an unsigned count (shift amount or exponent).
    NumberAndCount,
    /// A single unsigned count.
    Count,
    /// A single number.
    Single,
}

/// The operations on offer, numbered as on the calculator menu.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CommandKind {
    Add = 1,
    Subtract = 2,
    Multiply = 3,
    Divide = 4,
    Modulo = 5,
    And = 6,
    Or = 7,
    Xor = 8,
    ShiftLeft = 9,
    ShiftRight = 10,
    Power = 11,
    Factorial = 12,
    Compare = 13,
    Negate = 14,
    Absolute = 15,
}

impl CommandKind {
    /// Every command, in menu order.
    pub const ALL: [Self; 15] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Modulo,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::ShiftLeft,
        Self::ShiftRight,
        Self::Power,
        Self::Factorial,
        Self::Compare,
        Self::Negate,
        Self::Absolute,
    ];

    /// Look up a menu number. Returns `None` outside `1..=15`; what `0`
    /// means (usually "exit") is up to the front end.
    #[must_use]
    pub const fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(Self::Add),
            2 => Some(Self::Subtract),
            3 => Some(Self::Multiply),
            4 => Some(Self::Divide),
            5 => Some(Self::Modulo),
            6 => Some(Self::And),
            7 => Some(Self::Or),
            8 => Some(Self::Xor),
            9 => Some(Self::ShiftLeft),
            10 => Some(Self::ShiftRight),
            11 => Some(Self::Power),
            12 => Some(Self::Factorial),
            13 => Some(Self::Compare),
            14 => Some(Self::Negate),
            15 => Some(Self::Absolute),
            _ => None,
        }
    }

    /// The menu number.
    #[must_use]
    pub const fn choice(self) -> u32 {
        self as u32
    }

    /// Menu label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "Add (+)",
            Self::Subtract => "Subtract (-)",
            Self::Multiply => "Multiply (×)",
            Self::Divide => "Divide (÷)",
            Self::Modulo => "Modulo (%)",
            Self::And => "AND (&)",
            Self::Or => "OR (|)",
            Self::Xor => "XOR (^)",
            Self::ShiftLeft => "Shift Left (<<)",
            Self::ShiftRight => "Shift Right (>>)",
            Self::Power => "Power (a^b)",
            Self::Factorial => "Factorial (n!)",
            Self::Compare => "Compare",
            Self::Negate => "Negate (-x)",
            Self::Absolute => "Absolute",
        }
    }

    /// The operands to collect before building the [`Command`].
    #[must_use]
    pub const fn operands(self) -> Operands {
        match self {
            Self::Add
            | Self::Subtract
            | Self::Multiply
            | Self::Divide
            | Self::Modulo
            | Self::And
            | Self::Or
            | Self::Xor
            | Self::Compare => Operands::Pair,
            Self::ShiftLeft | Self::ShiftRight | Self::Power => {
                Operands::NumberAndCount
            }
            Self::Factorial => Operands::Count,
            Self::Negate | Self::Absolute => Operands::Single,
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully specified calculation.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    Add(Int256, Int256),
    Subtract(Int256, Int256),
    Multiply(Int256, Int256),
    Divide(Int256, Int256),
    Modulo(Int256, Int256),
    And(Int256, Int256),
    Or(Int256, Int256),
    Xor(Int256, Int256),
    /// Counts above [`MAX_SHIFT`] are clamped when evaluated.
    ShiftLeft(Int256, u32),
    /// Counts above [`MAX_SHIFT`] are clamped when evaluated.
    ShiftRight(Int256, u32),
    Power(Int256, u32),
    Factorial(u32),
    Compare(Int256, Int256),
    Negate(Int256),
    Absolute(Int256),
}

/// The result of a [`Command`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Answer {
    /// A computed number.
    Value(Int256),
    /// The order of the first operand relative to the second.
    Ordering(Ordering),
}

impl Answer {
    /// The number, unless this is a comparison.
    #[must_use]
    pub const fn value(&self) -> Option<Int256> {
        match self {
            Answer::Value(value) => Some(*value),
            Answer::Ordering(_) => None,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Value(value) => fmt::Display::fmt(value, f),
            Answer::Ordering(Ordering::Less) => f.write_str("<"),
            Answer::Ordering(Ordering::Equal) => f.write_str("="),
            Answer::Ordering(Ordering::Greater) => f.write_str(">"),
        }
    }
}

impl Command {
    /// The kind of this command.
    #[must_use]
    pub const fn kind(&self) -> CommandKind {
        match self {
            Command::Add(..) => CommandKind::Add,
            Command::Subtract(..) => CommandKind::Subtract,
            Command::Multiply(..) => CommandKind::Multiply,
            Command::Divide(..) => CommandKind::Divide,
            Command::Modulo(..) => CommandKind::Modulo,
            Command::And(..) => CommandKind::And,
            Command::Or(..) => CommandKind::Or,
            Command::Xor(..) => CommandKind::Xor,
            Command::ShiftLeft(..) => CommandKind::ShiftLeft,
            Command::ShiftRight(..) => CommandKind::ShiftRight,
            Command::Power(..) => CommandKind::Power,
            Command::Factorial(_) => CommandKind::Factorial,
            Command::Compare(..) => CommandKind::Compare,
            Command::Negate(_) => CommandKind::Negate,
            Command::Absolute(_) => CommandKind::Absolute,
        }
    }

    /// Run the calculation.
    ///
    /// ```
    /// use int256::{calc::Command, Int256};
    ///
    /// let answer = Command::Add(Int256::from(100), Int256::from(-30)).evaluate();
    /// assert_eq!(answer.into_value().to_string(), "70");
    /// ```
    pub fn evaluate(self) -> Outcome<Answer> {
        tracing::trace!(command = %self.kind(), "evaluating");

        let value = match self {
            Command::Add(a, b) => a.add(&b),
            Command::Subtract(a, b) => a.sub(&b),
            Command::Multiply(a, b) => a.mul(&b),
            Command::Divide(a, b) => a.div(&b),
            Command::Modulo(a, b) => a.modulo(&b),
            Command::And(a, b) => Outcome::clean(a & b),
            Command::Or(a, b) => Outcome::clean(a | b),
            Command::Xor(a, b) => Outcome::clean(a ^ b),
            Command::ShiftLeft(a, bits) => {
                clamp_shift(bits).map(|bits| a.shift_left(bits))
            }
            Command::ShiftRight(a, bits) => {
                clamp_shift(bits).map(|bits| a.shift_right(bits))
            }
            Command::Power(a, exp) => a.pow(exp),
            Command::Factorial(n) => Int256::factorial(n),
            Command::Compare(a, b) => {
                return Outcome::clean(Answer::Ordering(a.compare(&b)));
            }
            Command::Negate(a) => Outcome::clean(a.negate()),
            Command::Absolute(a) => Outcome::clean(a.abs()),
        };

        value.map(Answer::Value)
    }
}
