use serde::{Deserialize, Serialize};
use std::fmt;

/// 手番
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    Maximizer,
    Minimizer,
}

impl Default for Turn {
    fn default() -> Self {
        Turn::Maximizer
    }
}

impl Turn {
    pub fn opponent(self) -> Turn {
        match self {
            Turn::Maximizer => Turn::Minimizer,
            Turn::Minimizer => Turn::Maximizer,
        }
    }
}

/// Search value, totally ordered: `MinusInfinity < Finite(_) < PlusInfinity`.
///
/// The infinite bounds are reserved sentinels. They mark decided games and
/// seed the alpha-beta window; a heuristic evaluation must never produce
/// them (the engines abort if one does).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Value {
    MinusInfinity,
    Finite(i32),
    PlusInfinity,
}

impl Value {
    /// 引き分け
    pub const DRAW: Value = Value::Finite(0);

    /// True for anything other than the reserved bounds.
    pub fn is_finite(self) -> bool {
        matches!(self, Value::Finite(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::MinusInfinity => write!(f, "-inf"),
            Value::Finite(v) => write!(f, "{}", v),
            Value::PlusInfinity => write!(f, "+inf"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_alternates() {
        assert_eq!(Turn::Maximizer.opponent(), Turn::Minimizer);
        assert_eq!(Turn::Minimizer.opponent(), Turn::Maximizer);
        assert_eq!(Turn::Maximizer.opponent().opponent(), Turn::Maximizer);
    }

    #[test]
    fn test_value_total_order() {
        assert!(Value::MinusInfinity < Value::Finite(i32::MIN));
        assert!(Value::Finite(i32::MIN) < Value::Finite(0));
        assert!(Value::Finite(0) < Value::Finite(i32::MAX));
        assert!(Value::Finite(i32::MAX) < Value::PlusInfinity);
    }

    #[test]
    fn test_draw_is_finite_zero() {
        assert_eq!(Value::DRAW, Value::Finite(0));
        assert!(Value::DRAW.is_finite());
        assert!(!Value::PlusInfinity.is_finite());
        assert!(!Value::MinusInfinity.is_finite());
    }
}
