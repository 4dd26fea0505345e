//! Binary arithmetic over the four keypad operators

use crate::core::{CalcError, CalcResult};

/// Binary operator accepted by the accumulator and the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operation {
    /// All operators, in keypad order
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the operator symbol as written into the equation
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Maps a symbol back to its operator
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Applies operators to operands, rejecting anything that is not finite
#[derive(Debug, Default, Clone, Copy)]
pub struct Calculator;

impl Calculator {
    /// Creates a new calculator
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Performs `a op b`
    pub fn calculate(&self, a: f64, b: f64, op: Operation) -> CalcResult<f64> {
        match op {
            Operation::Add => Self::check_finite(a + b),
            Operation::Subtract => Self::check_finite(a - b),
            Operation::Multiply => Self::check_finite(a * b),
            Operation::Divide => Self::divide(a, b),
        }
    }

    /// Division: a / b
    pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
        if b == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Self::check_finite(a / b)
    }

    /// Negation keeps the finiteness guarantee of its operand
    pub fn negate(a: f64) -> CalcResult<f64> {
        Self::check_finite(-a)
    }

    fn check_finite(result: f64) -> CalcResult<f64> {
        if result.is_finite() {
            Ok(result)
        } else {
            Err(CalcError::NonFinite(result))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Operation tests =====

    #[test]
    fn test_operation_symbols() {
        assert_eq!(Operation::Add.symbol(), '+');
        assert_eq!(Operation::Subtract.symbol(), '-');
        assert_eq!(Operation::Multiply.symbol(), '*');
        assert_eq!(Operation::Divide.symbol(), '/');
    }

    #[test]
    fn test_operation_from_char() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_char(op.symbol()), Some(op));
        }
        assert_eq!(Operation::from_char('%'), None);
        assert_eq!(Operation::from_char('^'), None);
        assert_eq!(Operation::from_char('x'), None);
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Divide.to_string(), "/");
    }

    // ===== Calculator tests =====

    #[test]
    fn test_calculate_all_operations() {
        let calc = Calculator::new();
        assert_eq!(calc.calculate(10.0, 5.0, Operation::Add), Ok(15.0));
        assert_eq!(calc.calculate(10.0, 3.0, Operation::Subtract), Ok(7.0));
        assert_eq!(calc.calculate(6.0, 7.0, Operation::Multiply), Ok(42.0));
        assert_eq!(calc.calculate(10.0, 4.0, Operation::Divide), Ok(2.5));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(Calculator::divide(1.0, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(Calculator::divide(0.0, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(Calculator::divide(1.0, -0.0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_multiply_overflow_is_non_finite() {
        let calc = Calculator::new();
        let result = calc.calculate(f64::MAX, 2.0, Operation::Multiply);
        assert!(matches!(result, Err(CalcError::NonFinite(v)) if v.is_infinite()));
    }

    #[test]
    fn test_add_overflow_is_non_finite() {
        let calc = Calculator::new();
        assert!(calc.calculate(f64::MAX, f64::MAX, Operation::Add).is_err());
    }

    #[test]
    fn test_negate() {
        assert_eq!(Calculator::negate(5.0), Ok(-5.0));
        assert_eq!(Calculator::negate(-2.5), Ok(2.5));
    }
}
