//! AST evaluation

use crate::core::parser::{AstNode, Parser};
use crate::core::{CalcError, CalcResult, Calculator};

/// Evaluator for AST expressions
#[derive(Debug, Default)]
pub struct Evaluator {
    calculator: Calculator,
}

impl Evaluator {
    /// Creates a new evaluator
    #[must_use]
    pub fn new() -> Self {
        Self {
            calculator: Calculator::new(),
        }
    }

    /// Evaluates an AST node to a finite value
    pub fn evaluate(&self, node: &AstNode) -> CalcResult<f64> {
        match node {
            AstNode::Number(n) if n.is_finite() => Ok(*n),
            AstNode::Number(n) => Err(CalcError::NonFinite(*n)),
            AstNode::Negate(inner) => Calculator::negate(self.evaluate(inner)?),
            AstNode::BinaryOp { left, op, right } => {
                let left_val = self.evaluate(left)?;
                let right_val = self.evaluate(right)?;
                self.calculator.calculate(left_val, right_val, *op)
            }
        }
    }

    /// Parses and evaluates an equation string
    pub fn evaluate_str(&self, input: &str) -> CalcResult<f64> {
        let ast = Parser::parse_str(input)?;
        self.evaluate(&ast)
    }
}
