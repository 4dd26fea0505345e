//! Tokenizer and recursive-descent parser for accumulated equations
//!
//! Equations only ever contain numbers, the four operators and the spaces the
//! accumulator puts around them, so the grammar is deliberately small.

use crate::core::{CalcError, CalcResult, Operation};

/// Token types from lexical analysis
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal
    Number(f64),
    /// Operator symbol (binary, or unary for `+`/`-` in prefix position)
    Operator(Operation),
}

/// Abstract Syntax Tree node
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// Numeric literal
    Number(f64),
    /// Binary operation
    BinaryOp {
        /// Left operand
        left: Box<AstNode>,
        /// Operator
        op: Operation,
        /// Right operand
        right: Box<AstNode>,
    },
    /// Unary negation
    Negate(Box<AstNode>),
}

impl AstNode {
    /// Creates a new number node
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// Creates a new binary operation node
    #[must_use]
    pub fn binary(left: AstNode, op: Operation, right: AstNode) -> Self {
        Self::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Creates a new negation node
    #[must_use]
    pub fn negate(inner: AstNode) -> Self {
        Self::Negate(Box::new(inner))
    }
}

/// Splits an equation string into tokens
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new tokenizer for the given input
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Tokenizes the entire input
    pub fn tokenize(&mut self) -> CalcResult<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Returns the next token, or None at end of input
    pub fn next_token(&mut self) -> CalcResult<Option<Token>> {
        self.skip_whitespace();

        let Some(ch) = self.current_char() else {
            return Ok(None);
        };

        if ch.is_ascii_digit() || ch == '.' {
            return self.read_number().map(Some);
        }

        match Operation::from_char(ch) {
            Some(op) => {
                self.advance();
                Ok(Some(Token::Operator(op)))
            }
            None => Err(CalcError::parse(format!(
                "Unexpected character '{ch}' at offset {}",
                self.pos
            ))),
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.pos += ch.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.current_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    // Greedy over digits and dots: "1.2.3" is one invalid number
    fn read_number(&mut self) -> CalcResult<Token> {
        let start = self.pos;
        while self
            .current_char()
            .is_some_and(|c| c.is_ascii_digit() || c == '.')
        {
            self.advance();
        }

        let num_str = &self.input[start..self.pos];
        let value = num_str
            .parse::<f64>()
            .map_err(|_| CalcError::parse(format!("Invalid number '{num_str}'")))?;
        // Literals past f64::MAX parse as infinity
        if !value.is_finite() {
            return Err(CalcError::NonFinite(value));
        }
        Ok(Token::Number(value))
    }
}

/// Recursive descent parser for equations
///
/// Grammar:
/// ```text
/// expression ::= term (('+' | '-') term)*
/// term       ::= unary (('*' | '/') unary)*
/// unary      ::= ('+' | '-')* NUMBER
/// ```
///
/// Runs of signs are folded while parsing, so their length does not affect
/// tree depth. Binary operators are capped at [`MAX_BINARY_OPERATORS`].
#[derive(Debug)]
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    binary_ops: usize,
}

/// Most binary operators one equation may contain
pub const MAX_BINARY_OPERATORS: usize = 1024;

impl Parser {
    /// Creates a new parser from tokens
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            binary_ops: 0,
        }
    }

    /// Parses an equation string into an AST
    pub fn parse_str(input: &str) -> CalcResult<AstNode> {
        let tokens = Tokenizer::new(input).tokenize()?;
        Self::new(tokens).parse()
    }

    /// Parses all tokens into an AST
    pub fn parse(&mut self) -> CalcResult<AstNode> {
        if self.tokens.is_empty() {
            return Err(CalcError::EmptyExpression);
        }

        let ast = self.parse_expression()?;

        if let Some(token) = self.current() {
            return Err(CalcError::parse(format!(
                "Unexpected {token:?} at token {}",
                self.pos
            )));
        }

        Ok(ast)
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn count_binary_op(&mut self) -> CalcResult<()> {
        self.binary_ops += 1;
        if self.binary_ops > MAX_BINARY_OPERATORS {
            return Err(CalcError::parse(format!(
                "More than {MAX_BINARY_OPERATORS} operators"
            )));
        }
        Ok(())
    }

    fn parse_expression(&mut self) -> CalcResult<AstNode> {
        let mut left = self.parse_term()?;

        while let Some(&Token::Operator(op @ (Operation::Add | Operation::Subtract))) =
            self.current()
        {
            self.advance();
            self.count_binary_op()?;
            let right = self.parse_term()?;
            left = AstNode::binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_term(&mut self) -> CalcResult<AstNode> {
        let mut left = self.parse_unary()?;

        while let Some(&Token::Operator(op @ (Operation::Multiply | Operation::Divide))) =
            self.current()
        {
            self.advance();
            self.count_binary_op()?;
            let right = self.parse_unary()?;
            left = AstNode::binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> CalcResult<AstNode> {
        let mut negated = false;
        loop {
            match self.advance() {
                Some(Token::Operator(Operation::Subtract)) => negated = !negated,
                Some(Token::Operator(Operation::Add)) => {}
                Some(Token::Number(n)) => {
                    let number = AstNode::number(*n);
                    return Ok(if negated {
                        AstNode::negate(number)
                    } else {
                        number
                    });
                }
                Some(token) => return Err(CalcError::parse(format!("Unexpected {token:?}"))),
                None => return Err(CalcError::parse("Unexpected end of expression")),
            }
        }
    }
}
