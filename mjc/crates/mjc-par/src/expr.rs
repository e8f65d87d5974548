//! Expression and condition parsing.
//!
//! Three fixed precedence tiers, lowest to highest: additive (`+` `-`),
//! multiplicative (`*` `/`), unary minus. All binary operators are
//! left-associative; the grammar's repetition form
//! (`EXPR ::= TERM (('+'|'-') TERM)*`) becomes an iteration, so the
//! parser never left-recurses.

use crate::ast::*;
use crate::Parser;
use mjc_lex::TokenKind;

impl<'a> Parser<'a> {
    /// Parse a condition: `EXPR RELOP EXPR`.
    pub(crate) fn parse_cond(&mut self) -> Option<Cond> {
        let left = self.parse_expr()?;
        let op = self.parse_rel_op()?;
        let right = self.parse_expr()?;
        Some(Cond { left, op, right })
    }

    /// Parse a relational operator.
    fn parse_rel_op(&mut self) -> Option<RelOp> {
        let op = match self.current().kind {
            TokenKind::EqEq => RelOp::Eq,
            TokenKind::NotEq => RelOp::Ne,
            TokenKind::GtEq => RelOp::Ge,
            TokenKind::LtEq => RelOp::Le,
            TokenKind::Gt => RelOp::Gt,
            TokenKind::Lt => RelOp::Lt,
            _ => {
                self.error_at_current(format!(
                    "expected a relational operator, found {}",
                    self.current().display_name()
                ));
                return None;
            },
        };
        self.advance();
        Some(op)
    }

    /// Parse an additive expression: `TERM (('+'|'-') TERM)*`.
    pub(crate) fn parse_expr(&mut self) -> Option<Expr> {
        let mut left = self.parse_term()?;

        loop {
            let op = match self.current().kind {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                _ => break,
            };
            self.advance();
            let right = self.parse_term()?;
            left = Expr::binary(op, left, right);
        }

        Some(left)
    }

    /// Parse a multiplicative term: `FACTOR (('*'|'/') FACTOR)*`.
    fn parse_term(&mut self) -> Option<Expr> {
        let mut left = self.parse_factor()?;

        loop {
            let op = match self.current().kind {
                TokenKind::Star => BinOp::Mul,
                TokenKind::Slash => BinOp::Div,
                _ => break,
            };
            self.advance();
            let right = self.parse_factor()?;
            left = Expr::binary(op, left, right);
        }

        Some(left)
    }

    /// Parse a factor: number, variable, parenthesized expression, or
    /// unary minus.
    fn parse_factor(&mut self) -> Option<Expr> {
        match self.current().kind {
            TokenKind::Number(value) => {
                self.advance();
                Some(Expr::Num(value))
            },
            TokenKind::Ident(_) => {
                let ident = self.expect_ident("a variable name")?;
                Some(Expr::Var(ident))
            },
            TokenKind::LParen => {
                self.advance();
                let expr = self.parse_expr()?;
                self.expect(TokenKind::RParen, "`)`")?;
                Some(expr)
            },
            TokenKind::Minus => {
                self.advance();
                let operand = self.parse_factor()?;
                Some(Expr::Neg(Box::new(operand)))
            },
            _ => {
                self.error_at_current(format!(
                    "expected an expression, found {}",
                    self.current().display_name()
                ));
                None
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mjc_lex::tokenize;
    use mjc_util::Handler;

    fn var(name: &str, line: u32, column: u32) -> Expr {
        Expr::Var(Ident {
            name: name.into(),
            line,
            column,
        })
    }

    fn parse_expr_source(source: &str) -> Expr {
        let handler = Handler::new();
        let tokens = tokenize(source, &handler);
        let mut parser = Parser::new(tokens, &handler);
        let expr = parser.parse_expr();
        assert!(
            !handler.has_errors(),
            "unexpected errors: {:?}",
            handler.diagnostics()
        );
        expr.unwrap()
    }

    fn parse_cond_source(source: &str) -> Cond {
        let handler = Handler::new();
        let tokens = tokenize(source, &handler);
        let mut parser = Parser::new(tokens, &handler);
        let cond = parser.parse_cond();
        assert!(!handler.has_errors());
        cond.unwrap()
    }

    #[test]
    fn test_number() {
        assert_eq!(parse_expr_source("42"), Expr::Num(42.0));
    }

    #[test]
    fn test_variable() {
        assert_eq!(parse_expr_source("x"), var("x", 1, 1));
    }

    #[test]
    fn test_mul_binds_tighter_than_add() {
        // a + b * c == a + (b * c)
        let expr = parse_expr_source("2 + 3 * 4");
        assert_eq!(
            expr,
            Expr::binary(
                BinOp::Add,
                Expr::Num(2.0),
                Expr::binary(BinOp::Mul, Expr::Num(3.0), Expr::Num(4.0)),
            )
        );
    }

    #[test]
    fn test_subtraction_is_left_associative() {
        // a - b - c == (a - b) - c
        let expr = parse_expr_source("10 - 4 - 3");
        assert_eq!(
            expr,
            Expr::binary(
                BinOp::Sub,
                Expr::binary(BinOp::Sub, Expr::Num(10.0), Expr::Num(4.0)),
                Expr::Num(3.0),
            )
        );
    }

    #[test]
    fn test_division_is_left_associative() {
        let expr = parse_expr_source("8 / 4 / 2");
        assert_eq!(
            expr,
            Expr::binary(
                BinOp::Div,
                Expr::binary(BinOp::Div, Expr::Num(8.0), Expr::Num(4.0)),
                Expr::Num(2.0),
            )
        );
    }

    #[test]
    fn test_parentheses_override_precedence() {
        let expr = parse_expr_source("(2 + 3) * 4");
        assert_eq!(
            expr,
            Expr::binary(
                BinOp::Mul,
                Expr::binary(BinOp::Add, Expr::Num(2.0), Expr::Num(3.0)),
                Expr::Num(4.0),
            )
        );
    }

    #[test]
    fn test_unary_minus() {
        assert_eq!(
            parse_expr_source("-5"),
            Expr::Neg(Box::new(Expr::Num(5.0)))
        );
    }

    #[test]
    fn test_unary_minus_binds_tighter_than_mul() {
        // -a * b == (-a) * b
        let expr = parse_expr_source("-2 * 3");
        assert_eq!(
            expr,
            Expr::binary(
                BinOp::Mul,
                Expr::Neg(Box::new(Expr::Num(2.0))),
                Expr::Num(3.0),
            )
        );
    }

    #[test]
    fn test_double_negation() {
        assert_eq!(
            parse_expr_source("--7"),
            Expr::Neg(Box::new(Expr::Neg(Box::new(Expr::Num(7.0)))))
        );
    }

    #[test]
    fn test_cond_operators() {
        assert_eq!(parse_cond_source("a == b").op, RelOp::Eq);
        assert_eq!(parse_cond_source("a != b").op, RelOp::Ne);
        assert_eq!(parse_cond_source("a >= b").op, RelOp::Ge);
        assert_eq!(parse_cond_source("a <= b").op, RelOp::Le);
        assert_eq!(parse_cond_source("a > b").op, RelOp::Gt);
        assert_eq!(parse_cond_source("a < b").op, RelOp::Lt);
    }

    #[test]
    fn test_cond_with_compound_sides() {
        let cond = parse_cond_source("a + 1 > b * 2");
        assert_eq!(cond.op, RelOp::Gt);
        assert!(matches!(cond.left, Expr::Binary { op: BinOp::Add, .. }));
        assert!(matches!(cond.right, Expr::Binary { op: BinOp::Mul, .. }));
    }

    #[test]
    fn test_missing_operand_is_error() {
        let handler = Handler::new();
        let tokens = tokenize("1 +", &handler);
        let mut parser = Parser::new(tokens, &handler);
        assert!(parser.parse_expr().is_none());
        assert_eq!(handler.error_count(), 1);
        assert!(handler.diagnostics()[0]
            .message
            .contains("expected an expression"));
    }

    #[test]
    fn test_missing_relop_is_error() {
        let handler = Handler::new();
        let tokens = tokenize("a b", &handler);
        let mut parser = Parser::new(tokens, &handler);
        assert!(parser.parse_cond().is_none());
        assert!(handler.diagnostics()[0]
            .message
            .contains("relational operator"));
    }

    #[test]
    fn test_unclosed_paren_is_error() {
        let handler = Handler::new();
        let tokens = tokenize("(1 + 2", &handler);
        let mut parser = Parser::new(tokens, &handler);
        assert!(parser.parse_expr().is_none());
        assert!(handler.diagnostics()[0].message.contains("`)`"));
    }
}
