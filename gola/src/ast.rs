use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        };
        f.write_str(symbol)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    Literal(i64),
    Reference(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Term(Term),
    BinOp {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn literal(value: i64) -> Self {
        Expr::Term(Term::Literal(value))
    }

    pub fn reference(name: impl Into<String>) -> Self {
        Expr::Term(Term::Reference(name.into()))
    }

    pub fn binary(left: Expr, op: BinaryOp, right: Expr) -> Self {
        Expr::BinOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }
}

/// Fully parenthesised, so the grouping chosen by the parser is visible in logs.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Term(Term::Literal(value)) => write!(f, "{}", value),
            Expr::Term(Term::Reference(name)) => f.write_str(name),
            Expr::BinOp { left, op, right } => write!(f, "({} {} {})", left, op, right),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Assign { target: String, expr: Expr },
    Print { expr: Expr },
    Read { target: String },
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Assign { target, expr } => write!(f, "{} = {}", target, expr),
            Statement::Print { expr } => write!(f, "print {}", expr),
            Statement::Read { target } => write!(f, "read {}", target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shows_grouping() {
        let expr = Expr::binary(
            Expr::binary(Expr::literal(10), BinaryOp::Sub, Expr::literal(3)),
            BinaryOp::Sub,
            Expr::reference("x"),
        );
        assert_eq!(expr.to_string(), "((10 - 3) - x)");
    }

    #[test]
    fn display_statements() {
        let assign = Statement::Assign {
            target: "z".to_string(),
            expr: Expr::binary(Expr::reference("x"), BinaryOp::Mul, Expr::reference("y")),
        };
        assert_eq!(assign.to_string(), "z = (x * y)");
        assert_eq!(
            Statement::Read { target: "count".to_string() }.to_string(),
            "read count"
        );
    }
}
