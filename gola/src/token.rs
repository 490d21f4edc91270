use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Variable(String),
    Number(i64),
    Plus,
    Minus,
    Star,
    Slash,
    Assign,
    Print,
    Read,
    End,
}

impl Token {
    pub fn keyword(word: &str) -> Option<Token> {
        match word {
            "print" => Some(Token::Print),
            "read" => Some(Token::Read),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Variable(name) => write!(f, "variable `{}`", name),
            Token::Number(value) => write!(f, "number `{}`", value),
            Token::Plus => f.write_str("`+`"),
            Token::Minus => f.write_str("`-`"),
            Token::Star => f.write_str("`*`"),
            Token::Slash => f.write_str("`/`"),
            Token::Assign => f.write_str("`=`"),
            Token::Print => f.write_str("keyword `print`"),
            Token::Read => f.write_str("keyword `read`"),
            Token::End => f.write_str("end of line"),
        }
    }
}
