use crate::error::{LexError, LexErrorKind};
use crate::token::Token;

pub struct Lexer {
    text: Vec<char>,
    pos: usize,
    current_char: Option<char>,
}

impl Lexer {
    pub fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let current_char = chars.first().copied();
        Lexer {
            text: chars,
            pos: 0,
            current_char,
        }
    }

    fn advance(&mut self) {
        self.pos += 1;
        self.current_char = self.text.get(self.pos).copied();
    }

    fn column(&self) -> usize {
        self.pos + 1
    }

    fn error(&self, kind: LexErrorKind) -> LexError {
        LexError {
            kind,
            column: self.column(),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// A word or number must not run straight into another word character.
    /// `adjacent` is the class that would start a different valid token.
    fn check_boundary(&self, adjacent: fn(&char) -> bool) -> Result<(), LexError> {
        match self.current_char {
            Some(ch) if adjacent(&ch) => Err(self.error(LexErrorKind::Adjacent(ch))),
            Some(ch) if ch.is_alphanumeric() || ch == '_' => {
                Err(self.error(LexErrorKind::InvalidCharacter(ch)))
            }
            _ => Ok(()),
        }
    }

    fn integer(&mut self) -> Result<i64, LexError> {
        let start = self.column();
        let mut digits = String::new();
        while let Some(ch) = self.current_char {
            if ch.is_ascii_digit() {
                digits.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        self.check_boundary(char::is_ascii_lowercase)?;
        digits.parse().map_err(|_| LexError {
            kind: LexErrorKind::NumberOutOfRange(digits.clone()),
            column: start,
        })
    }

    fn word(&mut self) -> Result<String, LexError> {
        let mut result = String::new();
        while let Some(ch) = self.current_char {
            if ch.is_ascii_lowercase() {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        self.check_boundary(char::is_ascii_digit)?;
        Ok(result)
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        let Some(ch) = self.current_char else {
            return Ok(Token::End);
        };

        let token = if ch.is_ascii_digit() {
            Token::Number(self.integer()?)
        } else if ch.is_ascii_lowercase() {
            let word = self.word()?;
            Token::keyword(&word).unwrap_or(Token::Variable(word))
        } else {
            let token = match ch {
                '+' => Token::Plus,
                '-' => Token::Minus,
                '*' => Token::Star,
                '/' => Token::Slash,
                '=' => Token::Assign,
                _ => return Err(self.error(LexErrorKind::InvalidCharacter(ch))),
            };
            self.advance();
            token
        };

        log::trace!("token {:?} ending at column {}", token, self.pos);
        Ok(token)
    }

    /// Lexes the rest of the line, stopping at the first error.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            if token == Token::End {
                tokens.push(token);
                return Ok(tokens);
            }
            tokens.push(token);
        }
    }
}
