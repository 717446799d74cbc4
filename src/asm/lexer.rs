//! Source text -> spanned token stream. Single forward pass, one character of
//! lookahead, following the teacher's `AsmLexer` character-iteration style
//! (`Peekable<Chars>`, a `get_word`-style identifier scanner) re-syntaxed
//! against this dialect's grammar: `0x`/`0o`/`0b` numeric prefixes, `//` and
//! `/* */` comments, and the `( ) # , :` operator set.

use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

use crate::opcodes::{match_instruction, Instruction};

/// 1-based (line, column), as spec.md's assembler entities require.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Instruction(Instruction),
    Identifier(String),
    Pragma(String),
    Comment(String),
    Number(u32),
    Operator(char),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LexError {
    UnexpectedCharacter { character: char, position: Position },
    UnexpectedEof { position: Position },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LexError::UnexpectedCharacter { character, position } => write!(
                f,
                "unexpected character {:?} at {}:{}",
                character, position.line, position.column
            ),
            LexError::UnexpectedEof { position } => write!(
                f,
                "unexpected end of file inside a block comment starting near {}:{}",
                position.line, position.column
            ),
        }
    }
}

impl std::error::Error for LexError {}

const OPERATORS: &str = "(),#:";

pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    line: u32,
    column: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            chars: source.chars().peekable(),
            line: 1,
            column: 1,
        }
    }

    fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }

    fn advance(&mut self) -> Option<char> {
        let character = self.chars.next()?;
        if character == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(character)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    /// Tokenizes the whole source in one pass. Comments are retained as
    /// `TokenKind::Comment` tokens, matching the Token variant list in
    /// spec.md section 3; the AST builder skips over them.
    pub fn lex(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            let start = self.position();
            let character = match self.peek() {
                Some(character) => character,
                None => break,
            };

            if character == '/' {
                if let Some(token) = self.lex_comment(start)? {
                    tokens.push(token);
                }
                continue;
            }

            if character.is_ascii_digit() {
                tokens.push(self.lex_number(start)?);
                continue;
            }

            if character.is_ascii_alphabetic() || character == '_' {
                tokens.push(self.lex_identifier(start));
                continue;
            }

            if character == '.' {
                tokens.push(self.lex_pragma(start)?);
                continue;
            }

            if OPERATORS.contains(character) {
                self.advance();
                tokens.push(Token {
                    kind: TokenKind::Operator(character),
                    span: Span { start, end: self.position() },
                });
                continue;
            }

            return Err(LexError::UnexpectedCharacter { character, position: start });
        }
        Ok(tokens)
    }

    fn skip_whitespace(&mut self) {
        while let Some(character) = self.peek() {
            if character.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Either a `//` line comment, a `/* ... */` block comment (which may
    /// span lines; nesting is not supported), or an error if `/` isn't
    /// followed by a second comment-opening character.
    fn lex_comment(&mut self, start: Position) -> Result<Option<Token>, LexError> {
        self.advance(); // first '/'
        match self.peek() {
            Some('/') => {
                self.advance();
                let mut text = String::new();
                while let Some(character) = self.peek() {
                    if character == '\n' {
                        break;
                    }
                    text.push(character);
                    self.advance();
                }
                Ok(Some(Token {
                    kind: TokenKind::Comment(text),
                    span: Span { start, end: self.position() },
                }))
            }
            Some('*') => {
                self.advance();
                let mut text = String::new();
                loop {
                    match self.advance() {
                        Some('*') if self.peek() == Some('/') => {
                            self.advance();
                            break;
                        }
                        Some(character) => text.push(character),
                        None => return Err(LexError::UnexpectedEof { position: start }),
                    }
                }
                Ok(Some(Token {
                    kind: TokenKind::Comment(text),
                    span: Span { start, end: self.position() },
                }))
            }
            Some(character) => Err(LexError::UnexpectedCharacter { character, position: start }),
            None => Err(LexError::UnexpectedEof { position: start }),
        }
    }

    /// `0x`/`0o`/`0b` radix prefixes are only recognized immediately after a
    /// leading `0`; anything else is parsed as decimal.
    fn lex_number(&mut self, start: Position) -> Result<Token, LexError> {
        let mut digits = String::new();
        digits.push(self.advance().expect("caller already peeked a digit"));

        let radix = if digits == "0" {
            match self.peek() {
                Some('x') => {
                    self.advance();
                    Some(16)
                }
                Some('o') => {
                    self.advance();
                    Some(8)
                }
                Some('b') => {
                    self.advance();
                    Some(2)
                }
                _ => None,
            }
        } else {
            None
        };

        if radix.is_some() {
            digits.clear();
        }

        while let Some(character) = self.peek() {
            if character.is_ascii_alphanumeric() {
                digits.push(character);
                self.advance();
            } else {
                break;
            }
        }

        let value = u32::from_str_radix(&digits, radix.unwrap_or(10)).map_err(|_| {
            LexError::UnexpectedCharacter {
                character: digits.chars().next().unwrap_or('0'),
                position: start,
            }
        })?;

        Ok(Token {
            kind: TokenKind::Number(value),
            span: Span { start, end: self.position() },
        })
    }

    /// `.` followed by `[A-Za-z_][A-Za-z0-9_]*`, e.g. `.byte`/`.word`: the
    /// raw-data pragmas. Lowercased; the AST builder matches against
    /// `"byte"`/`"word"` literally.
    fn lex_pragma(&mut self, start: Position) -> Result<Token, LexError> {
        self.advance(); // the '.'
        let mut word = String::new();
        while let Some(character) = self.peek() {
            if character.is_ascii_alphanumeric() || character == '_' {
                word.push(character);
                self.advance();
            } else {
                break;
            }
        }
        if word.is_empty() {
            return Err(LexError::UnexpectedCharacter { character: '.', position: start });
        }
        Ok(Token {
            kind: TokenKind::Pragma(word.to_lowercase()),
            span: Span { start, end: self.position() },
        })
    }

    /// `[A-Za-z_][A-Za-z0-9_]*`. Upper-cased, matched against the mnemonic
    /// table to decide between an instruction token and a plain identifier.
    fn lex_identifier(&mut self, start: Position) -> Token {
        let mut word = String::new();
        while let Some(character) = self.peek() {
            if character.is_ascii_alphanumeric() || character == '_' {
                word.push(character);
                self.advance();
            } else {
                break;
            }
        }

        let span = Span { start, end: self.position() };
        match match_instruction(&word) {
            Some(instruction) => Token { kind: TokenKind::Instruction(instruction), span },
            None => Token { kind: TokenKind::Identifier(word), span },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn lex(source: &str) -> Vec<TokenKind> {
        Lexer::new(source).lex().unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn lexes_instruction_and_immediate_argument() {
        let tokens = lex("LDA #0x69");
        assert_eq!(
            tokens,
            vec![
                TokenKind::Instruction(Instruction::LDA),
                TokenKind::Operator('#'),
                TokenKind::Number(0x69),
            ]
        );
    }

    #[test]
    fn mnemonics_are_case_insensitive() {
        let tokens = lex("lda #5");
        assert_eq!(tokens[0], TokenKind::Instruction(Instruction::LDA));
    }

    #[test]
    fn radix_prefixes() {
        assert_eq!(lex("0x10")[0], TokenKind::Number(16));
        assert_eq!(lex("0o10")[0], TokenKind::Number(8));
        assert_eq!(lex("0b10")[0], TokenKind::Number(2));
        assert_eq!(lex("10")[0], TokenKind::Number(10));
    }

    #[test]
    fn label_definition() {
        let tokens = lex("main:");
        assert_eq!(
            tokens,
            vec![TokenKind::Identifier("main".to_string()), TokenKind::Operator(':')]
        );
    }

    #[test]
    fn byte_and_word_pragmas() {
        assert_eq!(lex(".byte 0x11")[0], TokenKind::Pragma("byte".to_string()));
        assert_eq!(lex(".word 0x5544")[0], TokenKind::Pragma("word".to_string()));
    }

    #[test]
    fn line_comment_is_retained_as_a_token() {
        let tokens = lex("NOP // a comment");
        assert_eq!(
            tokens,
            vec![
                TokenKind::Instruction(Instruction::NOP),
                TokenKind::Comment(" a comment".to_string()),
            ]
        );
    }

    #[test]
    fn block_comment_spans_lines() {
        let tokens = lex("/* line one\nline two */ NOP");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1], TokenKind::Instruction(Instruction::NOP));
    }

    #[test]
    fn unterminated_block_comment_is_an_error() {
        let err = Lexer::new("/* oops").lex().unwrap_err();
        assert!(matches!(err, LexError::UnexpectedEof { .. }));
    }

    #[test]
    fn unexpected_character_is_an_error() {
        let err = Lexer::new("@").lex().unwrap_err();
        assert!(matches!(err, LexError::UnexpectedCharacter { character: '@', .. }));
    }
}
