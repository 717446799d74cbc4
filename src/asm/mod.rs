//! The three-stage assembler pipeline: lex -> parse -> emit. `Assembler` is
//! the public facade tying the three stages together, grounded on the
//! teacher's `AsmLexer` (one struct owning the whole pipeline) and its
//! `ParseError::panic_nicely` source-snippet rendering, reworked here into a
//! non-panicking `render` method since library code shouldn't panic on bad
//! input.

pub mod ast;
pub mod emitter;
pub mod lexer;

use colored::*;

pub use ast::{Ast, IndexRegister, InstructionArgument, LabelKind, Node, ParseError, Parser, PragmaKind, PragmaNode};
pub use emitter::{emit, EmitError};
pub use lexer::{LexError, Lexer, Token, TokenKind};

/// Unifies the three stages' distinct error types into the one surface
/// `Assembler`'s methods return, per spec.md section 7's error kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum AssembleError {
    Lex(LexError),
    Parse(ParseError),
    Emit(EmitError),
}

impl std::fmt::Display for AssembleError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            AssembleError::Lex(error) => write!(f, "{}", error),
            AssembleError::Parse(error) => write!(f, "{}", error),
            AssembleError::Emit(error) => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for AssembleError {}

impl From<LexError> for AssembleError {
    fn from(error: LexError) -> Self {
        AssembleError::Lex(error)
    }
}

impl From<ParseError> for AssembleError {
    fn from(error: ParseError) -> Self {
        AssembleError::Parse(error)
    }
}

impl From<EmitError> for AssembleError {
    fn from(error: EmitError) -> Self {
        AssembleError::Emit(error)
    }
}

/// Drives the lex/parse/emit stages over one source string, caching each
/// stage's output so callers can run them one at a time (to inspect tokens or
/// the AST) or all at once via `assemble`.
pub struct Assembler<'a> {
    source: &'a str,
    tokens: Option<Vec<Token>>,
    ast: Option<Ast>,
    bytes: Option<Vec<u8>>,
}

impl<'a> Assembler<'a> {
    pub fn new(source: &'a str) -> Assembler<'a> {
        Assembler { source, tokens: None, ast: None, bytes: None }
    }

    /// Runs the lexer if it hasn't already run, and returns the token stream.
    pub fn lex(&mut self) -> Result<&[Token], AssembleError> {
        if self.tokens.is_none() {
            let tokens = Lexer::new(self.source).lex()?;
            self.tokens = Some(tokens);
        }
        Ok(self.tokens.as_ref().expect("just populated above"))
    }

    /// Runs the parser if it hasn't already run, lexing first if needed.
    pub fn parse(&mut self) -> Result<&Ast, AssembleError> {
        if self.ast.is_none() {
            self.lex()?;
            let tokens = self.tokens.as_ref().expect("lex() just populated this");
            let ast = Parser::new(tokens).parse()?;
            self.ast = Some(ast);
        }
        Ok(self.ast.as_ref().expect("just populated above"))
    }

    /// Runs the emitter if it hasn't already run, parsing first if needed.
    /// Returns the assembled byte buffer.
    pub fn assemble(&mut self) -> Result<&[u8], AssembleError> {
        if self.bytes.is_none() {
            self.parse()?;
            let ast = self.ast.as_ref().expect("parse() just populated this");
            let bytes = emit(ast)?;
            self.bytes = Some(bytes);
        }
        Ok(self.bytes.as_ref().expect("just populated above"))
    }

    /// The token stream from the last successful `lex`/`parse`/`assemble`
    /// call, if any stage has run.
    pub fn tokens(&self) -> Option<&[Token]> {
        self.tokens.as_deref()
    }

    /// The AST from the last successful `parse`/`assemble` call, if any.
    pub fn ast(&self) -> Option<&Ast> {
        self.ast.as_ref()
    }
}

/// Assembles a whole source string in one call, for callers that don't need
/// to inspect the intermediate token stream or AST.
pub fn assemble_source(source: &str) -> Result<Vec<u8>, AssembleError> {
    Assembler::new(source).assemble().map(|bytes| bytes.to_vec())
}

/// A line/column position an error can be anchored to, for `render`.
struct ErrorLocation {
    line: u32,
    column: u32,
    message: String,
}

impl AssembleError {
    fn location(&self) -> Option<ErrorLocation> {
        match self {
            AssembleError::Lex(LexError::UnexpectedCharacter { position, .. })
            | AssembleError::Lex(LexError::UnexpectedEof { position }) => Some(ErrorLocation {
                line: position.line,
                column: position.column,
                message: self.to_string(),
            }),
            AssembleError::Parse(ParseError::UnexpectedToken { span, .. })
            | AssembleError::Parse(ParseError::UnexpectedOperator { span, .. })
            | AssembleError::Parse(ParseError::DuplicateLabel { span, .. })
            | AssembleError::Parse(ParseError::ExpectedOperator { span, .. })
            | AssembleError::Parse(ParseError::UnknownPragma { span, .. }) => Some(ErrorLocation {
                line: span.start.line,
                column: span.start.column,
                message: self.to_string(),
            }),
            AssembleError::Parse(ParseError::UnexpectedEof { .. }) | AssembleError::Emit(_) => None,
        }
    }

    /// Renders a colored source snippet around the failing line, in the
    /// teacher's `panic_nicely` style, but returned as a `String` rather than
    /// used to panic: library errors should be handed back to the caller, not
    /// crash the process.
    pub fn render(&self, source: &str) -> String {
        let location = match self.location() {
            Some(location) => location,
            None => return self.to_string(),
        };

        let error_row_index = location.line as usize - 1;
        let range = 3i64;
        let min = (error_row_index as i64 - range).max(0) as usize;
        let max = (error_row_index as i64 + range) as usize;

        let mut nice_message = String::from("\n\n");
        for (row_index, row_text) in source.lines().enumerate() {
            if row_index > max {
                break;
            }
            if row_index < min {
                continue;
            }

            let col_string = format!("{:>4}: ", row_index + 1);
            nice_message.push_str(&col_string.cyan().to_string());
            nice_message.push_str(&row_text.bright_white().to_string());
            nice_message.push('\n');

            if row_index == error_row_index {
                let indent = " ".repeat(location.column as usize + 5);
                nice_message.push_str(&indent);
                nice_message
                    .push_str(&format!("^ {}", location.message).bright_red().to_string());
                nice_message.push('\n');
            }
        }

        nice_message
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn assembles_a_small_program() {
        let bytes = assemble_source("LDA #0x10 \n STA (0x20) \n BRK").unwrap();
        assert_eq!(bytes.len(), 5);
    }

    #[test]
    fn caches_stage_results_across_calls() {
        let mut assembler = Assembler::new("NOP");
        assembler.lex().unwrap();
        assert!(assembler.tokens().is_some());
        assert!(assembler.ast().is_none());
        assembler.assemble().unwrap();
        assert!(assembler.ast().is_some());
    }

    #[test]
    fn lex_error_renders_with_a_caret() {
        let mut assembler = Assembler::new("NOP @");
        let error = assembler.lex().unwrap_err();
        let rendered = error.render("NOP @");
        assert!(rendered.contains('^'));
    }

    #[test]
    fn assembles_byte_and_word_pragmas_alongside_code() {
        let bytes = assemble_source(".byte 0x01, 0x02 \n .word 0x1234 \n NOP").unwrap();
        assert_eq!(bytes, vec![0x01, 0x02, 0x34, 0x12, crate::opcodes::OpCode::NOP as u8]);
    }

    #[test]
    fn unresolved_label_is_reported() {
        let mut assembler = Assembler::new("JMP nowhere");
        let error = assembler.assemble().unwrap_err();
        assert!(matches!(error, AssembleError::Emit(EmitError::LabelNotFound { .. })));
    }
}
