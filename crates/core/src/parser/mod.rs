//! Dart source scanning
//!
//! A `logos` tokenizer rather than a full parser: it knows enough about
//! comments, string literals and brackets to find call expressions and
//! their arguments reliably, including in incomplete code.

pub mod calls;
pub mod lexer;
pub mod strings;

// Re-export commonly used items
pub use calls::{declares_main, enclosing_call, find_calls};
pub use lexer::{Token, TokenKind, tokenize};
pub use strings::{unquote, unquote_part};
