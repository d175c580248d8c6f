//! Shared types for the Nuevo compiler.
//!
//! Every phase of the toolchain speaks the vocabulary defined here:
//!
//! - [`token`]: [`token::Token`] and [`token::TokenKind`], the tokenizer's output
//! - [`span`]: byte-offset [`span::Span`]s and the [`span::LineIndex`] for
//!   on-demand line/column lookup
//! - [`error`]: [`error::LexError`], how a failed scan is reported

pub mod error;
pub mod span;
pub mod token;
