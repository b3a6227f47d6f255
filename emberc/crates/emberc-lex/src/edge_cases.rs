//! Edge case tests for emberc-lex
