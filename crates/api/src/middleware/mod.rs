//! Request middleware: the authentication extractor.

pub mod auth;
