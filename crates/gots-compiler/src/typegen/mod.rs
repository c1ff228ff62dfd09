//! Declaration generators for target languages.

pub mod typescript;
