//! Error handling foundation for the copper-hornet client.
//!
//! This module provides only the `Result` type alias using rootcause.
//! Each crate defines its own domain-specific error types in its own
//! error module; errors cross crate seams as rootcause `Report`s.

use rootcause::Report;

/// A Result type alias using rootcause's Report for error handling.
///
/// Each layer maps lower-level failures into its own error enum before
/// wrapping them in a `Report`.
pub type Result<T, C = ()> = std::result::Result<T, Report<C>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_type_works() {
        let ok: Result<i32> = Ok(42);
        assert_eq!(ok.expect("should be ok"), 42);
    }
}
