// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned when a conversion is asked to map from a degenerate range.
///
/// Mapping out of a zero-width (or non-finite) source range would divide by
/// zero, so [`rescale`](crate::rescale) and
/// [`rescale_coordinates`](crate::rescale_coordinates) report it instead of
/// producing `NaN` or infinities.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InvalidArgument {
    /// Lower bound of the source range.
    pub min: f64,
    /// Upper bound of the source range.
    pub max: f64,
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot rescale from degenerate range [{}, {}]",
            self.min, self.max
        )
    }
}

impl core::error::Error for InvalidArgument {}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::InvalidArgument;

    #[test]
    fn formats_range() {
        let err = InvalidArgument { min: 2.0, max: 2.0 };
        assert_eq!(
            format!("{err}"),
            "cannot rescale from degenerate range [2, 2]"
        );
        assert_eq!(
            format!("{err:?}"),
            "InvalidArgument { min: 2.0, max: 2.0 }"
        );
    }
}
