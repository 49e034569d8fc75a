//! Convenient re-exports of commonly used items, designed to make crate usage painless.
//!
//! For example, you can work with [`MemoryUnit`] directly, but the free conversion functions live
//! under [`radix`].
//!
//! The contents of this module can be used by including the following in any module:
//! ```
//! use numkit_core::prelude::*;
//! ```

#[doc(inline)]
pub use crate::error::{Error, Result};
#[doc(inline)]
pub use crate::number::{Number, NullSafe, Width};
#[doc(inline)]
pub use crate::radix::Radix;
#[doc(inline)]
pub use crate::units::MemoryUnit;

/// Includes the null-safe accessor, the perfect-square and digit helpers, and random sampling.
pub mod number {
    #[doc(inline)]
    pub use crate::number::{count_digits, is_perfect_square, null_safe, unique_random_sample_with};

    #[cfg(feature = "std")]
    #[doc(inline)]
    pub use crate::number::{unique_random_sample, unique_random_sample_below};
}

/// Includes the generic radix conversions. The fixed binary/octal/decimal/hexadecimal shortcuts
/// are under [`crate::radix`].
pub mod radix {
    #[doc(inline)]
    pub use crate::radix::{convert, convert_decimal, format, format_signed, parse};
}

/// Includes [`units::format_size`], which allows for pretty-printing of byte counts.
pub mod units {
    #[doc(inline)]
    pub use crate::units::format_size;
}
