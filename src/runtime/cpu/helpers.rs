//! Helper functions for CPU tensor operations

use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::random::check_rate;

// ============================================================================
// DType Dispatch Macro
// ============================================================================

/// Macro for dtype dispatch to typed kernel calls
///
/// This macro matches on dtype and evaluates the block with `T` bound to the
/// matching Rust type. The block's value is the value of the macro.
/// Usage: `dispatch_dtype!(dtype, T => { code using T })`
macro_rules! dispatch_dtype {
    ($dtype:expr, $T:ident => $body:block) => {
        match $dtype {
            $crate::dtype::DType::F64 => {
                type $T = f64;
                $body
            }
            $crate::dtype::DType::F32 => {
                type $T = f32;
                $body
            }
        }
    };
}

pub(crate) use dispatch_dtype;

/// Check every rate before any sampling starts
///
/// Reports the first offending element in row-major order. On success returns
/// the largest rate, 0 for an empty slice.
pub(crate) fn validate_rates<T: Element>(rates: &[T]) -> Result<f64> {
    let mut peak = 0.0f64;
    for (index, &rate) in rates.iter().enumerate() {
        let value = rate.to_f64();
        if let Err(reason) = check_rate(value) {
            return Err(Error::invalid_rate(index, value, reason));
        }
        peak = peak.max(value);
    }
    Ok(peak)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtype::DType;

    #[test]
    fn test_validate_reports_first_bad_index() {
        let rates = [1.0f32, 0.0, f32::NAN, -1.0];
        match validate_rates(&rates) {
            Err(Error::InvalidRate { index, .. }) => assert_eq!(index, 2),
            other => panic!("expected InvalidRate, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_accepts_zero_and_large() {
        assert_eq!(validate_rates(&[0.0f64, 1e-300, 1e9, 4.0]).unwrap(), 1e9);
        assert_eq!(validate_rates::<f64>(&[]).unwrap(), 0.0);
    }

    #[test]
    fn test_dispatch_binds_type() {
        let size = |dtype: DType| dispatch_dtype!(dtype, T => { std::mem::size_of::<T>() });
        assert_eq!(size(DType::F64), 8);
        assert_eq!(size(DType::F32), 4);
    }
}
