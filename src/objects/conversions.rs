// ABOUTME: Conversions between wire arrays and the tuple types exposed to users

//! Wire array conversions.

use crate::error::{AcpError, Result};

/// Convert a wire array with exactly three entries into a tuple.
pub(crate) fn triple_from_wire(values: &[f64]) -> Result<(f64, f64, f64)> {
    match values {
        [x, y, z] => Ok((*x, *y, *z)),
        _ => Err(AcpError::runtime(format!(
            "Expected an array with 3 entries, got {}.",
            values.len()
        ))),
    }
}

pub(crate) fn triple_to_wire(value: (f64, f64, f64)) -> Vec<f64> {
    vec![value.0, value.1, value.2]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triple_roundtrip() {
        let wire = triple_to_wire((1.0, 2.0, 3.0));
        assert_eq!(triple_from_wire(&wire).unwrap(), (1.0, 2.0, 3.0));
    }

    #[test]
    fn test_triple_from_wire_rejects_wrong_length() {
        assert!(triple_from_wire(&[1.0, 2.0]).is_err());
    }
}
