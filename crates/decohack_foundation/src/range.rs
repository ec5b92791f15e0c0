//! Range validation helpers shared by every entity setter.

use crate::error::{Error, Result};

/// Checks that `value` lies within `[min, max]`.
///
/// # Errors
/// Returns a `FieldRange` error naming `field` if the value is out of bounds.
pub fn check_range(field: &'static str, min: i64, max: i64, value: i64) -> Result<()> {
    if value < min || value > max {
        return Err(Error::field_range(field, min, max, value));
    }
    Ok(())
}

/// Checks that `index` addresses a row of a table holding `count` rows.
///
/// # Errors
/// Returns an `OutOfRange` error naming `table` if the index is outside `0..count`.
pub fn check_index(table: &'static str, index: i64, count: usize) -> Result<usize> {
    match usize::try_from(index) {
        Ok(i) if i < count => Ok(i),
        _ => Err(Error::out_of_range(table, index, count)),
    }
}
