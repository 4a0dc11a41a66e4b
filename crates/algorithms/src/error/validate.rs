//! Validation utilities for the hash engine

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a minimum length
#[inline(always)]
pub fn min_length(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::Length {
            context,
            expected: min,
            actual,
        });
    }
    Ok(())
}

/// Validate that a state accepts an operation
#[inline(always)]
pub fn state(condition: bool, operation: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::State { operation, reason });
    }
    Ok(())
}
