//! Random code generation

use rand::{rngs::OsRng, Rng};

use crate::errors::{DomainError, DomainResult};

/// Generate a random verification code of the given decimal length.
///
/// The code is drawn uniformly from `[10^(length-1) - 1, 10^length - 1]`
/// inclusive. The lower bound sits one below the smallest `length`-digit
/// value, so exactly one generatable value per length has one digit fewer;
/// callers relying on the distribution must keep this range intact.
///
/// Uses the OS CSPRNG. A zero length, or a length whose upper bound does
/// not fit in a `u64`, is a configuration error. Callers validate their
/// policy at startup, so this is never hit per-request.
pub fn generate_code(length: u32) -> DomainResult<u64> {
    let (lower, upper) = code_range(length)?;
    Ok(OsRng.gen_range(lower..=upper))
}

/// The inclusive bounds codes of a given length are drawn from.
pub(crate) fn code_range(length: u32) -> DomainResult<(u64, u64)> {
    if length == 0 {
        return Err(DomainError::InvalidConfiguration {
            message: "code length must be positive".to_string(),
        });
    }
    let magnitude = 10u64
        .checked_pow(length)
        .ok_or_else(|| DomainError::InvalidConfiguration {
            message: format!("code length {} exceeds the representable range", length),
        })?;
    let lower = 10u64.pow(length - 1) - 1;
    let upper = magnitude - 1;
    Ok((lower, upper))
}
