//! Residues modulo λ, the constant behind the narrowed uniqueness test.
//!
//! λ is the asymptotic wavelength of Ulam-type sequences (Gibbs,
//! "An Efficient Method for Computing Ulam Numbers"): accepted terms cluster
//! away from the middle of each λ-period, so a term's residue constrains
//! which earlier terms can participate in a sum reaching it. All residue
//! comparisons share a single tolerance to keep band boundaries consistent.

/// Period of the residue clustering for U(1,n) sequences.
pub const LAMBDA: f64 = 2.44344296778474;

/// Tolerance applied to every residue band boundary.
pub const TOLERANCE: f64 = 0.0001;

/// Residue of `u` modulo λ, normalized into [0, 1).
#[inline]
pub fn residue(u: u64) -> f64 {
    (u as f64) % LAMBDA / LAMBDA
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn residue_is_normalized() {
        for u in 1..=10_000u64 {
            let r = residue(u);
            assert!((0.0..1.0).contains(&r), "residue({u}) = {r} out of range");
        }
    }

    #[test]
    fn residue_of_lambda_multiple_neighborhood() {
        // 2 is just below one period, 5 just past two periods.
        assert!(residue(2) > 0.8);
        assert!(residue(5) < 0.1);
    }
}
