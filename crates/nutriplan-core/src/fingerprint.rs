//! Content fingerprints for plan values.
//!
//! Hosts memoize totals and shopping lists per fingerprint and use it to detect
//! that a stored plan changed under them.

use sha2::{Digest, Sha256};

use crate::models::MealPlan;

/// Lowercase hex SHA-256 of the plan's JSON serialization.
pub fn plan_fingerprint(plan: &MealPlan) -> Result<String, serde_json::Error> {
    let json = serde_json::to_vec(plan)?;
    Ok(hex::encode(Sha256::digest(&json)))
}
