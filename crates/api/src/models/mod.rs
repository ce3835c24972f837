//! Wire-level record types for the two stored entities.
//!
//! Each entity comes in three shapes: the stored record (`Tour`/`User`), a
//! creation draft (`NewTour`/`NewUser`) whose fields are all optional so
//! validation can report exactly what is missing, and a patch
//! (`TourPatch`/`UserPatch`) whose present fields overwrite on update.

pub mod tour;
pub mod user;

pub use tour::{NewTour, Tour, TourPatch};
pub use user::{NewUser, User, UserPatch};

/// Take a required string field out of a draft, recording it as missing when
/// absent or empty.
///
/// Returns an empty placeholder in the missing case; callers bail out before
/// using it once any field has been recorded.
fn require(
    missing: &mut Vec<&'static str>,
    field: &'static str,
    value: Option<String>,
) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => {
            missing.push(field);
            String::new()
        }
    }
}

/// Record a required string field as missing when absent or empty, without
/// consuming the draft.
fn check(missing: &mut Vec<&'static str>, field: &'static str, value: Option<&str>) {
    if value.is_none_or(str::is_empty) {
        missing.push(field);
    }
}
