// Field Reconciler: folds extracted and manually entered credentials into one
// de-duplicated list each. Manual entries always win on a shared key.
//
// Two passes over an insertion-ordered map: extracted entries first, then the
// manual ones overwrite. No provenance tag survives the merge.

pub mod certifications;
pub mod licenses;

pub use certifications::merge_certifications;
pub use licenses::merge_licenses;
