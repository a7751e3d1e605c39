//! Legacy resource id aliasing.

/// Maps deprecated resource ids onto the id they were merged into. All other ids map to
/// themselves. Call before any resource lookup or mutation.
pub fn canonicalize_resource(resource_id: i32) -> i32 {
    match resource_id {
        14 => 4,
        id => id,
    }
}
