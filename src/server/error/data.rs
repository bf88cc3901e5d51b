use thiserror::Error;
use uuid::Uuid;

/// Stored data that cannot be mapped into the domain model.
///
/// These values originate from persisted rows, so they can predate a schema
/// change; mapping failures are reported as errors rather than panics or
/// silent defaults.
#[derive(Error, Debug)]
pub enum DataError {
    /// A stored enum column holds a value outside the known table.
    #[error("unrecognized {field} value '{value}' stored for {entity} {id}")]
    UnknownEnumValue {
        entity: &'static str,
        field: &'static str,
        id: Uuid,
        value: String,
    },

    /// One or more entries of a stored blob list failed to decode.
    ///
    /// Every corrupt entry in the list is reported, not only the first, so a
    /// single pass surfaces the full extent of the damage.
    #[error("undecodable {field} entries stored for {entity} {id}: {details}")]
    CorruptBlobList {
        entity: &'static str,
        field: &'static str,
        id: Uuid,
        details: String,
    },
}
