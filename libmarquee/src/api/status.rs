//! HTTP status classification for catalog responses

use crate::error::FetchError;

/// Map a raw HTTP status onto the fetch outcome.
///
/// 200 is the only success. 401, 403, and 404 get their own variants, the
/// server-fault statuses 500, 502, and 503 share one, and every other status
/// is reported as [`FetchError::Unknown`] so nothing non-200 can pass for a
/// success. Callers never branch on raw status numbers outside this table.
pub fn classify_status(status: u16) -> Result<(), FetchError> {
    match status {
        200 => Ok(()),
        401 => Err(FetchError::Unauthorized { status }),
        403 => Err(FetchError::Forbidden { status }),
        404 => Err(FetchError::NotFound { status }),
        500 | 502 | 503 => Err(FetchError::ServerError { status }),
        _ => Err(FetchError::Unknown { status }),
    }
}
