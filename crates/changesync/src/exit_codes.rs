//! Exit codes for the binary

use changesync_core::ChangesyncError;

/// Success
pub const SUCCESS: u8 = 0;

/// General error
pub const ERROR: u8 = 1;

/// Configuration error
pub const CONFIG_ERROR: u8 = 2;

/// No versions could be extracted from the source script
pub const SOURCE_ERROR: u8 = 3;

/// The changelog document could not be written
pub const WRITE_ERROR: u8 = 4;

/// Map an error to the process exit code
pub fn for_error(err: &ChangesyncError) -> u8 {
    match err {
        ChangesyncError::Config(_) => CONFIG_ERROR,
        ChangesyncError::Source(_) => SOURCE_ERROR,
        ChangesyncError::Changelog(_) => WRITE_ERROR,
        _ => ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use changesync_core::SourceError;

    #[test]
    fn test_source_error_code() {
        let err = ChangesyncError::from(SourceError::ListNotFound);
        assert_eq!(for_error(&err), SOURCE_ERROR);
    }

    #[test]
    fn test_generic_error_code() {
        let err = ChangesyncError::other("boom");
        assert_eq!(for_error(&err), ERROR);
    }
}
