use crate::error::{FetchError, Result};

/// Reject a response whose `Content-Length` differs from the expected size.
///
/// A missing header counts as a mismatch.
///
/// # Examples
///
/// ```
/// use relfetch_fetch::core::check_content_length;
///
/// assert!(check_content_length(1000, Some(1000)).is_ok());
/// assert!(check_content_length(1000, Some(999)).is_err());
/// assert!(check_content_length(1000, None).is_err());
/// ```
pub fn check_content_length(expected: u64, reported: Option<u64>) -> Result<()> {
    match reported {
        Some(len) if len == expected => Ok(()),
        _ => Err(FetchError::SizeMismatch { expected, reported }),
    }
}

/// Fail when fewer than `expected` bytes reached the disk.
pub fn check_complete(expected: u64, written: u64) -> Result<()> {
    if written < expected {
        return Err(FetchError::Incomplete { expected, written });
    }
    Ok(())
}

/// How many bytes of an incoming chunk fit before `expected` is reached.
pub fn bytes_to_keep(chunk_len: usize, written: u64, expected: u64) -> usize {
    let remaining = expected.saturating_sub(written);
    usize::try_from(remaining).map_or(chunk_len, |remaining| chunk_len.min(remaining))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_length_mismatch_reports_both_sizes() {
        let err = check_content_length(1000, Some(1200)).unwrap_err();
        assert!(matches!(
            err,
            FetchError::SizeMismatch {
                expected: 1000,
                reported: Some(1200)
            }
        ));
        assert!(err.to_string().contains("1200"));
    }

    #[test]
    fn test_missing_content_length() {
        let err = check_content_length(10, None).unwrap_err();
        assert!(err.to_string().contains("no Content-Length"));
    }

    #[test]
    fn test_check_complete() {
        assert!(check_complete(100, 100).is_ok());
        assert!(check_complete(100, 101).is_ok());
        assert!(matches!(
            check_complete(100, 99),
            Err(FetchError::Incomplete {
                expected: 100,
                written: 99
            })
        ));
    }

    #[test]
    fn test_bytes_to_keep() {
        assert_eq!(bytes_to_keep(8192, 0, 1000), 1000);
        assert_eq!(bytes_to_keep(500, 0, 1000), 500);
        assert_eq!(bytes_to_keep(500, 800, 1000), 200);
        assert_eq!(bytes_to_keep(500, 1000, 1000), 0);
        assert_eq!(bytes_to_keep(500, 1200, 1000), 0);
    }
}
