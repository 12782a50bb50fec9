//! Pagination window for the listing endpoint

use serde::Deserialize;

use super::ValidationError;

/// Maximum page size
const MAX_LIMIT: i64 = 100;

/// Default page size
const DEFAULT_LIMIT: i64 = 5;

/// Validated limit/offset pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    limit: i64,
    offset: i64,
}

impl PageWindow {
    /// Create a window with range checks.
    ///
    /// Out-of-range values are rejected, not clamped:
    /// - limit must be within 0..=100
    /// - offset must be >= 0
    pub fn new(limit: i64, offset: i64) -> Result<Self, ValidationError> {
        if !(0..=MAX_LIMIT).contains(&limit) {
            return Err(ValidationError::OutOfRange {
                field: "limit",
                min: 0,
                max: MAX_LIMIT,
            });
        }

        if offset < 0 {
            return Err(ValidationError::Negative { field: "offset" });
        }

        Ok(Self { limit, offset })
    }

    /// SQL LIMIT value.
    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// SQL OFFSET value.
    pub fn offset(&self) -> i64 {
        self.offset
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

/// Query parameters for the listing endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl TryFrom<PageParams> for PageWindow {
    type Error = ValidationError;

    fn try_from(params: PageParams) -> Result<Self, ValidationError> {
        Self::new(
            params.limit.unwrap_or(DEFAULT_LIMIT),
            params.offset.unwrap_or(0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let w = PageWindow::default();
        assert_eq!(w.limit(), 5);
        assert_eq!(w.offset(), 0);

        let w = PageWindow::try_from(PageParams::default()).unwrap();
        assert_eq!(w, PageWindow::default());
    }

    #[test]
    fn accepts_bounds() {
        assert!(PageWindow::new(0, 0).is_ok());
        assert!(PageWindow::new(100, 0).is_ok());

        let w = PageWindow::new(100, 9999).unwrap();
        assert_eq!(w.limit(), 100);
        assert_eq!(w.offset(), 9999);
    }

    #[test]
    fn rejects_limit_out_of_range() {
        assert!(PageWindow::new(101, 0).is_err());
        assert!(PageWindow::new(-1, 0).is_err());
    }

    #[test]
    fn rejects_negative_offset() {
        assert!(PageWindow::new(5, -1).is_err());
    }

    #[test]
    fn partial_params_fall_back_to_defaults() {
        let w = PageWindow::try_from(PageParams {
            limit: Some(10),
            offset: None,
        })
        .unwrap();
        assert_eq!(w.limit(), 10);
        assert_eq!(w.offset(), 0);

        let w = PageWindow::try_from(PageParams {
            limit: None,
            offset: Some(7),
        })
        .unwrap();
        assert_eq!(w.limit(), 5);
        assert_eq!(w.offset(), 7);
    }
}
