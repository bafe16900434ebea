//! Validation utilities
//!
//! Presence checks only: a field is valid when it was supplied and is not empty.

/// Kết quả validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    /// Names of required fields that were absent or empty, in check order
    pub missing: Vec<&'static str>,
}

impl ValidationResult {
    /// Tạo kết quả valid
    pub fn valid() -> Self {
        Self { missing: vec![] }
    }

    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }

    /// Record `field` as missing unless `value` is present
    pub fn require(&mut self, field: &'static str, value: Option<&str>) -> &mut Self {
        if !is_present(value) {
            self.missing.push(field);
        }
        self
    }

    /// Convert into `Ok(())` or the list of missing fields
    pub fn into_result(self) -> Result<(), Vec<&'static str>> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(self.missing)
        }
    }
}

/// A text field counts as present when it is supplied and non-empty
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}
