//! Layout configuration validation.

use crate::schema::DirwmConfig;

use super::helpers::validate_range;

pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &DirwmConfig) {
    validate_range(errors, "layout.gap", config.layout.gap, 0, 16);
}
