//! List issuer schemes

use cardcheck::output::{OutputMode, SchemeListResult};

/// Print every scheme in precedence order
pub fn schemes(mode: OutputMode) {
    SchemeListResult::all().render(mode);
}
