//! Output format adapters

mod spdx_json_formatter;

pub use spdx_json_formatter::SpdxJsonFormatter;
