//! SPDX serialization adapters

mod tag_value_parser;

pub use tag_value_parser::TagValueParser;
