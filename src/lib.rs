mod interfaces;
/// This module is automatically generated from /resources/*.proto
mod proto_gen;
mod regexp_cache;
mod regex_based_validator;
pub mod buildmetadata;
pub mod xml_element;
pub(crate) mod string_util;

/// Small helpers for the `Cow`-returning string utilities, so call sites
/// read as a single edit instead of a match.
mod macros;

#[cfg(test)]
mod tests;

pub use buildmetadata::{
    BuildMetadataError, BuildOptions, METADATA_BUILDER, MetadataBuilder, MetadataKind, NumberType,
};
pub use interfaces::MetadataElement;
pub use proto_gen::phonemetadata::{
    NumberFormat, PhoneMetadata, PhoneMetadataCollection, PhoneNumberDesc,
};
pub use regexp_cache::InvalidRegexError;
pub use xml_element::{XmlElement, XmlTreeError};
