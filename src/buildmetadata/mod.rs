mod helper_constants;
mod helper_functions;
pub mod errors;
pub mod enums;
pub mod metadata_builder;
pub mod number_desc;
pub mod number_formats;
pub mod pattern_validator;
pub mod possible_lengths;
pub mod template_expander;
pub(self) mod helper_types;

pub use enums::{MetadataKind, NumberType};
pub use errors::{BuildMetadataError, PatternSyntaxError, PossibleLengthError, StructureError};
pub use helper_types::{BuildOptions, DescField, PossibleLengths};
pub use metadata_builder::{MetadataBuilder, METADATA_BUILDER};
pub use pattern_validator::PatternValidator;
