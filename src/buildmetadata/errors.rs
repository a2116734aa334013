// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{num::ParseIntError, str::ParseBoolError};

use thiserror::Error;

use crate::regexp_cache::InvalidRegexError;

/// Any failure while compiling a territory. None of them is recoverable:
/// the territory being compiled is rejected as a whole.
#[derive(Debug, PartialEq, Error)]
pub enum BuildMetadataError {
    #[error("{0}")]
    Structure(#[from] StructureError),

    #[error("{0}")]
    PatternSyntax(#[from] PatternSyntaxError),

    #[error("{0}")]
    PossibleLength(#[from] PossibleLengthError),

    #[error("Short-number and alternate-formats metadata can not be built in the same pass")]
    ConflictingMetadataKind,

    #[error("Failed to build metadata for territory {territory}: {source}")]
    Territory {
        territory: String,
        #[source]
        source: Box<BuildMetadataError>,
    },
}

/// Wrong shape of the territory description: missing or repeated child
/// elements and attributes that can not be read.
#[derive(Debug, PartialEq, Error)]
pub enum StructureError {
    #[error("Invalid number of format patterns (0) for country: {territory}")]
    MissingFormat { territory: String },

    #[error("Invalid number of format patterns ({count}) for country: {territory}")]
    MultipleFormats { count: usize, territory: String },

    #[error("Invalid number of intlFormat patterns ({count}) for country: {territory}")]
    MultipleIntlFormats { count: usize, territory: String },

    #[error("Multiple elements with type {0} found.")]
    DuplicateTypeElement(String),

    #[error("Element <{0}> must not be empty")]
    EmptyElement(String),

    #[error("Invalid country code {value}: {source}")]
    InvalidCountryCode {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Attribute {attribute} must be true or false, found {value}")]
    InvalidBooleanAttribute {
        attribute: String,
        value: String,
        #[source]
        source: ParseBoolError,
    },
}

#[derive(Debug, PartialEq, Error)]
pub enum PatternSyntaxError {
    #[error("{0}")]
    InvalidRegex(#[from] InvalidRegexError),

    /// Authors put `|` at the end of each line of a pattern; deleting a line
    /// without its pipe leaves an empty alternative that matches anything.
    #[error("| should not be followed directly by ) in phone number regular expressions: {0}")]
    PipeFollowedByClosingParenthesis(String),
}

#[derive(Debug, PartialEq, Error)]
pub enum PossibleLengthError {
    #[error("Empty possibleLength string found.")]
    EmptyLengthSpec,

    #[error("Leading, trailing or adjacent commas in possible length string {0}, these should only separate numbers or ranges.")]
    EmptyLengthToken(String),

    #[error("Missing end of range character in possible length string {0}.")]
    MissingRangeEnd(String),

    #[error("Ranges must have exactly one - character: missing for {0}.")]
    MalformedRange(String),

    #[error("The first number in a range should be two or more digits lower than the second. Culprit possibleLength string: {0}")]
    DegenerateRange(String),

    #[error("Duplicate length element found ({length}) in possibleLength string {spec}")]
    DuplicateLength { length: i32, spec: String },

    #[error("For input string: \"{token}\"")]
    NonNumericLength {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Possible lengths must be positive, found {length} in possibleLength string {spec}")]
    NonPositiveLength { length: i32, spec: String },

    #[error("Possible length {length} exceeds the national number maximum of {max} in possibleLength string {spec}")]
    LengthTooLong { length: i32, max: i32, spec: String },

    #[error("Possible length(s) found specified as a normal and local-only length: {0:?}")]
    NormalAndLocalOverlap(Vec<i32>),

    #[error("Out-of-range possible length found ({length}), parent lengths {parent:?}.")]
    OutOfRangeLength { length: i32, parent: Vec<i32> },

    #[error("Out-of-range local-only possible length found ({length}), parent length {parent:?}.")]
    OutOfRangeLocalOnlyLength { length: i32, parent: Vec<i32> },

    #[error("Found local-only lengths in short-number metadata")]
    LocalOnlyForbiddenInShortNumbers,

    #[error("Found possible lengths specified at general desc: this should be derived from child elements. Affected country: {0}")]
    GeneralDescHasExplicitLengths(String),
}

impl BuildMetadataError {
    /// Attaches the territory being compiled to the error.
    pub fn for_territory(self, territory: impl Into<String>) -> Self {
        BuildMetadataError::Territory {
            territory: territory.into(),
            source: Box::new(self),
        }
    }
}
