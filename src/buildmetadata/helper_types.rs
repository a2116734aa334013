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


use std::collections::BTreeSet;

use super::{enums::MetadataKind, errors::BuildMetadataError};

/// Settings of one compilation pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    /// Lite builds leave example numbers out to save space.
    pub lite_build: bool,
    pub kind: MetadataKind,
}

impl BuildOptions {
    pub fn new(kind: MetadataKind) -> Self {
        Self { lite_build: false, kind }
    }

    pub fn lite(kind: MetadataKind) -> Self {
        Self { lite_build: true, kind }
    }

    /// Builds options out of independent flags, rejecting combinations that
    /// don't describe a single kind of metadata.
    pub fn from_flags(
        lite_build: bool,
        short_number: bool,
        alternate_formats: bool,
    ) -> Result<Self, BuildMetadataError> {
        let kind = match (short_number, alternate_formats) {
            (true, true) => return Err(BuildMetadataError::ConflictingMetadataKind),
            (true, false) => MetadataKind::ShortNumber,
            (false, true) => MetadataKind::AlternateFormats,
            (false, false) => MetadataKind::Regular,
        };
        Ok(Self { lite_build, kind })
    }
}

/// Lengths read from `possibleLengths` elements, sorted and deduplicated.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PossibleLengths {
    pub national: BTreeSet<i32>,
    pub local_only: BTreeSet<i32>,
}

impl PossibleLengths {
    pub fn is_empty(&self) -> bool {
        self.national.is_empty() && self.local_only.is_empty()
    }
}

/// State of one field of a per-type description relative to the general
/// description it was derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescField<T> {
    /// Same as the general description; the compiled record leaves it out
    /// or carries the general value, depending on the field.
    Inherited,
    /// Declared by the type itself.
    Overridden(T),
    /// The type doesn't exist in the territory.
    NotApplicable,
}
