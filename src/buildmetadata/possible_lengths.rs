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

use log::trace;
use strum::IntoEnumIterator;

use crate::{interfaces::MetadataElement, proto_gen::phonemetadata::PhoneNumberDesc};

use super::{
    enums::{MetadataKind, NumberType},
    errors::PossibleLengthError,
    helper_constants::{GENERAL_DESC, LOCAL_ONLY, MAX_LENGTH_FOR_NSN, NATIONAL, POSSIBLE_LENGTHS},
    helper_types::{DescField, PossibleLengths},
};

type Result<T> = std::result::Result<T, PossibleLengthError>;

/// Lengths of a per-type description, relative to the general description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeLengths {
    pub possible_length: DescField<Vec<i32>>,
    /// Local-only lengths are checked but only ever kept on the general
    /// description, so this is always `Inherited`.
    pub possible_length_local_only: DescField<Vec<i32>>,
}

/// Parses a possible length string such as `"4,7,[9-12]"`.
///
/// A range `[a-b]` stands for the lengths that are at least one digit
/// longer than `a` and at most `b` digits long. Every length may appear only
/// once in the whole string.
pub fn parse_possible_lengths(spec: &str) -> Result<BTreeSet<i32>> {
    if spec.is_empty() {
        return Err(PossibleLengthError::EmptyLengthSpec);
    }
    let mut lengths = BTreeSet::new();
    for token in spec.split(',') {
        if token.is_empty() {
            return Err(PossibleLengthError::EmptyLengthToken(spec.to_owned()));
        }
        if let Some(range) = token.strip_prefix('[') {
            let range = range
                .strip_suffix(']')
                .ok_or_else(|| PossibleLengthError::MissingRangeEnd(spec.to_owned()))?;
            let (min, max) = match range.split_once('-') {
                Some((min, max)) if !max.contains('-') => (parse_length(min)?, parse_length(max)?),
                _ => return Err(PossibleLengthError::MalformedRange(spec.to_owned())),
            };
            // [6-7] is better written as 6,7: the dash has to stand for at
            // least one length.
            if min.saturating_add(1) >= max {
                return Err(PossibleLengthError::DegenerateRange(spec.to_owned()));
            }
            check_max_length(max, spec)?;
            for length in (min + 1)..=max {
                insert_length(&mut lengths, length, spec)?;
            }
        } else {
            let length = parse_length(token)?;
            if length <= 0 {
                return Err(PossibleLengthError::NonPositiveLength {
                    length,
                    spec: spec.to_owned(),
                });
            }
            check_max_length(length, spec)?;
            insert_length(&mut lengths, length, spec)?;
        }
    }
    Ok(lengths)
}

fn parse_length(token: &str) -> Result<i32> {
    token
        .parse::<i32>()
        .map_err(|source| PossibleLengthError::NonNumericLength {
            token: token.to_owned(),
            source,
        })
}

fn check_max_length(length: i32, spec: &str) -> Result<()> {
    if length > MAX_LENGTH_FOR_NSN {
        return Err(PossibleLengthError::LengthTooLong {
            length,
            max: MAX_LENGTH_FOR_NSN,
            spec: spec.to_owned(),
        });
    }
    Ok(())
}

fn insert_length(lengths: &mut BTreeSet<i32>, length: i32, spec: &str) -> Result<()> {
    if !lengths.insert(length) {
        return Err(PossibleLengthError::DuplicateLength {
            length,
            spec: spec.to_owned(),
        });
    }
    Ok(())
}

/// Reads the `possibleLengths` children of a description element. The same
/// length may be repeated across several children, but not as both a normal
/// and a local-only length of one child.
pub fn read_possible_lengths<E: MetadataElement>(element: &E) -> Result<PossibleLengths> {
    let mut lengths = PossibleLengths::default();
    for lengths_element in element.children_named(POSSIBLE_LENGTHS) {
        let national = parse_possible_lengths(lengths_element.attribute(NATIONAL).unwrap_or_default())?;
        if let Some(local_only) = lengths_element.attribute(LOCAL_ONLY) {
            let local_only = parse_possible_lengths(local_only)?;
            let overlap: Vec<i32> = national.intersection(&local_only).copied().collect();
            if !overlap.is_empty() {
                return Err(PossibleLengthError::NormalAndLocalOverlap(overlap));
            }
            lengths.local_only.extend(local_only);
        }
        lengths.national.extend(national);
    }
    Ok(lengths)
}

/// Resolves the lengths of one number type against the general description.
pub fn resolve_type_lengths<E: MetadataElement>(
    type_element: &E,
    general_desc: &PhoneNumberDesc,
    short_number: bool,
) -> Result<TypeLengths> {
    let lengths = read_possible_lengths(type_element)?;
    if short_number && !lengths.local_only.is_empty() {
        return Err(PossibleLengthError::LocalOnlyForbiddenInShortNumbers);
    }

    let parent_national: BTreeSet<i32> = general_desc.possible_length.iter().copied().collect();
    let possible_length = if lengths.national.is_empty() || lengths.national == parent_national {
        DescField::Inherited
    } else {
        if !short_number {
            // The general description is derived from only some of the types,
            // every other type still has to stay within it.
            if let Some(&length) = lengths.national.difference(&parent_national).next() {
                return Err(PossibleLengthError::OutOfRangeLength {
                    length,
                    parent: general_desc.possible_length.clone(),
                });
            }
        }
        DescField::Overridden(lengths.national.iter().copied().collect())
    };

    if !short_number {
        for &length in &lengths.local_only {
            // 7 may be local-only for mobile but a normal length of fixed
            // line, in which case the general description lists it as normal.
            if !parent_national.contains(&length)
                && !general_desc.possible_length_local_only.contains(&length)
            {
                return Err(PossibleLengthError::OutOfRangeLocalOnlyLength {
                    length,
                    parent: general_desc.possible_length_local_only.clone(),
                });
            }
        }
    }

    Ok(TypeLengths {
        possible_length,
        possible_length_local_only: DescField::Inherited,
    })
}

/// Computes the lengths of the general description out of the number types
/// of the territory. The general description must not declare lengths of
/// its own.
pub fn aggregate_general_lengths<E: MetadataElement>(
    territory: &E,
    territory_id: &str,
    kind: MetadataKind,
) -> Result<PossibleLengths> {
    if territory
        .children_named(GENERAL_DESC)
        .iter()
        .any(|general_desc| !general_desc.children_named(POSSIBLE_LENGTHS).is_empty())
    {
        return Err(PossibleLengthError::GeneralDescHasExplicitLengths(territory_id.to_owned()));
    }

    let mut aggregated = PossibleLengths::default();
    for number_type in NumberType::iter().filter(|t| t.contributes_to_general_lengths(kind)) {
        for element in territory.children_named(number_type.tag()) {
            let lengths = read_possible_lengths(element)?;
            aggregated.national.extend(lengths.national);
            aggregated.local_only.extend(lengths.local_only);
        }
    }
    if kind.is_short_number() && !aggregated.local_only.is_empty() {
        return Err(PossibleLengthError::LocalOnlyForbiddenInShortNumbers);
    }
    aggregated
        .local_only
        .retain(|length| !aggregated.national.contains(length));

    trace!(
        "General lengths of {}: {:?}, local only {:?}",
        territory_id, aggregated.national, aggregated.local_only
    );
    Ok(aggregated)
}
