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

use std::str::FromStr;

use log::trace;
use protobuf::MessageField;

use crate::{
    interfaces::MetadataElement,
    proto_gen::phonemetadata::{PhoneMetadata, PhoneNumberDesc},
};

use super::{
    enums::NumberType,
    errors::BuildMetadataError,
    helper_constants::{
        EXAMPLE_NUMBER, GENERAL_DESC, NATIONAL_NUMBER_PATTERN, NOT_APPLICABLE,
        POSSIBLE_NUMBER_PATTERN,
    },
    helper_functions::{
        get_number_desc_by_type, get_number_desc_by_type_mut, required_text, single_child,
        territory_label,
    },
    helper_types::{BuildOptions, DescField, PossibleLengths},
    pattern_validator::PatternValidator,
    possible_lengths::{aggregate_general_lengths, resolve_type_lengths},
};

type Result<T> = std::result::Result<T, BuildMetadataError>;

/// Reads the pattern child `tag` of a description element, whitespace
/// stripped and checked.
fn read_pattern<E: MetadataElement>(
    validator: &PatternValidator,
    element: &E,
    tag: &str,
) -> Result<Option<String>> {
    match element.children_named(tag).first() {
        Some(child) => Ok(Some(validator.validate_re(required_text(*child, tag)?, true)?)),
        None => Ok(None),
    }
}

fn read_example_number<E: MetadataElement>(
    element: &E,
    options: &BuildOptions,
) -> Result<Option<String>> {
    if options.lite_build {
        return Ok(None);
    }
    match element.children_named(EXAMPLE_NUMBER).first() {
        Some(child) => Ok(Some(required_text(*child, EXAMPLE_NUMBER)?.to_owned())),
        None => Ok(None),
    }
}

fn pattern_field(own: Option<String>) -> DescField<String> {
    own.map_or(DescField::Inherited, DescField::Overridden)
}

/// Value stored on a per-type description for a pattern field.
fn resolve_pattern(field: DescField<String>, general: &Option<String>) -> Option<String> {
    match field {
        DescField::Inherited => general.clone(),
        DescField::Overridden(pattern) => Some(pattern),
        DescField::NotApplicable => Some(NOT_APPLICABLE.to_owned()),
    }
}

/// Value stored on a per-type description for a length field. Lengths equal
/// to the general ones are left out.
fn resolve_lengths(field: DescField<Vec<i32>>) -> Vec<i32> {
    match field {
        DescField::Overridden(lengths) => lengths,
        DescField::Inherited | DescField::NotApplicable => Vec::new(),
    }
}

/// Builds the general description of the territory out of its `generalDesc`
/// child and the lengths aggregated from the number types.
pub fn build_general_desc<E: MetadataElement>(
    validator: &PatternValidator,
    territory: &E,
    lengths: PossibleLengths,
    options: &BuildOptions,
) -> Result<PhoneNumberDesc> {
    let mut general_desc = PhoneNumberDesc::new();
    if let Some(element) = single_child(territory, GENERAL_DESC)? {
        general_desc.national_number_pattern =
            read_pattern(validator, element, NATIONAL_NUMBER_PATTERN)?;
        general_desc.possible_number_pattern =
            read_pattern(validator, element, POSSIBLE_NUMBER_PATTERN)?;
        general_desc.example_number = read_example_number(element, options)?;
    }
    general_desc.possible_length = lengths.national.into_iter().collect();
    general_desc.possible_length_local_only = lengths.local_only.into_iter().collect();
    Ok(general_desc)
}

/// Builds the description of `type_name` for the territory.
///
/// Patterns start as a copy of the general description's and are replaced by
/// the ones declared on the type. Lengths on the other hand are only kept when
/// they differ from the general ones. Unknown or undeclared types get `"NA"`
/// patterns.
pub fn build_type_desc<E: MetadataElement>(
    validator: &PatternValidator,
    general_desc: &PhoneNumberDesc,
    territory: &E,
    type_name: &str,
    options: &BuildOptions,
) -> Result<PhoneNumberDesc> {
    let element = match NumberType::from_str(type_name) {
        Ok(number_type) => single_child(territory, number_type.tag())?,
        Err(_) => None,
    };

    let mut desc = PhoneNumberDesc::new();
    let Some(element) = element else {
        desc.national_number_pattern = resolve_pattern(DescField::NotApplicable, &None);
        desc.possible_number_pattern = resolve_pattern(DescField::NotApplicable, &None);
        return Ok(desc);
    };

    let national_number_pattern = pattern_field(read_pattern(validator, element, NATIONAL_NUMBER_PATTERN)?);
    let possible_number_pattern = pattern_field(read_pattern(validator, element, POSSIBLE_NUMBER_PATTERN)?);
    desc.national_number_pattern =
        resolve_pattern(national_number_pattern, &general_desc.national_number_pattern);
    desc.possible_number_pattern =
        resolve_pattern(possible_number_pattern, &general_desc.possible_number_pattern);
    desc.example_number = read_example_number(element, options)?;

    let lengths = resolve_type_lengths(element, general_desc, options.kind.is_short_number())?;
    desc.possible_length = resolve_lengths(lengths.possible_length);
    desc.possible_length_local_only = resolve_lengths(lengths.possible_length_local_only);

    trace!(
        "Built {} description: pattern {}, lengths {:?}",
        type_name,
        desc.national_number_pattern(),
        desc.possible_length
    );
    Ok(desc)
}

/// Sets the general description and the description of every type of the
/// metadata kind declared by the territory.
pub fn set_relevant_desc_patterns<E: MetadataElement>(
    validator: &PatternValidator,
    metadata: &mut PhoneMetadata,
    territory: &E,
    options: &BuildOptions,
) -> Result<()> {
    let general_lengths = aggregate_general_lengths(territory, &territory_label(metadata), options.kind)?;
    set_desc_patterns(validator, metadata, territory, general_lengths, options)
}

pub(super) fn set_desc_patterns<E: MetadataElement>(
    validator: &PatternValidator,
    metadata: &mut PhoneMetadata,
    territory: &E,
    general_lengths: PossibleLengths,
    options: &BuildOptions,
) -> Result<()> {
    let general_desc = build_general_desc(validator, territory, general_lengths, options)?;

    for number_type in options.kind.number_types() {
        // Undeclared types stay unset, "no data" is not the same as "NA".
        if single_child(territory, number_type.tag())?.is_none() {
            continue;
        }
        let desc = build_type_desc(validator, &general_desc, territory, number_type.tag(), options)?;
        *get_number_desc_by_type_mut(metadata, number_type) = MessageField::some(desc);
    }
    metadata.general_desc = MessageField::some(general_desc);

    if same_national_pattern(
        get_number_desc_by_type(metadata, NumberType::FixedLine),
        get_number_desc_by_type(metadata, NumberType::Mobile),
    ) {
        metadata.set_same_mobile_and_fixed_line_pattern(true);
    }
    Ok(())
}

fn same_national_pattern(
    fixed_line: &MessageField<PhoneNumberDesc>,
    mobile: &MessageField<PhoneNumberDesc>,
) -> bool {
    match (fixed_line.as_ref(), mobile.as_ref()) {
        (Some(fixed_line), Some(mobile)) => match (
            &fixed_line.national_number_pattern,
            &mobile.national_number_pattern,
        ) {
            (Some(fixed_line), Some(mobile)) => !fixed_line.is_empty() && fixed_line == mobile,
            _ => false,
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        buildmetadata::{
            enums::MetadataKind, helper_types::BuildOptions, pattern_validator::PatternValidator,
        },
        proto_gen::phonemetadata::{PhoneMetadata, PhoneNumberDesc},
        xml_element::XmlElement,
    };

    use super::{build_type_desc, set_relevant_desc_patterns};

    #[test]
    fn test_general_patterns_are_not_a_fallback_for_undeclared_types() {
        let validator = PatternValidator::new();
        let mut general_desc = PhoneNumberDesc::new();
        general_desc.set_national_number_pattern(r"\d{6}".to_owned());
        let territory = XmlElement::parse_str("<territory/>").unwrap();

        let desc = build_type_desc(
            &validator,
            &general_desc,
            &territory,
            "mobile",
            &BuildOptions::default(),
        )
        .unwrap();
        assert_eq!("NA", desc.national_number_pattern());
        assert!(desc.has_national_number_pattern());
    }

    #[test]
    fn test_undeclared_types_stay_unset() {
        let validator = PatternValidator::new();
        let territory = XmlElement::parse_str(
            r#"<territory><mobile><nationalNumberPattern>[67]\d{5}</nationalNumberPattern></mobile></territory>"#,
        )
        .unwrap();
        let mut metadata = PhoneMetadata::new();
        set_relevant_desc_patterns(&validator, &mut metadata, &territory, &BuildOptions::default())
            .unwrap();

        assert!(metadata.fixed_line.is_none());
        assert!(metadata.pager.is_none());
        assert_eq!(r"[67]\d{5}", metadata.mobile.national_number_pattern());
        assert!(metadata.general_desc.is_some());
        assert!(!metadata.same_mobile_and_fixed_line_pattern());
    }

    #[test]
    fn test_short_number_types_ignored_in_regular_metadata() {
        let validator = PatternValidator::new();
        let territory = XmlElement::parse_str(
            r#"<territory><shortCode><nationalNumberPattern>1\d{2}</nationalNumberPattern></shortCode></territory>"#,
        )
        .unwrap();
        let mut metadata = PhoneMetadata::new();
        set_relevant_desc_patterns(
            &validator,
            &mut metadata,
            &territory,
            &BuildOptions::new(MetadataKind::Regular),
        )
        .unwrap();
        assert!(metadata.short_code.is_none());
    }

    #[test]
    fn test_general_desc_patterns_are_inherited() {
        let validator = PatternValidator::new();
        let territory = XmlElement::parse_str(
            r#"<territory>
                 <generalDesc><nationalNumberPattern>[1-9]\d{8}</nationalNumberPattern></generalDesc>
                 <fixedLine><possibleLengths national="9"/></fixedLine>
               </territory>"#,
        )
        .unwrap();
        let mut metadata = PhoneMetadata::new();
        set_relevant_desc_patterns(&validator, &mut metadata, &territory, &BuildOptions::default())
            .unwrap();

        assert_eq!(r"[1-9]\d{8}", metadata.general_desc.national_number_pattern());
        assert_eq!(vec![9], metadata.general_desc.possible_length);
        assert_eq!(r"[1-9]\d{8}", metadata.fixed_line.national_number_pattern());
        assert!(metadata.fixed_line.possible_length.is_empty());
    }
}
