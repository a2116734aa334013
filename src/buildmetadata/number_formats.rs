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

use log::trace;

use crate::{
    interfaces::MetadataElement,
    proto_gen::phonemetadata::{NumberFormat, PhoneMetadata},
};

use super::{
    errors::{BuildMetadataError, PatternSyntaxError, StructureError},
    helper_constants::{
        AVAILABLE_FORMATS, CARRIER_CODE_FORMATTING_RULE, FORMAT, INTL_FORMAT, LEADING_DIGITS,
        NATIONAL_PREFIX_FORMATTING_RULE, NATIONAL_PREFIX_OPTIONAL_WHEN_FORMATTING, NOT_APPLICABLE,
        NUMBER_FORMAT, PATTERN,
    },
    helper_functions::{bool_attribute, required_text, territory_label},
    pattern_validator::PatternValidator,
    template_expander::{expand_carrier_code_rule, expand_national_prefix_rule},
};

/// Returns the text of the only `format` child of a number format.
pub fn national_format<E: MetadataElement>(
    metadata: &PhoneMetadata,
    element: &E,
) -> Result<String, StructureError> {
    let formats = element.children_named(FORMAT);
    match formats.as_slice() {
        [] => Err(StructureError::MissingFormat {
            territory: territory_label(metadata),
        }),
        [format] => Ok(required_text(*format, FORMAT)?.to_owned()),
        _ => Err(StructureError::MultipleFormats {
            count: formats.len(),
            territory: territory_label(metadata),
        }),
    }
}

/// Appends the international counterpart of `national_format` to the
/// metadata, if there is one.
///
/// Returns whether the number format declared its international format
/// explicitly. Without an `intlFormat` child the national format is reused as
/// is; `NA` means the number is not formatted internationally at all.
pub fn build_international_format<E: MetadataElement>(
    metadata: &mut PhoneMetadata,
    element: &E,
    national_format: &NumberFormat,
) -> Result<bool, StructureError> {
    let intl_formats = element.children_named(INTL_FORMAT);
    match intl_formats.as_slice() {
        [] => {
            if national_format.has_format() {
                metadata.intl_number_format.push(national_format.clone());
            }
            Ok(false)
        }
        [intl_format] => {
            let intl_format = required_text(*intl_format, INTL_FORMAT)?;
            if intl_format != NOT_APPLICABLE {
                let mut format = NumberFormat::new();
                format.pattern = national_format.pattern.clone();
                format.leading_digits_pattern = national_format.leading_digits_pattern.clone();
                format.set_format(intl_format.to_owned());
                metadata.intl_number_format.push(format);
            }
            Ok(true)
        }
        _ => Err(StructureError::MultipleIntlFormats {
            count: intl_formats.len(),
            territory: territory_label(metadata),
        }),
    }
}

/// Checks a carrier code formatting rule template, then expands it. The
/// national prefix is substituted afterwards, it is not a pattern.
fn carrier_code_rule(
    validator: &PatternValidator,
    template: &str,
    national_prefix: &str,
) -> Result<String, PatternSyntaxError> {
    let template = validator.validate_re(template, false)?;
    Ok(expand_carrier_code_rule(&template, national_prefix))
}

/// Builds the national and international number formats of the territory.
///
/// `national_prefix_formatting_rule` and
/// `national_prefix_optional_when_formatting` are the territory defaults,
/// the rule already expanded, used by formats which don't declare their own.
/// The territory defaults of both formatting rules are kept on the metadata.
pub fn build_available_formats<E: MetadataElement>(
    validator: &PatternValidator,
    metadata: &mut PhoneMetadata,
    territory: &E,
    national_prefix: &str,
    national_prefix_formatting_rule: Option<&str>,
    national_prefix_optional_when_formatting: bool,
) -> Result<(), BuildMetadataError> {
    let default_carrier_code_rule = territory
        .attribute(CARRIER_CODE_FORMATTING_RULE)
        .map(|template| carrier_code_rule(validator, template, national_prefix))
        .transpose()?;
    metadata.domestic_carrier_code_formatting_rule = default_carrier_code_rule.clone();
    if let Some(rule) = national_prefix_formatting_rule.filter(|rule| !rule.is_empty()) {
        metadata.set_national_prefix_formatting_rule(rule.to_owned());
    }

    let mut has_explicit_intl_format = false;
    for available_formats in territory.children_named(AVAILABLE_FORMATS) {
        for element in available_formats.children_named(NUMBER_FORMAT) {
            let mut format = NumberFormat::new();

            match element.attribute(NATIONAL_PREFIX_FORMATTING_RULE) {
                Some(template) => format.set_national_prefix_formatting_rule(
                    expand_national_prefix_rule(template, national_prefix),
                ),
                None => {
                    if let Some(rule) = national_prefix_formatting_rule.filter(|rule| !rule.is_empty()) {
                        format.set_national_prefix_formatting_rule(rule.to_owned());
                    }
                }
            }

            match bool_attribute(element, NATIONAL_PREFIX_OPTIONAL_WHEN_FORMATTING)? {
                Some(optional) => format.set_national_prefix_optional_when_formatting(optional),
                None if national_prefix_optional_when_formatting => {
                    format.set_national_prefix_optional_when_formatting(true)
                }
                None => (),
            }

            match element.attribute(CARRIER_CODE_FORMATTING_RULE) {
                Some(template) => format.set_domestic_carrier_code_formatting_rule(
                    carrier_code_rule(validator, template, national_prefix)?,
                ),
                None => format.domestic_carrier_code_formatting_rule = default_carrier_code_rule.clone(),
            }

            for leading_digits in element.children_named(LEADING_DIGITS) {
                format
                    .leading_digits_pattern
                    .push(validator.validate_re(required_text(leading_digits, LEADING_DIGITS)?, true)?);
            }

            if let Some(pattern) = element.attribute(PATTERN) {
                format.set_pattern(validator.validate_re(pattern, false)?);
            }

            format.set_format(national_format(metadata, element)?);
            has_explicit_intl_format |= build_international_format(metadata, element, &format)?;

            trace!(
                "Built number format {} -> {} (leading digits {:?})",
                format.pattern(),
                format.format(),
                format.leading_digits_pattern
            );
            metadata.number_format.push(format);
        }
    }

    // Without a single explicit international format the list would only
    // repeat the national one.
    if !has_explicit_intl_format {
        metadata.intl_number_format.clear();
    }
    Ok(())
}
