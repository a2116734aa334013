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

use std::sync::LazyLock;

use log::{debug, trace, warn};

use crate::{
    interfaces::MetadataElement,
    proto_gen::phonemetadata::{PhoneMetadata, PhoneMetadataCollection},
};

use super::{
    enums::MetadataKind,
    errors::{BuildMetadataError, StructureError},
    helper_constants::{
        COUNTRY_CODE, ID, INTERNATIONAL_PREFIX, LEADING_DIGITS, LEADING_ZERO_POSSIBLE,
        MAIN_COUNTRY_FOR_CODE, MOBILE_NUMBER_PORTABLE_REGION, NATIONAL_PREFIX,
        NATIONAL_PREFIX_FORMATTING_RULE, NATIONAL_PREFIX_FOR_PARSING,
        NATIONAL_PREFIX_OPTIONAL_WHEN_FORMATTING, NATIONAL_PREFIX_TRANSFORM_RULE,
        PREFERRED_EXTN_PREFIX, PREFERRED_INTERNATIONAL_PREFIX, TERRITORIES, TERRITORY,
    },
    helper_functions::bool_attribute,
    helper_types::BuildOptions,
    number_desc::set_desc_patterns,
    number_formats::build_available_formats,
    pattern_validator::PatternValidator,
    possible_lengths::aggregate_general_lengths,
    template_expander::expand_national_prefix_rule,
};

type Result<T> = std::result::Result<T, BuildMetadataError>;

/// Shared compiler instance. Compilation holds no state besides the cache of
/// checked patterns, so one instance can serve every territory and thread.
pub static METADATA_BUILDER: LazyLock<MetadataBuilder> = LazyLock::new(MetadataBuilder::new);

/// Returns the national prefix declared by the territory, or an empty string.
pub fn national_prefix<E: MetadataElement>(territory: &E) -> &str {
    territory.attribute(NATIONAL_PREFIX).unwrap_or_default()
}

/// Reads the scalar attributes of the territory element.
pub fn load_territory_tag_metadata<E: MetadataElement>(
    validator: &PatternValidator,
    territory_id: &str,
    territory: &E,
    national_prefix: &str,
) -> Result<PhoneMetadata> {
    let mut metadata = PhoneMetadata::new();
    metadata.set_id(territory_id.to_owned());

    if let Some(country_code) = territory.attribute(COUNTRY_CODE) {
        let country_code = country_code
            .parse::<i32>()
            .map_err(|source| StructureError::InvalidCountryCode {
                value: country_code.to_owned(),
                source,
            })?;
        metadata.set_country_code(country_code);
    }
    if let Some(leading_digits) = territory.attribute(LEADING_DIGITS) {
        metadata.set_leading_digits(validator.validate_re(leading_digits, false)?);
    }
    if let Some(international_prefix) = territory.attribute(INTERNATIONAL_PREFIX) {
        metadata.set_international_prefix(validator.validate_re(international_prefix, false)?);
    }
    if let Some(preferred_international_prefix) = territory.attribute(PREFERRED_INTERNATIONAL_PREFIX) {
        metadata.set_preferred_international_prefix(preferred_international_prefix.to_owned());
    }

    match territory.attribute(NATIONAL_PREFIX_FOR_PARSING) {
        Some(national_prefix_for_parsing) => {
            metadata.set_national_prefix_for_parsing(
                validator.validate_re(national_prefix_for_parsing, true)?,
            );
            if let Some(transform_rule) = territory.attribute(NATIONAL_PREFIX_TRANSFORM_RULE) {
                // Not a regular expression, but it may only reference groups
                // the engine understands.
                metadata.set_national_prefix_transform_rule(validator.validate_re(transform_rule, false)?);
            }
        }
        None => {
            if territory.attribute(NATIONAL_PREFIX_TRANSFORM_RULE).is_some() {
                warn!(
                    "Territory {} declares {} without {}, ignoring it",
                    territory_id, NATIONAL_PREFIX_TRANSFORM_RULE, NATIONAL_PREFIX_FOR_PARSING
                );
            }
            if !national_prefix.is_empty() {
                metadata.set_national_prefix_for_parsing(national_prefix.to_owned());
            }
        }
    }
    if !national_prefix.is_empty() {
        metadata.set_national_prefix(national_prefix.to_owned());
    }

    if let Some(preferred_extn_prefix) = territory.attribute(PREFERRED_EXTN_PREFIX) {
        metadata.set_preferred_extn_prefix(preferred_extn_prefix.to_owned());
    }
    if let Some(main_country_for_code) = bool_attribute(territory, MAIN_COUNTRY_FOR_CODE)? {
        metadata.set_main_country_for_code(main_country_for_code);
    }
    if let Some(leading_zero_possible) = bool_attribute(territory, LEADING_ZERO_POSSIBLE)? {
        metadata.set_leading_zero_possible(leading_zero_possible);
    }
    if let Some(mobile_number_portable_region) = bool_attribute(territory, MOBILE_NUMBER_PORTABLE_REGION)? {
        metadata.set_mobile_number_portable_region(mobile_number_portable_region);
    }
    Ok(metadata)
}

/// Compiles territory elements into `PhoneMetadata` records.
pub struct MetadataBuilder {
    validator: PatternValidator,
}

impl MetadataBuilder {
    pub fn new() -> Self {
        Self {
            validator: PatternValidator::new(),
        }
    }

    /// Compiles one territory.
    ///
    /// `national_prefix_override` replaces the `nationalPrefix` attribute of
    /// the territory when given.
    pub fn compile<E: MetadataElement>(
        &self,
        territory_id: &str,
        territory: &E,
        national_prefix_override: Option<&str>,
        options: &BuildOptions,
    ) -> Result<PhoneMetadata> {
        debug!("Compiling {:?} metadata of territory {}", options.kind, territory_id);
        let national_prefix = national_prefix_override.unwrap_or_else(|| national_prefix(territory));
        let mut metadata =
            load_territory_tag_metadata(&self.validator, territory_id, territory, national_prefix)?;

        // Checked even for alternate formats, where the lengths are unused.
        let general_lengths = aggregate_general_lengths(territory, territory_id, options.kind)?;
        if options.kind == MetadataKind::AlternateFormats {
            trace!("Skipping number descriptions of {}", territory_id);
        } else {
            set_desc_patterns(&self.validator, &mut metadata, territory, general_lengths, options)?;
        }

        let national_prefix_formatting_rule = territory
            .attribute(NATIONAL_PREFIX_FORMATTING_RULE)
            .map(|template| expand_national_prefix_rule(template, national_prefix));
        let national_prefix_optional_when_formatting =
            bool_attribute(territory, NATIONAL_PREFIX_OPTIONAL_WHEN_FORMATTING)?.unwrap_or(false);
        build_available_formats(
            &self.validator,
            &mut metadata,
            territory,
            national_prefix,
            national_prefix_formatting_rule.as_deref(),
            national_prefix_optional_when_formatting,
        )?;

        debug!(
            "Compiled territory {}: {} number formats, {} international",
            territory_id,
            metadata.number_format.len(),
            metadata.intl_number_format.len()
        );
        Ok(metadata)
    }

    /// Compiles every territory of a `territories` document independently.
    ///
    /// Each result is paired with the name of its territory: the `id`
    /// attribute, or the country code for territories without one.
    pub fn compile_all<E: MetadataElement>(
        &self,
        root: &E,
        options: &BuildOptions,
    ) -> Vec<(String, Result<PhoneMetadata>)> {
        root.children_named(TERRITORIES)
            .into_iter()
            .flat_map(|territories| territories.children_named(TERRITORY))
            .map(|territory| {
                let territory_id = territory.attribute(ID).unwrap_or_default();
                let name = if territory_id.is_empty() {
                    territory.attribute(COUNTRY_CODE).unwrap_or_default()
                } else {
                    territory_id
                };
                (name.to_owned(), self.compile(territory_id, territory, None, options))
            })
            .collect()
    }

    /// Compiles the whole document into a collection, failing on the first
    /// territory that doesn't compile.
    pub fn build_collection<E: MetadataElement>(
        &self,
        root: &E,
        options: &BuildOptions,
    ) -> Result<PhoneMetadataCollection> {
        let mut collection = PhoneMetadataCollection::new();
        for (territory, metadata) in self.compile_all(root, options) {
            collection
                .metadata
                .push(metadata.map_err(|err| err.for_territory(territory))?);
        }
        debug!("Built metadata collection of {} territories", collection.metadata.len());
        Ok(collection)
    }
}

impl Default for MetadataBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        buildmetadata::{
            errors::{BuildMetadataError, StructureError},
            helper_types::BuildOptions,
            pattern_validator::PatternValidator,
        },
        xml_element::XmlElement,
    };

    use super::{MetadataBuilder, load_territory_tag_metadata};

    #[test]
    fn test_invalid_country_code() {
        let validator = PatternValidator::new();
        let territory = XmlElement::parse_str("<territory countryCode='3x'/>").unwrap();
        assert!(matches!(
            load_territory_tag_metadata(&validator, "XX", &territory, ""),
            Err(BuildMetadataError::Structure(StructureError::InvalidCountryCode { .. }))
        ));
    }

    #[test]
    fn test_transform_rule_needs_parsing_prefix() {
        let validator = PatternValidator::new();
        let territory =
            XmlElement::parse_str("<territory countryCode='54' nationalPrefixTransformRule='9$1'/>").unwrap();
        let metadata = load_territory_tag_metadata(&validator, "AR", &territory, "0").unwrap();
        assert!(!metadata.has_national_prefix_transform_rule());
        assert_eq!("0", metadata.national_prefix_for_parsing());
    }

    #[test]
    fn test_national_prefix_override_wins() {
        let territory = XmlElement::parse_str(
            r#"<territory countryCode="7" nationalPrefix="8" nationalPrefixFormattingRule="$NP ($FG)">
                 <availableFormats>
                   <numberFormat pattern="(\d{3})(\d{3})(\d{4})"><format>$1 $2-$3</format></numberFormat>
                 </availableFormats>
                 <fixedLine><possibleLengths national="10"/></fixedLine>
               </territory>"#,
        )
        .unwrap();
        let metadata = MetadataBuilder::new()
            .compile("RU", &territory, Some("9"), &BuildOptions::default())
            .unwrap();
        assert_eq!("9", metadata.national_prefix());
        assert_eq!("9 ($1)", metadata.number_format[0].national_prefix_formatting_rule());
    }
}
