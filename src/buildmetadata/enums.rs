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

use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Categories of numbers a territory can describe. The string form of each
/// variant is the tag of the element describing it.
#[derive(Debug, EnumIter, EnumString, IntoStaticStr, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "camelCase")]
pub enum NumberType {
    /// **Fixed-line numbers.**
    /// Traditional landline numbers tied to a geographic location.
    FixedLine,
    /// **Mobile numbers.**
    Mobile,
    /// **Pagers.**
    Pager,
    /// **Toll-free numbers.**
    /// Present in both full and short-number metadata.
    TollFree,
    /// **Premium-rate numbers.**
    /// Present in both full and short-number metadata.
    PremiumRate,
    /// **Shared-cost numbers.**
    SharedCost,
    /// **Personal numbers.**
    PersonalNumber,
    /// **Voice over IP numbers.**
    Voip,
    /// **Universal Access Numbers.**
    Uan,
    /// **Voicemail access numbers.**
    Voicemail,
    /// Numbers that can't be dialled from abroad. This is a property several
    /// types may share rather than a type of its own, so it never contributes
    /// to the lengths of the general description.
    NoInternationalDialling,
    /// **Standard-rate short numbers.**
    StandardRate,
    /// **Short codes.**
    /// The most detailed short-number description; every other short-number
    /// type is a subset of it.
    ShortCode,
    /// **Carrier-specific short numbers.**
    CarrierSpecific,
    /// **SMS service short numbers.**
    SmsServices,
    /// **Emergency numbers.**
    Emergency,
}

impl NumberType {
    /// Returns the tag of the element describing this type.
    pub fn tag(self) -> &'static str {
        self.into()
    }

    /// Returns whether metadata of the given kind carries a description of
    /// this type.
    pub fn applies_to(self, kind: MetadataKind) -> bool {
        match kind {
            MetadataKind::Regular => matches!(
                self,
                NumberType::FixedLine
                    | NumberType::Mobile
                    | NumberType::Pager
                    | NumberType::TollFree
                    | NumberType::PremiumRate
                    | NumberType::SharedCost
                    | NumberType::PersonalNumber
                    | NumberType::Voip
                    | NumberType::Uan
                    | NumberType::Voicemail
                    | NumberType::NoInternationalDialling
            ),
            MetadataKind::ShortNumber => matches!(
                self,
                NumberType::TollFree
                    | NumberType::StandardRate
                    | NumberType::PremiumRate
                    | NumberType::ShortCode
                    | NumberType::CarrierSpecific
                    | NumberType::SmsServices
                    | NumberType::Emergency
            ),
            MetadataKind::AlternateFormats => false,
        }
    }

    /// Returns whether the lengths of this type are part of the general
    /// description of metadata of the given kind.
    pub fn contributes_to_general_lengths(self, kind: MetadataKind) -> bool {
        match kind {
            MetadataKind::ShortNumber => self == NumberType::ShortCode,
            _ => self.applies_to(kind) && self != NumberType::NoInternationalDialling,
        }
    }
}

/// Flavour of the metadata being compiled.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataKind {
    /// Full metadata used for parsing, validation and formatting.
    #[default]
    Regular,
    /// Metadata of short numbers such as emergency or service codes.
    ShortNumber,
    /// Extra formatting rules only; no number type descriptions at all.
    AlternateFormats,
}

impl MetadataKind {
    /// Guesses the kind from the conventional name of the input file.
    pub fn for_input_file(file_name: &str) -> Self {
        if file_name.contains("ShortNumberMetadata") {
            MetadataKind::ShortNumber
        } else if file_name.contains("PhoneNumberAlternateFormats") {
            MetadataKind::AlternateFormats
        } else {
            MetadataKind::Regular
        }
    }

    pub fn is_short_number(self) -> bool {
        self == MetadataKind::ShortNumber
    }

    /// Number types described by metadata of this kind.
    pub fn number_types(self) -> impl Iterator<Item = NumberType> {
        NumberType::iter().filter(move |number_type| number_type.applies_to(self))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{MetadataKind, NumberType};

    #[test]
    fn test_tags_match_element_names() {
        assert_eq!("fixedLine", NumberType::FixedLine.tag());
        assert_eq!("voip", NumberType::Voip.tag());
        assert_eq!("uan", NumberType::Uan.tag());
        assert_eq!("noInternationalDialling", NumberType::NoInternationalDialling.tag());
        assert_eq!("smsServices", NumberType::SmsServices.tag());
        assert_eq!(Ok(NumberType::PersonalNumber), NumberType::from_str("personalNumber"));
        assert!(NumberType::from_str("invalidType").is_err());
    }

    #[test]
    fn test_number_types_per_kind() {
        assert_eq!(11, MetadataKind::Regular.number_types().count());
        assert_eq!(7, MetadataKind::ShortNumber.number_types().count());
        assert_eq!(0, MetadataKind::AlternateFormats.number_types().count());

        assert!(!NumberType::NoInternationalDialling.contributes_to_general_lengths(MetadataKind::Regular));
        assert!(NumberType::Uan.contributes_to_general_lengths(MetadataKind::Regular));
        assert!(!NumberType::TollFree.contributes_to_general_lengths(MetadataKind::ShortNumber));
        assert!(NumberType::ShortCode.contributes_to_general_lengths(MetadataKind::ShortNumber));
    }

    #[test]
    fn test_kind_for_input_file() {
        assert_eq!(MetadataKind::ShortNumber, MetadataKind::for_input_file("resources/ShortNumberMetadata.xml"));
        assert_eq!(MetadataKind::AlternateFormats, MetadataKind::for_input_file("PhoneNumberAlternateFormats.xml"));
        assert_eq!(MetadataKind::Regular, MetadataKind::for_input_file("PhoneNumberMetadata.xml"));
    }
}
