use protobuf::MessageField;

use crate::{
    interfaces::MetadataElement,
    proto_gen::phonemetadata::{PhoneMetadata, PhoneNumberDesc},
};

use super::{enums::NumberType, errors::StructureError};

/// Name of the territory used in error messages: its id, or the country
/// calling code for entities that have no id.
pub(super) fn territory_label(metadata: &PhoneMetadata) -> String {
    if !metadata.id().is_empty() {
        return metadata.id().to_owned();
    }
    let mut buf = itoa::Buffer::new();
    buf.format(metadata.country_code()).to_owned()
}

/// Returns the text of the element, failing if it has none.
pub(super) fn required_text<'a, E: MetadataElement>(
    element: &'a E,
    tag: &str,
) -> Result<&'a str, StructureError> {
    element
        .text()
        .ok_or_else(|| StructureError::EmptyElement(tag.to_owned()))
}

/// Returns the only child with the given tag, if any. Number types and the
/// general description may be declared at most once per territory.
pub(super) fn single_child<'a, E: MetadataElement>(
    parent: &'a E,
    tag: &str,
) -> Result<Option<&'a E>, StructureError> {
    let elements = parent.children_named(tag);
    match elements.as_slice() {
        [] => Ok(None),
        [element] => Ok(Some(*element)),
        _ => Err(StructureError::DuplicateTypeElement(tag.to_owned())),
    }
}

/// Reads an optional `true`/`false` attribute.
pub(super) fn bool_attribute<E: MetadataElement>(
    element: &E,
    name: &str,
) -> Result<Option<bool>, StructureError> {
    element
        .attribute(name)
        .map(|value| {
            value.parse::<bool>().map_err(|source| StructureError::InvalidBooleanAttribute {
                attribute: name.to_owned(),
                value: value.to_owned(),
                source,
            })
        })
        .transpose()
}

/// Returns the field of the metadata holding the description of the type.
pub(crate) fn get_number_desc_by_type(
    metadata: &PhoneMetadata,
    number_type: NumberType,
) -> &MessageField<PhoneNumberDesc> {
    match number_type {
        NumberType::FixedLine => &metadata.fixed_line,
        NumberType::Mobile => &metadata.mobile,
        NumberType::Pager => &metadata.pager,
        NumberType::TollFree => &metadata.toll_free,
        NumberType::PremiumRate => &metadata.premium_rate,
        NumberType::SharedCost => &metadata.shared_cost,
        NumberType::PersonalNumber => &metadata.personal_number,
        NumberType::Voip => &metadata.voip,
        NumberType::Uan => &metadata.uan,
        NumberType::Voicemail => &metadata.voicemail,
        NumberType::NoInternationalDialling => &metadata.no_international_dialling,
        NumberType::StandardRate => &metadata.standard_rate,
        NumberType::ShortCode => &metadata.short_code,
        NumberType::CarrierSpecific => &metadata.carrier_specific,
        NumberType::SmsServices => &metadata.sms_services,
        NumberType::Emergency => &metadata.emergency,
    }
}

pub(super) fn get_number_desc_by_type_mut(
    metadata: &mut PhoneMetadata,
    number_type: NumberType,
) -> &mut MessageField<PhoneNumberDesc> {
    match number_type {
        NumberType::FixedLine => &mut metadata.fixed_line,
        NumberType::Mobile => &mut metadata.mobile,
        NumberType::Pager => &mut metadata.pager,
        NumberType::TollFree => &mut metadata.toll_free,
        NumberType::PremiumRate => &mut metadata.premium_rate,
        NumberType::SharedCost => &mut metadata.shared_cost,
        NumberType::PersonalNumber => &mut metadata.personal_number,
        NumberType::Voip => &mut metadata.voip,
        NumberType::Uan => &mut metadata.uan,
        NumberType::Voicemail => &mut metadata.voicemail,
        NumberType::NoInternationalDialling => &mut metadata.no_international_dialling,
        NumberType::StandardRate => &mut metadata.standard_rate,
        NumberType::ShortCode => &mut metadata.short_code,
        NumberType::CarrierSpecific => &mut metadata.carrier_specific,
        NumberType::SmsServices => &mut metadata.sms_services,
        NumberType::Emergency => &mut metadata.emergency,
    }
}
