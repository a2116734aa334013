// Element and attribute names of the territory description format.

pub const TERRITORIES: &str = "territories";
pub const TERRITORY: &str = "territory";
pub const ID: &str = "id";

// Territory attributes.
pub const COUNTRY_CODE: &str = "countryCode";
pub const LEADING_DIGITS: &str = "leadingDigits";
pub const INTERNATIONAL_PREFIX: &str = "internationalPrefix";
pub const PREFERRED_INTERNATIONAL_PREFIX: &str = "preferredInternationalPrefix";
pub const NATIONAL_PREFIX: &str = "nationalPrefix";
pub const NATIONAL_PREFIX_FOR_PARSING: &str = "nationalPrefixForParsing";
pub const NATIONAL_PREFIX_TRANSFORM_RULE: &str = "nationalPrefixTransformRule";
pub const PREFERRED_EXTN_PREFIX: &str = "preferredExtnPrefix";
pub const MAIN_COUNTRY_FOR_CODE: &str = "mainCountryForCode";
pub const LEADING_ZERO_POSSIBLE: &str = "leadingZeroPossible";
pub const MOBILE_NUMBER_PORTABLE_REGION: &str = "mobileNumberPortableRegion";

// Shared by territories and number formats.
pub const NATIONAL_PREFIX_FORMATTING_RULE: &str = "nationalPrefixFormattingRule";
pub const CARRIER_CODE_FORMATTING_RULE: &str = "carrierCodeFormattingRule";
pub const NATIONAL_PREFIX_OPTIONAL_WHEN_FORMATTING: &str = "nationalPrefixOptionalWhenFormatting";

// Formatting rules.
pub const AVAILABLE_FORMATS: &str = "availableFormats";
pub const NUMBER_FORMAT: &str = "numberFormat";
pub const PATTERN: &str = "pattern";
pub const FORMAT: &str = "format";
pub const INTL_FORMAT: &str = "intlFormat";

// Number descriptions.
pub const GENERAL_DESC: &str = "generalDesc";
pub const NATIONAL_NUMBER_PATTERN: &str = "nationalNumberPattern";
pub const POSSIBLE_NUMBER_PATTERN: &str = "possibleNumberPattern";
pub const EXAMPLE_NUMBER: &str = "exampleNumber";
pub const POSSIBLE_LENGTHS: &str = "possibleLengths";
pub const NATIONAL: &str = "national";
pub const LOCAL_ONLY: &str = "localOnly";

/// Longest national significant number the ITU allows.
pub const MAX_LENGTH_FOR_NSN: i32 = 17;

/// Marks a pattern or an international format that doesn't apply.
pub const NOT_APPLICABLE: &str = "NA";

// Placeholders of formatting rule templates.
pub const NATIONAL_PREFIX_PLACEHOLDER: &str = "$NP";
pub const FIRST_GROUP_PLACEHOLDER: &str = "$FG";
pub const FIRST_GROUP: &str = "$1";
