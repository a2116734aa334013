use crate::{macros::edit_owned, string_util::replace_first};

use super::helper_constants::{FIRST_GROUP, FIRST_GROUP_PLACEHOLDER, NATIONAL_PREFIX_PLACEHOLDER};

/// Expands a national prefix formatting rule: `$NP` becomes the national
/// prefix and `$FG` becomes `$1`, the first group of the formatted number.
pub fn expand_national_prefix_rule(template: &str, national_prefix: &str) -> String {
    let rule = replace_first(template, NATIONAL_PREFIX_PLACEHOLDER, national_prefix).into_owned();
    edit_owned!(rule, |rule| replace_first(rule, FIRST_GROUP_PLACEHOLDER, FIRST_GROUP))
}

/// Expands a domestic carrier code formatting rule. `$CC` stays in place,
/// it is substituted with the carrier code when a number gets formatted.
pub fn expand_carrier_code_rule(template: &str, national_prefix: &str) -> String {
    let rule = replace_first(template, FIRST_GROUP_PLACEHOLDER, FIRST_GROUP).into_owned();
    edit_owned!(rule, |rule| replace_first(rule, NATIONAL_PREFIX_PLACEHOLDER, national_prefix))
}

#[cfg(test)]
mod tests {
    use super::{expand_carrier_code_rule, expand_national_prefix_rule};

    #[test]
    fn test_expand_national_prefix_rule() {
        assert_eq!("0$1", expand_national_prefix_rule("$NP$FG", "0"));
        assert_eq!("($1)", expand_national_prefix_rule("($FG)", "0"));
        assert_eq!("8 ($1)", expand_national_prefix_rule("$NP ($FG)", "8"));
        assert_eq!("$1", expand_national_prefix_rule("$NP$FG", ""));
    }

    #[test]
    fn test_expand_carrier_code_rule() {
        assert_eq!("0$CC $1", expand_carrier_code_rule("$NP$CC $FG", "0"));
        assert_eq!("0 $CC ($1)", expand_carrier_code_rule("$NP $CC ($FG)", "0"));
    }
}
