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

use std::borrow::Cow;

/// Removes every whitespace character of the given string.
///
/// Returns borrowed slice if there was nothing to remove.
pub fn strip_whitespace(s: &str) -> Cow<'_, str> {
    if !s.chars().any(char::is_whitespace) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().filter(|c| !c.is_whitespace()).collect())
}

/// Replaces the first occurrence of `from` in given string with `to`.
///
/// Returns borrowed slice if `from` was not found, so callers can
/// reuse the original allocation.
pub fn replace_first<'a>(s: &'a str, from: &str, to: &str) -> Cow<'a, str> {
    match s.find(from) {
        Some(start) => Cow::Owned(fast_cat::concat_str!(
            &s[..start],
            to,
            &s[start + from.len()..]
        )),
        None => Cow::Borrowed(s),
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use crate::string_util::{replace_first, strip_whitespace};

    #[test]
    fn test_strip_whitespace() {
        assert_eq!(strip_whitespace(" hello\tworld \n"), Cow::<str>::Owned("helloworld".to_owned()));
        assert!(matches!(strip_whitespace(r"\d{6}"), Cow::Borrowed(r"\d{6}")));
    }

    #[test]
    fn test_replace_first() {
        assert_eq!(replace_first("$NP $NP", "$NP", "0"), "0 $NP");
        assert!(matches!(replace_first("($1)", "$FG", "$1"), Cow::Borrowed("($1)")));
    }
}
