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

use std::{borrow::Cow, sync::LazyLock};

use log::error;
use regex::Regex;

use crate::{
    interfaces::PatternSyntaxApi, regex_based_validator::RegexBasedValidator,
    string_util::strip_whitespace,
};

use super::errors::PatternSyntaxError;

/// `|` directly followed by `)`, possibly split by a line break.
static PIPE_BEFORE_CLOSING_PARENTHESIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\|\s*\)").expect("Pattern is a valid constant regex"));

/// Normalizes and syntax-checks the patterns of territory descriptions.
pub struct PatternValidator {
    syntax_api: Box<dyn PatternSyntaxApi>,
}

impl PatternValidator {
    pub fn new() -> Self {
        Self {
            syntax_api: Box::new(RegexBasedValidator::new()),
        }
    }

    /// Checks the pattern and returns it in the form it should be stored.
    ///
    /// Patterns are authored over several indented lines for readability, so
    /// with `remove_whitespace` every whitespace character is removed before
    /// the check. A `|` followed by `)` is rejected whatever the flag is.
    pub fn validate_re(
        &self,
        pattern: &str,
        remove_whitespace: bool,
    ) -> Result<String, PatternSyntaxError> {
        let compressed = if remove_whitespace {
            strip_whitespace(pattern)
        } else {
            Cow::Borrowed(pattern)
        };

        if PIPE_BEFORE_CLOSING_PARENTHESIS.is_match(&compressed) {
            error!(
                "Error with original regex: {}\n| should not be followed directly by ) in phone number regular expressions.",
                pattern
            );
            return Err(PatternSyntaxError::PipeFollowedByClosingParenthesis(
                compressed.into_owned(),
            ));
        }
        self.syntax_api.check_syntax(&compressed)?;
        Ok(compressed.into_owned())
    }
}

impl Default for PatternValidator {
    fn default() -> Self {
        Self::new()
    }
}
