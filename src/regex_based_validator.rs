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

use crate::{interfaces, regexp_cache::{InvalidRegexError, RegexCache}};

/// Syntax checks backed by the `regex` crate, the engine that later
/// evaluates the compiled metadata.
pub struct RegexBasedValidator {
    cache: RegexCache,
}

impl RegexBasedValidator {
    pub fn new() -> Self {
        Self { cache: RegexCache::with_capacity(512) }
    }
}

impl interfaces::PatternSyntaxApi for RegexBasedValidator {
    fn check_syntax(&self, pattern: &str) -> Result<(), InvalidRegexError> {
        let regex = self.cache.get_or_compile(pattern)?;
        trace!("Pattern {} accepted ({} capture groups)", pattern, regex.captures_len() - 1);
        Ok(())
    }
}
