/// Applies a `Cow`-returning edit to an owned `String`.
///
/// String helpers return `Cow::Borrowed` when the text was left untouched;
/// in that case the original allocation is kept instead of copying the
/// borrowed slice into a new one.
macro_rules! edit_owned {
    ($owned:expr, $edit:expr) => {{
        let owned: String = $owned;
        match $edit(owned.as_str()) {
            std::borrow::Cow::Owned(edited) => edited,
            std::borrow::Cow::Borrowed(_) => owned,
        }
    }};
}

pub(crate) use edit_owned;
