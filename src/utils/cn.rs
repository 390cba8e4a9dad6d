use std::borrow::Cow;

/// One entry of a class list: a class name, a boolean, or nothing.
///
/// Only non-empty class names make it into the merged string. Booleans exist so
/// `condition && "class"`-style expressions can be passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassCandidate<'a> {
    Class(Cow<'a, str>),
    Flag(bool),
    Absent,
}

impl<'a> From<&'a str> for ClassCandidate<'a> {
    fn from(class: &'a str) -> Self {
        ClassCandidate::Class(Cow::Borrowed(class))
    }
}

impl<'a> From<&'a String> for ClassCandidate<'a> {
    fn from(class: &'a String) -> Self {
        ClassCandidate::Class(Cow::Borrowed(class.as_str()))
    }
}

impl From<String> for ClassCandidate<'_> {
    fn from(class: String) -> Self {
        ClassCandidate::Class(Cow::Owned(class))
    }
}

impl From<bool> for ClassCandidate<'_> {
    fn from(flag: bool) -> Self {
        ClassCandidate::Flag(flag)
    }
}

impl<'a, T: Into<ClassCandidate<'a>>> From<Option<T>> for ClassCandidate<'a> {
    fn from(candidate: Option<T>) -> Self {
        candidate.map_or(ClassCandidate::Absent, Into::into)
    }
}

/// Joins the non-empty class names of `candidates` with single spaces, in order.
///
/// Booleans, absent entries and empty strings are dropped without leaving
/// separators behind. An empty or all-falsy list yields `""`.
pub fn merge_class_names<'a>(candidates: impl IntoIterator<Item = ClassCandidate<'a>>) -> String {
    let mut merged = String::new();

    for candidate in candidates {
        let ClassCandidate::Class(class) = candidate else {
            continue;
        };

        if class.is_empty() {
            continue;
        }

        if !merged.is_empty() {
            merged.push(' ');
        }
        merged.push_str(&class);
    }

    merged
}

/// Merges class name candidates of mixed types.
///
/// ```
/// use custom_ui::cn;
///
/// let disabled = false;
/// let class = cn!("card", disabled.then_some("card--disabled"), "", Some("extra"));
/// assert_eq!(class, "card extra");
/// ```
#[macro_export]
macro_rules! cn {
    ( $( $candidate:expr ),* $(,)? ) => {
        $crate::utils::merge_class_names([
            $( $crate::utils::ClassCandidate::from($candidate) ),*
        ])
    };
}
