//! Case-insensitive name tables shared by the domain enumerations.

use crate::error::IllegalValue;

/// A closed set of values addressable by name.
///
/// `name()` is the canonical spelling used in messages and output;
/// `aliases()` lists extra accepted spellings.
pub trait NamedValue: Copy + PartialEq + 'static {
    const ALL: &'static [Self];

    fn name(self) -> &'static str;

    fn aliases(self) -> &'static [&'static str] {
        &[]
    }
}

fn canonical_names<T: NamedValue>() -> Vec<&'static str> {
    T::ALL.iter().map(|value| value.name()).collect()
}

fn matches_exactly<T: NamedValue>(value: T, needle: &str) -> bool {
    value.name().eq_ignore_ascii_case(needle)
        || value
            .aliases()
            .iter()
            .any(|alias| alias.eq_ignore_ascii_case(needle))
}

fn has_prefix(candidate: &str, prefix_lower: &str) -> bool {
    candidate.to_lowercase().starts_with(prefix_lower)
}

/// Exact match on name or alias, ignoring ASCII case and surrounding blanks.
pub fn find_exact<T: NamedValue>(field: &'static str, raw: &str) -> Result<T, IllegalValue> {
    let needle = raw.trim();
    T::ALL
        .iter()
        .copied()
        .find(|value| !needle.is_empty() && matches_exactly(*value, needle))
        .ok_or_else(|| IllegalValue::new(field, raw, canonical_names::<T>()))
}

/// Exact match first, then a prefix that selects exactly one value.
///
/// An ambiguous prefix is rejected like any other unknown name.
pub fn find_by_name<T: NamedValue>(field: &'static str, raw: &str) -> Result<T, IllegalValue> {
    if let Ok(value) = find_exact::<T>(field, raw) {
        return Ok(value);
    }

    let prefix = raw.trim().to_lowercase();
    if prefix.is_empty() {
        return Err(IllegalValue::new(field, raw, canonical_names::<T>()));
    }

    let mut found: Option<T> = None;
    for value in T::ALL.iter().copied() {
        let hit = has_prefix(value.name(), &prefix)
            || value.aliases().iter().any(|alias| has_prefix(alias, &prefix));
        if !hit {
            continue;
        }
        match found {
            Some(previous) if previous != value => {
                return Err(IllegalValue::new(field, raw, canonical_names::<T>()));
            }
            _ => found = Some(value),
        }
    }

    found.ok_or_else(|| IllegalValue::new(field, raw, canonical_names::<T>()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Fruit {
        Apple,
        Apricot,
        Banana,
    }

    impl NamedValue for Fruit {
        const ALL: &'static [Self] = &[Fruit::Apple, Fruit::Apricot, Fruit::Banana];

        fn name(self) -> &'static str {
            match self {
                Fruit::Apple => "apple",
                Fruit::Apricot => "apricot",
                Fruit::Banana => "banana",
            }
        }

        fn aliases(self) -> &'static [&'static str] {
            match self {
                Fruit::Banana => &["plantain"],
                _ => &[],
            }
        }
    }

    #[test]
    fn exact_match_ignores_case_and_whitespace() {
        assert_eq!(find_exact::<Fruit>("--fruit", " APPLE "), Ok(Fruit::Apple));
        assert_eq!(find_exact::<Fruit>("--fruit", "Plantain"), Ok(Fruit::Banana));
        assert!(find_exact::<Fruit>("--fruit", "app").is_err());
    }

    #[test]
    fn unique_prefix_is_accepted() {
        assert_eq!(find_by_name::<Fruit>("--fruit", "ban"), Ok(Fruit::Banana));
        assert_eq!(find_by_name::<Fruit>("--fruit", "apr"), Ok(Fruit::Apricot));
        assert_eq!(find_by_name::<Fruit>("--fruit", "plan"), Ok(Fruit::Banana));
    }

    #[test]
    fn ambiguous_or_empty_prefix_is_rejected() {
        let err = find_by_name::<Fruit>("--fruit", "ap").unwrap_err();
        assert_eq!(err.field, "--fruit");
        assert_eq!(err.value, "ap");
        assert_eq!(err.expected, vec!["apple", "apricot", "banana"]);
        assert!(find_by_name::<Fruit>("--fruit", "  ").is_err());
        assert!(find_by_name::<Fruit>("--fruit", "cherry").is_err());
    }
}
