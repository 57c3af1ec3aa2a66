//! Inheritable property sets used by the inheritance pass.

/// Properties copied from a parent onto children that do not set them.
///
/// Two presets exist and are kept apart on purpose: profiles measured from a
/// template use [`InheritedSet::baseline`], profiles taken from the built-in
/// catalog use [`InheritedSet::extended`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InheritedSet {
    properties: Vec<String>,
}

const BASELINE: &[&str] = &["color", "font-size", "font-family", "line-height"];

const EXTENDED_EXTRA: &[&str] = &["text-align", "font-weight", "letter-spacing"];

impl InheritedSet {
    /// color, font-size, font-family, line-height
    pub fn baseline() -> Self {
        Self::from_names(BASELINE.iter().copied())
    }

    /// The baseline plus text-align, font-weight and letter-spacing
    pub fn extended() -> Self {
        Self::from_names(BASELINE.iter().chain(EXTENDED_EXTRA).copied())
    }

    /// A custom set; duplicates are ignored
    pub fn from_names<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut properties: Vec<String> = Vec::new();
        for name in names {
            let name = crate::properties::to_kebab_case(name);
            if !properties.contains(&name) {
                properties.push(name);
            }
        }
        Self { properties }
    }

    /// An empty set disables the inheritance pass
    pub fn empty() -> Self {
        Self {
            properties: Vec::new(),
        }
    }

    pub fn contains(&self, property: &str) -> bool {
        self.properties.iter().any(|p| p == property)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl Default for InheritedSet {
    fn default() -> Self {
        Self::baseline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_is_subset_of_extended() {
        let baseline = InheritedSet::baseline();
        let extended = InheritedSet::extended();

        assert_eq!(baseline.len(), 4);
        assert_eq!(extended.len(), 7);
        assert!(baseline.iter().all(|p| extended.contains(p)));
        assert!(!baseline.contains("text-align"));
        assert!(extended.contains("letter-spacing"));
    }

    #[test]
    fn test_custom_set_normalizes_names() {
        let set = InheritedSet::from_names(["fontStyle", "font-style", "color"]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["font-style", "color"]);
    }
}
