//! Keyword → glyph lookup used to give each product an icon from its name.

/// Glyph used when no keyword matches.
pub const DEFAULT_ICON: &str = "📦";

const ICONS: &[(&str, &str)] = &[
    // fruit
    ("apple", "🍎"),
    ("red apple", "🍎"),
    ("green apple", "🍏"),
    ("banana", "🍌"),
    ("orange", "🍊"),
    ("lemon", "🍋"),
    ("pear", "🍐"),
    ("peach", "🍑"),
    ("grapes", "🍇"),
    ("strawberry", "🍓"),
    ("blueberry", "🫐"),
    ("watermelon", "🍉"),
    ("mango", "🥭"),
    ("pineapple", "🍍"),
    ("coconut", "🥥"),
    ("kiwi", "🥝"),
    ("tomato", "🍅"),
    ("avocado", "🥑"),
    // vegetables
    ("carrot", "🥕"),
    ("corn", "🌽"),
    ("cucumber", "🥒"),
    ("broccoli", "🥦"),
    ("onion", "🧅"),
    ("garlic", "🧄"),
    ("potato", "🥔"),
    ("pepper", "🫑"),
    ("eggplant", "🍆"),
    ("mushroom", "🍄"),
    // staples
    ("bread", "🍞"),
    ("milk", "🥛"),
    ("cheese", "🧀"),
    ("egg", "🥚"),
    ("meat", "🥩"),
    ("chicken", "🍗"),
    ("fish", "🐟"),
    ("shrimp", "🦐"),
    ("rice", "🍚"),
    ("noodles", "🍜"),
    ("pizza", "🍕"),
    ("hamburger", "🍔"),
    ("sandwich", "🥪"),
    ("hotdog", "🌭"),
    ("taco", "🌮"),
    ("sushi", "🍣"),
    // drinks
    ("coffee", "☕️"),
    ("tea", "🫖"),
    ("juice", "🧃"),
    ("water", "💧"),
    ("beer", "🍺"),
    ("wine", "🍷"),
    // sweets
    ("candy", "🍬"),
    ("chocolate", "🍫"),
    ("cookie", "🍪"),
    ("cake", "🍰"),
    ("ice cream", "🍦"),
    ("donut", "🍩"),
];

/// Derive an icon from a product name.
///
/// Order of preference:
/// 1. exact keyword match (case-insensitive, trimmed);
/// 2. the longest keyword contained in the name;
/// 3. the first keyword (table order) that contains the name;
/// 4. [`DEFAULT_ICON`].
pub fn icon_for(name: &str) -> &'static str {
    let needle = name.trim().to_lowercase();
    if needle.is_empty() {
        return DEFAULT_ICON;
    }

    if let Some(&(_, icon)) = ICONS.iter().find(|(key, _)| *key == needle) {
        return icon;
    }

    let contained = ICONS
        .iter()
        .filter(|(key, _)| needle.contains(key))
        .fold(None::<&(&str, &str)>, |best, entry| match best {
            Some(b) if b.0.len() >= entry.0.len() => Some(b),
            _ => Some(entry),
        });
    if let Some(&(_, icon)) = contained {
        return icon;
    }

    ICONS
        .iter()
        .find(|(key, _)| key.contains(needle.as_str()))
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_wins() {
        assert_eq!(icon_for("Green Apple"), "🍏");
        assert_eq!(icon_for("  milk "), "🥛");
    }

    #[test]
    fn name_containing_keyword_matches_longest_keyword() {
        assert_eq!(icon_for("Organic whole milk 1L"), "🥛");
        assert_eq!(icon_for("Pineapple slices"), "🍍");
        assert_eq!(icon_for("Fresh green apple pack"), "🍏");
    }

    #[test]
    fn keyword_containing_name_matches() {
        assert_eq!(icon_for("choco"), "🍫");
    }

    #[test]
    fn falls_back_to_default() {
        assert_eq!(icon_for("Screwdriver"), DEFAULT_ICON);
        assert_eq!(icon_for("   "), DEFAULT_ICON);
    }
}
