//! English pluralization and singularization.
//!
//! A fixed, ordered rule table scanned top to bottom with first-match-wins
//! semantics, preceded by an uncountable set and an irregular-form map. The
//! table ordering is part of the contract: specific suffix rules sit above
//! the generic `x/ch/ss/sh` fallbacks, which sit above the append-`s` /
//! strip-`s` catch-alls, so reordering entries changes observable output.

use regex::Regex;
use std::sync::LazyLock;

/// Ordered singular-to-plural rewrite rules. First match wins.
static PLURAL_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    compile_rules(&[
        (r"(?i)(quiz)$", "${1}zes"),
        (r"(?i)^(ox)$", "${1}en"),
        (r"(?i)([m|l])ouse$", "${1}ice"),
        (r"(?i)(matr|vert|ind)ix|ex$", "${1}ices"),
        (r"(?i)(x|ch|ss|sh)$", "${1}es"),
        (r"(?i)([^aeiouy]|qu)y$", "${1}ies"),
        (r"(?i)(hive)$", "${1}s"),
        (r"(?i)(?:([^f])fe|([lr])f)$", "${1}${2}ves"),
        (r"(?i)(shea|lea|loa|thie)f$", "${1}ves"),
        (r"(?i)sis$", "ses"),
        (r"(?i)([ti])um$", "${1}a"),
        (r"(?i)(tomat|potat|ech|her|vet)o$", "${1}oes"),
        (r"(?i)(bu)s$", "${1}ses"),
        (r"(?i)(alias)$", "${1}es"),
        (r"(?i)(octop)us$", "${1}i"),
        (r"(?i)(ax|test)is$", "${1}es"),
        (r"(?i)(us)$", "${1}es"),
        (r"(?i)s$", "s"),
        (r"$", "s"),
    ])
});

/// Ordered plural-to-singular rewrite rules. First match wins.
static SINGULAR_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    compile_rules(&[
        (r"(?i)(quiz)zes$", "${1}"),
        (r"(?i)(matr)ices$", "${1}ix"),
        (r"(?i)(vert|ind)ices$", "${1}ex"),
        (r"(?i)^(ox)en$", "${1}"),
        (r"(?i)(alias)es$", "${1}"),
        (r"(?i)(octop|vir)i$", "${1}us"),
        (r"(?i)(cris|ax|test)es$", "${1}is"),
        (r"(?i)(shoe)s$", "${1}"),
        (r"(?i)(o)es$", "${1}"),
        (r"(?i)(bus)es$", "${1}"),
        (r"(?i)([m|l])ice$", "${1}ouse"),
        (r"(?i)(x|ch|ss|sh)es$", "${1}"),
        (r"(?i)(m)ovies$", "${1}ovie"),
        (r"(?i)(s)eries$", "${1}eries"),
        (r"(?i)([^aeiouy]|qu)ies$", "${1}y"),
        (r"(?i)([lr])ves$", "${1}f"),
        (r"(?i)(tive)s$", "${1}"),
        (r"(?i)(hive)s$", "${1}"),
        (r"(?i)(li|wi|kni)ves$", "${1}fe"),
        (r"(?i)(shea|loa|lea|thie)ves$", "${1}f"),
        (r"(?i)(^analy)ses$", "${1}sis"),
        (
            r"(?i)((a)naly|(b)a|(d)iagno|(p)arenthe|(p)rogno|(s)ynop|(t)he)ses$",
            "${1}${2}sis",
        ),
        (r"(?i)([ti])a$", "${1}um"),
        (r"(?i)(n)ews$", "${1}ews"),
        (r"(?i)(h|bl)ouses$", "${1}ouse"),
        (r"(?i)(corpse)s$", "${1}"),
        (r"(?i)(us)es$", "${1}"),
        (r"(?i)s$", ""),
    ])
});

/// Irregular forms, matched at end of word in declaration order. The same
/// map serves both directions: pluralize matches the singular column,
/// singularize matches the plural column.
const IRREGULAR: &[(&str, &str)] = &[
    ("move", "moves"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("child", "children"),
    ("man", "men"),
    ("tooth", "teeth"),
    ("person", "people"),
    ("valve", "valves"),
];

static IRREGULAR_PLURALIZE: LazyLock<Vec<(Regex, &'static str)>> =
    LazyLock::new(|| compile_irregular(false));

static IRREGULAR_SINGULARIZE: LazyLock<Vec<(Regex, &'static str)>> =
    LazyLock::new(|| compile_irregular(true));

fn compile_irregular(reversed: bool) -> Vec<(Regex, &'static str)> {
    IRREGULAR
        .iter()
        .map(|&(singular, plural)| {
            let (source, target) = if reversed {
                (plural, singular)
            } else {
                (singular, plural)
            };
            let pattern = Regex::new(&format!("(?i){}$", regex::escape(source))).unwrap();
            (pattern, target)
        })
        .collect()
}

/// Words whose singular and plural forms are identical.
const UNCOUNTABLE: &[&str] = &[
    "sheep",
    "fish",
    "deer",
    "series",
    "species",
    "money",
    "rice",
    "information",
    "equipment",
];

fn compile_rules(rules: &[(&str, &'static str)]) -> Vec<(Regex, &'static str)> {
    rules
        .iter()
        .map(|&(pattern, replacement)| {
            // Patterns are compile-time constants; a failure here is a bug
            // in the table itself.
            (Regex::new(pattern).unwrap(), replacement)
        })
        .collect()
}

fn is_uncountable(word: &str) -> bool {
    let lowered = word.to_lowercase();
    UNCOUNTABLE.contains(&lowered.as_str())
}

fn apply_irregular(word: &str, rules: &[(Regex, &'static str)]) -> Option<String> {
    for (pattern, target) in rules {
        if pattern.is_match(word) {
            return Some(pattern.replace_all(word, *target).into_owned());
        }
    }
    None
}

fn apply_rules(word: &str, rules: &[(Regex, &'static str)]) -> String {
    for (pattern, replacement) in rules {
        if pattern.is_match(word) {
            return pattern.replace_all(word, *replacement).into_owned();
        }
    }
    word.to_string()
}

/// Pluralize a word. Uncountables come back unchanged; irregular forms are
/// substituted before the rule table runs.
pub fn pluralize(word: &str) -> String {
    if is_uncountable(word) {
        return word.to_string();
    }
    if let Some(result) = apply_irregular(word, &IRREGULAR_PLURALIZE) {
        return result;
    }
    apply_rules(word, &PLURAL_RULES)
}

/// Singularize a word. Mirror of [`pluralize`]: the irregular map is
/// consulted in reverse before the singular rule table runs.
pub fn singularize(word: &str) -> String {
    if is_uncountable(word) {
        return word.to_string();
    }
    if let Some(result) = apply_irregular(word, &IRREGULAR_SINGULARIZE) {
        return result;
    }
    apply_rules(word, &SINGULAR_RULES)
}

/// Format a count with the correctly inflected word: `"1 item"`,
/// `"3 items"`. A count of one returns the input word verbatim.
pub fn pluralize_count(count: i64, word: &str) -> String {
    if count == 1 {
        format!("1 {word}")
    } else {
        format!("{count} {}", pluralize(word))
    }
}
