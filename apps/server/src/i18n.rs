//! Interface string translation.
//!
//! Keys are the English strings themselves; a missing translation falls back
//! to the key. Positional arguments are written as `$0`, `$1`, ...

use std::borrow::Cow;

/// Supported interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Polish,
}

impl Language {
    /// Parse a language code such as `en` or `pl_PL`.
    pub fn parse(s: &str) -> Option<Self> {
        let code = s.split(['_', '-', '.']).next().unwrap_or(s);
        match code.to_lowercase().as_str() {
            "en" => Some(Self::English),
            "pl" => Some(Self::Polish),
            _ => None,
        }
    }

    /// ISO 639-1 code, used for the `lang` attribute of rendered pages.
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Polish => "pl",
        }
    }
}

const PL: &[(&str, &str)] = &[
    ("Node Groups List", "Lista grup komputerów"),
    ("Name:", "Nazwa:"),
    ("Description:", "Opis:"),
    ("Priority:", "Priorytet:"),
    ("Nodes:", "Komputery:"),
    ("Total: $0", "Razem: $0"),
    ("No such groups in database.", "Brak grup w bazie danych."),
];

/// Looks up interface strings for one language.
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Translate `key`, returning the key unchanged when no entry exists.
    pub fn trans<'a>(&self, key: &'a str) -> Cow<'a, str> {
        let catalogue = match self.language {
            Language::English => return Cow::Borrowed(key),
            Language::Polish => PL,
        };

        catalogue
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| Cow::Borrowed(*v))
            .unwrap_or(Cow::Borrowed(key))
    }

    /// Translate `key` and substitute `$N` with `args[N]`.
    ///
    /// The template is scanned once, so placeholders inside substituted
    /// arguments stay literal. Indexes without an argument are left as is.
    pub fn trans_args(&self, key: &str, args: &[&str]) -> String {
        let template = self.trans(key);
        let mut out = String::with_capacity(template.len());
        let mut rest: &str = &template;

        while let Some(pos) = rest.find('$') {
            out.push_str(&rest[..pos]);
            let after = &rest[pos + 1..];
            let digits = after
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(after.len());

            match after[..digits].parse::<usize>().ok().and_then(|i| args.get(i)) {
                Some(arg) => out.push_str(arg),
                None => out.push_str(&rest[pos..pos + 1 + digits]),
            }
            rest = &after[digits..];
        }
        out.push_str(rest);
        out
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(Language::English)
    }
}
