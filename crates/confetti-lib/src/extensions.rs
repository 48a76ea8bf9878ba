//! Optional syntax features, toggled per call.
//!
//! The configuration is passed explicitly to [`crate::tokenize`] and never
//! mutated while a document is being processed.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

/// Extensions the tokenizer knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extension {
    /// `// line` and `/* block */` comments.
    CStyleComments,
    /// `(balanced parenthesis)` arguments; reserves `(`.
    ExpressionArguments,
    /// Custom punctuators lexed as standalone arguments.
    PunctuatorArguments,
}

impl Extension {
    pub const ALL: [Extension; 3] = [
        Self::CStyleComments,
        Self::ExpressionArguments,
        Self::PunctuatorArguments,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::CStyleComments => "c_style_comments",
            Self::ExpressionArguments => "expression_arguments",
            Self::PunctuatorArguments => "punctuator_arguments",
        }
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown extension `{0}`")]
pub struct UnknownExtension(pub String);

impl FromStr for Extension {
    type Err = UnknownExtension;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ext| ext.name() == s)
            .ok_or_else(|| UnknownExtension(s.to_string()))
    }
}

/// Mapping from extension name to an optional parameter, queried by presence.
///
/// Unrecognized names are kept but have no effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extensions {
    entries: IndexMap<String, Option<String>>,
}

impl Extensions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables an extension that takes no parameter.
    pub fn with(mut self, ext: Extension) -> Self {
        self.entries.insert(ext.name().to_string(), None);
        self
    }

    pub fn with_param(mut self, ext: Extension, param: impl Into<String>) -> Self {
        self.entries
            .insert(ext.name().to_string(), Some(param.into()));
        self
    }

    /// Enables `punctuator_arguments` with one literal per item.
    pub fn with_punctuators<I, S>(self, punctuators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let list = punctuators
            .into_iter()
            .map(|p| p.as_ref().to_string())
            .collect::<Vec<_>>()
            .join("\n");
        self.with_param(Extension::PunctuatorArguments, list)
    }

    /// Inserts an entry by raw name, as read from external configuration.
    pub fn insert(&mut self, name: impl Into<String>, param: Option<String>) {
        self.entries.insert(name.into(), param);
    }

    pub fn has(&self, ext: Extension) -> bool {
        self.entries.contains_key(ext.name())
    }

    /// Parameter of an enabled extension; `None` when disabled or parameterless.
    pub fn get(&self, ext: Extension) -> Option<&str> {
        self.entries.get(ext.name()).and_then(|p| p.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(name, param)| (name.as_str(), param.as_deref()))
    }
}

impl FromIterator<Extension> for Extensions {
    fn from_iter<T: IntoIterator<Item = Extension>>(iter: T) -> Self {
        iter.into_iter().fold(Self::new(), Self::with)
    }
}
