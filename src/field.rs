//! Credit roles a query can filter on.

use std::fmt;
use std::str::FromStr;

/// Selects which sequence field a query inspects.
///
/// `None` is a valid selector that never matches anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CreditField {
    #[default]
    None,
    Script,
    Pencils,
    Inks,
    Colors,
    Letters,
}

impl CreditField {
    /// Every selector that names a real sequence field.
    pub const ROLES: [CreditField; 5] = [
        CreditField::Script,
        CreditField::Pencils,
        CreditField::Inks,
        CreditField::Colors,
        CreditField::Letters,
    ];

    /// Name of the sequence field this role reads, or `None` for the empty selector.
    pub fn field_name(self) -> Option<&'static str> {
        match self {
            CreditField::None => None,
            CreditField::Script => Some("script"),
            CreditField::Pencils => Some("pencils"),
            CreditField::Inks => Some("inks"),
            CreditField::Colors => Some("colors"),
            CreditField::Letters => Some("letters"),
        }
    }

    pub fn as_str(self) -> &'static str {
        self.field_name().unwrap_or("none")
    }
}

impl fmt::Display for CreditField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CreditField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(CreditField::None),
            "script" => Ok(CreditField::Script),
            "pencils" => Ok(CreditField::Pencils),
            "inks" => Ok(CreditField::Inks),
            "colors" => Ok(CreditField::Colors),
            "letters" => Ok(CreditField::Letters),
            other => Err(format!("unknown credit field '{other}'")),
        }
    }
}

/// One credit field plus the substring to look for in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub field: CreditField,
    pub name: String,
}

impl Query {
    pub fn new(field: CreditField, name: impl Into<String>) -> Self {
        Self {
            field,
            name: name.into(),
        }
    }
}
