/// The closed set of spending categories.
///
/// Order matters: aggregation output and tie-breaks follow `Category::all()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Category {
    Food,
    Rent,
    Travel,
    Utilities,
    Other,
}

impl Category {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Rent => "Rent",
            Self::Travel => "Travel",
            Self::Utilities => "Utilities",
            Self::Other => "Other",
        }
    }

    /// Case-insensitive lookup. Unknown labels return `None` instead of
    /// creating a new bucket.
    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "food" | "groceries" | "dining" => Some(Self::Food),
            "rent" | "housing" => Some(Self::Rent),
            "travel" | "transport" => Some(Self::Travel),
            "utilities" | "utility" | "bills" => Some(Self::Utilities),
            "other" | "misc" => Some(Self::Other),
            _ => None,
        }
    }

    pub(crate) fn all() -> &'static [Category] {
        &[
            Self::Food,
            Self::Rent,
            Self::Travel,
            Self::Utilities,
            Self::Other,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
