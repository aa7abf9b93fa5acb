use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Food & Dining")]
    FoodAndDining,
    Shopping,
    Housing,
    Transportation,
    Entertainment,
    #[serde(rename = "Health & Fitness")]
    HealthAndFitness,
    Travel,
    Education,
    #[serde(rename = "Personal Care")]
    PersonalCare,
    #[serde(rename = "Gifts & Donations")]
    GiftsAndDonations,
    Utilities,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FoodAndDining => "Food & Dining",
            Self::Shopping => "Shopping",
            Self::Housing => "Housing",
            Self::Transportation => "Transportation",
            Self::Entertainment => "Entertainment",
            Self::HealthAndFitness => "Health & Fitness",
            Self::Travel => "Travel",
            Self::Education => "Education",
            Self::PersonalCare => "Personal Care",
            Self::GiftsAndDonations => "Gifts & Donations",
            Self::Utilities => "Utilities",
            Self::Other => "Other",
        }
    }

    /// Look up a category by its label, ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        let wanted = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
    }

    /// All categories in display order.
    pub fn all() -> &'static [Category] {
        &[
            Self::FoodAndDining,
            Self::Shopping,
            Self::Housing,
            Self::Transportation,
            Self::Entertainment,
            Self::HealthAndFitness,
            Self::Travel,
            Self::Education,
            Self::PersonalCare,
            Self::GiftsAndDonations,
            Self::Utilities,
            Self::Other,
        ]
    }

    /// Step through `all()` by `delta`, wrapping at both ends.
    pub fn cycle(&self, delta: i32) -> Self {
        let all = Self::all();
        let len = all.len() as i32;
        let idx = all.iter().position(|c| c == self).unwrap_or(0) as i32;
        all[(idx + delta).rem_euclid(len) as usize]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            let known: Vec<&str> = Self::all().iter().map(|c| c.as_str()).collect();
            anyhow::anyhow!("Unknown category '{}'. Expected one of: {}", s.trim(), known.join(", "))
        })
    }
}
