use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const FIRST_YEAR: i32 = 2006;
pub const LAST_YEAR: i32 = 2024;

/// Classification labels tracked by the incident hotline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CrimeCategory {
    #[serde(rename = "Pornografia Infantil")]
    ChildSexualAbuse,
    #[serde(rename = "Racismo")]
    Racism,
    #[serde(rename = "Neo Nazismo")]
    NeoNazism,
    #[serde(rename = "LGBTfobia")]
    LgbtPhobia,
    #[serde(rename = "Intolerância Religiosa")]
    ReligiousIntolerance,
    #[serde(rename = "Maus-tratos contra Animais")]
    AnimalCruelty,
    #[serde(rename = "Apologia e incitação à violência contra a vida")]
    IncitementToViolence,
    #[serde(rename = "Tráfico de Pessoas")]
    HumanTrafficking,
    #[serde(rename = "Violência ou Discriminação contra Mulheres")]
    ViolenceAgainstWomen,
    #[serde(rename = "Xenofobia")]
    Xenophobia,
}

impl CrimeCategory {
    pub const fn ordered() -> [Self; 10] {
        [
            Self::ChildSexualAbuse,
            Self::Racism,
            Self::NeoNazism,
            Self::LgbtPhobia,
            Self::ReligiousIntolerance,
            Self::AnimalCruelty,
            Self::IncitementToViolence,
            Self::HumanTrafficking,
            Self::ViolenceAgainstWomen,
            Self::Xenophobia,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ChildSexualAbuse => "Pornografia Infantil",
            Self::Racism => "Racismo",
            Self::NeoNazism => "Neo Nazismo",
            Self::LgbtPhobia => "LGBTfobia",
            Self::ReligiousIntolerance => "Intolerância Religiosa",
            Self::AnimalCruelty => "Maus-tratos contra Animais",
            Self::IncitementToViolence => "Apologia e incitação à violência contra a vida",
            Self::HumanTrafficking => "Tráfico de Pessoas",
            Self::ViolenceAgainstWomen => "Violência ou Discriminação contra Mulheres",
            Self::Xenophobia => "Xenofobia",
        }
    }
}

impl fmt::Display for CrimeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Yearly report volume for a single category.
#[derive(Debug, Clone, PartialEq)]
pub struct IncidentRecord {
    pub year: i32,
    pub category: CrimeCategory,
    pub report_count: u64,
    pub removed_count: u64,
    pub collected_at: NaiveDateTime,
}
