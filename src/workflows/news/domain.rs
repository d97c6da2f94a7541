use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Queries the news collector synthesizes coverage for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SearchTerm {
    #[serde(rename = "crime digital")]
    DigitalCrime,
    #[serde(rename = "golpe do pix")]
    PixScam,
    #[serde(rename = "phishing")]
    Phishing,
    #[serde(rename = "estelionato digital")]
    DigitalFraud,
    #[serde(rename = "fraude online")]
    OnlineFraud,
    #[serde(rename = "golpe virtual")]
    VirtualScam,
    #[serde(rename = "crime cibernético")]
    CyberCrime,
    #[serde(rename = "invasão de dados")]
    DataIntrusion,
    #[serde(rename = "vazamento de dados")]
    DataLeak,
    #[serde(rename = "ransomware")]
    Ransomware,
}

impl SearchTerm {
    pub const fn ordered() -> [Self; 10] {
        [
            Self::DigitalCrime,
            Self::PixScam,
            Self::Phishing,
            Self::DigitalFraud,
            Self::OnlineFraud,
            Self::VirtualScam,
            Self::CyberCrime,
            Self::DataIntrusion,
            Self::DataLeak,
            Self::Ransomware,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::DigitalCrime => "crime digital",
            Self::PixScam => "golpe do pix",
            Self::Phishing => "phishing",
            Self::DigitalFraud => "estelionato digital",
            Self::OnlineFraud => "fraude online",
            Self::VirtualScam => "golpe virtual",
            Self::CyberCrime => "crime cibernético",
            Self::DataIntrusion => "invasão de dados",
            Self::DataLeak => "vazamento de dados",
            Self::Ransomware => "ransomware",
        }
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NewsCategory {
    Financial,
    DataBreach,
    Scam,
    Phishing,
    Malware,
    SocialMedia,
}

impl NewsCategory {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Financial,
            Self::DataBreach,
            Self::Scam,
            Self::Phishing,
            Self::Malware,
            Self::SocialMedia,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Financial => "financial",
            Self::DataBreach => "data_breach",
            Self::Scam => "scam",
            Self::Phishing => "phishing",
            Self::Malware => "malware",
            Self::SocialMedia => "social_media",
        }
    }
}

/// One boolean per [`NewsCategory`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFlags {
    pub financial: bool,
    pub data_breach: bool,
    pub scam: bool,
    pub phishing: bool,
    pub malware: bool,
    pub social_media: bool,
}

impl CategoryFlags {
    pub fn get(&self, category: NewsCategory) -> bool {
        match category {
            NewsCategory::Financial => self.financial,
            NewsCategory::DataBreach => self.data_breach,
            NewsCategory::Scam => self.scam,
            NewsCategory::Phishing => self.phishing,
            NewsCategory::Malware => self.malware,
            NewsCategory::SocialMedia => self.social_media,
        }
    }

    pub fn set(&mut self, category: NewsCategory, value: bool) {
        let slot = match category {
            NewsCategory::Financial => &mut self.financial,
            NewsCategory::DataBreach => &mut self.data_breach,
            NewsCategory::Scam => &mut self.scam,
            NewsCategory::Phishing => &mut self.phishing,
            NewsCategory::Malware => &mut self.malware,
            NewsCategory::SocialMedia => &mut self.social_media,
        };
        *slot = value;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewsRecord {
    pub title: String,
    pub summary: String,
    pub published_date: NaiveDate,
    pub search_term: SearchTerm,
    pub url: String,
    pub monetary_value: f64,
    pub category_flags: CategoryFlags,
}
