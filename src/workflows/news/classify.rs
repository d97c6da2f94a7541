use super::domain::{CategoryFlags, NewsCategory};

const FINANCIAL: &[&str] = &["pix", "banco", "dinheiro", "fraude", "pagamento"];
const DATA_BREACH: &[&str] = &["dados", "vazamento", "invasão", "privacidade"];
const SCAM: &[&str] = &["golpe", "estelionato", "enganar", "vítima"];
const PHISHING: &[&str] = &["phishing", "falso", "imitam", "roubar dados"];
const MALWARE: &[&str] = &["ransomware", "vírus", "malware", "criptografa"];
const SOCIAL_MEDIA: &[&str] = &["whatsapp", "facebook", "instagram", "telegram"];

pub(crate) const fn keywords(category: NewsCategory) -> &'static [&'static str] {
    match category {
        NewsCategory::Financial => FINANCIAL,
        NewsCategory::DataBreach => DATA_BREACH,
        NewsCategory::Scam => SCAM,
        NewsCategory::Phishing => PHISHING,
        NewsCategory::Malware => MALWARE,
        NewsCategory::SocialMedia => SOCIAL_MEDIA,
    }
}

/// Flags every category whose keyword set has a substring hit in the
/// lower-cased title and summary.
pub fn categorize(title: &str, summary: &str) -> CategoryFlags {
    let text = format!("{title} {summary}").to_lowercase();
    let mut flags = CategoryFlags::default();
    for category in NewsCategory::ordered() {
        let hit = keywords(category).iter().any(|word| text.contains(word));
        flags.set(category, hit);
    }
    flags
}
