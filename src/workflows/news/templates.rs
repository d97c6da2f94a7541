use super::domain::SearchTerm;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

const AMOUNTS: [u64; 5] = [100_000, 500_000, 1_000_000, 2_000_000, 5_000_000];
const PERCENTAGES: [u32; 7] = [15, 25, 30, 45, 50, 75, 100];
const QUANTITIES: [u64; 6] = [50, 100, 200, 500, 1_000, 2_000];
const LOCATIONS: [&str; 5] = [
    "São Paulo",
    "Rio de Janeiro",
    "Brasília",
    "Minas Gerais",
    "Paraná",
];
const YEARS: [i32; 3] = [2022, 2023, 2024];

/// Headline templates per search term.
///
/// Terms without a dedicated list get the generic `Notícia sobre {term}`
/// headline.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    titles: HashMap<SearchTerm, Vec<&'static str>>,
    summaries: HashMap<SearchTerm, &'static str>,
}

impl TemplateCatalog {
    pub fn standard() -> Self {
        Self {
            titles: standard_titles(),
            summaries: standard_summaries(),
        }
    }

    pub fn empty() -> Self {
        Self {
            titles: HashMap::new(),
            summaries: HashMap::new(),
        }
    }

    pub fn with_titles(mut self, term: SearchTerm, templates: Vec<&'static str>) -> Self {
        self.titles.insert(term, templates);
        self
    }

    /// Picks a headline template for `term` and fills its placeholders.
    pub fn headline<R: Rng + ?Sized>(&self, term: SearchTerm, rng: &mut R) -> String {
        let template = match self.titles.get(&term).and_then(|list| list.choose(rng)) {
            Some(template) => (*template).to_string(),
            None => default_title(term),
        };
        fill_placeholders(&template, rng)
    }

    pub fn summary_for(&self, term: SearchTerm) -> String {
        match self.summaries.get(&term) {
            Some(summary) => (*summary).to_string(),
            None => format!("Notícia relacionada a {} e segurança digital.", term.label()),
        }
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn default_title(term: SearchTerm) -> String {
    format!("Notícia sobre {}", term.label())
}

pub(crate) fn fill_placeholders<R: Rng + ?Sized>(template: &str, rng: &mut R) -> String {
    let mut title = template.to_string();
    if title.contains("{valor}") {
        let amount = AMOUNTS[rng.gen_range(0..AMOUNTS.len())];
        title = title.replace("{valor}", &group_thousands(amount));
    }
    if title.contains("{percent}") {
        let percent = PERCENTAGES[rng.gen_range(0..PERCENTAGES.len())];
        title = title.replace("{percent}", &percent.to_string());
    }
    if title.contains("{num}") {
        let quantity = QUANTITIES[rng.gen_range(0..QUANTITIES.len())];
        title = title.replace("{num}", &group_thousands(quantity));
    }
    if title.contains("{local}") {
        let location = LOCATIONS[rng.gen_range(0..LOCATIONS.len())];
        title = title.replace("{local}", location);
    }
    if title.contains("{year}") {
        let year = YEARS[rng.gen_range(0..YEARS.len())];
        title = title.replace("{year}", &year.to_string());
    }
    title
}

/// Formats an integer with `,` between thousands groups.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

fn standard_titles() -> HashMap<SearchTerm, Vec<&'static str>> {
    HashMap::from([
        (
            SearchTerm::PixScam,
            vec![
                "Golpe do PIX: criminosos roubam R$ {valor} de vítimas em {local}",
                "Polícia prende quadrilha que aplicava golpe do PIX e lesou {num} pessoas",
                "Novo golpe do PIX: criminosos se passam por bancos para roubar dados",
            ],
        ),
        (
            SearchTerm::Phishing,
            vec![
                "Golpe do phishing cresce {percent}% no Brasil, alerta especialista",
                "Criminosos usam fake news para aplicar golpe de phishing",
                "Banco alerta para novo golpe de phishing via WhatsApp",
            ],
        ),
        (
            SearchTerm::DigitalCrime,
            vec![
                "Crimes digitais crescem {percent}% durante pandemia",
                "Polícia Civil cria delegacia especializada em crimes digitais",
                "Brasil registra {num} casos de crimes digitais em {year}",
            ],
        ),
        (
            SearchTerm::OnlineFraud,
            vec![
                "Fraudes online causam prejuízo de R$ {valor} milhões no Brasil",
                "E-commerce registra aumento de {percent}% em fraudes online",
                "Consumidores perdem R$ {valor} com fraudes em compras online",
            ],
        ),
    ])
}

fn standard_summaries() -> HashMap<SearchTerm, &'static str> {
    HashMap::from([
        (
            SearchTerm::PixScam,
            "Criminosos aplicam golpes usando o sistema de pagamentos PIX, enganando vítimas com falsas promoções e transferências fraudulentas.",
        ),
        (
            SearchTerm::Phishing,
            "Técnica utilizada por criminosos para roubar dados pessoais através de sites e mensagens falsas que imitam instituições confiáveis.",
        ),
        (
            SearchTerm::DigitalCrime,
            "Atividades criminosas realizadas através de meios digitais, incluindo fraudes, invasões e roubo de dados pessoais.",
        ),
        (
            SearchTerm::OnlineFraud,
            "Golpes aplicados em ambiente digital, especialmente em compras online e transações financeiras fraudulentas.",
        ),
        (
            SearchTerm::DigitalFraud,
            "Crime de estelionato praticado através de meios digitais, enganando vítimas com falsas promessas e documentos falsos.",
        ),
        (
            SearchTerm::VirtualScam,
            "Esquemas criminosos aplicados através da internet e aplicativos, visando obter vantagem financeira ilícita.",
        ),
        (
            SearchTerm::CyberCrime,
            "Crimes praticados no ambiente digital, incluindo invasão de sistemas, roubo de dados e fraudes eletrônicas.",
        ),
        (
            SearchTerm::DataIntrusion,
            "Acesso não autorizado a sistemas e bases de dados, resultando em vazamento de informações pessoais e corporativas.",
        ),
        (
            SearchTerm::DataLeak,
            "Exposição não autorizada de informações pessoais e confidenciais, causando prejuízos às vítimas.",
        ),
        (
            SearchTerm::Ransomware,
            "Tipo de malware que criptografa dados das vítimas e exige pagamento de resgate para liberação dos arquivos.",
        ),
    ])
}
