//! Category suggestion from free-text transaction notes.
//!
//! A curated Portuguese keyword dictionary maps each category to the words
//! and phrases that trigger it. Matching is case-insensitive, whole-word
//! (Unicode word boundaries), and accent-sensitive: "salário" matches
//! "salário" but a keyword with "ã" never matches plain "a".

use std::sync::LazyLock;

use regex::Regex;

use crate::category::Category;

/// The built-in dictionary, transcribed verbatim from the curated list the
/// mobile app ships with. Duplicated entries and near-substring pairs
/// ("café"/"cafeteria") are kept as authored; the first matching keyword
/// wins per category, so duplicates are inert.
pub(crate) const DICTIONARY: &[(Category, &[&str])] = &[
    (
        Category::Alimentacao,
        &[
            "ifood", "restaurante", "mc donalds", "mcdonalds", "ubereats", "bar", "almoço",
            "almoco", "padaria", "lanchonete", "pizza", "burguer", "burger", "sushi", "mercado",
            "supermercado", "açaí", "café", "padoca", "lanches", "comida", "food", "snack", "kfc",
            "bob’s", "subway", "habib’s", "bk", "coca cola", "delivery", "refeição", "lanchar",
            "restaurante japonês", "restaurante japones", "churrascaria", "churrasco", "rodízio",
            "rodizio", "fast food", "fast-food", "mercearia", "merceario", "bodega", "cafeteria",
            "cafeteria", "conveniência", "conveniencia", "mercearia", "açougue", "acougue",
            "frutaria", "fruteira", "hortifruti", "verduras", "legumes", "frutas", "peixaria",
            "peixeiro", "churrasquinho", "churrasquinho grego", "churrasquinho grego", "kebab",
            "espetinho", "espetinho grego", "chopp", "cerveja", "cerveja artesanal", "vinho",
            "whisky", "destilados", "bebida", "bebidas", "doces", "confeitaria", "confeitarias",
            "bolo", "bolos", "torta", "tortas", "chocolate", "chocolates", "candy", "candy shop",
            "candyshop", "churros", "pão de queijo", "pao de queijo", "cafeteria", "pastelaria",
            "pizzaria", "esfiha", "doceria", "sorveteria", "gelato", "acai", "lanche",
            "hortifruti", "sacolão", "sacolao", "restô", "brunch", "jantar", "alimentação",
            "alimentacao",
        ],
    ),
    (
        Category::Transporte,
        &[
            "uber", "99", "gasolina", "etanol", "álcool", "diesel", "posto", "metrô", "metro",
            "ônibus", "onibus", "combustível", "pedágio", "pedagio", "passagem", "transporte",
            "taxi", "rodoviária", "rodoviaria", "locadora", "estacionamento", "patinete",
            "bicicleta", "bilhete único", "bilhete unico", "ticket transporte", "carro", "moto",
            "bus", "train", "bike", "transcol", "brt", "vt", "transporte",
        ],
    ),
    (
        Category::Moradia,
        &[
            "aluguel", "condomínio", "condominio", "luz", "água", "agua", "energia", "internet",
            "telefone", "net", "vivo", "claro", "tim", "oi", "gás", "gas", "manutenção", "iptu",
            "conta", "imóvel", "imovel", "residência", "residencia", "domínio", "domestico",
            "celular", "tv a cabo", "streaming", "faxina", "zelador", "porteiro", "limpeza",
            "síndico", "boleto aluguel", "boleto condominio", "moradia",
        ],
    ),
    (
        Category::Pagamento,
        &[
            "salário", "salario", "pagamento", "provento", "pix recebido", "depósito", "deposito",
            "rendimento", "transferência recebida", "transferencia recebida", "recebimento",
            "remuneração", "remuneracao", "folha de pagamento", "pensão", "pensao", "reembolso",
            "comissão", "comissao", "restituição", "restituicao", "prolabore", "cashback",
            "devolução", "devolucao", "dinheiro recebido", "renda", "lucro", "venda recebida",
        ],
    ),
    (
        Category::Lazer,
        &[
            "netflix", "cinema", "spotify", "show", "evento", "teatro", "ingresso", "prime video",
            "youtube premium", "loja geek", "disney+", "playstation", "xbox", "steam",
            "epic games", "jogo", "game", "hbo", "star+", "paramount", "ingresso.com", "popcorn",
            "funko", "livro", "comic", "quadrinhos", "assinatura", "cinemark", "cinépolis",
            "cinepolis", "games", "psn", "nintendo", "shopping", "tour", "viagem", "passeio",
            "clube", "balada", "pub", "karaokê", "karaoke", "lazer", "diversão",
        ],
    ),
    (
        Category::Saude,
        &[
            "farmácia", "farmacia", "remédio", "remedio", "medicamento", "consulta", "hospital",
            "clínica", "clinica", "exame", "médico", "medico", "dentista", "plano de saúde",
            "convênio", "convenio", "laboratório", "laboratorio", "psicólogo", "psicologa",
            "terapia", "vacina", "check-up", "checkup", "oftalmologista", "otorrino",
            "fisioterapia", "nutricionista", "cirurgia", "receita médica", "consulta online",
            "telemedicina", "unimed", "amil", "hapvida", "notredame", "droga raia", "drograsil",
            "pague menos", "panvel", "medprev", "saude", "saúde",
        ],
    ),
    (
        Category::Wellness,
        &[
            "academia", "smart fit", "bluefit", "selfit", "just fit", "bio ritmo", "gympass",
            "personal", "musculação", "treino", "atividade física", "atividade fisica",
            "crossfit", "esporte", "pilates", "yoga", "spinning", "zumba", "fit dance", "corrida",
            "natação", "boxe", "jiu-jitsu", "muay thai", "judô", "tenis", "alongamento",
            "ginástica", "ginastica", "kickboxing", "calistenia", "treinamento funcional",
            "recreação esportiva", "plano academia", "mensalidade academia",
        ],
    ),
    (
        Category::Educacao,
        &[
            "mensalidade escolar", "mensalidade faculdade", "curso", "cursos online", "ead",
            "ensino", "escola", "faculdade", "universidade", "colégio", "colegio",
            "pós-graduação", "pos graduacao", "graduação", "graduacao", "aula", "aulão",
            "reforço escolar", "reforco escolar", "apostila", "material escolar", "mochila",
            "livros didáticos", "livro didático", "vestibular", "enem", "idiomas", "inglês",
            "ingles", "espanhol", "aula particular", "plataforma de estudo", "alura",
            "rocketseat", "udemy", "coursera", "khan academy", "senai", "senac", "sesi",
            "material didático", "edtech", "ensino técnico", "ensino médio",
            "ensino fundamental", "educação infantil", "biblioteca", "educação", "educacao",
            "ensino superior", "plano educacional", "estudo", "educacao", "educação",
        ],
    ),
];

/// One precompiled whole-word pattern per category.
///
/// Keywords are escaped before compilation, so dictionary entries are
/// literal text even when they contain regex metacharacters ("disney+",
/// "ingresso.com"). Compiling the alternation once here replaces the
/// per-call pattern construction of the original implementation without
/// changing observable behavior.
struct CategoryMatcher {
    rules: Vec<(Category, Regex)>,
}

impl CategoryMatcher {
    fn build() -> Self {
        let rules = DICTIONARY
            .iter()
            .map(|(category, keywords)| {
                let alternates: Vec<String> =
                    keywords.iter().map(|kw| regex::escape(kw)).collect();
                let pattern = format!(r"\b(?:{})\b", alternates.join("|"));
                let regex = Regex::new(&pattern).expect("dictionary keyword pattern compiles");
                (*category, regex)
            })
            .collect();
        Self { rules }
    }

    fn suggest(&self, text: &str) -> Vec<Category> {
        let lower = text.to_lowercase();
        self.rules
            .iter()
            .filter(|(_, regex)| regex.is_match(&lower))
            .map(|(category, _)| *category)
            .collect()
    }
}

static MATCHER: LazyLock<CategoryMatcher> = LazyLock::new(CategoryMatcher::build);

/// Suggest categories for a free-text transaction note.
///
/// Returns every category with at least one whole-word keyword hit in the
/// lower-cased input, duplicate-free, in dictionary order. Total over all
/// inputs: unmatched, empty, or arbitrary binary-looking strings yield an
/// empty vector, never an error.
pub fn suggest_categories(text: &str) -> Vec<Category> {
    MATCHER.suggest(text)
}
