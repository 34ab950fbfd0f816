//! Free-text food name matcher.
//!
//! Stages, tried in order (first hit wins, catalog order breaks ties):
//! 1. Exact name (case-insensitive, trimmed)
//! 2. Catalog name contains the query
//! 3. Query contains the catalog name
//! 4. Any query word longer than two characters appears in a name
//! 5. Synonym expansion (vague terms like "fruta" → concrete foods)
//! 6. Fuzzy similarity above a threshold (typos, missing accents)

use strsim::{jaro_winkler, normalized_levenshtein};

use crate::catalog::FoodCatalog;
use crate::models::FoodReference;

/// Matcher for draft food names against a catalog.
pub struct FoodMatcher {
    /// Ordered (term, candidates) pairs; order is lookup order
    synonyms: Vec<(String, Vec<String>)>,
    /// Minimum combined similarity for the fuzzy stage
    min_similarity: f64,
}

impl Default for FoodMatcher {
    fn default() -> Self {
        Self::new(0.85)
    }
}

impl FoodMatcher {
    /// Create a matcher with the default synonym table.
    pub fn new(min_similarity: f64) -> Self {
        Self {
            synonyms: Self::default_synonyms(),
            min_similarity,
        }
    }

    /// Add a synonym term. Candidates are tried in the order given.
    pub fn add_synonym(&mut self, term: &str, candidates: &[&str]) {
        self.synonyms.push((
            term.to_lowercase(),
            candidates.iter().map(|c| c.to_lowercase()).collect(),
        ));
    }

    /// Find the catalog food a free-text name most likely refers to.
    pub fn find<'a>(&self, name: &str, catalog: &'a FoodCatalog) -> Option<&'a FoodReference> {
        let query = name.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }

        let foods: Vec<(&'a FoodReference, String)> = catalog
            .iter()
            .map(|f| (f, f.name.trim().to_lowercase()))
            .filter(|(_, lower)| !lower.is_empty())
            .collect();
        let first = |pred: &dyn Fn(&str) -> bool| {
            foods.iter().find(|(_, lower)| pred(lower)).map(|(f, _)| *f)
        };

        if let Some(food) = first(&|lower| lower == query) {
            return Some(food);
        }
        if let Some(food) = first(&|lower| lower.contains(&query)) {
            return Some(food);
        }
        if let Some(food) = first(&|lower| query.contains(lower)) {
            return Some(food);
        }

        for word in query
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|w| w.chars().count() > 2)
        {
            if let Some(food) = first(&|lower| lower.contains(word)) {
                return Some(food);
            }
        }

        for (term, candidates) in &self.synonyms {
            if !query.contains(term.as_str()) {
                continue;
            }
            for candidate in candidates {
                if let Some(food) = first(&|lower| lower.contains(candidate.as_str())) {
                    return Some(food);
                }
            }
        }

        // Best score wins; on a tie the earlier catalog entry is kept
        let mut best: Option<(&'a FoodReference, f64)> = None;
        for (food, lower) in &foods {
            let score = fuzzy_match(&query, lower);
            if score >= self.min_similarity && best.map_or(true, |(_, s)| score > s) {
                best = Some((food, score));
            }
        }
        best.map(|(food, _)| food)
    }

    fn default_synonyms() -> Vec<(String, Vec<String>)> {
        let table: &[(&str, &[&str])] = &[
            ("frango", &["peito de frango", "frango desfiado", "coxa de frango"]),
            ("carne", &["carne moída", "patinho", "alcatra", "filé mignon"]),
            ("peixe", &["tilápia", "salmão", "atum"]),
            ("arroz", &["arroz branco", "arroz integral"]),
            ("feijão", &["feijão preto", "feijão carioca"]),
            ("ovo", &["ovo cozido", "ovo mexido", "omelete"]),
            ("leite", &["leite desnatado", "leite integral"]),
            ("pão", &["pão integral", "pão francês", "pão de forma"]),
            ("iogurte", &["iogurte natural", "iogurte grego"]),
            ("queijo", &["queijo minas", "queijo cottage", "ricota"]),
            ("salada", &["alface", "rúcula", "tomate"]),
            ("verdura", &["brócolis", "espinafre", "couve"]),
            ("legume", &["cenoura", "abobrinha", "berinjela"]),
            ("fruta", &["banana", "maçã", "laranja", "morango"]),
            ("castanha", &["castanha do pará", "castanha de caju", "amêndoas"]),
            ("oleaginosa", &["nozes", "amêndoas", "castanha"]),
            ("proteína", &["whey protein", "frango", "ovo", "peixe"]),
        ];

        table
            .iter()
            .map(|(term, candidates)| {
                (
                    term.to_string(),
                    candidates.iter().map(|c| c.to_string()).collect(),
                )
            })
            .collect()
    }
}

/// Combined string similarity in [0, 1].
fn fuzzy_match(a: &str, b: &str) -> f64 {
    // Jaro-Winkler favours shared prefixes; Levenshtein covers overall edit distance
    jaro_winkler(a, b) * 0.6 + normalized_levenshtein(a, b) * 0.4
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodReference;

    fn catalog() -> FoodCatalog {
        FoodCatalog::with_reference_table().unwrap()
    }

    fn find_id(query: &str) -> Option<String> {
        let catalog = catalog();
        FoodMatcher::default()
            .find(query, &catalog)
            .map(|f| f.id.clone())
    }

    #[test]
    fn test_exact_match() {
        assert_eq!(find_id("  BANANA "), Some("taco_005".into()));
    }

    #[test]
    fn test_name_contains_query() {
        // First catalog entry containing "frango" wins
        assert_eq!(find_id("frango"), Some("taco_003".into()));
    }

    #[test]
    fn test_query_contains_name() {
        assert_eq!(find_id("Banana prata madura"), Some("taco_005".into()));
    }

    #[test]
    fn test_keyword_match() {
        assert_eq!(find_id("arroz com legumes"), Some("taco_001".into()));
    }

    #[test]
    fn test_synonym_match() {
        assert_eq!(find_id("proteína magra"), Some("taco_003".into()));
        assert_eq!(find_id("salada verde"), Some("taco_015".into()));
    }

    #[test]
    fn test_fuzzy_match() {
        assert_eq!(find_id("Tomatte"), Some("taco_014".into()));

        let score = fuzzy_match("tomatte", "tomate");
        assert!(score > 0.9);
        assert!(fuzzy_match("tomate", "tomate") > 0.99);
    }

    #[test]
    fn test_no_match() {
        assert_eq!(find_id("xyzzy"), None);
        assert_eq!(find_id(""), None);
        assert_eq!(find_id("   "), None);
    }

    #[test]
    fn test_threshold_is_respected() {
        let catalog = catalog();
        let strict = FoodMatcher::new(1.0);
        assert!(strict.find("Tomatte", &catalog).is_none());
    }

    #[test]
    fn test_custom_synonym() {
        let catalog = FoodCatalog::from_references(vec![FoodReference::new(
            "x1".into(),
            "Whey protein isolado".into(),
            "custom".into(),
        )])
        .unwrap();

        let mut matcher = FoodMatcher::default();
        assert!(matcher.find("shake pós-treino", &catalog).is_none());

        matcher.add_synonym("shake", &["Whey"]);
        assert_eq!(
            matcher.find("shake pós-treino", &catalog).map(|f| f.id.as_str()),
            Some("x1")
        );
    }
}
