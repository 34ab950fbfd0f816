//! Keyword-based ingredient classification.
//!
//! Categories are scanned in priority order (see [`ShoppingCategory::ALL`]); the
//! first whose keyword list has a substring in the lowercased name wins.
//! Keywords cover Portuguese catalog names and their English equivalents.

use crate::models::ShoppingCategory;

const FRUIT_KEYWORDS: &[&str] = &[
    "banana", "maçã", "apple", "laranja", "orange", "morango", "strawberr", "uva", "grape",
    "mamão", "papaya", "abacaxi", "pineapple", "manga", "mango", "melancia", "melão", "melon",
    "pear", "kiwi", "limão", "lemon", "abacate", "avocado", "goiaba", "guava", "maracujá",
    "açaí", "acerola", "tangerina", "mexerica", "ameixa", "plum", "pêssego", "peach", "cereja",
    "cherry", "framboesa", "amora", "blueberr", "berry", "fruta", "fruit",
];

const PROTEIN_KEYWORDS: &[&str] = &[
    "frango", "chicken", "carne", "beef", "meat", "steak", "bife", "patinho", "alcatra",
    "maminha", "picanha", "acém", "costela", "filé mignon", "contrafilé", "peru", "turkey",
    "porco", "pork", "lombo", "bacon", "linguiça", "salsicha", "sausage", "presunto",
    "hambúrguer", "burger", "cordeiro", "lamb", "whey", "tofu",
];

const DAIRY_KEYWORDS: &[&str] = &[
    "leite", "milk", "queijo", "cheese", "iogurte", "yogurt", "yoghurt", "requeijão",
    "manteiga", "butter", "ricota", "ricotta", "cottage", "cream", "kefir", "coalhada",
    "mussarela", "mozzarella", "parmesão", "parmesan",
];

const GRAIN_KEYWORDS: &[&str] = &[
    "arroz", "rice", "aveia", "oat", "trigo", "wheat", "pão", "bread", "macarrão", "pasta",
    "spaghetti", "massa", "quinoa", "milho", "corn", "granola", "cereal", "feijão", "bean",
    "lentilha", "lentil", "grão", "chickpea", "tapioca", "cuscuz", "couscous", "farinha",
    "flour", "torrada", "toast", "biscoito", "cracker", "centeio", "cevada", "barley",
];

const VEGETABLE_KEYWORDS: &[&str] = &[
    "alface", "lettuce", "tomate", "tomato", "cenoura", "carrot", "brócolis", "broccoli",
    "couve", "kale", "cabbage", "repolho", "espinafre", "spinach", "abobrinha", "zucchini",
    "abóbora", "pumpkin", "squash", "berinjela", "eggplant", "pepino", "cucumber", "cebola",
    "onion", "alho", "garlic", "batata", "potato", "mandioca", "aipim", "inhame", "beterraba",
    "beet", "chuchu", "quiabo", "vagem", "pimentão", "pepper", "rúcula", "arugula", "agrião",
    "aspargo", "asparagus", "cogumelo", "mushroom", "ervilha", "gengibre", "ginger", "coentro",
    "salada", "salad", "legume", "verdura", "vegetable",
];

const FISH_KEYWORDS: &[&str] = &[
    "peixe", "fish", "tilápia", "tilapia", "salmão", "salmon", "atum", "tuna", "sardinha",
    "sardine", "bacalhau", "camarão", "shrimp", "merluza", "pescada", "truta", "trout",
    "frutos do mar", "seafood", "lula", "polvo",
];

const EGG_KEYWORDS: &[&str] = &["ovo", "egg", "omelete", "omelette", "clara", "gema"];

/// Keyword list for a category. `Other` has none; it is the fallback.
pub fn keywords(category: ShoppingCategory) -> &'static [&'static str] {
    match category {
        ShoppingCategory::Fruits => FRUIT_KEYWORDS,
        ShoppingCategory::Proteins => PROTEIN_KEYWORDS,
        ShoppingCategory::Dairy => DAIRY_KEYWORDS,
        ShoppingCategory::Grains => GRAIN_KEYWORDS,
        ShoppingCategory::Vegetables => VEGETABLE_KEYWORDS,
        ShoppingCategory::Fish => FISH_KEYWORDS,
        ShoppingCategory::Eggs => EGG_KEYWORDS,
        ShoppingCategory::Other => &[],
    }
}

/// Assign an ingredient name to exactly one category.
pub fn classify(ingredient_name: &str) -> ShoppingCategory {
    let lower = ingredient_name.to_lowercase();
    ShoppingCategory::ALL
        .iter()
        .copied()
        .find(|category| keywords(*category).iter().any(|k| lower.contains(k)))
        .unwrap_or(ShoppingCategory::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_examples() {
        assert_eq!(classify("parafuso"), ShoppingCategory::Other);
        assert_eq!(classify("Peito de Frango"), ShoppingCategory::Proteins);
        assert_eq!(classify("Banana Prata"), ShoppingCategory::Fruits);
    }

    #[test]
    fn test_classify_english_names() {
        assert_eq!(classify("Oats"), ShoppingCategory::Grains);
        assert_eq!(classify("Milk"), ShoppingCategory::Dairy);
        assert_eq!(classify("Rice"), ShoppingCategory::Grains);
        assert_eq!(classify("Chicken"), ShoppingCategory::Proteins);
    }

    #[test]
    fn test_priority_order() {
        // Dairy is checked before Grains
        assert_eq!(classify("Leite de aveia"), ShoppingCategory::Dairy);
        // Vegetables before Eggs
        assert_eq!(classify("Eggplant"), ShoppingCategory::Vegetables);
        // "frutos do mar" is not a fruit
        assert_eq!(classify("Frutos do mar"), ShoppingCategory::Fish);
    }

    #[test]
    fn test_case_insensitive_unicode() {
        assert_eq!(classify("MAÇÃ FUJI"), ShoppingCategory::Fruits);
        assert_eq!(classify("SALMÃO GRELHADO"), ShoppingCategory::Fish);
    }

    #[test]
    fn test_empty_name_is_other() {
        assert_eq!(classify(""), ShoppingCategory::Other);
        assert_eq!(classify("   "), ShoppingCategory::Other);
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for category in ShoppingCategory::ALL {
            for keyword in keywords(category) {
                assert_eq!(*keyword, keyword.to_lowercase(), "{:?}", category);
            }
        }
        assert!(keywords(ShoppingCategory::Other).is_empty());
    }
}
