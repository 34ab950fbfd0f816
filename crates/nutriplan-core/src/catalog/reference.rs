//! Built-in nutrient reference table (TACO / USDA values).

use crate::models::{FoodReference, NutrientTotals};

/// (id, name, source, kcal, protein, carb, fat, fiber, sodium, portion, unit)
type Row = (
    &'static str,
    &'static str,
    &'static str,
    f64,
    f64,
    f64,
    f64,
    f64,
    f64,
    f64,
    &'static str,
);

const REFERENCE_ROWS: &[Row] = &[
    // Carbohydrates
    ("taco_001", "Arroz branco cozido", "TACO", 128.0, 2.5, 28.1, 0.2, 1.6, 1.0, 100.0, "g"),
    ("taco_101", "Arroz integral cozido", "TACO", 124.0, 2.6, 25.8, 1.0, 2.7, 1.0, 100.0, "g"),
    ("taco_006", "Batata doce cozida", "TACO", 77.0, 0.6, 18.4, 0.1, 2.2, 9.0, 100.0, "g"),
    ("taco_103", "Mandioca cozida", "TACO", 125.0, 0.6, 30.1, 0.3, 1.6, 1.0, 100.0, "g"),
    ("taco_105", "Macarrão cozido", "TACO", 102.0, 3.0, 19.9, 0.5, 1.0, 1.0, 100.0, "g"),
    ("taco_009", "Aveia em flocos", "TACO", 394.0, 13.9, 66.6, 8.5, 9.1, 5.0, 50.0, "g"),
    ("usda_107", "Quinoa cozida", "USDA", 120.0, 4.4, 21.3, 1.9, 2.8, 7.0, 100.0, "g"),
    ("taco_109", "Tapioca", "TACO", 68.0, 0.1, 17.1, 0.0, 0.0, 1.0, 50.0, "g"),
    ("taco_013", "Pão integral", "TACO", 253.0, 9.0, 49.0, 3.5, 6.9, 400.0, 50.0, "fatia"),
    ("taco_111", "Pão francês", "TACO", 300.0, 8.0, 58.6, 3.1, 2.3, 648.0, 50.0, "unidade"),
    ("usda_114", "Granola", "USDA", 471.0, 10.5, 64.7, 19.4, 5.3, 23.0, 40.0, "g"),
    // Legumes
    ("taco_002", "Feijão preto cozido", "TACO", 77.0, 4.5, 14.0, 0.5, 8.4, 2.0, 100.0, "g"),
    ("taco_116", "Feijão carioca cozido", "TACO", 76.0, 4.8, 13.6, 0.5, 8.5, 2.0, 100.0, "g"),
    ("taco_117", "Lentilha cozida", "TACO", 93.0, 6.3, 16.3, 0.5, 7.9, 2.0, 100.0, "g"),
    ("taco_118", "Grão-de-bico cozido", "TACO", 121.0, 8.9, 18.0, 2.6, 5.1, 7.0, 100.0, "g"),
    // Animal proteins
    ("taco_003", "Peito de frango grelhado", "TACO", 165.0, 31.0, 0.0, 3.6, 0.0, 70.0, 100.0, "g"),
    ("taco_122", "Frango desfiado", "TACO", 163.0, 30.0, 0.0, 4.0, 0.0, 68.0, 100.0, "g"),
    ("taco_020", "Carne moída (patinho)", "TACO", 137.0, 21.0, 0.0, 5.5, 0.0, 59.0, 100.0, "g"),
    ("taco_126", "Alcatra grelhada", "TACO", 235.0, 32.4, 0.0, 11.0, 0.0, 51.0, 100.0, "g"),
    ("usda_124", "Peru assado", "USDA", 170.0, 29.0, 0.0, 5.0, 0.0, 65.0, 100.0, "g"),
    ("taco_004", "Ovo cozido", "TACO", 155.0, 13.0, 1.1, 11.0, 0.0, 124.0, 50.0, "unidade"),
    ("taco_135", "Clara de ovo", "TACO", 52.0, 11.0, 0.7, 0.2, 0.0, 166.0, 33.0, "unidade"),
    // Fish
    ("taco_016", "Filé de tilápia", "TACO", 96.0, 20.0, 0.0, 1.5, 0.0, 52.0, 100.0, "g"),
    ("usda_136", "Salmão grelhado", "USDA", 208.0, 20.4, 0.0, 13.4, 0.0, 59.0, 100.0, "g"),
    ("taco_137", "Atum em conserva", "TACO", 166.0, 26.2, 0.0, 6.3, 0.0, 360.0, 100.0, "g"),
    ("taco_138", "Sardinha em conserva", "TACO", 208.0, 24.6, 0.0, 11.5, 0.0, 480.0, 100.0, "g"),
    // Dairy
    ("taco_010", "Leite desnatado", "TACO", 35.0, 3.4, 4.9, 0.1, 0.0, 50.0, 200.0, "ml"),
    ("taco_144", "Leite integral", "TACO", 61.0, 3.0, 4.5, 3.5, 0.0, 50.0, 200.0, "ml"),
    ("taco_011", "Queijo minas frescal", "TACO", 264.0, 17.4, 3.1, 20.8, 0.0, 215.0, 50.0, "g"),
    ("usda_146", "Queijo cottage", "USDA", 98.0, 11.1, 3.4, 4.3, 0.0, 364.0, 100.0, "g"),
    ("usda_001", "Iogurte natural", "USDA", 61.0, 3.5, 4.7, 3.3, 0.0, 46.0, 150.0, "ml"),
    ("usda_151", "Iogurte grego", "USDA", 97.0, 9.0, 3.6, 5.0, 0.0, 36.0, 100.0, "g"),
    // Fruits
    ("taco_005", "Banana", "TACO", 89.0, 1.1, 23.0, 0.3, 2.6, 1.0, 100.0, "unidade"),
    ("taco_012", "Maçã", "TACO", 52.0, 0.3, 14.0, 0.2, 2.4, 1.0, 130.0, "unidade"),
    ("taco_156", "Mamão papaya", "TACO", 40.0, 0.5, 10.4, 0.1, 1.0, 3.0, 100.0, "g"),
    // Vegetables
    ("taco_007", "Brócolis cozido", "TACO", 25.0, 1.9, 4.5, 0.2, 3.4, 8.0, 100.0, "g"),
    ("taco_014", "Tomate", "TACO", 18.0, 0.9, 3.9, 0.2, 1.2, 5.0, 100.0, "g"),
    ("taco_015", "Alface", "TACO", 14.0, 1.4, 2.9, 0.2, 2.1, 8.0, 100.0, "g"),
    ("taco_175", "Cenoura crua", "TACO", 34.0, 1.3, 7.7, 0.2, 3.2, 4.0, 100.0, "g"),
    // Fats and nuts
    ("taco_008", "Azeite de oliva", "TACO", 884.0, 0.0, 0.0, 100.0, 0.0, 0.0, 10.0, "ml"),
    ("taco_017", "Castanha do Pará", "TACO", 656.0, 14.0, 12.0, 63.0, 7.5, 3.0, 10.0, "g"),
    // Plant milks
    ("usda_221", "Leite de amêndoas", "USDA", 17.0, 0.6, 0.6, 1.4, 0.0, 67.0, 200.0, "ml"),
    ("usda_222", "Leite de aveia", "USDA", 48.0, 1.0, 9.0, 1.5, 0.8, 36.0, 200.0, "ml"),
];

/// The built-in reference table, in catalog order.
pub fn reference_table() -> Vec<FoodReference> {
    REFERENCE_ROWS
        .iter()
        .map(
            |&(id, name, source, kcal, protein, carb, fat, fiber, sodium, portion, unit)| {
                FoodReference::new(id.into(), name.into(), source.into())
                    .with_nutrients(NutrientTotals {
                        energy_kcal: kcal,
                        protein_g: protein,
                        carb_g: carb,
                        fat_g: fat,
                        fiber_g: fiber,
                        sodium_mg: sodium,
                    })
                    .with_portion(portion, unit)
            },
        )
        .collect()
}
