//! Shopping list renderings: share text, JSON, and CSV.

use serde::{Deserialize, Serialize};

use crate::models::ShoppingCategory;
use crate::shopping::ShoppingList;

/// Shopping list export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingListExport {
    /// Export metadata
    pub metadata: ExportMetadata,
    /// Non-empty categories in priority order
    pub groups: Vec<ExportGroup>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Heading for the share text (usually the plan name)
    pub title: String,
    /// Export timestamp
    pub exported_at: String,
    /// Total item count
    pub total_items: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportGroup {
    pub category: ShoppingCategory,
    pub label: String,
    pub icon: String,
    pub items: Vec<ExportItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportItem {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

impl ShoppingListExport {
    /// Snapshot a shopping list for export.
    pub fn from_list(list: &ShoppingList, title: &str) -> Self {
        let groups = list
            .groups()
            .iter()
            .map(|(category, items)| ExportGroup {
                category: *category,
                label: category.label().to_string(),
                icon: category.icon().to_string(),
                items: items
                    .iter()
                    .map(|item| ExportItem {
                        name: item.display_name.clone(),
                        quantity: item.quantity_amount,
                        unit: item.quantity_unit.clone(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            metadata: ExportMetadata {
                title: title.trim().to_string(),
                exported_at: chrono::Utc::now().to_rfc3339(),
                total_items: list.total_items(),
            },
            groups,
        }
    }

    /// Plain text suitable for messaging apps.
    pub fn to_text(&self) -> String {
        let mut text = format!("🛒 {}", self.metadata.title);

        for group in &self.groups {
            text.push_str(&format!("\n\n{} {}:", group.icon, group.label));
            for item in &group.items {
                text.push_str(&format!(
                    "\n- {} {} {}",
                    format_quantity(item.quantity),
                    item.unit,
                    item.name
                ));
            }
        }

        text.push('\n');
        text
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export to CSV format.
    pub fn to_csv(&self) -> String {
        let mut csv = String::new();

        // Header
        csv.push_str("category,name,quantity,unit\n");

        for group in &self.groups {
            for item in &group.items {
                csv.push_str(&format!(
                    "{},{},{},{}\n",
                    escape_csv(&group.label),
                    escape_csv(&item.name),
                    item.quantity,
                    escape_csv(&item.unit),
                ));
            }
        }

        csv
    }
}

/// Whole quantities print without a decimal part.
fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{:.0}", quantity)
    } else {
        let formatted = format!("{:.2}", quantity);
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

/// Escape a string for CSV output.
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
