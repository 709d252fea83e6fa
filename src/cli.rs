//! # Command Line Interface
//!
//! Arguments of the `meal-planner` binary, plan loading and report rendering. The
//! binary itself only wires these together.

use crate::csv_importer::CsvImporter;
use crate::export::{format_amount, meal_plan_csv, shopping_list_csv, shopping_list_text};
use crate::id_generator::IdGenerator;
use crate::import_config::ImportConfig;
use crate::meal_model::{
    Day, GroceryCategory, ImportedPlan, MealPlan, Nutrition, Recipe, ShoppingListItem,
};
use crate::nutrition::total_nutrition;
use crate::shopping_list::generate_shopping_list;
use crate::text_importer::import_text_with_config;
use crate::week_plan::{apply_meals, empty_week};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Source format of a meal plan file
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// Tabular export with day, meal type, ingredient and portion columns
    Csv,
    /// Text extracted from a PDF meal plan
    Text,
}

impl InputFormat {
    /// `.csv` files are tabular, anything else is treated as extracted text
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => InputFormat::Csv,
            _ => InputFormat::Text,
        }
    }
}

/// What the binary prints
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Week overview, shopping list and nutrition totals
    Summary,
    /// The whole report as JSON
    Json,
    /// Shopping list as a check list
    Text,
    /// Shopping list as CSV
    Csv,
    /// The week as a normalized meal plan CSV
    PlanCsv,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Import a weekly meal plan and build its shopping list", long_about = None)]
pub struct Cli {
    /// Path to the meal plan file (CSV export or PDF-extracted text)
    #[arg(short, long, env = "MEAL_PLAN_FILE")]
    pub input: PathBuf,

    /// Input format, guessed from the file extension when omitted
    #[arg(short, long, value_enum)]
    pub format: Option<InputFormat>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
    pub output: OutputFormat,

    /// Name of the saved plan, defaults to the file name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Number identifiers sequentially instead of randomly
    #[arg(long)]
    pub sequential_ids: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    pub fn input_format(&self) -> InputFormat {
        self.format.unwrap_or_else(|| InputFormat::from_path(&self.input))
    }

    pub fn plan_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| {
            self.input
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or("Meal plan")
                .to_string()
        })
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

/// Import meal plan text in `format`
pub fn import_plan(
    text: &str,
    format: InputFormat,
    ids: &mut dyn IdGenerator,
    config: &ImportConfig,
) -> Result<ImportedPlan> {
    let plan = match format {
        InputFormat::Csv => CsvImporter::new(config.clone()).import(text, ids),
        InputFormat::Text => import_text_with_config(text, ids, config),
    };
    plan.context("Failed to import meal plan")
}

/// Read and import a meal plan file
pub async fn load_plan(
    path: &Path,
    format: InputFormat,
    ids: &mut dyn IdGenerator,
) -> Result<ImportedPlan> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read meal plan file {}", path.display()))?;
    info!(path = %path.display(), format = ?format, bytes = text.len(), "Meal plan file loaded");
    import_plan(&text, format, ids, &ImportConfig::default())
}

/// Everything the binary can print about one imported week
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanReport {
    pub plan: MealPlan,
    pub recipes: Vec<Recipe>,
    pub shopping_list: Vec<ShoppingListItem>,
    pub nutrition: Nutrition,
}

impl PlanReport {
    /// Lay the imported meals on an empty week and derive the list and totals
    pub fn build(
        imported: ImportedPlan,
        plan_id: String,
        name: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        let mut week = empty_week();
        apply_meals(&mut week, &imported.meals);

        let shopping_list = generate_shopping_list(&week);
        let nutrition = total_nutrition(&week);

        Self {
            plan: MealPlan::new(plan_id, name, week, created_at),
            recipes: imported.recipes,
            shopping_list,
            nutrition,
        }
    }
}

/// Render `report` in the requested output format
pub fn render(report: &PlanReport, output: OutputFormat) -> Result<String> {
    Ok(match output {
        OutputFormat::Summary => render_summary(report),
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).context("Failed to serialize report")?
        }
        OutputFormat::Text => shopping_list_text(&report.shopping_list),
        OutputFormat::Csv => shopping_list_csv(&report.shopping_list),
        OutputFormat::PlanCsv => meal_plan_csv(&report.plan.meals),
    })
}

fn render_summary(report: &PlanReport) -> String {
    let plan = &report.plan;
    let mut output = String::new();

    output.push_str(&format!("📅 {} (week of {})\n", plan.name, plan.week));
    output.push_str(&format!(
        "{}/{} meals planned, {} recipes\n",
        plan.assigned_count(),
        plan.meals.len(),
        report.recipes.len()
    ));

    for day in Day::ALL {
        let assigned: Vec<_> = plan
            .meals
            .iter()
            .filter(|slot| slot.day == day && slot.recipe.is_some())
            .collect();
        if assigned.is_empty() {
            continue;
        }
        output.push_str(&format!("\n{}\n", day));
        for slot in assigned {
            output.push_str(&format!("  • {}\n", slot));
        }
    }

    output.push_str(&format!("\n🛒 Shopping list ({} items)\n", report.shopping_list.len()));
    for category in GroceryCategory::ALL {
        let items: Vec<_> = report
            .shopping_list
            .iter()
            .filter(|item| item.category == category)
            .collect();
        if items.is_empty() {
            continue;
        }
        output.push_str(&format!("\n{}\n", category));
        for item in items {
            output.push_str(&format!(
                "  ○ {} {} {}\n",
                format_amount(item.amount),
                item.unit,
                item.name
            ));
        }
    }

    let nutrition = &report.nutrition;
    output.push_str(&format!(
        "\nNutrition: {} kcal, {} g protein, {} g carbs, {} g fat, {} g fiber\n",
        format_amount(nutrition.calories),
        format_amount(nutrition.protein),
        format_amount(nutrition.carbs),
        format_amount(nutrition.fat),
        format_amount(nutrition.fiber)
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id_generator::SequentialIds;
    use chrono::TimeZone;

    fn report() -> PlanReport {
        let csv = "Día,Tiempo,Ingrediente,Porción\n\
                   Lunes,Desayuno,Huevo,2pza\n\
                   Lunes,Desayuno,Jitomate,1\n\
                   Martes,Cena,Huevo,3pza\n";
        let imported = import_plan(
            csv,
            InputFormat::Csv,
            &mut SequentialIds::new(),
            &ImportConfig::default(),
        )
        .unwrap();
        let created_at = Utc.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap();
        PlanReport::build(imported, "plan-1".to_string(), "Semana".to_string(), created_at)
    }

    #[test]
    fn test_cli_arguments() {
        let cli = Cli::try_parse_from(["meal-planner", "--input", "semana.CSV", "-o", "plan-csv"]).unwrap();
        assert_eq!(cli.input_format(), InputFormat::Csv);
        assert_eq!(cli.output, OutputFormat::PlanCsv);
        assert_eq!(cli.plan_name(), "semana");

        let cli = Cli::try_parse_from(["meal-planner", "-i", "plan.txt", "-f", "csv"]).unwrap();
        assert_eq!(cli.input_format(), InputFormat::Csv);
        assert_eq!(cli.output, OutputFormat::Summary);
    }

    #[test]
    fn test_report_lays_meals_on_week() {
        let report = report();
        assert_eq!(report.plan.meals.len(), 35);
        assert_eq!(report.plan.assigned_count(), 2);
        assert_eq!(report.plan.week, "2024-03-04");
        assert_eq!(report.shopping_list.len(), 2);
        assert_eq!(report.shopping_list[0].name, "Jitomate");
        assert_eq!(report.shopping_list[1].amount, 5.0);
    }

    #[test]
    fn test_summary_rendering() {
        let summary = render(&report(), OutputFormat::Summary).unwrap();
        assert!(summary.contains("📅 Semana (week of 2024-03-04)"));
        assert!(summary.contains("2/35 meals planned, 2 recipes"));
        assert!(summary.contains("  • Monday Breakfast: Huevo, Jitomate (x1)"));
        assert!(summary.contains("  ○ 5 piece Huevo"));
    }

    #[test]
    fn test_json_rendering() {
        let json = render(&report(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["plan"]["week"], "2024-03-04");
        assert_eq!(value["shoppingList"][1]["recipeNames"][0], "Huevo, Jitomate");
    }

    #[test]
    fn test_import_error_keeps_cause() {
        let err = import_plan(
            "Día,Tiempo\nLunes,Desayuno\n",
            InputFormat::Csv,
            &mut SequentialIds::new(),
            &ImportConfig::default(),
        )
        .unwrap_err();
        assert!(err.downcast_ref::<crate::import_errors::ImportError>().is_some());
    }
}
