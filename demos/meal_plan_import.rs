//! # Meal Plan Import Example
//!
//! This example imports the same week from a CSV export and from PDF-extracted text,
//! lays it on the week grid, adjusts servings and prints the resulting shopping list.

use meal_planner::csv_importer::import_csv;
use meal_planner::export::{format_amount, shopping_list_text};
use meal_planner::id_generator::SequentialIds;
use meal_planner::nutrition::total_nutrition;
use meal_planner::shopping_list::generate_shopping_list;
use meal_planner::text_importer::import_text;
use meal_planner::week_plan::{apply_meals, empty_week, set_servings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🥑 Meal Plan Import Example");
    println!("===========================\n");

    // Example 1: CSV export with Spanish headers and slot codes
    println!("📄 Example 1: CSV Export");
    println!("------------------------");

    let csv = "\
Día,Tiempo,Ingrediente,Porción
Lunes,Desayuno,Huevo,2pza
Lunes,Desayuno,Tortilla,2
Lunes,Snack M,Manzana,1pza
Lunes,Comida,Pechuga de pollo,150g
Lunes,Comida,Arroz,0.5/2tza
Martes,Cena,Frijol,1/2 taza
Martes,Cena,Queso panela,40gr
Martes,Cena,Aceite,nan
";

    let mut ids = SequentialIds::new();
    let plan = import_csv(csv, &mut ids)?;

    println!("Imported {} meals and {} recipes:", plan.meals.len(), plan.recipes.len());
    for slot in &plan.meals {
        println!("  • {}", slot);
    }

    // Example 2: text extracted from a PDF meal plan
    println!("\n📑 Example 2: PDF Text");
    println!("----------------------");

    let text = "\
MIÉRCOLES
Desayuno
1 taza de avena cocida con 1 pza de plátano
Comida
150 g de pescado a la plancha, 1 taza de verduras al vapor
";

    let text_plan = import_text(text, &mut ids)?;
    for slot in &text_plan.meals {
        println!("  • {}", slot);
        if let Some(recipe) = &slot.recipe {
            for ingredient in &recipe.ingredients {
                println!("      {} ({})", ingredient, ingredient.category);
            }
        }
    }

    // Example 3: the week grid and its shopping list
    println!("\n🛒 Example 3: Shopping List");
    println!("---------------------------");

    let mut week = empty_week();
    apply_meals(&mut week, &plan.meals);
    apply_meals(&mut week, &text_plan.meals);
    set_servings(&mut week, "Monday-Lunch", 2);

    let list = generate_shopping_list(&week);
    println!("{}", shopping_list_text(&list));

    let nutrition = total_nutrition(&week);
    println!(
        "\nImported recipes carry no nutrition facts: {} kcal",
        format_amount(nutrition.calories)
    );

    Ok(())
}
