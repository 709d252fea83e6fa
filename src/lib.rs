//! # Meal Planner
//!
//! Imports weekly meal plans written in mixed Spanish and English (CSV exports and
//! PDF-extracted text), normalizes them into recipes and meal slots, and aggregates
//! the week into a scaled, aisle-ordered shopping list.
//!
//! ```rust
//! use meal_planner::csv_importer::import_csv;
//! use meal_planner::id_generator::SequentialIds;
//! use meal_planner::shopping_list::generate_shopping_list;
//!
//! let csv = "Día,Tiempo,Ingrediente,Porción\n\
//!            Lunes,Desayuno,Huevo,2pza\n\
//!            Martes,Desayuno,Huevo,1pza\n";
//! let plan = import_csv(csv, &mut SequentialIds::new()).unwrap();
//! let list = generate_shopping_list(&plan.meals);
//!
//! assert_eq!(list.len(), 1);
//! assert_eq!(list[0].amount, 3.0);
//! ```

pub mod categorizer;
pub mod cli;
pub mod column_dialects;
pub mod csv_importer;
pub mod export;
pub mod id_generator;
pub mod import_config;
pub mod import_errors;
pub mod meal_model;
pub mod nutrition;
pub mod portion_parser;
pub mod row_parser;
pub mod shopping_list;
pub mod text_extractor;
pub mod text_importer;
pub mod unit_normalizer;
pub mod vocabulary;
pub mod week_plan;
