use anyhow::Result;
use chrono::Utc;
use meal_planner::cli::{load_plan, parse_args, render, PlanReport};
use meal_planner::id_generator::{IdGenerator, RandomIds, SequentialIds};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let cli = parse_args();

    // Logs go to stderr so that rendered output can be piped
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if cli.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    info!("Starting meal planner");

    let mut ids: Box<dyn IdGenerator> = if cli.sequential_ids {
        Box::new(SequentialIds::new())
    } else {
        Box::new(RandomIds::new())
    };

    let imported = load_plan(&cli.input, cli.input_format(), ids.as_mut()).await?;
    let report = PlanReport::build(imported, ids.next_id("plan"), cli.plan_name(), Utc::now());

    println!("{}", render(&report, cli.output)?);

    Ok(())
}
