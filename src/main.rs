use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use thali_planner::catalog::{
    builtin_catalog, load_catalog, FoodCatalog, FUZZY_SUGGESTION_LIMIT,
};
use thali_planner::cli::{Cli, Command, PreferenceArgs, ProfileArgs};
use thali_planner::error::Result;
use thali_planner::export::{write_plan_csv, write_plan_json, write_variations_json};
use thali_planner::interface::{
    display_food_list, display_meal_plan, display_summary, display_variations, prompt_preferences,
    prompt_profile,
};
use thali_planner::models::UserProfile;
use thali_planner::planner::{filter_foods, generate_meal_plan, generate_variations, summarize};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("thali_planner={}", level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let catalog = match &cli.catalog {
        Some(path) => load_catalog(path)?,
        None => builtin_catalog()?,
    };
    let catalog = catalog.install_global()?;

    match cli.command {
        Command::Target { profile } => cmd_target(&profile),
        Command::Plan {
            profile,
            preferences,
            variation,
            json,
            csv,
        } => {
            let user = resolve_profile(&profile)?;
            let preferences = resolve_preferences(&profile, preferences)?;
            let summary = summarize(&user);
            display_summary(&user, &summary);

            let plan = generate_meal_plan(
                catalog,
                &summary.target,
                preferences.diet,
                preferences.region,
                variation,
            )?;
            display_meal_plan(&plan);

            if let Some(path) = json {
                write_plan_json(&plan, &path)?;
                println!("Plan written to {}", path.display());
            }
            if let Some(path) = csv {
                write_plan_csv(&plan, &path)?;
                println!("Plan written to {}", path.display());
            }
            Ok(())
        }
        Command::Variations {
            profile,
            preferences,
            count,
            json,
        } => {
            let user = resolve_profile(&profile)?;
            let preferences = resolve_preferences(&profile, preferences)?;
            let summary = summarize(&user);
            display_summary(&user, &summary);

            let variations = generate_variations(
                catalog,
                &summary.target,
                preferences.diet,
                preferences.region,
                count,
            );
            display_variations(&variations, count);

            if let Some(path) = json {
                write_variations_json(&variations, &path)?;
                println!("Variations written to {}", path.display());
            }
            Ok(())
        }
        Command::Foods {
            preferences,
            search,
        } => cmd_foods(catalog, preferences, search.as_deref()),
    }
}

fn resolve_profile(args: &ProfileArgs) -> Result<UserProfile> {
    if args.interactive {
        prompt_profile()
    } else {
        args.to_profile()
    }
}

/// Interactive sessions also ask for preferences instead of using the flags.
fn resolve_preferences(args: &ProfileArgs, flags: PreferenceArgs) -> Result<PreferenceArgs> {
    if args.interactive {
        let (diet, region) = prompt_preferences()?;
        Ok(PreferenceArgs { diet, region })
    } else {
        Ok(flags)
    }
}

/// Show the derived nutrition target for a profile.
fn cmd_target(args: &ProfileArgs) -> Result<()> {
    let user = resolve_profile(args)?;
    display_summary(&user, &summarize(&user));
    Ok(())
}

/// List eligible foods, or look one up by name.
fn cmd_foods(
    catalog: &FoodCatalog,
    preferences: PreferenceArgs,
    search: Option<&str>,
) -> Result<()> {
    let Some(query) = search else {
        let foods = filter_foods(catalog, preferences.diet, preferences.region)?;
        let title = format!("{} foods, {}", preferences.diet, preferences.region);
        display_food_list(&foods, &title);

        let categories: Vec<String> = catalog.categories().iter().map(|c| c.to_string()).collect();
        println!("Catalog categories: {}", categories.join(", "));
        return Ok(());
    };

    if let Some(food) = catalog.get_food(query) {
        display_food_list(&[food], "Match");
        return Ok(());
    }

    let suggestions: Vec<_> = catalog
        .search(query)
        .into_iter()
        .take(FUZZY_SUGGESTION_LIMIT)
        .map(|(food, _)| food)
        .collect();

    if suggestions.is_empty() {
        println!("No food named '{}' in the catalog.", query);
    } else {
        println!("No exact match for '{}'.", query);
        display_food_list(&suggestions, "Did you mean");
    }
    Ok(())
}
