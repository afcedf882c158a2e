use bac_core::*;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bac")]
#[command(about = "Blood alcohol content estimator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print a JSON report instead of the text summary
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate BAC from command-line measurements and drinks
    Estimate {
        /// Height in centimetres (defaults to config profile)
        #[arg(long)]
        height: Option<f64>,

        /// Weight in kilograms (defaults to config profile)
        #[arg(long)]
        weight: Option<f64>,

        /// Hours spent drinking
        #[arg(long, default_value_t = 0.0)]
        hours: f64,

        /// Sex: m/male, f/female; anything else has no Widmark factor
        #[arg(long)]
        sex: Option<String>,

        /// Drink as kind:volume_ml:percent, e.g. beer:500:5 (repeatable)
        #[arg(long = "drink", value_name = "KIND:ML:PERCENT")]
        drinks: Vec<DrinkSpec>,
    },

    /// Estimate BAC from a TOML or JSON session file
    Session {
        /// Path to the session file
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    bac_core::logging::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let json = cli.json || config.output.json;

    let person = match cli.command {
        Commands::Estimate {
            height,
            weight,
            hours,
            sex,
            drinks,
        } => build_person(&config, height, weight, hours, sex, drinks)?,
        Commands::Session { file } => Session::load(&file)?.into_person()?,
    };

    if person.widmark_factor() == 0.0 {
        eprintln!(
            "Note: no Widmark factor for sex '{}'; BAC reported as 0.",
            person.sex()
        );
    }

    print_report(&person, json)
}

fn build_person(
    config: &Config,
    height: Option<f64>,
    weight: Option<f64>,
    hours: f64,
    sex: Option<String>,
    drinks: Vec<DrinkSpec>,
) -> Result<Person> {
    let height = height.unwrap_or(config.profile.height_cm);
    let weight = weight.unwrap_or(config.profile.weight_kg);
    let sex = sex
        .map(Sex::from)
        .unwrap_or(config.profile.sex);

    tracing::debug!(
        "Estimating for {} cm, {} kg, {} h, sex {}",
        height,
        weight,
        hours,
        sex
    );

    let mut person = Person::try_new(height, weight, hours, sex)?;
    for spec in drinks {
        person.add_boxed_drink(spec.into_drink());
    }
    Ok(person)
}

fn print_report(person: &Person, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&person.report())?);
    } else {
        println!("{}", person.summary());
    }
    Ok(())
}
