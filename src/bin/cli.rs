use clap::{Parser, Subcommand};
use medpredict_engine::{
    trends::SeverityBreakdown,
    DoctorFilter, DoctorSort, EngineConfig, Gender, HealthEngine, NewProfile, Severity, TimeRange,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "medpredict")]
#[command(about = "MedPredict symptom checker CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Database path (overrides config and MEDPREDICT_DB)
    #[arg(short, long)]
    db: Option<String>,

    /// YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest symptom names for a partial query
    Suggest {
        query: String,
    },

    /// Analyze symptoms and record the result
    Check {
        /// Symptoms, e.g. fever cough "sore throat"
        #[arg(required = true)]
        symptoms: Vec<String>,

        /// Free-text note stored with the check
        #[arg(short, long)]
        notes: Option<String>,

        /// Skip the simulated analysis delay
        #[arg(long)]
        no_delay: bool,
    },

    /// List recorded checks, newest first
    History {
        /// Maximum entries to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Summarize recent history
    Trends {
        /// week, month or year
        #[arg(short, long, default_value = "month")]
        range: TimeRange,
    },

    /// Search the doctor directory
    Doctors {
        #[arg(long)]
        city: Option<String>,

        #[arg(long)]
        specialization: Option<String>,

        /// Substring of name, hospital or specialization
        #[arg(short, long)]
        search: Option<String>,

        /// rating, experience or name
        #[arg(long, default_value = "rating")]
        sort: DoctorSort,
    },

    /// Show or set the local profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Delete profile and history
    Clear,
}

#[derive(Subcommand)]
enum ProfileAction {
    Show,
    Set {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        city: String,
        #[arg(long)]
        age: u32,
        /// male, female or other
        #[arg(long)]
        gender: Gender,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("medpredict_engine=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = EngineConfig::load(cli.config.as_deref())?;
    if let Some(db) = cli.db {
        config.db_path = db;
    }
    if let Commands::Check { no_delay: true, .. } = cli.command {
        config.analysis_delay_ms = 0;
    }

    let engine = HealthEngine::new(config).await?;

    match cli.command {
        Commands::Suggest { query } => {
            let suggestions = engine.suggest(&query);
            if suggestions.is_empty() {
                println!("No suggestions for '{}'", query);
            }
            for name in suggestions {
                println!("{}", name);
            }
        }

        Commands::Check { symptoms, notes, .. } => {
            println!("🩺 Analyzing: {}", symptoms.join(", "));

            let check = engine.analyze_with_notes(&symptoms, notes).await?;

            for (i, prediction) in check.predictions.iter().enumerate() {
                println!("\n{}. {} - {}% [{}]", i + 1, prediction.disease, prediction.confidence, prediction.severity);
                println!("   {}", prediction.description);
                println!("   Specialist: {}", prediction.specialization);
                for tip in &prediction.prevention {
                    println!("   • {}", tip);
                }
                for doctor in engine.doctors_for(prediction) {
                    println!("   ☎ {}", doctor.display());
                }
            }
        }

        Commands::History { limit } => {
            let history = engine.history().await?;
            println!("📋 {} health checks", history.len());

            let breakdown = SeverityBreakdown::of(&history);
            if breakdown.total > 0 {
                println!(
                    "   with high: {} | medium: {} | low: {}",
                    breakdown.high, breakdown.medium, breakdown.low
                );
            }

            for check in history.iter().take(limit) {
                let top = check.top_prediction().map(|p| p.display()).unwrap_or_default();
                println!(
                    "   {} | {} | {}",
                    check.timestamp.format("%Y-%m-%d %H:%M"),
                    check.symptoms.join(", "),
                    top
                );
            }
        }

        Commands::Trends { range } => {
            let report = engine.trend_report(range).await?;
            let summary = &report.summary;

            println!("📊 Trends ({}):", range);
            println!("   Checks: {}", summary.total_checks);
            println!("   Avg symptoms: {}", summary.avg_symptoms);
            println!("   High risk: {} ({}%)", summary.high_risk_checks, summary.high_risk_percentage);
            if let Some(days) = summary.days_since_last {
                println!("   Days since last check: {}", days);
            }
            if summary.repeated_symptoms {
                println!("   Some symptoms keep coming back");
            }

            if !report.checks_over_time.is_empty() {
                println!("\n   Checks over time:");
                for (label, count) in &report.checks_over_time {
                    println!("   {:>8} {}", label, "▇".repeat(*count));
                }
            }

            if !report.common_symptoms.is_empty() {
                println!("\n   Common symptoms:");
                for (symptom, count) in &report.common_symptoms {
                    println!("   {} × {}", count, symptom);
                }
            }

            if summary.total_checks > 0 {
                println!("\n   Risk distribution:");
                for severity in Severity::ALL {
                    println!("   {:>6}: {}", severity, report.risk_distribution.get(&severity).copied().unwrap_or(0));
                }
            }
        }

        Commands::Doctors { city, specialization, search, sort } => {
            if let Some(city) = city.as_deref().filter(|c| !engine.knows_city(c)) {
                println!("⚠️  '{}' is not a listed city", city);
            }
            let filter = DoctorFilter { city, specialization, search, sort };
            let doctors = engine.find_doctors(&filter);

            println!("👩‍⚕️ {} doctor{} found", doctors.len(), if doctors.len() == 1 { "" } else { "s" });
            for doctor in doctors {
                println!("   {} {}", "★".repeat(doctor.stars() as usize), doctor.display());
                println!("     {} | {}", doctor.phone, doctor.email);
            }
        }

        Commands::Profile { action } => match action {
            ProfileAction::Show => match engine.profile().await? {
                Some(profile) => {
                    println!("👤 {} <{}>", profile.name, profile.email);
                    println!("   {}, {}, {}", profile.age, profile.gender, profile.city);
                }
                None => println!("No profile set"),
            },
            ProfileAction::Set { name, email, city, age, gender } => {
                let updated = match engine.profile().await? {
                    Some(mut existing) => {
                        existing.name = name;
                        existing.email = email;
                        existing.city = city;
                        existing.age = age;
                        existing.gender = gender;
                        engine.update_profile(&existing).await?;
                        existing
                    }
                    None => engine.onboard(NewProfile { name, email, city, age, gender }).await?,
                };
                println!("✅ Saved profile {}", updated.id);
            }
        },

        Commands::Clear => {
            engine.sign_out().await?;
            println!("🧹 Profile and history deleted");
        }
    }

    Ok(())
}
