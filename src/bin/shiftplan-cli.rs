#![forbid(unsafe_code)]
use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use shiftplan::{
    demo::DemoData,
    io,
    model::Roster,
    report::{
        describe_violation, employee_detail, employee_details, OverviewRenderer,
        ScheduleRenderer, Summary, TableRenderer,
    },
    scheduler::{AssignOptions, Scheduler},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de planning hebdomadaire (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// CSV d'employés : `name,monday,...,sunday[,preset]`
    #[arg(long, global = true)]
    people: Option<String>,

    /// Jeu de démonstration utilisé sans `--people` (small, team)
    #[arg(long, global = true, default_value_t = DemoData::Small)]
    demo: DemoData,

    /// Désactive la passe « 3e personne »
    #[arg(long, global = true)]
    no_third_pass: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Afficher le tableau de la semaine et le résumé
    Show,

    /// Détail des affectations et préférences par employé
    Details {
        /// Limiter à un employé (nom, sans casse)
        #[arg(long)]
        name: Option<String>,
    },

    /// Récapitulatif chiffré (effectifs par créneau)
    Overview,

    /// Exporter la grille sur la sortie standard
    Export {
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },

    /// Vérifier les contraintes
    Check,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Json,
    Csv,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let roster = match &cli.people {
        Some(path) => {
            let mut roster = Roster::new();
            for employee in io::import_employees_csv(path)? {
                roster.add_employee(employee);
            }
            roster
        }
        None => cli.demo.roster(),
    };

    let mut scheduler = Scheduler::with_roster(roster);
    scheduler.set_options(AssignOptions {
        third_pass: !cli.no_third_pass,
    });
    scheduler.generate();

    let code = match cli.cmd {
        Commands::Show => {
            let table = TableRenderer.render(scheduler.roster(), scheduler.schedule());
            let summary = Summary::build(&scheduler);
            println!("{table}");
            print!("{}", summary.render(scheduler.roster()));
            0
        }
        Commands::Details { name } => {
            match name {
                Some(name) => print!("{}", employee_detail(scheduler.employee_by_name(&name)?)),
                None => print!("{}", employee_details(scheduler.roster())),
            }
            0
        }
        Commands::Overview => {
            let renderer = OverviewRenderer {
                generated_at: Utc::now(),
            };
            print!("{}", renderer.render(scheduler.roster(), scheduler.schedule()));
            0
        }
        Commands::Export { format } => {
            let stdout = std::io::stdout();
            let handle = stdout.lock();
            match format {
                Format::Json => {
                    io::export_schedule_json(
                        handle,
                        scheduler.roster(),
                        scheduler.schedule(),
                        Utc::now(),
                    )?;
                    println!();
                }
                Format::Csv => {
                    io::export_schedule_csv(handle, scheduler.roster(), scheduler.schedule())?
                }
            }
            0
        }
        Commands::Check => {
            let violations = scheduler.detect_violations();
            if violations.is_empty() {
                println!("OK: no constraint violations");
                0
            } else {
                eprintln!("Found {} violation(s)", violations.len());
                for v in &violations {
                    println!("WARNING: {}", describe_violation(scheduler.roster(), v));
                }
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
    };

    std::process::exit(code);
}
