use clap::{Parser, Subcommand};
use std::path::PathBuf;

use grade_calc::config::GradingConfig;
use grade_calc::grading::ValidationError;

const EXIT_SUCCESS: i32 = 0;
const EXIT_VALIDATION: i32 = 1;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ask for the student's evaluations and flags interactively (default if no subcommand)
    Interactive,
    /// Grade a request file (YAML or JSON) without prompting
    Calculate {
        /// Path to the request file
        #[arg(short, long)]
        file: PathBuf,

        /// Override the final grade cap from the config
        #[arg(long)]
        cap: Option<f64>,
    },
    /// Create a config file with an interactive wizard
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "grade-calc")]
#[command(about = "Final grade calculator with attendance and extra-points rules", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Path to config file (defaults to ~/.config/grade-calc/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Print the result as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = grade_calc::logging::init_tracing(cli.verbose, cli.log_level.as_deref()) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let command = cli.command.unwrap_or(Commands::Interactive);
    let config_path = cli.config.map(PathBuf::from);

    let (submission, grading, cap_override) = match command {
        Commands::Init => {
            let mut prompter = grade_calc::shell::Prompter::stdio();
            if let Err(e) = grade_calc::config::run_init_wizard(&mut prompter, config_path) {
                eprintln!("Init failed: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
            std::process::exit(EXIT_SUCCESS);
        }
        Commands::Interactive => {
            let grading = load_grading(config_path);
            let mut prompter = grade_calc::shell::Prompter::stdio();
            let submission =
                grade_calc::shell::run_session(&mut prompter, grading.default_extra_points);
            (submission, grading, None)
        }
        Commands::Calculate { file, cap } => {
            let grading = load_grading(config_path);
            let submission = grade_calc::request::load_request(&file).and_then(|request| {
                request.into_submission().map_err(anyhow::Error::from)
            });
            (submission, grading, cap)
        }
    };

    let submission = match submission {
        Ok(s) => s,
        Err(e) => {
            report_error(&e);
            std::process::exit(exit_code_for(&e));
        }
    };

    let result = match grade_calc::pipeline::grade_submission(&submission, &grading, cap_override)
    {
        Ok(r) => r,
        Err(e) => {
            eprintln!();
            eprintln!("Validation error: {}", e);
            std::process::exit(EXIT_VALIDATION);
        }
    };

    let report = grade_calc::output::Report {
        student: &submission.student_code,
        result: &result,
    };

    if cli.json {
        match grade_calc::output::format_json(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("{:#}", e);
                std::process::exit(EXIT_INPUT);
            }
        }
    } else {
        let use_colors = grade_calc::output::should_use_colors();
        println!();
        println!("{}", grade_calc::output::format_report(&report, use_colors));
    }

    std::process::exit(EXIT_SUCCESS);
}

/// Load and validate the grading config, exiting with the config exit code on failure
fn load_grading(config_path: Option<PathBuf>) -> GradingConfig {
    let config = match grade_calc::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let grading = config.grading.unwrap_or_default();
    if let Err(errors) = grade_calc::config::validate_grading(&grading) {
        eprintln!("Grading config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }
    grading
}

fn report_error(err: &anyhow::Error) {
    eprintln!();
    match err.downcast_ref::<ValidationError>() {
        Some(validation) => eprintln!("Validation error: {}", validation),
        None => eprintln!("Input error: {:#}", err),
    }
}

/// Validation failures and input/IO failures get distinct exit codes
fn exit_code_for(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<ValidationError>().is_some() {
        EXIT_VALIDATION
    } else {
        EXIT_INPUT
    }
}
