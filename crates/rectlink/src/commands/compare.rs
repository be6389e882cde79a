use clap::Args;

use rectlink_core::config::{Config, ReportFormat};

use crate::input;

/// Arguments for the `compare` subcommand.
#[derive(Args)]
pub struct CompareArgs {
    /// First rectangle as LENGTH,WIDTH,X,Y (X,Y is the bottom-left corner)
    #[arg(long, value_name = "L,W,X,Y")]
    a: String,
    /// Second rectangle as LENGTH,WIDTH,X,Y
    #[arg(long, value_name = "L,W,X,Y")]
    b: String,
    /// Print the report as JSON regardless of the configured format
    #[arg(long)]
    json: bool,
}

pub fn execute(args: &CompareArgs, config: &Config) {
    let labels = config.report.labels();
    let first = parse_or_exit(labels[0], &args.a);
    let second = parse_or_exit(labels[1], &args.b);

    let format = if args.json {
        ReportFormat::Json
    } else {
        config.report.format
    };

    let comparison = super::run_comparison(labels, &first, &second);
    match super::render(&comparison, format) {
        Ok(report) => println!("{report}"),
        Err(e) => {
            rectlink_core::log_error!("could not render report: {e}");
            eprintln!("Error: could not render report: {e}");
            std::process::exit(1);
        }
    }
}

fn parse_or_exit(label: &str, spec: &str) -> rectlink_core::Rectangle {
    match input::parse_spec(spec) {
        Ok(rect) => rect,
        Err(e) => {
            rectlink_core::log_error!("rectangle {label}: {e}");
            eprintln!("Error: rectangle {label}: {e}");
            std::process::exit(1);
        }
    }
}
