use pathtemplate::cli::{self, CliOptions};
use pathtemplate::config::load_template_set;
use pathtemplate::report::Report;
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;

fn main() -> ExitCode {
    let matches = cli::command().get_matches();
    let opts = match CliOptions::from_matches(&matches) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("{:#}", e);
            return ExitCode::from(2);
        }
    };

    init_tracing(opts.log_level());

    let set = match load_template_set(opts.file.as_deref()) {
        Ok(set) => set,
        Err(e) => {
            tracing::error!("{:#}", e);
            return ExitCode::from(2);
        }
    };
    tracing::info!(templates = set.templates.len(), "loaded template document");

    let report = Report::from_results(set.finish_all());
    match report.render(opts.format) {
        Ok(out) => println!("{}", out),
        Err(e) => {
            tracing::error!("{:#}", e);
            return ExitCode::from(2);
        }
    }

    if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

fn init_tracing(level: LevelFilter) {
    tracing_subscriber::fmt()
        .compact()
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}
