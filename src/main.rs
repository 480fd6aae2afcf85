// src/main.rs

use irrisched::{cli, logging, run};

fn main() {
    match run_main() {
        Ok(Some(report)) if report.has_rejections() => std::process::exit(2),
        Ok(_) => {}
        Err(err) => {
            eprintln!("irrisched error: {err:?}");
            std::process::exit(1);
        }
    }
}

fn run_main() -> anyhow::Result<Option<irrisched::engine::ReplayReport>> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args)
}
