use anyhow::Result;
use par_shot::cli;

fn main() -> Result<()> {
    // Process CLI arguments first (before logging init for cleaner output)
    let runtime_options = match cli::process_cli() {
        cli::CliResult::Exit(code) => {
            if code == 0 {
                return Ok(());
            }
            std::process::exit(code);
        }
        cli::CliResult::Continue(options) => options,
    };
    // Routes all log::info!() etc. to /tmp/par_shot_debug.log.
    // CLI --log-level flag takes highest precedence, then RUST_LOG, then config (applied later).
    par_shot::debug::init_log_bridge(runtime_options.log_level);

    log::info!("Starting par-shot {}", par_shot::VERSION);

    match par_shot::runner::run(&runtime_options) {
        Ok(0) => Ok(()),
        Ok(code) => std::process::exit(code),
        Err(e) => {
            log::error!("par-shot failed: {e:#}");
            eprintln!("par-shot: error: {e:#}");
            std::process::exit(1);
        }
    }
}
