use std::process::ExitCode;
use std::sync::Arc;

use canvas_instructor::api::{CanvasClient, CourseApi};
use canvas_instructor::core::config::{self, Overrides};
use canvas_instructor::core::logging::{self, Logger};
use canvas_instructor::tui;
use clap::Parser;

#[derive(Parser)]
#[command(name = "canvas-instructor", about = "Terminal client for managing a course")]
struct Args {
    /// Course to manage (overrides COURSE_ID and the config file)
    #[arg(short, long)]
    course: Option<String>,

    /// Backend port on localhost
    #[arg(short, long)]
    port: Option<u16>,

    /// Full backend URL, e.g. http://localhost:3000
    #[arg(long)]
    base_url: Option<String>,

    /// Directory for the daily log file
    #[arg(long)]
    log_dir: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let overrides = Overrides {
        base_url: args.base_url,
        port: args.port,
        course_id: args.course,
        log_dir: args.log_dir,
    }
    .or(Overrides::from_env());

    // Nothing to log into until the config says where
    let file = match config::load_config(&Logger::discard()) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("canvas-instructor: {e}");
            return ExitCode::FAILURE;
        }
    };
    let resolved = match config::resolve(&file, overrides) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("canvas-instructor: {e}");
            return ExitCode::FAILURE;
        }
    };

    let log = match logging::open_file_logger(&resolved.log_dir, resolved.log_level) {
        Ok(log) => log,
        Err(e) => {
            eprintln!(
                "canvas-instructor: cannot open log file in {}: {e}",
                resolved.log_dir.display()
            );
            return ExitCode::FAILURE;
        }
    };

    log.info(format_args!(
        "Canvas Instructor starting: base_url={} course_id={} log_level={}",
        resolved.base_url, resolved.course_id, resolved.log_level
    ));

    let api: Arc<dyn CourseApi> = Arc::new(CanvasClient::new(
        &resolved.base_url,
        &resolved.course_id,
        &log,
    ));

    let result = tui::run(api, &log);
    let code = match result {
        Ok(()) => {
            log.info("Exiting normally");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log.error(format_args!("Exiting with error: {e}"));
            eprintln!("canvas-instructor: {e}");
            ExitCode::FAILURE
        }
    };
    log.flush();
    code
}
