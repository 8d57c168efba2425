use clap::error::ErrorKind;
use defang::cli::{Cli, CliHandler, USAGE};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(e) => {
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = e.print();
                }
                _ => {
                    print!("{}", e.render());
                    println!("{}", USAGE);
                }
            }
            return;
        }
    };

    init_logging(cli.log_level());

    let outcome = CliHandler::new(cli).run().await;
    log::debug!("Finished: success={}", outcome.is_success());
}

fn init_logging(level: log::LevelFilter) {
    // Flags only, RUST_LOG is ignored.
    env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .init();
}
