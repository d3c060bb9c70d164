use track_topology::{Settings, logging, run};

fn main() {
    let settings = Settings::from_cli();
    logging::setup_logging(settings.verbose);

    if let Err(err) = run(&settings) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}
