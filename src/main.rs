use std::process;

use clap::Parser;
use tracing::{error, info};

use shapekit::{init_logging, Args, BUILD_DATE, VERSION};

fn main() {
    let args = Args::parse();

    if let Err(err) = init_logging(&args.log_level) {
        eprintln!("{:#}", err);
        process::exit(2);
    }
    info!(version = VERSION, build_date = BUILD_DATE, "starting ShapeKit");

    match shapekit::run(&args) {
        Ok(state) => info!(items = state.storage.len(), "completed successfully"),
        Err(err) => {
            error!("{:#}", err);
            process::exit(1);
        }
    }
}
