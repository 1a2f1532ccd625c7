use clap::Parser;
use sitewatch::app::SitewatchApp;

fn main() {
    env_logger::init();
    let args = SitewatchApp::parse();
    if let Err(e) = args.op.run() {
        log::error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
