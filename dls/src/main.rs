extern crate dls;

use dls::cli::Options;

fn main() {
    let matches = dls::cli::parse_flags();

    let result = Options::from_matches(&matches).and_then(|options| {
        dls::utils::initialize_debug(options.debug);
        dls::run(&options)
    });

    if let Err(err) = result {
        dls::debug_eprintln!("{:?}", err);
        eprintln!("dls: {}", err);
        if !err.is_unreadable_directory() {
            std::process::exit(1);
        }
    }
}
