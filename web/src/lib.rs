use clap::Parser;
use wasm_bindgen::prelude::*;

mod app;
mod canvas;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force the seed of the first game instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::try_parse_from(location_hash.split(['#', '&'])).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("seed: {:?}", args.seed);

    let root = document()
        .get_element_by_id("board")
        .expect("Could not find id=\"board\" element");

    log::debug!("App started");
    yew::Renderer::<app::GameView>::with_root_and_props(root, app::GameProps { seed: args.seed })
        .render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_parse_from_location_hash() {
        let args = Args::try_parse_from("#-v&--seed=1234".split(['#', '&'])).unwrap();
        assert_eq!(args.seed, Some(1234));
        assert!(args.verbose.log_level().is_some());
    }

    #[test]
    fn empty_hash_means_random_seed() {
        let args = Args::try_parse_from("".split(['#', '&'])).unwrap();
        assert_eq!(args.seed, None);
    }
}
