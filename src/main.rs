use bbc_food_import::ImportConfig;
use log::error;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match ImportConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    // Print the record if it could be created from valid data
    if let Some(record) = bbc_food_import::run(&config) {
        println!("{record}");
    }
}
