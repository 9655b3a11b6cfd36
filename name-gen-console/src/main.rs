mod menu;

use std::path::PathBuf;

use name_gen_core::config::GeneratorConfig;
use name_gen_core::corpus::{CorpusPaths, CorpusState};
use name_gen_core::session::{Console, LineConsole};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Optional path to a TOML configuration file, otherwise
    // $NAMEGEN_CONFIG, ./namegen.toml or the built-in defaults
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = GeneratorConfig::load(config_path.as_deref())?;
    log::debug!("configuration: {config:?}");

    // The three lists must exist; only places and rejects are ever rewritten
    let mut corpus = CorpusState::load(CorpusPaths::from(&config.paths))?;

    let mut console = LineConsole::stdio();
    console.show("Place Name Generator\n")?;
    menu::main_menu(&mut corpus, &config, &mut console, &mut rand::rng())?;

    Ok(())
}
