pub mod config;
pub mod disambig;
pub mod emit;
pub mod ir;
pub mod normalize;
pub mod parse;
pub mod reader;

use config::Config;
use ir::OutputCard;
use std::io;

/// Run the pure part of the pipeline: extract records from the input text,
/// disambiguate colliding names and render one card per (name, phone) pair.
/// Deterministic; cards come back in input order.
pub fn split(text: &str, config: &Config) -> Vec<OutputCard> {
    let lines: Vec<String> = text.split('\n').map(|l| l.to_string()).collect();
    let contacts = parse::extract_contacts(&lines);
    emit::plan_cards(&contacts, config)
}

/// Read the configured input file, split it and write every card into the
/// output directory. Returns the number of contacts written.
pub fn run(config: &Config) -> io::Result<usize> {
    let lines = reader::read_lines(&config.input)?;
    let contacts = parse::extract_contacts(&lines);
    let cards = emit::plan_cards(&contacts, config);
    emit::write_cards(&cards, &config.output_dir)
}
