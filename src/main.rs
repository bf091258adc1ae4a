use std::env;
use std::fs;
use std::process;

use earshot::{new_round, notation_data, playback_data, GameConfig};
use serde::Serialize;

/// JSON payload for one round, in the shape the web front end consumes.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RoundOutput {
    options: Vec<Vec<Vec<earshot::Glyph>>>,
    answer_index: usize,
    playback: earshot::PlaybackData,
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() > 2 {
        eprintln!("Usage: earshot [config.yaml]");
        process::exit(1);
    }

    // Load config
    let config = match args.get(1) {
        Some(path) => {
            let yaml = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    eprintln!("Error reading config '{}': {}", path, e);
                    process::exit(1);
                }
            };
            match earshot::parse_config(&yaml) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Config error: {}", e);
                    process::exit(1);
                }
            }
        }
        None => GameConfig::default(),
    };

    // Generate one round
    let mut rng = rand::rng();
    let round = new_round(&mut rng, config.bars);

    let options = match round
        .options
        .iter()
        .map(|o| notation_data(&o.phrase))
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Notation error: {}", e);
            process::exit(1);
        }
    };
    let playback = match playback_data(round.canonical(), config.tempo) {
        Ok(playback) => playback,
        Err(e) => {
            eprintln!("Playback error: {}", e);
            process::exit(1);
        }
    };

    let output = RoundOutput {
        options,
        answer_index: round.answer_index,
        playback,
    };

    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Serialization error: {}", e);
            process::exit(1);
        }
    }
}
