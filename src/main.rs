//! Command-line driver: parses a FEN and a depth, runs perft in the chosen
//! mode, and reports one line per depth.

use std::process;
use std::time::{Duration, Instant};

use clap::{value_parser, Arg, ArgAction, Command};

use perch::board::fen::OPENING_POS_FEN;
use perch::board::perft::{perft, perft_detailed, perft_parallel};
use perch::Board;

fn main() {
    let matches = Command::new("perch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A fast legal chess move generator and perft tool")
        .arg(
            Arg::new("fen")
                .short('f')
                .long("fen")
                .value_name("FEN")
                .help("Position to count from, in Forsyth-Edwards Notation")
                .default_value(OPENING_POS_FEN),
        )
        .arg(
            Arg::new("depth")
                .short('d')
                .long("depth")
                .value_name("DEPTH")
                .help("Perft depth")
                .required(true)
                .value_parser(value_parser!(u16).range(1..=15)),
        )
        .arg(
            Arg::new("bulk")
                .long("bulk")
                .action(ArgAction::SetTrue)
                .help("Bulk-count leaf nodes without classifying them (default)"),
        )
        .arg(
            Arg::new("detailed")
                .long("detailed")
                .action(ArgAction::SetTrue)
                .conflicts_with("bulk")
                .help("Also report capture/en-passant/castle/promotion counts"),
        )
        .arg(
            Arg::new("parallel")
                .long("parallel")
                .action(ArgAction::SetTrue)
                .conflicts_with("detailed")
                .help("Split the root moves across all CPU cores"),
        )
        .arg(
            Arg::new("single")
                .long("single-depth")
                .action(ArgAction::SetTrue)
                .help("Report only the requested depth instead of every depth up to it"),
        )
        .arg(
            Arg::new("print")
                .long("print")
                .action(ArgAction::SetTrue)
                .help("Print the parsed board before counting"),
        )
        .get_matches();

    let fen = matches
        .get_one::<String>("fen")
        .expect("fen has a default value");
    let depth = *matches
        .get_one::<u16>("depth")
        .expect("depth is a required argument");
    let detailed = matches.get_flag("detailed");
    let parallel = matches.get_flag("parallel");
    let single = matches.get_flag("single");

    let board = match Board::from_fen(fen) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("perch: cannot parse FEN: {}", err);
            process::exit(1);
        }
    };

    if matches.get_flag("print") {
        println!("{}\n", board);
    }

    if parallel {
        // Default the worker pool to one thread per logical core.
        let _ = rayon::ThreadPoolBuilder::new()
            .num_threads(num_cpus::get())
            .build_global();
    }

    let first = if single { depth } else { 1 };
    for d in first..=depth {
        let start = Instant::now();
        if detailed {
            let counts = perft_detailed(&board, d);
            report(d, counts.nodes, start.elapsed());
            println!(
                "    captures {} enpassants {} castles {} promotions {}",
                counts.captures, counts.en_passants, counts.castles, counts.promotions
            );
        } else {
            let nodes = if parallel {
                perft_parallel(&board, d)
            } else {
                perft(&board, d)
            };
            report(d, nodes, start.elapsed());
        }
    }
}

fn report(depth: u16, nodes: u64, elapsed: Duration) {
    let ms = elapsed.as_millis() as u64;
    let knps = if ms > 0 { nodes / ms } else { nodes };
    println!(
        "depth {}, nodes {}, time {}ms, speed {} knps",
        depth, nodes, ms, knps
    );
}
