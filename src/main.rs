// Least Metronomes CLI - Parses a rhythm, runs the solver, prints the result
// All narration lives here; the solver itself does no I/O.

use least_metronomes::{Rhythm, Solution, solve};
use std::fs;
use std::process::ExitCode;

const USAGE: &str = "\
Usage: least-metronomes [--json] <rhythm>
       least-metronomes [--json] --file <path>

  <rhythm>  rhythm as a string of 0s (rests) and 1s (notes);
            spaces, commas and pipes are ignored, e.g. \"1110|1010\"
  --file    read the rhythm from a JSON file holding an array of 0/1 integers
  --json    print the solution as JSON instead of text";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut json_output = false;
    let mut file_path: Option<String> = None;
    let mut rhythm_arg: Option<String> = None;

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => json_output = true,
            "--file" => match iter.next() {
                Some(path) => file_path = Some(path),
                None => {
                    eprintln!("--file needs a path\n\n{}", USAGE);
                    return ExitCode::FAILURE;
                }
            },
            "--help" | "-h" => {
                println!("{}", USAGE);
                return ExitCode::SUCCESS;
            }
            _ => rhythm_arg = Some(arg),
        }
    }

    let rhythm = match (file_path, rhythm_arg) {
        (Some(path), None) => match load_rhythm_file(&path) {
            Ok(rhythm) => rhythm,
            Err(message) => {
                eprintln!("ERROR: {}", message);
                return ExitCode::FAILURE;
            }
        },
        (None, Some(text)) => match text.parse::<Rhythm>() {
            Ok(rhythm) => rhythm,
            Err(e) => {
                eprintln!("ERROR: {}", e);
                return ExitCode::FAILURE;
            }
        },
        _ => {
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    let solution = match solve(&rhythm) {
        Ok(solution) => solution,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if json_output {
        match serde_json::to_string_pretty(&solution) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("ERROR: failed to serialize solution: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_solution(&rhythm, &solution);
    }

    ExitCode::SUCCESS
}

/// Read a rhythm from a JSON file containing an array of 0/1 integers
fn load_rhythm_file(path: &str) -> Result<Rhythm, String> {
    let contents =
        fs::read_to_string(path).map_err(|e| format!("cannot read {}: {}", path, e))?;
    let beats: Vec<u8> = serde_json::from_str(&contents)
        .map_err(|e| format!("{} is not a JSON array of integers: {}", path, e))?;
    Rhythm::new(beats).map_err(|e| e.to_string())
}

/// Print the solution as human-readable text
fn print_solution(rhythm: &Rhythm, solution: &Solution) {
    println!(
        "rhythm: {} ({} beats, {} notes)",
        rhythm,
        rhythm.len(),
        rhythm.note_count()
    );

    for (index, metronome) in solution.metronomes.iter().enumerate() {
        let covered = solution
            .assignments
            .iter()
            .filter(|&&id| id == index + 1)
            .count();
        println!(
            "metronome {}: starts on beat {}, ticks every {} beat(s), covers {} note(s)",
            index + 1,
            metronome.start_beat,
            metronome.interval,
            covered
        );
    }

    println!("solved with {} metronome(s)", solution.metronome_count);

    let row: Vec<String> = solution
        .assignments
        .iter()
        .map(|id| id.to_string())
        .collect();
    println!("assignment: [{}]", row.join(", "));
}
