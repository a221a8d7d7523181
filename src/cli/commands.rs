use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::models::ConversationRecord;
use crate::pipeline::process_conversations;
use crate::report::{compute_median_dialogue_lengths, write_medians_csv, write_records_csv};

#[derive(Parser)]
#[command(name = "coach-metrics")]
#[command(version = "0.1.0")]
#[command(about = "Derive per-conversation metrics from AI coaching transcripts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the pipeline and write the per-conversation table as CSV
    Process {
        /// Dataset file (JSON array or newline-delimited JSON)
        file: PathBuf,
        /// Output CSV path
        #[arg(short, long, default_value = "processed_conversations.csv")]
        output: PathBuf,
    },
    /// Show summary statistics about a dataset
    Stats {
        /// Dataset file (JSON array or newline-delimited JSON)
        file: PathBuf,
    },
    /// Print median turn length per conversation, excluding an outlier
    Medians {
        /// Dataset file (JSON array or newline-delimited JSON)
        file: PathBuf,
        /// conversation_id of the outlier row to exclude
        #[arg(long, default_value_t = 0)]
        outlier_id: usize,
        /// Write the table as CSV instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Process { file, output }) => {
            let records = process_conversations(file)?;
            let out = File::create(output)
                .with_context(|| format!("Failed to create output file: {}", output.display()))?;
            write_records_csv(&records, BufWriter::new(out))?;
            println!("Processed data saved to {}", output.display());
        }
        Some(Commands::Stats { file }) => {
            let records = process_conversations(file)?;
            show_stats(&records);
        }
        Some(Commands::Medians { file, outlier_id, output }) => {
            let records = process_conversations(file)?;
            let rows = compute_median_dialogue_lengths(&records, *outlier_id);
            match output {
                Some(path) => {
                    let out = File::create(path).with_context(|| {
                        format!("Failed to create output file: {}", path.display())
                    })?;
                    write_medians_csv(&rows, BufWriter::new(out))?;
                    println!("Median table saved to {}", path.display());
                }
                None => {
                    let stdout = io::stdout();
                    write_medians_csv(&rows, stdout.lock())?;
                }
            }
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn show_stats(records: &[ConversationRecord]) {
    let successful = records.iter().filter(|r| r.successful).count();

    println!("Coaching Conversation Statistics");
    println!("================================");
    println!("Total conversations: {}", records.len());
    println!("Successful conversations: {}", successful);

    // Realistic length statistics drop the longest conversation, which in
    // the reference dataset is a known ~87k-word non-dialogue.
    let lengths = lengths_without_longest(records);
    if !lengths.is_empty() {
        let average: usize = lengths.iter().sum::<usize>() / lengths.len();
        println!();
        println!("Dialogue length (longest conversation excluded):");
        println!("  Average: {} words", average);
        println!("  Median: {} words", median(&lengths));
    }
}

fn lengths_without_longest(records: &[ConversationRecord]) -> Vec<usize> {
    let Some(max) = records.iter().map(|r| r.dialogue_length).max() else {
        return Vec::new();
    };
    records.iter().map(|r| r.dialogue_length).filter(|&len| len != max).collect()
}

fn median(values: &[usize]) -> usize {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 { sorted[mid] } else { (sorted[mid - 1] + sorted[mid]) / 2 }
}
