use anyhow::Result;

fn main() -> Result<()> {
    coach_metrics::cli::run()
}
