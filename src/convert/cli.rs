use super::batch::Convert;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub enum Tool {
    #[command(
        about = "Convert a MonkerSolver range export into a PioSolver range tree",
        alias = "m2p"
    )]
    MonkerToPio {
        #[arg(short, long, help = "directory holding the Monker .rng export")]
        input: PathBuf,
        #[arg(short, long, help = "directory to receive the Pio .txt ranges")]
        output: PathBuf,
        #[arg(short, long, help = "wipe a non-empty output directory first")]
        force: bool,
    },
}

impl Tool {
    pub fn run() -> anyhow::Result<()> {
        match Self::parse() {
            Self::MonkerToPio {
                input,
                output,
                force,
            } => Convert::new(input, output, force).run(),
        }
    }
}
