// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// quickprint — submit one document to an IPP network printer.
//
// Entry point.  Parses the command line, reads the document into memory,
// and hands a validated job to the encoder/transport in `quickprint-print`.
// The raw printer response (if any) goes to stdout; failures are reported
// in plain English on stderr and the process exits non-zero.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use tracing::{error, info};

use quickprint_core::QuickprintError;
use quickprint_core::error::Result;
use quickprint_core::human_errors::humanize_error;
use quickprint_core::types::{ColorMode, Orientation, PrintJobRequest, Sides};
use quickprint_print::submit_print_job;

/// Submit a document to an IPP network printer.
///
/// Any option left off the command line is left out of the print job too:
/// the printer applies its own defaults, quickprint never substitutes any.
#[derive(Parser, Debug)]
#[command(name = "quickprint", author, version, about)]
#[command(group(ArgGroup::new("color-mode").args(["color", "mono", "bw"])))]
#[command(group(ArgGroup::new("duplex").args(["onesided", "twosided_longedge", "twosided_shortedge"])))]
#[command(group(ArgGroup::new("page-orientation").args(["portrait", "landscape"])))]
struct Cli {
    /// Path of the document to print
    file: PathBuf,

    /// Printer network address (IPv4, e.g. 192.168.1.50)
    printer: String,

    /// Print in color
    #[arg(long)]
    color: bool,

    /// Print in monochrome (greyscale)
    #[arg(long)]
    mono: bool,

    /// Print in pure black and white
    #[arg(long)]
    bw: bool,

    /// Print on one side of each sheet
    #[arg(long)]
    onesided: bool,

    /// Print double-sided, flipping on the long edge
    #[arg(long)]
    twosided_longedge: bool,

    /// Print double-sided, flipping on the short edge
    #[arg(long)]
    twosided_shortedge: bool,

    /// Portrait orientation
    #[arg(long)]
    portrait: bool,

    /// Landscape orientation
    #[arg(long)]
    landscape: bool,

    /// Job label shown in the printer queue (defaults to the file path)
    #[arg(long)]
    job_name: Option<String>,
}

impl Cli {
    fn color_mode(&self) -> Option<ColorMode> {
        if self.color {
            Some(ColorMode::Color)
        } else if self.mono {
            Some(ColorMode::Monochrome)
        } else if self.bw {
            Some(ColorMode::BlackAndWhite)
        } else {
            None
        }
    }

    fn sides(&self) -> Option<Sides> {
        if self.onesided {
            Some(Sides::OneSided)
        } else if self.twosided_longedge {
            Some(Sides::TwoSidedLongEdge)
        } else if self.twosided_shortedge {
            Some(Sides::TwoSidedShortEdge)
        } else {
            None
        }
    }

    fn orientation(&self) -> Option<Orientation> {
        if self.portrait {
            Some(Orientation::Portrait)
        } else if self.landscape {
            Some(Orientation::Landscape)
        } else {
            None
        }
    }
}

/// Build the validated job from the parsed command line.
fn build_request(cli: &Cli) -> Result<PrintJobRequest> {
    let document = std::fs::read(&cli.file)?;
    if document.is_empty() {
        return Err(QuickprintError::Validation(format!(
            "{} is empty, nothing to print",
            cli.file.display()
        )));
    }

    let job_name = cli
        .job_name
        .clone()
        .unwrap_or_else(|| cli.file.display().to_string());

    Ok(PrintJobRequest {
        document,
        printer_host: cli.printer.clone(),
        job_name,
        color_mode: cli.color_mode(),
        sides: cli.sides(),
        orientation: cli.orientation(),
    })
}

async fn run(cli: Cli) -> Result<()> {
    let request = build_request(&cli)?;
    info!(
        printer = %request.printer_host,
        job_name = %request.job_name,
        document_bytes = request.document.len(),
        "submitting print job"
    );

    let response = submit_print_job(&request).await?;
    if response.is_empty() {
        println!("No response from printer (job delivered).");
    } else {
        println!("Printer response:");
        println!("{}", String::from_utf8_lossy(&response));
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        error!(error = %err, "print job failed");
        let human = humanize_error(&err);
        eprintln!("{}", human.message);
        eprintln!("{}", human.suggestion);
        std::process::exit(1);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
