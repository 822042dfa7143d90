use zrythm_sbom::adapters::outbound::console::StderrProgressReporter;
use zrythm_sbom::adapters::outbound::filesystem::{
    FileSystemReader, FileSystemWriter, StdoutPresenter,
};
use zrythm_sbom::adapters::outbound::formatters::SpdxJsonFormatter;
use zrythm_sbom::adapters::outbound::spdx::TagValueParser;
use zrythm_sbom::application::dto::SbomRequest;
use zrythm_sbom::application::use_cases::GenerateSbomUseCase;
use zrythm_sbom::cli::Args;
use zrythm_sbom::ports::outbound::{OutputPresenter, SbomFormatter};
use zrythm_sbom::shared::error::ExitCode;
use zrythm_sbom::shared::Result;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ Error generating SBOM:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::GenerationFailed.as_i32());
    }
}

fn run() -> Result<()> {
    let args = Args::parse_args();

    // Create adapters (dependency injection)
    let use_case = GenerateSbomUseCase::new(
        FileSystemReader::new(),
        FileSystemReader::new(),
        TagValueParser::new(),
        StderrProgressReporter::new(),
    );

    let request = SbomRequest::new(
        args.lock.clone(),
        args.project.clone(),
        args.qt_sbom.clone(),
        args.commit.clone(),
    );

    let response = use_case.execute(request)?;

    // Zero dependencies: diagnostic already printed, nothing to write
    let Some(document) = response.document else {
        return Ok(());
    };

    let formatter = SpdxJsonFormatter::new();
    let output = formatter.format(&document)?;

    let presenter: Box<dyn OutputPresenter> = if args.output_to_stdout() {
        Box::new(StdoutPresenter::new())
    } else {
        Box::new(FileSystemWriter::new(args.output.clone()))
    };

    presenter.present(&output)?;

    Ok(())
}
