use clap::Parser;
use std::path::PathBuf;

/// Generate an SPDX SBOM from CPM dependencies in package-lock.cmake
#[derive(Parser, Debug)]
#[command(name = "zrythm-sbom")]
#[command(version)]
#[command(about = "Generate an SPDX SBOM from CPM dependencies in package-lock.cmake", long_about = None)]
pub struct Args {
    /// Path to the package-lock.cmake file
    #[arg(long, default_value = "package-lock.cmake")]
    pub lock: PathBuf,

    /// Output file path for the SBOM ('-' writes to stdout)
    #[arg(long, default_value = "sbom.spdx.json")]
    pub output: PathBuf,

    /// Project name for the SBOM document
    #[arg(long, default_value = "Zrythm")]
    pub project: String,

    /// Path to Qt SBOM file(s) (SPDX tag-value format). Can be repeated.
    #[arg(long = "qt-sbom", value_name = "PATH")]
    pub qt_sbom: Vec<PathBuf>,

    /// Commit hash or tag embedded in the self package's purl
    #[arg(long, default_value = "master")]
    pub commit: String,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// True when output should go to the console instead of a file
    pub fn output_to_stdout(&self) -> bool {
        self.output.as_os_str() == "-"
    }
}
