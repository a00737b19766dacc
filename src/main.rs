//! Entrypoint: run the survey analysis against the fixed export filename in
//! the working directory and map failures to a non-zero exit status.

use std::path::Path;
use std::process::ExitCode;

use pathways_survey::pipeline::{self, ArtifactPaths};
use pathways_survey::schema;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let artifacts = ArtifactPaths::in_dir(Path::new("."));
    match pipeline::run(Path::new(schema::INPUT_FILE), &artifacts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
