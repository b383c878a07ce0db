use log::info;

use crate::builder::Builder;
use crate::cli::Args;
use crate::config::ProjectPaths;
use crate::constants::SERVE_PORT;
use crate::error::{Error, Result};
use crate::tools;

/// Main CLI runner that drives a whole build invocation.
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    pub fn run(self) -> Result<()> {
        // A pdf/tex-only build leaves nothing to serve; reject the
        // combination before doing any work.
        if self.args.serve && !self.args.build.produces_html() {
            return Err(Error::ServeError { build: self.args.build.to_string() });
        }

        let paths = ProjectPaths::new(&self.args.project_dir, &self.args.output);
        let html_dir = paths.output_dir.join("html");

        let mut builder = Builder::new(paths, self.args.quiet);
        builder.build(&self.args.build.targets())?;

        if self.args.serve {
            info!("Serving '{}' on port {}.", html_dir.display(), SERVE_PORT);
            tools::serve(&html_dir, SERVE_PORT, self.args.quiet)?;
        }
        Ok(())
    }
}

/// Executes the complete build workflow for the parsed arguments.
pub fn run(args: Args) -> Result<()> {
    Runner::new(args).run()
}
