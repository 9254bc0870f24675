//! CLI Adapter.

mod selectors;

use std::path::PathBuf;

use clap::Parser;

use crate::app::api::{self, ShellRequest};
use crate::app::{logging, report};
use crate::domain::AppError;

pub use selectors::OperationSelectors;

#[derive(Parser, Debug)]
#[command(name = "sentry-shell")]
#[command(version)]
#[command(
    about = "Manage roles, group bindings, and privileges in the generic authorization service",
    long_about = None
)]
pub struct Cli {
    /// Component type to administer (kafka, solr)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub component: String,

    /// Path to the shell configuration file
    #[arg(long = "conf", visible_alias = "sentry_conf", value_name = "PATH")]
    pub conf: PathBuf,

    #[command(flatten)]
    pub selectors: OperationSelectors,

    /// Role name
    #[arg(short = 'r', long = "role_name", value_name = "ROLE")]
    pub role: Option<String>,

    /// Group name, or a comma-separated list of groups
    #[arg(short = 'g', long = "group_name", value_name = "GROUP")]
    pub group: Option<String>,

    /// Privilege string, e.g. host=*->topic=t1->action=read
    #[arg(short = 'p', long = "privilege", value_name = "PRIVILEGE", allow_hyphen_values = true)]
    pub privilege: Option<String>,
}

impl Cli {
    /// Resolve the parsed arguments into a request for the application layer.
    pub fn into_request(self) -> Result<ShellRequest, AppError> {
        let operation = self.selectors.requested(
            self.role.as_deref(),
            self.group.as_deref(),
            self.privilege.as_deref(),
        )?;
        Ok(ShellRequest { component: self.component, conf_path: self.conf, operation })
    }
}

/// Entry point for the CLI.
pub fn run() {
    logging::init();
    let cli = Cli::parse();

    if let Err(e) = cli.into_request().and_then(api::run_shell) {
        report::report_and_exit(&e);
    }
}
