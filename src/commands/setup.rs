//! Full setup: initialize the schema, verify it, report the outcome

use crate::{config::SetupConfig, storage::verify_database, Result, SetupError};

use super::{
    init::run_init,
    print_json,
    report::{
        render_banner, render_completion, render_init_report, render_verification, SetupOutput,
    },
};

/// Handle the `setup` command (also the default when no subcommand is given).
///
/// Initialization errors propagate immediately. A failed verification is
/// printed and then returned as [`SetupError::VerificationFailed`], so the
/// exit status matches what was reported.
pub fn handle_setup(config: &SetupConfig, as_json: bool) -> Result<()> {
    if !as_json {
        println!("{}", render_banner());
        println!();
    }

    let init = run_init(config)?;
    let verification = verify_database(&config.db_path);

    if as_json {
        print_json(&SetupOutput {
            database: config.db_path.display().to_string(),
            foreign_keys: config.foreign_keys,
            init: &init,
            verification: &verification,
        })?;
    } else {
        println!("{}", render_init_report(&init, &config.db_path));
        println!();
        println!("{}", render_verification(&verification));
        println!();
        println!("{}", render_completion(&verification));
    }

    if verification.success {
        Ok(())
    } else {
        Err(SetupError::VerificationFailed {
            path: verification.database,
        })
    }
}
