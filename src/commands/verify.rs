//! Verification command

use std::path::Path;

use crate::{storage::verify_database, Result, SetupError};

use super::{print_json, report::render_verification};

/// Handle the `verify` command; an unsuccessful report becomes an error
pub fn handle_verify(db_path: &Path, as_json: bool) -> Result<()> {
    let report = verify_database(db_path);

    if as_json {
        print_json(&report)?;
    } else {
        println!("{}", render_verification(&report));
    }

    if report.success {
        Ok(())
    } else {
        Err(SetupError::VerificationFailed {
            path: report.database,
        })
    }
}
