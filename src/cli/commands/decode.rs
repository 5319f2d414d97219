//! Decode command implementation
//!
//! Analyzes raw METAR text supplied directly on the command line. The
//! supplied order is taken as oldest-first for trend purposes.

use super::shared;
use crate::Result;
use crate::cli::args::DecodeArgs;

/// Run the decode command
pub async fn run_decode(args: DecodeArgs) -> Result<()> {
    args.validate()?;
    shared::setup_logging(args.analysis.get_log_level());

    shared::analyze_and_emit(&args.metars, &args.analysis)
}
