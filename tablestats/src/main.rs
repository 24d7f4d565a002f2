//! Render a storage-engine table statistics snapshot as a report.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::io::Write;
use std::io::{stderr, stdout};
use tablestats_lib::{Host, run};

/// Default host that writes to the real process streams.
#[derive(Debug, Clone, Default)]
pub struct RealHost;

#[cfg_attr(coverage_nightly, coverage(off))]
impl Host for RealHost {
    fn output(&mut self) -> impl Write {
        stdout()
    }

    fn error(&mut self) -> impl Write {
        stderr()
    }

    fn exit(&mut self, code: i32) {
        std::process::exit(code);
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
fn main() -> Result<(), ohno::AppError> {
    run(&mut RealHost, std::env::args())
}
