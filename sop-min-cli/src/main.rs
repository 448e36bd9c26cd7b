// Copyright (c) The sop-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use clap::Parser;
use color_eyre::Result;
use sop_min_cli::SopMinApp;

fn main() -> Result<()> {
    let app = SopMinApp::parse();
    app.exec()
}
