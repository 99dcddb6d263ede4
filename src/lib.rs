// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

pub mod blocks;
pub mod chain;
pub mod cli_shared;
pub mod db;
pub mod message;
pub mod shim;
pub mod storage_fault;
mod tool;
mod utils;

pub use cli_shared::cli::Config;
pub use tool::main::main as fault_scan_main;
