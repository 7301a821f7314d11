// envr-rs: Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |        list / get / export / exec
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  TOML, local var layers   |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!              resolve      remote   dotenv
//!          select/merge/   HTTP /   .env files
//!          overlay/        memory
//!          reconcile
//!                 |
//!                 v
//!               env  (ProcessEnv)
//!
//!   +-----------------------------------------+
//!   |  domain   context, scope, source        |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod context;
pub mod dotenv;
pub mod env;
pub mod error;
pub mod logging;
pub mod remote;
pub mod resolve;
pub mod scope;
pub mod source;
