// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the pubtrace workspace.
//!
//! Intended for tests and benchmarks only.
//!
//! ```rust
//! use pubtrace_test_utils::{pub_info, time_msg, test_data::TOPIC1};
//!
//! let info = pub_info(TOPIC1, time_msg(8, 0), time_msg(9, 0), time_msg(10, 0));
//! assert_eq!(info.output_time().to_string(), "10.000000000");
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod helpers;
pub mod test_data;

pub use helpers::{pub_info, time_msg, ts};
pub use test_data::scenario_pub_infos;
