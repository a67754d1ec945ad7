// SPDX-FileCopyrightText: Copyright (c) 2018-2025 slowtec GmbH <post@slowtec.de>
// SPDX-License-Identifier: MIT OR Apache-2.0

#![doc = include_str!("../README.md")]
#![no_std]

mod codec;
mod error;
mod float;
mod frame;
mod util;

pub use codec::*;
pub use error::*;
pub use float::*;
pub use frame::*;
pub use util::*;
