// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! RISC-V RV32I instruction set simulator library
//!
//! This library provides a functional, single-hart simulator for the RV32I
//! base integer instruction set: the instruction decoder, the execution
//! semantics, and the system bus with memory-mapped peripherals.
//!
//! # Example
//!
//! ```
//! use rvx::core::cpu::Hart;
//!
//! let hart = Hart::new().unwrap();
//! assert_eq!(hart.pc(), 0);
//! assert_eq!(hart.reg(0), 0); // x0 is always 0
//! ```

pub mod core;
