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

//! System bus
//!
//! The bus is the fabric between the hart and its peripherals: an ordered
//! set of named slave ports, each claiming a half-open address range.
//! Every load and store is validated (width, natural alignment, range
//! containment) and then dispatched to the owning port with a
//! range-relative offset.

use crate::core::error::{Result, SimError};

use super::Peripheral;

/// A half-open address interval `[start, start + size)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressRange {
    start: u32,
    size: u32,
}

impl AddressRange {
    /// Create a range covering `[start, start + size)`
    pub fn new(start: u32, size: u32) -> Self {
        Self { start, size }
    }

    /// First address in the range
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Size of the range in bytes
    pub fn size(&self) -> u32 {
        self.size
    }

    // Exclusive end as u64 so ranges touching the top of the address
    // space do not wrap.
    fn end(&self) -> u64 {
        u64::from(self.start) + u64::from(self.size)
    }

    /// Whether `[addr, addr + n)` lies entirely inside this range
    pub fn contains_span(&self, addr: u32, n: u32) -> bool {
        u64::from(addr) >= u64::from(self.start) && u64::from(addr) + u64::from(n) <= self.end()
    }

    /// Whether two ranges intersect
    pub fn overlaps(&self, other: &AddressRange) -> bool {
        u64::from(self.start) < other.end() && u64::from(other.start) < self.end()
    }
}

struct SlavePort {
    name: String,
    range: AddressRange,
    device: Box<dyn Peripheral>,
}

/// Address-range table dispatching loads and stores to peripherals
///
/// Ports are registered with [`SystemBus::attach`]; their ranges must not
/// overlap. There is no default port: an access that no range contains is
/// an access fault.
///
/// # Example
///
/// ```
/// use rvx::core::memory::{Memory, SystemBus};
///
/// let mut bus = SystemBus::new();
/// bus.attach("ram", 0x1000, 0x100, Box::new(Memory::new(0x100)))
///     .unwrap();
/// bus.write(0x1004, 0x12345678, 4).unwrap();
/// assert_eq!(bus.read(0x1004, 4).unwrap(), 0x12345678);
/// ```
#[derive(Default)]
pub struct SystemBus {
    ports: Vec<SlavePort>,
}

impl SystemBus {
    /// Create a bus with no ports
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `device` at `[start, start + size)` under `name`
    ///
    /// # Errors
    ///
    /// Returns `SimError::RangeOverlap` if the new range intersects any
    /// existing port's range.
    pub fn attach(
        &mut self,
        name: &str,
        start: u32,
        size: u32,
        device: Box<dyn Peripheral>,
    ) -> Result<()> {
        let range = AddressRange::new(start, size);
        if self.ports.iter().any(|p| p.range.overlaps(&range)) {
            return Err(SimError::RangeOverlap {
                name: name.to_string(),
            });
        }
        self.ports.push(SlavePort {
            name: name.to_string(),
            range,
            device,
        });
        Ok(())
    }

    /// Mutable access to a port's device by name
    ///
    /// Used by the loader to seed memory images outside the normal access
    /// path.
    pub fn port_mut(&mut self, name: &str) -> Option<&mut (dyn Peripheral + '_)> {
        for p in self.ports.iter_mut() {
            if p.name == name {
                return Some(p.device.as_mut());
            }
        }
        None
    }

    // Width and natural-alignment validation, performed before the range
    // lookup so a misaligned access to an unmapped address reports
    // misalignment, not an access fault.
    fn check_access(addr: u32, n: u32) -> Result<()> {
        if n == 0 || !n.is_power_of_two() || n > 4 {
            return Err(SimError::AddressMisaligned {
                address: addr,
                size: n,
            });
        }
        if addr % n != 0 {
            return Err(SimError::AddressMisaligned {
                address: addr,
                size: n,
            });
        }
        Ok(())
    }

    fn port_for(&self, addr: u32, n: u32) -> Result<&SlavePort> {
        self.ports
            .iter()
            .find(|p| p.range.contains_span(addr, n))
            .ok_or(SimError::AccessFault { address: addr })
    }

    /// Read `n` bytes from the bus at `addr`
    ///
    /// # Errors
    ///
    /// `SimError::AddressMisaligned` for a bad width or unaligned address,
    /// `SimError::AccessFault` if no port contains `[addr, addr + n)`, or
    /// whatever the target peripheral raises.
    pub fn read(&self, addr: u32, n: u32) -> Result<u32> {
        Self::check_access(addr, n)?;
        let port = self.port_for(addr, n)?;
        port.device.read(addr - port.range.start(), n)
    }

    /// Bulk-write a byte string at `addr`, bypassing access validation
    ///
    /// Dispatches to the port containing the whole byte string. Used by
    /// the executable loader; no alignment constraints apply.
    ///
    /// # Errors
    ///
    /// `SimError::AccessFault` if no single port contains the span, or if
    /// the target peripheral rejects bulk loading.
    pub fn load_bytes(&mut self, addr: u32, bytes: &[u8]) -> Result<()> {
        if bytes.is_empty() {
            return Ok(());
        }
        let len = u32::try_from(bytes.len()).map_err(|_| SimError::AccessFault { address: addr })?;
        let port = self
            .ports
            .iter_mut()
            .find(|p| p.range.contains_span(addr, len))
            .ok_or(SimError::AccessFault { address: addr })?;
        let offset = addr - port.range.start();
        port.device.load_bytes(offset, bytes)
    }

    /// Write the low `n` bytes of `data` to the bus at `addr`
    ///
    /// Any triggers belonging to the written peripheral register fire
    /// before this returns.
    ///
    /// # Errors
    ///
    /// Same as [`SystemBus::read`].
    pub fn write(&mut self, addr: u32, data: u32, n: u32) -> Result<()> {
        Self::check_access(addr, n)?;
        let port = self
            .ports
            .iter_mut()
            .find(|p| p.range.contains_span(addr, n))
            .ok_or(SimError::AccessFault { address: addr })?;
        let offset = addr - port.range.start();
        port.device.write(offset, data, n)
    }
}
