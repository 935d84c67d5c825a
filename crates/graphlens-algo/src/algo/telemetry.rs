// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Per-operation performance telemetry.
//!
//! [`measure`] wraps one engine call: it samples the clock and resident memory,
//! hands the engine a [`Probe`] to count visited units, and returns the engine's
//! value together with its [`Telemetry`] whatever the engine returned.
//! [`TelemetryRegistry`] keeps the latest record per operation name.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Measurements for one completed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Telemetry {
    /// Wall-clock time for the whole call
    pub elapsed: Duration,
    /// Engine-defined unit count (pops, visits, dequeues, accepted edges)
    pub units_processed: u64,
    /// Resident memory at exit minus resident memory at entry, in bytes.
    /// Not clamped; zero when sampling is disabled or unsupported.
    pub memory_delta: i64,
}

/// Unit counter handed to an engine for the duration of one call.
#[derive(Debug, Default)]
pub struct Probe {
    units: u64,
}

impl Probe {
    #[inline]
    pub fn tick(&mut self) {
        self.units += 1;
    }

    pub fn units(&self) -> u64 {
        self.units
    }
}

/// A value paired with the telemetry of the call that produced it.
#[derive(Debug, Clone)]
pub struct Measured<T> {
    pub value: T,
    pub telemetry: Telemetry,
}

/// Run `op` under measurement.
pub fn measure<T>(sample_memory: bool, op: impl FnOnce(&mut Probe) -> T) -> Measured<T> {
    let start_memory = if sample_memory {
        resident_memory_bytes()
    } else {
        0
    };
    let start = Instant::now();
    let mut probe = Probe::default();

    let value = op(&mut probe);

    let elapsed = start.elapsed();
    let memory_delta = if sample_memory {
        resident_memory_bytes() as i64 - start_memory as i64
    } else {
        0
    };

    Measured {
        value,
        telemetry: Telemetry {
            elapsed,
            units_processed: probe.units(),
            memory_delta,
        },
    }
}

/// Current process resident set size in bytes.
///
/// Best effort: 0 where unsupported or when the read fails.
#[cfg(target_os = "linux")]
pub fn resident_memory_bytes() -> u64 {
    std::fs::read_to_string("/proc/self/status")
        .ok()
        .and_then(|status| parse_vm_rss(&status))
        .unwrap_or(0)
}

#[cfg(not(target_os = "linux"))]
pub fn resident_memory_bytes() -> u64 {
    0
}

#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_vm_rss(status: &str) -> Option<u64> {
    let line = status.lines().find(|l| l.starts_with("VmRSS:"))?;
    let kb: u64 = line.split_whitespace().nth(1)?.parse().ok()?;
    Some(kb * 1024)
}

/// Latest telemetry per operation name; a new record replaces the old one.
#[derive(Debug, Clone, Default)]
pub struct TelemetryRegistry {
    records: BTreeMap<String, Telemetry>,
}

impl TelemetryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `telemetry` under `operation`, returning the record it replaced.
    pub fn record(&mut self, operation: &str, telemetry: Telemetry) -> Option<Telemetry> {
        self.records.insert(operation.to_string(), telemetry)
    }

    pub fn get(&self, operation: &str) -> Option<&Telemetry> {
        self.records.get(operation)
    }

    /// Records sorted by operation name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Telemetry)> + '_ {
        self.records.iter().map(|(name, t)| (name.as_str(), t))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
