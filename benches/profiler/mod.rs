// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pinwall-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pinwall and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

// Criterion settings from `PINWALL_BENCH_*`; flamegraphs unless `PINWALL_BENCH_PROFILE=0`.

use std::str::FromStr;
use std::time::Duration;

use criterion::Criterion;

use pprof::criterion::{Output, PProfProfiler};

fn env_or<T: FromStr>(suffix: &str, default: T) -> T {
    std::env::var(format!("PINWALL_BENCH_{suffix}"))
        .ok()
        .and_then(|raw| raw.trim().parse::<T>().ok())
        .unwrap_or(default)
}

pub fn criterion() -> Criterion {
    let sample_size = env_or("SAMPLE_SIZE", 50usize).clamp(10, 200);
    let warmup = Duration::from_secs(env_or("WARMUP_SECS", 2u64).clamp(1, 60));
    let measurement = Duration::from_secs(env_or("MEASUREMENT_SECS", 4u64).clamp(1, 120));

    let criterion = Criterion::default()
        .sample_size(sample_size)
        .warm_up_time(warmup)
        .measurement_time(measurement);

    if env_or("PROFILE", 1u8) == 0 {
        return criterion;
    }
    let frequency = env_or("PROFILE_FREQ", 100i32).clamp(1, 1000);
    criterion.with_profiler(PProfProfiler::new(frequency, Output::Flamegraph(None)))
}
