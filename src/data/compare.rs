use thiserror::Error;

use super::model::{HardwareKind, HardwareRecord};
use super::numeric::leading_number;

// ---------------------------------------------------------------------------
// BenchmarkKey – typed handle for one comparable benchmark series
// ---------------------------------------------------------------------------

/// Every benchmark the compare screen can plot. Each key knows which record
/// kind it belongs to and how to read its number out of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchmarkKey {
    PassmarkMulti,
    PassmarkSingle,
    CinebenchR20Multi,
    CinebenchR20Single,
    Geekbench6Multi,
    Geekbench6Single,
    TimeSpy,
    PixelRate,
    Fp32,
}

impl BenchmarkKey {
    pub fn kind(&self) -> HardwareKind {
        match self {
            BenchmarkKey::PassmarkMulti
            | BenchmarkKey::PassmarkSingle
            | BenchmarkKey::CinebenchR20Multi
            | BenchmarkKey::CinebenchR20Single
            | BenchmarkKey::Geekbench6Multi
            | BenchmarkKey::Geekbench6Single => HardwareKind::Cpu,
            BenchmarkKey::TimeSpy | BenchmarkKey::PixelRate | BenchmarkKey::Fp32 => {
                HardwareKind::Gpu
            }
        }
    }

    /// Row caption shown next to the bar, inside a tab that already names
    /// the benchmark suite.
    pub fn label(&self) -> &'static str {
        match self {
            BenchmarkKey::PassmarkMulti
            | BenchmarkKey::CinebenchR20Multi
            | BenchmarkKey::Geekbench6Multi => "Multi core",
            BenchmarkKey::PassmarkSingle
            | BenchmarkKey::CinebenchR20Single
            | BenchmarkKey::Geekbench6Single => "Single core",
            BenchmarkKey::TimeSpy => "Score",
            BenchmarkKey::PixelRate => "GPixel/s",
            BenchmarkKey::Fp32 => "TFLOPS",
        }
    }

    /// The benchmark's number for `record`, or `None` when the record does
    /// not carry it. Unit-suffixed GPU cells (`"483.8 GPixel/s"`) go through
    /// the leading-number extractor.
    pub fn value(&self, record: &HardwareRecord) -> Option<f64> {
        match self {
            BenchmarkKey::PassmarkMulti => cpu_score(record, |b| b.passmark),
            BenchmarkKey::PassmarkSingle => cpu_score(record, |b| b.passmark_single),
            BenchmarkKey::CinebenchR20Multi => cpu_score(record, |b| b.cinebench_r20_multi),
            BenchmarkKey::CinebenchR20Single => cpu_score(record, |b| b.cinebench_r20_single),
            BenchmarkKey::Geekbench6Multi => cpu_score(record, |b| b.geekbench6_multi),
            BenchmarkKey::Geekbench6Single => cpu_score(record, |b| b.geekbench6_single),
            BenchmarkKey::TimeSpy => gpu_field(record, |g| g.score.as_deref()),
            BenchmarkKey::PixelRate => gpu_field(record, |g| g.pixel_rate.as_deref()),
            BenchmarkKey::Fp32 => gpu_field(record, |g| g.fp32.as_deref()),
        }
    }
}

impl std::fmt::Display for BenchmarkKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BenchmarkKey::PassmarkMulti => "PassMark multi-core",
            BenchmarkKey::PassmarkSingle => "PassMark single-core",
            BenchmarkKey::CinebenchR20Multi => "Cinebench R20 multi-core",
            BenchmarkKey::CinebenchR20Single => "Cinebench R20 single-core",
            BenchmarkKey::Geekbench6Multi => "Geekbench 6 multi-core",
            BenchmarkKey::Geekbench6Single => "Geekbench 6 single-core",
            BenchmarkKey::TimeSpy => "3DMark Time Spy",
            BenchmarkKey::PixelRate => "pixel rate",
            BenchmarkKey::Fp32 => "FP32 throughput",
        };
        f.write_str(name)
    }
}

fn cpu_score(
    record: &HardwareRecord,
    pick: fn(&crate::data::model::CpuBenchmarks) -> Option<u32>,
) -> Option<f64> {
    record
        .as_cpu()
        .and_then(|c| pick(&c.benchmarks))
        .map(f64::from)
}

fn gpu_field(
    record: &HardwareRecord,
    pick: fn(&crate::data::model::GpuRecord) -> Option<&str>,
) -> Option<f64> {
    record.as_gpu().and_then(pick).and_then(leading_number)
}

// ---------------------------------------------------------------------------
// Benchmark tabs – how the compare screen groups the keys
// ---------------------------------------------------------------------------

/// One tab on the compare screen: a suite name plus the rows it plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkTab {
    pub label: &'static str,
    pub keys: &'static [BenchmarkKey],
}

const CPU_TABS: &[BenchmarkTab] = &[
    BenchmarkTab {
        label: "PassMark",
        keys: &[BenchmarkKey::PassmarkMulti, BenchmarkKey::PassmarkSingle],
    },
    BenchmarkTab {
        label: "Cinebench R20",
        keys: &[
            BenchmarkKey::CinebenchR20Multi,
            BenchmarkKey::CinebenchR20Single,
        ],
    },
    BenchmarkTab {
        label: "Geekbench 6",
        keys: &[
            BenchmarkKey::Geekbench6Multi,
            BenchmarkKey::Geekbench6Single,
        ],
    },
];

const GPU_TABS: &[BenchmarkTab] = &[
    BenchmarkTab {
        label: "3DMark",
        keys: &[BenchmarkKey::TimeSpy],
    },
    BenchmarkTab {
        label: "Pixel Rate",
        keys: &[BenchmarkKey::PixelRate],
    },
    BenchmarkTab {
        label: "FP32",
        keys: &[BenchmarkKey::Fp32],
    },
];

pub fn benchmark_tabs(kind: HardwareKind) -> &'static [BenchmarkTab] {
    match kind {
        HardwareKind::Cpu => CPU_TABS,
        HardwareKind::Gpu => GPU_TABS,
    }
}

// ---------------------------------------------------------------------------
// compare – the stateless two-record transform
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompareError {
    #[error("cannot compare a {left} record against a {right} record")]
    KindMismatch {
        left: HardwareKind,
        right: HardwareKind,
    },
    #[error("benchmark {key} does not apply to {kind} records")]
    KeyMismatch {
        key: BenchmarkKey,
        kind: HardwareKind,
    },
}

/// Result of comparing one benchmark across two records. Values stay `None`
/// when the record lacks the benchmark; ratios are always finite in `[0, 1]`
/// so they can drive bar widths directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompareOutcome {
    pub a_value: Option<f64>,
    pub b_value: Option<f64>,
    pub a_ratio: f64,
    pub b_ratio: f64,
}

/// Normalize a pair of optional scores against their shared maximum.
/// Missing values count as 0, and a 0 maximum yields `(0, 0)` rather than
/// dividing by zero.
pub fn ratio_pair(a: Option<f64>, b: Option<f64>) -> (f64, f64) {
    let a = a.unwrap_or(0.0);
    let b = b.unwrap_or(0.0);
    let max = a.max(b);
    if max <= 0.0 {
        return (0.0, 0.0);
    }
    ((a / max).clamp(0.0, 1.0), (b / max).clamp(0.0, 1.0))
}

/// Compare `a` and `b` on one benchmark. Rejects pairs of different kinds
/// and keys that belong to the other kind; within a kind it never fails,
/// missing data degrades to `None` values and zero ratios.
pub fn compare(
    a: &HardwareRecord,
    b: &HardwareRecord,
    key: BenchmarkKey,
) -> Result<CompareOutcome, CompareError> {
    if a.kind() != b.kind() {
        return Err(CompareError::KindMismatch {
            left: a.kind(),
            right: b.kind(),
        });
    }
    if key.kind() != a.kind() {
        return Err(CompareError::KeyMismatch {
            key,
            kind: a.kind(),
        });
    }

    let a_value = key.value(a);
    let b_value = key.value(b);
    let (a_ratio, b_ratio) = ratio_pair(a_value, b_value);
    Ok(CompareOutcome {
        a_value,
        b_value,
        a_ratio,
        b_ratio,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{CpuBenchmarks, CpuRecord, GpuRecord};

    fn cpu_with_passmark(name: &str, passmark: Option<u32>) -> HardwareRecord {
        HardwareRecord::Cpu(CpuRecord {
            id: name.to_string(),
            name: name.to_string(),
            category: "desktop".to_string(),
            socket: None,
            threads: None,
            tdp: None,
            process_nm: None,
            base_clock: None,
            turbo_clock: None,
            l2_cache_mb: None,
            l3_cache_mb: None,
            unlocked_multiplier: None,
            ecc_memory: None,
            integrated_graphics: None,
            ddr_version: None,
            max_memory_gb: None,
            memory_channels: None,
            max_memory_speed: None,
            benchmarks: CpuBenchmarks {
                passmark,
                ..CpuBenchmarks::default()
            },
        })
    }

    fn gpu_with(fp32: Option<&str>, pixel_rate: Option<&str>) -> HardwareRecord {
        HardwareRecord::Gpu(GpuRecord {
            id: "g".to_string(),
            name: "g".to_string(),
            fp32: fp32.map(str::to_string),
            pixel_rate: pixel_rate.map(str::to_string),
            ..GpuRecord::default()
        })
    }

    #[test]
    fn winner_gets_a_full_bar() {
        let a = cpu_with_passmark("a", Some(5000));
        let b = cpu_with_passmark("b", Some(2500));
        let outcome = compare(&a, &b, BenchmarkKey::PassmarkMulti).unwrap();
        assert_eq!(outcome.a_value, Some(5000.0));
        assert_eq!(outcome.b_value, Some(2500.0));
        assert_eq!(outcome.a_ratio, 1.0);
        assert_eq!(outcome.b_ratio, 0.5);
    }

    #[test]
    fn swapping_inputs_swaps_ratios_exactly() {
        let a = cpu_with_passmark("a", Some(5213));
        let b = cpu_with_passmark("b", Some(47891));
        let ab = compare(&a, &b, BenchmarkKey::PassmarkMulti).unwrap();
        let ba = compare(&b, &a, BenchmarkKey::PassmarkMulti).unwrap();
        assert_eq!(ab.a_ratio, ba.b_ratio);
        assert_eq!(ab.b_ratio, ba.a_ratio);
    }

    #[test]
    fn missing_benchmark_degrades_to_none_and_zero() {
        let a = cpu_with_passmark("a", None);
        let b = cpu_with_passmark("b", Some(2500));
        let outcome = compare(&a, &b, BenchmarkKey::PassmarkMulti).unwrap();
        assert_eq!(outcome.a_value, None);
        assert_eq!(outcome.a_ratio, 0.0);
        assert_eq!(outcome.b_ratio, 1.0);
    }

    #[test]
    fn both_missing_yields_zero_ratios() {
        let a = cpu_with_passmark("a", None);
        let b = cpu_with_passmark("b", None);
        let outcome = compare(&a, &b, BenchmarkKey::PassmarkMulti).unwrap();
        assert_eq!(outcome.a_ratio, 0.0);
        assert_eq!(outcome.b_ratio, 0.0);
    }

    #[test]
    fn unit_suffixed_gpu_cells_are_extracted() {
        let a = gpu_with(Some("82.58 TFLOPS"), None);
        let b = gpu_with(Some("61.42 TFLOPS"), None);
        let outcome = compare(&a, &b, BenchmarkKey::Fp32).unwrap();
        assert_eq!(outcome.a_value, Some(82.58));
        assert_eq!(outcome.b_value, Some(61.42));
        assert_eq!(outcome.a_ratio, 1.0);
    }

    #[test]
    fn cross_kind_pairs_are_rejected() {
        let a = cpu_with_passmark("a", Some(1000));
        let b = gpu_with(None, None);
        let err = compare(&a, &b, BenchmarkKey::PassmarkMulti).unwrap_err();
        assert_eq!(
            err,
            CompareError::KindMismatch {
                left: HardwareKind::Cpu,
                right: HardwareKind::Gpu,
            }
        );
    }

    #[test]
    fn keys_of_the_other_kind_are_rejected() {
        let a = cpu_with_passmark("a", Some(1000));
        let b = cpu_with_passmark("b", Some(2000));
        let err = compare(&a, &b, BenchmarkKey::TimeSpy).unwrap_err();
        assert_eq!(
            err,
            CompareError::KeyMismatch {
                key: BenchmarkKey::TimeSpy,
                kind: HardwareKind::Cpu,
            }
        );
    }

    #[test]
    fn every_tab_key_matches_its_kind() {
        for kind in [HardwareKind::Cpu, HardwareKind::Gpu] {
            for tab in benchmark_tabs(kind) {
                for key in tab.keys {
                    assert_eq!(key.kind(), kind, "{key} listed under {kind}");
                }
            }
        }
    }
}
