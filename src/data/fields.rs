use super::model::{CpuRecord, GpuRecord, HardwareKind, HardwareRecord};
use super::numeric::leading_number;

// ---------------------------------------------------------------------------
// Typed spec-table accessors
// ---------------------------------------------------------------------------

/// Placeholder shown wherever a record has no value for a row.
pub const MISSING: &str = "—";

/// One labelled line of a detail sheet or compare table. The accessor
/// returns `None` when the record has no data; callers render [`MISSING`].
pub struct SpecRow {
    pub label: &'static str,
    pub value: fn(&HardwareRecord) -> Option<String>,
}

impl SpecRow {
    /// The display text for this row, placeholder included.
    pub fn display(&self, record: &HardwareRecord) -> String {
        (self.value)(record).unwrap_or_else(|| MISSING.to_string())
    }
}

/// A titled group of rows, mirroring one card of the detail sheet.
pub struct SpecSection {
    pub title: &'static str,
    pub rows: &'static [SpecRow],
}

/// The detail-sheet layout for one catalog kind.
pub fn spec_sections(kind: HardwareKind) -> &'static [SpecSection] {
    match kind {
        HardwareKind::Cpu => CPU_SECTIONS,
        HardwareKind::Gpu => GPU_SECTIONS,
    }
}

// -- formatting helpers --

fn fmt_f64(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

fn yes_no(flag: bool) -> String {
    if flag { "Yes" } else { "No" }.to_string()
}

fn cpu<T>(record: &HardwareRecord, pick: fn(&CpuRecord) -> Option<T>) -> Option<T> {
    record.as_cpu().and_then(pick)
}

fn gpu(record: &HardwareRecord, pick: fn(&GpuRecord) -> Option<&str>) -> Option<String> {
    record.as_gpu().and_then(pick).map(str::to_string)
}

// ---------------------------------------------------------------------------
// CPU sections
// ---------------------------------------------------------------------------

static CPU_SECTIONS: &[SpecSection] = &[
    SpecSection {
        title: "Basics",
        rows: &[
            SpecRow {
                label: "Category",
                value: |r| Some(r.category().to_string()),
            },
            SpecRow {
                label: "Socket",
                value: |r| cpu(r, |c| c.socket.clone()),
            },
            SpecRow {
                label: "Threads",
                value: |r| cpu(r, |c| c.threads).map(|t| t.to_string()),
            },
            SpecRow {
                label: "Process",
                value: |r| cpu(r, |c| c.process_nm).map(|nm| format!("{} nm", fmt_f64(nm))),
            },
            SpecRow {
                label: "TDP",
                // The cell may or may not carry its own unit; extract the
                // number so "W" is never doubled.
                value: |r| {
                    cpu(r, |c| c.tdp.as_deref().and_then(leading_number))
                        .map(|w| format!("{} W", fmt_f64(w)))
                },
            },
            SpecRow {
                label: "Unlocked multiplier",
                value: |r| cpu(r, |c| c.unlocked_multiplier).map(yes_no),
            },
            SpecRow {
                label: "Integrated graphics",
                value: |r| cpu(r, |c| c.integrated_graphics).map(yes_no),
            },
        ],
    },
    SpecSection {
        title: "Performance",
        rows: &[
            SpecRow {
                label: "Base clock",
                value: |r| cpu(r, |c| c.base_clock.clone()),
            },
            SpecRow {
                label: "Turbo clock",
                value: |r| cpu(r, |c| c.turbo_clock.clone()).map(|t| format!("{t} GHz")),
            },
            SpecRow {
                label: "L3 cache",
                value: |r| cpu(r, |c| c.l3_cache_mb).map(|mb| format!("{} MB", fmt_f64(mb))),
            },
            SpecRow {
                label: "L2 cache",
                value: |r| cpu(r, |c| c.l2_cache_mb).map(|mb| format!("{} MB", fmt_f64(mb))),
            },
        ],
    },
    SpecSection {
        title: "Benchmarks",
        rows: &[
            SpecRow {
                label: "PassMark multi-core",
                value: |r| cpu(r, |c| c.benchmarks.passmark).map(|s| s.to_string()),
            },
            SpecRow {
                label: "PassMark single-core",
                value: |r| cpu(r, |c| c.benchmarks.passmark_single).map(|s| s.to_string()),
            },
            SpecRow {
                label: "Cinebench R20 multi-core",
                value: |r| cpu(r, |c| c.benchmarks.cinebench_r20_multi).map(|s| s.to_string()),
            },
            SpecRow {
                label: "Cinebench R20 single-core",
                value: |r| cpu(r, |c| c.benchmarks.cinebench_r20_single).map(|s| s.to_string()),
            },
            SpecRow {
                label: "Geekbench 6 multi-core",
                value: |r| cpu(r, |c| c.benchmarks.geekbench6_multi).map(|s| s.to_string()),
            },
            SpecRow {
                label: "Geekbench 6 single-core",
                value: |r| cpu(r, |c| c.benchmarks.geekbench6_single).map(|s| s.to_string()),
            },
        ],
    },
    SpecSection {
        title: "Memory support",
        rows: &[
            SpecRow {
                label: "Memory type",
                value: |r| cpu(r, |c| c.ddr_version).map(|v| format!("DDR{v}")),
            },
            SpecRow {
                label: "Max size",
                value: |r| cpu(r, |c| c.max_memory_gb).map(|gb| format!("{} GB", fmt_f64(gb))),
            },
            SpecRow {
                label: "Channels",
                value: |r| cpu(r, |c| c.memory_channels).map(|n| n.to_string()),
            },
            SpecRow {
                label: "Max speed",
                value: |r| cpu(r, |c| c.max_memory_speed).map(|s| format!("{s} MHz")),
            },
            SpecRow {
                label: "ECC support",
                value: |r| cpu(r, |c| c.ecc_memory).map(yes_no),
            },
        ],
    },
];

// ---------------------------------------------------------------------------
// GPU sections
// ---------------------------------------------------------------------------

static GPU_SECTIONS: &[SpecSection] = &[
    SpecSection {
        title: "Core",
        rows: &[
            SpecRow {
                label: "Base clock",
                value: |r| gpu(r, |g| g.base_clock.as_deref()),
            },
            SpecRow {
                label: "Boost clock",
                value: |r| gpu(r, |g| g.boost_clock.as_deref()),
            },
            SpecRow {
                label: "TDP",
                value: |r| gpu(r, |g| g.tdp.as_deref()),
            },
            SpecRow {
                label: "Shading units",
                value: |r| gpu(r, |g| g.shading_units.as_deref()),
            },
            SpecRow {
                label: "RT cores",
                value: |r| gpu(r, |g| g.rt_cores.as_deref()),
            },
            SpecRow {
                label: "Tensor cores",
                value: |r| gpu(r, |g| g.tensor_cores.as_deref()),
            },
            SpecRow {
                label: "ROPs",
                value: |r| gpu(r, |g| g.rops.as_deref()),
            },
            SpecRow {
                label: "TMUs",
                value: |r| gpu(r, |g| g.tmus.as_deref()),
            },
        ],
    },
    SpecSection {
        title: "Compute",
        rows: &[
            SpecRow {
                label: "FP16",
                value: |r| gpu(r, |g| g.fp16.as_deref()),
            },
            SpecRow {
                label: "FP32",
                value: |r| gpu(r, |g| g.fp32.as_deref()),
            },
            SpecRow {
                label: "FP64",
                value: |r| gpu(r, |g| g.fp64.as_deref()),
            },
            SpecRow {
                label: "Pixel rate",
                value: |r| gpu(r, |g| g.pixel_rate.as_deref()),
            },
            SpecRow {
                label: "Texture rate",
                value: |r| gpu(r, |g| g.texture_rate.as_deref()),
            },
        ],
    },
    SpecSection {
        title: "Memory",
        rows: &[
            SpecRow {
                label: "Size",
                value: |r| gpu(r, |g| g.memory_size.as_deref()),
            },
            SpecRow {
                label: "Type",
                value: |r| gpu(r, |g| g.memory_type.as_deref()),
            },
            SpecRow {
                label: "Bus",
                value: |r| gpu(r, |g| g.memory_bus.as_deref()),
            },
            SpecRow {
                label: "Clock",
                value: |r| gpu(r, |g| g.memory_clock.as_deref()),
            },
            SpecRow {
                label: "Bandwidth",
                value: |r| gpu(r, |g| g.bandwidth.as_deref()),
            },
        ],
    },
    SpecSection {
        title: "Process",
        rows: &[
            SpecRow {
                label: "Node",
                value: |r| gpu(r, |g| g.process_node.as_deref()),
            },
            SpecRow {
                label: "Transistors",
                value: |r| gpu(r, |g| g.transistors.as_deref()),
            },
            SpecRow {
                label: "Die size",
                value: |r| gpu(r, |g| g.die_size.as_deref()),
            },
            SpecRow {
                label: "Foundry",
                value: |r| gpu(r, |g| g.foundry.as_deref()),
            },
            SpecRow {
                label: "Release date",
                value: |r| gpu(r, |g| g.release_date.as_deref()),
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{CpuBenchmarks, GpuRecord};

    fn bare_cpu() -> HardwareRecord {
        HardwareRecord::Cpu(CpuRecord {
            id: "c1".to_string(),
            name: "Ryzen 5 7600".to_string(),
            category: "desktop".to_string(),
            socket: Some("AM5".to_string()),
            threads: Some(12),
            tdp: None,
            process_nm: Some(5.0),
            base_clock: None,
            turbo_clock: None,
            l2_cache_mb: None,
            l3_cache_mb: Some(32.0),
            unlocked_multiplier: Some(true),
            ecc_memory: None,
            integrated_graphics: None,
            ddr_version: Some(5),
            max_memory_gb: None,
            memory_channels: None,
            max_memory_speed: None,
            benchmarks: CpuBenchmarks::default(),
        })
    }

    #[test]
    fn missing_values_render_as_the_placeholder_dash() {
        let record = bare_cpu();
        let benchmarks = &spec_sections(HardwareKind::Cpu)[2];
        assert_eq!(benchmarks.title, "Benchmarks");
        for row in benchmarks.rows {
            assert_eq!(row.display(&record), MISSING);
        }
    }

    #[test]
    fn formatters_attach_units() {
        let record = bare_cpu();
        let basics = &spec_sections(HardwareKind::Cpu)[0];
        let by_label = |label: &str| {
            basics
                .rows
                .iter()
                .find(|row| row.label == label)
                .map(|row| row.display(&record))
        };
        assert_eq!(by_label("Process").as_deref(), Some("5 nm"));
        assert_eq!(by_label("Socket").as_deref(), Some("AM5"));
        assert_eq!(by_label("Unlocked multiplier").as_deref(), Some("Yes"));
        assert_eq!(by_label("TDP").as_deref(), Some(MISSING));
    }

    #[test]
    fn tdp_renders_one_unit_regardless_of_cell_style() {
        let with_tdp = |raw: &str| {
            let HardwareRecord::Cpu(mut c) = bare_cpu() else {
                unreachable!()
            };
            c.tdp = Some(raw.to_string());
            HardwareRecord::Cpu(c)
        };
        let basics = &spec_sections(HardwareKind::Cpu)[0];
        let tdp_row = basics.rows.iter().find(|row| row.label == "TDP").unwrap();

        assert_eq!(tdp_row.display(&with_tdp("170")), "170 W");
        assert_eq!(tdp_row.display(&with_tdp("170 W")), "170 W");
        assert_eq!(tdp_row.display(&with_tdp("unknown")), MISSING);
    }

    #[test]
    fn sections_of_one_kind_ignore_records_of_the_other() {
        let gpu = HardwareRecord::Gpu(GpuRecord {
            id: "g1".to_string(),
            name: "GeForce RTX 4090".to_string(),
            memory_size: Some("24 GB".to_string()),
            ..GpuRecord::default()
        });
        // A CPU accessor applied to a GPU degrades to the placeholder.
        let threads = &spec_sections(HardwareKind::Cpu)[0].rows[2];
        assert_eq!(threads.display(&gpu), MISSING);

        let memory = &spec_sections(HardwareKind::Gpu)[2].rows[0];
        assert_eq!(memory.display(&gpu), "24 GB");
    }
}
