use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// HardwareKind – which dataset a record belongs to
// ---------------------------------------------------------------------------

/// The two record shapes the app knows about. Filtering and comparison are
/// always per-kind; mixing kinds is rejected, never silently coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardwareKind {
    Cpu,
    Gpu,
}

impl HardwareKind {
    /// Short label for tabs and combo boxes.
    pub fn label(&self) -> &'static str {
        match self {
            HardwareKind::Cpu => "CPU",
            HardwareKind::Gpu => "GPU",
        }
    }

    /// What the secondary categorical filter means for this kind.
    pub fn facet_label(&self) -> &'static str {
        match self {
            HardwareKind::Cpu => "Socket",
            HardwareKind::Gpu => "Brand",
        }
    }
}

impl fmt::Display for HardwareKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// CpuRecord – one row of the CPU dataset
// ---------------------------------------------------------------------------

/// Benchmark score columns. All optional: a score that was never measured
/// stays `None` and renders as a placeholder downstream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CpuBenchmarks {
    pub passmark: Option<u32>,
    pub passmark_single: Option<u32>,
    pub cinebench_r20_multi: Option<u32>,
    pub cinebench_r20_single: Option<u32>,
    pub geekbench6_multi: Option<u32>,
    pub geekbench6_single: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CpuRecord {
    pub id: String,
    pub name: String,
    /// Classification: `desktop`, `laptop`, or `other`.
    pub category: String,
    pub socket: Option<String>,
    pub threads: Option<u32>,
    /// TDP kept as the dataset's numeric string; arithmetic goes through
    /// [`crate::data::numeric::leading_number`].
    pub tdp: Option<String>,
    /// Semiconductor process in nm.
    pub process_nm: Option<f64>,
    /// Either a single clock or a composite big/little encoding such as
    /// `"8 x 3.2 & 16 x 2.4 GHz"`; kept verbatim for display.
    pub base_clock: Option<String>,
    pub turbo_clock: Option<String>,
    pub l2_cache_mb: Option<f64>,
    pub l3_cache_mb: Option<f64>,
    pub unlocked_multiplier: Option<bool>,
    pub ecc_memory: Option<bool>,
    pub integrated_graphics: Option<bool>,
    pub ddr_version: Option<u32>,
    pub max_memory_gb: Option<f64>,
    pub memory_channels: Option<u32>,
    pub max_memory_speed: Option<u32>,
    pub benchmarks: CpuBenchmarks,
}

// ---------------------------------------------------------------------------
// GpuRecord – one row of the GPU dataset
// ---------------------------------------------------------------------------

/// GPU rows arrive almost entirely as unit-suffixed display strings
/// (`"24 GB"`, `"82.58 TFLOPS"`, `"450 W"`). They are kept verbatim; every
/// numeric use extracts the leading number first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GpuRecord {
    pub id: String,
    pub name: String,
    pub brand: String,
    /// Classification: `Desktop`, `Laptop`, `Professional`, or `Integrated`.
    pub category: String,
    pub architecture: String,
    pub generation: Option<String>,
    pub foundry: Option<String>,
    pub process_node: Option<String>,
    pub die_size: Option<String>,
    pub transistors: Option<String>,
    pub base_clock: Option<String>,
    pub boost_clock: Option<String>,
    pub memory_size: Option<String>,
    pub memory_type: Option<String>,
    pub memory_clock: Option<String>,
    pub memory_bus: Option<String>,
    pub bandwidth: Option<String>,
    pub shading_units: Option<String>,
    pub rt_cores: Option<String>,
    pub tensor_cores: Option<String>,
    pub rops: Option<String>,
    pub tmus: Option<String>,
    pub pixel_rate: Option<String>,
    pub texture_rate: Option<String>,
    pub fp16: Option<String>,
    pub fp32: Option<String>,
    pub fp64: Option<String>,
    pub tdp: Option<String>,
    pub power_connectors: Option<String>,
    pub release_date: Option<String>,
    /// 3DMark Time Spy score.
    pub score: Option<String>,
}

// ---------------------------------------------------------------------------
// HardwareRecord – kind-tagged record
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum HardwareRecord {
    Cpu(CpuRecord),
    Gpu(GpuRecord),
}

impl HardwareRecord {
    pub fn kind(&self) -> HardwareKind {
        match self {
            HardwareRecord::Cpu(_) => HardwareKind::Cpu,
            HardwareRecord::Gpu(_) => HardwareKind::Gpu,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            HardwareRecord::Cpu(c) => &c.id,
            HardwareRecord::Gpu(g) => &g.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            HardwareRecord::Cpu(c) => &c.name,
            HardwareRecord::Gpu(g) => &g.name,
        }
    }

    pub fn category(&self) -> &str {
        match self {
            HardwareRecord::Cpu(c) => &c.category,
            HardwareRecord::Gpu(g) => &g.category,
        }
    }

    /// Secondary categorical field: CPU socket / GPU brand. Empty cells
    /// surface as `None` so they never populate filter combos.
    pub fn facet(&self) -> Option<&str> {
        match self {
            HardwareRecord::Cpu(c) => c.socket.as_deref(),
            HardwareRecord::Gpu(g) => (!g.brand.is_empty()).then_some(g.brand.as_str()),
        }
    }

    pub fn as_cpu(&self) -> Option<&CpuRecord> {
        match self {
            HardwareRecord::Cpu(c) => Some(c),
            HardwareRecord::Gpu(_) => None,
        }
    }

    pub fn as_gpu(&self) -> Option<&GpuRecord> {
        match self {
            HardwareRecord::Gpu(g) => Some(g),
            HardwareRecord::Cpu(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog – the complete loaded dataset plus derived indexes
// ---------------------------------------------------------------------------

/// One loaded dataset with the unique-value indexes the filter panel needs.
/// Record order is source-file order and never changes after load.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub kind: HardwareKind,
    pub records: Vec<HardwareRecord>,
    /// Sorted unique classification values.
    pub categories: Vec<String>,
    /// Sorted unique facet values (sockets / brands).
    pub facets: Vec<String>,
}

impl Catalog {
    /// Build the unique-value indexes from the loaded records.
    pub fn from_records(kind: HardwareKind, records: Vec<HardwareRecord>) -> Self {
        let mut categories: BTreeSet<String> = BTreeSet::new();
        let mut facets: BTreeSet<String> = BTreeSet::new();

        for record in &records {
            if !record.category().is_empty() {
                categories.insert(record.category().to_string());
            }
            if let Some(facet) = record.facet() {
                facets.insert(facet.to_string());
            }
        }

        Catalog {
            kind,
            records,
            categories: categories.into_iter().collect(),
            facets: facets.into_iter().collect(),
        }
    }

    /// Placeholder catalog used when a dataset cannot be read: the list
    /// simply stays empty (load failures are not fatal).
    pub fn empty(kind: HardwareKind) -> Self {
        Catalog {
            kind,
            records: Vec::new(),
            categories: Vec::new(),
            facets: Vec::new(),
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
