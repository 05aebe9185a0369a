use super::model::{HardwareKind, HardwareRecord};
use super::numeric::leading_number;

// ---------------------------------------------------------------------------
// Buckets: named half-open numeric ranges
// ---------------------------------------------------------------------------

/// A named numeric range used for categorical filtering of a continuous
/// field. The interval is half-open: `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bucket {
    pub label: &'static str,
    /// Inclusive lower bound.
    pub min: f64,
    /// Exclusive upper bound; `None` means unbounded.
    pub max: Option<f64>,
}

impl Bucket {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && self.max.map_or(true, |max| value < max)
    }
}

/// Numeric record fields a bucket filter can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    Tdp,
    MemorySize,
}

impl NumericField {
    pub fn label(&self) -> &'static str {
        match self {
            NumericField::Tdp => "TDP",
            NumericField::MemorySize => "Memory",
        }
    }
}

/// One chosen bucket together with the field it applies to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericBucket {
    pub field: NumericField,
    pub bucket: Bucket,
}

/// TDP ranges offered on the CPU list.
pub const CPU_TDP_BUCKETS: &[Bucket] = &[
    Bucket { label: "Under 50 W", min: 0.0, max: Some(50.0) },
    Bucket { label: "50-80 W", min: 50.0, max: Some(80.0) },
    Bucket { label: "80-120 W", min: 80.0, max: Some(120.0) },
    Bucket { label: "120-160 W", min: 120.0, max: Some(160.0) },
    Bucket { label: "160-200 W", min: 160.0, max: Some(200.0) },
    Bucket { label: "200-300 W", min: 200.0, max: Some(300.0) },
    Bucket { label: "300 W and up", min: 300.0, max: None },
];

/// TDP ranges offered on the GPU list.
pub const GPU_TDP_BUCKETS: &[Bucket] = &[
    Bucket { label: "Under 100 W", min: 0.0, max: Some(100.0) },
    Bucket { label: "100-200 W", min: 100.0, max: Some(200.0) },
    Bucket { label: "200-300 W", min: 200.0, max: Some(300.0) },
    Bucket { label: "300-400 W", min: 300.0, max: Some(400.0) },
    Bucket { label: "400 W and up", min: 400.0, max: None },
];

/// VRAM size ranges offered on the GPU list.
pub const GPU_MEMORY_BUCKETS: &[Bucket] = &[
    Bucket { label: "Under 8 GB", min: 0.0, max: Some(8.0) },
    Bucket { label: "8-12 GB", min: 8.0, max: Some(12.0) },
    Bucket { label: "12-16 GB", min: 12.0, max: Some(16.0) },
    Bucket { label: "16-24 GB", min: 16.0, max: Some(24.0) },
    Bucket { label: "24 GB and up", min: 24.0, max: None },
];

/// The bucketable fields and their range tables for a catalog kind.
pub fn bucket_options(kind: HardwareKind) -> &'static [(NumericField, &'static [Bucket])] {
    match kind {
        HardwareKind::Cpu => &[(NumericField::Tdp, CPU_TDP_BUCKETS)],
        HardwareKind::Gpu => &[
            (NumericField::Tdp, GPU_TDP_BUCKETS),
            (NumericField::MemorySize, GPU_MEMORY_BUCKETS),
        ],
    }
}

// ---------------------------------------------------------------------------
// FilterCriteria: the conjunction of active predicates
// ---------------------------------------------------------------------------

/// Filter configuration for one catalog. Every present key constrains the
/// result; absent keys impose nothing. All keys are ANDed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against the record's search fields
    /// (CPU: name; GPU: name and architecture).
    pub text: Option<String>,
    /// Exact match against the classification field.
    pub category: Option<String>,
    /// Exact match against the facet field (CPU socket / GPU brand).
    pub facet: Option<String>,
    /// Membership in one half-open numeric range.
    pub bucket: Option<NumericBucket>,
}

impl FilterCriteria {
    /// True when no predicate is active (the "All" state of every control).
    pub fn is_empty(&self) -> bool {
        self.text.as_deref().map_or(true, |t| t.trim().is_empty())
            && self.category.is_none()
            && self.facet.is_none()
            && self.bucket.is_none()
    }
}

// ---------------------------------------------------------------------------
// The filter engine
// ---------------------------------------------------------------------------

/// Numeric view of a record field for bucket tests. Missing or unparseable
/// cells read as 0 so a malformed dataset can never panic the filter.
fn numeric_value(record: &HardwareRecord, field: NumericField) -> f64 {
    let raw = match (record, field) {
        (HardwareRecord::Cpu(c), NumericField::Tdp) => c.tdp.as_deref(),
        (HardwareRecord::Gpu(g), NumericField::Tdp) => g.tdp.as_deref(),
        (HardwareRecord::Cpu(c), NumericField::MemorySize) => {
            return c.max_memory_gb.unwrap_or(0.0);
        }
        (HardwareRecord::Gpu(g), NumericField::MemorySize) => g.memory_size.as_deref(),
    };
    raw.and_then(leading_number).unwrap_or(0.0)
}

/// Substring match over the record's searchable fields. `needle` must
/// already be lowercased.
fn matches_text(record: &HardwareRecord, needle: &str) -> bool {
    if record.name().to_lowercase().contains(needle) {
        return true;
    }
    match record {
        HardwareRecord::Gpu(g) => g.architecture.to_lowercase().contains(needle),
        HardwareRecord::Cpu(_) => false,
    }
}

/// Return indices of records that pass all active criteria, in source order.
///
/// Pure: the records are never reordered or mutated, and filtering an
/// already-filtered sequence with the same criteria is a no-op.
pub fn filtered_indices(records: &[HardwareRecord], criteria: &FilterCriteria) -> Vec<usize> {
    // Normalize the needle once; an all-whitespace search box is "no filter".
    let needle = criteria
        .text
        .as_deref()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty());

    records
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            if let Some(needle) = &needle {
                if !matches_text(record, needle) {
                    return false;
                }
            }
            if let Some(category) = &criteria.category {
                if record.category() != category {
                    return false;
                }
            }
            if let Some(facet) = &criteria.facet {
                if record.facet() != Some(facet.as_str()) {
                    return false;
                }
            }
            if let Some(numeric) = &criteria.bucket {
                if !numeric.bucket.contains(numeric_value(record, numeric.field)) {
                    return false;
                }
            }
            true
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{CpuBenchmarks, CpuRecord, GpuRecord};

    fn cpu(name: &str, category: &str, socket: &str, tdp: &str) -> HardwareRecord {
        HardwareRecord::Cpu(CpuRecord {
            id: name.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            socket: (!socket.is_empty()).then(|| socket.to_string()),
            threads: None,
            tdp: (!tdp.is_empty()).then(|| tdp.to_string()),
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
            benchmarks: CpuBenchmarks::default(),
        })
    }

    fn gpu(name: &str, architecture: &str, memory_size: &str) -> HardwareRecord {
        HardwareRecord::Gpu(GpuRecord {
            id: name.to_string(),
            name: name.to_string(),
            brand: "NVIDIA".to_string(),
            category: "Desktop".to_string(),
            architecture: architecture.to_string(),
            memory_size: (!memory_size.is_empty()).then(|| memory_size.to_string()),
            ..GpuRecord::default()
        })
    }

    fn sample() -> Vec<HardwareRecord> {
        vec![
            cpu("Ryzen 9 7950X", "desktop", "AM5", "170"),
            cpu("Core i9-14900K", "desktop", "LGA1700", "125"),
            cpu("Ryzen 7 7840U", "laptop", "FP8", "28"),
            cpu("Core i7-1360P", "laptop", "BGA1744", "28"),
            cpu("Threadripper 7980X", "other", "sTR5", "350"),
        ]
    }

    #[test]
    fn no_criteria_is_the_identity() {
        let records = sample();
        let indices = filtered_indices(&records, &FilterCriteria::default());
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn blank_text_imposes_nothing() {
        let records = sample();
        let criteria = FilterCriteria {
            text: Some("   ".to_string()),
            ..FilterCriteria::default()
        };
        assert_eq!(filtered_indices(&records, &criteria).len(), records.len());
        assert!(criteria.is_empty());
    }

    #[test]
    fn text_match_is_case_insensitive_substring() {
        let records = sample();
        let criteria = FilterCriteria {
            text: Some("ryzen".to_string()),
            ..FilterCriteria::default()
        };
        assert_eq!(filtered_indices(&records, &criteria), vec![0, 2]);

        let absent = FilterCriteria {
            text: Some("zzz-not-present".to_string()),
            ..FilterCriteria::default()
        };
        assert!(filtered_indices(&records, &absent).is_empty());
    }

    #[test]
    fn gpu_text_also_matches_architecture() {
        let records = vec![
            gpu("GeForce RTX 4090", "Ada Lovelace", "24 GB"),
            gpu("Radeon RX 7900 XTX", "RDNA 3", "24 GB"),
        ];
        let criteria = FilterCriteria {
            text: Some("ada".to_string()),
            ..FilterCriteria::default()
        };
        assert_eq!(filtered_indices(&records, &criteria), vec![0]);
    }

    #[test]
    fn category_and_facet_are_exact_matches() {
        let records = sample();
        let laptops = FilterCriteria {
            category: Some("laptop".to_string()),
            ..FilterCriteria::default()
        };
        assert_eq!(filtered_indices(&records, &laptops), vec![2, 3]);

        let am5 = FilterCriteria {
            facet: Some("AM5".to_string()),
            ..FilterCriteria::default()
        };
        assert_eq!(filtered_indices(&records, &am5), vec![0]);
    }

    #[test]
    fn buckets_are_half_open() {
        let bucket = Bucket { label: "50-80 W", min: 50.0, max: Some(80.0) };
        assert!(bucket.contains(50.0));
        assert!(bucket.contains(79.9));
        assert!(!bucket.contains(80.0));
        assert!(!bucket.contains(49.9));

        // A TDP sitting exactly on a boundary lands in the upper bucket.
        let records = vec![cpu("Edge", "desktop", "AM5", "80")];
        let lower = FilterCriteria {
            bucket: Some(NumericBucket { field: NumericField::Tdp, bucket }),
            ..FilterCriteria::default()
        };
        assert!(filtered_indices(&records, &lower).is_empty());

        let upper = FilterCriteria {
            bucket: Some(NumericBucket {
                field: NumericField::Tdp,
                bucket: CPU_TDP_BUCKETS[2], // 80-120 W
            }),
            ..FilterCriteria::default()
        };
        assert_eq!(filtered_indices(&records, &upper), vec![0]);
    }

    #[test]
    fn unparseable_tdp_reads_as_zero() {
        let records = vec![
            cpu("No TDP", "desktop", "AM5", ""),
            cpu("Weird TDP", "desktop", "AM5", "unknown"),
        ];
        let lowest = FilterCriteria {
            bucket: Some(NumericBucket {
                field: NumericField::Tdp,
                bucket: CPU_TDP_BUCKETS[0], // Under 50 W
            }),
            ..FilterCriteria::default()
        };
        // Both default to 0 and land in the lowest range instead of panicking.
        assert_eq!(filtered_indices(&records, &lowest), vec![0, 1]);
    }

    #[test]
    fn gpu_memory_bucket_extracts_the_unit_suffixed_size() {
        let records = vec![
            gpu("GeForce RTX 4060", "Ada Lovelace", "8 GB"),
            gpu("GeForce RTX 4090", "Ada Lovelace", "24 GB"),
        ];
        let criteria = FilterCriteria {
            bucket: Some(NumericBucket {
                field: NumericField::MemorySize,
                bucket: GPU_MEMORY_BUCKETS[1], // 8-12 GB
            }),
            ..FilterCriteria::default()
        };
        assert_eq!(filtered_indices(&records, &criteria), vec![0]);
    }

    #[test]
    fn criteria_are_anded() {
        let records = sample();
        let criteria = FilterCriteria {
            text: Some("core".to_string()),
            category: Some("laptop".to_string()),
            ..FilterCriteria::default()
        };
        assert_eq!(filtered_indices(&records, &criteria), vec![3]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let records = sample();
        let criteria = FilterCriteria {
            category: Some("desktop".to_string()),
            ..FilterCriteria::default()
        };

        let once = filtered_indices(&records, &criteria);
        let filtered: Vec<HardwareRecord> =
            once.iter().map(|&i| records[i].clone()).collect();
        let twice = filtered_indices(&filtered, &criteria);

        assert_eq!(twice.len(), once.len());
        assert_eq!(twice, (0..filtered.len()).collect::<Vec<_>>());
    }
}
