use std::io::Read;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use thiserror::Error;

use super::model::{Catalog, CpuBenchmarks, CpuRecord, GpuRecord, HardwareKind, HardwareRecord};
use super::numeric::{leading_number, leading_u32, parse_flag};

// ---------------------------------------------------------------------------
// Bundled datasets
// ---------------------------------------------------------------------------

/// The CSVs shipped inside the binary, regenerated by `generate_sample`.
pub const BUNDLED_CPU_CSV: &str = include_str!("../../assets/cpu.csv");
pub const BUNDLED_GPU_CSV: &str = include_str!("../../assets/gpu.csv");

// ---------------------------------------------------------------------------
// Errors and warnings
// ---------------------------------------------------------------------------

/// Load failure: the resource itself could not be read. Malformed rows are
/// never a `LoadError`; they surface as [`ParseWarning`]s instead.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read dataset")]
    Io(#[from] std::io::Error),
    #[error("cannot read CSV header")]
    Header(#[source] csv::Error),
}

/// One non-fatal anomaly encountered while parsing. The offending row is
/// dropped and the parse continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    /// 1-based data row number (the header row is not counted).
    pub row: usize,
    pub message: String,
}

/// A successfully read dataset together with everything that was skipped.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub catalog: Catalog,
    pub warnings: Vec<ParseWarning>,
}

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Parse one bundled dataset. Cannot fail: the asset is an in-memory
/// string, and a corrupt one degrades to an empty catalog.
pub fn load_bundled(kind: HardwareKind) -> LoadOutcome {
    let csv = match kind {
        HardwareKind::Cpu => BUNDLED_CPU_CSV,
        HardwareKind::Gpu => BUNDLED_GPU_CSV,
    };
    match load_reader(kind, csv.as_bytes()) {
        Ok(outcome) => outcome,
        Err(err) => {
            log::error!("bundled {kind} dataset unreadable: {err}");
            LoadOutcome {
                catalog: Catalog::empty(kind),
                warnings: Vec::new(),
            }
        }
    }
}

/// Load a user-picked CSV file from disk as the given catalog kind.
pub fn load_path(path: &Path, kind: HardwareKind) -> anyhow::Result<LoadOutcome> {
    let file = std::fs::File::open(path)
        .map_err(LoadError::Io)
        .with_context(|| format!("opening {}", path.display()))?;
    load_reader(kind, file).with_context(|| format!("reading {}", path.display()))
}

/// Parse CSV text from any reader into a [`Catalog`].
///
/// Expected layout: a header row naming the columns (the original dataset's
/// names, e.g. `_id`, `cpu_name`, `cpu_type`, ... / `_id`, `gpu_name`,
/// `type`, ...), one record per subsequent row. Every field is trimmed and
/// blank lines are skipped. Rows missing an identity field (`_id`, name,
/// classification) and rows that fail to deserialize are dropped with a
/// warning; only an unreadable header aborts the load.
pub fn load_reader<R: Read>(kind: HardwareKind, reader: R) -> Result<LoadOutcome, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    // Pull the header eagerly so a truncated or binary source fails here
    // instead of masquerading as a pile of row warnings.
    csv_reader.headers().map_err(LoadError::Header)?;

    let mut records = Vec::new();
    let mut warnings = Vec::new();
    let mut push_warning = |row: usize, message: String| {
        log::warn!("{kind} dataset row {row}: {message}");
        warnings.push(ParseWarning { row, message });
    };

    match kind {
        HardwareKind::Cpu => {
            for (i, result) in csv_reader.deserialize::<RawCpuRow>().enumerate() {
                let row = i + 1;
                match result {
                    Ok(raw) => match raw.into_record() {
                        Ok(record) => records.push(HardwareRecord::Cpu(record)),
                        Err(reason) => push_warning(row, reason),
                    },
                    Err(err) => push_warning(row, err.to_string()),
                }
            }
        }
        HardwareKind::Gpu => {
            for (i, result) in csv_reader.deserialize::<RawGpuRow>().enumerate() {
                let row = i + 1;
                match result {
                    Ok(raw) => match raw.into_record() {
                        Ok(record) => records.push(HardwareRecord::Gpu(record)),
                        Err(reason) => push_warning(row, reason),
                    },
                    Err(err) => push_warning(row, err.to_string()),
                }
            }
        }
    }

    Ok(LoadOutcome {
        catalog: Catalog::from_records(kind, records),
        warnings,
    })
}

// ---------------------------------------------------------------------------
// Raw rows: the all-string CSV shapes
// ---------------------------------------------------------------------------

/// `None` for an empty cell, the trimmed text otherwise.
fn non_empty(s: String) -> Option<String> {
    (!s.is_empty()).then_some(s)
}

/// One CSV row of the CPU dataset, exactly as written. Missing columns
/// deserialize to empty strings; typed conversion happens in
/// [`RawCpuRow::into_record`].
#[derive(Debug, Default, Deserialize)]
struct RawCpuRow {
    #[serde(rename = "_id", default)]
    id: String,
    #[serde(default)]
    cpu_name: String,
    #[serde(default)]
    cpu_type: String,
    #[serde(default)]
    cpu_socket: String,
    #[serde(default)]
    cpu_threads: String,
    #[serde(default)]
    cpu_tdp: String,
    #[serde(default)]
    semiconductor_size: String,
    #[serde(default)]
    total_clock_speed: String,
    #[serde(default)]
    turbo: String,
    #[serde(default)]
    l2_cache: String,
    #[serde(default)]
    l3_cache: String,
    #[serde(default)]
    unlocked_multiplier: String,
    #[serde(default)]
    mem_eec: String,
    #[serde(default)]
    int_graphics: String,
    #[serde(default)]
    ddr_version: String,
    #[serde(default)]
    max_mem_size: String,
    #[serde(default)]
    mem_channels: String,
    #[serde(default)]
    ram_speed_max: String,
    #[serde(default)]
    passmark: String,
    #[serde(default)]
    passmark_s: String,
    #[serde(default)]
    cinebench_r20_multi: String,
    #[serde(default)]
    cinebench_r20_single: String,
    #[serde(default)]
    geekbench6_multi: String,
    #[serde(default)]
    geekbench6_single: String,
}

impl RawCpuRow {
    fn into_record(self) -> Result<CpuRecord, String> {
        if self.id.is_empty() {
            return Err("missing _id".to_string());
        }
        if self.cpu_name.is_empty() {
            return Err(format!("missing cpu_name (_id {})", self.id));
        }
        if self.cpu_type.is_empty() {
            return Err(format!("missing cpu_type (_id {})", self.id));
        }

        let benchmarks = CpuBenchmarks {
            passmark: leading_u32(&self.passmark),
            passmark_single: leading_u32(&self.passmark_s),
            cinebench_r20_multi: leading_u32(&self.cinebench_r20_multi),
            cinebench_r20_single: leading_u32(&self.cinebench_r20_single),
            geekbench6_multi: leading_u32(&self.geekbench6_multi),
            geekbench6_single: leading_u32(&self.geekbench6_single),
        };

        Ok(CpuRecord {
            id: self.id,
            name: self.cpu_name,
            category: self.cpu_type,
            socket: non_empty(self.cpu_socket),
            threads: leading_u32(&self.cpu_threads),
            tdp: non_empty(self.cpu_tdp),
            process_nm: leading_number(&self.semiconductor_size),
            base_clock: non_empty(self.total_clock_speed),
            turbo_clock: non_empty(self.turbo),
            l2_cache_mb: leading_number(&self.l2_cache),
            l3_cache_mb: leading_number(&self.l3_cache),
            unlocked_multiplier: parse_flag(&self.unlocked_multiplier),
            ecc_memory: parse_flag(&self.mem_eec),
            integrated_graphics: parse_flag(&self.int_graphics),
            ddr_version: leading_u32(&self.ddr_version),
            max_memory_gb: leading_number(&self.max_mem_size),
            memory_channels: leading_u32(&self.mem_channels),
            max_memory_speed: leading_u32(&self.ram_speed_max),
            benchmarks,
        })
    }
}

/// One CSV row of the GPU dataset. The columns are display strings with
/// embedded units; they stay verbatim on the record and are only converted
/// at the point of arithmetic.
#[derive(Debug, Default, Deserialize)]
struct RawGpuRow {
    #[serde(rename = "_id", default)]
    id: String,
    #[serde(default)]
    gpu_name: String,
    #[serde(default)]
    brand: String,
    #[serde(rename = "type", default)]
    gpu_type: String,
    #[serde(default)]
    architecture: String,
    #[serde(default)]
    generation: String,
    #[serde(default)]
    foundry: String,
    #[serde(default)]
    process_node: String,
    #[serde(default)]
    die_size: String,
    #[serde(default)]
    transistors: String,
    #[serde(default)]
    base_clock: String,
    #[serde(default)]
    boost_clock: String,
    #[serde(default)]
    memory_size: String,
    #[serde(default)]
    memory_type: String,
    #[serde(default)]
    memory_clock: String,
    #[serde(default)]
    memory_bus: String,
    #[serde(default)]
    bandwidth: String,
    #[serde(default)]
    shading_units: String,
    #[serde(default)]
    rt_cores: String,
    #[serde(default)]
    tensor_cores: String,
    #[serde(default)]
    rops: String,
    #[serde(default)]
    tmus: String,
    #[serde(default)]
    pixel_rate: String,
    #[serde(default)]
    texture_rate: String,
    #[serde(default)]
    fp16: String,
    #[serde(default)]
    fp32: String,
    #[serde(default)]
    fp64: String,
    #[serde(default)]
    tdp: String,
    #[serde(default)]
    power_connectors: String,
    #[serde(default)]
    release_date: String,
    #[serde(default)]
    score: String,
}

impl RawGpuRow {
    fn into_record(self) -> Result<GpuRecord, String> {
        if self.id.is_empty() {
            return Err("missing _id".to_string());
        }
        if self.gpu_name.is_empty() {
            return Err(format!("missing gpu_name (_id {})", self.id));
        }
        if self.gpu_type.is_empty() {
            return Err(format!("missing type (_id {})", self.id));
        }

        Ok(GpuRecord {
            id: self.id,
            name: self.gpu_name,
            brand: self.brand,
            category: self.gpu_type,
            architecture: self.architecture,
            generation: non_empty(self.generation),
            foundry: non_empty(self.foundry),
            process_node: non_empty(self.process_node),
            die_size: non_empty(self.die_size),
            transistors: non_empty(self.transistors),
            base_clock: non_empty(self.base_clock),
            boost_clock: non_empty(self.boost_clock),
            memory_size: non_empty(self.memory_size),
            memory_type: non_empty(self.memory_type),
            memory_clock: non_empty(self.memory_clock),
            memory_bus: non_empty(self.memory_bus),
            bandwidth: non_empty(self.bandwidth),
            shading_units: non_empty(self.shading_units),
            rt_cores: non_empty(self.rt_cores),
            tensor_cores: non_empty(self.tensor_cores),
            rops: non_empty(self.rops),
            tmus: non_empty(self.tmus),
            pixel_rate: non_empty(self.pixel_rate),
            texture_rate: non_empty(self.texture_rate),
            fp16: non_empty(self.fp16),
            fp32: non_empty(self.fp32),
            fp64: non_empty(self.fp64),
            tdp: non_empty(self.tdp),
            power_connectors: non_empty(self.power_connectors),
            release_date: non_empty(self.release_date),
            score: non_empty(self.score),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CPU_HEADER: &str = "_id,cpu_name,cpu_type,cpu_socket,cpu_threads,cpu_tdp,\
semiconductor_size,total_clock_speed,turbo,l2_cache,l3_cache,unlocked_multiplier,\
mem_eec,int_graphics,ddr_version,max_mem_size,mem_channels,ram_speed_max,\
passmark,passmark_s,cinebench_r20_multi,cinebench_r20_single,geekbench6_multi,geekbench6_single";

    fn load_cpu_csv(body: &str) -> LoadOutcome {
        let text = format!("{CPU_HEADER}\n{body}");
        load_reader(HardwareKind::Cpu, text.as_bytes()).unwrap()
    }

    #[test]
    fn parses_and_trims_a_well_formed_row() {
        let outcome = load_cpu_csv(
            "c1,  Ryzen 9 7950X ,desktop,AM5,32,170,5,16 x 4.5 GHz,5.7,16,64,\
true,true,true,5,128,2,5200,63500,4313,15200,773,19800,2950\n",
        );
        assert!(outcome.warnings.is_empty());
        assert_eq!(outcome.catalog.len(), 1);

        let cpu = outcome.catalog.records[0].as_cpu().unwrap();
        assert_eq!(cpu.name, "Ryzen 9 7950X");
        assert_eq!(cpu.threads, Some(32));
        assert_eq!(cpu.process_nm, Some(5.0));
        assert_eq!(cpu.base_clock.as_deref(), Some("16 x 4.5 GHz"));
        assert_eq!(cpu.unlocked_multiplier, Some(true));
        assert_eq!(cpu.benchmarks.passmark, Some(63500));
        assert_eq!(cpu.benchmarks.geekbench6_single, Some(2950));
    }

    #[test]
    fn rows_missing_identity_fields_are_dropped_not_fatal() {
        let outcome = load_cpu_csv(
            "c1,Ryzen 5 7600,desktop,AM5,12,65,,,,,,,,,,,,,,,,,,\n\
             c2,,desktop,AM5,12,65,,,,,,,,,,,,,,,,,,\n\
             c3,Core i5-13400,desktop,LGA1700,16,65,,,,,,,,,,,,,,,,,,\n",
        );
        assert_eq!(outcome.catalog.len(), 2);
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.warnings[0].row, 2);
        assert!(outcome.warnings[0].message.contains("cpu_name"));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let outcome = load_cpu_csv(
            "c1,Ryzen 5 7600,desktop,AM5,12,65,,,,,,,,,,,,,,,,,,\n\
             \n\
             c2,Core i5-13400,desktop,LGA1700,16,65,,,,,,,,,,,,,,,,,,\n",
        );
        assert_eq!(outcome.catalog.len(), 2);
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn ragged_rows_become_warnings_and_the_parse_continues() {
        let outcome = load_cpu_csv(
            "c1,Ryzen 5 7600,desktop\n\
             c2,Core i5-13400,desktop,LGA1700,16,65,,,,,,,,,,,,,,,,,,\n",
        );
        assert_eq!(outcome.catalog.len(), 1);
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.warnings[0].row, 1);
    }

    #[test]
    fn missing_benchmarks_stay_none() {
        let outcome = load_cpu_csv(
            "c1,Apple M3,laptop,,8,,3,4.05 GHz,,,,,,,,,,,,,,,11800,3150\n",
        );
        let cpu = outcome.catalog.records[0].as_cpu().unwrap();
        assert_eq!(cpu.socket, None);
        assert_eq!(cpu.benchmarks.passmark, None);
        assert_eq!(cpu.benchmarks.geekbench6_multi, Some(11800));
    }

    #[test]
    fn gpu_rows_keep_unit_suffixed_cells_verbatim() {
        let text = "_id,gpu_name,brand,type,architecture,memory_size,fp32,tdp,score\n\
                    g1,GeForce RTX 4090,NVIDIA,Desktop,Ada Lovelace,24 GB,82.58 TFLOPS,450 W,\"35,861\"\n";
        let outcome = load_reader(HardwareKind::Gpu, text.as_bytes()).unwrap();
        assert!(outcome.warnings.is_empty());

        let gpu = outcome.catalog.records[0].as_gpu().unwrap();
        assert_eq!(gpu.memory_size.as_deref(), Some("24 GB"));
        assert_eq!(gpu.fp32.as_deref(), Some("82.58 TFLOPS"));
        assert_eq!(gpu.score.as_deref(), Some("35,861"));
        assert_eq!(outcome.catalog.facets, vec!["NVIDIA"]);
    }

    #[test]
    fn unreadable_path_is_a_load_error() {
        let err = load_path(Path::new("/no/such/dataset.csv"), HardwareKind::Cpu).unwrap_err();
        assert!(err.chain().any(|c| c.downcast_ref::<LoadError>().is_some()));
    }

    #[test]
    fn bundled_datasets_parse_cleanly() {
        let cpus = load_bundled(HardwareKind::Cpu);
        assert!(!cpus.catalog.is_empty());
        assert!(cpus.warnings.is_empty(), "{:?}", cpus.warnings);

        let gpus = load_bundled(HardwareKind::Gpu);
        assert!(!gpus.catalog.is_empty());
        assert!(gpus.warnings.is_empty(), "{:?}", gpus.warnings);
    }
}
