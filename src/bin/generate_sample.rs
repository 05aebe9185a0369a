//! Regenerates the bundled datasets in `assets/` from the curated tables
//! below. Run from the repository root:
//!
//! ```text
//! cargo run --bin generate_sample
//! ```

const CPU_HEADER: [&str; 24] = [
    "_id",
    "cpu_name",
    "cpu_type",
    "cpu_socket",
    "cpu_threads",
    "cpu_tdp",
    "semiconductor_size",
    "total_clock_speed",
    "turbo",
    "l2_cache",
    "l3_cache",
    "unlocked_multiplier",
    "mem_eec",
    "int_graphics",
    "ddr_version",
    "max_mem_size",
    "mem_channels",
    "ram_speed_max",
    "passmark",
    "passmark_s",
    "cinebench_r20_multi",
    "cinebench_r20_single",
    "geekbench6_multi",
    "geekbench6_single",
];

#[rustfmt::skip]
const CPU_ROWS: [[&str; 24]; 12] = [
    ["cpu-001", "AMD Ryzen 9 7950X", "desktop", "AM5", "32", "170", "5", "16 x 4.5 GHz", "5.7", "16", "64", "true", "true", "true", "5", "128", "2", "5200", "63024", "4313", "15300", "773", "19870", "2950"],
    ["cpu-002", "Intel Core i9-14900K", "desktop", "LGA1700", "32", "125", "10", "8 x 3.2 & 16 x 2.4 GHz", "6", "32", "36", "true", "false", "true", "5", "192", "2", "5600", "59914", "4705", "15756", "845", "21056", "3096"],
    ["cpu-003", "AMD Ryzen 7 7800X3D", "desktop", "AM5", "16", "120", "5", "8 x 4.2 GHz", "5", "8", "96", "true", "true", "true", "5", "128", "2", "5200", "34386", "3956", "7278", "721", "14683", "2687"],
    ["cpu-004", "Intel Core i5-13400", "desktop", "LGA1700", "16", "65", "10", "6 x 2.5 & 4 x 1.8 GHz", "4.6", "11.5", "20", "false", "false", "true", "5", "192", "2", "4800", "25165", "3597", "5999", "670", "12194", "2389"],
    ["cpu-005", "AMD Ryzen 5 7600", "desktop", "AM5", "12", "65", "5", "6 x 3.8 GHz", "5.1", "6", "32", "true", "true", "true", "5", "128", "2", "5200", "27316", "3945", "6063", "733", "12145", "2649"],
    ["cpu-006", "Intel Core i7-1360P", "laptop", "BGA1744", "16", "28", "10", "4 x 2.2 & 8 x 1.6 GHz", "5", "9", "18", "false", "false", "true", "5", "64", "2", "5200", "17746", "3543", "4509", "657", "11243", "2312"],
    ["cpu-007", "AMD Ryzen 7 7840U", "laptop", "FP8", "16", "28", "4", "8 x 3.3 GHz", "5.1", "8", "16", "false", "false", "true", "5", "64", "2", "5600", "24354", "3813", "5883", "689", "11963", "2483"],
    ["cpu-008", "Apple M3", "laptop", "", "8", "", "3", "4.05 GHz", "", "", "", "false", "false", "true", "", "24", "", "6400", "", "", "", "", "11863", "3076"],
    ["cpu-009", "Intel Core Ultra 7 155H", "laptop", "BGA2049", "22", "28", "7", "6 x 1.4 & 8 x 0.9 GHz", "4.8", "18", "24", "false", "false", "true", "5", "96", "2", "5600", "23964", "3481", "5816", "634", "12506", "2296"],
    ["cpu-010", "AMD Ryzen Threadripper 7980X", "other", "sTR5", "128", "350", "5", "64 x 3.2 GHz", "5.1", "64", "256", "true", "true", "false", "5", "1024", "4", "5200", "137736", "4232", "34563", "748", "25415", "2856"],
    ["cpu-011", "Intel Xeon w9-3495X", "other", "LGA4677", "112", "350", "10", "56 x 1.9 GHz", "4.8", "112", "105", "false", "true", "false", "5", "2048", "8", "4800", "100548", "3459", "24532", "662", "20145", "2365"],
    ["cpu-012", "AMD Ryzen 9 7945HX", "laptop", "FL1", "32", "55", "5", "16 x 2.5 GHz", "5.4", "16", "64", "true", "false", "true", "5", "64", "2", "5200", "52299", "3970", "12673", "731", "17345", "2742"],
];

const GPU_HEADER: [&str; 31] = [
    "_id",
    "gpu_name",
    "brand",
    "type",
    "architecture",
    "generation",
    "foundry",
    "process_node",
    "die_size",
    "transistors",
    "base_clock",
    "boost_clock",
    "memory_size",
    "memory_type",
    "memory_clock",
    "memory_bus",
    "bandwidth",
    "shading_units",
    "rt_cores",
    "tensor_cores",
    "rops",
    "tmus",
    "pixel_rate",
    "texture_rate",
    "fp16",
    "fp32",
    "fp64",
    "tdp",
    "power_connectors",
    "release_date",
    "score",
];

#[rustfmt::skip]
const GPU_ROWS: [[&str; 31]; 11] = [
    ["gpu-001", "NVIDIA GeForce RTX 4090", "NVIDIA", "Desktop", "Ada Lovelace", "GeForce 40", "TSMC", "5 nm", "608 mm²", "76,300 million", "2235 MHz", "2520 MHz", "24 GB", "GDDR6X", "1313 MHz", "384 bit", "1.01 TB/s", "16384", "128", "512", "176", "512", "443.5 GPixel/s", "1290 GTexel/s", "82.58 TFLOPS", "82.58 TFLOPS", "1.29 TFLOPS", "450 W", "1x 16-pin", "Sep 20th, 2022", "35,861"],
    ["gpu-002", "NVIDIA GeForce RTX 4080 SUPER", "NVIDIA", "Desktop", "Ada Lovelace", "GeForce 40", "TSMC", "5 nm", "379 mm²", "45,900 million", "2295 MHz", "2550 MHz", "16 GB", "GDDR6X", "1437 MHz", "256 bit", "736.3 GB/s", "10240", "80", "320", "112", "320", "285.6 GPixel/s", "816 GTexel/s", "52.22 TFLOPS", "52.22 TFLOPS", "816.1 GFLOPS", "320 W", "1x 16-pin", "Jan 8th, 2024", "28,493"],
    ["gpu-003", "NVIDIA GeForce RTX 4070", "NVIDIA", "Desktop", "Ada Lovelace", "GeForce 40", "TSMC", "5 nm", "294 mm²", "35,800 million", "1920 MHz", "2475 MHz", "12 GB", "GDDR6X", "1313 MHz", "192 bit", "504.2 GB/s", "5888", "46", "184", "64", "184", "158.4 GPixel/s", "455.4 GTexel/s", "29.15 TFLOPS", "29.15 TFLOPS", "455.4 GFLOPS", "200 W", "1x 16-pin", "Apr 12th, 2023", "17,919"],
    ["gpu-004", "NVIDIA GeForce RTX 4060", "NVIDIA", "Desktop", "Ada Lovelace", "GeForce 40", "TSMC", "5 nm", "146 mm²", "18,900 million", "1830 MHz", "2460 MHz", "8 GB", "GDDR6", "2125 MHz", "128 bit", "272.0 GB/s", "3072", "24", "96", "48", "96", "118.1 GPixel/s", "236.2 GTexel/s", "15.11 TFLOPS", "15.11 TFLOPS", "236.2 GFLOPS", "115 W", "1x 8-pin", "Jun 29th, 2023", "10,634"],
    ["gpu-005", "AMD Radeon RX 7900 XTX", "AMD", "Desktop", "RDNA 3.0", "Radeon RX 7000", "TSMC", "5 nm", "300 mm²", "57,700 million", "1855 MHz", "2499 MHz", "24 GB", "GDDR6", "2500 MHz", "384 bit", "960 GB/s", "6144", "96", "192", "192", "384", "479.8 GPixel/s", "959.7 GTexel/s", "122.8 TFLOPS", "61.39 TFLOPS", "1.919 TFLOPS", "355 W", "2x 8-pin", "Nov 3rd, 2022", "30,316"],
    ["gpu-006", "AMD Radeon RX 7800 XT", "AMD", "Desktop", "RDNA 3.0", "Radeon RX 7000", "TSMC", "5 nm", "200 mm²", "28,100 million", "1295 MHz", "2430 MHz", "16 GB", "GDDR6", "2425 MHz", "256 bit", "620.8 GB/s", "3840", "60", "120", "96", "240", "233.3 GPixel/s", "583.2 GTexel/s", "74.65 TFLOPS", "37.32 TFLOPS", "1.166 TFLOPS", "263 W", "2x 8-pin", "Aug 25th, 2023", "19,821"],
    ["gpu-007", "AMD Radeon RX 7600", "AMD", "Desktop", "RDNA 3.0", "Radeon RX 7000", "TSMC", "6 nm", "204 mm²", "13,300 million", "1720 MHz", "2655 MHz", "8 GB", "GDDR6", "2250 MHz", "128 bit", "288.0 GB/s", "2048", "32", "64", "64", "128", "169.9 GPixel/s", "339.8 GTexel/s", "43.50 TFLOPS", "21.75 TFLOPS", "679.7 GFLOPS", "165 W", "1x 8-pin", "May 24th, 2023", "10,846"],
    ["gpu-008", "Intel Arc A770", "Intel", "Desktop", "Generation 12.7", "Arc A-series", "TSMC", "6 nm", "406 mm²", "21,700 million", "2100 MHz", "2400 MHz", "16 GB", "GDDR6", "2187 MHz", "256 bit", "559.9 GB/s", "4096", "32", "512", "128", "256", "307.2 GPixel/s", "614.4 GTexel/s", "39.32 TFLOPS", "19.66 TFLOPS", "4.915 TFLOPS", "225 W", "1x 6-pin + 1x 8-pin", "Oct 12th, 2022", "13,692"],
    ["gpu-009", "NVIDIA GeForce RTX 4090 Laptop", "NVIDIA", "Laptop", "Ada Lovelace", "GeForce 40 Mobile", "TSMC", "5 nm", "379 mm²", "45,900 million", "1455 MHz", "2040 MHz", "16 GB", "GDDR6", "2250 MHz", "256 bit", "576.0 GB/s", "9728", "76", "304", "112", "304", "228.5 GPixel/s", "620.2 GTexel/s", "32.98 TFLOPS", "32.98 TFLOPS", "515.4 GFLOPS", "150 W", "", "Jan 3rd, 2023", "21,725"],
    ["gpu-010", "NVIDIA RTX 6000 Ada Generation", "NVIDIA", "Professional", "Ada Lovelace", "Quadro Ada", "TSMC", "5 nm", "608 mm²", "76,300 million", "915 MHz", "2505 MHz", "48 GB", "GDDR6", "2500 MHz", "384 bit", "960.0 GB/s", "18176", "142", "568", "192", "568", "480.9 GPixel/s", "1423 GTexel/s", "91.06 TFLOPS", "91.06 TFLOPS", "1.423 TFLOPS", "300 W", "1x 16-pin", "Dec 3rd, 2022", ""],
    ["gpu-011", "AMD Radeon 780M", "AMD", "Integrated", "RDNA 3.0", "Mobility Radeon", "TSMC", "4 nm", "", "", "800 MHz", "2700 MHz", "", "System Shared", "", "", "System Dependent", "768", "12", "", "32", "48", "43.20 GPixel/s", "129.6 GTexel/s", "16.59 TFLOPS", "8.294 TFLOPS", "259.2 GFLOPS", "15 W", "", "Jan 4th, 2023", ""],
];

fn write_csv<const N: usize>(path: &str, header: &[&str; N], rows: &[[&str; N]]) {
    let mut writer = csv::Writer::from_path(path).expect("Failed to create output file");
    writer.write_record(header).expect("Failed to write header");
    for row in rows {
        writer.write_record(row).expect("Failed to write row");
    }
    writer.flush().expect("Failed to flush writer");
    println!("Wrote {} records to {path}", rows.len());
}

fn main() {
    write_csv("assets/cpu.csv", &CPU_HEADER, &CPU_ROWS);
    write_csv("assets/gpu.csv", &GPU_HEADER, &GPU_ROWS);
}
