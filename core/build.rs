use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_mp_regen_map(&out_dir);
    generate_organ_hit_map(&out_dir);
    generate_encounter_set(
        &out_dir,
        "semirare_encounters.csv",
        "semirare_encounters.rs",
        "SEMIRARE_ENCOUNTERS",
    );
    generate_encounter_set(
        &out_dir,
        "bad_moon_encounters.csv",
        "bad_moon_encounters.rs",
        "BAD_MOON_ENCOUNTERS",
    );

    println!("cargo:rerun-if-changed=data/mp_regen_equipment.csv");
    println!("cargo:rerun-if-changed=data/organ_hits.csv");
    println!("cargo:rerun-if-changed=data/semirare_encounters.csv");
    println!("cargo:rerun-if-changed=data/bad_moon_encounters.csv");
}

/// Equipment that regenerates MP every turn it is worn.
/// CSV columns: item name, min regen, max regen.
fn generate_mp_regen_map(out_dir: &str) {
    let csv = fs::read_to_string("data/mp_regen_equipment.csv")
        .expect("failed to read mp_regen_equipment.csv");

    // BTreeMap for deterministic output (sorted by key)
    let mut entries = BTreeMap::new();
    for line in csv.lines().skip(1) {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 3 {
            continue;
        }
        let name = fields[0].trim();
        let min: u32 = match fields[1].trim().parse() {
            Ok(v) => v,
            Err(_) => continue,
        };
        let max: u32 = match fields[2].trim().parse() {
            Ok(v) => v,
            Err(_) => continue,
        };
        entries.entry(name.to_string()).or_insert((min, max));
    }

    let path = Path::new(out_dir).join("mp_regen_equipment.rs");
    let mut file = BufWriter::new(fs::File::create(&path).unwrap());

    let mut builder = phf_codegen::Map::new();
    let quoted: Vec<_> = entries
        .iter()
        .map(|(name, (min, max))| (name.clone(), format!("({}u32, {}u32)", min, max)))
        .collect();
    for (name, value) in &quoted {
        builder.entry(name.as_str(), value);
    }

    writeln!(
        file,
        "pub static EQUIPMENT_MP_REGEN: phf::Map<&'static str, (u32, u32)> = {};",
        builder.build()
    )
    .unwrap();
}

/// One encounter name per line, header row skipped.
fn generate_encounter_set(out_dir: &str, csv_name: &str, rs_name: &str, static_name: &str) {
    let csv_path = Path::new("data").join(csv_name);
    let csv = fs::read_to_string(&csv_path)
        .unwrap_or_else(|_| panic!("failed to read {}", csv_name));

    let mut names: Vec<String> = csv
        .lines()
        .skip(1)
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();
    names.sort();
    names.dedup();

    let path = Path::new(out_dir).join(rs_name);
    let mut file = BufWriter::new(fs::File::create(&path).unwrap());

    let mut builder = phf_codegen::Set::new();
    for name in &names {
        builder.entry(name.as_str());
    }

    writeln!(
        file,
        "pub static {}: phf::Set<&'static str> = {};",
        static_name,
        builder.build()
    )
    .unwrap();
}

/// Organ capacity cost per consumable.
/// CSV columns: item name, organ (fullness/drunkenness/spleen), size.
fn generate_organ_hit_map(out_dir: &str) {
    let csv = fs::read_to_string("data/organ_hits.csv").expect("failed to read organ_hits.csv");

    let mut entries = BTreeMap::new();
    for line in csv.lines().skip(1) {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 3 {
            continue;
        }
        let name = fields[0].trim();
        let size: u32 = match fields[2].trim().parse() {
            Ok(v) => v,
            Err(_) => continue,
        };
        entries.entry(name.to_string()).or_insert(size);
    }

    let path = Path::new(out_dir).join("organ_hits.rs");
    let mut file = BufWriter::new(fs::File::create(&path).unwrap());

    let mut builder = phf_codegen::Map::new();
    let values: Vec<_> = entries
        .iter()
        .map(|(name, size)| (name.clone(), format!("{}u32", size)))
        .collect();
    for (name, value) in &values {
        builder.entry(name.as_str(), value);
    }

    writeln!(
        file,
        "pub static ORGAN_HITS: phf::Map<&'static str, u32> = {};",
        builder.build()
    )
    .unwrap();
}
