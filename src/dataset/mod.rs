pub mod sample;

use crate::error::{CropwiseError, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

pub const RAW_CROP_FILE: &str = "cpdata.csv";
pub const RAW_FERTILIZER_FILE: &str = "Fertilizer.csv";
pub const MERGED_CROP_FILE: &str = "MergeFileCrop.csv";
pub const PROCESSED_FERTILIZER_FILE: &str = "FertilizerData.csv";
pub const MANIFEST_FILE: &str = "manifest.json";

/// Crop name spellings that differ between the raw crop and fertilizer
/// datasets, applied after normalization.
const CROP_RENAMES: &[(&str, &str)] = &[
    ("mungbeans", "mungbean"),
    ("lentils(masoordal)", "lentil"),
    ("pigeonpeas(toordal)", "pigeonpeas"),
    ("mothbean(matki)", "mothbeans"),
    ("chickpeas(channa)", "chickpea"),
];

/// Lower-cases and strips spaces; both datasets and all lookups go through
/// this so "Pearl Millet" and "pearlmillet" collide as intended.
pub fn normalize_crop_name(name: &str) -> String {
    name.to_lowercase().replace(' ', "")
}

fn apply_renames(name: String) -> String {
    CROP_RENAMES
        .iter()
        .find(|(from, _)| *from == name)
        .map(|(_, to)| (*to).to_string())
        .unwrap_or(name)
}

/// One row of the crop agronomy dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropRecord {
    #[serde(rename = "N")]
    pub nitrogen: f64,
    #[serde(rename = "P")]
    pub phosphorus: f64,
    #[serde(rename = "K")]
    pub potassium: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub ph: f64,
    pub rainfall: f64,
    pub label: String,
}

/// One row of the fertilizer dataset. Column names are kept exactly as
/// shipped in the raw file, misspelling and trailing space included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FertilizerRecord {
    #[serde(rename = "Crop")]
    pub crop: String,
    #[serde(rename = "Temparature")]
    pub temperature: f64,
    #[serde(rename = "Humidity ")]
    pub humidity: f64,
    #[serde(rename = "Moisture")]
    pub moisture: f64,
    #[serde(rename = "Soil Type")]
    pub soil_type: String,
    #[serde(rename = "Crop Type")]
    pub crop_type: String,
    #[serde(rename = "Nitrogen")]
    pub nitrogen: f64,
    #[serde(rename = "Potassium")]
    pub potassium: f64,
    #[serde(rename = "Phosphorous")]
    pub phosphorus: f64,
}

/// Per-crop baseline N/P/K amounts before soil and pH adjustment.
#[derive(Debug, Clone, Copy)]
pub struct NpkBaseline {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
}

impl NpkBaseline {
    pub fn new(nitrogen: f64, phosphorus: f64, potassium: f64) -> Self {
        Self {
            nitrogen,
            phosphorus,
            potassium,
        }
    }
}

/// Read-only fertilizer reference table keyed by normalized crop name.
#[derive(Debug, Clone, Default)]
pub struct FertilizerTable {
    rows: HashMap<String, NpkBaseline>,
}

impl FertilizerTable {
    pub fn from_rows(rows: Vec<(String, NpkBaseline)>) -> Self {
        let mut table = HashMap::new();
        for (name, baseline) in rows {
            // First row wins when a crop appears twice.
            table.entry(normalize_crop_name(&name)).or_insert(baseline);
        }
        Self { rows: table }
    }

    fn from_records(records: &[FertilizerRecord]) -> Self {
        Self::from_rows(
            records
                .iter()
                .map(|record| {
                    (
                        record.crop.clone(),
                        NpkBaseline::new(record.nitrogen, record.phosphorus, record.potassium),
                    )
                })
                .collect(),
        )
    }

    pub fn baseline(&self, crop_name: &str) -> Option<&NpkBaseline> {
        self.rows.get(&normalize_crop_name(crop_name.trim()))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Outcome of a `reprocess` run, echoed in the service response.
#[derive(Debug, Clone, Serialize)]
pub struct ReprocessSummary {
    pub common_crops: Vec<String>,
    pub crop_rows: usize,
    pub fertilizer_rows: usize,
    pub synthesized: bool,
}

#[derive(Debug, Serialize)]
struct ProcessManifest {
    generated_at: String,
    tool_version: String,
    files: Vec<ManifestFile>,
}

#[derive(Debug, Serialize)]
struct ManifestFile {
    path: String,
    sha256: String,
}

/// Loads the processed fertilizer table, synthesizing and persisting the
/// sample dataset when no processed file exists. The boolean reports
/// whether synthesis happened, so callers can exit with a warning status.
pub fn load_fertilizer_table(dir: &Path) -> Result<(FertilizerTable, bool)> {
    let processed = dir.join(PROCESSED_FERTILIZER_FILE);
    if !processed.exists() {
        warn!(path = %processed.display(), "processed fertilizer data missing, synthesizing sample dataset");
        let records = synthesize_sample(dir)?;
        return Ok((FertilizerTable::from_records(&records), true));
    }

    let table = FertilizerTable::from_records(&read_fertilizer_records(&processed)?);
    if table.is_empty() {
        warn!(path = %processed.display(), "processed fertilizer data empty, synthesizing sample dataset");
        let records = synthesize_sample(dir)?;
        return Ok((FertilizerTable::from_records(&records), true));
    }

    Ok((table, false))
}

/// Reprocesses the raw crop and fertilizer datasets into the merged
/// reference files: normalize names, reconcile spellings, keep the crops
/// common to both, and persist the filtered rows plus a checksum manifest.
/// Missing or unreadable raw files degrade to the synthetic sample dataset.
pub fn reprocess(dir: &Path) -> Result<ReprocessSummary> {
    fs::create_dir_all(dir).map_err(CropwiseError::Io)?;

    let raw_crop = dir.join(RAW_CROP_FILE);
    let raw_fertilizer = dir.join(RAW_FERTILIZER_FILE);
    if !raw_crop.exists() || !raw_fertilizer.exists() {
        info!("raw datasets not found, creating sample data");
        return synthesize_summary(dir);
    }

    let crops = match read_crop_records(&raw_crop) {
        Ok(rows) if !rows.is_empty() => rows,
        Ok(_) => {
            warn!(path = %raw_crop.display(), "raw crop dataset empty, creating sample data");
            return synthesize_summary(dir);
        }
        Err(error) => {
            warn!(path = %raw_crop.display(), %error, "raw crop dataset unreadable, creating sample data");
            return synthesize_summary(dir);
        }
    };
    let fertilizer = match read_fertilizer_records(&raw_fertilizer) {
        Ok(rows) if !rows.is_empty() => rows,
        Ok(_) => {
            warn!(path = %raw_fertilizer.display(), "raw fertilizer dataset empty, creating sample data");
            return synthesize_summary(dir);
        }
        Err(error) => {
            warn!(path = %raw_fertilizer.display(), %error, "raw fertilizer dataset unreadable, creating sample data");
            return synthesize_summary(dir);
        }
    };

    let crops: Vec<CropRecord> = crops
        .into_iter()
        .map(|mut record| {
            record.label = normalize_crop_name(&record.label);
            record
        })
        .collect();
    let fertilizer: Vec<FertilizerRecord> = fertilizer
        .into_iter()
        .map(|mut record| {
            record.crop = apply_renames(normalize_crop_name(&record.crop));
            record
        })
        .collect();

    let crop_labels: BTreeSet<&str> = crops.iter().map(|record| record.label.as_str()).collect();
    let fertilizer_labels: BTreeSet<&str> =
        fertilizer.iter().map(|record| record.crop.as_str()).collect();
    let common: BTreeSet<String> = crop_labels
        .intersection(&fertilizer_labels)
        .map(|label| label.to_string())
        .collect();

    if common.is_empty() {
        return Err(CropwiseError::Dataset(
            "no crops are common to both raw datasets".to_string(),
        ));
    }

    let merged_crops: Vec<&CropRecord> = crops
        .iter()
        .filter(|record| common.contains(&record.label))
        .collect();
    let merged_fertilizer: Vec<&FertilizerRecord> = fertilizer
        .iter()
        .filter(|record| common.contains(&record.crop))
        .collect();

    write_csv(&dir.join(MERGED_CROP_FILE), &merged_crops)?;
    write_csv(&dir.join(PROCESSED_FERTILIZER_FILE), &merged_fertilizer)?;
    write_manifest(dir)?;
    info!(crops = common.len(), "processed datasets saved");

    Ok(ReprocessSummary {
        common_crops: common.into_iter().collect(),
        crop_rows: merged_crops.len(),
        fertilizer_rows: merged_fertilizer.len(),
        synthesized: false,
    })
}

fn synthesize_summary(dir: &Path) -> Result<ReprocessSummary> {
    let records = synthesize_sample(dir)?;
    Ok(ReprocessSummary {
        common_crops: sample::SAMPLE_CROPS.iter().map(|s| s.to_string()).collect(),
        crop_rows: records.len(),
        fertilizer_rows: records.len(),
        synthesized: true,
    })
}

/// Writes the sample dataset to the processed file locations so subsequent
/// loads succeed, and returns the fertilizer rows.
fn synthesize_sample(dir: &Path) -> Result<Vec<FertilizerRecord>> {
    fs::create_dir_all(dir).map_err(CropwiseError::Io)?;
    let crop_records = sample::sample_crop_records();
    let fertilizer_records = sample::sample_fertilizer_records();
    write_csv(&dir.join(MERGED_CROP_FILE), &crop_records)?;
    write_csv(&dir.join(PROCESSED_FERTILIZER_FILE), &fertilizer_records)?;
    write_manifest(dir)?;
    Ok(fertilizer_records)
}

fn read_crop_records(path: &Path) -> Result<Vec<CropRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

fn read_fertilizer_records(path: &Path) -> Result<Vec<FertilizerRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush().map_err(CropwiseError::Io)?;
    Ok(())
}

/// Records a checksum manifest over every CSV in the data directory, so a
/// later run can tell whether the processed files were tampered with or
/// regenerated.
fn write_manifest(dir: &Path) -> Result<PathBuf> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
    {
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("csv") {
            continue;
        }
        let bytes = fs::read(path).map_err(CropwiseError::Io)?;
        files.push(ManifestFile {
            path: path
                .strip_prefix(dir)
                .unwrap_or(path)
                .to_string_lossy()
                .to_string(),
            sha256: sha256_hex(&bytes),
        });
    }
    files.sort_by(|a, b| a.path.cmp(&b.path));

    let manifest = ProcessManifest {
        generated_at: Utc::now().to_rfc3339(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        files,
    };
    let out_path = dir.join(MANIFEST_FILE);
    let json = serde_json::to_string_pretty(&manifest)?;
    fs::write(&out_path, json).map_err(CropwiseError::Io)?;
    Ok(out_path)
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{digest:x}")
}
