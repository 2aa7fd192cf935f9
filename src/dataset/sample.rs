use crate::dataset::{CropRecord, FertilizerRecord};

/// Crops covered by the synthetic sample dataset, in row order.
pub const SAMPLE_CROPS: [&str; 8] = [
    "rice",
    "maize",
    "chickpea",
    "kidneybeans",
    "pigeonpeas",
    "mothbeans",
    "mungbean",
    "blackgram",
];

/// Synthetic crop rows used when the raw datasets are absent, with soil and
/// weather parameters in realistic ranges.
pub fn sample_crop_records() -> Vec<CropRecord> {
    const N: [f64; 8] = [90.0, 85.0, 95.0, 80.0, 88.0, 92.0, 87.0, 83.0];
    const P: [f64; 8] = [42.0, 38.0, 45.0, 40.0, 43.0, 41.0, 39.0, 44.0];
    const K: [f64; 8] = [43.0, 41.0, 47.0, 39.0, 45.0, 42.0, 40.0, 46.0];
    const TEMPERATURE: [f64; 8] = [20.8, 21.9, 23.0, 22.5, 21.2, 20.5, 22.8, 21.6];
    const HUMIDITY: [f64; 8] = [82.0, 81.5, 83.0, 82.5, 81.8, 82.2, 83.5, 82.8];
    const PH: [f64; 8] = [6.5, 6.8, 6.2, 7.0, 6.7, 6.4, 6.9, 6.6];
    const RAINFALL: [f64; 8] = [202.9, 198.7, 205.3, 190.5, 195.8, 208.2, 192.4, 200.1];

    SAMPLE_CROPS
        .iter()
        .enumerate()
        .map(|(row, label)| CropRecord {
            nitrogen: N[row],
            phosphorus: P[row],
            potassium: K[row],
            temperature: TEMPERATURE[row],
            humidity: HUMIDITY[row],
            ph: PH[row],
            rainfall: RAINFALL[row],
            label: (*label).to_string(),
        })
        .collect()
}

/// Synthetic fertilizer rows matching [`sample_crop_records`] crop for crop.
pub fn sample_fertilizer_records() -> Vec<FertilizerRecord> {
    const TEMPERATURE: [f64; 8] = [22.0, 25.0, 20.0, 22.0, 23.0, 21.0, 24.0, 22.0];
    const HUMIDITY: [f64; 8] = [82.0, 80.0, 75.0, 78.0, 81.0, 76.0, 79.0, 77.0];
    const SOIL: [&str; 8] = [
        "Loamy", "Loamy", "Sandy", "Loamy", "Clay", "Sandy", "Loamy", "Clay",
    ];
    const CROP_TYPE: [&str; 8] = [
        "Cereal", "Cereal", "Pulse", "Pulse", "Pulse", "Pulse", "Pulse", "Pulse",
    ];
    const NITROGEN: [f64; 8] = [80.0, 85.0, 70.0, 75.0, 78.0, 72.0, 82.0, 76.0];
    const POTASSIUM: [f64; 8] = [45.0, 50.0, 40.0, 42.0, 48.0, 38.0, 46.0, 44.0];
    const PHOSPHORUS: [f64; 8] = [35.0, 40.0, 30.0, 32.0, 38.0, 28.0, 36.0, 34.0];

    SAMPLE_CROPS
        .iter()
        .enumerate()
        .map(|(row, crop)| FertilizerRecord {
            crop: (*crop).to_string(),
            temperature: TEMPERATURE[row],
            humidity: HUMIDITY[row],
            moisture: 1.0,
            soil_type: SOIL[row].to_string(),
            crop_type: CROP_TYPE[row].to_string(),
            nitrogen: NITROGEN[row],
            potassium: POTASSIUM[row],
            phosphorus: PHOSPHORUS[row],
        })
        .collect()
}
