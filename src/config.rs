use std::path::PathBuf;

use serde::Deserialize;

/// Top-level Delphi configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct DelphiConfig {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// I/O settings.
    #[serde(default)]
    pub io: IoToml,

    /// Train/test split settings.
    #[serde(default)]
    pub split: SplitToml,

    /// KNN settings.
    #[serde(default)]
    pub knn: KnnToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    /// Path to the delimited input dataset.
    pub input: Option<PathBuf>,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default)]
    pub has_header: bool,
    #[serde(default)]
    pub placeholder: f32,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            input: None,
            delimiter: default_delimiter(),
            has_header: false,
            placeholder: 0.0,
        }
    }
}

fn default_delimiter() -> String {
    ",".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SplitToml {
    #[serde(default = "default_train_fraction")]
    pub train_fraction: f64,
}

impl Default for SplitToml {
    fn default() -> Self {
        Self {
            train_fraction: default_train_fraction(),
        }
    }
}

fn default_train_fraction() -> f64 {
    0.7
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KnnToml {
    #[serde(default = "default_k")]
    pub k: usize,

    /// 0-based index of the label column. Defaults to the last column.
    #[serde(default)]
    pub label_column: Option<usize>,

    /// 0-based indices of the feature columns. Defaults to every column
    /// except the label column; set explicitly to drop id columns.
    #[serde(default)]
    pub feature_columns: Option<Vec<usize>>,
}

impl Default for KnnToml {
    fn default() -> Self {
        Self {
            k: default_k(),
            label_column: None,
            feature_columns: None,
        }
    }
}

fn default_k() -> usize {
    5
}
