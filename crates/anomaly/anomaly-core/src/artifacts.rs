//! Startup artifact loading.
//!
//! Every failure here is fatal: the caller must not serve traffic if any of
//! the three artifacts cannot be read, parsed or validated.

use std::fs;
use std::path::Path;

use anomaly_api::ArtifactConfig;
use anomaly_spi::{AnomalyError, ArtifactKind, Result};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::autoencoder::DenseAutoencoder;
use crate::scaler::ScalerArtifact;
use crate::threshold::ThresholdArtifact;

/// Reads the model, scaler and threshold described by an [`ArtifactConfig`].
#[derive(Debug, Clone)]
pub struct ArtifactLoader {
    config: ArtifactConfig,
}

impl ArtifactLoader {
    pub fn new(config: ArtifactConfig) -> Self {
        Self { config }
    }

    pub fn load_model(&self) -> Result<DenseAutoencoder> {
        let model: DenseAutoencoder = self.read_json(ArtifactKind::Model)?;
        model.validate()?;
        Ok(model)
    }

    pub fn load_scaler(&self) -> Result<ScalerArtifact> {
        let scaler: ScalerArtifact = self.read_json(ArtifactKind::Scaler)?;
        scaler.validate()?;
        Ok(scaler)
    }

    pub fn load_threshold(&self) -> Result<f64> {
        let threshold: ThresholdArtifact = self.read_json(ArtifactKind::Threshold)?;
        threshold.validate()
    }

    fn read_json<T: DeserializeOwned>(&self, kind: ArtifactKind) -> Result<T> {
        let path = self.config.path(kind);
        debug!(artifact = %kind, path = %path.display(), "reading artifact");
        let value = read_json_file(kind, &path)?;
        info!(artifact = %kind, path = %path.display(), "artifact loaded");
        Ok(value)
    }
}

fn read_json_file<T: DeserializeOwned>(kind: ArtifactKind, path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).map_err(|source| AnomalyError::ArtifactIo {
        artifact: kind,
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| AnomalyError::ArtifactFormat {
        artifact: kind,
        path: path.to_path_buf(),
        source,
    })
}
