//! Dense autoencoder inference.
//!
//! The model is a stack of fully connected layers exported from the trained
//! network. Weights use the kernel layout `weights[input][output]`.

use anomaly_spi::{AnomalyError, ArtifactKind, ReconstructionModel, Result};
use serde::{Deserialize, Serialize};

/// Element-wise activation applied after each dense layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    #[default]
    Linear,
    Relu,
    Sigmoid,
    Tanh,
    Elu,
}

impl Activation {
    pub fn apply(&self, x: f64) -> f64 {
        match self {
            Self::Linear => x,
            Self::Relu => x.max(0.0),
            Self::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Self::Tanh => x.tanh(),
            Self::Elu => {
                if x > 0.0 {
                    x
                } else {
                    x.exp_m1()
                }
            }
        }
    }
}

/// One fully connected layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseLayer {
    pub weights: Vec<Vec<f64>>,
    pub bias: Vec<f64>,
    #[serde(default)]
    pub activation: Activation,
}

impl DenseLayer {
    pub fn new(weights: Vec<Vec<f64>>, bias: Vec<f64>, activation: Activation) -> Self {
        Self {
            weights,
            bias,
            activation,
        }
    }

    pub fn input_dim(&self) -> usize {
        self.weights.len()
    }

    pub fn output_dim(&self) -> usize {
        self.bias.len()
    }

    fn forward(&self, input: &[f64]) -> Vec<f64> {
        let mut out = self.bias.clone();
        for (x, row) in input.iter().zip(&self.weights) {
            for (o, w) in out.iter_mut().zip(row) {
                *o += x * w;
            }
        }
        for o in out.iter_mut() {
            *o = self.activation.apply(*o);
        }
        out
    }

    fn validate(&self, index: usize) -> Result<()> {
        if self.bias.is_empty() || self.weights.is_empty() {
            return Err(invalid(format!("layer {} has no units", index)));
        }
        if let Some(row) = self.weights.iter().position(|r| r.len() != self.bias.len()) {
            return Err(invalid(format!(
                "layer {} weight row {} has {} columns, bias has {}",
                index,
                row,
                self.weights[row].len(),
                self.bias.len()
            )));
        }
        let finite = self
            .weights
            .iter()
            .flatten()
            .chain(&self.bias)
            .all(|v| v.is_finite());
        if !finite {
            return Err(invalid(format!("layer {} has non-finite parameters", index)));
        }
        Ok(())
    }
}

/// Feed-forward autoencoder whose output dimension equals its input dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseAutoencoder {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    input_dim: Option<usize>,
    layers: Vec<DenseLayer>,
}

impl DenseAutoencoder {
    /// Build and validate a model from its layers.
    pub fn new(layers: Vec<DenseLayer>) -> Result<Self> {
        let model = Self {
            input_dim: None,
            layers,
        };
        model.validate()?;
        Ok(model)
    }

    pub fn layers(&self) -> &[DenseLayer] {
        &self.layers
    }

    /// Check that the layers chain and reconstruct their own input size.
    pub fn validate(&self) -> Result<()> {
        let first = self
            .layers
            .first()
            .ok_or_else(|| invalid("model has no layers"))?;
        for (i, layer) in self.layers.iter().enumerate() {
            layer.validate(i)?;
        }
        for (i, pair) in self.layers.windows(2).enumerate() {
            if pair[0].output_dim() != pair[1].input_dim() {
                return Err(invalid(format!(
                    "layer {} outputs {} values but layer {} expects {}",
                    i,
                    pair[0].output_dim(),
                    i + 1,
                    pair[1].input_dim()
                )));
            }
        }
        if let Some(declared) = self.input_dim {
            if declared != first.input_dim() {
                return Err(invalid(format!(
                    "declared input_dim {} but first layer expects {}",
                    declared,
                    first.input_dim()
                )));
            }
        }
        let output_dim = self.layers.last().map(DenseLayer::output_dim).unwrap_or(0);
        if output_dim != first.input_dim() {
            return Err(invalid(format!(
                "output dimension {} does not match input dimension {}",
                output_dim,
                first.input_dim()
            )));
        }
        Ok(())
    }
}

impl ReconstructionModel for DenseAutoencoder {
    fn reconstruct(&self, input: &[f64]) -> Result<Vec<f64>> {
        let expected = self.input_dim();
        if input.len() != expected {
            return Err(AnomalyError::DimensionMismatch {
                stage: "reconstruction",
                expected,
                got: input.len(),
            });
        }
        let mut current = input.to_vec();
        for layer in &self.layers {
            current = layer.forward(&current);
        }
        Ok(current)
    }

    fn input_dim(&self) -> usize {
        self.layers.first().map(DenseLayer::input_dim).unwrap_or(0)
    }

    fn depth(&self) -> usize {
        self.layers.len()
    }
}

fn invalid(reason: impl Into<String>) -> AnomalyError {
    AnomalyError::invalid_artifact(ArtifactKind::Model, reason)
}
