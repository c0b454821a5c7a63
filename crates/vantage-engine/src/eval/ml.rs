//! Logistic-regression win-probability bridge.
//!
//! Loads a pre-trained [`LogRegModel`] from a coefficient file and blends its
//! win-probability-derived centipawn estimate with the handcrafted
//! evaluator. Any failure along this path — missing file, malformed JSON,
//! unknown feature set, shape mismatch — is swallowed and the handcrafted
//! score is returned unchanged; this bridge never produces a fatal error.

use std::path::Path;

use chess::{Color, Piece};
use serde::Deserialize;

use super::handcrafted::HandcraftedEval;
use super::Evaluator;
use crate::board::GameState;
use crate::error::EngineError;

const EPSILON: f64 = 1e-6;
const DEFAULT_CP_SCALE: i32 = 1200;
/// Default blend weight applied to the ML-derived centipawn estimate.
pub const DEFAULT_ALPHA: f64 = 0.35;

/// On-disk shape of a coefficient file, per the `material5`-producing
/// training pipeline: a flat JSON object with the fields below.
#[derive(Debug, Deserialize)]
struct CoefficientFile {
    feature_set: String,
    #[serde(default)]
    feature_names: Option<Vec<String>>,
    w: Vec<f64>,
    b: f64,
    #[serde(default)]
    cp_scale: Option<i32>,
    #[allow(dead_code)]
    #[serde(default)]
    note: Option<String>,
}

/// A loaded logistic-regression model mapping position features to a
/// win-probability, then to a centipawn estimate.
#[derive(Debug, Clone)]
pub struct LogRegModel {
    feature_set: String,
    #[allow(dead_code)]
    feature_names: Vec<String>,
    w: Vec<f64>,
    b: f64,
    cp_scale: i32,
}

impl LogRegModel {
    /// Load a model from a coefficient file. Returns `None` on any failure
    /// — this function never propagates an error, mirroring the bridge's
    /// graceful-fallback contract.
    pub fn load(path: impl AsRef<Path>) -> Option<LogRegModel> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).ok()?;
        let raw: CoefficientFile = serde_json::from_str(&text).ok()?;
        let feature_names = raw
            .feature_names
            .unwrap_or_else(|| feature_names_for(&raw.feature_set).unwrap_or_default());
        if !feature_names.is_empty() && feature_names.len() != raw.w.len() {
            return None;
        }
        Some(LogRegModel {
            feature_set: raw.feature_set,
            feature_names,
            w: raw.w,
            b: raw.b,
            cp_scale: raw.cp_scale.unwrap_or(DEFAULT_CP_SCALE),
        })
    }

    /// Predict a win probability for `state`, or `None` if the feature
    /// vector length disagrees with the weight vector (`FeatureMismatch`).
    pub fn predict_wp(&self, state: &GameState) -> Result<f64, EngineError> {
        let x = extract_features(&self.feature_set, state)
            .ok_or_else(|| EngineError::UnknownFeatureSet(self.feature_set.clone()))?;
        if x.len() != self.w.len() {
            return Err(EngineError::ShapeMismatch {
                weights: self.w.len(),
                names: x.len(),
            });
        }
        let z: f64 = x.iter().zip(&self.w).map(|(xi, wi)| xi * wi).sum::<f64>() + self.b;
        Ok(sigmoid(z))
    }

    /// Map a win probability to a centipawn estimate via inverse-sigmoid
    /// (log-odds) scaling.
    pub fn wp_to_cp(&self, p: f64) -> i32 {
        let p = p.clamp(EPSILON, 1.0 - EPSILON);
        (self.cp_scale as f64 * (p / (1.0 - p)).ln()).round() as i32
    }
}

/// Numerically stable logistic sigmoid, clamped to `[eps, 1-eps]`.
fn sigmoid(z: f64) -> f64 {
    let p = if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let ez = z.exp();
        ez / (1.0 + ez)
    };
    p.clamp(EPSILON, 1.0 - EPSILON)
}

/// Feature names for a known feature set, in training column order.
fn feature_names_for(feature_set: &str) -> Option<Vec<String>> {
    match feature_set {
        "material5" => Some(
            ["pawn", "bishop", "rook", "knight", "queen"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        ),
        _ => None,
    }
}

/// Extract a feature vector for `feature_set` from `state`.
///
/// `material5` is the only required set: signed piece-count differences
/// (White - Black), ordered pawn, bishop, rook, knight, queen. This order
/// is non-alphabetical and must match the training pipeline's column order
/// bit-exactly — it is not a bug to "fix".
fn extract_features(feature_set: &str, state: &GameState) -> Option<Vec<f64>> {
    match feature_set {
        "material5" => {
            let board = state.board();
            let diff = |p: Piece| -> f64 {
                let white = (board.pieces(p) & board.color_combined(Color::White)).popcnt();
                let black = (board.pieces(p) & board.color_combined(Color::Black)).popcnt();
                white as f64 - black as f64
            };
            Some(vec![
                diff(Piece::Pawn),
                diff(Piece::Bishop),
                diff(Piece::Rook),
                diff(Piece::Knight),
                diff(Piece::Queen),
            ])
        }
        _ => None,
    }
}

/// Evaluator blending [`HandcraftedEval`] with an optional [`LogRegModel`].
///
/// Falls back to the handcrafted score unchanged whenever the model is
/// absent or prediction fails for any reason.
pub struct BlendedEval {
    handcrafted: HandcraftedEval,
    model: Option<LogRegModel>,
    alpha: f64,
}

impl BlendedEval {
    /// Build a blended evaluator. `coeff_path = None` or a load failure at
    /// `Some(path)` both degrade gracefully to handcrafted-only scoring.
    pub fn new(coeff_path: Option<&Path>, alpha: f64) -> Self {
        let model = coeff_path.and_then(LogRegModel::load);
        Self {
            handcrafted: HandcraftedEval::new(),
            model,
            alpha,
        }
    }
}

impl Evaluator for BlendedEval {
    fn evaluate(&self, state: &GameState) -> i32 {
        let hc = self.handcrafted.evaluate(state);
        let Some(model) = &self.model else {
            return hc;
        };
        let Ok(wp) = model.predict_wp(state) else {
            return hc;
        };
        let cp_ml = model.wp_to_cp(wp);
        ((1.0 - self.alpha) * hc as f64 + self.alpha * cp_ml as f64).round() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_model() -> LogRegModel {
        LogRegModel {
            feature_set: "material5".to_string(),
            feature_names: vec![
                "pawn".into(),
                "bishop".into(),
                "rook".into(),
                "knight".into(),
                "queen".into(),
            ],
            w: vec![0.1, 0.3, 0.5, 0.3, 0.9],
            b: 0.0,
            cp_scale: 1200,
        }
    }

    #[test]
    fn sigmoid_stable_for_large_z() {
        assert!(sigmoid(100.0) <= 1.0 - EPSILON);
        assert!(sigmoid(-100.0) >= EPSILON);
    }

    #[test]
    fn sigmoid_monotonic() {
        assert!(sigmoid(1.0) > sigmoid(0.0));
        assert!(sigmoid(0.0) > sigmoid(-1.0));
    }

    #[test]
    fn wp_to_cp_midpoint_is_zero() {
        let model = toy_model();
        assert_eq!(model.wp_to_cp(0.5), 0);
    }

    #[test]
    fn wp_to_cp_monotonic_in_p() {
        let model = toy_model();
        assert!(model.wp_to_cp(0.6) > model.wp_to_cp(0.5));
        assert!(model.wp_to_cp(0.4) < model.wp_to_cp(0.5));
    }

    #[test]
    fn load_missing_file_returns_none() {
        assert!(LogRegModel::load("/nonexistent/coeffs.json").is_none());
    }

    #[test]
    fn load_shape_mismatch_returns_none() {
        let dir = std::env::temp_dir();
        let path = dir.join("vantage_bad_coeffs_test.json");
        std::fs::write(
            &path,
            r#"{"feature_set":"material5","feature_names":["pawn","bishop"],"w":[0.1,0.2,0.3],"b":0.0}"#,
        )
        .unwrap();
        assert!(LogRegModel::load(&path).is_none());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn blended_falls_back_without_model() {
        let state = GameState::starting_position();
        let eval = BlendedEval::new(None, DEFAULT_ALPHA);
        let hc = HandcraftedEval::new();
        assert_eq!(eval.evaluate(&state), hc.evaluate(&state));
    }

    #[test]
    fn blended_falls_back_on_missing_coeff_file() {
        let state = GameState::starting_position();
        let eval = BlendedEval::new(Some(Path::new("/nonexistent")), DEFAULT_ALPHA);
        let hc = HandcraftedEval::new();
        assert_eq!(eval.evaluate(&state), hc.evaluate(&state));
    }
}
