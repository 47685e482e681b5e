use serde::{Deserialize, Serialize};

/// Mean and sample standard deviation of the scores sharing one
/// (row key, reduction method) pair.
///
/// Non-finite values serialize as the tokens `"nan"`, `"inf"` and `"-inf"`,
/// so `std: null` always means insufficient data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreStats {
    #[serde(with = "float_token")]
    pub mean: f64,
    /// `None` when fewer than two non-NaN scores were observed.
    #[serde(with = "optional_float_token")]
    pub std: Option<f64>,
    /// Non-NaN scores only.
    pub count: usize,
}

impl ScoreStats {
    /// Returns `None` for an empty slice.
    ///
    /// NaN scores are skipped. A group made only of NaN keeps `mean = NaN`,
    /// `std = None` and `count = 0`. Scores are summed in ascending order so the
    /// result does not depend on the order rows arrived in.
    pub fn from_scores(scores: &[f64]) -> Option<Self> {
        if scores.is_empty() {
            return None;
        }
        let mut sorted: Vec<f64> = scores.iter().copied().filter(|v| !v.is_nan()).collect();
        sorted.sort_by(f64::total_cmp);

        let n = sorted.len();
        if n == 0 {
            return Some(Self {
                mean: f64::NAN,
                std: None,
                count: 0,
            });
        }

        let mean = sorted.iter().sum::<f64>() / n as f64;
        let std = if n < 2 {
            None
        } else {
            let ss: f64 = sorted.iter().map(|v| (v - mean) * (v - mean)).sum();
            Some((ss / (n - 1) as f64).sqrt())
        };

        Some(Self {
            mean,
            std,
            count: n,
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrToken {
    Number(f64),
    Token(String),
}

impl NumberOrToken {
    fn into_f64(self) -> Option<f64> {
        match self {
            NumberOrToken::Number(v) => Some(v),
            NumberOrToken::Token(t) => match t.as_str() {
                "nan" => Some(f64::NAN),
                "inf" => Some(f64::INFINITY),
                "-inf" => Some(f64::NEG_INFINITY),
                _ => None,
            },
        }
    }
}

fn non_finite_token(v: f64) -> &'static str {
    if v.is_nan() {
        "nan"
    } else if v > 0.0 {
        "inf"
    } else {
        "-inf"
    }
}

mod float_token {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{NumberOrToken, non_finite_token};

    pub fn serialize<S: Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
        if v.is_finite() {
            s.serialize_f64(*v)
        } else {
            s.serialize_str(non_finite_token(*v))
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        NumberOrToken::deserialize(d)?
            .into_f64()
            .ok_or_else(|| D::Error::custom("expected a number, \"nan\", \"inf\" or \"-inf\""))
    }
}

mod optional_float_token {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::NumberOrToken;

    pub fn serialize<S: Serializer>(v: &Option<f64>, s: S) -> Result<S::Ok, S::Error> {
        match v {
            Some(v) => super::float_token::serialize(v, s),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        match Option::<NumberOrToken>::deserialize(d)? {
            Some(raw) => raw.into_f64().map(Some).ok_or_else(|| {
                D::Error::custom("expected null, a number, \"nan\", \"inf\" or \"-inf\"")
            }),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/stats.rs"]
mod tests;
