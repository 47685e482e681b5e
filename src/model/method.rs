use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ReductionMethod {
    #[serde(rename = "Baseline")]
    Baseline,
    #[serde(rename = "Class-wise")]
    ClassWise,
    #[serde(rename = "Reduced")]
    Reduced,
    #[serde(rename = "Class-wise reduced")]
    ClassWiseReduced,
    #[serde(rename = "Weighted Reduced")]
    WeightedReduced,
    #[serde(rename = "Class-wise weighted reduced")]
    ClassWiseWeightedReduced,
}

impl ReductionMethod {
    /// Exact, case-sensitive match against the recognised column names.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "Baseline" => Some(Self::Baseline),
            "Class-wise" => Some(Self::ClassWise),
            "Reduced" => Some(Self::Reduced),
            "Class-wise reduced" => Some(Self::ClassWiseReduced),
            "Weighted Reduced" => Some(Self::WeightedReduced),
            "Class-wise weighted reduced" => Some(Self::ClassWiseWeightedReduced),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Baseline => "Baseline",
            Self::ClassWise => "Class-wise",
            Self::Reduced => "Reduced",
            Self::ClassWiseReduced => "Class-wise reduced",
            Self::WeightedReduced => "Weighted Reduced",
            Self::ClassWiseWeightedReduced => "Class-wise weighted reduced",
        }
    }
}

impl std::fmt::Display for ReductionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn relative_method_order() -> &'static [ReductionMethod] {
    &[
        ReductionMethod::ClassWise,
        ReductionMethod::Reduced,
        ReductionMethod::ClassWiseReduced,
        ReductionMethod::WeightedReduced,
        ReductionMethod::ClassWiseWeightedReduced,
    ]
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/method.rs"]
mod tests;
