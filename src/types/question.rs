use serde::{Deserialize, Deserializer, Serialize};

/// Questions detected on one page image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ScanResult {
    /// Detected questions in the order the model reported them
    pub questions: Vec<Question>,
}

impl ScanResult {
    /// Number of detected questions
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// True when the page contained no questions
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Look up a question by its ordinal. Ordinals are not guaranteed unique;
    /// the first match wins.
    pub fn question(&self, number: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.number == number)
    }
}

/// A single detected question.
///
/// Serializes to the wire shape the model is asked to emit
/// (`{"que":1,"type":"mcq","bbox":[..]}`); the long-form names `number`,
/// `kind` and `boundingBox` are accepted when reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Question ordinal, 1-based. Not guaranteed contiguous or unique.
    #[serde(rename = "que", alias = "number", deserialize_with = "deserialize_ordinal")]
    pub number: u32,
    /// Answer format
    #[serde(rename = "type", alias = "kind")]
    pub kind: QuestionKind,
    /// Region of the page holding the question
    #[serde(rename = "bbox", alias = "boundingBox")]
    pub bounding_box: BoundingBox,
}

/// Answer format of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionKind {
    /// Pick one (or more) of the printed options
    #[serde(rename = "mcq")]
    MultipleChoice,
    /// Numerical answer typed in by the candidate
    #[serde(rename = "nat")]
    NumericAnswer,
}

impl QuestionKind {
    /// Wire value used in model output
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MultipleChoice => "mcq",
            Self::NumericAnswer => "nat",
        }
    }

    /// All wire values, in declaration order
    pub const WIRE_VALUES: [&'static str; 2] = ["mcq", "nat"];
}

impl std::fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pixel-space region `(y_min, x_min, y_max, x_max)`.
///
/// All four values are finite. No ordering between the min and max corners is
/// guaranteed; see [`BoundingBox::is_well_ordered`] and
/// [`BoundingBox::normalized`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 4]", into = "[f64; 4]")]
pub struct BoundingBox {
    pub y_min: f64,
    pub x_min: f64,
    pub y_max: f64,
    pub x_max: f64,
}

impl BoundingBox {
    /// Build a box, rejecting NaN and infinities.
    pub fn new(y_min: f64, x_min: f64, y_max: f64, x_max: f64) -> Option<Self> {
        Self::try_from([y_min, x_min, y_max, x_max]).ok()
    }

    /// Values in wire order
    pub const fn to_array(&self) -> [f64; 4] {
        [self.y_min, self.x_min, self.y_max, self.x_max]
    }

    /// Signed width (`x_max - x_min`)
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Signed height (`y_max - y_min`)
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// True when both min corners are at or before their max corners
    pub fn is_well_ordered(&self) -> bool {
        self.y_min <= self.y_max && self.x_min <= self.x_max
    }

    /// Copy with min/max swapped where the model reported them reversed
    pub fn normalized(&self) -> Self {
        Self {
            y_min: self.y_min.min(self.y_max),
            x_min: self.x_min.min(self.x_max),
            y_max: self.y_min.max(self.y_max),
            x_max: self.x_min.max(self.x_max),
        }
    }
}

impl TryFrom<[f64; 4]> for BoundingBox {
    type Error = String;

    fn try_from(values: [f64; 4]) -> Result<Self, Self::Error> {
        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(format!("bounding box value {bad} is not finite"));
        }
        let [y_min, x_min, y_max, x_max] = values;
        Ok(Self {
            y_min,
            x_min,
            y_max,
            x_max,
        })
    }
}

impl From<BoundingBox> for [f64; 4] {
    fn from(b: BoundingBox) -> Self {
        b.to_array()
    }
}

/// Accepts any JSON number that is a whole value in `1..=u32::MAX`,
/// including float spellings such as `3.0`.
fn deserialize_ordinal<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if !raw.is_finite() || raw.fract() != 0.0 || raw < 1.0 || raw > f64::from(u32::MAX) {
        return Err(serde::de::Error::custom(format!(
            "question number must be a positive integer, got {raw}"
        )));
    }
    Ok(raw as u32)
}
