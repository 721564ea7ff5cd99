use serde::Serialize;

use super::GeneratorError;

/// Request parameters for one generation run.
///
/// Fields are signed; `validate` rejects anything outside the documented domain,
/// including values that do not fit a 32-bit `int`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenParams {
    pub width: i64,
    pub height: i64,
    pub radius_max: i64,
    pub how_many: i64,
    pub max_edges: i64,
}

impl GenParams {
    pub fn validate(&self) -> Result<(), GeneratorError> {
        let fields = [
            ("width", self.width),
            ("height", self.height),
            ("radiusMax", self.radius_max),
            ("howMany", self.how_many),
            ("maxEdges", self.max_edges),
        ];
        for (name, value) in fields {
            if value > i64::from(i32::MAX) {
                return Err(GeneratorError::invalid(format!(
                    "{name} must be <= {}, got {value}",
                    i32::MAX
                )));
            }
        }
        if self.width <= 0 {
            return Err(GeneratorError::invalid("width must be > 0"));
        }
        if self.height <= 0 {
            return Err(GeneratorError::invalid("height must be > 0"));
        }
        if self.radius_max <= 0 {
            return Err(GeneratorError::invalid("radiusMax must be > 0"));
        }
        if self.how_many <= 0 {
            return Err(GeneratorError::invalid("howMany must be > 0"));
        }
        if self.max_edges < 3 {
            return Err(GeneratorError::invalid("maxEdges must be >= 3"));
        }
        Ok(())
    }
}
