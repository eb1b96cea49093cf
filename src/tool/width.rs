use crate::config::SizeRange;
use crate::error::ToolInputError;

/// Turn raw slider text into a tool width.
///
/// Accepts fractional text the way sliders report it (`"7.9"` becomes 7) and
/// clamps the result into `range`.
pub fn parse_tool_width(raw: &str, range: SizeRange) -> Result<u32, ToolInputError> {
    if range.min == 0 || range.min > range.max {
        return Err(ToolInputError::EmptyRange {
            min: range.min,
            max: range.max,
        });
    }

    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ToolInputError::NotANumber(raw.to_owned()))?;
    if !value.is_finite() {
        return Err(ToolInputError::NotANumber(raw.to_owned()));
    }

    let clamped = value.trunc().clamp(f64::from(range.min), f64::from(range.max));
    Ok(clamped as u32)
}
