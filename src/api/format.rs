use crate::api::mgrs::Mgrs;
use serde::{Deserialize, Serialize};

/// Display options for MGRS strings.
///
/// Formatting is an explicit value handed to each call; the codec itself
/// carries no presentation state.
///
/// # Example
///
/// ```
/// use mgrs_rs::{Mgrs, MgrsFormat, format_mgrs};
///
/// # fn main() -> Result<(), mgrs_rs::MgrsError> {
/// let mgrs = Mgrs::from_latlon(38.8895, -77.0352, 5)?;
/// let format = MgrsFormat::new().with_spaces();
/// assert_eq!(format_mgrs(&mgrs, &format), "18S UJ 23486 06483");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MgrsFormat {
    /// Separate the zone designator, square letters and digit groups with spaces
    pub add_spaces: bool,
    /// Literal text prepended to the output
    pub prefix: String,
    /// Literal text appended to the output
    pub suffix: String,
}

impl MgrsFormat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_spaces(mut self) -> Self {
        self.add_spaces = true;
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }
}

/// Renders a reference according to the given display options.
pub fn format_mgrs(mgrs: &Mgrs, format: &MgrsFormat) -> String {
    let body = if format.add_spaces {
        spaced(mgrs)
    } else {
        mgrs.to_string()
    };
    format!("{}{}{}", format.prefix, body, format.suffix)
}

fn spaced(mgrs: &Mgrs) -> String {
    let mut out = String::new();
    if mgrs.zone > 0 {
        out.push_str(&format!("{:02}", mgrs.zone));
    }
    out.push(mgrs.band);
    if let Some([col, row]) = mgrs.square {
        out.push(' ');
        out.push(col);
        out.push(row);
        if mgrs.precision > 0 {
            let div = 10u32.pow((5 - mgrs.precision) as u32);
            let width = mgrs.precision as usize;
            out.push_str(&format!(
                " {:0width$} {:0width$}",
                mgrs.easting / div,
                mgrs.northing / div,
                width = width
            ));
        }
    }
    out
}

impl Mgrs {
    /// Renders this reference according to the given display options.
    pub fn format(&self, format: &MgrsFormat) -> String {
        format_mgrs(self, format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::error::MgrsError;

    #[test]
    fn test_compact_by_default() -> Result<(), MgrsError> {
        let mgrs = Mgrs::from_latlon(38.8895, -77.0352, 5)?;
        assert_eq!(format_mgrs(&mgrs, &MgrsFormat::new()), "18SUJ2348606483");
        Ok(())
    }

    #[test]
    fn test_spaced_groups() -> Result<(), MgrsError> {
        let mgrs = Mgrs::from_latlon(38.8895, -77.0352, 5)?;
        assert_eq!(mgrs.format(&MgrsFormat::new().with_spaces()), "18S UJ 23486 06483");

        let coarse = Mgrs::from_latlon(38.8895, -77.0352, 0)?;
        assert_eq!(coarse.format(&MgrsFormat::new().with_spaces()), "18S UJ");
        Ok(())
    }

    #[test]
    fn test_spaced_polar_reference() -> Result<(), MgrsError> {
        let mgrs = Mgrs::from_latlon(87.5, 45.0, 5)?;
        assert_eq!(mgrs.format(&MgrsFormat::new().with_spaces()), "Z BF 96294 03705");
        Ok(())
    }

    #[test]
    fn test_prefix_and_suffix() -> Result<(), MgrsError> {
        let mgrs = Mgrs::from_latlon(61.0, 5.0, 2)?;
        let format = MgrsFormat::new().prefix("MGRS: ").suffix(" (WGS84)");
        assert_eq!(mgrs.format(&format), "MGRS: 32VKN8369 (WGS84)");
        Ok(())
    }

    #[test]
    fn test_spaced_output_parses_back() -> Result<(), MgrsError> {
        let mgrs = Mgrs::from_latlon(-33.8688, 151.2093, 4)?;
        let shown = mgrs.format(&MgrsFormat::new().with_spaces());
        assert_eq!(shown.parse::<Mgrs>()?, mgrs);
        Ok(())
    }

    #[test]
    fn test_bare_zone_designator() -> Result<(), MgrsError> {
        let m: Mgrs = "18S".parse()?;
        assert_eq!(m.format(&MgrsFormat::new().with_spaces()), "18S");
        Ok(())
    }
}
