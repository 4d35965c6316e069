use crate::parsing::blocks::types::HeadingLevel;

/// ATX-style heading markers, levels 1 to 3 only.
pub struct Heading;

impl Heading {
    /// Markers in level order. Each requires its trailing space.
    pub const MARKERS: [(&'static str, HeadingLevel); 3] = [
        ("# ", HeadingLevel::H1),
        ("## ", HeadingLevel::H2),
        ("### ", HeadingLevel::H3),
    ];

    /// Strips a heading marker, returning the level and the remaining text.
    pub fn strip_marker(line: &str) -> Option<(HeadingLevel, &str)> {
        Self::MARKERS.iter().find_map(|(marker, level)| {
            line.strip_prefix(marker).map(|rest| (*level, rest))
        })
    }
}
