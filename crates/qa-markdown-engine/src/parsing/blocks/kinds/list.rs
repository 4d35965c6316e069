/// Unordered list item marker.
///
/// Every `- ` line is one item; a run of consecutive item lines forms one
/// list. There is no nesting and no continuation line.
pub struct ListItem;

impl ListItem {
    pub const MARKER: &'static str = "- ";

    pub fn strip_marker(line: &str) -> Option<&str> {
        line.strip_prefix(Self::MARKER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_item() {
        assert_eq!(ListItem::strip_marker("- a"), Some("a"));
        assert_eq!(ListItem::strip_marker("- "), Some(""));
    }

    #[test]
    fn dash_without_space_is_not_an_item() {
        assert_eq!(ListItem::strip_marker("-a"), None);
        assert_eq!(ListItem::strip_marker("---"), None);
    }
}
