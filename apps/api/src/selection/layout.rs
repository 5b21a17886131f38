use serde::{Deserialize, Serialize};

/// Layout shape implied by how many items a section holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutHint {
    Row,
    Grid,
    Carousel,
}

impl LayoutHint {
    /// < 3 items → Row, < 9 → Grid, otherwise Carousel.
    pub fn for_count(count: usize) -> Self {
        match count {
            0..=2 => LayoutHint::Row,
            3..=8 => LayoutHint::Grid,
            _ => LayoutHint::Carousel,
        }
    }
}

/// How tightly the whole page is packed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageDensity {
    Airy,
    Balanced,
    Dense,
}

impl PageDensity {
    pub fn assess(section_count: usize, total_items: usize) -> Self {
        if section_count >= 9 || total_items >= 40 {
            PageDensity::Dense
        } else if section_count <= 4 && total_items < 12 {
            PageDensity::Airy
        } else {
            PageDensity::Balanced
        }
    }

    /// Vertical padding of each generated `<section>`.
    pub fn section_spacing(&self) -> &'static str {
        match self {
            PageDensity::Airy => "7rem",
            PageDensity::Balanced => "5rem",
            PageDensity::Dense => "3rem",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PageDensity::Airy => "airy",
            PageDensity::Balanced => "balanced",
            PageDensity::Dense => "dense",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_thresholds() {
        assert_eq!(LayoutHint::for_count(0), LayoutHint::Row);
        assert_eq!(LayoutHint::for_count(2), LayoutHint::Row);
        assert_eq!(LayoutHint::for_count(3), LayoutHint::Grid);
        assert_eq!(LayoutHint::for_count(8), LayoutHint::Grid);
        assert_eq!(LayoutHint::for_count(9), LayoutHint::Carousel);
        assert_eq!(LayoutHint::for_count(50), LayoutHint::Carousel);
    }

    #[test]
    fn test_density() {
        assert_eq!(PageDensity::assess(3, 5), PageDensity::Airy);
        assert_eq!(PageDensity::assess(4, 12), PageDensity::Balanced);
        assert_eq!(PageDensity::assess(6, 20), PageDensity::Balanced);
        assert_eq!(PageDensity::assess(9, 10), PageDensity::Dense);
        assert_eq!(PageDensity::assess(5, 40), PageDensity::Dense);
    }
}
