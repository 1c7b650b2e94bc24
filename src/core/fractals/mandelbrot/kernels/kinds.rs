use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelKind {
    Scalar,
    Grouped4,
    Grouped8,
    Vectorized4,
    Vectorized8,
}

impl KernelKind {
    pub const ALL: &'static [Self] = &[
        Self::Vectorized8,
        Self::Vectorized4,
        Self::Grouped8,
        Self::Grouped4,
        Self::Scalar,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Scalar => "Scalar",
            Self::Grouped4 => "Grouped x4",
            Self::Grouped8 => "Grouped x8",
            Self::Vectorized4 => "Vectorized x4",
            Self::Vectorized8 => "Vectorized x8",
        }
    }

    /// Short name accepted by [`FromStr`].
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Grouped4 => "grouped4",
            Self::Grouped8 => "grouped8",
            Self::Vectorized4 => "vector4",
            Self::Vectorized8 => "vector8",
        }
    }

    #[must_use]
    pub const fn lane_width(self) -> usize {
        match self {
            Self::Scalar => 1,
            Self::Grouped4 | Self::Vectorized4 => 4,
            Self::Grouped8 | Self::Vectorized8 => 8,
        }
    }
}

impl Default for KernelKind {
    fn default() -> Self {
        Self::Vectorized8
    }
}

impl std::fmt::Display for KernelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKernelKind(pub String);

impl std::fmt::Display for UnknownKernelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown kernel kind '{}'", self.0)
    }
}

impl std::error::Error for UnknownKernelKind {}

impl FromStr for KernelKind {
    type Err = UnknownKernelKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();

        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.key() == key)
            .ok_or(UnknownKernelKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(KernelKind::ALL.first(), Some(&KernelKind::default()));
    }

    #[test]
    fn keys_parse_back_to_their_kind() {
        for &kind in KernelKind::ALL {
            assert_eq!(kind.key().parse::<KernelKind>(), Ok(kind));
        }
    }

    #[test]
    fn parse_ignores_case_and_whitespace() {
        assert_eq!(" Vector4 ".parse::<KernelKind>(), Ok(KernelKind::Vectorized4));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(
            "avx512".parse::<KernelKind>(),
            Err(UnknownKernelKind("avx512".to_string()))
        );
    }

    #[test]
    fn lane_widths_match_strategy() {
        assert_eq!(KernelKind::Scalar.lane_width(), 1);
        assert_eq!(KernelKind::Grouped4.lane_width(), 4);
        assert_eq!(KernelKind::Vectorized4.lane_width(), 4);
        assert_eq!(KernelKind::Grouped8.lane_width(), 8);
        assert_eq!(KernelKind::Vectorized8.lane_width(), 8);
    }
}
