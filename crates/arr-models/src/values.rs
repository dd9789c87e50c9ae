use serde::{Deserialize, Serialize};

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Round to two decimal places, the precision every derived figure is reported with
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A size in bytes
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileSize(u64);

impl FileSize {
    pub fn from_bytes(bytes: u64) -> Self {
        Self(bytes)
    }

    pub fn bytes(&self) -> u64 {
        self.0
    }

    /// Size in GiB, rounded to two decimals
    pub fn as_gb(&self) -> f64 {
        round2(self.0 as f64 / BYTES_PER_GB)
    }
}

impl std::ops::Add for FileSize {
    type Output = FileSize;

    fn add(self, rhs: FileSize) -> FileSize {
        FileSize(self.0.saturating_add(rhs.0))
    }
}

impl std::iter::Sum for FileSize {
    fn sum<I: Iterator<Item = FileSize>>(iter: I) -> Self {
        iter.fold(FileSize::default(), |acc, size| acc + size)
    }
}

/// Completion percentage in the range 0..=100, two decimals
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Progress(f64);

impl Progress {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage.is_nan() {
            return Self(0.0);
        }
        Self(round2(percentage.clamp(0.0, 100.0)))
    }

    /// Progress of a transfer of `size` bytes with `size_left` bytes outstanding.
    /// A zero-sized transfer reports 0.
    pub fn from_sizes(size: f64, size_left: f64) -> Self {
        if size > 0.0 {
            Self::from_percentage((size - size_left) / size * 100.0)
        } else {
            Self(0.0)
        }
    }

    pub fn percentage(&self) -> f64 {
        self.0
    }

    pub fn is_complete(&self) -> bool {
        self.0 >= 100.0
    }
}
