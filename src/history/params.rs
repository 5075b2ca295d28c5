/// Bucket size of a price-history query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Interval {
    M1,
    M5,
    M15,
    M30,
    H1,
    H2,
    /// Six-hour buckets, the interval the data source uses.
    #[default]
    H6,
    H12,
    D1,
}

impl Interval {
    /// The wire value of the `interval` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Interval::M1 => "m1",
            Interval::M5 => "m5",
            Interval::M15 => "m15",
            Interval::M30 => "m30",
            Interval::H1 => "h1",
            Interval::H2 => "h2",
            Interval::H6 => "h6",
            Interval::H12 => "h12",
            Interval::D1 => "d1",
        }
    }
}
