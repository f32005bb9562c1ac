/// Two-digit administrative region prefix of an identity code (11–91).
pub type RegionCode = u8;

/// Calendar dates carry no time zone; birth dates and filing dates are
/// compared as plain days.
pub type Day = chrono::NaiveDate;
