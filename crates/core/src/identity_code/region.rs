//! Administrative region prefixes accepted in identity codes.

use super::IdentityCodeError;
use crate::types::RegionCode;

/// Every region prefix an identity code may start with, with its name.
///
/// Sorted by code. Static data: there is no way to add or remove entries
/// at runtime.
pub const REGIONS: &[(RegionCode, &str)] = &[
    (11, "北京"),
    (12, "天津"),
    (13, "河北"),
    (14, "山西"),
    (15, "內蒙古"),
    (21, "遼寧"),
    (22, "吉林"),
    (23, "黑龍江"),
    (31, "上海"),
    (32, "江蘇"),
    (33, "浙江"),
    (34, "安徽"),
    (35, "福建"),
    (36, "江西"),
    (37, "山東"),
    (41, "河南"),
    (42, "湖北"),
    (43, "湖南"),
    (44, "廣東"),
    (45, "廣西"),
    (46, "海南"),
    (50, "重慶"),
    (51, "四川"),
    (52, "貴州"),
    (53, "雲南"),
    (54, "西藏"),
    (61, "陝西"),
    (62, "甘肅"),
    (63, "青海"),
    (64, "寧夏"),
    (65, "新疆"),
    (71, "臺灣"),
    (81, "香港"),
    (82, "澳門"),
    (91, "國外"),
];

/// All known regions.
pub fn regions() -> &'static [(RegionCode, &'static str)] {
    REGIONS
}

/// Name of the region keyed by `code`, if it is a known prefix.
pub fn region_name(code: RegionCode) -> Option<&'static str> {
    REGIONS
        .binary_search_by_key(&code, |(c, _)| *c)
        .ok()
        .map(|idx| REGIONS[idx].1)
}

/// Resolve the two-digit prefix of an already digit-checked code.
///
/// Both callers pass two ASCII digits, so the parse never fails for them and
/// the only error they see is `UnknownRegion`.
pub(super) fn lookup(prefix: &str) -> Result<(RegionCode, &'static str), IdentityCodeError> {
    debug_assert!(
        prefix.len() == 2 && prefix.bytes().all(|b| b.is_ascii_digit()),
        "region prefix must be two ASCII digits"
    );
    let code: RegionCode = prefix.parse().map_err(|_| IdentityCodeError::Malformed)?;
    region_name(code)
        .map(|name| (code, name))
        .ok_or(IdentityCodeError::UnknownRegion(code))
}
