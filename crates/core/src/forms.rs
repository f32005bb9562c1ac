//! Form payloads of the desk workflows.
//!
//! - [`LossFilingForm`]: report a lost plate, either by the registered owner
//!   or by someone filing on the owner's behalf.
//! - [`FilingStatusQuery`]: look up the status of an earlier loss filing.
//! - [`PlateReturnForm`]: hand in a plate that was found.
//!
//! Each payload derives [`Validate`]; identity codes, plate numbers and
//! mobile numbers are checked by the custom rules below. Names are limited
//! to 32 characters, remarks to 200 and locations to 100. Call
//! `normalize()` on freshly deserialized input before validating it.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::contact::is_valid_mobile;
use crate::error::CoreError;
use crate::identity_code;
use crate::plate::{is_valid_plate_number, normalize_plate_number};
use crate::types::Day;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Error code attached to an invalid identity-code field.
pub const CODE_IDENTITY: &str = "identity_code";
/// Error code attached to an invalid plate-number field.
pub const CODE_PLATE: &str = "plate_number";
/// Error code attached to an invalid mobile-number field.
pub const CODE_MOBILE: &str = "mobile";
/// Error code for a proxy filing that does not identify the agent.
pub const CODE_AGENT_REQUIRED: &str = "agent_required";
/// Error code for a found date later than today.
pub const CODE_FOUND_IN_FUTURE: &str = "found_in_future";

// ---------------------------------------------------------------------------
// Loss filing
// ---------------------------------------------------------------------------

/// Who is submitting a loss filing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilingKind {
    /// The registered owner files in person.
    Owner,
    /// Someone else files on the owner's behalf and must identify themselves.
    Proxy,
}

/// Report of a lost license plate.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "proxy_filing_names_agent"))]
pub struct LossFilingForm {
    pub filing_kind: FilingKind,
    #[validate(length(min = 1, max = 32))]
    pub owner_name: String,
    #[validate(custom(function = "identity_code_rule"))]
    pub owner_identity_code: String,
    #[validate(length(min = 1, max = 32))]
    pub agent_name: Option<String>,
    #[validate(custom(function = "identity_code_rule"))]
    pub agent_identity_code: Option<String>,
    #[validate(custom(function = "plate_number_rule"))]
    pub plate_number: String,
    #[validate(custom(function = "mobile_rule"))]
    pub contact_phone: String,
    #[validate(length(max = 200))]
    pub remarks: Option<String>,
}

impl LossFilingForm {
    /// Trim free text and canonicalize codes typed by hand.
    pub fn normalize(&mut self) {
        trim_in_place(&mut self.owner_name);
        self.owner_identity_code = normalize_identity_code(&self.owner_identity_code);
        if let Some(name) = self.agent_name.as_mut() {
            trim_in_place(name);
        }
        if let Some(code) = self.agent_identity_code.as_mut() {
            *code = normalize_identity_code(code);
        }
        self.plate_number = normalize_plate_number(&self.plate_number);
        trim_in_place(&mut self.contact_phone);
        if let Some(remarks) = self.remarks.as_mut() {
            trim_in_place(remarks);
        }
    }
}

fn proxy_filing_names_agent(form: &LossFilingForm) -> Result<(), ValidationError> {
    if form.filing_kind != FilingKind::Proxy {
        return Ok(());
    }
    let has_name = form.agent_name.as_deref().is_some_and(|n| !n.is_empty());
    let has_code = form.agent_identity_code.is_some();
    if has_name && has_code {
        Ok(())
    } else {
        Err(rule_error(
            CODE_AGENT_REQUIRED,
            "Proxy filings must give the agent's name and identity code",
        ))
    }
}

// ---------------------------------------------------------------------------
// Status lookup
// ---------------------------------------------------------------------------

/// Lookup of an earlier loss filing by owner identity code and plate.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FilingStatusQuery {
    #[validate(custom(function = "identity_code_rule"))]
    pub identity_code: String,
    #[validate(custom(function = "plate_number_rule"))]
    pub plate_number: String,
}

impl FilingStatusQuery {
    pub fn normalize(&mut self) {
        self.identity_code = normalize_identity_code(&self.identity_code);
        self.plate_number = normalize_plate_number(&self.plate_number);
    }
}

// ---------------------------------------------------------------------------
// Plate return
// ---------------------------------------------------------------------------

/// Hand-in of a plate found by a member of the public.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PlateReturnForm {
    #[validate(length(min = 1, max = 32))]
    pub finder_name: String,
    #[validate(custom(function = "mobile_rule"))]
    pub contact_phone: String,
    #[validate(custom(function = "plate_number_rule"))]
    pub plate_number: String,
    #[validate(length(min = 1, max = 100))]
    pub found_location: String,
    pub found_on: Day,
}

impl PlateReturnForm {
    pub fn normalize(&mut self) {
        trim_in_place(&mut self.finder_name);
        trim_in_place(&mut self.contact_phone);
        self.plate_number = normalize_plate_number(&self.plate_number);
        trim_in_place(&mut self.found_location);
    }

    /// Field rules plus the check that `found_on` is not after `today`.
    ///
    /// `today` is supplied by the caller so the result does not depend on
    /// the host clock.
    pub fn validate_on(&self, today: Day) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };
        if self.found_on > today {
            errors.add(
                "found_on",
                rule_error(CODE_FOUND_IN_FUTURE, "Found date cannot be in the future"),
            );
        }
        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// Run a form's rules and convert violations into [`CoreError::Validation`].
pub fn check<T: Validate>(form: &T) -> Result<(), CoreError> {
    form.validate().map_err(CoreError::from)
}

fn identity_code_rule(code: &str) -> Result<(), ValidationError> {
    if identity_code::validate(code) {
        Ok(())
    } else {
        Err(rule_error(CODE_IDENTITY, "Invalid resident identity code"))
    }
}

fn plate_number_rule(plate: &str) -> Result<(), ValidationError> {
    if is_valid_plate_number(plate) {
        Ok(())
    } else {
        Err(rule_error(CODE_PLATE, "Invalid license plate number"))
    }
}

fn mobile_rule(mobile: &str) -> Result<(), ValidationError> {
    if is_valid_mobile(mobile) {
        Ok(())
    } else {
        Err(rule_error(CODE_MOBILE, "Invalid mobile number"))
    }
}

fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Trim surrounding whitespace and uppercase the code.
pub fn normalize_identity_code(raw: &str) -> String {
    raw.trim().to_uppercase()
}

fn trim_in_place(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::NaiveDate;

    use super::*;

    fn owner_filing() -> LossFilingForm {
        LossFilingForm {
            filing_kind: FilingKind::Owner,
            owner_name: "张三".to_string(),
            owner_identity_code: "110101199003078515".to_string(),
            agent_name: None,
            agent_identity_code: None,
            plate_number: "京A12345".to_string(),
            contact_phone: "13800138000".to_string(),
            remarks: None,
        }
    }

    fn plate_return() -> PlateReturnForm {
        PlateReturnForm {
            finder_name: "李四".to_string(),
            contact_phone: "13912345678".to_string(),
            plate_number: "粤B8K2M9".to_string(),
            found_location: "长安街路口".to_string(),
            found_on: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        }
    }

    fn field_codes(errors: &ValidationErrors, field: &str) -> Vec<String> {
        errors
            .field_errors()
            .get(field)
            .map(|errs| errs.iter().map(|e| e.code.to_string()).collect())
            .unwrap_or_default()
    }

    // -- loss filing --

    #[test]
    fn owner_filing_passes() {
        assert!(owner_filing().validate().is_ok());
    }

    #[test]
    fn invalid_owner_identity_code_is_reported() {
        let mut form = owner_filing();
        form.owner_identity_code = "110101199013078515".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(field_codes(&errors, "owner_identity_code"), vec![CODE_IDENTITY]);
    }

    #[test]
    fn proxy_filing_requires_agent() {
        let mut form = owner_filing();
        form.filing_kind = FilingKind::Proxy;
        let errors = form.validate().unwrap_err();
        assert_eq!(field_codes(&errors, "__all__"), vec![CODE_AGENT_REQUIRED]);

        form.agent_name = Some("王五".to_string());
        form.agent_identity_code = Some("11010519491231002X".to_string());
        assert!(form.validate().is_ok());
    }

    #[test]
    fn normalize_identity_code_uppercases_whole_code() {
        assert_eq!(normalize_identity_code(" 11010519491231002x\t"), "11010519491231002X");
        // Not a valid code; every letter is uppercased, not just the last.
        assert_eq!(normalize_identity_code("x1010519491231002x"), "X1010519491231002X");
    }

    #[test]
    fn proxy_agent_identity_code_is_validated() {
        let mut form = owner_filing();
        form.filing_kind = FilingKind::Proxy;
        form.agent_name = Some("王五".to_string());
        form.agent_identity_code = Some("11010519491231002".to_string());
        let errors = form.validate().unwrap_err();
        assert_eq!(field_codes(&errors, "agent_identity_code"), vec![CODE_IDENTITY]);
    }

    #[test]
    fn name_and_remarks_lengths_are_bounded() {
        let mut form = owner_filing();
        form.owner_name = String::new();
        form.remarks = Some("很".repeat(201));
        let errors = form.validate().unwrap_err();
        assert_eq!(field_codes(&errors, "owner_name"), vec!["length"]);
        assert_eq!(field_codes(&errors, "remarks"), vec!["length"]);
    }

    #[test]
    fn normalize_canonicalizes_hand_typed_input() {
        let mut form = owner_filing();
        form.owner_name = "  张三 ".to_string();
        form.owner_identity_code = " 11010519491231002x".to_string();
        form.plate_number = "京a·12345".to_string();
        form.contact_phone = "13800138000 ".to_string();
        form.normalize();
        assert_eq!(form.owner_name, "张三");
        assert_eq!(form.owner_identity_code, "11010519491231002X");
        assert_eq!(form.plate_number, "京A12345");
        assert_eq!(form.contact_phone, "13800138000");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn loss_filing_deserializes_from_json() {
        let form: LossFilingForm = serde_json::from_value(serde_json::json!({
            "filing_kind": "proxy",
            "owner_name": "张三",
            "owner_identity_code": "110101199003078515",
            "agent_name": "王五",
            "agent_identity_code": "320102198808081237",
            "plate_number": "京A12345",
            "contact_phone": "13800138000"
        }))
        .unwrap();
        assert_eq!(form.filing_kind, FilingKind::Proxy);
        assert!(form.remarks.is_none());
        assert!(form.validate().is_ok());
    }

    // -- status lookup --

    #[test]
    fn status_query_checks_both_fields() {
        let query = FilingStatusQuery {
            identity_code: "99010119900307851x".to_string(),
            plate_number: "京12345".to_string(),
        };
        let errors = query.validate().unwrap_err();
        assert_eq!(field_codes(&errors, "identity_code"), vec![CODE_IDENTITY]);
        assert_eq!(field_codes(&errors, "plate_number"), vec![CODE_PLATE]);
    }

    // -- plate return --

    #[test]
    fn plate_return_passes_on_or_after_found_date() {
        let form = plate_return();
        assert!(form.validate_on(form.found_on).is_ok());
        assert!(form
            .validate_on(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
            .is_ok());
    }

    #[test]
    fn plate_return_rejects_future_found_date() {
        let form = plate_return();
        let errors = form
            .validate_on(NaiveDate::from_ymd_opt(2024, 4, 30).unwrap())
            .unwrap_err();
        assert_eq!(field_codes(&errors, "found_on"), vec![CODE_FOUND_IN_FUTURE]);
    }

    #[test]
    fn plate_return_merges_field_and_date_errors() {
        let mut form = plate_return();
        form.contact_phone = "12345".to_string();
        let errors = form
            .validate_on(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .unwrap_err();
        assert_eq!(field_codes(&errors, "contact_phone"), vec![CODE_MOBILE]);
        assert_eq!(field_codes(&errors, "found_on"), vec![CODE_FOUND_IN_FUTURE]);
    }

    // -- check --

    #[test]
    fn check_maps_to_core_error() {
        let mut form = owner_filing();
        form.plate_number = "bogus".to_string();
        assert_matches!(check(&form), Err(CoreError::Validation(_)));
        assert!(check(&owner_filing()).is_ok());
    }
}
