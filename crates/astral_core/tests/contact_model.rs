use astral_core::{ChartCompleteness, Contact, ContactValidationError};
use chrono::{NaiveDate, NaiveTime};
use serde_json::json;
use uuid::Uuid;

#[test]
fn contact_new_sets_defaults() {
    let contact = Contact::new("Mira");

    assert!(!contact.id.is_nil());
    assert_eq!(contact.name, "Mira");
    assert_eq!(contact.birth_date, None);
    assert_eq!(contact.birth_time, None);
    assert_eq!(contact.birth_place, None);
    assert_eq!(contact.image, None);
    assert!(!contact.is_favorite);
    assert!(contact.birth_data().is_none());
}

#[test]
fn with_id_validates_identity_and_name() {
    assert_eq!(
        Contact::with_id(Uuid::nil(), "Mira").unwrap_err(),
        ContactValidationError::NilId
    );
    assert_eq!(
        Contact::with_id(Uuid::new_v4(), "   ").unwrap_err(),
        ContactValidationError::EmptyName
    );
}

#[test]
fn contact_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut contact = Contact::with_id(id, "Mira")
        .unwrap()
        .born_on(NaiveDate::from_ymd_opt(1992, 10, 5).unwrap())
        .born_at(NaiveTime::from_hms_opt(18, 15, 0).unwrap())
        .born_in("Lisbon");
    contact.is_favorite = true;

    let json = serde_json::to_value(&contact).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["name"], "Mira");
    assert_eq!(json["birth_date"], "1992-10-05");
    assert_eq!(json["birth_time"], "18:15:00");
    assert_eq!(json["birth_place"], "Lisbon");
    assert_eq!(json["is_favorite"], true);

    let decoded: Contact = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, contact);
}

#[test]
fn deserialization_rejects_invalid_records() {
    let empty_name = json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "name": "  ",
    });
    let err = serde_json::from_value::<Contact>(empty_name).unwrap_err();
    assert!(err.to_string().contains("name must not be empty"));

    let nil_id = json!({
        "id": Uuid::nil().to_string(),
        "name": "Mira",
    });
    assert!(serde_json::from_value::<Contact>(nil_id).is_err());
}

#[test]
fn missing_optional_fields_default() {
    let minimal = json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "name": "Mira",
    });
    let contact: Contact = serde_json::from_value(minimal).unwrap();
    assert_eq!(contact.birth_date, None);
    assert!(!contact.is_favorite);
}

#[test]
fn birth_data_normalizes_blank_place() {
    let contact = Contact::new("Mira")
        .born_on(NaiveDate::from_ymd_opt(1992, 10, 5).unwrap())
        .born_in("   ");
    let birth = contact.birth_data().expect("birth date is set");
    assert_eq!(birth.place, None);
    assert_eq!(
        astral_core::NatalChart::calculate(&birth).completeness,
        ChartCompleteness::SunOnly
    );
}
