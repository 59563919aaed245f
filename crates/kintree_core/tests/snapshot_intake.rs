use kintree_core::{filter_by_status, normalize_records, Person, RawPersonRecord, RecordStatus};

fn decode(payload: &str) -> Vec<RawPersonRecord> {
    serde_json::from_str(payload).unwrap()
}

#[test]
fn numeric_and_string_ids_land_in_one_id_space() {
    let raw = decode(
        r#"[
            {"id": 1, "parentId": null, "spouseId": 2, "fullName": "Ahmad"},
            {"id": "2", "parentId": null, "spouseId": "1", "fullName": "Jamilah"},
            {"id": 3, "parentId": 1, "fullName": "Along"}
        ]"#,
    );

    let people = normalize_records(raw);

    assert_eq!(people[0].id, "1");
    assert_eq!(people[0].spouse_id.as_deref(), Some("2"));
    assert_eq!(people[1].spouse_id.as_deref(), Some("1"));
    assert_eq!(people[2].parent_id.as_deref(), Some("1"));
}

#[test]
fn blank_cells_normalize_to_missing_references() {
    let raw = decode(
        r#"[
            {"id": "1", "parentId": "", "spouseId": 0, "fullName": "Ahmad"},
            {"id": "2", "fullName": "Jamilah"}
        ]"#,
    );

    let people = normalize_records(raw);

    assert_eq!(people[0].parent_id, None);
    assert_eq!(people[0].spouse_id, None);
    assert_eq!(people[1].parent_id, None);
    assert_eq!(people[1].spouse_id, None);
}

#[test]
fn sparse_rows_decode_without_optional_fields() {
    let raw = decode(r#"[{"id": "1", "fullName": "Ahmad"}]"#);
    let people = normalize_records(raw);

    let person = &people[0];
    assert_eq!(person.full_name, "Ahmad");
    assert_eq!(person.nick_name, None);
    assert_eq!(person.gender, None);
    assert_eq!(person.birth_date, None);
    assert_eq!(person.status, None);
    assert!(person.is_active());
}

#[test]
fn wire_shape_round_trips_through_the_person_record() {
    let raw = decode(
        r#"[{
            "id": "3",
            "parentId": "1",
            "spouseId": "8",
            "fullName": "Hazwan Shafiq bin Ahmad",
            "nickName": "Along",
            "gender": "male",
            "birthDate": "1989-08-29",
            "bio": "Tester",
            "photoUrl": "https://example.test/p/3.jpg",
            "status": "active"
        }]"#,
    );

    let person = normalize_records(raw).remove(0);
    let encoded = serde_json::to_value(&person).unwrap();

    assert_eq!(encoded["parentId"], "1");
    assert_eq!(encoded["nickName"], "Along");
    assert_eq!(encoded["gender"], "male");
    assert_eq!(encoded["status"], "active");
}

#[test]
fn active_view_keeps_unmarked_records() {
    let people = vec![
        Person::new("1", "Ahmad").with_status(RecordStatus::Active),
        Person::new("2", "Jamilah"),
        Person::new("3", "Along").with_status(RecordStatus::Inactive),
    ];

    let active = filter_by_status(people, false);
    let ids: Vec<&str> = active.iter().map(|person| person.id.as_str()).collect();
    assert_eq!(ids, ["1", "2"]);
}

#[test]
fn inactive_view_keeps_only_explicitly_inactive_records() {
    let people = vec![
        Person::new("1", "Ahmad").with_status(RecordStatus::Active),
        Person::new("2", "Jamilah"),
        Person::new("3", "Along").with_status(RecordStatus::Inactive),
    ];

    let inactive = filter_by_status(people, true);
    let ids: Vec<&str> = inactive.iter().map(|person| person.id.as_str()).collect();
    assert_eq!(ids, ["3"]);
}
