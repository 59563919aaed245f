use kintree_core::{build_forest, select_family, Person};

fn person(id: &str, name: &str) -> Person {
    Person::new(id, name)
}

fn ids(people: &[Person]) -> Vec<&str> {
    people.iter().map(|person| person.id.as_str()).collect()
}

/// Three generations: 1 (spouse 2) -> 3 (spouse 8) -> 5.
fn three_generations() -> Vec<Person> {
    vec![
        person("1", "Ahmad").with_spouse("2"),
        person("2", "Jamilah").with_spouse("1"),
        person("3", "Along").with_parent("1").with_spouse("8"),
        person("8", "Ili").with_spouse("3"),
        person("5", "Cucu").with_parent("3"),
    ]
}

#[test]
fn depth_one_keeps_children_and_their_spouses_but_not_grandchildren() {
    let selected = select_family(&three_generations(), "1", 1);
    assert_eq!(ids(&selected), ["1", "2", "3", "8"]);
}

#[test]
fn depth_two_reaches_grandchildren() {
    let selected = select_family(&three_generations(), "1", 2);
    assert_eq!(ids(&selected), ["1", "2", "3", "8", "5"]);
}

#[test]
fn unknown_start_falls_back_to_the_full_snapshot() {
    let people = three_generations();
    let selected = select_family(&people, "nope", 3);
    assert_eq!(selected, people);
}

#[test]
fn children_anchored_to_the_spouse_are_collected() {
    // The child references the spouse's id, not the start person's.
    let people = vec![
        person("1", "Ahmad").with_spouse("2"),
        person("2", "Jamilah").with_spouse("1"),
        person("3", "Along").with_parent("2"),
    ];

    let selected = select_family(&people, "1", 1);
    assert_eq!(ids(&selected), ["1", "2", "3"]);
}

#[test]
fn shared_children_are_selected_once() {
    // One child anchored to each half of the couple; descent runs from
    // both halves without duplicating either child.
    let people = vec![
        person("1", "Ahmad").with_spouse("2"),
        person("2", "Jamilah").with_spouse("1"),
        person("3", "Along").with_parent("1"),
        person("4", "Angah").with_parent("2"),
    ];

    let selected = select_family(&people, "1", 2);
    assert_eq!(ids(&selected), ["1", "2", "3", "4"]);
}

#[test]
fn selection_order_is_stable_across_calls() {
    let people = three_generations();
    let first = select_family(&people, "1", 2);
    let second = select_family(&people, "1", 2);
    assert_eq!(first, second);
}

#[test]
fn scoped_selection_feeds_the_builder_with_one_root() {
    let selected = select_family(&three_generations(), "1", 2);
    let forest = build_forest(&selected);

    assert_eq!(forest.root_ids(), ["1".to_string()]);
    assert_eq!(forest.unit("1").unwrap().children, ["3".to_string()]);
    assert_eq!(forest.unit("3").unwrap().children, ["5".to_string()]);
}

#[test]
fn parent_cycle_terminates() {
    // Malformed input: 5's parent is 6 and 6's parent is 5. Selection
    // must terminate and pick each person once.
    let people = vec![
        person("1", "Ahmad"),
        person("5", "A").with_parent("1"),
        person("6", "B").with_parent("5"),
        person("7", "C").with_parent("6"),
    ];
    let mut cyclic = people.clone();
    cyclic[1].parent_id = Some("6".to_string());

    let selected = select_family(&cyclic, "5", 10);
    assert_eq!(ids(&selected), ["5", "6", "7"]);
}

#[test]
fn depth_bound_holds_on_a_long_chain() {
    let mut people = vec![person("0", "Gen0")];
    for generation in 1..6 {
        people.push(
            person(&generation.to_string(), &format!("Gen{generation}"))
                .with_parent(&(generation - 1).to_string()),
        );
    }

    let selected = select_family(&people, "0", 3);
    assert_eq!(ids(&selected), ["0", "1", "2", "3"]);
}

#[test]
fn descent_follows_a_dangling_spouse_reference() {
    // The spouse record itself is missing, but children anchored to the
    // spouse id still belong to the family.
    let people = vec![
        person("1", "Ahmad").with_spouse("2"),
        person("3", "Along").with_parent("2"),
    ];

    let selected = select_family(&people, "1", 1);
    assert_eq!(ids(&selected), ["1", "3"]);
}
