use pretty_assertions::assert_eq;
use tests::mappers::PersonMapper;
use tests::records::Person;
use tests::{tests, TestDb};

async fn registry_holds_statement_text(db: TestDb) {
    let mapper = PersonMapper::new(db.client().await).await.unwrap();

    assert_eq!(
        mapper.sql("Get"),
        Some("SELECT id, name, age FROM person WHERE id = $1")
    );
    assert_eq!(
        mapper.sql("Insert"),
        Some("INSERT INTO person (id, name, age) VALUES (default, $1, $2) RETURNING id")
    );
    assert_eq!(
        mapper.sql("Update"),
        Some("UPDATE person SET id = $1, name = $2, age = $3 WHERE id = $4")
    );
    assert_eq!(mapper.sql("Delete"), Some("DELETE FROM person WHERE id = $1"));
    assert_eq!(mapper.sql("All"), Some("SELECT id, name, age FROM person"));
    assert_eq!(mapper.sql("Upsert"), None);
}

async fn insert_assigns_generated_key(db: TestDb) {
    let mapper = PersonMapper::new(db.client().await).await.unwrap();

    let mut alice = Person::new("alice", 30);
    mapper.insert(&mut alice).await.unwrap();
    assert!(alice.id > 0);

    let mut bob = Person::new("bob", 40);
    mapper.insert(&mut bob).await.unwrap();
    assert_ne!(bob.id, alice.id);

    let loaded = mapper.get(&alice.id).await.unwrap();
    assert_eq!(loaded, alice);
}

async fn get_missing_row_fails(db: TestDb) {
    let mapper = PersonMapper::new(db.client().await).await.unwrap();

    assert!(mapper.get(&12345i32).await.is_err());
}

async fn update_writes_every_field(db: TestDb) {
    let mapper = PersonMapper::new(db.client().await).await.unwrap();

    let mut alice = Person::new("alice", 30);
    mapper.insert(&mut alice).await.unwrap();

    alice.name = "alice b.".to_string();
    alice.age = 31;
    assert_eq!(mapper.update(&alice).await.unwrap(), 1);

    assert_eq!(mapper.get(&alice.id).await.unwrap(), alice);
}

async fn missing_row_affects_nothing(db: TestDb) {
    let mapper = PersonMapper::new(db.client().await).await.unwrap();

    let ghost = Person {
        id: 12345,
        name: "ghost".to_string(),
        age: 99,
    };

    assert_eq!(mapper.update(&ghost).await.unwrap(), 0);
    assert_eq!(mapper.delete(&ghost).await.unwrap(), 0);
}

async fn delete_removes_row(db: TestDb) {
    let mapper = PersonMapper::new(db.client().await).await.unwrap();

    let mut alice = Person::new("alice", 30);
    mapper.insert(&mut alice).await.unwrap();

    assert_eq!(mapper.delete(&alice).await.unwrap(), 1);
    assert!(mapper.get(&alice.id).await.is_err());
    assert!(mapper.all().await.unwrap().is_empty());
}

async fn insert_many_assigns_every_key(db: TestDb) {
    let mut mapper = PersonMapper::new(db.client().await).await.unwrap();

    let mut people = vec![
        Person::new("alice", 30),
        Person::new("bob", 40),
        Person::new("carol", 50),
    ];
    mapper.insert_many(&mut people).await.unwrap();

    let mut ids: Vec<_> = people.iter().map(|person| person.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3);
    assert!(ids.iter().all(|id| *id > 0));

    let mut stored = mapper.all().await.unwrap();
    stored.sort_by_key(|person| person.id);
    people.sort_by_key(|person| person.id);
    assert_eq!(stored, people);
}

async fn insert_many_rolls_back_on_failure(db: TestDb) {
    let mut mapper = PersonMapper::new(db.client().await).await.unwrap();

    // `age` is constrained to be non-negative
    let mut people = vec![
        Person::new("alice", 30),
        Person::new("bob", -1),
        Person::new("carol", 50),
    ];
    assert!(mapper.insert_many(&mut people).await.is_err());

    assert!(mapper.all().await.unwrap().is_empty());
}

async fn insert_many_empty_slice(db: TestDb) {
    let mut mapper = PersonMapper::new(db.client().await).await.unwrap();

    mapper.insert_many(&mut []).await.unwrap();
    assert!(mapper.all().await.unwrap().is_empty());
}

async fn find_where_matches_client_side_filter(db: TestDb) {
    let mut mapper = PersonMapper::new(db.client().await).await.unwrap();

    let mut people = vec![
        Person::new("alice", 25),
        Person::new("bob", 35),
        Person::new("carol", 45),
    ];
    mapper.insert_many(&mut people).await.unwrap();

    let mut expected: Vec<_> = mapper
        .all()
        .await
        .unwrap()
        .into_iter()
        .filter(|person| person.age > 30)
        .collect();
    expected.sort_by_key(|person| person.id);

    let mut found = mapper.find_where("age > 30").await.unwrap();
    found.sort_by_key(|person| person.id);

    assert_eq!(found.len(), 2);
    assert_eq!(found, expected);
}

async fn find_where_with_binds_params(db: TestDb) {
    let mut mapper = PersonMapper::new(db.client().await).await.unwrap();

    let mut people = vec![
        Person::new("alice", 25),
        Person::new("bob", 35),
        Person::new("carol", 45),
    ];
    mapper.insert_many(&mut people).await.unwrap();

    let found = mapper
        .find_where_with("age > $1 AND name <> $2", &[&30i32, &"carol"])
        .await
        .unwrap();

    assert_eq!(found, [people[1].clone()]);
}

async fn malformed_filter_fails(db: TestDb) {
    let mapper = PersonMapper::new(db.client().await).await.unwrap();

    assert!(mapper.find_where("age >").await.is_err());
}

async fn new_fails_without_tables(db: TestDb) {
    let client = db.client().await;
    client.batch_execute("DROP TABLE person").await.unwrap();

    assert!(PersonMapper::new(client).await.is_err());
}

tests!(
    registry_holds_statement_text,
    insert_assigns_generated_key,
    get_missing_row_fails,
    update_writes_every_field,
    missing_row_affects_nothing,
    delete_removes_row,
    insert_many_assigns_every_key,
    insert_many_rolls_back_on_failure,
    insert_many_empty_slice,
    find_where_matches_client_side_filter,
    find_where_with_binds_params,
    malformed_filter_fails,
    new_fails_without_tables,
);
