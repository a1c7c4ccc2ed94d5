use dynform::{
    record,
    render::{Action, Binding, Control},
    schema::{FieldDef, FieldId},
    DisplayMode, FormSession, FormState, HostContext, Notice, Outcome, RecordId, Schema,
    Template,
};
use pretty_assertions::assert_eq;
use tests::{seed, tests, FormTest, TestHost};

async fn fill_resolved_template(test: &mut FormTest) {
    let forms = test.setup_forms().await;
    let template = Template::new(
        "Contact",
        Schema::from_fields([FieldDef::with_id(FieldId(1), "text").name("Email")]),
    );
    seed(&forms, "Business", 7, template.to_record().unwrap()).await;
    seed(
        &forms,
        "Business",
        42,
        record! { "Title" => "Acme", "templateId" => 7i64 },
    )
    .await;
    test.log().clear();

    let ctx = HostContext::new(DisplayMode::New).item(42u64);
    let mut session = FormSession::new(forms.clone(), ctx, TestHost::new());

    let view = session.view();
    assert_eq!(view.texts().collect::<Vec<_>>(), ["Loading template..."]);
    assert!(!view.offers(&Action::Submit));

    assert!(session.load().await);

    let view = session.view();
    let inputs: Vec<_> = view
        .walk()
        .filter_map(|control| match control {
            Control::TextInput { name, .. } => Some(name.clone()),
            Control::Select { .. } | Control::TextArea { .. } => Some(None),
            _ => None,
        })
        .collect();
    assert_eq!(inputs, [Some("Email".to_string())]);
    assert!(view.offers(&Action::Submit));

    assert!(session.change(Binding::Value(FieldId(1)), "a@b.com"));
    let Outcome::Submitted(key) = session.dispatch(Action::Submit).await.unwrap() else {
        panic!("expected the form to be submitted");
    };

    let mut log = test.log();
    let (op, _) = log.pop().unwrap();
    assert_eq!(op.as_get_by_key().unwrap().key, RecordId(42));
    let (op, _) = log.pop().unwrap();
    assert_eq!(op.as_get_by_key().unwrap().key, RecordId(7));
    let (op, resp) = log.pop().unwrap();
    let insert = op.as_insert().expect("expected an insert");
    assert_eq!(insert.list, "Business");
    assert_eq!(insert.record, record! { "Email" => "a@b.com" });
    assert_eq!(resp.unwrap().into_created().unwrap(), key);
    assert!(log.is_empty());

    assert_eq!(
        forms.get("Business", key).await.unwrap(),
        record! { "Email" => "a@b.com" }
    );

    let host = session.host();
    assert_eq!(host.notices, [Notice::FormSubmitted { id: key }]);
    assert_eq!(host.saves, 1);
}

async fn unknown_kind_renders_as_select(test: &mut FormTest) {
    let forms = test.setup_forms().await;
    seed(
        &forms,
        "Business",
        7,
        record! {
            "Title" => "Review",
            "fields" => vec![
                record! { "id" => 3i64, "name" => "Score", "type" => "rating", "options" => vec!["1", "2"] },
                record! { "name" => "Notes", "type" => "text" },
            ],
        },
    )
    .await;
    // Template ids stored as text are accepted too
    seed(&forms, "Business", 42, record! { "templateId" => "7" }).await;

    let ctx = HostContext::new(DisplayMode::Edit).item(42u64);
    let mut session = FormSession::new(forms.clone(), ctx, TestHost::new());
    session.load().await;

    let view = session.view();
    let select = view.walk().find_map(|control| match control {
        Control::Select {
            name,
            options,
            selected,
            ..
        } => Some((name.as_str(), options.len(), selected.clone())),
        _ => None,
    });
    assert_eq!(select, Some(("Score", 2, Some("1".to_string()))));

    // A select only takes one of its options
    assert!(!session.change(Binding::Value(FieldId(3)), "5"));
    assert!(session.change(Binding::Value(FieldId(3)), "2"));

    let Outcome::Submitted(key) = session.dispatch(Action::Submit).await.unwrap() else {
        panic!("expected the form to be submitted");
    };
    assert_eq!(
        forms.get("Business", key).await.unwrap(),
        record! { "Score" => "2", "Notes" => "" }
    );
}

async fn untyped_field_renders_as_select(test: &mut FormTest) {
    let forms = test.setup_forms().await;
    seed(
        &forms,
        "Business",
        7,
        record! {
            "Title" => "Loose",
            "fields" => vec![
                record! { "id" => 5i64, "name" => "Notes", "options" => vec!["x"] },
                record! { "id" => 6i64, "name" => "Score", "type" => 3i64 },
            ],
        },
    )
    .await;
    seed(&forms, "Business", 42, record! { "templateId" => 7i64 }).await;

    let ctx = HostContext::new(DisplayMode::New).item(42u64);
    let mut session = FormSession::new(forms, ctx, TestHost::new());
    assert!(session.load().await);
    assert!(session.renderer().state().is_ready());

    let view = session.view();
    assert_eq!(view.row_keys(), [FieldId(5), FieldId(6)]);
    let selects: Vec<_> = view
        .walk()
        .filter_map(|control| match control {
            Control::Select { name, options, .. } => Some((name.as_str(), options.len())),
            _ => None,
        })
        .collect();
    assert_eq!(selects, [("Notes", 1), ("Score", 0)]);
}

async fn submit_only_when_ready(test: &mut FormTest) {
    let forms = test.setup_forms().await;
    let ctx = HostContext::new(DisplayMode::New).item(42u64);
    let mut session = FormSession::new(forms, ctx, TestHost::new());

    assert!(session.renderer().state().is_loading());
    assert_eq!(
        session.dispatch(Action::Submit).await.unwrap(),
        Outcome::Ignored
    );

    session.load().await;
    assert!(matches!(session.renderer().state(), FormState::Error(_)));
    assert_eq!(
        session.dispatch(Action::Submit).await.unwrap(),
        Outcome::Ignored
    );

    let log = test.log();
    assert!(log.has_get_by_key());
    assert_eq!(log.count(|op| op.as_get_by_key().is_some()), 1);
    assert!(!log.has_insert());
}

async fn same_names_last_value_wins(test: &mut FormTest) {
    let forms = test.setup_forms().await;
    let template = Template::new(
        "Dupes",
        Schema::from_fields([
            FieldDef::with_id(FieldId(1), "text").name("Region"),
            FieldDef::with_id(FieldId(2), "choice")
                .name("Region")
                .options(["North", "South"]),
        ]),
    );
    seed(&forms, "Business", 7, template.to_record().unwrap()).await;
    seed(&forms, "Business", 42, record! { "templateId" => 7i64 }).await;

    let ctx = HostContext::new(DisplayMode::New).item(42u64);
    let mut session = FormSession::new(forms.clone(), ctx, TestHost::new());
    session.load().await;
    session.change(Binding::Value(FieldId(1)), "typed");
    session.change(Binding::Value(FieldId(2)), "South");

    let Outcome::Submitted(key) = session.dispatch(Action::Submit).await.unwrap() else {
        panic!("expected the form to be submitted");
    };
    assert_eq!(
        forms.get("Business", key).await.unwrap(),
        record! { "Region" => "South" }
    );
}

tests!(
    fill_resolved_template,
    unknown_kind_renders_as_select,
    untyped_field_renders_as_select,
    submit_only_when_ready,
    same_names_last_value_wins,
);
