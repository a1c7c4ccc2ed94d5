use dynform::{
    record,
    render::{Action, Binding},
    schema::FieldKind,
    DisplayMode, FormSession, HostContext, Notice, Outcome, Template,
};
use pretty_assertions::assert_eq;
use tests::{tests, FormTest, TestHost};

async fn save_choice_template(test: &mut FormTest) {
    let forms = test.setup_forms().await;
    let ctx = HostContext::new(DisplayMode::View);
    let mut session = FormSession::new(forms.clone(), ctx, TestHost::naming("Intake"));

    let outcome = session
        .dispatch(Action::AddField(FieldKind::Choice))
        .await
        .unwrap();
    assert_eq!(outcome, Outcome::Updated);

    let id = session.view().row_keys()[0];
    assert!(session.change(Binding::Name(id), "Region"));
    assert!(session.change(Binding::Options(id), "North,South"));

    let Outcome::TemplateSaved(key) = session.dispatch(Action::SaveTemplate).await.unwrap() else {
        panic!("expected the template to be saved");
    };

    let inserts = test.log().inserts();
    assert_eq!(inserts.len(), 1);
    assert_eq!(inserts[0].list, "Business");
    assert_eq!(
        inserts[0].record,
        record! {
            "Title" => "Intake",
            "fields" => vec![record! {
                "id" => id.0 as i64,
                "name" => "Region",
                "type" => "choice",
                "options" => vec!["North", "South"],
            }],
        }
    );

    let host = session.host();
    assert_eq!(host.prompts, 1);
    assert_eq!(host.notices, [Notice::TemplateSaved { id: key }]);
    assert_eq!(host.saves, 1);

    // The stored template reads back as the schema that was designed
    let stored = forms.get("Business", key).await.unwrap();
    let schema = session.renderer().schema().unwrap().clone();
    assert_eq!(
        Template::from_record(&stored).unwrap(),
        Template::new("Intake", schema)
    );
}

async fn designed_template_fills(test: &mut FormTest) {
    let forms = test.setup_forms().await;
    let ctx = HostContext::new(DisplayMode::View);
    let mut designer = FormSession::new(forms.clone(), ctx, TestHost::naming("Intake"));

    designer
        .dispatch(Action::AddField(FieldKind::Text))
        .await
        .unwrap();
    designer
        .dispatch(Action::AddField(FieldKind::Choice))
        .await
        .unwrap();
    let ids = designer.view().row_keys();
    designer.change(Binding::Name(ids[0]), "Email");
    designer.change(Binding::Name(ids[1]), "Region");
    designer.change(Binding::Options(ids[1]), "North,South");

    let Outcome::TemplateSaved(template) = designer.dispatch(Action::SaveTemplate).await.unwrap()
    else {
        panic!("expected the template to be saved");
    };
    let item = forms
        .create("Business", record! { "templateId" => template.0 as i64 })
        .await
        .unwrap();

    let ctx = HostContext::new(DisplayMode::New).item(item);
    let mut filler = FormSession::new(forms.clone(), ctx, TestHost::new());
    assert!(filler.load().await);
    assert_eq!(filler.renderer().schema(), designer.renderer().schema());
    assert_eq!(filler.view().row_keys(), ids);

    filler.change(Binding::Value(ids[0]), "a@b.com");
    filler.change(Binding::Value(ids[1]), "South");
    let Outcome::Submitted(key) = filler.dispatch(Action::Submit).await.unwrap() else {
        panic!("expected the form to be submitted");
    };
    assert_eq!(
        forms.get("Business", key).await.unwrap(),
        record! { "Email" => "a@b.com", "Region" => "South" }
    );
}

async fn save_keeps_field_order(test: &mut FormTest) {
    let forms = test.setup_forms().await;
    let ctx = HostContext::new(DisplayMode::Display);
    let mut session = FormSession::new(forms.clone(), ctx, TestHost::naming("Order"));

    for kind in [FieldKind::Text, FieldKind::Choice, FieldKind::Text] {
        session.dispatch(Action::AddField(kind)).await.unwrap();
    }
    let ids = session.view().row_keys();
    for (id, name) in ids.iter().zip(["A", "B", "C"]) {
        session.change(Binding::Name(*id), name);
    }

    let outcome = session
        .dispatch(Action::MoveField { id: ids[2], to: 0 })
        .await
        .unwrap();
    assert_eq!(outcome, Outcome::Updated);

    let Outcome::TemplateSaved(key) = session.dispatch(Action::SaveTemplate).await.unwrap() else {
        panic!("expected the template to be saved");
    };

    let stored = forms.get("Business", key).await.unwrap();
    let names: Vec<_> = Template::fields_of(&stored)
        .unwrap()
        .iter()
        .map(|field| field.name.clone())
        .collect();
    assert_eq!(names, ["C", "A", "B"]);
}

async fn empty_name_cancels_save(test: &mut FormTest) {
    let forms = test.setup_forms().await;

    for answer in [None, Some(String::new())] {
        let host = TestHost {
            template_name: answer,
            ..TestHost::new()
        };
        let ctx = HostContext::new(DisplayMode::View);
        let mut session = FormSession::new(forms.clone(), ctx, host);
        session
            .dispatch(Action::AddField(FieldKind::Text))
            .await
            .unwrap();

        let outcome = session.dispatch(Action::SaveTemplate).await.unwrap();
        assert_eq!(outcome, Outcome::SaveCancelled);

        let host = session.host();
        assert_eq!(host.prompts, 1);
        assert!(host.notices.is_empty());
        assert_eq!(host.saves, 0);
    }

    assert!(!test.log().has_insert());
}

async fn whitespace_name_is_a_name(test: &mut FormTest) {
    let forms = test.setup_forms().await;
    let ctx = HostContext::new(DisplayMode::View);
    let mut session = FormSession::new(forms.clone(), ctx, TestHost::naming("  "));

    let outcome = session.dispatch(Action::SaveTemplate).await.unwrap();
    assert!(matches!(outcome, Outcome::TemplateSaved(_)));

    let inserts = test.log().inserts();
    assert_eq!(
        inserts[0].record,
        record! { "Title" => "  ", "fields" => Vec::<String>::new() }
    );
}

async fn fill_mode_does_not_save_templates(test: &mut FormTest) {
    let forms = test.setup_forms().await;
    let ctx = HostContext::new(DisplayMode::Edit).item(42u64);
    let mut session = FormSession::new(forms, ctx, TestHost::naming("Nope"));

    let outcome = session.dispatch(Action::SaveTemplate).await.unwrap();
    assert_eq!(outcome, Outcome::Ignored);
    assert_eq!(session.host().prompts, 0);
    assert!(test.log().is_empty());
}

async fn close_is_forwarded_to_the_host(test: &mut FormTest) {
    let forms = test.setup_forms().await;
    let ctx = HostContext::new(DisplayMode::View);
    let mut session = FormSession::new(forms, ctx, TestHost::new());

    assert_eq!(
        session.dispatch(Action::Close).await.unwrap(),
        Outcome::Closed
    );
    assert_eq!(session.host().closes, 1);
    assert_eq!(session.host().saves, 0);
}

tests!(
    save_choice_template,
    designed_template_fills,
    save_keeps_field_order,
    empty_name_cancels_save,
    whitespace_name_is_a_name,
    fill_mode_does_not_save_templates,
    close_is_forwarded_to_the_host,
);
