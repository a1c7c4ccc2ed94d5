use dynform::{
    async_trait,
    driver::{
        operation::{Insert, Operation},
        Driver, Response,
    },
    record,
    render::{Action, Binding},
    schema::FieldKind,
    DisplayMode, Error, FormSession, Forms, HostContext, Notice, PersistenceTarget, RecordId,
    Result, Template,
};
use dynform_driver_memory::Memory;
use pretty_assertions::assert_eq;
use std::borrow::Cow;
use tests::TestHost;

/// Serves reads from memory and fails every write.
#[derive(Debug)]
struct DiskFull(Memory);

#[async_trait]
impl Driver for DiskFull {
    fn url(&self) -> Cow<'_, str> {
        self.0.url()
    }

    async fn exec(&self, op: Operation) -> Result<Response> {
        match op {
            Operation::Insert(_) => Err(Error::driver_operation_failed(std::io::Error::new(
                std::io::ErrorKind::Other,
                "disk full",
            ))),
            op => self.0.exec(op).await,
        }
    }

    async fn reset_db(&self) -> Result<()> {
        self.0.reset_db().await
    }
}

#[tokio::test]
async fn template_save_failure_is_reported() {
    let forms = Forms::new(DiskFull(Memory::new()));
    let ctx = HostContext::new(DisplayMode::View);
    let mut session = FormSession::new(forms, ctx, TestHost::naming("Intake"));
    session
        .dispatch(Action::AddField(FieldKind::Text))
        .await
        .unwrap();

    let err = session.dispatch(Action::SaveTemplate).await.unwrap_err();
    assert!(err.is_persistence());
    assert_eq!(err.persistence_target(), Some(PersistenceTarget::Template));
    assert_eq!(err.to_string(), "failed to create template: disk full");

    let host = session.host();
    assert_eq!(
        host.notices,
        [Notice::Failed {
            message: "failed to create template: disk full".to_string()
        }]
    );
    assert_eq!(host.saves, 0);

    // The designer keeps its work
    assert_eq!(session.renderer().schema().map(|schema| schema.len()), Some(1));
}

#[tokio::test]
async fn submit_failure_is_reported() {
    let memory = Memory::new();
    let template = Template::new("Contact", dynform::Schema::new());
    for (key, record) in [
        (7, template.to_record().unwrap()),
        (42, record! { "templateId" => 7i64 }),
    ] {
        memory
            .exec(Insert::new("Business", record).with_key(RecordId(key)).into())
            .await
            .unwrap();
    }

    let forms = Forms::new(DiskFull(memory));
    let ctx = HostContext::new(DisplayMode::New).item(42u64);
    let mut session = FormSession::new(forms, ctx, TestHost::new());
    assert!(session.load().await);
    assert!(!session.change(Binding::Value(dynform::FieldId(1)), "x"));

    let err = session.dispatch(Action::Submit).await.unwrap_err();
    assert_eq!(err.persistence_target(), Some(PersistenceTarget::Record));
    assert_eq!(err.to_string(), "failed to create record: disk full");
    assert!(err.chain().any(Error::is_driver_operation_failed));

    assert_eq!(session.host().saves, 0);
    assert!(matches!(
        session.host().notices.as_slice(),
        [Notice::Failed { .. }]
    ));
    assert!(session.renderer().state().is_ready());
}
