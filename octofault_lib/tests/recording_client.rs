use octofault_lib::{Client, FaultLog, OctofaultError, RecordingClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const VALIDATION_BODY: &str = r#"{"errors":[{"code":"custom","field":"key","message":"key is already in use","resource":"PublicKey"}],"message":"Validation Failed"}"#;

fn open_log() -> FaultLog {
    let log = FaultLog::open_in_memory().unwrap();
    log.init().unwrap();
    log
}

async fn mount(mock_server: &MockServer, route: &str, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(template)
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn records_api_faults() {
    let mock_server = MockServer::start().await;
    mount(
        &mock_server,
        "/user/keys",
        ResponseTemplate::new(422).set_body_string(VALIDATION_BODY),
    )
    .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let recording = RecordingClient::new(client, Some(open_log()));

    let err = recording
        .get_json::<serde_json::Value>("/user/keys")
        .await
        .unwrap_err();
    assert_eq!(err.api_exception().unwrap().status_code(), Some(422));

    let log = recording.log().unwrap();
    assert_eq!(log.count().unwrap(), 1);

    let recent = log.recent(10).unwrap();
    assert_eq!(recent[0].source, "/user/keys");
    assert_eq!(recent[0].exception.status_code(), Some(422));
    assert_eq!(
        recent[0].exception.api_error().first_detail_message(),
        Some("key is already in use")
    );
}

#[tokio::test]
async fn success_is_not_recorded() {
    let mock_server = MockServer::start().await;
    mount(
        &mock_server,
        "/zen",
        ResponseTemplate::new(200).set_body_string(r#""Keep it logically awesome.""#),
    )
    .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let recording = RecordingClient::new(client, Some(open_log()));

    let zen: String = recording.get_json("/zen").await.unwrap();
    assert_eq!(zen, "Keep it logically awesome.");
    assert_eq!(recording.log().unwrap().count().unwrap(), 0);
}

#[tokio::test]
async fn transport_failures_are_not_recorded() {
    let client = Client::with_base_url("not a url").unwrap();
    let recording = RecordingClient::new(client, Some(open_log()));

    let err = recording
        .get_json::<serde_json::Value>("/user/keys")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        OctofaultError::Api(octofault_lib::octofault_api::Error::RequestFailed)
    ));
    assert!(err.api_exception().is_none());
    assert_eq!(recording.log().unwrap().count().unwrap(), 0);
}

#[tokio::test]
async fn faults_pass_through_without_log() {
    let mock_server = MockServer::start().await;
    mount(
        &mock_server,
        "/repos/octocat/missing",
        ResponseTemplate::new(404).set_body_string(r#"{"message":"Not Found"}"#),
    )
    .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let recording = RecordingClient::new(client, None);

    let err = recording
        .get_json::<serde_json::Value>("/repos/octocat/missing")
        .await
        .unwrap_err();
    assert!(err.api_exception().unwrap().is_not_found());
    assert_eq!(err.to_string(), "API error: Not Found");
    assert!(recording.log().is_none());
}

#[tokio::test]
async fn log_write_failure_keeps_api_fault() {
    let mock_server = MockServer::start().await;
    mount(
        &mock_server,
        "/user/keys",
        ResponseTemplate::new(422).set_body_string(VALIDATION_BODY),
    )
    .await;

    // No init(), so the faults table does not exist and every insert fails.
    let log = FaultLog::open_in_memory().unwrap();
    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let recording = RecordingClient::new(client, Some(log));

    let err = recording
        .get_json::<serde_json::Value>("/user/keys")
        .await
        .unwrap_err();

    assert!(matches!(err, OctofaultError::Api(_)));
    let exception = err.api_exception().expect("API fault should survive");
    assert_eq!(exception.status_code(), Some(422));
    assert_eq!(exception.message(), "Validation Failed");
}
