use super::Author;
use super::collapse_completion;
use super::BackendResponse;
use super::CompletionError;

#[test]
fn it_formats_empty_response() {
    insta::assert_snapshot!(CompletionError::EmptyResponse.to_string(), @"응답을 처리하는 중 오류가 발생했습니다.");
}

#[test]
fn it_formats_transport_errors() {
    let err = CompletionError::Transport {
        message: "error sending request".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"API 요청 중 오류 발생: error sending request");
    assert_eq!(err.kind(), "transport");
}

#[test]
fn it_formats_status_errors_with_body() {
    let err = CompletionError::Status {
        message: "HTTP status client error (401 Unauthorized)".to_string(),
        body: Some(r#"{"error":{"message":"Invalid API key"}}"#.to_string()),
    };
    insta::assert_snapshot!(err.to_string(), @r###"
    API 요청 중 오류 발생: HTTP status client error (401 Unauthorized)
    상세: {"error":{"message":"Invalid API key"}}
    "###);
}

#[test]
fn it_formats_status_errors_without_body() {
    let err = CompletionError::Status {
        message: "HTTP status server error (502 Bad Gateway)".to_string(),
        body: None,
    };
    insta::assert_snapshot!(err.to_string(), @"API 요청 중 오류 발생: HTTP status server error (502 Bad Gateway)");
}

#[test]
fn it_formats_unexpected_errors() {
    let err = CompletionError::Unexpected("missing message content".to_string());
    insta::assert_snapshot!(err.to_string(), @"오류 발생: missing message content");
    assert_eq!(err.kind(), "unexpected");
}

#[test]
fn it_collapses_responses_to_text() {
    let ok = BackendResponse {
        author: Author::Assistant,
        result: Ok("Answer text".to_string()),
        request: None,
    };
    assert_eq!(ok.text(), "Answer text");

    let err = BackendResponse {
        author: Author::Assistant,
        result: Err(CompletionError::EmptyResponse),
        request: None,
    };
    assert_eq!(err.text(), "응답을 처리하는 중 오류가 발생했습니다.");
}

#[test]
fn it_collapses_results_to_text() {
    assert_eq!(collapse_completion(&Ok("답변".to_string())), "답변");
    assert_eq!(
        collapse_completion(&Err(CompletionError::Unexpected("no content".to_string()))),
        "오류 발생: no content"
    );
}
