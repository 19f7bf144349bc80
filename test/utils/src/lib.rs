use serde_json::json;

pub fn answer_fixture() -> &'static str {
    return r#"
증명서는 온라인으로 발급받을 수 있습니다. 자세한 내용은 https://www.gwnu.ac.kr/kr/7852/subview.do[1] 를 참고하세요.

학사 일정은 학교 홈페이지(https://www.gwnu.ac.kr)에서 확인할 수 있습니다[2].
"#
    .trim();
}

pub fn completion_body(content: &str) -> String {
    return json!({
        "id": "abc123",
        "model": "sonar-pro",
        "choices": [{
            "index": 0,
            "finish_reason": "stop",
            "message": {
                "role": "assistant",
                "content": content,
            },
        }],
    })
    .to_string();
}
