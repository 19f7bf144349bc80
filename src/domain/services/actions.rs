use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Author;
use crate::domain::models::BackendBox;
use crate::domain::models::BackendPrompt;
use crate::domain::models::BackendResponse;
use crate::domain::models::CompletionError;
use crate::domain::models::Event;

pub fn help_text() -> String {
    let text = r#"
명령어:
- /modellist (/ml) - 사용할 수 있는 모델 목록을 보여줍니다.
- /model (/m) [모델 이름, 모델 번호] - 모델을 변경합니다. 이름 또는 /modellist의 번호를 입력하세요.
- /reset (/clear) - 대화를 초기화합니다.
- /debug (/d) - 디버그 모드를 켜거나 끕니다. 켜져 있으면 옆 패널(좁은 화면에서는 대화창)에 API 요청 데이터가 표시됩니다.
- /quit /exit (/q) - 종료합니다.
- /help (/h) - 이 도움말을 보여줍니다.

단축키:
- 위 화살표 - 위로 스크롤
- 아래 화살표 - 아래로 스크롤
- CTRL+U - 한 페이지 위로
- CTRL+D - 한 페이지 아래로
- CTRL+C - 종료
        "#;

    return text.trim().to_string();
}

fn worker_error(err: anyhow::Error, tx: &mpsc::UnboundedSender<Event>) -> Result<()> {
    tracing::error!(error = ?err, "backend worker failed");
    tx.send(Event::BackendPromptResponse(BackendResponse {
        author: Author::Assistant,
        result: Err(CompletionError::Unexpected(err.to_string())),
        request: None,
    }))?;

    return Ok(());
}

async fn request(
    backend: &BackendBox,
    prompt: BackendPrompt,
    tx: &mpsc::UnboundedSender<Event>,
) -> Result<()> {
    if let Err(err) = backend.get_completion(prompt, tx).await {
        worker_error(err, tx)?;
    }

    return Ok(());
}

pub struct ActionsService {}

impl ActionsService {
    /// Processes actions one at a time until the UI drops its sender.
    pub async fn start(
        backend: BackendBox,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        while let Some(action) = rx.recv().await {
            match action {
                Action::BackendRequest(prompt) => {
                    request(&backend, prompt, &tx).await?;
                }
            }
        }

        return Ok(());
    }
}
